use crate::dungeon::Corridor;
use crate::room::Room;

/// Hooks into dungeon generation. Every method defaults to a no-op.
pub trait GenerationObserver {
    fn on_room_grown(&mut self, _room: &Room) {}
    fn on_hole_rejected(&mut self, _attempt: u32) {}
    fn on_doors_clamped(&mut self, _requested: u32, _available: u32) {}
    fn on_room_placed(&mut self, _index: usize, _room: &Room) {}
    fn on_corridor_carved(&mut self, _corridor: &Corridor) {}
}

pub struct NoOpGenerationObserver;
impl GenerationObserver for NoOpGenerationObserver {}
