//! Read-only geometry for renderers: room outlines as chained wall
//! segments, door segments, and corridor polylines.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::aabb::Aabb2;
use crate::border::Segment;
use crate::coord::Coord2;
use crate::dungeon::{Corridor, Dungeon};
use crate::room::Room;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn cell_center(c: Coord2) -> Self {
        Self::new(c.x as f32 + 0.5, c.y as f32 + 0.5)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomGeometry {
    /// Outer walls, chained: each segment ends where the next begins, and
    /// each loop ends where it started.
    pub outline: Vec<Segment>,
    pub doors: Vec<Segment>,
    pub color: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorridorGeometry {
    pub points: Vec<Point2>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonGeometry {
    pub rooms: Vec<RoomGeometry>,
    pub corridors: Vec<CorridorGeometry>,
    pub bounds: Option<Aabb2>,
}

/// External walls of `room` ordered loop by loop.
pub fn room_outline(room: &Room) -> Vec<Segment> {
    let segments: Vec<Segment> = room.external_borders().map(|(_, b)| b.segment()).collect();
    let by_start: HashMap<Coord2, usize> = segments
        .iter()
        .enumerate()
        .map(|(i, s)| (s.start, i))
        .collect();

    let mut visited = alloc::vec![false; segments.len()];
    let mut out = Vec::with_capacity(segments.len());
    for first in 0..segments.len() {
        let mut current = first;
        while !visited[current] {
            visited[current] = true;
            out.push(segments[current]);
            match by_start.get(&segments[current].end) {
                Some(&next) => current = next,
                None => break,
            }
        }
    }
    out
}

pub fn room_geometry(room: &Room) -> RoomGeometry {
    RoomGeometry {
        outline: room_outline(room),
        doors: room.doors().map(|(_, b)| b.segment()).collect(),
        color: room.color(),
    }
}

/// Door midpoint, path cell centres, door midpoint. `None` if a door
/// handle does not resolve in `dungeon`.
pub fn corridor_geometry(dungeon: &Dungeon, corridor: &Corridor) -> Option<CorridorGeometry> {
    let (sx, sy) = dungeon.door(corridor.start)?.segment().midpoint();
    let (ex, ey) = dungeon.door(corridor.stop)?.segment().midpoint();
    let mut points = Vec::with_capacity(corridor.path.len() + 2);
    points.push(Point2::new(sx, sy));
    points.extend(corridor.path.iter().copied().map(Point2::cell_center));
    points.push(Point2::new(ex, ey));
    Some(CorridorGeometry { points })
}

pub fn dungeon_geometry(dungeon: &Dungeon) -> DungeonGeometry {
    DungeonGeometry {
        rooms: dungeon.rooms().iter().map(room_geometry).collect(),
        corridors: dungeon
            .corridors()
            .iter()
            .filter_map(|c| corridor_geometry(dungeon, c))
            .collect(),
        bounds: dungeon.bounds(),
    }
}

impl Dungeon {
    /// Shorthand for [`dungeon_geometry`].
    pub fn geometry(&self) -> DungeonGeometry {
        dungeon_geometry(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::BorderId;
    use crate::neighborhood::Side;

    fn assert_chained(outline: &[Segment]) {
        let mut loop_start = 0;
        for i in 0..outline.len() {
            let closes = outline[i].end == outline[loop_start].start;
            if closes {
                loop_start = i + 1;
            } else {
                assert_eq!(outline[i].end, outline[i + 1].start);
            }
        }
        assert_eq!(loop_start, outline.len(), "last loop left open");
    }

    #[test]
    fn single_block_outline() {
        let outline = room_outline(&Room::new());
        assert_eq!(outline.len(), 4);
        assert_eq!(outline[0].start, Coord2::new(0, 0));
        assert_chained(&outline);
    }

    #[test]
    fn l_shape_outline() {
        let room = Room::from_cells(&[Coord2::new(0, 0), Coord2::new(1, 0), Coord2::new(1, 1)]).unwrap();
        let outline = room_outline(&room);
        assert_eq!(outline.len(), 8);
        assert_chained(&outline);
    }

    #[test]
    fn corridor_polyline() {
        let mut first = Room::new();
        first.set_door(BorderId::new(0, Side::Right)).unwrap();
        let mut second = Room::new();
        second.set_door(BorderId::new(0, Side::Left)).unwrap();

        let mut dungeon = Dungeon::new();
        dungeon.place(first, 2).unwrap();
        dungeon.place(second, 2).unwrap();

        let geometry = dungeon.geometry();
        assert_eq!(geometry, dungeon_geometry(&dungeon));
        assert_eq!(geometry.rooms.len(), 2);
        assert_eq!(geometry.rooms[1].color, 1);
        assert_eq!(geometry.rooms[0].doors.len(), 1);
        assert_eq!(geometry.corridors.len(), 1);
        let points = &geometry.corridors[0].points;
        assert_eq!(points.len(), dungeon.corridors()[0].path.len() + 2);
        assert_eq!(points[0], Point2::new(1.0, 0.5));
        assert_eq!(points[1], Point2::new(1.5, 0.5));
        assert_eq!(points[2], Point2::new(2.0, 0.5));
    }
}
