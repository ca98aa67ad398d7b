//! Siting a candidate room next to the dungeon.
//!
//! The search never touches the candidate itself. It walks rings of target
//! cells around each free door of the dungeon and yields [`Transform`]s
//! (a quarter-turn count plus an offset) under which the candidate keeps a
//! one-cell clearance from every room already placed.

use alloc::vec::Vec;

use crate::aabb::Aabb2;
use crate::border::BorderId;
use crate::coord::Coord2;
use crate::dungeon::{DoorRef, Dungeon};
use crate::neighborhood::Side;
use crate::room::Room;

/// Rotate `rotation` quarter turns clockwise about the origin, then shift
/// by `offset`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Transform {
    pub rotation: u8,
    pub offset: Coord2,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        rotation: 0,
        offset: Coord2::ZERO,
    };

    pub const fn new(rotation: u8, offset: Coord2) -> Self {
        Self {
            rotation: rotation % 4,
            offset,
        }
    }

    pub const fn rotation(turns: u8) -> Self {
        Self::new(turns, Coord2::ZERO)
    }

    pub const fn translation(offset: Coord2) -> Self {
        Self::new(0, offset)
    }

    #[inline]
    pub fn apply(&self, c: Coord2) -> Coord2 {
        c.rotate_cw_times(self.rotation) + self.offset
    }

    #[inline]
    pub fn apply_side(&self, side: Side) -> Side {
        side.rotate_cw_times(self.rotation)
    }

    /// Handle of the same border once the room has been transformed.
    #[inline]
    pub fn border_id(&self, id: BorderId) -> BorderId {
        BorderId::new(id.block, self.apply_side(id.side))
    }
}

/// One way to put the candidate down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Ring distance between the two door exteriors.
    pub distance: u32,
    /// Free dungeon door the corridor leaves from.
    pub anchor: DoorRef,
    /// Candidate door, in the candidate's own frame.
    pub door: BorderId,
    /// Cell where the candidate door's exterior lands.
    pub target: Coord2,
    pub transform: Transform,
}

impl Placement {
    /// The candidate door after the transform is applied.
    pub fn placed_door(&self) -> BorderId {
        self.transform.border_id(self.door)
    }
}

struct Orientation {
    cells: Vec<Coord2>,
    padding: Vec<Coord2>,
    padding_bounds: Aabb2,
}

impl Orientation {
    fn new(room: &Room, rotation: u8) -> Self {
        let turned = room.transformed(&Transform::rotation(rotation));
        let padding: Vec<Coord2> = turned.padding().into_iter().collect();
        Self {
            cells: turned.cells().collect(),
            padding_bounds: turned.bounds().padded(1),
            padding,
        }
    }
}

/// Lazy enumeration of [`Placement`]s: by distance from `0` to the radius,
/// then dungeon door, then candidate door, then ring cell, then rotation.
pub struct PlacementSearch<'a> {
    dungeon: &'a Dungeon,
    dungeon_bounds: Option<Aabb2>,
    anchors: Vec<(DoorRef, Coord2)>,
    doors: Vec<(BorderId, Coord2)>,
    orientations: [Orientation; 4],
    max_radius: u32,
    distance: u32,
    anchor: usize,
    door: usize,
    point: usize,
    rotation: u8,
    ring: Vec<Coord2>,
    ring_for: Option<(u32, usize)>,
}

impl<'a> PlacementSearch<'a> {
    pub fn new(dungeon: &'a Dungeon, candidate: &Room, max_radius: u32) -> Self {
        let anchors = dungeon
            .unused_doors()
            .map(|(door, border)| (door, border.outside()))
            .collect();
        let doors = candidate
            .doors()
            .map(|(id, border)| (id, border.outside()))
            .collect();
        Self {
            dungeon,
            dungeon_bounds: dungeon.bounds(),
            anchors,
            doors,
            orientations: [0, 1, 2, 3].map(|r| Orientation::new(candidate, r)),
            max_radius,
            distance: 0,
            anchor: 0,
            door: 0,
            point: 0,
            rotation: 0,
            ring: Vec::new(),
            ring_for: None,
        }
    }

    fn try_place(&self, target: Coord2) -> Option<Placement> {
        let (door, outside) = self.doors[self.door];
        let rotation = self.rotation;
        let turned_outside = Transform::rotation(rotation).apply(outside);
        let transform = Transform::new(rotation, target - turned_outside);
        let orientation = &self.orientations[rotation as usize];

        let padding_bounds = Aabb2::new(
            orientation.padding_bounds.min + transform.offset,
            orientation.padding_bounds.max + transform.offset,
        );
        let near = self
            .dungeon_bounds
            .is_some_and(|b| b.intersects(&padding_bounds));
        if near {
            let touches_room = orientation
                .padding
                .iter()
                .any(|&c| self.dungeon.is_occupied(c + transform.offset));
            let covers_corridor = orientation
                .cells
                .iter()
                .any(|&c| self.dungeon.is_corridor(c + transform.offset));
            if touches_room || covers_corridor {
                return None;
            }
        }

        Some(Placement {
            distance: self.distance,
            anchor: self.anchors[self.anchor].0,
            door,
            target,
            transform,
        })
    }
}

impl Iterator for PlacementSearch<'_> {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        loop {
            if self.distance > self.max_radius {
                return None;
            }
            if self.anchor >= self.anchors.len() {
                self.distance += 1;
                self.anchor = 0;
                self.door = 0;
                continue;
            }
            if self.door >= self.doors.len() {
                self.anchor += 1;
                self.door = 0;
                self.point = 0;
                self.rotation = 0;
                continue;
            }
            if self.ring_for != Some((self.distance, self.anchor)) {
                self.ring = self.anchors[self.anchor].1.ring(self.distance);
                self.ring_for = Some((self.distance, self.anchor));
                self.point = 0;
                self.rotation = 0;
            }
            if self.point >= self.ring.len() {
                self.door += 1;
                self.point = 0;
                self.rotation = 0;
                continue;
            }

            let target = self.ring[self.point];
            if self.rotation >= 4 || self.dungeon.is_occupied(target) {
                self.point += 1;
                self.rotation = 0;
                continue;
            }

            let placement = self.try_place(target);
            self.rotation += 1;
            if let Some(placement) = placement {
                log::trace!(
                    "placement candidate at distance {} via {:?}",
                    placement.distance,
                    placement.transform
                );
                return Some(placement);
            }
        }
    }
}
