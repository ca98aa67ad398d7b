use alloc::vec::Vec;

use hashbrown::HashSet;
use rand::Rng;
use thiserror::Error;

use crate::aabb::Aabb2;
use crate::border::{Border, BorderId};
use crate::config::GenerationConfig;
use crate::coord::Coord2;
use crate::error::DungeonError;
use crate::observer::{GenerationObserver, NoOpGenerationObserver};
use crate::pathfind::shortest_path;
use crate::placement::PlacementSearch;
use crate::room::Room;

/// A border of a placed room, addressed by room index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoorRef {
    pub room: usize,
    pub border: BorderId,
}

/// Path of empty cells joining two doors, from the cell outside `start` to
/// the cell outside `stop`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Corridor {
    pub start: DoorRef,
    pub stop: DoorRef,
    pub cost: u32,
    pub path: Vec<Coord2>,
}

/// Rooms and corridors, only ever appended to.
#[derive(Clone, Debug, Default)]
pub struct Dungeon {
    rooms: Vec<Room>,
    corridors: Vec<Corridor>,
    occupancy: HashSet<Coord2>,
    corridor_cells: HashSet<Coord2>,
}

impl Dungeon {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[inline]
    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    pub fn door(&self, door: DoorRef) -> Option<&Border> {
        self.rooms.get(door.room)?.border(door.border)
    }

    #[inline]
    pub fn is_occupied(&self, cell: Coord2) -> bool {
        self.occupancy.contains(&cell)
    }

    #[inline]
    pub fn is_corridor(&self, cell: Coord2) -> bool {
        self.corridor_cells.contains(&cell)
    }

    /// Doors not yet holding a corridor, rooms in creation order.
    pub fn unused_doors(&self) -> impl Iterator<Item = (DoorRef, &Border)> + '_ {
        self.rooms.iter().enumerate().flat_map(|(room, r)| {
            r.unused_doors()
                .map(move |(border, b)| (DoorRef { room, border }, b))
        })
    }

    /// Cells covered by rooms and corridors, or `None` while empty.
    pub fn bounds(&self) -> Option<Aabb2> {
        let rooms = self.rooms.iter().map(Room::bounds).reduce(Aabb2::union)?;
        Some(
            self.corridor_cells
                .iter()
                .fold(rooms, |acc, &c| acc.include(c)),
        )
    }

    /// Grows, doors and places one more room.
    pub fn expand(
        &mut self,
        config: &GenerationConfig,
        rng: &mut impl Rng,
    ) -> Result<usize, DungeonError> {
        self.expand_observed(config, rng, &mut NoOpGenerationObserver)
    }

    pub fn expand_observed(
        &mut self,
        config: &GenerationConfig,
        rng: &mut impl Rng,
        observer: &mut impl GenerationObserver,
    ) -> Result<usize, DungeonError> {
        config.validate()?;
        let mut room = grow_hole_free(config, rng, observer)?;
        let requested = config.doors.sample(rng);
        let placed = room.place_doors(requested, rng);
        if placed < requested {
            observer.on_doors_clamped(requested, placed);
        }
        self.place_observed(room, config.max_intersection_radius, observer)
    }

    /// Adds `room` to the dungeon. The first room goes in as is; later ones
    /// are sited by [`PlacementSearch`] and joined by a corridor no longer
    /// than the ring distance of their placement.
    pub fn place(&mut self, room: Room, max_radius: u32) -> Result<usize, DungeonError> {
        self.place_observed(room, max_radius, &mut NoOpGenerationObserver)
    }

    pub fn place_observed(
        &mut self,
        mut room: Room,
        max_radius: u32,
        observer: &mut impl GenerationObserver,
    ) -> Result<usize, DungeonError> {
        let index = self.rooms.len();
        if self.rooms.is_empty() {
            room.set_color(index as u32);
            self.push_room(room);
            log::debug!("placed first room of {} blocks", self.rooms[index].len());
            observer.on_room_placed(index, &self.rooms[index]);
            return Ok(index);
        }

        let found = PlacementSearch::new(self, &room, max_radius).find_map(|placement| {
            let placed = room.transformed(&placement.transform);
            let from = self.door(placement.anchor)?.outside();
            let to = placed.border(placement.placed_door())?.outside();
            let route = shortest_path(from, to, placement.distance + 1, |c| {
                self.is_occupied(c) || placed.contains(c)
            })?;
            Some((placement, placed, route))
        });

        let Some((placement, mut placed, route)) = found else {
            log::warn!(
                "room {} of {} blocks found no placement within radius {}",
                index,
                room.len(),
                max_radius
            );
            return Err(DungeonError::CannotPlace {
                room: index,
                radius: max_radius,
            });
        };

        let stop = DoorRef {
            room: index,
            border: placement.placed_door(),
        };
        placed.mark_used(stop.border)?;
        placed.set_color(index as u32);
        self.rooms
            .get_mut(placement.anchor.room)
            .ok_or(DungeonError::UnknownBorder {
                border: placement.anchor.border,
            })?
            .mark_used(placement.anchor.border)?;

        self.push_room(placed);
        self.corridor_cells.extend(route.path.iter().copied());
        self.corridors.push(Corridor {
            start: placement.anchor,
            stop,
            cost: route.cost,
            path: route.path,
        });

        log::debug!(
            "placed room {} at distance {} with a corridor of cost {}",
            index,
            placement.distance,
            route.cost
        );
        observer.on_room_placed(index, &self.rooms[index]);
        if let Some(corridor) = self.corridors.last() {
            observer.on_corridor_carved(corridor);
        }
        Ok(index)
    }

    fn push_room(&mut self, room: Room) {
        self.occupancy.extend(room.cells());
        self.rooms.push(room);
    }
}

fn grow_hole_free(
    config: &GenerationConfig,
    rng: &mut impl Rng,
    observer: &mut impl GenerationObserver,
) -> Result<Room, DungeonError> {
    for attempt in 1..=config.max_hole_retries {
        let blocks = config.blocks.sample(rng);
        let room = Room::grow(blocks, rng)?;
        observer.on_room_grown(&room);
        if !room.has_holes() {
            return Ok(room);
        }
        log::trace!("attempt {attempt}: room of {blocks} blocks has holes, regrowing");
        observer.on_hole_rejected(attempt);
    }
    Err(DungeonError::HoleRetriesExhausted {
        attempts: config.max_hole_retries,
    })
}

/// A run that stopped early, with everything placed before the failure.
#[derive(Error, Debug)]
#[error("generation stopped early: {error}")]
pub struct GenerationFailure {
    pub error: DungeonError,
    pub partial: Dungeon,
}

/// Builds a dungeon of `config.room_count` rooms.
pub fn generate(
    config: &GenerationConfig,
    rng: &mut impl Rng,
) -> Result<Dungeon, GenerationFailure> {
    generate_observed(config, rng, &mut NoOpGenerationObserver)
}

pub fn generate_observed(
    config: &GenerationConfig,
    rng: &mut impl Rng,
    observer: &mut impl GenerationObserver,
) -> Result<Dungeon, GenerationFailure> {
    let mut dungeon = Dungeon::new();
    if let Err(error) = config.validate() {
        return Err(GenerationFailure {
            error,
            partial: dungeon,
        });
    }
    for _ in 0..config.room_count {
        if let Err(error) = dungeon.expand_observed(config, rng, observer) {
            return Err(GenerationFailure {
                error,
                partial: dungeon,
            });
        }
    }
    log::debug!(
        "generated {} rooms and {} corridors",
        dungeon.rooms.len(),
        dungeon.corridors.len()
    );
    Ok(dungeon)
}
