#![no_std]

extern crate alloc;

pub mod aabb;
pub mod border;
pub mod config;
pub mod coord;
pub mod dungeon;
pub mod error;
pub mod export;
pub mod flood;
pub mod neighborhood;
pub mod observer;
pub mod pathfind;
pub mod placement;
pub mod room;

pub use aabb::Aabb2;
pub use border::{Border, BorderId, Segment, WallKey};
pub use config::{CountRange, GenerationConfig};
pub use coord::Coord2;
pub use dungeon::{generate, generate_observed, Corridor, DoorRef, Dungeon, GenerationFailure};
pub use error::DungeonError;
pub use export::{
    corridor_geometry, dungeon_geometry, room_geometry, room_outline, CorridorGeometry,
    DungeonGeometry, Point2, RoomGeometry,
};
pub use flood::{flood_fill, is_connected, FloodResult};
pub use neighborhood::Side;
pub use observer::{GenerationObserver, NoOpGenerationObserver};
pub use pathfind::{shortest_path, PathResult};
pub use placement::{Placement, PlacementSearch, Transform};
pub use room::{Block, Room};
