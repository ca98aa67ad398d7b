use thiserror::Error;

use crate::border::BorderId;
use crate::coord::Coord2;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DungeonError {
    /// Growth found no free cell next to the room. Cannot happen for a
    /// finite room on the unbounded grid.
    #[error("room has no free cell to grow into")]
    EmptyFrontier,

    #[error("no hole-free room after {attempts} attempts")]
    HoleRetriesExhausted { attempts: u32 },

    #[error("room {room} cannot be placed within radius {radius}")]
    CannotPlace { room: usize, radius: u32 },

    #[error("invalid generation config: {0}")]
    InvalidConfig(&'static str),

    #[error("block already present at ({}, {})", .cell.x, .cell.y)]
    DuplicateBlock { cell: Coord2 },

    #[error("border {border:?} is internal and cannot be a door")]
    InternalDoor { border: BorderId },

    #[error("border {border:?} does not belong to the room")]
    UnknownBorder { border: BorderId },
}
