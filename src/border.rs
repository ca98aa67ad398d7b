use crate::coord::Coord2;
use crate::neighborhood::Side;

/// Stable handle to a border within its room: the owning block's index in
/// growth order plus the side. Transforms keep block order, so a handle
/// taken before a rotation names the rotated border after it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderId {
    pub block: u32,
    pub side: Side,
}

impl BorderId {
    pub const fn new(block: u32, side: Side) -> Self {
        Self { block, side }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Canonical name of a physical wall. A border and its mirror share a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallKey {
    pub origin: Coord2,
    pub axis: Axis,
}

/// Wall segment between two lattice points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: Coord2,
    pub end: Coord2,
}

impl Segment {
    /// Midpoint in cell units.
    pub fn midpoint(&self) -> (f32, f32) {
        (
            (self.start.x + self.end.x) as f32 / 2.0,
            (self.start.y + self.end.y) as f32 / 2.0,
        )
    }
}

/// One side of one block. Equality of position and side only is exposed
/// through [`Border::is_mirror_of`] and [`Border::key`]; the flags are state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Border {
    pub cell: Coord2,
    pub side: Side,
    /// Shared with another block of the same room.
    pub internal: bool,
    pub is_door: bool,
    /// Consumed as a corridor endpoint.
    pub used: bool,
}

impl Border {
    pub const fn new(cell: Coord2, side: Side) -> Self {
        Self {
            cell,
            side,
            internal: false,
            is_door: false,
            used: false,
        }
    }

    /// The border of the adjacent cell lying on the same wall.
    #[inline]
    pub fn mirror(&self) -> Border {
        Border::new(self.outside(), self.side.opposite())
    }

    #[inline]
    pub fn is_mirror_of(&self, other: &Border) -> bool {
        self.cell == other.outside() && self.side == other.side.opposite()
    }

    /// The cell on the far side of this wall.
    #[inline]
    pub fn outside(&self) -> Coord2 {
        self.cell + self.side.offset()
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        !self.internal
    }

    pub fn key(&self) -> WallKey {
        match self.side {
            Side::Left => WallKey {
                origin: self.cell,
                axis: Axis::Vertical,
            },
            Side::Right => WallKey {
                origin: self.outside(),
                axis: Axis::Vertical,
            },
            Side::Down => WallKey {
                origin: self.cell,
                axis: Axis::Horizontal,
            },
            Side::Up => WallKey {
                origin: self.outside(),
                axis: Axis::Horizontal,
            },
        }
    }

    /// Endpoints wound clockwise around the cell, so the outer walls of a
    /// hole-free room chain into closed loops.
    pub fn segment(&self) -> Segment {
        let Coord2 { x, y } = self.cell;
        let (start, end) = match self.side {
            Side::Left => ((x, y), (x, y + 1)),
            Side::Up => ((x, y + 1), (x + 1, y + 1)),
            Side::Right => ((x + 1, y + 1), (x + 1, y)),
            Side::Down => ((x + 1, y), (x, y)),
        };
        Segment {
            start: Coord2::new(start.0, start.1),
            end: Coord2::new(end.0, end.1),
        }
    }

    pub fn translate(&mut self, offset: Coord2) {
        self.cell = self.cell + offset;
    }

    pub fn rotate_cw(&mut self) {
        self.cell = self.cell.rotate_cw();
        self.side = self.side.rotate_cw();
    }
}
