use crate::coord::Coord2;

/// Side of a unit cell (Von Neumann neighbourhood). `Up` faces `y + 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Up,
    Right,
    Down,
}

impl Side {
    /// Clockwise order starting from `Left`.
    pub const ALL: [Side; 4] = [Side::Left, Side::Up, Side::Right, Side::Down];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Up => 1,
            Side::Right => 2,
            Side::Down => 3,
        }
    }

    #[inline]
    pub const fn offset(self) -> Coord2 {
        match self {
            Side::Left => Coord2::new(-1, 0),
            Side::Up => Coord2::new(0, 1),
            Side::Right => Coord2::new(1, 0),
            Side::Down => Coord2::new(0, -1),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Up => Side::Down,
            Side::Right => Side::Left,
            Side::Down => Side::Up,
        }
    }

    /// Matches `Coord2::rotate_cw`: the side facing `offset()` ends up
    /// facing `offset().rotate_cw()`.
    #[inline]
    pub const fn rotate_cw(self) -> Side {
        match self {
            Side::Left => Side::Up,
            Side::Up => Side::Right,
            Side::Right => Side::Down,
            Side::Down => Side::Left,
        }
    }

    pub fn rotate_cw_times(self, turns: u8) -> Side {
        Side::ALL[(self.index() + turns as usize) % 4]
    }
}
