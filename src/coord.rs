use alloc::vec::Vec;
use core::ops::{Add, Neg, Sub};

use crate::neighborhood::Side;

/// 2D integer coordinate of a grid cell. The y axis points up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord2 {
    pub x: i32,
    pub y: i32,
}

impl Coord2 {
    pub const ZERO: Coord2 = Coord2 { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Quarter turn clockwise about the origin: `(x, y) -> (y, -x)`.
    #[inline]
    pub const fn rotate_cw(self) -> Self {
        Self::new(self.y, -self.x)
    }

    pub fn rotate_cw_times(self, turns: u8) -> Self {
        (0..turns % 4).fold(self, |c, _| c.rotate_cw())
    }

    #[inline]
    pub fn manhattan_distance(self, other: Coord2) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }

    /// The four axis neighbours, in `Side::ALL` order.
    pub fn neighbours(self) -> [Coord2; 4] {
        Side::ALL.map(|side| self + side.offset())
    }

    /// The 3x3 block of cells centred on `self`, including `self`.
    pub fn area(self) -> [Coord2; 9] {
        let mut out = [self; 9];
        let mut i = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                out[i] = self.translate(dx, dy);
                i += 1;
            }
        }
        out
    }

    /// Cells at Manhattan distance `distance`, walked one diamond arm at a
    /// time. Corners shared by two arms are reported once.
    pub fn ring(self, distance: u32) -> Vec<Coord2> {
        let d = distance as i32;
        let mut out = Vec::with_capacity(4 * distance as usize + 1);
        for i in 0..=d {
            let arms = [
                self.translate(i, d - i),
                self.translate(i, -(d - i)),
                self.translate(-i, d - i),
                self.translate(-i, -(d - i)),
            ];
            for c in arms {
                if !out.contains(&c) {
                    out.push(c);
                }
            }
        }
        out
    }
}

impl Add for Coord2 {
    type Output = Coord2;

    fn add(self, rhs: Self) -> Self::Output {
        Coord2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord2 {
    type Output = Coord2;

    fn sub(self, rhs: Self) -> Self::Output {
        Coord2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord2 {
    type Output = Coord2;

    fn neg(self) -> Self::Output {
        Coord2::new(-self.x, -self.y)
    }
}
