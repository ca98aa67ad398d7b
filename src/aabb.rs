use crate::coord::Coord2;

/// Inclusive rectangle of grid cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb2 {
    pub min: Coord2,
    pub max: Coord2,
}

impl Aabb2 {
    pub fn new(min: Coord2, max: Coord2) -> Self {
        Self {
            min: Coord2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Coord2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Smallest rectangle holding every cell, or `None` for no cells.
    pub fn from_cells(cells: impl IntoIterator<Item = Coord2>) -> Option<Self> {
        let mut cells = cells.into_iter();
        let first = cells.next()?;
        Some(cells.fold(Self::new(first, first), |acc, c| acc.include(c)))
    }

    pub fn include(self, c: Coord2) -> Self {
        Self {
            min: Coord2::new(self.min.x.min(c.x), self.min.y.min(c.y)),
            max: Coord2::new(self.max.x.max(c.x), self.max.y.max(c.y)),
        }
    }

    pub fn union(self, other: Aabb2) -> Self {
        self.include(other.min).include(other.max)
    }

    pub fn padded(self, by: i32) -> Self {
        Self::new(self.min.translate(-by, -by), self.max.translate(by, by))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        (self.max.x - self.min.x) as u32 + 1
    }

    #[inline]
    pub fn height(&self) -> u32 {
        (self.max.y - self.min.y) as u32 + 1
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[inline]
    pub fn contains(&self, point: Coord2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    #[inline]
    pub fn intersects(&self, other: &Aabb2) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }

    /// Row-major walk from `min` to `max`.
    pub fn cells(self) -> impl Iterator<Item = Coord2> {
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| Coord2::new(x, y)))
    }
}
