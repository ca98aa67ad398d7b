use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use rand::Rng;

use crate::aabb::Aabb2;
use crate::border::{Border, BorderId, WallKey};
use crate::coord::Coord2;
use crate::error::DungeonError;
use crate::flood::is_connected;
use crate::neighborhood::Side;
use crate::placement::Transform;

/// Unit cell of a room with its four borders, indexed by `Side::index`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    position: Coord2,
    borders: [Border; 4],
}

impl Block {
    pub fn new(position: Coord2) -> Self {
        Self {
            position,
            borders: Side::ALL.map(|side| Border::new(position, side)),
        }
    }

    #[inline]
    pub fn position(&self) -> Coord2 {
        self.position
    }

    #[inline]
    pub fn border(&self, side: Side) -> &Border {
        &self.borders[side.index()]
    }

    #[inline]
    pub fn borders(&self) -> &[Border; 4] {
        &self.borders
    }

    fn rotate_cw(&mut self) {
        self.position = self.position.rotate_cw();
        let mut rotated = self.borders;
        for mut border in self.borders {
            border.rotate_cw();
            rotated[border.side.index()] = border;
        }
        self.borders = rotated;
    }

    fn translate(&mut self, offset: Coord2) {
        self.position = self.position + offset;
        for border in &mut self.borders {
            border.translate(offset);
        }
    }
}

/// Connected group of blocks grown one cell at a time.
///
/// Blocks keep growth order. Walls shared by two blocks are marked internal
/// on both sides as soon as the second block arrives, found through an
/// index keyed by [`WallKey`].
#[derive(Clone, Debug)]
pub struct Room {
    blocks: Vec<Block>,
    cells: HashMap<Coord2, u32>,
    walls: HashMap<WallKey, BorderId>,
    color: u32,
}

impl Default for Room {
    fn default() -> Self {
        Self::new()
    }
}

impl Room {
    /// A single block at the origin.
    pub fn new() -> Self {
        let mut room = Self {
            blocks: Vec::new(),
            cells: HashMap::new(),
            walls: HashMap::new(),
            color: 0,
        };
        room.merge_block(Block::new(Coord2::ZERO));
        room
    }

    pub fn from_cells(cells: &[Coord2]) -> Result<Self, DungeonError> {
        let (&first, rest) = cells
            .split_first()
            .ok_or(DungeonError::InvalidConfig("room needs at least one block"))?;
        let mut room = Self {
            blocks: Vec::with_capacity(cells.len()),
            cells: HashMap::with_capacity(cells.len()),
            walls: HashMap::new(),
            color: 0,
        };
        room.merge_block(Block::new(first));
        for &cell in rest {
            room.push_block(cell)?;
        }
        Ok(room)
    }

    /// Grows a fresh room to `blocks` cells (at least one).
    pub fn grow(blocks: u32, rng: &mut impl Rng) -> Result<Self, DungeonError> {
        let mut room = Self::new();
        for _ in 1..blocks {
            room.expand(rng)?;
        }
        Ok(room)
    }

    /// Adds one block on a uniformly chosen free cell next to the room.
    pub fn expand(&mut self, rng: &mut impl Rng) -> Result<Coord2, DungeonError> {
        let frontier = self.frontier();
        if frontier.is_empty() {
            return Err(DungeonError::EmptyFrontier);
        }
        let pick = rng.gen_range(0..frontier.len());
        let cell = frontier
            .into_iter()
            .nth(pick)
            .ok_or(DungeonError::EmptyFrontier)?;
        self.push_block(cell)?;
        Ok(cell)
    }

    /// Free cells sharing a wall with the room, in coordinate order.
    pub fn frontier(&self) -> BTreeSet<Coord2> {
        self.blocks
            .iter()
            .flat_map(|b| b.position.neighbours())
            .filter(|c| !self.contains(*c))
            .collect()
    }

    pub fn push_block(&mut self, cell: Coord2) -> Result<u32, DungeonError> {
        if self.contains(cell) {
            return Err(DungeonError::DuplicateBlock { cell });
        }
        Ok(self.merge_block(Block::new(cell)))
    }

    fn merge_block(&mut self, block: Block) -> u32 {
        let index = self.blocks.len() as u32;
        self.cells.insert(block.position, index);
        let keys = block.borders.map(|b| b.key());
        self.blocks.push(block);

        for side in Side::ALL {
            let id = BorderId::new(index, side);
            let key = keys[side.index()];
            match self.walls.get(&key).copied() {
                Some(other) => {
                    self.set_internal(other);
                    self.set_internal(id);
                }
                None => {
                    self.walls.insert(key, id);
                }
            }
        }
        index
    }

    fn set_internal(&mut self, id: BorderId) {
        if let Some(border) = self.border_mut(id) {
            border.internal = true;
            border.is_door = false;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn contains(&self, cell: Coord2) -> bool {
        self.cells.contains_key(&cell)
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.blocks.iter().map(|b| b.position)
    }

    pub fn bounds(&self) -> Aabb2 {
        let first = self.blocks[0].position;
        self.cells()
            .fold(Aabb2::new(first, first), |acc, c| acc.include(c))
    }

    /// Every cell within one step (including diagonals) of a block.
    pub fn padding(&self) -> HashSet<Coord2> {
        self.cells().flat_map(Coord2::area).collect()
    }

    /// True when some empty cell is walled in by the room.
    pub fn has_holes(&self) -> bool {
        !is_connected(self.bounds().padded(1), |c| !self.contains(c))
    }

    pub fn border(&self, id: BorderId) -> Option<&Border> {
        self.blocks.get(id.block as usize).map(|b| b.border(id.side))
    }

    pub(crate) fn border_mut(&mut self, id: BorderId) -> Option<&mut Border> {
        self.blocks
            .get_mut(id.block as usize)
            .map(|b| &mut b.borders[id.side.index()])
    }

    pub fn borders(&self) -> impl Iterator<Item = (BorderId, &Border)> + '_ {
        self.blocks.iter().enumerate().flat_map(|(i, block)| {
            block
                .borders
                .iter()
                .map(move |b| (BorderId::new(i as u32, b.side), b))
        })
    }

    pub fn external_borders(&self) -> impl Iterator<Item = (BorderId, &Border)> + '_ {
        self.borders().filter(|(_, b)| b.is_external())
    }

    pub fn doors(&self) -> impl Iterator<Item = (BorderId, &Border)> + '_ {
        self.borders().filter(|(_, b)| b.is_door)
    }

    pub fn unused_doors(&self) -> impl Iterator<Item = (BorderId, &Border)> + '_ {
        self.doors().filter(|(_, b)| !b.used)
    }

    /// Marks up to `count` random external borders as doors and returns how
    /// many were marked. Small rooms get fewer doors rather than an error.
    pub fn place_doors(&mut self, count: u32, rng: &mut impl Rng) -> u32 {
        let candidates: Vec<BorderId> = self.external_borders().map(|(id, _)| id).collect();
        let placed = (count as usize).min(candidates.len());
        if placed < count as usize {
            log::warn!(
                "room of {} blocks has {} external borders, placing {} of {} doors",
                self.len(),
                candidates.len(),
                placed,
                count
            );
        }
        for index in rand::seq::index::sample(rng, candidates.len(), placed).into_iter() {
            if let Some(border) = self.border_mut(candidates[index]) {
                border.is_door = true;
            }
        }
        placed as u32
    }

    pub fn set_door(&mut self, id: BorderId) -> Result<(), DungeonError> {
        let border = self
            .border_mut(id)
            .ok_or(DungeonError::UnknownBorder { border: id })?;
        if border.internal {
            return Err(DungeonError::InternalDoor { border: id });
        }
        border.is_door = true;
        Ok(())
    }

    pub(crate) fn mark_used(&mut self, id: BorderId) -> Result<(), DungeonError> {
        let border = self
            .border_mut(id)
            .ok_or(DungeonError::UnknownBorder { border: id })?;
        border.used = true;
        Ok(())
    }

    /// Copy of the room rotated then translated by `transform`. Block order
    /// and border flags carry over; use [`Transform::border_id`] to follow a
    /// border handle across.
    pub fn transformed(&self, transform: &Transform) -> Room {
        let mut blocks = self.blocks.clone();
        for block in &mut blocks {
            for _ in 0..transform.rotation % 4 {
                block.rotate_cw();
            }
            block.translate(transform.offset);
        }

        let mut cells = HashMap::with_capacity(blocks.len());
        let mut walls = HashMap::with_capacity(self.walls.len());
        for (i, block) in blocks.iter().enumerate() {
            cells.insert(block.position, i as u32);
            for border in &block.borders {
                walls
                    .entry(border.key())
                    .or_insert(BorderId::new(i as u32, border.side));
            }
        }

        Room {
            blocks,
            cells,
            walls,
            color: self.color,
        }
    }

    #[inline]
    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn set_color(&mut self, color: u32) {
        self.color = color;
    }
}
