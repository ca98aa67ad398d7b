use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::aabb::Aabb2;
use crate::coord::Coord2;

#[derive(Clone, Debug)]
pub struct FloodResult {
    pub cells: Vec<Coord2>,
    pub visited: HashSet<Coord2>,
}

/// 4-connected fill of the passable cells of `bounds` reachable from
/// `start`.
pub fn flood_fill<F>(bounds: Aabb2, start: Coord2, mut is_passable: F) -> FloodResult
where
    F: FnMut(Coord2) -> bool,
{
    let mut visited = HashSet::new();
    let mut cells = Vec::new();

    if !bounds.contains(start) || !is_passable(start) {
        return FloodResult { cells, visited };
    }

    let mut stack = alloc::vec![start];
    visited.insert(start);

    while let Some(current) = stack.pop() {
        cells.push(current);
        for next in current.neighbours() {
            if !bounds.contains(next) || visited.contains(&next) || !is_passable(next) {
                continue;
            }
            visited.insert(next);
            stack.push(next);
        }
    }

    FloodResult { cells, visited }
}

/// True when the passable cells of `bounds` form one 4-connected region.
pub fn is_connected<F>(bounds: Aabb2, mut is_passable: F) -> bool
where
    F: FnMut(Coord2) -> bool,
{
    let mut first = None;
    let mut passable_total = 0usize;

    for c in bounds.cells() {
        if is_passable(c) {
            passable_total += 1;
            if first.is_none() {
                first = Some(c);
            }
        }
    }

    let start = match first {
        Some(c) if passable_total > 1 => c,
        _ => return true,
    };
    let region = flood_fill(bounds, start, is_passable);
    region.cells.len() == passable_total
}
