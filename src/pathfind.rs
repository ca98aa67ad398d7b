use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::Reverse;

use hashbrown::{HashMap, HashSet};

use crate::coord::Coord2;

/// Result of a pathfinding search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    /// Cells from start to goal, both included.
    pub path: Vec<Coord2>,
    pub cost: u32,
    pub nodes_expanded: u32,
}

/// Unit-cost shortest path over the 4-neighbourhood of the unbounded grid.
///
/// Only paths costing strictly less than `max_cost` are considered; `None`
/// means every route is blocked or would reach the cap. Equal-cost frontier
/// nodes leave the queue in insertion order, and no heuristic is applied.
pub fn shortest_path<F>(
    start: Coord2,
    goal: Coord2,
    max_cost: u32,
    mut is_blocked: F,
) -> Option<PathResult>
where
    F: FnMut(Coord2) -> bool,
{
    if max_cost == 0 || is_blocked(start) || is_blocked(goal) {
        return None;
    }

    let mut g_scores = HashMap::<Coord2, u32>::new();
    let mut came_from = HashMap::<Coord2, Coord2>::new();
    let mut closed = HashSet::<Coord2>::new();
    let mut open = BinaryHeap::new();
    let mut sequence = 0u64;

    g_scores.insert(start, 0);
    open.push(Reverse((0u32, sequence, start)));

    let mut nodes_expanded = 0u32;

    while let Some(Reverse((cost, _, current))) = open.pop() {
        if !closed.insert(current) {
            continue;
        }
        nodes_expanded = nodes_expanded.saturating_add(1);

        if current == goal {
            return Some(PathResult {
                path: reconstruct_path(&came_from, start, goal),
                cost,
                nodes_expanded,
            });
        }

        let tentative = cost + 1;
        if tentative >= max_cost {
            continue;
        }

        for next in current.neighbours() {
            if closed.contains(&next) || is_blocked(next) {
                continue;
            }
            if tentative < g_scores.get(&next).copied().unwrap_or(u32::MAX) {
                g_scores.insert(next, tentative);
                came_from.insert(next, current);
                sequence += 1;
                open.push(Reverse((tentative, sequence, next)));
            }
        }
    }

    None
}

fn reconstruct_path(came_from: &HashMap<Coord2, Coord2>, start: Coord2, goal: Coord2) -> Vec<Coord2> {
    let mut reverse = alloc::vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(&parent) => {
                current = parent;
                reverse.push(current);
            }
            None => break,
        }
    }
    reverse.reverse();
    reverse
}
