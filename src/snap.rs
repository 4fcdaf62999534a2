//! Nearest-node assignment for raw trajectories.

use crate::types::{GridNode, Observation};
use std::collections::HashSet;
use std::hash::Hash;

/// Reasons why snapping cannot proceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapError {
    /// The board produced no grid nodes to snap onto.
    EmptyGrid,
}

impl std::fmt::Display for SnapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapError::EmptyGrid => write!(f, "cannot snap onto an empty grid"),
        }
    }
}

impl std::error::Error for SnapError {}

/// Closest node by squared Euclidean distance. Ties keep the node that comes
/// first in `grid`.
pub fn nearest_node(point: Observation, grid: &[GridNode]) -> Option<GridNode> {
    let mut best: Option<(GridNode, f64)> = None;
    for node in grid {
        let d = node.distance_sq_to(point);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((*node, d)),
        }
    }
    best.map(|(node, _)| node)
}

/// Replace every observation with its nearest grid node.
///
/// The output has exactly one node per observation; repeated visits are not
/// collapsed here (see [`dedup_global`]).
pub fn snap(trajectory: &[Observation], grid: &[GridNode]) -> Result<Vec<GridNode>, SnapError> {
    if grid.is_empty() {
        return Err(SnapError::EmptyGrid);
    }
    Ok(trajectory
        .iter()
        .filter_map(|&p| nearest_node(p, grid))
        .collect())
}

/// Drop every item equal to an earlier one, keeping first occurrences in order.
pub fn dedup_global<T: Copy + Eq + Hash>(items: &[T]) -> Vec<T> {
    let mut seen: HashSet<T> = HashSet::with_capacity(items.len());
    items.iter().copied().filter(|item| seen.insert(*item)).collect()
}

/// Stricter filter used by the legacy path viewer: after the first point, a
/// point is kept only if neither its x nor its y was seen on a kept point.
///
/// Not part of the canonical reduction.
pub fn dedup_axes(points: &[GridNode]) -> Vec<GridNode> {
    let mut xs: HashSet<i32> = HashSet::new();
    let mut ys: HashSet<i32> = HashSet::new();
    let mut kept = Vec::new();
    for p in points {
        if kept.is_empty() || (!xs.contains(&p.x) && !ys.contains(&p.y)) {
            xs.insert(p.x);
            ys.insert(p.y);
            kept.push(*p);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<GridNode> {
        vec![
            GridNode::new(0, 0),
            GridNode::new(10, 0),
            GridNode::new(0, 10),
            GridNode::new(10, 10),
        ]
    }

    #[test]
    fn snaps_and_collapses_stationary_observations() {
        let grid = square();
        let traj = [[1.0, 1.0], [1.0, 1.0], [9.0, 9.0]];
        let snapped = snap(&traj, &grid).unwrap();
        assert_eq!(snapped.len(), traj.len());
        assert_eq!(
            dedup_global(&snapped),
            vec![GridNode::new(0, 0), GridNode::new(10, 10)]
        );
    }

    #[test]
    fn every_snapped_node_belongs_to_grid() {
        let grid = square();
        let traj: Vec<Observation> = (0..25)
            .map(|i| [(i * 7 % 23) as f64 - 6.0, (i * 5 % 19) as f64 - 4.0])
            .collect();
        let snapped = snap(&traj, &grid).unwrap();
        assert_eq!(snapped.len(), traj.len());
        assert!(snapped.iter().all(|n| grid.contains(n)));
    }

    #[test]
    fn ties_resolve_to_first_grid_node() {
        let grid = square();
        assert_eq!(nearest_node([5.0, 5.0], &grid), Some(GridNode::new(0, 0)));
        let reversed: Vec<GridNode> = grid.iter().rev().copied().collect();
        assert_eq!(
            nearest_node([5.0, 5.0], &reversed),
            Some(GridNode::new(10, 10))
        );
    }

    #[test]
    fn empty_grid_is_an_error() {
        assert_eq!(snap(&[[1.0, 2.0]], &[]), Err(SnapError::EmptyGrid));
        assert_eq!(snap(&[], &[]), Err(SnapError::EmptyGrid));
    }

    #[test]
    fn empty_trajectory_snaps_to_nothing() {
        assert!(snap(&[], &square()).unwrap().is_empty());
    }

    #[test]
    fn global_dedup_removes_non_adjacent_repeats() {
        let a = GridNode::new(0, 0);
        let b = GridNode::new(10, 0);
        let c = GridNode::new(10, 10);
        assert_eq!(dedup_global(&[a, b, a, c, b, c]), vec![a, b, c]);
    }

    #[test]
    fn axis_dedup_requires_new_row_and_column() {
        let pts = [
            GridNode::new(0, 0),
            GridNode::new(0, 10),
            GridNode::new(10, 0),
            GridNode::new(10, 10),
            GridNode::new(20, 20),
        ];
        assert_eq!(
            dedup_axes(&pts),
            vec![GridNode::new(0, 0), GridNode::new(10, 10), GridNode::new(20, 20)]
        );
    }
}
