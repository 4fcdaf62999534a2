//! Board setup: the immutable reference segments of one rig and the grid
//! nodes derived from them.
//!
//! Node sets are built lazily, once per [`GridMode`], and then shared
//! read-only. A `Board` is `Sync`, so trials may be reduced on several
//! threads against the same cached grid.

use crate::grid::{build_nodes, partition, GridMode, LineFamilies};
use crate::params::ReducerParams;
use crate::segment::Segment;
use crate::sources::CalibrationSource;
use crate::types::GridNode;
use std::sync::OnceLock;

pub struct Board {
    segments: Vec<Segment>,
    vh_threshold: f64,
    parallel_tolerance: f64,
    intersections: OnceLock<Vec<GridNode>>,
    averaged: OnceLock<Vec<GridNode>>,
}

impl Board {
    pub fn new(segments: Vec<Segment>, params: &ReducerParams) -> Self {
        Self {
            segments,
            vh_threshold: params.vh_threshold,
            parallel_tolerance: params.parallel_tolerance,
            intersections: OnceLock::new(),
            averaged: OnceLock::new(),
        }
    }

    /// Board from a finished calibration.
    pub fn from_source<S: CalibrationSource + ?Sized>(
        source: &S,
        params: &ReducerParams,
    ) -> Result<Self, String> {
        Ok(Self::new(source.segments()?, params))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn vh_threshold(&self) -> f64 {
        self.vh_threshold
    }

    pub fn parallel_tolerance(&self) -> f64 {
        self.parallel_tolerance
    }

    /// Segments split by orientation, e.g. for overlay colouring.
    pub fn families(&self) -> LineFamilies<'_> {
        partition(&self.segments, self.vh_threshold)
    }

    /// Cached node set for `mode`, built on first access.
    pub fn nodes(&self, mode: GridMode) -> &[GridNode] {
        let cell = match mode {
            GridMode::Intersections => &self.intersections,
            GridMode::Averaged => &self.averaged,
        };
        cell.get_or_init(|| {
            build_nodes(
                &self.segments,
                mode,
                self.vh_threshold,
                self.parallel_tolerance,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cross() -> Vec<Segment> {
        vec![
            Segment::new([0.0, 0.0], [0.0, 100.0]),
            Segment::new([-50.0, 50.0], [50.0, 50.0]),
        ]
    }

    #[test]
    fn caches_nodes_per_mode() {
        let params = ReducerParams {
            vh_threshold: 10.0,
            ..Default::default()
        };
        let board = Board::new(cross(), &params);
        let first = board.nodes(GridMode::Intersections).as_ptr();
        assert_eq!(board.nodes(GridMode::Intersections), &[GridNode::new(0, 50)]);
        assert_eq!(board.nodes(GridMode::Intersections).as_ptr(), first);
        assert_eq!(board.nodes(GridMode::Averaged), &[GridNode::new(0, 50)]);
    }

    #[test]
    fn default_threshold_drops_short_lines() {
        let board = Board::new(cross(), &ReducerParams::default());
        assert!(board.nodes(GridMode::Averaged).is_empty());
        assert_eq!(board.families().unclassified, 2);
    }

    #[test]
    fn builds_from_calibration_source() {
        let params = ReducerParams {
            vh_threshold: 10.0,
            ..Default::default()
        };
        let board = Board::from_source(&cross(), &params).unwrap();
        assert_eq!(board.segments().len(), 2);
    }

    #[test]
    fn board_is_shareable_across_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Board>();
    }
}
