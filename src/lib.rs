//! Reduce camera-tracked game piece trajectories to canonical board-node
//! paths, and aggregate those paths across trials.
//!
//! Data flow:
//! reference segments → [`grid`] nodes (cached on a [`Board`]);
//! raw trajectory → [`snap`] → [`chain`] → canonical path;
//! canonical paths of many trials → [`aggregate`] statistics.
//!
//! Capture, calibration UI and plotting are external; they exchange data with
//! this crate through [`sources`] and the JSON helpers in [`io`].

// Core reduction
pub mod aggregate;
pub mod board;
pub mod chain;
pub mod geometry;
pub mod grid;
pub mod params;
pub mod pipeline;
pub mod segment;
pub mod snap;
pub mod types;

// Tooling and boundaries
pub mod config;
pub mod diagnostics;
pub mod io;
pub mod sources;

// --- High-level re-exports -------------------------------------------------

pub use crate::aggregate::{unique_prefix_counts, AggregateReport, Runs};
pub use crate::board::Board;
pub use crate::grid::GridMode;
pub use crate::params::ReducerParams;
pub use crate::pipeline::{reduce_trials, BatchOutcome, PathReducer, ReduceError, TrialReduction};
pub use crate::segment::Segment;
pub use crate::types::{CanonicalPath, GridNode, Observation, Trajectory};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use plinko_paths::prelude::*;
///
/// let params = ReducerParams { vh_threshold: 10.0, max_jump: 150.0, ..Default::default() };
/// let board = Board::new(
///     vec![
///         Segment::new([0.0, 0.0], [0.0, 100.0]),
///         Segment::new([100.0, 0.0], [100.0, 100.0]),
///         Segment::new([-50.0, 50.0], [150.0, 50.0]),
///     ],
///     &params,
/// );
/// let reducer = PathReducer::new(params).unwrap();
/// let out = reducer.reduce(&board, &[[3.0, 48.0], [97.0, 52.0]]).unwrap();
/// assert_eq!(out.path, vec![GridNode::new(0, 50), GridNode::new(100, 50)]);
/// ```
pub mod prelude {
    pub use crate::{Board, GridMode, GridNode, PathReducer, ReducerParams, Segment};
}
