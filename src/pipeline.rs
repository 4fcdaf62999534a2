//! Trial reduction: snap → dedup → chain, for one trial or a batch.
//!
//! Every stage is a pure function over borrowed inputs. The only shared state
//! is the board's cached grid, which is read-only once built. Batches map
//! trials independently (in parallel with the `parallel` feature) and merge
//! the results afterwards in trial order.

use crate::aggregate::{AggregateReport, Runs};
use crate::board::Board;
use crate::chain::chain;
use crate::diagnostics::{TimingBreakdown, TrialReport};
use crate::params::{InvalidParam, ReducerParams};
use crate::snap::{dedup_global, snap, SnapError};
use crate::types::{CanonicalPath, Observation, Trajectory};
use log::{debug, warn};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Reasons why a trial cannot be reduced.
#[derive(Clone, Debug, PartialEq)]
pub enum ReduceError {
    InvalidParams(InvalidParam),
    Snap(SnapError),
}

impl std::fmt::Display for ReduceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReduceError::InvalidParams(e) => write!(f, "{e}"),
            ReduceError::Snap(e) => write!(f, "snapping failed: {e}"),
        }
    }
}

impl std::error::Error for ReduceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReduceError::InvalidParams(e) => Some(e),
            ReduceError::Snap(e) => Some(e),
        }
    }
}

impl From<InvalidParam> for ReduceError {
    fn from(e: InvalidParam) -> Self {
        ReduceError::InvalidParams(e)
    }
}

impl From<SnapError> for ReduceError {
    fn from(e: SnapError) -> Self {
        ReduceError::Snap(e)
    }
}

/// Canonical path of one trial plus its stage report.
#[derive(Clone, Debug)]
pub struct TrialReduction {
    pub path: CanonicalPath,
    pub report: TrialReport,
}

impl TrialReduction {
    pub fn is_usable(&self) -> bool {
        self.report.usable
    }
}

/// Reduces raw trajectories against a board with fixed parameters.
#[derive(Clone, Debug)]
pub struct PathReducer {
    params: ReducerParams,
}

impl PathReducer {
    pub fn new(params: ReducerParams) -> Result<Self, ReduceError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Fails when `board` built its grid with a different threshold or
    /// parallel tolerance than these params.
    pub fn check_board(&self, board: &Board) -> Result<(), InvalidParam> {
        if board.vh_threshold() != self.params.vh_threshold {
            return Err(InvalidParam {
                field: "vh_threshold",
                reason: format!(
                    "board was built with {}, reducer has {}",
                    board.vh_threshold(),
                    self.params.vh_threshold
                ),
            });
        }
        if board.parallel_tolerance() != self.params.parallel_tolerance {
            return Err(InvalidParam {
                field: "parallel_tolerance",
                reason: format!(
                    "board was built with {}, reducer has {}",
                    board.parallel_tolerance(),
                    self.params.parallel_tolerance
                ),
            });
        }
        Ok(())
    }

    pub fn reduce(
        &self,
        board: &Board,
        trajectory: &[Observation],
    ) -> Result<TrialReduction, ReduceError> {
        self.check_board(board)?;
        self.reduce_trial(0, board, trajectory)
    }

    fn reduce_trial(
        &self,
        trial: usize,
        board: &Board,
        trajectory: &[Observation],
    ) -> Result<TrialReduction, ReduceError> {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();
        let grid = board.nodes(self.params.grid_mode);

        let snapped = timing.time("snap", || snap(trajectory, grid))?;
        let deduped = timing.time("dedup", || dedup_global(&snapped));
        let path = timing.time("chain", || chain(&deduped, self.params.max_jump));
        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        let usable = path.len() >= self.params.min_path_len;
        debug!(
            "PathReducer::reduce trial={} raw={} snapped={} deduped={} chained={} usable={}",
            trial,
            trajectory.len(),
            snapped.len(),
            deduped.len(),
            path.len(),
            usable
        );
        let report = TrialReport {
            trial,
            raw: trajectory.len(),
            snapped: snapped.len(),
            deduped: deduped.len(),
            chained: path.len(),
            usable,
            timing,
        };
        Ok(TrialReduction { path, report })
    }
}

/// Outcome of reducing every trial recorded on one board.
#[derive(Clone, Debug, Default)]
pub struct BatchOutcome {
    /// Usable canonical paths keyed by trial index.
    pub runs: Runs,
    /// Trials whose canonical path was too short to aggregate.
    pub discarded: Vec<usize>,
    pub reports: Vec<TrialReport>,
}

impl BatchOutcome {
    pub fn aggregate(&self, max_depth: usize) -> AggregateReport {
        AggregateReport::from_paths(&self.runs.paths(), max_depth)
    }
}

/// Reduce all `trials` against `board`. Fails on the first trial that cannot
/// be reduced; trials that merely produce short paths are listed in
/// [`BatchOutcome::discarded`].
pub fn reduce_trials(
    board: &Board,
    trials: &[Trajectory],
    params: &ReducerParams,
) -> Result<BatchOutcome, ReduceError> {
    let reducer = PathReducer::new(params.clone())?;
    reducer.check_board(board)?;
    if trials.is_empty() {
        return Ok(BatchOutcome::default());
    }
    if board.nodes(params.grid_mode).is_empty() {
        warn!(
            "reduce_trials: board produced no {} grid nodes",
            params.grid_mode.label()
        );
        return Err(SnapError::EmptyGrid.into());
    }

    let results = map_trials(trials, |trial, trajectory| {
        reducer.reduce_trial(trial, board, trajectory)
    });

    let mut outcome = BatchOutcome::default();
    for result in results {
        let TrialReduction { path, report } = result?;
        if report.usable {
            outcome.runs.insert(report.trial, path);
        } else {
            warn!(
                "reduce_trials: discarding trial {} (path of {} nodes)",
                report.trial, report.chained
            );
            outcome.discarded.push(report.trial);
        }
        outcome.reports.push(report);
    }
    debug!(
        "reduce_trials: trials={} kept={} discarded={}",
        trials.len(),
        outcome.runs.len(),
        outcome.discarded.len()
    );
    Ok(outcome)
}

#[cfg(feature = "parallel")]
fn map_trials<F>(trials: &[Trajectory], f: F) -> Vec<Result<TrialReduction, ReduceError>>
where
    F: Fn(usize, &[Observation]) -> Result<TrialReduction, ReduceError> + Sync,
{
    trials
        .par_iter()
        .enumerate()
        .map(|(i, t)| f(i, t.as_slice()))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn map_trials<F>(trials: &[Trajectory], f: F) -> Vec<Result<TrialReduction, ReduceError>>
where
    F: Fn(usize, &[Observation]) -> Result<TrialReduction, ReduceError> + Sync,
{
    trials.iter().enumerate().map(|(i, t)| f(i, t.as_slice())).collect()
}
