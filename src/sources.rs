//! Interfaces to the collaborators that feed the reducer.
//!
//! Interactive calibration (drawing reference lines over the live feed) and
//! trial capture live outside this crate. They hand over finished data
//! through these traits; nothing here depends on interactive state.

use crate::io::{load_segments, load_trials_dir};
use crate::segment::Segment;
use crate::types::Trajectory;
use std::path::PathBuf;

/// Produces the finalized reference segments of a board.
pub trait CalibrationSource {
    fn segments(&self) -> Result<Vec<Segment>, String>;
}

/// Produces the recorded trajectories of a session.
pub trait TrialSource {
    fn trajectories(&self) -> Result<Vec<Trajectory>, String>;
}

impl CalibrationSource for Vec<Segment> {
    fn segments(&self) -> Result<Vec<Segment>, String> {
        Ok(self.clone())
    }
}

impl CalibrationSource for [Segment] {
    fn segments(&self) -> Result<Vec<Segment>, String> {
        Ok(self.to_vec())
    }
}

impl TrialSource for Vec<Trajectory> {
    fn trajectories(&self) -> Result<Vec<Trajectory>, String> {
        Ok(self.clone())
    }
}

/// Segments saved by the calibration tool as a JSON file.
#[derive(Clone, Debug)]
pub struct SegmentFile(pub PathBuf);

impl CalibrationSource for SegmentFile {
    fn segments(&self) -> Result<Vec<Segment>, String> {
        load_segments(&self.0)
    }
}

/// Directory of per-trial JSON trajectory files.
#[derive(Clone, Debug)]
pub struct TrialDir(pub PathBuf);

impl TrialSource for TrialDir {
    fn trajectories(&self) -> Result<Vec<Trajectory>, String> {
        load_trials_dir(&self.0)
    }
}
