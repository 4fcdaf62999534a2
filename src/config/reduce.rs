use crate::io::read_json_file;
use crate::params::ReducerParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ReduceToolConfig {
    /// Reference segments saved by the calibration tool.
    pub segments: PathBuf,
    /// Directory of per-trial trajectory files.
    pub trials_dir: PathBuf,
    #[serde(default)]
    pub params: ReducerParams,
    pub output: ReduceOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ReduceOutputConfig {
    /// `{"Run N": [[x, y], ...]}` canonical paths.
    pub runs_json: PathBuf,
    /// Aggregate statistics; skipped when absent.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ReduceToolConfig, String> {
    read_json_file(path, "config")
}
