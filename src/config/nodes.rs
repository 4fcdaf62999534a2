use crate::io::read_json_file;
use crate::params::ReducerParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct NodesToolConfig {
    /// Reference segments saved by the calibration tool.
    pub segments: PathBuf,
    #[serde(default)]
    pub params: ReducerParams,
    /// Destination for both node sets.
    pub output: PathBuf,
}

pub fn load_config(path: &Path) -> Result<NodesToolConfig, String> {
    read_json_file(path, "config")
}
