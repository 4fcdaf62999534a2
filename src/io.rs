//! JSON persistence boundary.
//!
//! - `load_segments`: `[[[x0, y0], [x1, y1]], ...]` reference lines.
//! - `load_trajectory`: `[[x, y], ...]` observations of one trial.
//! - `load_trials_dir`: every `*.json` trajectory in a directory, in natural
//!   file-name order (`piece2` before `piece10`).
//! - `load_runs`: a `{"Run N": path}` file written by `write_json_file`.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Every failure is fatal and reported as a message naming the path.
use crate::aggregate::Runs;
use crate::segment::Segment;
use crate::types::Trajectory;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

pub fn read_json_file<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {what} {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse {what} {}: {e}", path.display()))
}

pub fn load_segments(path: &Path) -> Result<Vec<Segment>, String> {
    read_json_file(path, "segments")
}

pub fn load_trajectory(path: &Path) -> Result<Trajectory, String> {
    read_json_file(path, "trajectory")
}

pub fn load_runs(path: &Path) -> Result<Runs, String> {
    read_json_file(path, "runs")
}

/// Trajectory files in `dir` (`*.json`, non-recursive) in natural order.
pub fn list_trial_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read trials directory {}: {e}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| format!("Failed to read trials directory {}: {e}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));
    Ok(files)
}

pub fn load_trials_dir(dir: &Path) -> Result<Vec<Trajectory>, String> {
    list_trial_files(dir)?
        .iter()
        .map(|path| load_trajectory(path))
        .collect()
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Compares names chunk by chunk, treating digit runs as numbers.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (mut ca, mut cb) = (chunks(a), chunks(b));
    loop {
        match (ca.next(), cb.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u128>(), y.parse::<u128>()) {
                    (Ok(nx), Ok(ny)) => nx.cmp(&ny),
                    _ => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Splits a name into maximal runs of ASCII digits and non-digits.
fn chunks(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digit = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != digit)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(end);
        rest = tail;
        Some(head)
    })
}
