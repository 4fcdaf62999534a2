//! Cross-trial statistics over canonical paths.
//!
//! - [`unique_prefix_counts`]: number of distinct path prefixes per depth,
//!   an opening-book style measure of how fast trials diverge.
//! - [`final_column_counts`]: distribution of the x coordinate of each path's
//!   last node (where the piece came to rest).
//! - [`Runs`]: canonical paths keyed by trial index, persisted as `"Run N"`.

use crate::types::{CanonicalPath, GridNode};
use log::debug;
use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

const RUN_PREFIX: &str = "Run ";
const DEPTH_PREFIX: &str = "Combinations Depth ";

/// Distinct prefixes of length `d` for every `d` in `1..=min(max_depth, shortest path)`.
///
/// Prefixes compare element-wise, so order matters. Counts never decrease
/// with depth. An empty path set yields an empty map.
pub fn unique_prefix_counts(paths: &[CanonicalPath], max_depth: usize) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    let Some(shortest) = paths.iter().map(Vec::len).min() else {
        return counts;
    };
    let depth_limit = max_depth.min(shortest);
    for depth in 1..=depth_limit {
        let prefixes: HashSet<&[GridNode]> = paths.iter().map(|p| &p[..depth]).collect();
        counts.insert(depth, prefixes.len());
    }
    debug!(
        "aggregate::unique_prefix_counts paths={} shortest={} depth_limit={}",
        paths.len(),
        shortest,
        depth_limit
    );
    counts
}

/// Histogram of the final node's x coordinate, ascending by x. Empty paths
/// are ignored.
pub fn final_column_counts(paths: &[CanonicalPath]) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for node in paths.iter().filter_map(|p| p.last()) {
        *counts.entry(node.x).or_insert(0) += 1;
    }
    counts
}

/// Per-depth prefix counts, serialized as `{"Combinations Depth D": count}`
/// in ascending depth order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DepthCounts(pub BTreeMap<usize, usize>);

impl DepthCounts {
    pub fn label(depth: usize) -> String {
        format!("{DEPTH_PREFIX}{depth}")
    }

    pub fn get(&self, depth: usize) -> Option<usize> {
        self.0.get(&depth).copied()
    }
}

impl Serialize for DepthCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (depth, count) in &self.0 {
            map.serialize_entry(&Self::label(*depth), count)?;
        }
        map.end()
    }
}

/// Summary table handed to the plotting layer.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    pub trials: usize,
    pub combinations: DepthCounts,
    pub final_columns: BTreeMap<i32, usize>,
}

impl AggregateReport {
    pub fn from_paths(paths: &[CanonicalPath], max_depth: usize) -> Self {
        Self {
            trials: paths.len(),
            combinations: DepthCounts(unique_prefix_counts(paths, max_depth)),
            final_columns: final_column_counts(paths),
        }
    }
}

/// Canonical paths keyed by 0-based trial index.
///
/// Serialized as `{"Run 0": [[x, y], ...], "Run 3": ...}` in index order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Runs(BTreeMap<usize, CanonicalPath>);

impl Runs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, trial: usize, path: CanonicalPath) {
        self.0.insert(trial, path);
    }

    pub fn get(&self, trial: usize) -> Option<&CanonicalPath> {
        self.0.get(&trial)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Paths in trial order, cloned for aggregation.
    pub fn paths(&self) -> Vec<CanonicalPath> {
        self.0.values().cloned().collect()
    }

    pub fn label(trial: usize) -> String {
        format!("{RUN_PREFIX}{trial}")
    }
}

impl Serialize for Runs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (trial, path) in &self.0 {
            map.serialize_entry(&Self::label(*trial), path)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Runs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, CanonicalPath>::deserialize(deserializer)?;
        let mut runs = Runs::new();
        for (key, path) in raw {
            let trial = key
                .strip_prefix(RUN_PREFIX)
                .and_then(|n| n.trim().parse::<usize>().ok())
                .ok_or_else(|| D::Error::custom(format!("invalid run label {key:?}")))?;
            runs.insert(trial, path);
        }
        Ok(runs)
    }
}
