//! Parameters for grid construction, snapping and chaining.
//!
//! Defaults follow the board rig: reference lines longer than 300 px along one
//! axis, jumps of 300 px or more treated as tracking noise.

use crate::grid::GridMode;
use serde::{Deserialize, Serialize};

/// Reduction parameters shared by every trial on a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReducerParams {
    /// Minimum |Δy| (vertical) or |Δx| (horizontal) for a segment to take
    /// part in grid construction, in pixels.
    pub vh_threshold: f64,
    /// Consecutive nodes this far apart or more are not a real transition.
    pub max_jump: f64,
    /// Line pairs with |determinant| at or below this are parallel.
    /// `0.0` only rejects exactly parallel lines.
    pub parallel_tolerance: f64,
    /// Node construction strategy.
    pub grid_mode: GridMode,
    /// Deepest prefix length reported by aggregation.
    pub max_depth: usize,
    /// Shortest canonical path kept for aggregation.
    pub min_path_len: usize,
}

impl Default for ReducerParams {
    fn default() -> Self {
        Self {
            vh_threshold: 300.0,
            max_jump: 300.0,
            parallel_tolerance: 0.0,
            grid_mode: GridMode::Averaged,
            max_depth: 10,
            min_path_len: 2,
        }
    }
}

/// A parameter that cannot be used.
#[derive(Clone, Debug, PartialEq)]
pub struct InvalidParam {
    pub field: &'static str,
    pub reason: String,
}

impl std::fmt::Display for InvalidParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid parameter `{}`: {}", self.field, self.reason)
    }
}

impl std::error::Error for InvalidParam {}

impl ReducerParams {
    pub fn with_grid_mode(mut self, mode: GridMode) -> Self {
        self.grid_mode = mode;
        self
    }

    pub fn with_max_jump(mut self, max_jump: f64) -> Self {
        self.max_jump = max_jump;
        self
    }

    pub fn validate(&self) -> Result<(), InvalidParam> {
        if !self.vh_threshold.is_finite() || self.vh_threshold < 0.0 {
            return Err(InvalidParam {
                field: "vh_threshold",
                reason: format!("must be finite and non-negative, got {}", self.vh_threshold),
            });
        }
        if self.max_jump.is_nan() || self.max_jump <= 0.0 {
            return Err(InvalidParam {
                field: "max_jump",
                reason: format!("must be positive, got {}", self.max_jump),
            });
        }
        if !self.parallel_tolerance.is_finite() || self.parallel_tolerance < 0.0 {
            return Err(InvalidParam {
                field: "parallel_tolerance",
                reason: format!(
                    "must be finite and non-negative, got {}",
                    self.parallel_tolerance
                ),
            });
        }
        if self.min_path_len < 2 {
            return Err(InvalidParam {
                field: "min_path_len",
                reason: format!("a path needs at least 2 nodes, got {}", self.min_path_len),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: ReducerParams =
            serde_json::from_str(r#"{"max_jump": 120.0, "grid_mode": "intersections"}"#).unwrap();
        assert_eq!(params.max_jump, 120.0);
        assert_eq!(params.grid_mode, GridMode::Intersections);
        assert_eq!(params.vh_threshold, 300.0);
        assert_eq!(params.parallel_tolerance, 0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let bad = ReducerParams::default().with_max_jump(0.0);
        assert_eq!(bad.validate().unwrap_err().field, "max_jump");
        let bad = ReducerParams {
            parallel_tolerance: f64::NAN,
            ..Default::default()
        };
        assert_eq!(bad.validate().unwrap_err().field, "parallel_tolerance");
        let bad = ReducerParams {
            min_path_len: 1,
            ..Default::default()
        };
        assert_eq!(bad.validate().unwrap_err().field, "min_path_len");
    }
}
