use crate::geometry::{self, Orientation};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Reference line drawn by the calibration operator, stored as its two
/// endpoints in pixel space.
///
/// Serialized as `[[x0, y0], [x1, y1]]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 2]; 2]", into = "[[f64; 2]; 2]")]
pub struct Segment {
    pub p0: [f64; 2],
    pub p1: [f64; 2],
}

impl Segment {
    pub fn new(p0: [f64; 2], p1: [f64; 2]) -> Self {
        Self { p0, p1 }
    }

    pub fn dx(&self) -> f64 {
        self.p1[0] - self.p0[0]
    }

    pub fn dy(&self) -> f64 {
        self.p1[1] - self.p0[1]
    }

    pub fn midpoint(&self) -> [f64; 2] {
        [
            (self.p0[0] + self.p1[0]) * 0.5,
            (self.p0[1] + self.p1[1]) * 0.5,
        ]
    }

    /// Line representation: ax + by + c = 0 (not normalized).
    pub fn line(&self) -> Vector3<f64> {
        geometry::line_through(self.p0, self.p1)
    }

    pub fn orientation(&self, threshold: f64) -> Orientation {
        geometry::classify(self, threshold)
    }
}

impl From<[[f64; 2]; 2]> for Segment {
    fn from(p: [[f64; 2]; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl From<Segment> for [[f64; 2]; 2] {
    fn from(s: Segment) -> Self {
        [s.p0, s.p1]
    }
}
