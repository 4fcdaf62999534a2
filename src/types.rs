use serde::{Deserialize, Serialize};

/// Raw observed piece position in camera pixel space, `[x, y]`.
pub type Observation = [f64; 2];

/// Observations of one trial, one per capture tick, in temporal order.
pub type Trajectory = Vec<Observation>;

/// Discrete board position: the rounded intersection of one horizontal and one
/// vertical reference line.
///
/// Equality is exact on the integer pixel coordinates, which makes nodes usable
/// as set and map keys. Serialized as a bare `[x, y]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct GridNode {
    pub x: i32,
    pub y: i32,
}

impl GridNode {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rounds a floating-point intersection to the nearest pixel, ties to even.
    pub fn from_rounded(x: f64, y: f64) -> Self {
        Self {
            x: x.round_ties_even() as i32,
            y: y.round_ties_even() as i32,
        }
    }

    /// Squared Euclidean distance to an observation.
    #[inline]
    pub fn distance_sq_to(&self, p: Observation) -> f64 {
        let dx = p[0] - self.x as f64;
        let dy = p[1] - self.y as f64;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(&self, other: &GridNode) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<[i32; 2]> for GridNode {
    fn from(p: [i32; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl From<GridNode> for [i32; 2] {
    fn from(n: GridNode) -> Self {
        [n.x, n.y]
    }
}

/// Node sequence of one trial after snapping and chaining.
///
/// Consecutive elements are distinct and closer than the configured max jump;
/// no node appears twice.
pub type CanonicalPath = Vec<GridNode>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_uses_ties_to_even() {
        assert_eq!(GridNode::from_rounded(2.5, 3.5), GridNode::new(2, 4));
        assert_eq!(GridNode::from_rounded(-0.4, 10.6), GridNode::new(0, 11));
    }

    #[test]
    fn serializes_as_pair() {
        let json = serde_json::to_string(&GridNode::new(12, -3)).unwrap();
        assert_eq!(json, "[12,-3]");
        let back: GridNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GridNode::new(12, -3));
    }

    #[test]
    fn distances() {
        let a = GridNode::new(0, 0);
        let b = GridNode::new(3, 4);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance_sq_to([1.0, 1.0]), 2.0);
    }

    #[test]
    fn distance_between_extreme_nodes_does_not_overflow() {
        let a = GridNode::new(i32::MIN, 0);
        let b = GridNode::new(i32::MAX, 0);
        assert!((a.distance(&b) - u32::MAX as f64).abs() < 1.0);
        assert_eq!(b.distance(&a), a.distance(&b));
    }
}
