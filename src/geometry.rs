//! Exact 2D line arithmetic on reference segments.
//!
//! Lines are homogeneous triples `[a, b, c]` with `a·x + b·y + c = 0`, built
//! from two points as `a = y0 − y1`, `b = x1 − x0`, `c = x0·y1 − x1·y0`. The
//! intersection of two lines is their cross product; the third component is
//! the determinant `D = a1·b2 − b1·a2` of the 2×2 system.
//!
//! No tolerance is introduced implicitly: callers pass `parallel_tolerance`
//! explicitly, and `0.0` means "parallel only when `D` is exactly zero".

use crate::segment::Segment;
use crate::types::GridNode;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Orientation of a reference segment under a pixel threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
    Unclassified,
}

/// Vertical if |Δy| exceeds `threshold`, else horizontal if |Δx| does,
/// else unclassified. The vertical test wins when both axes qualify.
pub fn classify(segment: &Segment, threshold: f64) -> Orientation {
    if segment.dy().abs() > threshold {
        Orientation::Vertical
    } else if segment.dx().abs() > threshold {
        Orientation::Horizontal
    } else {
        Orientation::Unclassified
    }
}

/// Homogeneous line through `p0` and `p1`.
#[inline]
pub fn line_through(p0: [f64; 2], p1: [f64; 2]) -> Vector3<f64> {
    let a = p0[1] - p1[1];
    let b = p1[0] - p0[0];
    let c = p0[0] * p1[1] - p1[0] * p0[1];
    Vector3::new(a, b, c)
}

/// Intersects two lines. Returns `None` when `|D| <= parallel_tolerance`
/// (parallel or coincident lines).
pub fn intersect(
    l1: &Vector3<f64>,
    l2: &Vector3<f64>,
    parallel_tolerance: f64,
) -> Option<[f64; 2]> {
    let p = l1.cross(l2);
    let det = p[2];
    if det.abs() <= parallel_tolerance || !det.is_finite() {
        return None;
    }
    Some([p[0] / det, p[1] / det])
}

/// True when `node` lies strictly inside the x-extent of `horizontal` and
/// strictly inside the y-extent of `vertical`. Endpoint order is irrelevant.
pub fn within_bounds(node: GridNode, horizontal: &Segment, vertical: &Segment) -> bool {
    let x = node.x as f64;
    let y = node.y as f64;
    strictly_between(x, horizontal.p0[0], horizontal.p1[0])
        && strictly_between(y, vertical.p0[1], vertical.p1[1])
}

#[inline]
fn strictly_between(v: f64, a: f64, b: f64) -> bool {
    (a < v && v < b) || (b < v && v < a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * (1.0 + a.abs().max(b.abs()))
    }

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new([x0, y0], [x1, y1])
    }

    #[test]
    fn classify_by_threshold() {
        assert_eq!(classify(&seg(0.0, 0.0, 5.0, 400.0), 300.0), Orientation::Vertical);
        assert_eq!(classify(&seg(10.0, 0.0, -400.0, 20.0), 300.0), Orientation::Horizontal);
        assert_eq!(classify(&seg(0.0, 0.0, 300.0, 300.0), 300.0), Orientation::Unclassified);
        // Both axes over the threshold: vertical test runs first.
        assert_eq!(classify(&seg(0.0, 0.0, 500.0, 400.0), 300.0), Orientation::Vertical);
    }

    #[test]
    fn intersection_satisfies_both_lines() {
        let pairs = [
            (seg(0.0, 0.0, 10.0, 3.0), seg(2.0, -7.0, 4.0, 9.0)),
            (seg(-50.0, 52.0, 620.0, 48.0), seg(301.0, 0.0, 297.0, 700.0)),
            (seg(1.5, 2.5, -3.0, 8.0), seg(0.0, 0.0, 1.0, 1.0)),
        ];
        for (s1, s2) in pairs {
            let (l1, l2) = (s1.line(), s2.line());
            let [x, y] = intersect(&l1, &l2, 0.0).expect("non-parallel");
            for l in [l1, l2] {
                let residual = l[0] * x + l[1] * y + l[2];
                let scale = l[0].abs() * x.abs() + l[1].abs() * y.abs() + l[2].abs();
                assert!(residual.abs() <= 1e-9 * scale.max(1.0), "residual {residual}");
            }
        }
    }

    #[test]
    fn axis_aligned_intersection() {
        let h = seg(-50.0, 50.0, 50.0, 50.0);
        let v = seg(0.0, 0.0, 0.0, 100.0);
        let [x, y] = intersect(&h.line(), &v.line(), 0.0).unwrap();
        assert!(approx_eq(x, 0.0) && approx_eq(y, 50.0));
    }

    #[test]
    fn parallel_and_coincident_lines_have_no_intersection() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(0.0, 5.0, 10.0, 5.0);
        let c = seg(20.0, 0.0, 30.0, 0.0);
        assert!(intersect(&a.line(), &b.line(), 0.0).is_none());
        assert!(intersect(&a.line(), &c.line(), 0.0).is_none());
    }

    #[test]
    fn tolerance_rejects_nearly_parallel_lines() {
        let a = seg(0.0, 0.0, 1000.0, 0.0);
        let b = seg(0.0, 5.0, 1000.0, 5.001);
        let (la, lb) = (a.line(), b.line());
        assert!(intersect(&la, &lb, 0.0).is_some());
        assert!(intersect(&la, &lb, 10.0).is_none());
    }

    #[test]
    fn bounds_are_open_and_order_independent() {
        let h = seg(50.0, 10.0, -50.0, 10.0);
        let v = seg(0.0, 100.0, 0.0, 0.0);
        assert!(within_bounds(GridNode::new(0, 10), &h, &v));
        assert!(within_bounds(GridNode::new(49, 99), &h, &v));
        assert!(!within_bounds(GridNode::new(50, 10), &h, &v));
        assert!(!within_bounds(GridNode::new(0, 0), &h, &v));
        assert!(!within_bounds(GridNode::new(0, 120), &h, &v));
    }
}
