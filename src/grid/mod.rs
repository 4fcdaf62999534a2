//! Grid node construction from reference segments.
//!
//! Segments are first split into vertical and horizontal families by
//! [`classify`](crate::geometry::classify); unclassified segments are dropped.
//! Nodes are then produced in one of two modes:
//! - [`GridMode::Intersections`]: pairwise line intersections, kept only when
//!   they fall strictly inside both drawn segments ([`intersections`]).
//! - [`GridMode::Averaged`]: one representative coordinate per line, crossed
//!   into a full lattice ([`averaged`]).
//!
//! Both modes return rounded pixel nodes without duplicates, in
//! horizontal-major construction order.

pub mod averaged;
pub mod intersections;

pub use averaged::averaged_nodes;
pub use intersections::intersection_nodes;

use crate::geometry::Orientation;
use crate::segment::Segment;
use crate::types::GridNode;
use log::debug;
use serde::{Deserialize, Serialize};

/// Node construction strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridMode {
    /// Bounds-checked pairwise intersections. Tracks slanted lines accurately;
    /// used for single-trial overlays.
    Intersections,
    /// Cross product of averaged line coordinates. Used for aggregation.
    #[default]
    Averaged,
}

impl GridMode {
    pub fn label(&self) -> &'static str {
        match self {
            GridMode::Intersections => "intersections",
            GridMode::Averaged => "averaged",
        }
    }
}

/// Segments partitioned by orientation.
#[derive(Clone, Debug, Default)]
pub struct LineFamilies<'a> {
    pub vertical: Vec<&'a Segment>,
    pub horizontal: Vec<&'a Segment>,
    pub unclassified: usize,
}

pub fn partition(segments: &[Segment], threshold: f64) -> LineFamilies<'_> {
    let mut families = LineFamilies::default();
    for seg in segments {
        match seg.orientation(threshold) {
            Orientation::Vertical => families.vertical.push(seg),
            Orientation::Horizontal => families.horizontal.push(seg),
            Orientation::Unclassified => families.unclassified += 1,
        }
    }
    families
}

/// Build the node set for `segments` in the requested mode.
pub fn build_nodes(
    segments: &[Segment],
    mode: GridMode,
    threshold: f64,
    parallel_tolerance: f64,
) -> Vec<GridNode> {
    let families = partition(segments, threshold);
    let nodes = match mode {
        GridMode::Intersections => intersection_nodes(&families, parallel_tolerance),
        GridMode::Averaged => averaged_nodes(&families),
    };
    debug!(
        "grid::build_nodes mode={} vertical={} horizontal={} dropped={} nodes={}",
        mode.label(),
        families.vertical.len(),
        families.horizontal.len(),
        families.unclassified,
        nodes.len()
    );
    nodes
}
