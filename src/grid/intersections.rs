use super::LineFamilies;
use crate::geometry::{intersect, within_bounds};
use crate::types::GridNode;

/// Pairwise horizontal × vertical intersections that land strictly inside
/// both drawn segments. Parallel pairs are skipped.
///
/// Membership is a linear scan; boards carry tens of lines.
pub fn intersection_nodes(families: &LineFamilies<'_>, parallel_tolerance: f64) -> Vec<GridNode> {
    let mut nodes: Vec<GridNode> = Vec::new();
    for horizontal in &families.horizontal {
        let lh = horizontal.line();
        for vertical in &families.vertical {
            let Some([x, y]) = intersect(&lh, &vertical.line(), parallel_tolerance) else {
                continue;
            };
            let node = GridNode::from_rounded(x, y);
            if within_bounds(node, horizontal, vertical) && !nodes.contains(&node) {
                nodes.push(node);
            }
        }
    }
    nodes
}
