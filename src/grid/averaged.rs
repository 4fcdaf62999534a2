use super::LineFamilies;
use crate::types::GridNode;

/// Full lattice from one coordinate per line: the mean x of each vertical
/// segment crossed with the mean y of each horizontal segment.
///
/// No bounds check is applied, so every (horizontal, vertical) pair yields a
/// node. Empty if either family is empty.
pub fn averaged_nodes(families: &LineFamilies<'_>) -> Vec<GridNode> {
    let xs: Vec<f64> = families
        .vertical
        .iter()
        .map(|s| s.midpoint()[0])
        .collect();
    let ys: Vec<f64> = families
        .horizontal
        .iter()
        .map(|s| s.midpoint()[1])
        .collect();

    let mut nodes: Vec<GridNode> = Vec::with_capacity(xs.len() * ys.len());
    for &y in &ys {
        for &x in &xs {
            let node = GridNode::from_rounded(x, y);
            if !nodes.contains(&node) {
                nodes.push(node);
            }
        }
    }
    nodes
}
