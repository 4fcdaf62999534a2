//! Max-jump chaining of snapped node sequences.

use crate::snap::dedup_global;
use crate::types::{CanonicalPath, GridNode};

/// Build the canonical path from a snapped (and usually deduplicated) node
/// sequence.
///
/// Every consecutive pair closer than `max_jump` contributes both of its
/// nodes; pairs at or beyond `max_jump` are dropped, never bridged. Repeats
/// introduced by overlapping pairs are removed keeping first occurrences.
/// Where dropping a jump leaves two far-apart nodes adjacent, the later node
/// is discarded so the result never contains a jump of `max_jump` or more.
///
/// Fewer than two input nodes yield an empty path.
pub fn chain(snapped: &[GridNode], max_jump: f64) -> CanonicalPath {
    let mut paired: Vec<GridNode> = Vec::with_capacity(snapped.len() * 2);
    for pair in snapped.windows(2) {
        if pair[0].distance(&pair[1]) < max_jump {
            paired.push(pair[0]);
            paired.push(pair[1]);
        }
    }

    let mut path: CanonicalPath = Vec::with_capacity(paired.len());
    for node in dedup_global(&paired) {
        let far = path
            .last()
            .is_some_and(|last| last.distance(&node) >= max_jump);
        if !far {
            path.push(node);
        }
    }
    path
}
