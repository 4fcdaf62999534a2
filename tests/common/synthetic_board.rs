use plinko_paths::{GridNode, Segment, Trajectory};

pub const COLS: usize = 7;
pub const ROWS: usize = 8;
pub const X0: f64 = 100.0;
pub const Y0: f64 = 100.0;
pub const DX: f64 = 80.0;
pub const DY: f64 = 70.0;

/// Fixed observation noise, cycled through per observation.
const JITTER: [[f64; 2]; 5] = [
    [2.0, -3.0],
    [-4.0, 1.5],
    [0.5, 4.0],
    [-1.0, -2.5],
    [3.5, 0.0],
];

pub fn node(col: usize, row: usize) -> GridNode {
    GridNode::new(
        (X0 + DX * col as f64) as i32,
        (Y0 + DY * row as f64) as i32,
    )
}

/// Axis-aligned board: one vertical line per column and one horizontal line
/// per row, each overhanging the outer nodes by 40 px.
pub fn board_segments() -> Vec<Segment> {
    let x_end = X0 + DX * (COLS - 1) as f64 + 40.0;
    let y_end = Y0 + DY * (ROWS - 1) as f64 + 40.0;
    let mut segs = Vec::new();
    for c in 0..COLS {
        let x = X0 + DX * c as f64;
        segs.push(Segment::new([x, Y0 - 40.0], [x, y_end]));
    }
    for r in 0..ROWS {
        let y = Y0 + DY * r as f64;
        segs.push(Segment::new([X0 - 40.0, y], [x_end, y]));
    }
    // Calibration stray: too short to classify.
    segs.push(Segment::new([10.0, 10.0], [30.0, 40.0]));
    segs
}

/// Columns visited when starting at `start` and stepping one column per row.
pub fn columns(start: usize, moves: &[i32]) -> Vec<usize> {
    let mut cols = vec![start];
    let mut c = start as i32;
    for m in moves {
        c += m;
        cols.push(c as usize);
    }
    cols
}

pub fn expected_path(start: usize, moves: &[i32]) -> Vec<GridNode> {
    columns(start, moves)
        .into_iter()
        .enumerate()
        .map(|(row, col)| node(col, row))
        .collect()
}

/// Noisy observations of a descent, `per_node` ticks at every visited node.
pub fn descent(start: usize, moves: &[i32], per_node: usize) -> Trajectory {
    let mut traj = Vec::new();
    let mut k = 0;
    for n in expected_path(start, moves) {
        for _ in 0..per_node {
            let j = JITTER[k % JITTER.len()];
            traj.push([n.x as f64 + j[0], n.y as f64 + j[1]]);
            k += 1;
        }
    }
    traj
}
