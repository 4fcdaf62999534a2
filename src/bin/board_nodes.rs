use plinko_paths::config::nodes;
use plinko_paths::io::{load_segments, write_json_file};
use plinko_paths::{Board, GridMode, GridNode};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = nodes::load_config(Path::new(&config_path))?;
    config.params.validate().map_err(|e| e.to_string())?;

    let segments = load_segments(&config.segments)?;
    let board = Board::new(segments, &config.params);
    let families = board.families();

    let report = BoardNodesReport {
        vertical: families.vertical.len(),
        horizontal: families.horizontal.len(),
        unclassified: families.unclassified,
        intersections: board.nodes(GridMode::Intersections).to_vec(),
        averaged: board.nodes(GridMode::Averaged).to_vec(),
    };
    write_json_file(&config.output, &report)?;

    println!(
        "Segments: {} vertical, {} horizontal, {} unclassified (threshold {:.1} px)",
        report.vertical,
        report.horizontal,
        report.unclassified,
        board.vh_threshold()
    );
    println!("  intersections: {} nodes", report.intersections.len());
    println!("  averaged: {} nodes", report.averaged.len());
    println!("Saved node sets to {}", config.output.display());
    Ok(())
}

fn usage() -> String {
    "Usage: board_nodes <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BoardNodesReport {
    vertical: usize,
    horizontal: usize,
    unclassified: usize,
    intersections: Vec<GridNode>,
    averaged: Vec<GridNode>,
}
