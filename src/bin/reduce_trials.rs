use plinko_paths::aggregate::AggregateReport;
use plinko_paths::config::reduce;
use plinko_paths::io::{list_trial_files, load_trials_dir, write_json_file};
use plinko_paths::sources::SegmentFile;
use plinko_paths::{reduce_trials, BatchOutcome, Board};
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
    let config = reduce::load_config(Path::new(&config_path))?;
    let params = &config.params;

    let board = Board::from_source(&SegmentFile(config.segments.clone()), params)?;
    let files = list_trial_files(&config.trials_dir)?;
    let trials = load_trials_dir(&config.trials_dir)?;

    let outcome = reduce_trials(&board, &trials, params).map_err(|e| e.to_string())?;
    let report = outcome.aggregate(params.max_depth);

    print_text_summary(&outcome, &report, &files);

    write_json_file(&config.output.runs_json, &outcome.runs)?;
    println!("\nRuns written to {}", config.output.runs_json.display());
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("Aggregate report written to {}", path.display());
    }
    Ok(())
}

fn print_text_summary(
    outcome: &BatchOutcome,
    report: &AggregateReport,
    files: &[std::path::PathBuf],
) {
    println!("Reduction summary");
    println!("  trials: {}", outcome.reports.len());
    println!("  kept: {}", outcome.runs.len());
    if !outcome.discarded.is_empty() {
        println!("  discarded:");
        for &trial in &outcome.discarded {
            let name = files
                .get(trial)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| format!("trial {trial}"));
            println!("    {name}");
        }
    }
    println!("Unique prefixes");
    for (depth, count) in &report.combinations.0 {
        println!("  depth {depth}: {count}");
    }
    println!("Final columns");
    for (x, count) in &report.final_columns {
        println!("  x={x}: {count}");
    }
}

fn usage() -> String {
    "Usage: reduce_trials <config.json>".to_string()
}
