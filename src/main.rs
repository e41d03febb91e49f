use std::env;
use std::path::Path;
use ulam_goodness::config::load_config;
use ulam_goodness::diagnostics::GoodnessReport;
use ulam_goodness::grid::io::{load_grid, save_mask_png, write_json_file};
use ulam_goodness::score_with_diagnostics;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let options = config
        .detection
        .resolve()
        .map_err(|e| format!("Bad detection settings in {config_path}: {e}"))?;
    let grid = load_grid(&config.input)
        .map_err(|e| format!("Failed to load grid {}: {e}", config.input.display()))?;
    let report = score_with_diagnostics(&grid, &options).map_err(|e| e.to_string())?;

    print_text_summary(&report);

    match &config.output.report_json {
        Some(path) => {
            write_json_file(path, &report)
                .map_err(|e| format!("Failed to write report {}: {e}", path.display()))?;
            println!("JSON report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("\nJSON report:\n{json}");
        }
    }

    if let Some(path) = &config.output.mask_image {
        save_mask_png(&report.mask, path)
            .map_err(|e| format!("Failed to save mask {}: {e}", path.display()))?;
        println!("Mask written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(report: &GoodnessReport) {
    let g = &report.grid;
    println!("Goodness summary");
    println!("  grid: {}x{} (square: {})", g.rows, g.cols, g.square);
    println!("  primes: {}  origin markers: {}", g.prime_cells, g.origin_cells);
    println!(
        "  gap_tolerance: {}  min_run: {}",
        report.options.gap_tolerance, report.options.min_run
    );
    println!("  score: {:.4}", report.score);
    println!(
        "  cells: diagonal={} axis={} union={}",
        report.diagonal_cells, report.axis_cells, report.union_cells
    );
    for d in &report.directions {
        println!(
            "  {:<14} lines={:<4} runs={:<5} accepted={:<4} cells={}",
            d.direction.label(),
            d.lines,
            d.runs_found,
            d.runs_accepted,
            d.cells
        );
    }
    println!("  elapsed_ms: {:.3}", report.timings.total_ms);
}

fn usage() -> String {
    "Usage: ulam_goodness <config.json>".to_string()
}
