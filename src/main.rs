mod analysis;
mod common;
mod parsing;

use argh::FromArgs;
use bytesize::ByteSize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Import chart generators
use analysis::{
    generate_cost_verification_plot, generate_execution_time_plot, generate_operation_count_plot,
    generate_performance_advantage_plot, generate_time_by_category_plot,
    generate_time_vs_edges_plot,
};
use analysis::constants::CHART_FILES;
use common::buckets::format_category_table;
use common::{PlotError, PlotStyle};

// Import parsing functionality
use parsing::parse_results;

/// Width of the separator around the final summary
const SUMMARY_WIDTH: usize = 70;

/// Chart generator for Prim vs Kruskal MST benchmark results
#[derive(FromArgs, Debug)]
pub struct Args {
    /// benchmark results CSV to read (default: output.csv)
    #[argh(option, short = 'i', default = "PathBuf::from(\"output.csv\")")]
    input: PathBuf,

    /// directory the charts are written to (default: charts)
    #[argh(option, short = 'o', default = "PathBuf::from(\"charts\")")]
    output_dir: PathBuf,
}

/// Errors that abort a report run
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Parsing(#[from] parsing::ParsingError),

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to generate {chart} chart: {source}")]
    Chart {
        chart: &'static str,
        source: PlotError,
    },
}

type Result<T> = core::result::Result<T, ReportError>;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: Args = argh::from_env();

    if let Err(e) = run(&args) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    println!("Loading data from {}...", args.input.display());
    let rows = parse_results(&args.input)?;
    println!("✓ Loaded {} graph results", rows.len());

    // Only created once the input is known to be good
    let output_dir = args.output_dir.as_path();
    fs::create_dir_all(output_dir).map_err(|source| ReportError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let style = PlotStyle::default();
    log::info!(
        "Rendering {} rows at {} DPI into {}",
        rows.len(),
        style.dpi,
        output_dir.display()
    );

    announce(1, "Execution Time vs Graph Size");
    let path = generate_execution_time_plot(&rows, &style, output_dir)
        .map_err(chart_error("execution time"))?;
    report_saved(&path)?;

    announce(2, "Operation Count vs Graph Size");
    let path = generate_operation_count_plot(&rows, &style, output_dir)
        .map_err(chart_error("operation count"))?;
    report_saved(&path)?;

    announce(3, "Time Comparison by Graph Category");
    let (path, averages) = generate_time_by_category_plot(&rows, &style, output_dir)
        .map_err(chart_error("time by category"))?;
    report_saved(&path)?;
    println!(
        "\n{}",
        format_category_table(&averages, Some("Average Execution Time by Category"))
    );

    announce(4, "Performance Advantage");
    let path = generate_performance_advantage_plot(&rows, &style, output_dir)
        .map_err(chart_error("performance advantage"))?;
    report_saved(&path)?;

    announce(5, "Execution Time vs Number of Edges");
    let path = generate_time_vs_edges_plot(&rows, &style, output_dir)
        .map_err(chart_error("time vs edges"))?;
    report_saved(&path)?;

    announce(6, "MST Cost Verification");
    let (path, status) = generate_cost_verification_plot(&rows, &style, output_dir)
        .map_err(chart_error("cost verification"))?;
    report_saved(&path)?;
    println!("  Status: {}", status.label());

    print_summary(output_dir);
    Ok(())
}

fn chart_error(chart: &'static str) -> impl FnOnce(PlotError) -> ReportError {
    move |source| ReportError::Chart { chart, source }
}

fn announce(number: usize, title: &str) {
    println!("\n📊 Generating Chart {}: {}...", number, title);
}

fn report_saved(path: &Path) -> Result<()> {
    let size = fs::metadata(path)
        .map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    println!("✓ Saved: {} ({})", path.display(), ByteSize(size));
    Ok(())
}

fn print_summary(output_dir: &Path) {
    let rule = "=".repeat(SUMMARY_WIDTH);
    println!("\n{}", rule);
    println!("✓ All charts generated successfully!");
    println!("{}", rule);

    println!("\nGenerated files in '{}/' directory:", output_dir.display());
    for (index, file) in CHART_FILES.iter().enumerate() {
        println!("  {}. {}", index + 1, file);
    }

    println!("\nYou can now insert these images into your README.md!");
    println!("\nExample markdown:");
    println!(
        "  ![Execution Time]({})",
        output_dir.join(CHART_FILES[0]).display()
    );
}
