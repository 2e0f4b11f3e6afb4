use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use gatepath::io::{PathExport, RouteInput};
use gatepath::operations::{PathResult, ShortestPath, ValidatePath};
use gatepath::GatepathError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Reads a route description, solves it, validates the result and exports it.
///
/// ```text
/// gatepath route.json                  # writes output.json
/// gatepath route.json path.json -v     # custom output, debug logging
/// RUST_LOG=gatepath=trace gatepath route.json --print-graph
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest route through ordered navigation gates")]
struct Args {
    /// JSON file with the points and the start/end labels.
    input: PathBuf,

    /// Where to write the resulting path.
    #[arg(default_value = "output.json")]
    output: PathBuf,

    /// Print the visibility graph after solving.
    #[arg(long)]
    print_graph: bool,

    /// Do not write the output file.
    #[arg(long)]
    no_export: bool,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

/// Log filter: `rust_log` when set, otherwise WARN for everything and INFO
/// (DEBUG with `verbose`) for gatepath.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => {
            let crate_level = if verbose { "debug" } else { "info" };
            EnvFilter::new(format!("warn,gatepath={crate_level}"))
        }
    }
}

fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .init();
}

fn print_path(result: &PathResult) {
    if !result.found {
        println!("No path found");
        return;
    }
    println!("Shortest path found");
    println!("Total distance: {}", result.total_distance);
    println!("Path ({} points):", result.path.len());
    let hops = result.hop_lengths();
    for (i, point) in result.path.iter().enumerate() {
        match hops.get(i) {
            Some(hop) => println!(
                "  {}. {} ({}, {}) -> distance: {hop}",
                i + 1,
                point.label,
                point.x(),
                point.y()
            ),
            None => println!("  {}. {} ({}, {})", i + 1, point.label, point.x(), point.y()),
        }
    }
}

fn run(args: &Args) -> Result<bool, GatepathError> {
    let started = Instant::now();
    let input = RouteInput::from_file(&args.input)?;
    info!(
        points = input.points.len(),
        gateways = input.gateways.len(),
        start = %input.start.label,
        end = %input.end.label,
        "loaded {}",
        args.input.display()
    );
    for gate in &input.gateways {
        info!(
            order = gate.order,
            left = %gate.left.label,
            right = %gate.right.label,
            "gateway"
        );
    }

    let solve_started = Instant::now();
    let (result, graph) =
        ShortestPath::new(&input.gateways, &input.start, &input.end).execute_with_graph()?;
    info!(elapsed = ?solve_started.elapsed(), "solved");

    if args.print_graph {
        print!("{graph}");
    }
    print_path(&result);

    if result.found {
        let valid =
            ValidatePath::new(&result.path, &input.gateways, &input.start, &input.end).execute();
        println!("Path validation: {}", if valid { "PASSED" } else { "FAILED" });
        if !valid {
            warn!("computed path does not satisfy all constraints");
        }
        if !args.no_export {
            PathExport::new(&result).write_to_file(&args.output)?;
            println!("Path exported to: {}", args.output.display());
        }
    }

    info!(elapsed = ?started.elapsed(), "done");
    Ok(result.found)
}

/// Exit codes: `0` path found, `1` no path exists, `2` invalid input.
fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
