//! Numerical semigroup gap graph CLI
//!
//! Usage: semigap <GENERATORS>... [options]
//!
//! Example:
//!   semigap 3 5
//!   semigap 3 5 --limit-factor 4 --layout
//!   semigap 6 7 --exact-threshold 15 --json
//!
//! Prints the semigroup invariants, the gap graph and a dominating set.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use semigap_domination::{
    AnalysisOptions, DEFAULT_LIMIT_FACTOR, EXACT_SEARCH_THRESHOLD, GapGraphReport, analyze,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "semigap")]
#[command(version, about = "Domination number of a numerical semigroup's gap graph")]
struct Cli {
    /// Semigroup generators (positive integers)
    #[arg(required = true)]
    generators: Vec<u32>,

    /// Bound the semigroup at max(generators) * LIMIT_FACTOR
    #[arg(long, default_value_t = DEFAULT_LIMIT_FACTOR)]
    limit_factor: u32,

    /// Solve graphs with at most this many vertices exactly (max 32)
    #[arg(long, default_value_t = EXACT_SEARCH_THRESHOLD)]
    exact_threshold: usize,

    /// Disable the parallel exact search
    #[arg(long)]
    sequential: bool,

    /// Include the circular layout
    #[arg(long)]
    layout: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn format_gaps(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_report(report: &GapGraphReport, elapsed_secs: f64) {
    let inv = &report.invariants;

    println!("Generators: {:?}", report.generators);
    println!(
        "Bound: {} (limit factor {}), max element {}",
        report.bound, report.limit_factor, report.max_element
    );
    println!(
        "Multiplicity: {}",
        inv.multiplicity.map_or("-".to_string(), |m| m.to_string())
    );
    println!(
        "Frobenius number: {}",
        inv.frobenius_number.map_or("-".to_string(), |f| f.to_string())
    );
    println!("Conductor: {}", inv.conductor);
    println!("Genus: {}", inv.genus);
    println!();
    println!("Gaps ({}): {}", report.gaps.len(), format_gaps(&report.gaps));
    println!("Edges ({}):", report.edges.len());
    for (a, b) in &report.edges {
        println!("  {} - {} (difference {})", a, b, b - a);
    }
    println!();

    let domination = &report.domination;
    let qualifier = if domination.is_exact() {
        "domination number"
    } else {
        "greedy upper bound"
    };
    println!(
        "Dominating set ({:?}): {{{}}}",
        domination.method,
        format_gaps(&domination.set)
    );
    println!("Size: {} ({})", domination.size, qualifier);

    if let Some(layout) = &report.layout {
        println!();
        println!("Layout:");
        for (v, p) in layout {
            println!("  {:>4}: ({:+.4}, {:+.4})", v, p.x, p.y);
        }
    }

    println!();
    println!("Completed in {:.3} seconds.", elapsed_secs);
}

fn run(cli: &Cli) -> Result<()> {
    let options = AnalysisOptions::default()
        .with_limit_factor(cli.limit_factor)
        .with_exact_threshold(cli.exact_threshold)
        .with_parallel(!cli.sequential)
        .with_layout(cli.layout);

    let start = Instant::now();
    let report = analyze(&cli.generators, &options)
        .with_context(|| format!("cannot analyze generators {:?}", cli.generators))?;
    let elapsed = start.elapsed();

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("cannot serialize report")?;
        println!("{}", json);
    } else {
        print_report(&report, elapsed.as_secs_f64());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
