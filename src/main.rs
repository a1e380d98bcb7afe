//! Queens-Rust: enumerate every N-Queens solution.
//!
//! ## Usage
//!
//! - `queens-rust` - Run the full search and print every solution
//! - `queens-rust scores` - Show elimination scores for the empty board
//! - `queens-rust count` - Print only the number of solutions
//! - `queens-rust --size 6` - Override the board size chosen at build time

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use queens_rust::board::Board;
use queens_rust::config::SearchConfig;
use queens_rust::constants::N;
use queens_rust::report::{write_report, write_scores};
use queens_rust::search::SearchStats;

/// Queens-Rust: elimination-ordered N-Queens search
#[derive(Parser)]
#[command(name = "queens-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board size (defaults to the size selected at build time)
    #[arg(short, long, global = true, default_value_t = N)]
    size: usize,

    /// Print search statistics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the search and print every solution (default)
    Solve,
    /// Print the elimination scores of the empty board
    Scores,
    /// Run the search and print only the total
    Count,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SearchConfig::with_size(cli.size)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Scores) => {
            write_scores(&mut out, &Board::new(config.size))
                .context("failed to write elimination values")?;
            out.flush()?;
        }
        Some(Commands::Count) => run(&mut out, &config.quiet(), cli.verbose)?,
        Some(Commands::Solve) | None => run(&mut out, &config, cli.verbose)?,
    }
    Ok(())
}

fn run<W: Write>(out: &mut W, config: &SearchConfig, verbose: bool) -> Result<()> {
    let start = Instant::now();
    let stats = write_report(out, config)?;
    if verbose {
        dump_stats(config.size, &stats, start.elapsed().as_secs_f64());
    }
    Ok(())
}

/// Print search statistics to stderr.
fn dump_stats(size: usize, stats: &SearchStats, secs: f64) {
    eprintln!(
        "size={} solutions={} placements={} dead_ends={} time={:.3}s",
        size, stats.solutions, stats.placements, stats.dead_ends, secs
    );
}
