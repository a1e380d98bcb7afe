//! Text report of a search run.
//!
//! Everything is written to a caller-supplied [`Write`] sink so the binary can
//! target stdout while tests capture into a `Vec<u8>`.
//!
//! ## Layout
//!
//! ```text
//! Searching for all possible solutions to the 8-Queens problem...
//!
//! Elimination values for the empty board:
//! Displaying elimination values for current board state:
//! 22 22 22 22 22 22 22 22
//! ...
//!
//! Solution #1:
//! Q . . . . . . .
//! ...
//!
//! Total number of solutions: 92
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::board::Board;
use crate::config::SearchConfig;
use crate::render::ScoreBoard;
use crate::search::{SearchStats, solve};

/// Write the diagnostic score board for `board`, followed by a blank line.
pub fn write_scores<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    writeln!(out, "Displaying elimination values for current board state:")?;
    writeln!(out, "{}", ScoreBoard(board))
}

/// Write the final count line.
pub fn write_count<W: Write>(out: &mut W, solutions: usize) -> io::Result<()> {
    writeln!(out, "Total number of solutions: {solutions}")
}

/// Run one full search as configured and write the report.
///
/// A write failure does not abort the search; the first error is returned once
/// the search has finished and the board is back to empty.
pub fn write_report<W: Write>(out: &mut W, config: &SearchConfig) -> Result<SearchStats> {
    let n = config.size;
    let mut board = Board::new(n);

    writeln!(
        out,
        "Searching for all possible solutions to the {n}-Queens problem...\n"
    )
    .context("failed to write banner")?;

    if config.show_scores {
        writeln!(out, "Elimination values for the empty board:")
            .context("failed to write elimination values")?;
        write_scores(out, &board).context("failed to write elimination values")?;
    }

    let mut failure: Option<io::Error> = None;
    let stats = solve(&mut board, |index, solved| {
        if !config.show_solutions || failure.is_some() {
            return;
        }
        if let Err(e) = writeln!(out, "Solution #{index}:\n{solved}") {
            failure = Some(e);
        }
    });
    if let Some(e) = failure {
        return Err(e).context("failed to write solution");
    }

    write_count(out, stats.solutions).context("failed to write solution count")?;
    out.flush().context("failed to flush report")?;
    Ok(stats)
}
