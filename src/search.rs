//! Column-by-column backtracking search.
//!
//! For each column the safe rows are scored with
//! [`elimination_score`](crate::threat::elimination_score) and tried in
//! ascending score order, ties going to the lower row. The ordering decides
//! the sequence in which solutions are found, never which ones: every safe
//! candidate is explored.

use crate::board::Board;
use crate::threat::{elimination_score, is_safe};

/// A safe cell in the column being filled, with its elimination score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub row: usize,
    pub col: usize,
    pub elimination: usize,
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Complete placements found
    pub solutions: usize,
    /// Queens placed, solutions included
    pub placements: usize,
    /// Columns reached with no safe row
    pub dead_ends: usize,
}

/// Safe rows of `col`, sorted by elimination score.
///
/// Rows are generated in increasing order and the sort is stable, so equal
/// scores keep ascending row order.
pub fn column_candidates(board: &Board, col: usize) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = (0..board.size())
        .filter(|&row| is_safe(board, row, col))
        .map(|row| Candidate {
            row,
            col,
            elimination: elimination_score(board, row, col),
        })
        .collect();
    candidates.sort_by_key(|c| c.elimination);
    candidates
}

/// Run the full search over `board`, starting from column 0.
///
/// `emit` is called with the 1-based solution index and the completed board
/// for every solution. The board must be empty on entry and is empty again on
/// return.
pub fn solve<F>(board: &mut Board, mut emit: F) -> SearchStats
where
    F: FnMut(usize, &Board),
{
    debug_assert!(board.is_empty(), "search must start from an empty board");
    let mut stats = SearchStats::default();
    descend(board, 0, &mut stats, &mut emit);
    stats
}

fn descend<F>(board: &mut Board, col: usize, stats: &mut SearchStats, emit: &mut F)
where
    F: FnMut(usize, &Board),
{
    if col >= board.size() {
        stats.solutions += 1;
        emit(stats.solutions, board);
        return;
    }

    let candidates = column_candidates(board, col);
    if candidates.is_empty() {
        stats.dead_ends += 1;
        return;
    }

    for Candidate { row, .. } in candidates {
        board.place(row, col);
        stats.placements += 1;
        descend(board, col + 1, stats, emit);
        board.unplace(row, col);
    }
}

/// Number of solutions on a `size`x`size` board.
pub fn count_solutions(size: usize) -> usize {
    let mut board = Board::new(size);
    solve(&mut board, |_, _| {}).solutions
}

/// Every solution on a `size`x`size` board in discovery order, each given as
/// the queen's row per column.
pub fn collect_solutions(size: usize) -> Vec<Vec<usize>> {
    let mut board = Board::new(size);
    let mut solutions = Vec::new();
    solve(&mut board, |_, b| {
        if let Some(rows) = b.solution() {
            solutions.push(rows);
        }
    });
    solutions
}
