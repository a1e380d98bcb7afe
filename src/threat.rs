//! Threat detection: conflict checks and elimination scores.
//!
//! Both functions read the board and never mutate it.

use crate::board::Board;

/// Diagonal ray directions as `(drow, dcol)`: NE, SE, NW, SW.
const DIAGONALS: [(isize, isize); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

/// Diagonal rays pointing into the columns left of a cell: NW, SW.
const LEFT_DIAGONALS: [(isize, isize); 2] = [(-1, -1), (1, -1)];

/// Walk from `(row, col)` along `(dr, dc)`, excluding the start cell, until
/// leaving the board.
fn ray(
    size: usize,
    row: usize,
    col: usize,
    (dr, dc): (isize, isize),
) -> impl Iterator<Item = (usize, usize)> {
    (1..size as isize).map_while(move |k| {
        let r = row.checked_add_signed(dr * k)?;
        let c = col.checked_add_signed(dc * k)?;
        (r < size && c < size).then_some((r, c))
    })
}

/// Whether a queen at `(row, col)` is unattacked by queens in columns `< col`.
///
/// Only the row and the two diagonals reaching leftwards are inspected: the
/// search fills columns left to right, so everything at or right of `col` is
/// empty when this is asked.
pub fn is_safe(board: &Board, row: usize, col: usize) -> bool {
    if (0..col).any(|c| board.is_occupied(row, c)) {
        return false;
    }
    let size = board.size();
    LEFT_DIAGONALS
        .iter()
        .all(|&dir| ray(size, row, col, dir).all(|(r, c)| !board.is_occupied(r, c)))
}

/// Number of unoccupied cells a queen at `(row, col)` would threaten.
///
/// The threatened set covers the whole row, the whole column (the cell itself
/// included) and all four diagonal rays, regardless of search direction.
/// Cells already holding a queen are not counted. The board is not modified.
pub fn elimination_score(board: &Board, row: usize, col: usize) -> usize {
    let size = board.size();
    let mut threatened = vec![false; size * size];

    for i in 0..size {
        threatened[row * size + i] = true;
        threatened[i * size + col] = true;
    }
    for &dir in &DIAGONALS {
        for (r, c) in ray(size, row, col, dir) {
            threatened[r * size + c] = true;
        }
    }

    threatened
        .iter()
        .enumerate()
        .filter(|&(i, &t)| t && !board.is_occupied(i / size, i % size))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_safe_everywhere() {
        for size in 1..=8 {
            let board = Board::new(size);
            for row in 0..size {
                for col in 0..size {
                    assert!(is_safe(&board, row, col), "({row}, {col}) on {size}x{size}");
                }
            }
        }
    }

    #[test]
    fn test_row_conflict() {
        let mut board = Board::new(8);
        board.place(3, 0);
        assert!(!is_safe(&board, 3, 5));
        assert!(is_safe(&board, 5, 1));
    }

    #[test]
    fn test_diagonal_conflicts() {
        let mut board = Board::new(8);
        board.place(2, 1);
        assert!(!is_safe(&board, 5, 4));
        assert!(!is_safe(&board, 0, 3));
        assert!(!is_safe(&board, 3, 2));
        assert!(!is_safe(&board, 1, 2));
        assert!(is_safe(&board, 4, 2));
        assert!(is_safe(&board, 0, 2));
    }

    #[test]
    fn test_right_side_is_ignored() {
        let mut board = Board::new(8);
        board.place(4, 6);
        assert!(is_safe(&board, 4, 2));
        assert!(is_safe(&board, 2, 4));
    }

    #[test]
    fn test_corner_score() {
        // 8 in the row, 7 more in the column, 7 on the main diagonal.
        let board = Board::new(8);
        assert_eq!(elimination_score(&board, 0, 0), 8 + 7 + 7);
        assert_eq!(elimination_score(&board, 7, 7), 22);
        assert_eq!(elimination_score(&board, 7, 0), 22);
    }

    #[test]
    fn test_center_score() {
        // 8 row + 7 column + 7 on r-c=0 + 6 on r+c=6.
        let board = Board::new(8);
        assert_eq!(elimination_score(&board, 3, 3), 28);
    }

    #[test]
    fn test_single_cell_board() {
        let board = Board::new(1);
        assert_eq!(elimination_score(&board, 0, 0), 1);
    }

    #[test]
    fn test_occupied_cells_not_counted() {
        let mut board = Board::new(8);
        assert_eq!(elimination_score(&board, 1, 2), 24);

        board.place(1, 0);
        assert_eq!(elimination_score(&board, 1, 2), 23);

        // (0, 0) is outside every line through (1, 2).
        board.unplace(1, 0);
        board.place(0, 0);
        assert_eq!(elimination_score(&board, 1, 2), 24);
    }

    #[test]
    fn test_score_does_not_mutate() {
        let mut board = Board::new(5);
        board.place(0, 0);
        let before = board.clone();
        let _ = elimination_score(&board, 2, 3);
        assert_eq!(board, before);
    }
}
