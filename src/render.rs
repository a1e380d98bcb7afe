//! Diagnostic rendering of elimination scores.
//!
//! The plain queen/empty grid is the [`Display`](std::fmt::Display) impl of
//! [`Board`]; this module adds the variant that shows, for every empty cell,
//! the score a queen placed there would get.

use std::fmt;

use crate::board::Board;
use crate::constants::QUEEN;
use crate::threat::elimination_score;

/// Displays a board with each empty cell replaced by its elimination score.
///
/// ```
/// use queens_rust::board::Board;
/// use queens_rust::render::ScoreBoard;
///
/// let board = Board::new(2);
/// assert_eq!(ScoreBoard(&board).to_string(), "4  4  \n4  4  \n");
/// ```
pub struct ScoreBoard<'a>(pub &'a Board);

impl fmt::Display for ScoreBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in score_grid(self.0) {
            for cell in row {
                match cell {
                    Some(score) => write!(f, "{score:<2} ")?,
                    None => write!(f, "{QUEEN}  ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Elimination score of every empty cell, one vector per row; `None` marks a
/// queen.
pub fn score_grid(board: &Board) -> Vec<Vec<Option<usize>>> {
    (0..board.size())
        .map(|row| {
            (0..board.size())
                .map(|col| {
                    (!board.is_occupied(row, col)).then(|| elimination_score(board, row, col))
                })
                .collect()
        })
        .collect()
}
