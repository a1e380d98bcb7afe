//! Queens-Rust: an N-Queens solver with elimination-ordered backtracking.
//!
//! The search places one queen per column, left to right. In each column the
//! safe rows are tried in ascending order of their elimination score (how many
//! free cells a queen there would attack), which fixes the order solutions are
//! found in without skipping any of them.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimension and display markers
//! - [`board`] - Occupancy grid with paired place/unplace
//! - [`threat`] - Safety checks and elimination scores
//! - [`search`] - Backtracking search and candidate ordering
//! - [`render`] - Diagnostic score board
//! - [`config`] - Runtime search configuration
//! - [`report`] - Text report of a run
//!
//! ## Example
//!
//! ```
//! use queens_rust::board::Board;
//! use queens_rust::search::solve;
//!
//! let mut board = Board::new(6);
//! let stats = solve(&mut board, |index, solved| {
//!     println!("Solution #{index}:\n{solved}");
//! });
//! assert_eq!(stats.solutions, 4);
//! assert!(board.is_empty());
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod render;
pub mod report;
pub mod search;
pub mod threat;
