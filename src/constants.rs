//! Constants for board dimensions and display markers.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board6x6`: 6x6 board
//! - `board8x8` (default): 8x8 board
//! - `board10x10`: 10x10 board
//!
//! To compile for a specific board size:
//! ```sh
//! cargo build                                                # 8x8 (default)
//! cargo build --no-default-features --features board10x10   # 10x10
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). The classic puzzle uses 8.
#[cfg(feature = "board6x6")]
pub const N: usize = 6;

#[cfg(feature = "board8x8")]
pub const N: usize = 8;

#[cfg(feature = "board10x10")]
pub const N: usize = 10;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(any(
    all(feature = "board6x6", feature = "board8x8"),
    all(feature = "board6x6", feature = "board10x10"),
    all(feature = "board8x8", feature = "board10x10"),
))]
compile_error!("Enable only one of 'board6x6', 'board8x8' or 'board10x10'");

#[cfg(not(any(feature = "board6x6", feature = "board8x8", feature = "board10x10")))]
compile_error!("Must enable exactly one board size feature: 'board6x6', 'board8x8' or 'board10x10'");

const _: () = assert!(N >= 1, "board dimension must be positive");

/// Largest board size accepted as a runtime override.
///
/// Beyond this the exhaustive search stops being interactive.
pub const MAX_SIZE: usize = 12;

const _: () = assert!(N <= MAX_SIZE);

// =============================================================================
// Display Markers
// =============================================================================

/// Marker for an occupied cell.
pub const QUEEN: char = 'Q';

/// Marker for an empty cell.
pub const EMPTY: char = '.';
