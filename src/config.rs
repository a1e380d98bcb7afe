//! Runtime search configuration.

use anyhow::{Result, bail};

use crate::constants::{MAX_SIZE, N};

/// What a run searches and how much it prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Board dimension
    pub size: usize,
    /// Print the elimination scores of the empty board before searching
    pub show_scores: bool,
    /// Print every solution board (otherwise only the total)
    pub show_solutions: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            size: N,
            show_scores: true,
            show_solutions: true,
        }
    }
}

impl SearchConfig {
    /// Configuration for a board of the given dimension.
    ///
    /// Rejects sizes outside `1..=MAX_SIZE` before any search runs.
    pub fn with_size(size: usize) -> Result<Self> {
        if size == 0 {
            bail!("board size must be positive");
        }
        if size > MAX_SIZE {
            bail!("board size {size} is too large (maximum is {MAX_SIZE})");
        }
        Ok(Self {
            size,
            ..Self::default()
        })
    }

    /// Only the banner and the total line.
    pub fn quiet(self) -> Self {
        Self {
            show_scores: false,
            show_solutions: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_build_size() {
        let config = SearchConfig::default();
        assert_eq!(config.size, N);
        assert!(config.show_scores);
        assert!(config.show_solutions);
    }

    #[test]
    fn test_with_size_bounds() {
        assert!(SearchConfig::with_size(0).is_err());
        assert!(SearchConfig::with_size(MAX_SIZE + 1).is_err());
        assert_eq!(SearchConfig::with_size(1).unwrap().size, 1);
        assert_eq!(SearchConfig::with_size(MAX_SIZE).unwrap().size, MAX_SIZE);
    }

    #[test]
    fn test_quiet() {
        let config = SearchConfig::with_size(5).unwrap().quiet();
        assert_eq!(config.size, 5);
        assert!(!config.show_scores);
        assert!(!config.show_solutions);
    }
}
