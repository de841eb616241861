//! Error types for configuration and board construction.

use std::fmt;

/// An invalid [`GameConfig`](crate::GameConfig).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Board side length outside `MIN_SIZE..=MAX_SIZE`.
    Size(usize),
    /// Spawn probability for a 4 outside `[0, 1]` (or NaN).
    FourProbability(f64),
    /// Swipe threshold must be at least one cell.
    SwipeThreshold(i32),
    /// More initial tiles than the board has cells.
    InitialTiles { tiles: usize, cells: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(n) => write!(
                f,
                "board size {n} out of range ({}..={})",
                crate::board::MIN_SIZE,
                crate::board::MAX_SIZE
            ),
            Self::FourProbability(p) => write!(f, "spawn probability {p} not in [0, 1]"),
            Self::SwipeThreshold(t) => write!(f, "swipe threshold {t} must be positive"),
            Self::InitialTiles { tiles, cells } => {
                write!(f, "{tiles} initial tiles do not fit on {cells} cells")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A board description that cannot be turned into a [`Board`](crate::Board).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Row count outside the supported sizes.
    Size(usize),
    /// A row whose length differs from the row count.
    NotSquare { row: usize, len: usize },
    /// A cell value that is neither 0 (empty) nor a power of two ≥ 2.
    TileValue { row: usize, col: usize, value: u64 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(n) => write!(f, "unsupported board size {n}"),
            Self::NotSquare { row, len } => write!(f, "row {row} has {len} cells, board is not square"),
            Self::TileValue { row, col, value } => {
                write!(f, "cell ({row}, {col}) holds {value}, not a power of two")
            }
        }
    }
}

impl std::error::Error for BoardError {}
