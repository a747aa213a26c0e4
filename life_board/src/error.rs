//! Errors returned by board construction and direct cell addressing.

/// Errors raised by [`LifeBoard`](crate::LifeBoard) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A board needs at least one column and one row.
    #[error("board dimensions must be non-zero, got {cols}x{rows}")]
    EmptyDimensions { cols: usize, rows: usize },

    /// Direct addressing never wraps; only neighbor lookups do.
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },
}

pub type Result<T> = std::result::Result<T, BoardError>;
