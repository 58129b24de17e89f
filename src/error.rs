//! Error types for board operations
//!
//! Only direct lookups with an out-of-range file or rank can fail. Move
//! enumeration, placement and clearing are total.

use thiserror::Error;

/// Errors that can occur when addressing the board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// File outside `a..=h` or rank outside `1..=8`
    #[error("Invalid board position {file}{rank} (file must be a-h, rank must be 1-8)")]
    InvalidPosition { file: char, rank: u8 },
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
