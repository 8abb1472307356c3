use thiserror::Error;

use crate::position::Position;

#[derive(Error, Debug)]
pub enum BoardError {
    /// No starting layout can be derived for this dimension
    #[error("unsupported board size {size}: {reason}")]
    InvalidSize { size: usize, reason: &'static str },

    #[error("layout is for a {expected}x{expected} board, got {actual}x{actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("a {size}x{size} board needs {} cells, got {cells}", .size * .size)]
    CellCount { size: usize, cells: usize },

    #[error("cell ({row}, {col}) lies outside a {size}x{size} board")]
    OutOfBounds { row: isize, col: isize, size: usize },

    #[error("more than one piece placed on {position}")]
    DuplicatePlacement { position: Position },

    #[error("invalid hnfen {input:?}: {reason}")]
    InvalidHnfen { input: String, reason: String },

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    pub(crate) fn hnfen(input: &str, reason: impl Into<String>) -> Self {
        BoardError::InvalidHnfen {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}

pub type BoardResult<T> = Result<T, BoardError>;
