pub mod config;
pub mod error;
pub mod layout;
pub mod position;
pub mod render;
pub mod types;

pub use error::{BoardError, BoardResult};
pub use layout::Layout;
pub use types::{Board, Hnfen, Piece, Player};

/// Symbols for characters from https://hnefatafl.falch.dev/overview
pub const DEFAULT_START_HNFEN: &str =
    "3aaaaa3/5a5/11/a4h4a/a3hhh3a/aa1hhKhh1aa/a3hhh3a/a4h4a/11/5a5/3aaaaa3";
