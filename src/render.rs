//! Text output of a board.
//!
//! The terminal alphabet is `-` for an empty cell, `K` for the king, `x` for
//! a defender and `O` for an attacker. Every cell is written as a space
//! followed by its symbol, one rank per line.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{BoardError, BoardResult};
use crate::position::Position;
use crate::types::{Board, Hnfen, Piece, Player};

pub const EMPTY_SYMBOL: char = '-';
pub const KING_SYMBOL: char = 'K';
pub const DEFENDER_SYMBOL: char = 'x';
pub const ATTACKER_SYMBOL: char = 'O';

pub fn symbol(cell: Option<Piece>) -> char {
    match cell {
        None => EMPTY_SYMBOL,
        Some(Piece::King) => KING_SYMBOL,
        Some(Piece::Normal(Player::White)) => DEFENDER_SYMBOL,
        Some(Piece::Normal(Player::Black)) => ATTACKER_SYMBOL,
    }
}

/// Writes the board in the terminal alphabet.
pub fn render_text<W: Write>(board: &Board, out: &mut W) -> io::Result<()> {
    write!(out, "{}", board)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in self.ranks() {
            for cell in rank {
                write!(f, " {}", symbol(*cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Hnfen,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "hnfen" => Ok(Format::Hnfen),
            "json" => Ok(Format::Json),
            other => Err(format!(
                "unknown format {:?}, expected text, hnfen or json",
                other
            )),
        }
    }
}

#[derive(Serialize)]
struct JsonBoard {
    size: usize,
    hnfen: String,
    pieces: Vec<JsonPiece>,
}

#[derive(Serialize)]
struct JsonPiece {
    square: String,
    #[serde(flatten)]
    position: Position,
    piece: &'static str,
}

impl JsonBoard {
    fn new(board: &Board) -> Self {
        let size = board.size();
        JsonBoard {
            size,
            hnfen: board.as_hnfen(),
            pieces: board
                .pieces()
                .map(|(position, piece)| JsonPiece {
                    square: position.algebraic(size).unwrap_or_default(),
                    position,
                    piece: piece.name(),
                })
                .collect(),
        }
    }
}

pub fn render<W: Write>(board: &Board, format: Format, out: &mut W) -> BoardResult<()> {
    match format {
        Format::Text => render_text(board, out)?,
        Format::Hnfen => writeln!(out, "{}", board.as_hnfen())?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &JsonBoard::new(board))?;
            writeln!(out)?;
        }
    }
    out.flush().map_err(BoardError::from)
}
