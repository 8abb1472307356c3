use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};
use crate::position::{Position, MAX_ALGEBRAIC_SIZE};

/// Square grid of cells stored row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Piece>>,
}

const WHITE: &str = "h";
const BLACK: &str = "a";
const KING: &str = "K";
const RANK_SEP: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Normal(Player),
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Starts, is attacker
    Black,
    /// Second, is defender
    White,
}

impl Piece {
    pub const ATTACKER: Piece = Piece::Normal(Player::Black);
    pub const DEFENDER: Piece = Piece::Normal(Player::White);

    pub fn name(&self) -> &'static str {
        match self {
            Piece::Normal(Player::Black) => "attacker",
            Piece::Normal(Player::White) => "defender",
            Piece::King => "king",
        }
    }
}

pub trait Hnfen: Sized {
    fn as_hnfen(&self) -> String;
    fn from_hnfen(hnfen: &str) -> BoardResult<Self>;
}

impl Hnfen for Player {
    fn as_hnfen(&self) -> String {
        match self {
            Player::Black => BLACK,
            Player::White => WHITE,
        }
        .to_string()
    }

    fn from_hnfen(hnfen: &str) -> BoardResult<Self> {
        match hnfen {
            BLACK => Ok(Player::Black),
            WHITE => Ok(Player::White),
            _ => Err(BoardError::hnfen(hnfen, "unknown side to move")),
        }
    }
}

impl Hnfen for Piece {
    fn as_hnfen(&self) -> String {
        match self {
            Piece::Normal(Player::Black) => BLACK,
            Piece::Normal(Player::White) => WHITE,
            Piece::King => KING,
        }
        .to_owned()
    }

    fn from_hnfen(hnfen: &str) -> BoardResult<Self> {
        match hnfen {
            BLACK => Ok(Piece::Normal(Player::Black)),
            WHITE => Ok(Piece::Normal(Player::White)),
            KING => Ok(Piece::King),
            _ => Err(BoardError::hnfen(hnfen, "unknown piece letter")),
        }
    }
}

impl Board {
    /// An empty board of `size` x `size` cells.
    pub fn new(size: usize) -> BoardResult<Self> {
        check_size(size)?;
        Ok(Board {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Wraps an existing row-major cell buffer, which must hold exactly
    /// `size * size` cells.
    pub fn from_cells(size: usize, cells: Vec<Option<Piece>>) -> BoardResult<Self> {
        check_size(size)?;
        if cells.len() != size * size {
            return Err(BoardError::CellCount {
                size,
                cells: cells.len(),
            });
        }
        Ok(Board { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// `None` when `pos` is off the board, `Some(None)` for an empty cell.
    pub fn get(&self, pos: Position) -> Option<Option<Piece>> {
        if pos.in_board(self.size) {
            Some(self.cells[pos.index(self.size)])
        } else {
            None
        }
    }

    pub fn set(&mut self, pos: Position, cell: Option<Piece>) -> BoardResult<()> {
        if !pos.in_board(self.size) {
            return Err(BoardError::OutOfBounds {
                row: pos.row as isize,
                col: pos.col as isize,
                size: self.size,
            });
        }
        let idx = pos.index(self.size);
        self.cells[idx] = cell;
        Ok(())
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = None;
        }
    }

    /// Rows from top to bottom.
    pub fn ranks(&self) -> impl Iterator<Item = &[Option<Piece>]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|piece| (Position::new(i / size, i % size), piece))
        })
    }

    pub fn positions_of(&self, piece: Piece) -> Vec<Position> {
        self.pieces()
            .filter(|(_, p)| *p == piece)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|c| **c == Some(piece)).count()
    }
}

pub(crate) fn check_size(size: usize) -> BoardResult<()> {
    if size == 0 {
        return Err(BoardError::InvalidSize {
            size,
            reason: "a board needs at least one cell",
        });
    }
    if size > MAX_ALGEBRAIC_SIZE {
        return Err(BoardError::InvalidSize {
            size,
            reason: "columns would run past 'z'",
        });
    }
    Ok(())
}

fn encode_rank(fields: &[Option<Piece>]) -> String {
    let mut empty_prec = 0;
    let mut buf = String::new();
    for k in fields.iter() {
        if let Some(p) = k {
            if empty_prec > 0 {
                buf.push_str(&empty_prec.to_string());
                empty_prec = 0;
            }
            buf.push_str(&p.as_hnfen());
        } else {
            empty_prec += 1;
        }
    }
    if empty_prec > 0 {
        buf.push_str(&empty_prec.to_string());
    }
    buf
}

fn rank_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+|[^0-9]").expect("rank token regex"))
}

fn board_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\S+)(?:\s+(\S+))?\s*$").expect("board regex"))
}

fn decode_rank(hnfen: &str, size: usize) -> BoardResult<Vec<Option<Piece>>> {
    // Multi-digit runs make a digit-by-digit scan ambiguous, so tokenize first.
    let mut fields = Vec::with_capacity(size);
    for token in rank_token_re().find_iter(hnfen) {
        let token = token.as_str();
        if token.as_bytes()[0].is_ascii_digit() {
            let run = token.parse::<usize>().unwrap_or(usize::MAX);
            if run > size - fields.len() {
                return Err(overfilled(hnfen, size));
            }
            fields.extend(std::iter::repeat(None).take(run));
        } else {
            if fields.len() == size {
                return Err(overfilled(hnfen, size));
            }
            fields.push(Some(Piece::from_hnfen(token)?));
        }
    }

    if fields.len() != size {
        return Err(BoardError::hnfen(
            hnfen,
            format!("rank covers {} of {} cells", fields.len(), size),
        ));
    }
    Ok(fields)
}

fn overfilled(hnfen: &str, size: usize) -> BoardError {
    BoardError::hnfen(hnfen, format!("rank runs past {} cells", size))
}

impl Hnfen for Board {
    /// Placement field only; side to move is not tracked.
    fn as_hnfen(&self) -> String {
        self.ranks()
            .map(encode_rank)
            .collect::<Vec<String>>()
            .join(RANK_SEP)
    }

    fn from_hnfen(hnfen: &str) -> BoardResult<Self> {
        let caps = board_re()
            .captures(hnfen)
            .ok_or_else(|| BoardError::hnfen(hnfen, "expected placement and optional side"))?;
        let placement = caps.get(1).map_or("", |m| m.as_str());
        if let Some(side) = caps.get(2) {
            Player::from_hnfen(side.as_str())?;
        }

        let ranks: Vec<&str> = placement.split(RANK_SEP).collect();
        let size = ranks.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for rank in ranks {
            cells.extend(decode_rank(rank, size)?);
        }
        Board::from_cells(size, cells)
    }
}
