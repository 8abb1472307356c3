//! Starting position of the board.
//!
//! Every piece is described by its offset from the centre square, so the
//! same table fits any odd board size large enough to keep the defender
//! diamond clear of the edge attackers. The table is resolved against a
//! concrete size once and checked before anything touches a board.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::{BoardError, BoardResult};
use crate::position::{in_board, Direction, Position};
use crate::types::{check_size, Board, Piece};

pub const DEFAULT_SIZE: usize = 11;

/// Cells either side of an edge midpoint that hold attackers
const EDGE_SPAN: isize = 2;

/// Every square at distance 1 or 2 from the king, in row-major order
const DEFENDER_OFFSETS: [(isize, isize); 12] = [
    (-2, 0),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -2),
    (0, -1),
    (0, 1),
    (0, 2),
    (1, -1),
    (1, 0),
    (1, 1),
    (2, 0),
];

/// One entry of the table, relative to the centre square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub d_row: isize,
    pub d_col: isize,
    pub piece: Piece,
}

impl Offset {
    pub const fn new(d_row: isize, d_col: isize, piece: Piece) -> Self {
        Offset {
            d_row,
            d_col,
            piece,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: Position,
    pub piece: Piece,
}

/// Validated placement table for one board size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    size: usize,
    placements: Vec<Placement>,
}

/// Offsets of the traditional Hnefatafl start for a board of `size`.
pub fn standard_offsets(size: usize) -> Vec<Offset> {
    let half = (size / 2) as isize;
    let mut offsets = vec![Offset::new(0, 0, Piece::King)];

    offsets.extend(
        DEFENDER_OFFSETS
            .iter()
            .map(|&(d_row, d_col)| Offset::new(d_row, d_col, Piece::DEFENDER)),
    );

    for dir in Direction::card().iter() {
        let (mid_row, mid_col) = dir.vector(half as usize);
        let (step_row, step_col) = dir.along_edge().vector(1);
        for k in -EDGE_SPAN..=EDGE_SPAN {
            offsets.push(Offset::new(
                mid_row + step_row * k,
                mid_col + step_col * k,
                Piece::ATTACKER,
            ));
        }
        let (in_row, in_col) = dir.opposite().vector(1);
        offsets.push(Offset::new(
            mid_row + in_row,
            mid_col + in_col,
            Piece::ATTACKER,
        ));
    }

    offsets
}

impl Layout {
    /// Traditional starting layout for an odd `size`.
    pub fn standard(size: usize) -> BoardResult<Self> {
        check_size(size)?;
        if size % 2 == 0 {
            return Err(BoardError::InvalidSize {
                size,
                reason: "the king needs a single centre square",
            });
        }
        let layout = Layout::from_offsets(size, &standard_offsets(size))?;
        debug!(
            size,
            placements = layout.placements.len(),
            "derived starting layout"
        );
        Ok(layout)
    }

    /// Resolves centre-relative offsets on a board of `size`. Fails when an
    /// entry falls off the board or two entries share a square.
    pub fn from_offsets(size: usize, offsets: &[Offset]) -> BoardResult<Self> {
        let center = Position::center(size);
        let mut seen = HashSet::with_capacity(offsets.len());
        let mut placements = Vec::with_capacity(offsets.len());

        for offset in offsets {
            let row = center.row as isize + offset.d_row;
            let col = center.col as isize + offset.d_col;
            if !in_board(row, col, size) {
                return Err(BoardError::OutOfBounds { row, col, size });
            }
            let position = Position::new(row as usize, col as usize);
            if !seen.insert(position) {
                return Err(BoardError::DuplicatePlacement { position });
            }
            placements.push(Placement {
                position,
                piece: offset.piece,
            });
        }

        Ok(Layout { size, placements })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Empties `board` and writes every placement. Refuses a board of another
    /// size without touching it.
    pub fn apply(&self, board: &mut Board) -> BoardResult<()> {
        if board.size() != self.size {
            return Err(BoardError::SizeMismatch {
                expected: self.size,
                actual: board.size(),
            });
        }

        board.clear();
        for placement in &self.placements {
            trace!(
                square = %placement.position,
                piece = placement.piece.name(),
                "placing"
            );
            board.set(placement.position, Some(placement.piece))?;
        }
        debug!(size = self.size, "board initialized");
        Ok(())
    }
}

impl Board {
    /// A board of `size` holding the traditional starting position.
    pub fn starting(size: usize) -> BoardResult<Self> {
        let layout = Layout::standard(size)?;
        let mut board = Board::new(size)?;
        layout.apply(&mut board)?;
        Ok(board)
    }
}
