use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Largest board whose columns still map onto `a..=z`
pub const MAX_ALGEBRAIC_SIZE: usize = 26;

/// 0-indexed cell coordinate, row 0 is the top rank.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    pub fn center(size: usize) -> Self {
        Position::new(size / 2, size / 2)
    }

    /// Algebraic name on a board of `size`, e.g. `a11` for the top-left
    /// corner of 11x11. `None` if the position is off the board.
    pub fn algebraic(&self, size: usize) -> Option<String> {
        if !self.in_board(size) || self.col >= MAX_ALGEBRAIC_SIZE {
            return None;
        }
        Some(format!(
            "{}{}",
            (b'a' + self.col as u8) as char,
            size - self.row
        ))
    }

    pub fn in_board(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }
}

pub fn in_board(row: isize, col: isize, size: usize) -> bool {
    let size = size as isize;
    (0..size).contains(&row) && (0..size).contains(&col)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Difference in (row, col) tuple
    pub fn vector(&self, length: usize) -> (isize, isize) {
        let length = length as isize;
        match self {
            Direction::Up => (-length, 0),
            Direction::Down => (length, 0),
            Direction::Left => (0, -length),
            Direction::Right => (0, length),
        }
    }

    pub fn card() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction running along the edge this direction points at.
    pub fn along_edge(&self) -> Direction {
        match self {
            Direction::Up | Direction::Down => Direction::Right,
            Direction::Left | Direction::Right => Direction::Down,
        }
    }
}
