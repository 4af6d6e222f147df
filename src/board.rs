//! Marks and the 3x3 grid, including the canonical text rendering

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 3;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two marks a player places on the board.
///
/// Empty cells are represented as `Option<Mark>::None`; there is no third
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character display glyph
    pub fn glyph(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The 3x3 grid of optional marks, stored flat in row-major order.
///
/// `Board` is `Copy`, so every board handed out by accessors is an
/// independent snapshot; mutating one never affects the game it came from.
/// Cells are only ever written through [`crate::game::Game::play`], and only
/// from empty to occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat index for (row, col), or `None` when out of bounds
    pub(crate) fn index(row: i32, col: i32) -> Option<usize> {
        let size = BOARD_SIZE as i32;
        if row < 0 || row >= size || col < 0 || col >= size {
            return None;
        }
        Some((row as usize) * BOARD_SIZE + (col as usize))
    }

    /// Get the mark at a cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if row or col is outside `[0, 3)`.
    pub fn mark_at(&self, row: i32, col: i32) -> Result<Option<Mark>> {
        let idx = Self::index(row, col).ok_or(Error::OutOfBounds { row, col })?;
        Ok(self.cells[idx])
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// The grid as rows of cells, top to bottom
    pub fn rows(&self) -> [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (i, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[i * BOARD_SIZE..(i + 1) * BOARD_SIZE]);
        }
        rows
    }

    /// Raw flat cells, row-major
    pub(crate) fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// Write a mark into a cell. Callers must have validated the index and
    /// checked the cell is empty.
    pub(crate) fn place(&mut self, idx: usize, mark: Mark) {
        debug_assert!(self.cells[idx].is_none());
        self.cells[idx] = Some(mark);
    }
}

/// Renders the canonical board form consumed by the controller and tests:
/// three rows of glyph cells joined by `" | "`, each prefixed with a single
/// space, separated by dash lines, with no trailing newline.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                write!(f, "\n-----------\n")?;
            }
            let glyphs: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or(' ', Mark::glyph).to_string())
                .collect();
            write!(f, " {}", glyphs.join(" | "))?;
        }
        Ok(())
    }
}
