//! The game state machine: move validation, turn alternation, and
//! win/tie detection

use std::fmt;

use crate::board::{Board, Mark};
use crate::error::{Error, Result};
use crate::lines;

/// A single game of Tic-Tac-Toe on a standard 3x3 grid.
///
/// The game is the single source of truth for the rules: it owns the board,
/// tracks whose turn it is, and records the winner once a line of three is
/// completed. X always moves first. A `Game` is created per session and
/// mutated in place until terminal; it is never reset or reused.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Mark,
    winner: Option<Mark>,
}

impl Game {
    /// Create a new game with an empty board and X to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Mark::X,
            winner: None,
        }
    }

    /// Apply a move for the current turn's mark at zero-based coordinates.
    ///
    /// On success the cell is set and the turn flips to the other mark.
    /// The winner is recomputed eagerly here, so all queries are pure.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the game is already terminal, regardless of
    ///   the coordinates.
    /// - [`Error::OutOfBounds`] if row or col is outside `[0, 3)`.
    /// - [`Error::Occupied`] if the target cell already holds a mark.
    pub fn play(&mut self, row: i32, col: i32) -> Result<()> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        let idx = Board::index(row, col).ok_or(Error::OutOfBounds { row, col })?;
        if self.board.cells()[idx].is_some() {
            return Err(Error::Occupied { row, col });
        }

        self.board.place(idx, self.turn);
        self.winner = lines::line_winner(self.board.cells());
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Whose mark moves next. Stale once the game is over.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Check if the game has reached a terminal state: a completed line, or
    /// a full board. Once true, stays true for the life of the game.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.board.is_full()
    }

    /// The winning mark, or `None` while the game is running and for a tie
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Snapshot of the current board. The returned copy is independent of
    /// the live game state.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Get the mark at a cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if row or col is outside `[0, 3)`.
    pub fn mark_at(&self, row: i32, col: i32) -> Result<Option<Mark>> {
        self.board.mark_at(row, col)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.board.fmt(f)
    }
}
