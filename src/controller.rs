//! Console session controller: reads whitespace-delimited tokens, applies
//! moves to a [`Game`], and renders state, prompts, and errors.
//!
//! The controller talks to the outside world through two minimal traits,
//! [`TokenSource`] and [`TextSink`], so a session can run against in-memory
//! endpoints in tests and against locked stdin/stdout in the binary.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::game::Game;

/// The literal token that abandons a session, matched case-insensitively
const QUIT_TOKEN: &str = "q";

/// A sequential source of whitespace-delimited text tokens.
///
/// `Ok(None)` means the input is exhausted; the controller treats that as
/// fatal when the game is still running.
pub trait TokenSource {
    fn next_token(&mut self) -> io::Result<Option<String>>;
}

/// An append-only sink for rendered text
pub trait TextSink {
    fn append(&mut self, text: &str) -> io::Result<()>;
}

impl<W: Write> TextSink for W {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.write_all(text.as_bytes())
    }
}

/// Splits a buffered reader into whitespace-delimited tokens, line by line
#[derive(Debug)]
pub struct Tokenizer<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Tokenizer {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> TokenSource for Tokenizer<R> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game reached a terminal state (win or tie)
    Completed,
    /// The user entered the quit token
    Quit,
}

/// Which half of a move the controller is waiting for
#[derive(Debug, Clone, Copy)]
enum Slot {
    Row,
    Col { row: i32 },
}

/// Drives one game to completion over a token source and a text sink.
///
/// Users type coordinates 1-based; the controller converts to the game's
/// zero-based coordinates. Invalid tokens and rejected moves are reported
/// through the sink and the session continues; I/O failures and input
/// exhaustion abort the session with an error.
#[derive(Debug)]
pub struct Controller<I, O> {
    input: I,
    output: O,
}

impl<I: TokenSource, O: TextSink> Controller<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Controller { input, output }
    }

    /// Play a single game from its current state until it is over, the user
    /// quits, or an I/O failure occurs.
    ///
    /// # Errors
    ///
    /// - [`Error::NoInput`] if the tokens run out while the game is live.
    /// - [`Error::Input`] if reading from the source fails.
    /// - [`Error::Output`] if writing to the sink fails.
    pub fn play_game(&mut self, game: &mut Game) -> Result<Outcome> {
        let mut slot = Slot::Row;
        let mut prompt_due = true;

        info!("session started");
        while !game.is_over() {
            if prompt_due {
                self.write(&format!("{game}\n"))?;
                self.write(&format!("Enter a move for {}:\n", game.turn()))?;
                prompt_due = false;
            }

            let token = self
                .input
                .next_token()
                .map_err(|source| Error::Input { source })?
                .ok_or(Error::NoInput)?;

            if token.eq_ignore_ascii_case(QUIT_TOKEN) {
                // A quit mid-move discards the captured row; no partial
                // move is ever applied.
                info!("session quit by user");
                self.write("Game quit! Ending game state:\n")?;
                self.write(&format!("{game}\n"))?;
                return Ok(Outcome::Quit);
            }

            let value = match token.parse::<i32>() {
                Ok(value) => value,
                Err(_) => {
                    debug!(token = %token, "rejected non-numeric token");
                    self.write(&format!("Not a valid number: {token}\n"))?;
                    continue;
                }
            };

            slot = match slot {
                Slot::Row => Slot::Col { row: value },
                Slot::Col { row } => {
                    let col = value;
                    match game.play(row - 1, col - 1) {
                        Ok(()) => {
                            debug!(row, col, "move applied");
                            prompt_due = true;
                        }
                        Err(Error::OutOfBounds { .. } | Error::Occupied { .. }) => {
                            // Reported 1-based, exactly as typed
                            debug!(row, col, "rejected move");
                            self.write(&format!("Not a valid move: {row}, {col}\n"))?;
                            prompt_due = true;
                        }
                        Err(err) => return Err(err),
                    }
                    Slot::Row
                }
            };
        }

        info!(winner = ?game.winner(), "game over");
        self.write(&game.to_string())?;
        self.write("\nGame is over! ")?;
        match game.winner() {
            Some(mark) => self.write(&format!("{mark} wins."))?,
            None => self.write("Tie game.")?,
        }
        Ok(Outcome::Completed)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .append(text)
            .map_err(|source| Error::Output { source })
    }
}
