//! Two-player console Tic-Tac-Toe.
//!
//! This crate provides:
//! - A complete game model ([`Game`]) with move validation, turn
//!   alternation, and win/tie detection
//! - A session controller ([`Controller`]) that drives one game over
//!   abstract token-input and text-output endpoints
//! - A whitespace [`Tokenizer`] for line-oriented input sources
//!
//! The model and controller are fully decoupled from the console, so whole
//! sessions can be exercised in tests against in-memory endpoints.

pub mod board;
pub mod controller;
pub mod error;
pub mod game;
pub mod lines;
pub mod logging;

pub use board::{Board, Mark};
pub use controller::{Controller, Outcome, TextSink, TokenSource, Tokenizer};
pub use error::{Error, Result};
pub use game::Game;
