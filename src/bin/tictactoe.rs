//! Run a Tic-Tac-Toe game interactively on the console.
//!
//! Reads moves from stdin as whitespace-delimited 1-based coordinates and
//! writes the game transcript to stdout. Enter `q` at any point to quit.

use std::io;

use anyhow::Result;
use clap::Parser;

use tictactoe::{Controller, Game, Tokenizer, logging};

#[derive(Parser)]
#[command(name = "tictactoe", version, about = "Play Tic-Tac-Toe on the console", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    logging::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = Controller::new(Tokenizer::new(stdin.lock()), stdout.lock());

    let mut game = Game::new();
    controller.play_game(&mut game)?;
    // The final status line carries no newline of its own
    println!();
    Ok(())
}
