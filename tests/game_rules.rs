//! Game model contract tests: move validation, turn alternation, terminal
//! states, and snapshot independence.

use tictactoe::{Error, Game, Mark};

fn play_all(game: &mut Game, moves: &[(i32, i32)]) {
    for &(row, col) in moves {
        game.play(row, col).unwrap();
    }
}

#[test]
fn new_game_starts_empty_with_x_to_move() {
    let game = Game::new();
    assert_eq!(game.turn(), Mark::X);
    assert_eq!(game.winner(), None);
    assert!(!game.is_over());
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(game.mark_at(row, col).unwrap(), None);
        }
    }
}

#[test]
fn each_move_places_the_mover_and_flips_the_turn() {
    let mut game = Game::new();
    let moves = [(0, 0), (1, 1), (2, 2), (0, 2)];
    let mut mover = Mark::X;
    for (row, col) in moves {
        assert_eq!(game.turn(), mover);
        game.play(row, col).unwrap();
        assert_eq!(game.mark_at(row, col).unwrap(), Some(mover));
        assert_eq!(game.turn(), mover.opponent());
        mover = mover.opponent();
    }
}

#[test]
fn cells_are_never_overwritten() {
    let mut game = Game::new();
    game.play(1, 1).unwrap();
    for _ in 0..3 {
        assert!(matches!(game.play(1, 1), Err(Error::Occupied { .. })));
        assert_eq!(game.mark_at(1, 1).unwrap(), Some(Mark::X));
    }
}

#[test]
fn bounds_are_enforced_on_play_and_mark_at() {
    let mut game = Game::new();
    let out_of_range = [(-1, 0), (0, -1), (3, 1), (1, 3), (-1, -1), (3, 3), (9, 9)];
    for (row, col) in out_of_range {
        assert!(matches!(
            game.play(row, col),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            game.mark_at(row, col),
            Err(Error::OutOfBounds { .. })
        ));
    }
}

#[test]
fn wins_are_detected_on_rows_columns_and_diagonals() {
    // X takes the middle row
    let mut game = Game::new();
    play_all(&mut game, &[(1, 0), (0, 0), (1, 1), (0, 1), (1, 2)]);
    assert_eq!(game.winner(), Some(Mark::X));

    // O takes the right column
    let mut game = Game::new();
    play_all(&mut game, &[(0, 0), (0, 2), (1, 0), (1, 2), (1, 1), (2, 2)]);
    assert_eq!(game.winner(), Some(Mark::O));

    // X takes the main diagonal
    let mut game = Game::new();
    play_all(&mut game, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert_eq!(game.winner(), Some(Mark::X));

    // X takes the anti-diagonal
    let mut game = Game::new();
    play_all(&mut game, &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
    assert_eq!(game.winner(), Some(Mark::X));
}

#[test]
fn full_board_without_a_line_is_a_tie() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            (1, 1),
            (0, 0),
            (2, 2),
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 0),
            (2, 0),
            (2, 1),
        ],
    );
    assert!(game.is_over());
    assert_eq!(game.winner(), None);
}

#[test]
fn terminal_state_is_sticky() {
    let mut game = Game::new();
    play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Mark::X));

    // Repeated queries and rejected moves never un-terminate the game
    for (row, col) in [(2, 2), (2, 0), (1, 2), (0, 0), (-1, 3)] {
        assert!(matches!(game.play(row, col), Err(Error::GameOver)));
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Mark::X));
    }
}

#[test]
fn board_snapshots_do_not_alias_live_state() {
    let mut game = Game::new();
    game.play(0, 0).unwrap();

    let before = game.board();
    game.play(1, 1).unwrap();
    let after = game.board();

    // The earlier snapshot did not pick up the later move
    assert_eq!(before.mark_at(1, 1).unwrap(), None);
    assert_eq!(after.mark_at(1, 1).unwrap(), Some(Mark::O));

    // Mutating a snapshot's rows has no effect on the game
    let mut rows = after.rows();
    rows[2][2] = Some(Mark::X);
    assert_eq!(game.mark_at(2, 2).unwrap(), None);
}

#[test]
fn rendering_matches_the_canonical_form() {
    let mut game = Game::new();
    play_all(&mut game, &[(1, 1), (0, 0)]);
    let expected = concat!(
        " O |   |  \n",
        "-----------\n",
        "   | X |  \n",
        "-----------\n",
        "   |   |  ",
    );
    assert_eq!(game.to_string(), expected);
}

#[test]
fn winning_move_completing_two_lines_reports_one_winner() {
    // X's last move at (0, 0) completes both the top row and left column
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            (0, 1),
            (1, 1),
            (0, 2),
            (2, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (0, 0),
        ],
    );
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Mark::X));
}
