use std::io::Cursor;

use glam::IVec2;
use labyrinth::{
    app::{App, CommandFlow},
    game::Game,
    input::{commands::GameCommand, Bindings},
    map::direction::Direction,
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

fn run(input: &str) -> (Game, String) {
    let mut app = App::new(common::builtin_game(), Cursor::new(input.as_bytes().to_vec()), Vec::new());
    app.run().unwrap();

    let game = app.game().clone();
    let output = String::from_utf8(app.into_output()).unwrap();
    (game, output)
}

#[test]
fn test_first_frame() {
    let (game, output) = run("");
    let mut lines = output.lines();

    assert_eq!(lines.next(), Some("Level 0 - Doorstep (moves: 0)"));
    assert_eq!(lines.next(), Some("####################"));
    assert_eq!(lines.next(), Some("#@#                #"));
    assert_that(&game.player_position()).is_equal_to(IVec2::new(1, 1));
}

#[test]
fn test_completing_a_level_advances() {
    let (game, output) = run("ssssdddd\n");

    assert_that(&game.current_level_index()).is_equal_to(1);
    assert_that(&game.player_position()).is_equal_to(game.current_level().start());
    assert_that(&output.contains("Level 1 - Switchback (moves: 0)")).is_true();
}

#[test]
fn test_keys_after_completion_are_dropped() {
    let (game, output) = run("ssssddddd\n");

    assert_that(&game.current_level_index()).is_equal_to(1);
    assert_that(&game.player_position()).is_equal_to(game.current_level().start());
    assert_that(&game.moves()).is_equal_to(0);
    assert_that(&output.contains("Level 1 - Switchback (moves: 0)")).is_true();
}

#[test]
fn test_next_line_plays_the_new_level() {
    let (game, _) = run("ssssddddd\nd\n");
    let mut expected = common::builtin_game();
    expected.reset_level(1).unwrap();
    expected.update(Direction::Right);

    assert_that(&game.current_level_index()).is_equal_to(1);
    assert_that(game.state()).is_equal_to(expected.state());
}

#[test]
fn test_handle_command_reports_flow() {
    let mut app = App::new(common::game_at(0, IVec2::new(4, 5)), Cursor::new(Vec::new()), Vec::new());

    assert_that(&app.handle_command(GameCommand::MovePlayer(Direction::Left))).is_equal_to(CommandFlow::Continue);
    assert_that(&app.handle_command(GameCommand::ResetLevel)).is_equal_to(CommandFlow::Continue);
    assert_that(&app.handle_command(GameCommand::Exit)).is_equal_to(CommandFlow::Exit);

    let mut app = App::new(common::game_at(0, IVec2::new(4, 5)), Cursor::new(Vec::new()), Vec::new());
    assert_that(&app.handle_command(GameCommand::MovePlayer(Direction::Right)))
        .is_equal_to(CommandFlow::LevelAdvanced);
    assert_that(&app.game().current_level_index()).is_equal_to(1);
}

#[test]
fn test_moves_are_counted_per_line() {
    let (game, output) = run("s\ns\n");

    assert_that(&game.moves()).is_equal_to(2);
    assert_that(&output.contains("Level 0 - Doorstep (moves: 1)")).is_true();
    assert_that(&output.contains("Level 0 - Doorstep (moves: 2)")).is_true();
}

#[test]
fn test_restart_key() {
    let (game, _) = run("sss\nr\n");

    assert_that(&game.player_position()).is_equal_to(IVec2::new(1, 1));
    assert_that(&game.moves()).is_equal_to(0);
}

#[test]
fn test_quit_stops_processing() {
    let (game, output) = run("s\nq\ns\n");

    assert_that(&game.player_position()).is_equal_to(IVec2::new(1, 2));
    // Initial frame plus one frame for the first line
    assert_that(&output.matches("Level 0").count()).is_equal_to(2);
}

#[test]
fn test_quit_mid_line_drops_remaining_keys() {
    let (game, _) = run("sqs\n");

    assert_that(&game.player_position()).is_equal_to(IVec2::new(1, 2));
}

#[test]
fn test_unbound_keys_and_walls_are_ignored() {
    let (game, _) = run("xyz\nd\nw\n");

    assert_that(&game.player_position()).is_equal_to(IVec2::new(1, 1));
    assert_that(&game.moves()).is_equal_to(0);
}

#[test]
fn test_arrow_keys_and_escape() {
    let bindings = Bindings::default();

    assert_eq!(
        bindings.decode_line("\x1b[B\x1b[C\x1b[A\x1b[D"),
        vec![
            GameCommand::MovePlayer(Direction::Down),
            GameCommand::MovePlayer(Direction::Right),
            GameCommand::MovePlayer(Direction::Up),
            GameCommand::MovePlayer(Direction::Left),
        ]
    );
    assert_eq!(bindings.decode_line("\x1b"), vec![GameCommand::Exit]);
    assert_eq!(
        bindings.decode_line("IL"),
        vec![
            GameCommand::MovePlayer(Direction::Up),
            GameCommand::MovePlayer(Direction::Right)
        ]
    );
}
