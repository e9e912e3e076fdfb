use std::error::Error;

use glam::IVec2;
use labyrinth::{
    constants::RawLevel,
    error::{GameError, IndexSpace, ParseError},
    map::catalog::LevelCatalog,
};
use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_index_out_of_range_messages() {
    let level = GameError::IndexOutOfRange {
        space: IndexSpace::Level,
        index: 10,
        len: 10,
    };
    let tile = GameError::IndexOutOfRange {
        space: IndexSpace::Tile,
        index: 300,
        len: 300,
    };

    assert_eq!(level.to_string(), "Level index 10 is out of range 0..10");
    assert_eq!(tile.to_string(), "Tile index 300 is out of range 0..300");
}

#[test]
fn test_invalid_direction_message() {
    assert_eq!(GameError::InvalidDirection(7).to_string(), "Invalid direction code: 7");
}

#[test]
fn test_parse_error_messages() {
    assert_eq!(
        ParseError::UnknownCharacter('x').to_string(),
        "Unknown character in board: 'x'"
    );
    assert_eq!(
        ParseError::InvalidStartCount(2).to_string(),
        "Board must have exactly 1 start position, found 2"
    );
    assert_eq!(ParseError::MissingGoal.to_string(), "Board has no goal");
    assert_eq!(
        ParseError::UnreachableGoal(IVec2::new(3, 4)).to_string(),
        "No goal is reachable from the start at (3, 4)"
    );
    assert_eq!(ParseError::EmptyCatalog.to_string(), "Level catalog is empty");
}

#[test]
fn test_invalid_level_data_keeps_its_source() {
    let mut board = common::SHORT_LEVEL.board.to_vec();
    board[1] = "#S                 #";
    let board: &'static [&'static str] = Box::leak(board.into_boxed_slice());

    let err = LevelCatalog::new(&[common::OPEN_LEVEL, RawLevel { name: "Goalless", board }]).unwrap_err();

    assert_eq!(err.to_string(), "Invalid data for level 1: Board has no goal");
    let source = err.source().map(|source| source.to_string());
    assert_eq!(source.as_deref(), Some("Board has no goal"));
}
