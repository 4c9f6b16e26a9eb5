//! Board generation integration tests.

use snakes_ladders::core::{BoardError, ConfigError, GameConfig, GameRng};
use snakes_ladders::{Board, BoardGenerator, GameEngine};

#[test]
fn test_engine_board_matches_config_counts() {
    let config = GameConfig::builder()
        .snakes(5)
        .ladders(11)
        .seed(Some(3))
        .build()
        .unwrap();
    let engine = GameEngine::new(config).unwrap();

    assert_eq!(engine.board().snake_count(), 5);
    assert_eq!(engine.board().ladder_count(), 11);
}

#[test]
fn test_board_independent_of_dice_stream() {
    let config = GameConfig::builder().seed(Some(21)).build().unwrap();
    let generated = BoardGenerator::from_config(&config)
        .generate(&mut GameRng::new(21).for_context("board"))
        .unwrap();
    let engine = GameEngine::new(config).unwrap();

    assert_eq!(engine.board(), &generated);
}

#[test]
fn test_oversized_request_rejected_by_config() {
    let err = GameConfig::builder().snakes(40).ladders(40).build().unwrap_err();
    assert_eq!(err, ConfigError::TooManyFeatures { requested: 80, max: 49 });
}

#[test]
fn test_generator_gives_up_within_budget() {
    let generator = BoardGenerator::new(40, 40).with_max_attempts(10_000);
    assert!(matches!(
        generator.generate(&mut GameRng::new(0)),
        Err(BoardError::Exhausted { attempts: 10_000 })
    ));
}

#[test]
fn test_fixed_board_serializes() {
    let board = Board::from_pairs(&[(99, 2), (50, 49)], &[(3, 98)]).unwrap();
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(json, r#"{"snakes":[[50,49],[99,2]],"ladders":[[3,98]]}"#);
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}
