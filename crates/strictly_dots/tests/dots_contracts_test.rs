//! Tests for move contracts and rejection atomicity.

use strictly_dots::contracts::MonotonicClaims;
use strictly_dots::invariants::{DotsInvariants, InvariantSet};
use strictly_dots::{
    Contract, Dot, DotsGame, DrawLineContract, LegalMove, Line, Move, MoveError, PlayerId,
};

fn dot(row: u8, col: u8) -> Dot {
    Dot::new(row, col)
}

fn started(size: u8) -> DotsGame {
    let mut game = DotsGame::with_grid(size).unwrap();
    game.start().unwrap();
    game
}

#[test]
fn test_rejections_leave_game_unchanged() {
    let mut game = started(3);
    game.draw_line(dot(0, 0), dot(0, 1)).unwrap();
    let before = game.clone();

    let attempts = [
        (dot(0, 1), dot(0, 0), MoveError::LineTaken(Line::new(dot(0, 0), dot(0, 1)).unwrap())),
        (dot(0, 0), dot(1, 1), MoveError::NotAdjacent(dot(0, 0), dot(1, 1))),
        (dot(1, 1), dot(1, 1), MoveError::NotAdjacent(dot(1, 1), dot(1, 1))),
        (dot(2, 2), dot(2, 3), MoveError::OutOfBounds(dot(2, 3))),
        (dot(0, 2), dot(0, 4), MoveError::OutOfBounds(dot(0, 4))),
    ];
    for (a, b, expected) in attempts {
        assert_eq!(game.draw_line(a, b), Err(expected));
        assert_eq!(game, before, "Rejected draw {}-{} mutated the game", a, b);
    }
}

#[test]
fn test_precondition_matches_draw() {
    let game = started(3);
    let mov = Move::new(PlayerId::new(1), dot(1, 1), dot(2, 1));
    assert!(DrawLineContract::pre(game.state(), &mov).is_ok());

    let line = LegalMove::check(&mov, game.state()).unwrap();
    assert_eq!(line.start(), dot(1, 1));
    assert_eq!(line.end(), dot(2, 1));
}

#[test]
fn test_postconditions_hold_through_a_game() {
    let mut game = started(3);
    while let Some(line) = game.valid_lines().first().copied() {
        let before = game.state().clone();
        game.draw_line(line.start(), line.end()).unwrap();
        assert!(MonotonicClaims::holds(&before, game.state()));
        assert!(DrawLineContract::post(&before, game.state()).is_ok());
    }
    assert!(DotsInvariants::check_all(game.state()).is_ok());
    assert_eq!(game.roster().total_score(), 4);
}

#[test]
fn test_error_display() {
    let err = MoveError::WrongPlayer {
        expected: PlayerId::new(1),
        actual: PlayerId::new(2),
    };
    assert_eq!(err.to_string(), "It's not Player 2's turn (expected Player 1)");
    assert_eq!(
        MoveError::LineTaken(Line::new(dot(0, 0), dot(0, 1)).unwrap()).to_string(),
        "Line (0, 0)-(0, 1) is already drawn"
    );
}
