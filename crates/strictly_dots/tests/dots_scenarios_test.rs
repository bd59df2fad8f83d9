//! End-to-end games on small grids.

use strictly_dots::{
    BoxId, Dot, DotsGame, GameEvent, GameStatus, GridSizeError, MoveError, PlayerId, Roster,
    RosterError,
};

fn dot(row: u8, col: u8) -> Dot {
    Dot::new(row, col)
}

#[test]
fn test_single_box_game() {
    let mut game = DotsGame::with_grid(2).unwrap();
    game.start().unwrap();

    // Alternate P1, P2, P1 without completing anything
    game.draw_line(dot(0, 0), dot(0, 1)).unwrap();
    game.draw_line(dot(1, 1), dot(1, 0)).unwrap();
    game.draw_line(dot(0, 0), dot(1, 0)).unwrap();

    let outcome = game.draw_line(dot(1, 1), dot(0, 1)).unwrap();
    assert_eq!(outcome.player, PlayerId::new(2));
    assert_eq!(outcome.completions, 1);
    assert_eq!(outcome.claimed_boxes, vec![BoxId::new(0, 0)]);
    assert!(outcome.game_over);

    let winners = outcome.winners.as_ref().expect("Finished game has winners");
    assert!(!winners.is_tie());
    assert_eq!(winners.winners()[0].id(), PlayerId::new(2));
    assert_eq!(winners.winners()[0].score(), 1);

    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.outcome(), outcome.winners);
    assert!(game.valid_lines().is_empty());
    assert_eq!(
        game.draw_line(dot(0, 0), dot(0, 1)),
        Err(MoveError::GameOver)
    );

    let events = outcome.events();
    assert!(matches!(events[0], GameEvent::BoxesCompleted { .. }));
    assert!(matches!(events[1], GameEvent::GameOver(_)));
}

#[test]
fn test_completion_grants_bonus_turn() {
    let mut game = DotsGame::with_grid(3).unwrap();
    game.start().unwrap();

    let first = game.draw_line(dot(0, 0), dot(0, 1)).unwrap();
    assert_eq!(first.completions, 0);
    assert_eq!(first.next_player, PlayerId::new(2));

    game.draw_line(dot(1, 0), dot(1, 1)).unwrap();
    game.draw_line(dot(0, 0), dot(1, 0)).unwrap();

    let closing = game.draw_line(dot(0, 1), dot(1, 1)).unwrap();
    assert_eq!(closing.player, PlayerId::new(2));
    assert_eq!(closing.completions, 1);
    assert_eq!(closing.next_player, PlayerId::new(2));
    assert!(!closing.game_over);
    assert_eq!(
        closing.events(),
        vec![GameEvent::BoxesCompleted {
            player: PlayerId::new(2),
            boxes: vec![BoxId::new(0, 0)],
        }]
    );
    assert_eq!(game.state().current_player_id(), PlayerId::new(2));
    assert_eq!(game.roster().players()[1].score(), 1);
}

#[test]
fn test_double_completion_scores_two() {
    let mut game = DotsGame::with_grid(3).unwrap();
    game.start().unwrap();

    // Outline the top two boxes, leaving the shared middle edge
    let outline = [
        ((0, 0), (0, 1)),
        ((0, 1), (0, 2)),
        ((1, 0), (1, 1)),
        ((1, 1), (1, 2)),
        ((0, 0), (1, 0)),
        ((0, 2), (1, 2)),
    ];
    for (a, b) in outline {
        let outcome = game.draw_line(dot(a.0, a.1), dot(b.0, b.1)).unwrap();
        assert_eq!(outcome.completions, 0);
    }

    let mover = game.state().current_player_id();
    let outcome = game.draw_line(dot(0, 1), dot(1, 1)).unwrap();
    assert_eq!(outcome.completions, 2);
    assert_eq!(outcome.claimed_boxes, vec![BoxId::new(0, 0), BoxId::new(0, 1)]);
    assert_eq!(outcome.next_player, mover);

    let player = game.roster().get(mover).unwrap();
    assert_eq!(player.score(), 2);
    assert_eq!(game.roster().total_score(), 2);
}

#[test]
fn test_remove_player_reissues_ids() {
    let mut game = DotsGame::new();
    game.add_player().unwrap();
    game.rename_player(PlayerId::new(1), "Ada").unwrap();
    game.rename_player(PlayerId::new(3), "Linus").unwrap();
    let linus_color = game.roster().players()[2].color();

    let removed = game.remove_player(PlayerId::new(2)).unwrap();
    assert_eq!(removed.name(), "Player 2");

    let players = game.roster().players();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].id(), PlayerId::new(1));
    assert_eq!(players[0].name(), "Ada");
    assert_eq!(players[1].id(), PlayerId::new(2));
    assert_eq!(players[1].name(), "Linus");
    assert_eq!(players[1].color(), linus_color);
    assert_eq!(players[1].score(), 0);
}

#[test]
fn test_resize_beyond_bounds_rejected() {
    let mut game = DotsGame::with_grid(8).unwrap();
    let before = game.clone();
    assert_eq!(game.resize(1), Err(GridSizeError::OutOfRange(9)));
    assert_eq!(game, before);

    let mut game = DotsGame::with_grid(2).unwrap();
    let before = game.clone();
    assert_eq!(game.resize(-1), Err(GridSizeError::OutOfRange(1)));
    assert_eq!(game, before);
}

#[test]
fn test_three_player_rotation_wraps() {
    let mut game = DotsGame::with_grid(4).unwrap();
    game.start_with(Roster::with_names(["Ada", "Grace", "Linus"]).unwrap())
        .unwrap();

    let order: Vec<u8> = [
        ((0, 0), (0, 1)),
        ((2, 2), (2, 3)),
        ((3, 0), (3, 1)),
        ((1, 3), (2, 3)),
    ]
    .into_iter()
    .map(|(a, b)| {
        let outcome = game.draw_line(dot(a.0, a.1), dot(b.0, b.1)).unwrap();
        outcome.player.get()
    })
    .collect();

    assert_eq!(order, vec![1, 2, 3, 1]);
    assert_eq!(game.state().current_player_id(), PlayerId::new(2));
}

#[test]
fn test_full_roster_rejected() {
    let mut game = DotsGame::new();
    for _ in 2..8 {
        game.add_player().unwrap();
    }
    assert_eq!(game.add_player(), Err(RosterError::TooMany));
    assert_eq!(game.roster().len(), 8);
}
