//! Lifecycle, command transition and configuration tests.

use std::io::Write;
use strictly_dots::{
    BoxId, Command, CommandOutcome, Dot, DotsError, DotsGame, GameConfig, GameStatus, GridSize,
    GridSizeError, Move, MoveError, PlayerId, RosterError,
};

fn dot(row: u8, col: u8) -> Dot {
    Dot::new(row, col)
}

type Results = Vec<Result<CommandOutcome, DotsError>>;

fn run(game: DotsGame, commands: Vec<Command>) -> (DotsGame, Results) {
    commands.into_iter().fold((game, Vec::new()), |(game, mut results), command| {
        let (game, result) = game.transition(command);
        results.push(result);
        (game, results)
    })
}

#[test]
fn test_setup_commands_then_play() {
    let (game, results) = run(
        DotsGame::new(),
        vec![
            Command::Resize(-1),
            Command::AddPlayer,
            Command::RenamePlayer {
                id: PlayerId::new(3),
                name: "  Linus ".to_string(),
            },
            Command::Start,
            Command::DrawLine(dot(0, 0), dot(0, 1)),
        ],
    );

    assert!(results.iter().all(Result::is_ok), "{:?}", results);
    assert_eq!(results[0], Ok(CommandOutcome::Resized(GridSize::new(3).unwrap())));
    match &results[2] {
        Ok(CommandOutcome::PlayerRenamed(player)) => assert_eq!(player.name(), "Linus"),
        other => panic!("Expected rename, got {:?}", other),
    }
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.state().grid_size().get(), 3);
    assert_eq!(game.roster().len(), 3);
    assert_eq!(game.state().current_player_id(), PlayerId::new(2));
}

#[test]
fn test_transition_replays_deterministically() {
    let script = || {
        vec![
            Command::Start,
            Command::DrawLine(dot(0, 0), dot(0, 1)),
            Command::DrawLine(dot(1, 0), dot(1, 1)),
            Command::DrawLine(dot(0, 0), dot(1, 0)),
            Command::DrawLine(dot(0, 1), dot(1, 1)),
        ]
    };
    let (first, first_results) = run(DotsGame::with_grid(3).unwrap(), script());
    let (second, second_results) = run(DotsGame::with_grid(3).unwrap(), script());
    assert_eq!(first, second);
    assert_eq!(first_results, second_results);
}

#[test]
fn test_start_from_finished_begins_new_game() {
    let mut game = DotsGame::with_grid(2).unwrap();
    game.start().unwrap();
    for (a, b) in [((0, 0), (0, 1)), ((1, 0), (1, 1)), ((0, 0), (1, 0)), ((0, 1), (1, 1))] {
        game.draw_line(dot(a.0, a.1), dot(b.0, b.1)).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Finished);

    assert_eq!(game.resize(1), Err(GridSizeError::GameInProgress));
    assert_eq!(game.add_player(), Err(RosterError::GameInProgress));

    game.start().unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.state().lines().is_empty());
    assert!(game.state().boxes().is_empty());
    assert_eq!(game.roster().total_score(), 0);
    assert_eq!(game.state().current_index(), 0);
}

#[test]
fn test_reset_mid_game() {
    let mut game = DotsGame::new();
    game.start().unwrap();
    game.draw_line(dot(2, 2), dot(2, 3)).unwrap();

    let (game, result) = game.transition(Command::Reset);
    assert_eq!(result, Ok(CommandOutcome::Reset));
    assert_eq!(game.status(), GameStatus::NotStarted);
    assert!(game.state().lines().is_empty());
    assert_eq!(game.roster().len(), 2);
}

#[test]
fn test_play_command_checks_player() {
    let mut game = DotsGame::new();
    game.start().unwrap();

    let (game, result) = game.transition(Command::Play(Move::new(
        PlayerId::new(2),
        dot(0, 0),
        dot(0, 1),
    )));
    assert_eq!(
        result,
        Err(DotsError::InvalidMove(MoveError::WrongPlayer {
            expected: PlayerId::new(1),
            actual: PlayerId::new(2),
        }))
    );
    assert!(game.state().lines().is_empty());
}

#[test]
fn test_start_with_rejects_malformed_roster_at_the_boundary() {
    let undersized = r#"{"StartWith": [
        {"id": 1, "name": "Solo", "score": 0, "color": "primary"}
    ]}"#;
    let err = serde_json::from_str::<Command>(undersized).unwrap_err();
    assert!(err.to_string().contains("at least 2 players"), "{}", err);

    let clashing = r#"{"StartWith": [
        {"id": 5, "name": "", "score": 0, "color": "red"},
        {"id": 5, "name": "B", "score": 0, "color": "red"}
    ]}"#;
    assert!(serde_json::from_str::<Command>(clashing).is_err());

    let shared_color = r#"{"StartWith": [
        {"id": 1, "name": "A", "score": 0, "color": "red"},
        {"id": 2, "name": "B", "score": 0, "color": "red"}
    ]}"#;
    let err = serde_json::from_str::<Command>(shared_color).unwrap_err();
    assert!(err.to_string().contains("more than one player"), "{}", err);
}

#[test]
fn test_deserialized_roster_plays_to_completion() {
    let command: Command = serde_json::from_str(
        r#"{"StartWith": [
            {"id": 5, "name": " Ada ", "score": 3, "color": "red"},
            {"id": 9, "name": "Grace", "score": 7, "color": "teal"}
        ]}"#,
    )
    .unwrap();

    let (mut game, result) = DotsGame::with_grid(2).unwrap().transition(command);
    assert_eq!(result, Ok(CommandOutcome::Started));

    let players = game.roster().players();
    assert_eq!(players[0].id(), PlayerId::new(1));
    assert_eq!(players[0].name(), "Ada");
    assert_eq!(players[1].id(), PlayerId::new(2));
    assert_eq!(game.roster().total_score(), 0);

    for (a, b) in [((0, 0), (0, 1)), ((1, 0), (1, 1)), ((0, 0), (1, 0)), ((0, 1), (1, 1))] {
        game.draw_line(dot(a.0, a.1), dot(b.0, b.1)).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.state().box_owner(&BoxId::new(0, 0)), Some(PlayerId::new(2)));
    assert_eq!(game.roster().players()[1].score(), 1);
}

#[test]
fn test_error_messages() {
    let err = DotsError::from(MoveError::NotAdjacent(dot(0, 0), dot(1, 1)));
    assert_eq!(err.to_string(), "Invalid move: Dots (0, 0) and (1, 1) are not adjacent");

    let err = DotsError::from(RosterError::TooFew);
    assert!(err.to_string().contains("at least 2 players"));
}

#[test]
fn test_game_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "grid_size = 5").unwrap();
    writeln!(file, r#"players = ["Ada", "Grace", "Linus"]"#).unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    let mut game = DotsGame::from_config(&config).unwrap();
    assert_eq!(game.state().grid_size().get(), 5);
    assert_eq!(game.roster().len(), 3);

    game.start().unwrap();
    assert_eq!(game.valid_lines().len(), 40);
}

#[test]
fn test_config_with_blank_name_rejected() {
    let config = GameConfig::new(3, vec!["Ada".into(), "   ".into()]);
    assert_eq!(
        DotsGame::from_config(&config),
        Err(DotsError::Roster(RosterError::EmptyName))
    );
}
