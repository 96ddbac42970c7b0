//! Game loop integration tests with scripted and computer move sources.

use std::collections::VecDeque;

use rust_territory::rules::{is_terminal, legal_moves, winner};
use rust_territory::{
    Board, Game, GameConfig, GameError, GameResult, GameState, MinimaxSearch, Move, MoveError,
    MoveSource, Player, PlyOutcome, SearchConfig,
};

/// Always plays the first legal move.
struct FirstLegal;

impl MoveSource for FirstLegal {
    fn propose(&mut self, state: &GameState) -> Option<Move> {
        legal_moves(state).first().copied()
    }
}

/// Replays fixed proposals, recording every rejection.
struct Script {
    moves: VecDeque<Move>,
    rejected: Vec<(Move, MoveError)>,
}

impl Script {
    fn new(moves: &[&str]) -> Self {
        let moves = moves
            .iter()
            .map(|text| {
                let (from, to) = text.split_once(' ').unwrap();
                Move::new(from.parse().unwrap(), to.parse().unwrap())
            })
            .collect();
        Self {
            moves,
            rejected: Vec::new(),
        }
    }
}

impl MoveSource for Script {
    fn propose(&mut self, _state: &GameState) -> Option<Move> {
        self.moves.pop_front()
    }

    fn rejected(&mut self, mv: Move, error: &MoveError) {
        self.rejected.push((mv, error.clone()));
    }
}

fn shallow() -> SearchConfig {
    SearchConfig::default().with_max_depth(2)
}

fn position(rows: &[&str], to_move: Player, turns: u32) -> GameState {
    GameState::new(Board::from_rows(rows).unwrap(), to_move, turns)
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_autoplay_reaches_terminal() {
    let config = GameConfig::new().with_pieces(4).with_turn_limit(6).with_seed(42);
    let mut game = Game::new(&config, MinimaxSearch::new(shallow()), shallow()).unwrap();

    let result = game.play_to_end().unwrap();
    assert!(game.is_over());
    assert!(is_terminal(game.state()));
    assert_eq!(result, winner(game.state()));
    assert_eq!(game.result(), Some(result));
}

#[test]
fn test_every_ply_consumes_budget() {
    let config = GameConfig::new().with_pieces(3).with_turn_limit(5).with_seed(7);
    let mut game = Game::new(&config, FirstLegal, shallow()).unwrap();

    let budget = game.state().remaining_turns();
    let mut plies = 0;
    while !game.is_over() {
        let mover = game.state().current_player();
        let outcome = game.play_ply().unwrap();
        assert_eq!(outcome.player(), mover);
        assert_eq!(game.state().current_player(), mover.opponent());
        plies += 1;
        assert_eq!(game.state().remaining_turns(), budget - plies);
    }
    assert!(plies <= budget);
}

#[test]
fn test_autoplay_is_deterministic() {
    let config = GameConfig::new().with_pieces(4).with_turn_limit(5).with_seed(3);

    let mut a = Game::new(&config, MinimaxSearch::new(shallow()), shallow()).unwrap();
    let mut b = Game::new(&config, MinimaxSearch::new(shallow()), shallow()).unwrap();
    assert_eq!(a.play_to_end().unwrap(), b.play_to_end().unwrap());
    assert_eq!(a.state(), b.state());
}

#[test]
fn test_human_as_second_player() {
    let config = GameConfig::new()
        .with_pieces(2)
        .with_turn_limit(3)
        .with_human(Player::B)
        .with_seed(5);
    let mut game = Game::new(&config, FirstLegal, shallow()).unwrap();

    assert_eq!(game.state().current_player(), Player::B);
    assert_eq!(game.human_player(), Player::B);
    game.play_to_end().unwrap();
}

// =============================================================================
// Human Input
// =============================================================================

#[test]
fn test_invalid_input_is_retried_until_legal() {
    let state = position(&["X..", "...", "..O"], Player::A, 4);
    let script = Script::new(&["c3 c2", "a1 a1", "a1 b2", "a1 a2"]);
    let mut game = Game::from_state(state, Player::A, script, MinimaxSearch::new(shallow()));

    let outcome = game.play_ply().unwrap();
    assert_eq!(
        outcome,
        PlyOutcome::Moved {
            player: Player::A,
            mv: Move::new("a1".parse().unwrap(), "a2".parse().unwrap()),
        }
    );
    assert!(game.state().board().get("a2".parse().unwrap()).is_owned_by(Player::A));
}

#[test]
fn test_exhausted_input_ends_with_error() {
    let state = position(&["X..", "...", "..O"], Player::A, 4);
    let script = Script::new(&["a1 c1"]);
    let mut game = Game::from_state(state.clone(), Player::A, script, MinimaxSearch::new(shallow()));

    assert!(matches!(game.play_ply(), Err(GameError::InputClosed(Player::A))));
    // the live state is untouched
    assert_eq!(game.state(), &state);
}

#[test]
fn test_human_boxed_in_is_skipped_without_asking() {
    let state = position(&["XO.", "O..", "..."], Player::A, 4);
    let mut game = Game::from_state(state, Player::A, Script::new(&[]), MinimaxSearch::new(shallow()));

    assert_eq!(
        game.play_ply().unwrap(),
        PlyOutcome::Skipped { player: Player::A }
    );
    // the computer then moves normally
    assert!(matches!(
        game.play_ply().unwrap(),
        PlyOutcome::Moved { player: Player::B, .. }
    ));
}

#[test]
fn test_no_plies_after_game_over() {
    let state = position(&["XOX", "OXO", "XOX"], Player::A, 10);
    let mut game = Game::from_state(state, Player::A, FirstLegal, MinimaxSearch::new(shallow()));

    assert!(game.is_over());
    assert_eq!(game.result(), Some(GameResult::Draw));
    assert!(matches!(game.play_ply(), Err(GameError::GameOver)));
    assert_eq!(game.play_to_end().unwrap(), GameResult::Draw);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = GameConfig::new().with_board_size(2);
    let err = Game::new(&config, FirstLegal, shallow()).err().unwrap();
    assert!(matches!(err, GameError::Setup(_)));
    assert!(err.to_string().contains("at least 3"));
}
