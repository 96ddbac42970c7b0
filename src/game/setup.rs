//! Initial position: an empty grid with each side's pieces scattered at
//! random over distinct cells.

use tracing::{info, instrument};

use crate::core::{Board, Cell, Coord, GameConfig, GameRng, GameState, Player};
use crate::error::SetupError;

/// RNG for a configuration: seeded when the config carries a seed.
#[must_use]
pub fn rng_for(config: &GameConfig) -> GameRng {
    config.seed.map_or_else(GameRng::from_entropy, GameRng::new)
}

/// Build the opening state.
///
/// Player A's pieces are placed first, then player B's, each uniformly over
/// the cells still empty. The player to move is `config.starting_player()`
/// and the ply budget is twice the turn limit.
#[instrument(skip_all, fields(size = config.board_size, pieces = config.pieces_per_player, seed = rng.seed()))]
pub fn new_game(config: &GameConfig, rng: &mut GameRng) -> Result<GameState, SetupError> {
    config.validate()?;

    let mut board =
        Board::new(config.board_size).map_err(|_| SetupError::BoardTooSmall(config.board_size))?;

    // Draw from the remaining empty cells so placement always terminates.
    let mut empty: Vec<Coord> = board.coords().collect();
    for player in Player::ALL {
        for _ in 0..config.pieces_per_player {
            let idx = rng.gen_range_usize(0..empty.len());
            let at = empty.swap_remove(idx);
            board.set(at, Cell::Piece(player));
        }
    }

    let state = GameState::new(board, config.starting_player(), config.ply_budget());
    info!(
        first = %state.current_player(),
        plies = state.remaining_turns(),
        "game set up"
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_places_pieces() {
        let config = GameConfig::new().with_pieces(6).with_turn_limit(15);
        let state = new_game(&config, &mut GameRng::new(42)).unwrap();

        let counts = state.board().piece_counts();
        assert_eq!(counts[Player::A], 6);
        assert_eq!(counts[Player::B], 6);
        assert_eq!(state.board().empty_cells().count(), 49 - 12);
        assert_eq!(state.remaining_turns(), 30);
        assert_eq!(state.current_player(), Player::A);
    }

    #[test]
    fn test_new_game_first_player() {
        let config = GameConfig::new().with_human(Player::B);
        let state = new_game(&config, &mut GameRng::new(1)).unwrap();
        assert_eq!(state.current_player(), Player::B);

        let config = config.with_first_player(Player::A);
        let state = new_game(&config, &mut GameRng::new(1)).unwrap();
        assert_eq!(state.current_player(), Player::A);
    }

    #[test]
    fn test_new_game_deterministic() {
        let config = GameConfig::new().with_pieces(5);
        let a = new_game(&config, &mut GameRng::new(7)).unwrap();
        let b = new_game(&config, &mut GameRng::new(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_new_game_fills_board() {
        // 3x3 with 4 + 4 pieces leaves exactly one hole
        let config = GameConfig::new().with_board_size(3).with_pieces(4);
        let state = new_game(&config, &mut GameRng::new(3)).unwrap();
        assert_eq!(state.board().empty_cells().count(), 1);
    }

    #[test]
    fn test_new_game_rejects_bad_config() {
        let config = GameConfig::new().with_board_size(3).with_pieces(5);
        assert_eq!(
            new_game(&config, &mut GameRng::new(3)),
            Err(SetupError::TooManyPieces {
                requested: 5,
                capacity: 9
            })
        );
    }

    #[test]
    fn test_rng_for_uses_seed() {
        let config = GameConfig::new().with_seed(11);
        assert_eq!(rng_for(&config).seed(), 11);
    }
}
