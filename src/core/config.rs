//! Game setup configuration.
//!
//! This is the shape the setup collaborator supplies: board size, pieces per
//! player, the turn limit (in rounds of two plies), which side the human
//! plays, and optionally who moves first and the placement seed.

use serde::{Deserialize, Serialize};

use super::board::{DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};
use super::player::Player;
use crate::error::SetupError;

/// Complete setup configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length (at least 3).
    pub board_size: usize,

    /// Pieces placed for each player.
    pub pieces_per_player: usize,

    /// Rounds before the hard stop. One round is two plies.
    pub turn_limit: u32,

    /// Side controlled by the human move source.
    pub human_player: Player,

    /// Player making the first ply. `None` means the human moves first.
    pub first_player: Option<Player>,

    /// Placement seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            pieces_per_player: 4,
            turn_limit: 20,
            human_player: Player::A,
            first_player: None,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    #[must_use]
    pub fn with_pieces(mut self, pieces: usize) -> Self {
        self.pieces_per_player = pieces;
        self
    }

    #[must_use]
    pub fn with_turn_limit(mut self, rounds: u32) -> Self {
        self.turn_limit = rounds;
        self
    }

    #[must_use]
    pub fn with_human(mut self, player: Player) -> Self {
        self.human_player = player;
        self
    }

    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = Some(player);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Player who makes the first ply.
    #[must_use]
    pub fn starting_player(&self) -> Player {
        self.first_player.unwrap_or(self.human_player)
    }

    /// Total plies the game may last.
    #[must_use]
    pub fn ply_budget(&self) -> u32 {
        self.turn_limit.saturating_mul(2)
    }

    /// Reject configurations that cannot produce a game.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(SetupError::BoardTooSmall(self.board_size));
        }
        if self.pieces_per_player == 0 {
            return Err(SetupError::NoPieces);
        }
        let capacity = self.board_size * self.board_size;
        if self.pieces_per_player.saturating_mul(2) > capacity {
            return Err(SetupError::TooManyPieces {
                requested: self.pieces_per_player,
                capacity,
            });
        }
        if self.turn_limit == 0 {
            return Err(SetupError::NoTurns);
        }
        Ok(())
    }
}
