//! The game loop: turn order, move sources, skipping and termination.
//!
//! Each ply either moves a piece or is skipped because the player to move is
//! boxed in. Both consume one unit of the ply budget. The human side's moves
//! come from a `MoveSource`; the computer side asks the search.

use tracing::{info, warn};

use crate::core::{GameConfig, GameState, Move, Player};
use crate::error::{GameError, MoveError};
use crate::eval::{Evaluator, TerritoryHeuristic};
use crate::rules::{advance, has_any_legal_move, is_terminal, validate, winner, GameResult};
use crate::search::{MinimaxSearch, SearchConfig};

use super::setup::{new_game, rng_for};

/// Supplies candidate moves for one side.
///
/// The session validates every proposal. A rejected proposal is reported
/// back through `rejected` and `propose` is called again, in a loop, until a
/// legal move arrives or the source returns `None`.
pub trait MoveSource {
    /// Propose a move for the player to move. `None` ends the input.
    fn propose(&mut self, state: &GameState) -> Option<Move>;

    /// The last proposal broke a rule.
    fn rejected(&mut self, _mv: Move, _error: &MoveError) {}
}

impl<V: Evaluator> MoveSource for MinimaxSearch<V> {
    fn propose(&mut self, state: &GameState) -> Option<Move> {
        self.best_move(state)
    }
}

/// What happened during one ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlyOutcome {
    /// `player` moved a piece.
    Moved { player: Player, mv: Move },
    /// `player` had no legal move; the turn passed.
    Skipped { player: Player },
}

impl PlyOutcome {
    #[must_use]
    pub fn player(&self) -> Player {
        match self {
            PlyOutcome::Moved { player, .. } | PlyOutcome::Skipped { player } => *player,
        }
    }
}

/// A game in progress.
///
/// Owns the single live `GameState`; nothing else mutates it.
pub struct Game<S, V = TerritoryHeuristic> {
    state: GameState,
    human: Player,
    source: S,
    search: MinimaxSearch<V>,
}

impl<S: MoveSource> Game<S> {
    /// Set up a new game from configuration.
    pub fn new(config: &GameConfig, source: S, search: SearchConfig) -> Result<Self, GameError> {
        let mut rng = rng_for(config);
        let state = new_game(config, &mut rng)?;
        Ok(Self::from_state(
            state,
            config.human_player,
            source,
            MinimaxSearch::new(search),
        ))
    }
}

impl<S: MoveSource, V: Evaluator> Game<S, V> {
    /// Continue from an existing position.
    pub fn from_state(state: GameState, human: Player, source: S, search: MinimaxSearch<V>) -> Self {
        Self {
            state,
            human,
            source,
            search,
        }
    }

    /// Read-only view of the live state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn human_player(&self) -> Player {
        self.human
    }

    /// The computer side's search, for its statistics.
    #[must_use]
    pub fn search(&self) -> &MinimaxSearch<V> {
        &self.search
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        is_terminal(&self.state)
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_over().then(|| winner(&self.state))
    }

    /// Play one ply.
    pub fn play_ply(&mut self) -> Result<PlyOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let player = self.state.current_player();
        let mv = if !has_any_legal_move(&self.state, player) {
            None
        } else if player == self.human {
            Some(self.human_move(player)?)
        } else {
            self.search.best_move(&self.state)
        };

        advance(&mut self.state, mv);

        let outcome = match mv {
            Some(mv) => {
                info!(%player, %mv, remaining = self.state.remaining_turns(), "ply played");
                PlyOutcome::Moved { player, mv }
            }
            None => {
                info!(%player, remaining = self.state.remaining_turns(), "no legal move, ply skipped");
                PlyOutcome::Skipped { player }
            }
        };
        Ok(outcome)
    }

    /// Play until the game ends and return the result.
    pub fn play_to_end(&mut self) -> Result<GameResult, GameError> {
        while !self.is_over() {
            self.play_ply()?;
        }
        let result = winner(&self.state);
        info!(%result, "game over");
        Ok(result)
    }

    fn human_move(&mut self, player: Player) -> Result<Move, GameError> {
        loop {
            let Some(mv) = self.source.propose(&self.state) else {
                return Err(GameError::InputClosed(player));
            };
            match validate(&self.state, mv) {
                Ok(()) => return Ok(mv),
                Err(err) => {
                    warn!(%player, %mv, %err, "move rejected");
                    self.source.rejected(mv, &err);
                }
            }
        }
    }
}
