//! Game state: the grid, whose turn it is, and the remaining ply budget.
//!
//! The game loop owns the single live `GameState`. Search works on clones.
//! Fields are private; the read-only accessors are the render snapshot and
//! the only mutation paths are the rules engine operations.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::Player;

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    remaining_turns: u32,
}

impl GameState {
    /// Create a state from an existing board.
    ///
    /// `remaining_turns` counts plies, not rounds.
    #[must_use]
    pub fn new(board: Board, current_player: Player, remaining_turns: u32) -> Self {
        Self {
            board,
            current_player,
            remaining_turns,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Plies left before the hard stop.
    #[must_use]
    pub fn remaining_turns(&self) -> u32 {
        self.remaining_turns
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Hand the turn to the other player, leaving the ply budget alone.
    pub(crate) fn hand_over(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Hand the turn to the other player and consume one ply.
    pub(crate) fn pass_turn(&mut self) {
        self.hand_over();
        self.remaining_turns = self.remaining_turns.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    #[test]
    fn test_state_accessors() {
        let board = Board::from_rows(&["X..", "...", "..O"]).unwrap();
        let state = GameState::new(board.clone(), Player::B, 6);

        assert_eq!(state.board(), &board);
        assert_eq!(state.current_player(), Player::B);
        assert_eq!(state.remaining_turns(), 6);
    }

    #[test]
    fn test_pass_turn() {
        let mut state = GameState::new(Board::new(3).unwrap(), Player::A, 1);

        state.pass_turn();
        assert_eq!(state.current_player(), Player::B);
        assert_eq!(state.remaining_turns(), 0);

        // Budget never underflows
        state.pass_turn();
        assert_eq!(state.current_player(), Player::A);
        assert_eq!(state.remaining_turns(), 0);
    }

    #[test]
    fn test_hand_over_keeps_budget() {
        let mut state = GameState::new(Board::new(3).unwrap(), Player::A, 5);
        state.hand_over();
        assert_eq!(state.current_player(), Player::B);
        assert_eq!(state.remaining_turns(), 5);
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::from_rows(&["X..", "...", "..O"]).unwrap();
        let original = GameState::new(board, Player::A, 4);
        let mut copy = original.clone();

        copy.board_mut().set(Coord::new(1, 1), crate::core::Cell::Piece(Player::A));
        copy.pass_turn();

        assert!(original.board().get(Coord::new(1, 1)).is_empty());
        assert_eq!(original.current_player(), Player::A);
        assert_eq!(original.remaining_turns(), 4);
    }

    #[test]
    fn test_state_serde() {
        let board = Board::from_rows(&["X.O", "...", "O.X"]).unwrap();
        let state = GameState::new(board, Player::A, 10);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
