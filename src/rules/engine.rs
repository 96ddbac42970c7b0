//! Move legality, generation, application and game termination.
//!
//! A move is legal when both endpoints are on the board, the source holds a
//! piece of the player to move, the destination is empty, and the step is
//! exactly one cell up, down, left or right.
//!
//! Validation and execution are separate: `apply` trusts its caller.

use crate::core::{Board, Cell, Direction, GameState, Move, MoveList, Player, PlayerMap};
use crate::error::MoveError;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Equal mobility.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{} wins", p),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Check a candidate move for the player to move, reporting the first rule
/// it breaks.
pub fn validate(state: &GameState, mv: Move) -> Result<(), MoveError> {
    check_move(state.board(), state.current_player(), mv)
}

/// Check whether a move is legal for the player to move.
#[must_use]
pub fn is_legal(state: &GameState, mv: Move) -> bool {
    validate(state, mv).is_ok()
}

fn check_move(board: &Board, mover: Player, mv: Move) -> Result<(), MoveError> {
    for end in [mv.from, mv.to] {
        if !board.in_bounds(end) {
            return Err(MoveError::OutOfBounds(end));
        }
    }

    match board.get(mv.from).owner() {
        None => return Err(MoveError::EmptySource(mv.from)),
        Some(owner) if owner != mover => {
            return Err(MoveError::WrongOwner {
                at: mv.from,
                owner,
            })
        }
        Some(_) => {}
    }

    if mv.from == mv.to {
        return Err(MoveError::ZeroDistance);
    }
    if !board.get(mv.to).is_empty() {
        return Err(MoveError::Occupied(mv.to));
    }
    if mv.from.manhattan(mv.to) != 1 {
        return Err(MoveError::NotAdjacent(mv));
    }

    Ok(())
}

/// Visit every one-step move of `player`, row-major over pieces, then in
/// `Direction::ALL` order. Stops early when `visit` returns `false`.
fn for_each_move(board: &Board, player: Player, mut visit: impl FnMut(Move) -> bool) {
    for (from, owner) in board.pieces() {
        if owner != player {
            continue;
        }
        for dir in Direction::ALL {
            let Some(to) = board.neighbor(from, dir) else {
                continue;
            };
            if board.get(to).is_empty() && !visit(Move::new(from, to)) {
                return;
            }
        }
    }
}

/// Check whether `player` could move if it were their turn.
#[must_use]
pub fn has_any_legal_move(state: &GameState, player: Player) -> bool {
    let mut found = false;
    for_each_move(state.board(), player, |_| {
        found = true;
        false
    });
    found
}

/// Number of legal moves `player` has as mover.
#[must_use]
pub fn count_moves(state: &GameState, player: Player) -> usize {
    let mut count = 0;
    for_each_move(state.board(), player, |_| {
        count += 1;
        true
    });
    count
}

/// Every legal move for the player to move, in deterministic order.
#[must_use]
pub fn legal_moves(state: &GameState) -> MoveList {
    let mut moves = MoveList::new();
    for_each_move(state.board(), state.current_player(), |mv| {
        moves.push(mv);
        true
    });
    moves
}

/// Relocate the piece at `mv.from` to `mv.to`.
///
/// The move must already have been validated against `state`.
pub fn apply(state: &mut GameState, mv: Move) {
    let board = state.board_mut();
    let piece = board.get(mv.from);
    board.set(mv.to, piece);
    board.set(mv.from, Cell::Empty);
}

/// Play one full ply: apply the move (if any), pass the turn to the other
/// player and consume one unit of the ply budget. `None` is a skipped ply.
pub fn advance(state: &mut GameState, mv: Option<Move>) {
    if let Some(mv) = mv {
        apply(state, mv);
    }
    state.pass_turn();
}

/// Hypothetical position after `mv`, as the search sees it: the move is
/// applied and the turn handed over. The ply budget is not consumed.
pub(crate) fn successor(state: &GameState, mv: Move) -> GameState {
    let mut child = state.clone();
    apply(&mut child, mv);
    child.hand_over();
    child
}

/// Check if the game is over: budget exhausted or nobody can move.
#[must_use]
pub fn is_terminal(state: &GameState) -> bool {
    state.remaining_turns() == 0
        || (!has_any_legal_move(state, Player::A) && !has_any_legal_move(state, Player::B))
}

/// Legal move counts for both players.
#[must_use]
pub fn mobility(state: &GameState) -> PlayerMap<usize> {
    PlayerMap::new(|p| count_moves(state, p))
}

/// Decide the game by mobility: more available moves wins, equal is a draw.
#[must_use]
pub fn winner(state: &GameState) -> GameResult {
    let counts = mobility(state);
    match counts[Player::A].cmp(&counts[Player::B]) {
        std::cmp::Ordering::Greater => GameResult::Winner(Player::A),
        std::cmp::Ordering::Less => GameResult::Winner(Player::B),
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    fn state(rows: &[&str], to_move: Player, turns: u32) -> GameState {
        GameState::new(Board::from_rows(rows).unwrap(), to_move, turns)
    }

    fn mv(from: (usize, usize), to: (usize, usize)) -> Move {
        Move::new(Coord::new(from.0, from.1), Coord::new(to.0, to.1))
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::B);
        assert!(!result.is_winner(Player::A));
        assert!(result.is_winner(Player::B));
        assert!(!GameResult::Draw.is_winner(Player::A));
        assert_eq!(result.to_string(), "player O wins");
    }

    #[test]
    fn test_validate_reports_each_rule() {
        let s = state(&["XO.", "...", "..O"], Player::A, 10);

        assert_eq!(validate(&s, mv((0, 0), (1, 0))), Ok(()));
        assert_eq!(
            validate(&s, mv((0, 0), (3, 0))),
            Err(MoveError::OutOfBounds(Coord::new(3, 0)))
        );
        assert_eq!(
            validate(&s, mv((1, 1), (1, 2))),
            Err(MoveError::EmptySource(Coord::new(1, 1)))
        );
        assert_eq!(
            validate(&s, mv((0, 1), (0, 2))),
            Err(MoveError::WrongOwner {
                at: Coord::new(0, 1),
                owner: Player::B
            })
        );
        assert_eq!(validate(&s, mv((0, 0), (0, 0))), Err(MoveError::ZeroDistance));
        assert_eq!(
            validate(&s, mv((0, 0), (0, 1))),
            Err(MoveError::Occupied(Coord::new(0, 1)))
        );
        assert_eq!(
            validate(&s, mv((0, 0), (1, 1))),
            Err(MoveError::NotAdjacent(mv((0, 0), (1, 1))))
        );
        assert_eq!(
            validate(&s, mv((0, 0), (2, 0))),
            Err(MoveError::NotAdjacent(mv((0, 0), (2, 0))))
        );
    }

    #[test]
    fn test_legal_moves_order() {
        let s = state(&["...", ".X.", "..."], Player::A, 10);
        let moves = legal_moves(&s);
        assert_eq!(
            moves.as_slice(),
            &[
                mv((1, 1), (0, 1)),
                mv((1, 1), (2, 1)),
                mv((1, 1), (1, 0)),
                mv((1, 1), (1, 2)),
            ]
        );
    }

    #[test]
    fn test_legal_moves_corner_scenario() {
        let s = state(&["X..", "...", "..O"], Player::A, 10);
        let moves = legal_moves(&s);
        // down before right
        assert_eq!(moves.as_slice(), &[mv((0, 0), (1, 0)), mv((0, 0), (0, 1))]);
    }

    #[test]
    fn test_has_any_legal_move_ignores_turn() {
        let s = state(&["XO.", "OO.", "..."], Player::B, 10);
        assert!(!has_any_legal_move(&s, Player::A));
        assert!(has_any_legal_move(&s, Player::B));
        assert_eq!(count_moves(&s, Player::A), 0);
        assert_eq!(count_moves(&s, Player::B), 4);
    }

    #[test]
    fn test_apply_relocates_piece() {
        let mut s = state(&["X..", "...", "..O"], Player::A, 10);
        apply(&mut s, mv((0, 0), (0, 1)));

        assert!(s.board().get(Coord::new(0, 0)).is_empty());
        assert!(s.board().get(Coord::new(0, 1)).is_owned_by(Player::A));
        // apply does not touch turn bookkeeping
        assert_eq!(s.current_player(), Player::A);
        assert_eq!(s.remaining_turns(), 10);
    }

    #[test]
    fn test_successor_leaves_budget_and_parent() {
        let s = state(&["X..", "...", "..O"], Player::A, 1);
        let child = successor(&s, mv((0, 0), (1, 0)));

        assert!(child.board().get(Coord::new(1, 0)).is_owned_by(Player::A));
        assert!(child.board().get(Coord::new(0, 0)).is_empty());
        assert_eq!(child.current_player(), Player::B);
        assert_eq!(child.remaining_turns(), 1);
        assert!(!is_terminal(&child));

        assert!(s.board().get(Coord::new(0, 0)).is_owned_by(Player::A));
        assert_eq!(s.current_player(), Player::A);
    }

    #[test]
    fn test_advance_consumes_ply() {
        let mut s = state(&["X..", "...", "..O"], Player::A, 10);
        advance(&mut s, Some(mv((0, 0), (1, 0))));
        assert_eq!(s.current_player(), Player::B);
        assert_eq!(s.remaining_turns(), 9);

        advance(&mut s, None);
        assert_eq!(s.current_player(), Player::A);
        assert_eq!(s.remaining_turns(), 8);
        assert!(s.board().get(Coord::new(1, 0)).is_owned_by(Player::A));
    }

    #[test]
    fn test_terminal_on_zero_budget() {
        let s = state(&["X..", "...", "..O"], Player::A, 0);
        assert!(is_terminal(&s));
    }

    #[test]
    fn test_terminal_when_nobody_moves() {
        let s = state(&["XOX", "OXO", "XOX"], Player::A, 50);
        assert!(is_terminal(&s));
        assert_eq!(winner(&s), GameResult::Draw);
    }

    #[test]
    fn test_not_terminal_when_one_side_can_move() {
        let s = state(&["XO.", "OO.", "..."], Player::A, 50);
        assert!(!is_terminal(&s));
    }

    #[test]
    fn test_winner_by_mobility() {
        // A in the corner has 2 moves, B in the center has 4
        let s = state(&["X..", ".O.", "..."], Player::A, 0);
        let counts = mobility(&s);
        assert_eq!(counts[Player::A], 2);
        assert_eq!(counts[Player::B], 4);
        assert_eq!(winner(&s), GameResult::Winner(Player::B));
    }
}
