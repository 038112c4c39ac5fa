use tracing::debug;

use crate::{
    board::Board,
    error::Rejection,
    types::{Color, Square},
    validator::{SafetyRule, Unrestricted, check_move},
};

/// Outcome of [`GameState::attempt_move`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Accepted,
    Rejected(Rejection),
}

impl MoveResult {
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveResult::Accepted)
    }

    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            MoveResult::Accepted => Ok(()),
            MoveResult::Rejected(r) => Err(r),
        }
    }
}

/// One game: the board and the side on move.
///
/// `attempt_move` is the only way to change the board of a running game.
/// A move is either fully applied (piece moved, turn flipped) or rejected
/// with nothing changed. There is no terminal state; the surrounding loop
/// decides when to stop.
#[derive(Clone, Debug)]
pub struct GameState<S = Unrestricted> {
    board: Board,
    turn: Color,
    safety: S,
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_position(Board::standard(), Color::White)
    }

    pub fn from_position(board: Board, turn: Color) -> Self {
        GameState {
            board,
            turn,
            safety: Unrestricted,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SafetyRule> GameState<S> {
    /// Standard starting position with an extra safety rule applied to every move.
    pub fn with_safety_rule(safety: S) -> Self {
        GameState {
            board: Board::standard(),
            turn: Color::White,
            safety,
        }
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Read-only view of the board for rendering.
    pub fn snapshot_for_display(&self) -> &Board {
        &self.board
    }

    pub fn attempt_move(&mut self, start: Square, end: Square) -> MoveResult {
        // Every check runs before the first write.
        let pc = match check_move(&self.board, self.turn, start, end, &self.safety) {
            Ok(pc) => pc,
            Err(reason) => {
                debug!(%start, %end, turn = %self.turn, %reason, "move rejected");
                return MoveResult::Rejected(reason);
            }
        };

        let captured = self.board.get(end);
        self.board.set(end, Some(pc));
        self.board.set(start, None);
        self.turn = self.turn.other();

        debug!(
            piece = ?pc.kind,
            color = %pc.color,
            %start,
            %end,
            captured = ?captured.map(|c| c.kind),
            "move accepted"
        );
        MoveResult::Accepted
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
