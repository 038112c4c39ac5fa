//! Move legality for the side on move.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. the start square must hold a piece
//! 2. that piece must belong to the side on move
//! 3. the end square must be a candidate and not hold a piece of the mover's color
//! 4. the [`SafetyRule`] must permit the move
//!
//! Nothing here mutates the board.

use crate::{
    board::Board,
    error::Rejection,
    movegen::candidates,
    types::{Color, Move, Piece, Square},
};

/// Extra filter applied after the geometric checks pass.
///
/// This is where check detection plugs in: a rule that plays `mv` on a copy
/// of `board` and refuses it when the mover's king is left attacked.
pub trait SafetyRule {
    fn permits(&self, board: &Board, mover: Color, mv: Move) -> bool;
}

/// Permits every geometrically valid move. Check detection is not part of
/// these rules yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unrestricted;

impl SafetyRule for Unrestricted {
    fn permits(&self, _board: &Board, _mover: Color, _mv: Move) -> bool {
        true
    }
}

impl<F> SafetyRule for F
where
    F: Fn(&Board, Color, Move) -> bool,
{
    fn permits(&self, board: &Board, mover: Color, mv: Move) -> bool {
        self(board, mover, mv)
    }
}

/// Validate moving the piece on `start` to `end` with `turn` on move.
/// Returns the moving piece on success.
pub fn check_move(
    board: &Board,
    turn: Color,
    start: Square,
    end: Square,
    rule: &impl SafetyRule,
) -> Result<Piece, Rejection> {
    let pc = board.get(start).ok_or(Rejection::NoPieceAtStart)?;
    if pc.color != turn {
        return Err(Rejection::WrongTurn);
    }
    if board.is_occupied_by(end, pc.color) || !candidates(pc, start, board).contains(&end) {
        return Err(Rejection::IllegalGeometry);
    }
    if !rule.permits(board, turn, Move::new(start, end)) {
        return Err(Rejection::IllegalGeometry);
    }
    Ok(pc)
}

pub fn is_legal(
    board: &Board,
    turn: Color,
    start: Square,
    end: Square,
    rule: &impl SafetyRule,
) -> bool {
    check_move(board, turn, start, end, rule).is_ok()
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod validator_tests;
