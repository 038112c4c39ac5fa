//! Error types for the rules core
//!
//! `SquareError` covers coordinates that fall off the board. `Rejection` is
//! the reason an attempted move was refused; it never aborts the game, the
//! caller just asks for another move.

/// Coordinates outside `[0, 8) x [0, 8)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    #[error("square ({file}, {rank}) is off the board")]
    OutOfRange { file: i8, rank: i8 },
}

/// Why `GameState::attempt_move` refused a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The start square is empty
    #[error("no piece on the start square")]
    NoPieceAtStart,

    /// The piece on the start square belongs to the side not on move
    #[error("that piece belongs to the side not on move")]
    WrongTurn,

    /// The piece cannot reach the end square, the end square holds a piece of
    /// the same color, or a safety rule refused the move
    #[error("the piece cannot move there")]
    IllegalGeometry,
}

/// Errors from parsing a board placement string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("expected 8 ranks separated by '/', found {0}")]
    RankCount(usize),

    #[error("rank {rank} describes {files} files instead of 8")]
    FileCount { rank: usize, files: usize },

    #[error("invalid piece character: {0}")]
    InvalidPiece(char),
}
