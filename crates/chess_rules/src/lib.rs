//! Chess rules core
//!
//! Tracks one game's board, works out where any piece may move and applies
//! accepted moves. Check, castling, en passant, promotion and draws are not
//! modelled.
//!
//! Call flow: [`GameState::attempt_move`] → [`validator::check_move`] →
//! [`movegen::candidates`] → [`Board::get`].

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod types;
pub mod validator;

pub use board::Board;
pub use error::{PlacementError, Rejection, SquareError};
pub use game::{GameState, MoveResult};
pub use movegen::{Geometry, candidates, candidates_into, geometry, ray_walk};
pub use types::*;
pub use validator::{SafetyRule, Unrestricted, check_move, is_legal};
