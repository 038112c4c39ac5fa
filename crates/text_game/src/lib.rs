//! Text front end for the chess rules core
//!
//! Reads squares in algebraic notation from a line-based input, feeds them to
//! a [`chess_rules::GameState`] and prints the board back.

mod config;
mod input;
mod render;
mod session;

pub use config::*;
pub use input::*;
pub use render::*;
pub use session::*;
