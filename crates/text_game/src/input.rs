//! Algebraic square input
//!
//! `"e2"` maps to file `e - a = 4` and rank index `8 - 2 = 6`. Rank index 0
//! holds White's back rank, so `"a8"` names White's queen-side rook and `"e7"`
//! White's king pawn. The board is printed in the same order, rank index 0 on
//! the first line, which keeps what the player types consistent with what
//! they see.

use chess_rules::Square;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("expected a square like 'e2', got {0:?}")]
    Malformed(String),

    #[error("file '{0}' is not between 'a' and 'h'")]
    File(char),

    #[error("rank '{0}' is not between '1' and '8'")]
    Rank(char),
}

pub fn parse_square(text: &str) -> Result<Square, InputError> {
    let mut chars = text.trim().chars();
    let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(InputError::Malformed(text.trim().to_string()));
    };

    let f = f.to_ascii_lowercase();
    if !('a'..='h').contains(&f) {
        return Err(InputError::File(f));
    }
    let digit = match r.to_digit(10) {
        Some(d @ 1..=8) => d as i8,
        _ => return Err(InputError::Rank(r)),
    };

    let file = (f as u8 - b'a') as i8;
    Square::new(file, 8 - digit).map_err(|_| InputError::Malformed(text.trim().to_string()))
}

/// Inverse of [`parse_square`].
pub fn square_name(sq: Square) -> String {
    let f = (b'a' + sq.file() as u8) as char;
    let r = (b'0' + (8 - sq.rank()) as u8) as char;
    format!("{f}{r}")
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
