use crate::error::{PlacementError, SquareError};
use crate::types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of optional pieces, at most one per square.
///
/// The board knows nothing about legality: `set` writes whatever it is given.
/// Legality belongs to [`crate::validator`], and inside a game only
/// [`crate::GameState`] holds a mutable board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Standard starting placement: White on ranks 0 and 1, Black on 7 and 6.
    pub fn standard() -> Self {
        let mut b = Board::empty();

        // Pawns
        for f in 0..8 {
            b.squares[8 + f] = Some(Piece::new(PieceKind::Pawn, Color::White));
            b.squares[48 + f] = Some(Piece::new(PieceKind::Pawn, Color::Black));
        }
        // Back ranks
        for (f, &kind) in BACK_RANK.iter().enumerate() {
            b.squares[f] = Some(Piece::new(kind, Color::White));
            b.squares[56 + f] = Some(Piece::new(kind, Color::Black));
        }
        b
    }

    /// Parse the piece-placement field of a FEN string, e.g.
    /// `"4k3/8/8/8/3R4/8/8/4K3"`. The first rank listed is rank 7.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::RankCount(ranks.len()));
        }

        let mut b = Board::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as i8;
            let mut file: usize = 0;
            for ch in rank_str.chars() {
                if let Some(d @ 1..=8) = ch.to_digit(10) {
                    file += d as usize;
                    continue;
                }
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let kind = match ch.to_ascii_lowercase() {
                    'k' => PieceKind::King,
                    'q' => PieceKind::Queen,
                    'r' => PieceKind::Rook,
                    'b' => PieceKind::Bishop,
                    'n' => PieceKind::Knight,
                    'p' => PieceKind::Pawn,
                    _ => return Err(PlacementError::InvalidPiece(ch)),
                };
                let sq = i8::try_from(file)
                    .ok()
                    .and_then(|f| Square::from_coords(f, rank))
                    .ok_or(PlacementError::FileCount {
                        rank: rank_idx,
                        files: file + 1,
                    })?;
                b.set(sq, Some(Piece::new(kind, color)));
                file += 1;
            }
            if file != 8 {
                return Err(PlacementError::FileCount {
                    rank: rank_idx,
                    files: file,
                });
            }
        }
        Ok(b)
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Read by raw coordinates, failing fast when they are off the board.
    pub fn piece_at(&self, file: i8, rank: i8) -> Result<Option<Piece>, SquareError> {
        Square::new(file, rank).map(|sq| self.get(sq))
    }

    /// Unconditional write; no legality check.
    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.index()] = pc;
    }

    /// Write by raw coordinates, failing fast when they are off the board.
    pub fn set_at(&mut self, file: i8, rank: i8, pc: Option<Piece>) -> Result<(), SquareError> {
        let sq = Square::new(file, rank)?;
        self.set(sq, pc);
        Ok(())
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    pub fn is_occupied_by(&self, sq: Square, color: Color) -> bool {
        matches!(self.get(sq), Some(pc) if pc.color == color)
    }

    /// Occupied squares with their pieces, rank 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|pc| (sq, pc)))
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
