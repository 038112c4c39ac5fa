use std::fmt;

use crate::error::SquareError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    /// Rank step a pawn of this color advances by.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// A square on the 8x8 grid. Rank 0 is White's back rank.
///
/// The only ways to obtain a `Square` are [`Square::new`], which rejects
/// coordinates outside `[0, 8)`, and [`Square::offset`], which returns `None`
/// once a step leaves the board. An off-board square is never represented.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8); // rank * 8 + file

impl Square {
    pub fn new(file: i8, rank: i8) -> Result<Self, SquareError> {
        Self::from_coords(file, rank).ok_or(SquareError::OutOfRange { file, rank })
    }

    pub(crate) fn from_coords(file: i8, rank: i8) -> Option<Self> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square((rank as u8) * 8 + file as u8))
        } else {
            None
        }
    }

    pub fn file(self) -> i8 {
        (self.0 % 8) as i8
    }
    pub fn rank(self) -> i8 {
        (self.0 / 8) as i8
    }
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// The square `df` files and `dr` ranks away, if it is still on the board.
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Self::from_coords(self.file() + df, self.rank() + dr)
    }

    /// All 64 squares, rank 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.file(), self.rank())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file(), self.rank())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub start: Square,
    pub end: Square,
}

impl Move {
    pub fn new(start: Square, end: Square) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
