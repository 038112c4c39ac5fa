//! Candidate destinations by piece geometry.
//!
//! Generation ignores whose turn it is and never looks at king safety; that
//! filtering happens in [`crate::validator`].

use tracing::trace;

use crate::{board::Board, types::*};

const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// How a piece kind moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Geometry {
    /// Fixed offsets, unaffected by pieces in between.
    Leap(&'static [(i8, i8)]),
    /// Rays walked until the edge or the first occupied square.
    Slide(&'static [(i8, i8)]),
    /// One square forward in the mover's direction, onto an empty square.
    Push,
}

pub fn geometry(kind: PieceKind) -> Geometry {
    match kind {
        PieceKind::King => Geometry::Leap(&KING_STEPS),
        PieceKind::Knight => Geometry::Leap(&KNIGHT_JUMPS),
        PieceKind::Rook => Geometry::Slide(&ORTHOGONAL),
        PieceKind::Bishop => Geometry::Slide(&DIAGONAL),
        PieceKind::Queen => Geometry::Slide(&ALL_DIRECTIONS),
        PieceKind::Pawn => Geometry::Push,
    }
}

/// Squares `pc` standing on `from` could move to on `board`.
pub fn candidates(pc: Piece, from: Square, board: &Board) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    candidates_into(pc, from, board, &mut out);
    out
}

/// Same as [`candidates`], reusing the caller's buffer.
pub fn candidates_into(pc: Piece, from: Square, board: &Board, out: &mut Vec<Square>) {
    out.clear();
    match geometry(pc.kind) {
        Geometry::Leap(offsets) => leap(from, offsets, out),
        Geometry::Slide(dirs) => ray_walk(board, from, pc.color, dirs, out),
        Geometry::Push => push(board, from, pc.color, out),
    }
    trace!(piece = ?pc, %from, count = out.len(), "generated candidates");
}

fn leap(from: Square, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    out.extend(offsets.iter().filter_map(|&(df, dr)| from.offset(df, dr)));
}

fn push(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    if let Some(to) = from.offset(0, c.forward())
        && board.is_empty(to)
    {
        out.push(to);
    }
}

/// Walk each direction from `from` one square at a time. A ray ends at the
/// board edge, before a piece of color `c`, or on a piece of the other color.
pub fn ray_walk(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(df, dr) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(df, dr) {
            match board.get(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
