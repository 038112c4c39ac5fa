//! Plain-text board rendering

use chess_rules::{Board, Color, Piece, PieceKind, Square};

pub fn piece_letter(pc: Piece) -> char {
    let ch = match pc.kind {
        PieceKind::King => 'K',
        PieceKind::Queen => 'Q',
        PieceKind::Rook => 'R',
        PieceKind::Bishop => 'B',
        PieceKind::Knight => 'N',
        PieceKind::Pawn => 'P',
    };
    match pc.color {
        Color::White => ch,
        Color::Black => ch.to_ascii_lowercase(),
    }
}

/// One line per rank index, 0 first; squares space-joined, `.` when empty.
pub fn render(board: &Board) -> String {
    let mut out = String::with_capacity(8 * 16);
    for rank in 0..8 {
        let row: Vec<String> = (0..8)
            .filter_map(|file| Square::new(file, rank).ok())
            .map(|sq| board.get(sq).map_or('.', piece_letter).to_string())
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}
