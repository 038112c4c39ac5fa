use super::*;

fn sq(file: i8, rank: i8) -> Square {
    Square::new(file, rank).unwrap()
}

const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);

fn board_with(pieces: &[(i8, i8, Piece)]) -> Board {
    let mut b = Board::empty();
    for &(f, r, pc) in pieces {
        b.set(sq(f, r), Some(pc));
    }
    b
}

#[test]
fn test_every_kind_has_geometry() {
    for kind in PieceKind::ALL {
        let g = geometry(kind);
        match g {
            Geometry::Leap(offsets) | Geometry::Slide(offsets) => assert!(!offsets.is_empty()),
            Geometry::Push => assert_eq!(kind, PieceKind::Pawn),
        }
    }
}

#[test]
fn test_rook_empty_board() {
    let b = board_with(&[(3, 3, WHITE_ROOK)]);
    let moves = candidates(WHITE_ROOK, sq(3, 3), &b);
    // 7 per axis, 2 axes
    assert_eq!(moves.len(), 14);
    assert!(moves.iter().all(|m| m.file() == 3 || m.rank() == 3));
}

#[test]
fn test_rook_blocked_by_own_piece() {
    let b = board_with(&[
        (3, 3, WHITE_ROOK),
        (3, 5, Piece::new(PieceKind::Knight, Color::White)),
    ]);
    let moves = candidates(WHITE_ROOK, sq(3, 3), &b);
    assert!(moves.contains(&sq(3, 4)));
    assert!(!moves.contains(&sq(3, 5)));
    assert!(!moves.contains(&sq(3, 6)));
    assert!(!moves.contains(&sq(3, 7)));
    // 14 minus d6..d8
    assert_eq!(moves.len(), 11);
}

#[test]
fn test_rook_captures_enemy_piece() {
    let b = board_with(&[
        (3, 3, WHITE_ROOK),
        (3, 5, Piece::new(PieceKind::Pawn, Color::Black)),
    ]);
    let moves = candidates(WHITE_ROOK, sq(3, 3), &b);
    assert!(moves.contains(&sq(3, 4)));
    assert!(moves.contains(&sq(3, 5)));
    assert!(!moves.contains(&sq(3, 6)));
    assert!(!moves.contains(&sq(3, 7)));
    assert_eq!(moves.len(), 12);
}

#[test]
fn test_bishop_center_and_corner() {
    let bishop = Piece::new(PieceKind::Bishop, Color::Black);
    let b = board_with(&[(3, 3, bishop)]);
    assert_eq!(candidates(bishop, sq(3, 3), &b).len(), 13);

    let b = board_with(&[(0, 0, bishop)]);
    let moves = candidates(bishop, sq(0, 0), &b);
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|m| m.file() == m.rank()));
}

#[test]
fn test_queen_is_rook_plus_bishop() {
    let queen = Piece::new(PieceKind::Queen, Color::White);
    let b = board_with(&[
        (3, 3, queen),
        (5, 5, Piece::new(PieceKind::Pawn, Color::Black)),
        (3, 1, Piece::new(PieceKind::Pawn, Color::White)),
        (0, 3, Piece::new(PieceKind::Rook, Color::Black)),
    ]);

    let mut as_queen = candidates(queen, sq(3, 3), &b);
    let mut as_rook = candidates(Piece::new(PieceKind::Rook, Color::White), sq(3, 3), &b);
    let as_bishop = candidates(Piece::new(PieceKind::Bishop, Color::White), sq(3, 3), &b);
    as_rook.extend(as_bishop);
    as_queen.sort();
    as_rook.sort();
    assert_eq!(as_queen, as_rook);
}

#[test]
fn test_king_counts_by_position() {
    let king = Piece::new(PieceKind::King, Color::White);
    let b = Board::empty();
    assert_eq!(candidates(king, sq(0, 0), &b).len(), 3);
    assert_eq!(candidates(king, sq(0, 4), &b).len(), 5);
    assert_eq!(candidates(king, sq(4, 4), &b).len(), 8);
}

#[test]
fn test_knight_corner() {
    let knight = Piece::new(PieceKind::Knight, Color::Black);
    let mut moves = candidates(knight, sq(0, 0), &Board::empty());
    moves.sort();
    assert_eq!(moves, vec![sq(2, 1), sq(1, 2)]);
}

#[test]
fn test_knight_jumps_over_pieces() {
    let b = Board::standard();
    let knight = b.get(sq(1, 0)).unwrap();
    let moves = candidates(knight, sq(1, 0), &b);
    assert!(moves.contains(&sq(0, 2)));
    assert!(moves.contains(&sq(2, 2)));
    // d2 holds a white pawn; filtering own pieces is the validator's job
    assert!(moves.contains(&sq(3, 1)));
}

#[test]
fn test_pawn_pushes_toward_own_direction() {
    let white = Piece::new(PieceKind::Pawn, Color::White);
    let black = Piece::new(PieceKind::Pawn, Color::Black);
    let b = Board::empty();
    assert_eq!(candidates(white, sq(4, 1), &b), vec![sq(4, 2)]);
    assert_eq!(candidates(black, sq(4, 6), &b), vec![sq(4, 5)]);
}

#[test]
fn test_pawn_cannot_push_onto_occupied_square() {
    let white = Piece::new(PieceKind::Pawn, Color::White);
    let b = board_with(&[
        (4, 1, white),
        (4, 2, Piece::new(PieceKind::Pawn, Color::Black)),
    ]);
    assert!(candidates(white, sq(4, 1), &b).is_empty());
}

#[test]
fn test_black_pawn_blocked_by_own_piece() {
    let black = Piece::new(PieceKind::Pawn, Color::Black);
    let b = board_with(&[
        (2, 6, black),
        (2, 5, Piece::new(PieceKind::Knight, Color::Black)),
    ]);
    assert!(candidates(black, sq(2, 6), &b).is_empty());

    let b = board_with(&[(2, 6, black)]);
    assert_eq!(candidates(black, sq(2, 6), &b), vec![sq(2, 5)]);
}

#[test]
fn test_pawn_on_last_rank_has_no_push() {
    let white = Piece::new(PieceKind::Pawn, Color::White);
    assert!(candidates(white, sq(2, 7), &Board::empty()).is_empty());
}

#[test]
fn test_sliders_boxed_in_at_start() {
    let b = Board::standard();
    for file in [0, 2, 3, 5, 7] {
        let pc = b.get(sq(file, 0)).unwrap();
        assert!(
            candidates(pc, sq(file, 0), &b).is_empty(),
            "{:?} on file {} should be blocked",
            pc.kind,
            file
        );
    }
}

#[test]
fn test_candidates_into_clears_buffer() {
    let mut buf = vec![sq(7, 7); 5];
    candidates_into(
        Piece::new(PieceKind::Pawn, Color::White),
        sq(0, 1),
        &Board::empty(),
        &mut buf,
    );
    assert_eq!(buf, vec![sq(0, 2)]);
}
