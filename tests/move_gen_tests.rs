//! Integration tests for move enumeration through the public API

mod common;

use std::collections::HashSet;

use chess_board::{valid_moves, Board, Color, Coordinate, Destinations, Piece, PieceKind};
use common::{init_tracing, sq};

#[test]
fn test_closed_form_counts_from_d4() {
    init_tracing();
    let board = Board::new();
    let d4 = sq('d', 4);
    let expected = [
        (PieceKind::Rook, 14),
        (PieceKind::Bishop, 13),
        (PieceKind::Queen, 27),
        (PieceKind::Knight, 8),
        (PieceKind::King, 8),
        (PieceKind::Pawn, 1),
    ];
    for (kind, count) in expected {
        assert_eq!(
            valid_moves(kind, Color::White, d4, &board).len(),
            count,
            "{kind:?} on an empty board from d4"
        );
    }
}

#[test]
fn test_blocker_truncates_ray() {
    init_tracing();
    let mut board = Board::new();
    let rook = Piece::rook(Color::Black, sq('a', 8));
    board.place(rook);
    board.place(Piece::bishop(Color::Black, sq('a', 4)));

    let moves = rook.valid_moves(&board).into_set();
    let file_moves: HashSet<Coordinate> = moves
        .iter()
        .filter(|c| c.file.to_char() == 'a')
        .copied()
        .collect();
    let expected: HashSet<Coordinate> = [sq('a', 7), sq('a', 6), sq('a', 5)].into_iter().collect();
    assert_eq!(file_moves, expected);
    assert_eq!(moves.len(), 10);
}

#[test]
fn test_pawn_sequences_both_colors() {
    let board = Board::with_standard_position();
    for file in ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'] {
        assert_eq!(
            board.valid_moves_at(sq(file, 2)),
            Some(Destinations::Ordered(vec![sq(file, 3), sq(file, 4)]))
        );
        assert_eq!(
            board.valid_moves_at(sq(file, 7)),
            Some(Destinations::Ordered(vec![sq(file, 6), sq(file, 5)]))
        );
    }
}

#[test]
fn test_all_valid_moves_by_color() {
    let board = Board::with_standard_position();
    for color in [Color::White, Color::Black] {
        let moves = board.all_valid_moves(color);
        assert!(moves.iter().all(|(piece, _)| piece.color == color));
        let total: usize = moves.iter().map(|(_, d)| d.len()).sum();
        assert_eq!(total, 20, "{color:?} has 16 pawn and 4 knight moves at the start");
    }
}

#[test]
fn test_open_position_after_pawn_advance() {
    let mut board = Board::with_standard_position();
    board.remove(sq('e', 2));
    board.place(Piece::pawn(Color::White, sq('e', 4)));

    let bishop = board.valid_moves_at(sq('f', 1)).unwrap().into_set();
    let expected: HashSet<_> = [sq('e', 2), sq('d', 3), sq('c', 4), sq('b', 5), sq('a', 6)]
        .into_iter()
        .collect();
    assert_eq!(bishop, expected);

    let queen = board.valid_moves_at(sq('d', 1)).unwrap().into_set();
    let expected: HashSet<_> = [sq('e', 2), sq('f', 3), sq('g', 4), sq('h', 5)]
        .into_iter()
        .collect();
    assert_eq!(queen, expected);

    let king = board.valid_moves_at(sq('e', 1)).unwrap().into_set();
    assert_eq!(king, [sq('e', 2)].into_iter().collect());
}
