//! Integration tests for board construction and the standard position
//!
//! Exercises the public API only: lookups by file letter and rank number,
//! validated writes, and the 32-piece starting layout.

mod common;

use chess_board::{Board, BoardError, Color, Piece, PieceKind};
use common::{init_tracing, sq};

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

fn assert_piece(board: &Board, file: char, rank: u8, expected: Piece) {
    let occupant = board
        .get(file, rank)
        .unwrap()
        .unwrap_or_else(|| panic!("{file}{rank} should be occupied"));
    assert_eq!(*occupant, expected, "Wrong piece on {file}{rank}");
}

#[test]
fn test_create_empty_board() {
    init_tracing();
    let board = Board::new();
    for file in FILES {
        for rank in 1..=8 {
            assert!(board.get(file, rank).unwrap().is_none());
        }
    }
}

#[test]
fn test_create_board_with_pieces() {
    //! Equality is by kind and color, so the expected values can sit on any square.
    init_tracing();
    let board = Board::with_standard_position();
    let any = sq('a', 1);

    for file in ['a', 'h'] {
        assert_piece(&board, file, 1, Piece::rook(Color::White, any));
        assert_piece(&board, file, 8, Piece::rook(Color::Black, any));
    }
    for file in ['b', 'g'] {
        assert_piece(&board, file, 1, Piece::knight(Color::White, any));
        assert_piece(&board, file, 8, Piece::knight(Color::Black, any));
    }
    for file in ['c', 'f'] {
        assert_piece(&board, file, 1, Piece::bishop(Color::White, any));
        assert_piece(&board, file, 8, Piece::bishop(Color::Black, any));
    }
    for file in FILES {
        assert_piece(&board, file, 2, Piece::pawn(Color::White, any));
        assert_piece(&board, file, 7, Piece::pawn(Color::Black, any));
    }
    assert_piece(&board, 'd', 1, Piece::queen(Color::White, any));
    assert_piece(&board, 'd', 8, Piece::queen(Color::Black, any));
    assert_piece(&board, 'e', 1, Piece::king(Color::White, any));
    assert_piece(&board, 'e', 8, Piece::king(Color::Black, any));

    for file in FILES {
        for rank in 3..=6 {
            assert!(board.is_empty(file, rank).unwrap(), "{file}{rank} should be empty");
        }
    }
}

#[test]
fn test_standard_pieces_know_their_squares() {
    let board = Board::with_standard_position();
    for piece in board.pieces() {
        let at = board.occupant(piece.coordinate).unwrap();
        assert!(at.same_placement(piece));
    }
}

#[test]
fn test_invalid_positions_fail() {
    init_tracing();
    let mut board = Board::new();
    let rook = Piece::rook(Color::White, sq('a', 1));

    assert_eq!(
        board.get('z', 4).unwrap_err(),
        BoardError::InvalidPosition { file: 'z', rank: 4 }
    );
    assert!(matches!(board.get('a', 0), Err(BoardError::InvalidPosition { .. })));
    assert!(matches!(board.get('h', 9), Err(BoardError::InvalidPosition { .. })));
    assert!(matches!(board.set('z', 1, rook), Err(BoardError::InvalidPosition { .. })));
    assert!(matches!(board.set('a', 9, rook), Err(BoardError::InvalidPosition { .. })));
}

#[test]
fn test_error_message_names_square() {
    let err = Board::new().get('z', 9).unwrap_err();
    assert!(err.to_string().contains("z9"), "Message was: {err}");
}

#[test]
fn test_clear_then_reinitialise() {
    init_tracing();
    let mut board = Board::with_standard_position();
    board.clear();
    assert_eq!(board.pieces().count(), 0);

    board.init_standard_position();
    assert_eq!(board.pieces().count(), 32);
    assert_eq!(
        board.pieces().filter(|p| p.kind == PieceKind::Pawn).count(),
        16
    );
}

#[test]
fn test_set_then_move_by_replacing() {
    let mut board = Board::new();
    board.set('d', 2, Piece::pawn(Color::White, sq('a', 1))).unwrap();

    let pawn = *board.get('d', 2).unwrap().unwrap();
    board.place(pawn.moved_to(sq('d', 4)));
    board.remove(sq('d', 2));

    assert!(board.is_empty('d', 2).unwrap());
    assert_eq!(board.get('d', 4).unwrap(), Some(&pawn));
}
