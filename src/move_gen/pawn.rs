//! Pawn move generation
//!
//! Pawns only advance straight ahead: White toward rank 8, Black toward
//! rank 1. There are no diagonal captures, no en passant and no promotion.
//!
//! - **Single push**: offered iff the square ahead is empty
//! - **Double push**: offered iff the pawn is on its home rank (2 for White,
//!   7 for Black) and both squares ahead are empty

use super::tables::tables;
use crate::board::Board;
use crate::types::{Color, Coordinate};

/// Generate pawn moves from a given square
///
/// Returns the single push first, then the double push, so the result can
/// be compared against an exact expected sequence.
///
/// # Examples
///
/// ```
/// use chess_board::{move_gen::pawn, Board, Color, Coordinate};
///
/// let board = Board::new();
/// let moves = pawn::generate_pawn_moves(&board, Coordinate::new('e', 2).unwrap(), Color::White);
/// assert_eq!(
///     moves,
///     vec![Coordinate::new('e', 3).unwrap(), Coordinate::new('e', 4).unwrap()]
/// );
/// ```
pub fn generate_pawn_moves(board: &Board, from: Coordinate, color: Color) -> Vec<Coordinate> {
    let advance = tables().pawn(color)[from.square_index()];
    let mut moves = Vec::with_capacity(2);

    let Some(single) = advance.single.filter(|&square| !board.is_occupied(square)) else {
        // A blocked first square also blocks the double push
        return moves;
    };
    moves.push(single);

    if let Some(double) = advance.double.filter(|&square| !board.is_occupied(square)) {
        moves.push(double);
    }

    moves
}
