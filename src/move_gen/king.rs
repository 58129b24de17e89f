//! King move generation
//!
//! Kings step one square in any of the eight directions. Castling and
//! king safety are not considered.

use std::collections::HashSet;

use super::tables::tables;
use crate::board::Board;
use crate::types::Coordinate;

/// Generate king moves from a given square
///
/// # Arguments
///
/// * `board` - Board consulted for occupancy
/// * `from` - Square the king stands on
/// * `moves` - Output set the empty adjacent squares are added to
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use chess_board::{move_gen::king, Board, Coordinate};
///
/// let board = Board::new();
/// let mut moves = HashSet::new();
/// king::generate_king_moves(&board, Coordinate::new('a', 1).unwrap(), &mut moves);
/// assert_eq!(moves.len(), 3);
/// ```
pub fn generate_king_moves(board: &Board, from: Coordinate, moves: &mut HashSet<Coordinate>) {
    for &square in &tables().king[from.square_index()] {
        if !board.is_occupied(square) {
            moves.insert(square);
        }
    }
}
