//! Bishop move generation
//!
//! Bishops slide diagonally until the board edge or the first occupied square.

use std::collections::HashSet;

use super::sliding;
use super::tables::tables;
use crate::board::Board;
use crate::types::Coordinate;

/// Generate bishop moves from a given square
///
/// Delegates to the common sliding walk over the four diagonal rays.
///
/// # Arguments
///
/// * `board` - Board consulted for occupancy
/// * `from` - Square the bishop stands on
/// * `moves` - Output set the empty squares are added to
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use chess_board::{move_gen::bishop, Board, Coordinate};
///
/// let board = Board::new();
/// let mut moves = HashSet::new();
/// bishop::generate_bishop_moves(&board, Coordinate::new('d', 4).unwrap(), &mut moves);
/// assert_eq!(moves.len(), 13);
/// ```
pub fn generate_bishop_moves(board: &Board, from: Coordinate, moves: &mut HashSet<Coordinate>) {
    sliding::generate_sliding_moves(board, &tables().bishop[from.square_index()], moves);
}
