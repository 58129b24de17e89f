//! Queen move generation
//!
//! The queen's destinations are exactly the union of the rook's orthogonal
//! rays and the bishop's diagonal rays from the same square.

use std::collections::HashSet;

use super::bishop;
use super::rook;
use crate::board::Board;
use crate::types::Coordinate;

/// Generate queen moves from a given square
///
/// Runs the bishop and rook walks into the same output set.
///
/// # Arguments
///
/// * `board` - Board consulted for occupancy
/// * `from` - Square the queen stands on
/// * `moves` - Output set the empty squares are added to
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use chess_board::{move_gen::queen, Board, Coordinate};
///
/// let board = Board::new();
/// let mut moves = HashSet::new();
/// queen::generate_queen_moves(&board, Coordinate::new('d', 4).unwrap(), &mut moves);
/// assert_eq!(moves.len(), 27);
/// ```
pub fn generate_queen_moves(board: &Board, from: Coordinate, moves: &mut HashSet<Coordinate>) {
    bishop::generate_bishop_moves(board, from, moves);
    rook::generate_rook_moves(board, from, moves);
}
