//! Rook move generation
//!
//! Rooks slide along their file and rank until the board edge or the first
//! occupied square.

use std::collections::HashSet;

use super::sliding;
use super::tables::tables;
use crate::board::Board;
use crate::types::Coordinate;

/// Generate rook moves from a given square
///
/// Delegates to the common sliding walk over the four orthogonal rays.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use chess_board::{move_gen::rook, Board, Coordinate};
///
/// let board = Board::new();
/// let mut moves = HashSet::new();
/// rook::generate_rook_moves(&board, Coordinate::new('d', 4).unwrap(), &mut moves);
/// assert_eq!(moves.len(), 14);
/// ```
pub fn generate_rook_moves(board: &Board, from: Coordinate, moves: &mut HashSet<Coordinate>) {
    sliding::generate_sliding_moves(board, &tables().rook[from.square_index()], moves);
}
