//! Knight move generation
//!
//! Knights jump to the up-to-eight L-shaped squares `(±1, ±2)` and
//! `(±2, ±1)`. Intervening squares do not matter; only the landing square
//! must be empty.

use std::collections::HashSet;

use super::tables::tables;
use crate::board::Board;
use crate::types::Coordinate;

/// Generate knight moves from a given square
///
/// Filters the precomputed knight table down to empty squares.
///
/// # Arguments
///
/// * `board` - Board consulted for occupancy
/// * `from` - Square the knight stands on
/// * `moves` - Output set the empty landing squares are added to
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use chess_board::{move_gen::knight, Board, Coordinate};
///
/// let board = Board::with_standard_position();
/// let mut moves = HashSet::new();
/// knight::generate_knight_moves(&board, Coordinate::new('b', 1).unwrap(), &mut moves);
/// // d2 holds a pawn, leaving a3 and c3
/// assert_eq!(moves.len(), 2);
/// ```
pub fn generate_knight_moves(board: &Board, from: Coordinate, moves: &mut HashSet<Coordinate>) {
    moves.extend(
        tables().knight[from.square_index()]
            .iter()
            .copied()
            .filter(|&square| !board.is_occupied(square)),
    );
}
