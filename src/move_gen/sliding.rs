//! Sliding piece move generation
//!
//! Common walk for bishops, rooks and queens. Each precomputed ray is
//! followed outward one square at a time:
//! 1. An empty square is a destination and the walk continues
//! 2. An occupied square ends the ray and is not a destination

use std::collections::HashSet;

use super::tables::Ray;
use crate::board::Board;
use crate::types::Coordinate;

/// Walk every ray, collecting empty squares up to the first blocker
pub fn generate_sliding_moves(board: &Board, rays: &[Ray], moves: &mut HashSet<Coordinate>) {
    for ray in rays {
        for &square in ray {
            if board.is_occupied(square) {
                break;
            }
            moves.insert(square);
        }
    }
}
