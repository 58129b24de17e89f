//! Move table initialization
//!
//! Precomputes, for every square, the geometry each piece kind could reach on
//! an empty board. Generation then only filters these tables by occupancy.
//! Tables are built once per process on first use.
//!
//! Sliding rays are ordered outward from the origin so a walk can stop at the
//! first blocker.

use std::sync::OnceLock;

use crate::constants::{
    BLACK_PAWN_HOME_RANK, BOARD_SIZE, KING_OFFSETS, KNIGHT_OFFSETS, NUM_SQUARES, ROOK_DIRS,
    WHITE_PAWN_HOME_RANK,
};
use crate::types::{Color, Coordinate};

/// Squares along one direction, nearest first
pub type Ray = Vec<Coordinate>;

/// Forward squares a pawn could advance to on an empty board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PawnAdvance {
    pub single: Option<Coordinate>,
    /// Only set on the pawn's home rank
    pub double: Option<Coordinate>,
}

#[derive(Debug, Clone)]
pub struct MoveTables {
    pub rook: Vec<Vec<Ray>>,
    pub bishop: Vec<Vec<Ray>>,
    pub knight: Vec<Vec<Coordinate>>,
    pub king: Vec<Vec<Coordinate>>,
    pub white_pawn: Vec<PawnAdvance>,
    pub black_pawn: Vec<PawnAdvance>,
}

static TABLES: OnceLock<MoveTables> = OnceLock::new();

/// Shared move tables, built on first call
pub fn tables() -> &'static MoveTables {
    TABLES.get_or_init(MoveTables::build)
}

impl MoveTables {
    fn build() -> Self {
        let mut tables = MoveTables {
            rook: Vec::with_capacity(NUM_SQUARES),
            bishop: Vec::with_capacity(NUM_SQUARES),
            knight: Vec::with_capacity(NUM_SQUARES),
            king: Vec::with_capacity(NUM_SQUARES),
            white_pawn: Vec::with_capacity(NUM_SQUARES),
            black_pawn: Vec::with_capacity(NUM_SQUARES),
        };

        // Coordinate::all() runs in square-index order, so position == index
        for from in Coordinate::all() {
            tables.rook.push(init_rook_rays_from(from));
            tables.bishop.push(init_bishop_rays_from(from));
            tables.knight.push(init_steps_from(from, &KNIGHT_OFFSETS));
            tables.king.push(init_steps_from(from, &KING_OFFSETS));
            tables.white_pawn.push(init_pawn_advance_from(from, Color::White));
            tables.black_pawn.push(init_pawn_advance_from(from, Color::Black));
        }

        tables
    }

    pub fn pawn(&self, color: Color) -> &[PawnAdvance] {
        match color {
            Color::White => &self.white_pawn,
            Color::Black => &self.black_pawn,
        }
    }
}

/// Orthogonal rays: up the file, down the file, right along the rank, left along the rank
fn init_rook_rays_from(from: Coordinate) -> Vec<Ray> {
    ROOK_DIRS
        .iter()
        .map(|&(file_delta, rank_delta)| {
            let mut ray = Vec::new();
            let mut current = from;
            while let Some(next) = current.offset(file_delta, rank_delta) {
                ray.push(next);
                current = next;
            }
            ray
        })
        .collect()
}

/// Diagonal rays
///
/// Each diagonal pairs the file indices and rank indices heading away from
/// the origin; zipping the two sequences truncates the ray at whichever edge
/// comes first.
fn init_bishop_rays_from(from: Coordinate) -> Vec<Ray> {
    let file = from.file.index();
    let rank = from.rank.index();

    let files_up: Vec<u8> = (file + 1..BOARD_SIZE).collect();
    let files_down: Vec<u8> = (0..file).rev().collect();
    let ranks_up: Vec<u8> = (rank + 1..BOARD_SIZE).collect();
    let ranks_down: Vec<u8> = (0..rank).rev().collect();

    [
        (&files_up, &ranks_up),
        (&files_up, &ranks_down),
        (&files_down, &ranks_down),
        (&files_down, &ranks_up),
    ]
    .into_iter()
    .map(|(files, ranks)| {
        files
            .iter()
            .zip(ranks.iter())
            .filter_map(|(&f, &r)| Coordinate::from_indices(f, r))
            .collect()
    })
    .collect()
}

/// Fixed-offset destinations (knight, king) that stay on the board
fn init_steps_from(from: Coordinate, offsets: &[(i8, i8)]) -> Vec<Coordinate> {
    offsets
        .iter()
        .filter_map(|&(file_delta, rank_delta)| from.offset(file_delta, rank_delta))
        .collect()
}

fn init_pawn_advance_from(from: Coordinate, color: Color) -> PawnAdvance {
    let forward = color.forward();
    let home_rank = match color {
        Color::White => WHITE_PAWN_HOME_RANK,
        Color::Black => BLACK_PAWN_HOME_RANK,
    };

    let single = from.offset(0, forward);
    let double = if from.rank.to_number() == home_rank {
        from.offset(0, 2 * forward)
    } else {
        None
    };

    PawnAdvance { single, double }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: char, rank: u8) -> Coordinate {
        Coordinate::new(file, rank).unwrap()
    }

    #[test]
    fn test_table_sizes() {
        let tables = tables();
        assert_eq!(tables.rook.len(), NUM_SQUARES);
        assert_eq!(tables.bishop.len(), NUM_SQUARES);
        assert_eq!(tables.knight.len(), NUM_SQUARES);
        assert_eq!(tables.king.len(), NUM_SQUARES);
        assert_eq!(tables.white_pawn.len(), NUM_SQUARES);
        assert_eq!(tables.black_pawn.len(), NUM_SQUARES);
    }

    #[test]
    fn test_rook_rays_every_square_has_fourteen() {
        for from in Coordinate::all() {
            let total: usize = tables().rook[from.square_index()].iter().map(Vec::len).sum();
            assert_eq!(total, 14, "Rook on {from} should see 14 squares on an empty board");
        }
    }

    #[test]
    fn test_bishop_rays_truncate_at_nearest_edge() {
        let rays = &tables().bishop[sq('b', 7).square_index()];
        assert_eq!(rays[0], vec![sq('c', 8)]);
        assert_eq!(
            rays[1],
            vec![sq('c', 6), sq('d', 5), sq('e', 4), sq('f', 3), sq('g', 2), sq('h', 1)]
        );
        assert_eq!(rays[2], vec![sq('a', 6)]);
        assert_eq!(rays[3], vec![sq('a', 8)]);
    }

    #[test]
    fn test_rays_ordered_outward() {
        let rays = &tables().rook[sq('a', 1).square_index()];
        assert_eq!(rays[0].first(), Some(&sq('a', 2)));
        assert_eq!(rays[0].last(), Some(&sq('a', 8)));
        assert!(rays[1].is_empty());
        assert!(rays[3].is_empty());
    }

    #[test]
    fn test_corner_step_tables() {
        let a1 = sq('a', 1).square_index();
        assert_eq!(tables().knight[a1].len(), 2);
        assert_eq!(tables().king[a1].len(), 3);
        assert_eq!(tables().knight[sq('d', 4).square_index()].len(), 8);
    }

    #[test]
    fn test_pawn_advance_tables() {
        let white_e2 = tables().pawn(Color::White)[sq('e', 2).square_index()];
        assert_eq!(white_e2.single, Some(sq('e', 3)));
        assert_eq!(white_e2.double, Some(sq('e', 4)));

        let white_e3 = tables().pawn(Color::White)[sq('e', 3).square_index()];
        assert_eq!(white_e3.double, None);

        let black_e7 = tables().pawn(Color::Black)[sq('e', 7).square_index()];
        assert_eq!(black_e7.single, Some(sq('e', 6)));
        assert_eq!(black_e7.double, Some(sq('e', 5)));

        let white_e8 = tables().pawn(Color::White)[sq('e', 8).square_index()];
        assert_eq!(white_e8, PawnAdvance::default());
    }
}
