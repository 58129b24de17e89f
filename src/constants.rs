//! Board constants
//!
//! Dimensions, step offsets and the standard starting layout. Offsets are
//! `(file_delta, rank_delta)` pairs, rank increasing toward Black's side.

use crate::types::PieceKind;

pub const BOARD_SIZE: u8 = 8;
pub const NUM_SQUARES: usize = 64;

pub const FILE_CHARS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Ranks (1-based) on which pawns may advance two squares
pub const WHITE_PAWN_HOME_RANK: u8 = 2;
pub const BLACK_PAWN_HOME_RANK: u8 = 7;

pub const NORTH: (i8, i8) = (0, 1);
pub const SOUTH: (i8, i8) = (0, -1);
pub const EAST: (i8, i8) = (1, 0);
pub const WEST: (i8, i8) = (-1, 0);
pub const NORTH_EAST: (i8, i8) = (1, 1);
pub const SOUTH_EAST: (i8, i8) = (1, -1);
pub const SOUTH_WEST: (i8, i8) = (-1, -1);
pub const NORTH_WEST: (i8, i8) = (-1, 1);

pub const ROOK_DIRS: [(i8, i8); 4] = [NORTH, SOUTH, EAST, WEST];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    NORTH, NORTH_EAST, EAST, SOUTH_EAST, SOUTH, SOUTH_WEST, WEST, NORTH_WEST,
];

/// Back rank from file a to file h, shared by both colors
#[rustfmt::skip]
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen,
    PieceKind::King, PieceKind::Bishop, PieceKind::Knight, PieceKind::Rook,
];

/// Unicode glyphs indexed by `PieceKind as usize`
pub const WHITE_GLYPHS: [char; 6] = [
    '\u{2659}', '\u{2658}', '\u{2657}', '\u{2656}', '\u{2655}', '\u{2654}',
];
pub const BLACK_GLYPHS: [char; 6] = [
    '\u{265F}', '\u{265E}', '\u{265D}', '\u{265C}', '\u{265B}', '\u{265A}',
];

/// Letters indexed by `PieceKind as usize`
pub const PIECE_LETTERS: [char; 6] = ['P', 'N', 'B', 'R', 'Q', 'K'];

pub const EMPTY_CELL: char = '.';
