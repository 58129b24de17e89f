//! Chess board model with per-piece move enumeration
//!
//! A [`Board`] owns the pieces placed on it. Move generation takes the board
//! as an explicit argument and reports candidate destination squares from
//! occupancy alone: no captures, check, castling, en passant or promotion.
//!
//! ```
//! use chess_board::{Board, Coordinate, Destinations};
//!
//! let board = Board::with_standard_position();
//! let e2 = Coordinate::new('e', 2).unwrap();
//! let moves = board.valid_moves_at(e2).unwrap();
//! assert_eq!(
//!     moves,
//!     Destinations::Ordered(vec![
//!         Coordinate::new('e', 3).unwrap(),
//!         Coordinate::new('e', 4).unwrap(),
//!     ])
//! );
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod piece;
pub mod render;
pub mod types;

pub use board::Board;
pub use error::{BoardError, BoardResult};
pub use move_gen::{valid_moves, Destinations};
pub use piece::{Piece, PieceId};
pub use render::{GlyphStyle, RenderSettings};
pub use types::{Color, Coordinate, File, PieceKind, Rank};
