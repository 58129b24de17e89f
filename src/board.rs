//! Board representation
//!
//! An 8x8 grid keyed by [`Coordinate`]. The board owns every placed piece in
//! an arena registry; grid cells hold [`PieceId`] handles into that registry.
//! Pieces carry no reference back to the board. Move generation receives the
//! board as an explicit argument instead.
//!
//! Placement never validates occupancy: writing onto an occupied square
//! silently replaces the occupant, and the replaced piece stays in the
//! registry until [`Board::clear`]. Slots emptied by [`Board::remove`] are
//! reused by later placements.

use tracing::debug;

use crate::constants::{BACK_RANK, BLACK_PAWN_HOME_RANK, NUM_SQUARES, WHITE_PAWN_HOME_RANK};
use crate::error::BoardResult;
use crate::move_gen::{self, Destinations};
use crate::piece::{Piece, PieceId};
use crate::types::{Color, Coordinate, File, Rank};

#[derive(Debug, Clone)]
pub struct Board {
    cells: [Option<PieceId>; NUM_SQUARES],
    registry: Vec<Option<Piece>>,
    free: Vec<PieceId>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [None; NUM_SQUARES],
            registry: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Create a board holding the 32 pieces of the standard starting position
    pub fn with_standard_position() -> Self {
        let mut board = Self::new();
        board.init_standard_position();
        board
    }

    /// Occupant at a file letter and 1-based rank number
    ///
    /// Returns `Ok(None)` for an empty square.
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidPosition`] if the file is not `a..=h` or the rank
    /// is not `1..=8`.
    pub fn get(&self, file: char, rank: u8) -> BoardResult<Option<&Piece>> {
        let coordinate = Coordinate::new(file, rank)?;
        Ok(self.occupant(coordinate))
    }

    /// Write a piece at an explicit file and rank
    ///
    /// The stored piece is re-stamped with that square, whatever coordinate
    /// it carried before.
    pub fn set(&mut self, file: char, rank: u8, piece: Piece) -> BoardResult<PieceId> {
        let coordinate = Coordinate::new(file, rank)?;
        debug!("[BOARD] Set {:?} {:?} at {}", piece.color, piece.kind, coordinate);
        Ok(self.place(piece.moved_to(coordinate)))
    }

    /// Whether the square at a file letter and rank number is empty
    pub fn is_empty(&self, file: char, rank: u8) -> BoardResult<bool> {
        Ok(self.get(file, rank)?.is_none())
    }

    /// Write a piece into the cell matching its own coordinate
    ///
    /// Overwrites any occupant. A replaced occupant keeps its registry slot
    /// (and its handle still resolves) until [`Board::clear`], so repeated
    /// overwrites grow the registry. Moving a piece with `place` followed by
    /// [`Board::remove`] on the origin does not, since removal frees the slot.
    ///
    /// Returns the handle of the newly registered piece.
    pub fn place(&mut self, piece: Piece) -> PieceId {
        let index = piece.coordinate.square_index();
        if let Some(previous) = self.cells[index].and_then(|prev| self.lookup(prev)) {
            debug!(
                "[BOARD] {:?} {:?} at {} replaced by {:?} {:?}",
                previous.color, previous.kind, piece.coordinate, piece.color, piece.kind
            );
        }
        let id = match self.free.pop() {
            Some(id) => {
                self.registry[id.0] = Some(piece);
                id
            }
            None => {
                self.registry.push(Some(piece));
                PieceId(self.registry.len() - 1)
            }
        };
        self.cells[index] = Some(id);
        id
    }

    /// Empty a single square, returning whatever stood there
    ///
    /// The removed piece's handle stops resolving and may be handed out again.
    pub fn remove(&mut self, coordinate: Coordinate) -> Option<Piece> {
        let id = self.cells[coordinate.square_index()].take()?;
        let removed = self.registry.get_mut(id.0).and_then(Option::take);
        self.free.push(id);
        debug!("[BOARD] Cleared {} (was {:?})", coordinate, removed.map(|p| p.kind));
        removed
    }

    /// Empty every square and drop all registered pieces
    ///
    /// Handles returned by earlier placements are invalid afterwards.
    pub fn clear(&mut self) {
        debug!("[BOARD] Clearing board ({} registered pieces)", self.registry.len());
        self.cells = [None; NUM_SQUARES];
        self.registry.clear();
        self.free.clear();
    }

    /// Place the 32 pieces of the standard starting position
    ///
    /// Squares outside ranks 1, 2, 7 and 8 are left as they are.
    pub fn init_standard_position(&mut self) {
        let setups = [
            (Color::White, 1, WHITE_PAWN_HOME_RANK),
            (Color::Black, 8, BLACK_PAWN_HOME_RANK),
        ];
        for (color, back_rank, pawn_rank) in setups {
            let (Some(back_rank), Some(pawn_rank)) =
                (Rank::from_number(back_rank), Rank::from_number(pawn_rank))
            else {
                continue;
            };
            for (index, kind) in (0u8..).zip(BACK_RANK) {
                let Some(file) = File::from_index(index) else {
                    continue;
                };
                self.place(Piece::new(kind, color, Coordinate { file, rank: back_rank }));
                self.place(Piece::pawn(color, Coordinate { file, rank: pawn_rank }));
            }
        }
        debug!("[BOARD] Standard position set up ({} pieces on board)", self.pieces().count());
    }

    /// Occupant of an already-validated square
    pub fn occupant(&self, coordinate: Coordinate) -> Option<&Piece> {
        self.cells[coordinate.square_index()].and_then(|id| self.lookup(id))
    }

    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.cells[coordinate.square_index()].is_some()
    }

    /// Look up a registered piece by handle
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.lookup(id)
    }

    fn lookup(&self, id: PieceId) -> Option<&Piece> {
        self.registry.get(id.0).and_then(Option::as_ref)
    }

    /// Pieces currently standing on the board, ordered a1, b1, ... h8
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells
            .iter()
            .filter_map(move |cell| cell.and_then(|id| self.lookup(id)))
    }

    /// Destinations for whatever piece stands on `coordinate`
    pub fn valid_moves_at(&self, coordinate: Coordinate) -> Option<Destinations> {
        self.occupant(coordinate).map(|piece| piece.valid_moves(self))
    }

    /// Destinations for every piece of one color, in board order
    pub fn all_valid_moves(&self, color: Color) -> Vec<(Piece, Destinations)> {
        self.pieces()
            .filter(|piece| piece.color == color)
            .map(|piece| {
                let moves = move_gen::valid_moves(piece.kind, piece.color, piece.coordinate, self);
                (*piece, moves)
            })
            .collect()
    }
}
