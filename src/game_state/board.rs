//! Array-of-squares board model.
//!
//! `Board` owns an 8x8 grid of [`Square`]s and a fixed-capacity piece table.
//! Squares refer to pieces by [`PieceId`] so an undo can put back the exact
//! piece identity it removed. Cloning a board is a plain value copy and is
//! how move simulation gets its scratch space.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{
    col_of, row_of, square_index, Piece, PieceId, SquareIndex,
};
use crate::utils::algebraic::square_name;

/// Upper bound on piece identities a board can hand out between resets.
pub const PIECE_TABLE_CAPACITY: usize = 80;

/// One board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub row: u8,
    pub col: u8,
    pub occupant: Option<PieceId>,
    /// Presentation-only flag; rules never read it.
    pub highlighted: bool,
}

impl Square {
    #[inline]
    pub fn index(&self) -> SquareIndex {
        square_index(self.row, self.col)
    }

    pub fn name(&self) -> String {
        square_name(self.row, self.col)
    }
}

/// Arena of piece identities. A `None` entry is a tombstone left behind by
/// promotion; ids are never reused until the table is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PieceTable {
    entries: [Option<Piece>; PIECE_TABLE_CAPACITY],
    len: usize,
}

impl PieceTable {
    const fn new() -> Self {
        Self {
            entries: [None; PIECE_TABLE_CAPACITY],
            len: 0,
        }
    }

    fn allocate(&mut self, piece: Piece) -> ChessResult<PieceId> {
        if self.len >= PIECE_TABLE_CAPACITY {
            return Err(ChessError::PieceTableFull);
        }
        let id = PieceId(self.len as u8);
        self.entries[self.len] = Some(piece);
        self.len += 1;
        Ok(id)
    }

    #[inline]
    fn get(&self, id: PieceId) -> Option<Piece> {
        self.entries.get(id.0 as usize).copied().flatten()
    }

    fn tombstone(&mut self, id: PieceId) {
        if let Some(entry) = self.entries.get_mut(id.0 as usize) {
            *entry = None;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Square; 64],
    pieces: PieceTable,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        let mut squares = [Square {
            row: 0,
            col: 0,
            occupant: None,
            highlighted: false,
        }; 64];
        for (index, square) in squares.iter_mut().enumerate() {
            square.row = row_of(index as SquareIndex);
            square.col = col_of(index as SquareIndex);
        }
        Self {
            squares,
            pieces: PieceTable::new(),
        }
    }

    /// Removes every piece and forgets all piece identities.
    pub fn clear(&mut self) {
        for square in &mut self.squares {
            square.occupant = None;
        }
        self.pieces = PieceTable::new();
    }

    #[inline]
    pub fn square(&self, square: SquareIndex) -> &Square {
        &self.squares[square as usize]
    }

    #[inline]
    pub fn squares(&self) -> &[Square; 64] {
        &self.squares
    }

    #[inline]
    pub fn piece_id_at(&self, square: SquareIndex) -> Option<PieceId> {
        self.squares[square as usize].occupant
    }

    #[inline]
    pub fn piece_at(&self, square: SquareIndex) -> Option<Piece> {
        self.piece_id_at(square).and_then(|id| self.pieces.get(id))
    }

    #[inline]
    pub fn is_empty(&self, square: SquareIndex) -> bool {
        self.squares[square as usize].occupant.is_none()
    }

    /// Resolves an id; tombstoned ids resolve to `None`.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<Piece> {
        self.pieces.get(id)
    }

    /// Points `square` at `occupant` without touching the piece table.
    #[inline]
    pub fn set_occupant(&mut self, square: SquareIndex, occupant: Option<PieceId>) {
        self.squares[square as usize].occupant = occupant;
    }

    /// Creates a new piece identity and stands it on `square`.
    pub fn place_new(&mut self, square: SquareIndex, piece: Piece) -> ChessResult<PieceId> {
        let id = self.pieces.allocate(piece)?;
        self.set_occupant(square, Some(id));
        Ok(id)
    }

    /// Retires a piece identity (promotion). Any square still naming it
    /// reads as empty afterwards.
    pub fn retire(&mut self, id: PieceId) {
        self.pieces.tombstone(id);
    }

    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|square| square.occupant.is_some())
            .count()
    }

    pub fn set_highlighted(&mut self, square: SquareIndex, highlighted: bool) {
        self.squares[square as usize].highlighted = highlighted;
    }

    pub fn clear_highlights(&mut self) {
        for square in &mut self.squares {
            square.highlighted = false;
        }
    }
}
