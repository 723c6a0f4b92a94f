//! Running memory of the last committed move.
//!
//! Move generation reads this record for en passant and castling rights.
//! Only a committed move replaces it; legality probes and search read it
//! without writing.

use crate::game_state::chess_types::{Color, PieceId, PieceKind, SquareIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub from: SquareIndex,
    pub to: SquareIndex,
    pub kind: PieceKind,
    pub color: Color,
}

/// Whether each king and each original rook has ever left its square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastlingHistory {
    pub white_king_moved: bool,
    pub black_king_moved: bool,
    pub white_king_rook_moved: bool,
    pub white_queen_rook_moved: bool,
    pub black_king_rook_moved: bool,
    pub black_queen_rook_moved: bool,
}

impl CastlingHistory {
    /// History with every king and rook marked as moved.
    pub const fn all_moved() -> Self {
        Self {
            white_king_moved: true,
            black_king_moved: true,
            white_king_rook_moved: true,
            white_queen_rook_moved: true,
            black_king_rook_moved: true,
            black_queen_rook_moved: true,
        }
    }

    #[inline]
    pub fn king_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_moved,
            Color::Black => self.black_king_moved,
        }
    }

    #[inline]
    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => self.white_king_rook_moved,
            (Color::White, CastleSide::Queenside) => self.white_queen_rook_moved,
            (Color::Black, CastleSide::Kingside) => self.black_king_rook_moved,
            (Color::Black, CastleSide::Queenside) => self.black_queen_rook_moved,
        }
    }

    /// True while neither the king nor the rook on `side` has moved.
    #[inline]
    pub fn may_castle(&self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    pub fn mark_king_moved(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_moved = true,
            Color::Black => self.black_king_moved = true,
        }
    }

    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => self.white_king_rook_moved = true,
            (Color::White, CastleSide::Queenside) => self.white_queen_rook_moved = true,
            (Color::Black, CastleSide::Kingside) => self.black_king_rook_moved = true,
            (Color::Black, CastleSide::Queenside) => self.black_queen_rook_moved = true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveContext {
    pub last_move: Option<LastMove>,
    pub pawn_double_move: bool,
    /// Row skipped by the last double pawn push; `None` otherwise.
    pub en_passant_row: Option<u8>,
    pub is_castling: bool,
    pub castling: CastlingHistory,
    pub moved_piece: Option<PieceId>,
    pub captured_piece: Option<PieceId>,
}

impl MoveContext {
    /// Square of the pawn that may be captured en passant by `capturer`, if any.
    pub fn en_passant_victim(&self, capturer: Color) -> Option<SquareIndex> {
        if !self.pawn_double_move || self.en_passant_row.is_none() {
            return None;
        }
        let last = self.last_move?;
        if last.kind != PieceKind::Pawn || last.color == capturer {
            return None;
        }
        Some(last.to)
    }
}
