//! Canonical chess-rule constants.
//!
//! Starting placement, board geometry used by castling and pawn rules, and
//! the piece values used by material evaluation.

use crate::game_state::chess_types::PieceKind;

/// Standard opening placement (FEN placement field only).
pub const STARTING_POSITION_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Length of a serialized board: two characters for each of the 64 squares.
pub const STATE_STRING_LEN: usize = 128;

/// Column the kings start on.
pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KINGSIDE_KING_DEST_COL: u8 = 6;
pub const QUEENSIDE_KING_DEST_COL: u8 = 2;
pub const KINGSIDE_ROOK_DEST_COL: u8 = 5;
pub const QUEENSIDE_ROOK_DEST_COL: u8 = 3;

/// Material value of a piece for White; Black pieces count negatively.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 200,
        PieceKind::Bishop => 230,
        PieceKind::Rook => 400,
        PieceKind::Queen => 900,
        PieceKind::King => 2000,
    }
}
