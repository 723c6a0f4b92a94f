use crate::game_state::chess_types::{PieceId, SquareIndex};

/// Single undo record for `apply_move` / `undo_move`.
///
/// Not `Clone`. `undo_move` consumes it, so each record reverses its apply
/// at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub from: SquareIndex,
    pub to: SquareIndex,
    pub moved_piece: PieceId,
    pub captured_piece: Option<PieceId>,
}
