//! King move generation, including castling candidates.
//!
//! Castling is offered when the king stands on its home square, neither it
//! nor the rook on that side has moved, the rook is still in its corner, and
//! every square between them is empty. Whether the king passes through an
//! attacked square is not checked.

use crate::game_state::chess_rules::{
    KINGSIDE_KING_DEST_COL, KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_KING_DEST_COL,
    QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::{
    square_index, Board, Color, MoveContext, Piece, PieceKind, SquareIndex,
};
use crate::game_state::move_context::CastleSide;
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::directions::KING_OFFSETS;
use crate::moves::move_descriptions::Move;

pub fn generate_king_moves(
    board: &Board,
    context: &MoveContext,
    from: SquareIndex,
    color: Color,
    out: &mut Vec<Move>,
) {
    for (d_row, d_col) in KING_OFFSETS {
        push_step(board, from, d_row, d_col, out);
    }

    generate_castling_moves(board, context, from, color, out);
}

fn generate_castling_moves(
    board: &Board,
    context: &MoveContext,
    king_from: SquareIndex,
    color: Color,
    out: &mut Vec<Move>,
) {
    let row = color.home_row();
    if king_from != square_index(row, KING_START_COL) {
        return;
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if !context.castling.may_castle(color, side) {
            continue;
        }

        let (rook_col, king_dest_col) = castle_columns(side);
        let rook_square = square_index(row, rook_col);
        if board.piece_at(rook_square) != Some(Piece::new(color, PieceKind::Rook)) {
            continue;
        }

        let (low, high) = if rook_col < KING_START_COL {
            (rook_col + 1, KING_START_COL)
        } else {
            (KING_START_COL + 1, rook_col)
        };
        if (low..high).all(|col| board.is_empty(square_index(row, col))) {
            out.push(Move::new(king_from, square_index(row, king_dest_col)));
        }
    }
}

/// `(rook start column, king destination column)` for a castle side.
#[inline]
pub const fn castle_columns(side: CastleSide) -> (u8, u8) {
    match side {
        CastleSide::Kingside => (KINGSIDE_ROOK_COL, KINGSIDE_KING_DEST_COL),
        CastleSide::Queenside => (QUEENSIDE_ROOK_COL, QUEENSIDE_KING_DEST_COL),
    }
}
