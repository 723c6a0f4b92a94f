//! Pawn move generation.
//!
//! Single and double pushes, diagonal captures, and en passant driven by the
//! last-move record. Promotion is not a separate move here; committing a
//! pawn move onto the far row substitutes a queen.

use crate::game_state::chess_types::{
    col_of, offset_square, row_of, square_index, Board, Color, MoveContext, Piece, PieceKind,
    SquareIndex,
};
use crate::moves::directions::PAWN_CAPTURE_COLS;
use crate::moves::move_descriptions::Move;

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

pub fn generate_pawn_moves(
    board: &Board,
    context: &MoveContext,
    from: SquareIndex,
    color: Color,
    out: &mut Vec<Move>,
) {
    let direction = color.pawn_direction();

    if let Some(one_step) = offset_square(from, direction, 0) {
        if board.is_empty(one_step) {
            out.push(Move::new(from, one_step));

            if row_of(from) == pawn_start_row(color) {
                if let Some(two_step) = offset_square(one_step, direction, 0) {
                    if board.is_empty(two_step) {
                        out.push(Move::new(from, two_step));
                    }
                }
            }
        }
    }

    for d_col in PAWN_CAPTURE_COLS {
        let Some(to) = offset_square(from, direction, d_col) else {
            continue;
        };
        if board.piece_at(to).is_some_and(|piece| piece.color != color) {
            out.push(Move::new(from, to));
        }
    }

    if let Some(target) = en_passant_target(board, context, from, color) {
        out.push(Move::new(from, target));
    }
}

/// Landing square of an en passant capture by the pawn on `from`, when the
/// opponent's last move was a double push that stopped beside it.
///
/// The victim square must still hold an enemy pawn and the landing square
/// must be empty; a last-move record that no longer matches the board
/// offers nothing.
pub fn en_passant_target(
    board: &Board,
    context: &MoveContext,
    from: SquareIndex,
    color: Color,
) -> Option<SquareIndex> {
    let victim = context.en_passant_victim(color)?;
    if row_of(victim) != row_of(from) || col_of(victim).abs_diff(col_of(from)) != 1 {
        return None;
    }
    if board.piece_at(victim) != Some(Piece::new(color.opposite(), PieceKind::Pawn)) {
        return None;
    }
    let capture_row = context.en_passant_row?;
    if i16::from(capture_row) != i16::from(row_of(from)) + i16::from(color.pawn_direction()) {
        return None;
    }
    let target = square_index(capture_row, col_of(victim));
    board.is_empty(target).then_some(target)
}
