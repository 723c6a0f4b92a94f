use crate::game_state::chess_types::{offset_square, Board, SquareIndex};
use crate::moves::move_descriptions::Move;

/// Pushes `from -> to` unless `to` holds a piece of the mover's color.
#[inline]
pub fn push_if_not_own(board: &Board, from: SquareIndex, to: SquareIndex, out: &mut Vec<Move>) {
    let mover = board.piece_at(from).map(|piece| piece.color);
    let target = board.piece_at(to).map(|piece| piece.color);
    if target.is_none() || target != mover {
        out.push(Move::new(from, to));
    }
}

/// Pushes the step to `from + (d_row, d_col)` if it lands on the board.
#[inline]
pub fn push_step(board: &Board, from: SquareIndex, d_row: i8, d_col: i8, out: &mut Vec<Move>) {
    if let Some(to) = offset_square(from, d_row, d_col) {
        push_if_not_own(board, from, to, out);
    }
}

/// Walks each ray until the board edge or the first occupied square, which
/// is included when it holds an enemy piece.
pub fn push_rays(board: &Board, from: SquareIndex, directions: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(d_row, d_col) in directions {
        let mut current = offset_square(from, d_row, d_col);
        while let Some(to) = current {
            push_if_not_own(board, from, to, out);
            if !board.is_empty(to) {
                break;
            }
            current = offset_square(to, d_row, d_col);
        }
    }
}
