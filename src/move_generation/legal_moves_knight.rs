use crate::game_state::chess_types::{Board, SquareIndex};
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::directions::KNIGHT_OFFSETS;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(board: &Board, from: SquareIndex, out: &mut Vec<Move>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        push_step(board, from, d_row, d_col, out);
    }
}
