use crate::game_state::chess_types::{Board, SquareIndex};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Rook rays first, then bishop rays.
pub fn generate_queen_moves(board: &Board, from: SquareIndex, out: &mut Vec<Move>) {
    generate_rook_moves(board, from, out);
    generate_bishop_moves(board, from, out);
}
