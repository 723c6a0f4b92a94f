//! Rook move generation: rank and file rays.

use crate::game_state::chess_types::{Board, SquareIndex};
use crate::move_generation::legal_move_shared::push_rays;
use crate::moves::directions::ROOK_DIRECTIONS;
use crate::moves::move_descriptions::Move;

pub fn generate_rook_moves(board: &Board, from: SquareIndex, out: &mut Vec<Move>) {
    push_rays(board, from, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::Board;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::placement_parser::load_placement;

    #[test]
    fn open_rook_sees_fourteen_squares() {
        let mut board = Board::empty();
        load_placement(&mut board, "8/8/8/8/3R4/8/8/8").expect("should parse");
        let mut out = Vec::new();
        generate_rook_moves(&board, algebraic_to_square("d4").expect("d4"), &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_captures_enemy_but_not_friend() {
        let mut board = Board::empty();
        load_placement(&mut board, "8/8/8/8/8/r7/8/R1K5").expect("should parse");
        let mut out = Vec::new();
        generate_rook_moves(&board, algebraic_to_square("a1").expect("a1"), &mut out);
        let targets: Vec<String> = out.iter().map(|mv| mv.to_name()).collect();
        assert_eq!(targets, vec!["a2", "a3", "b1"]);
    }
}
