//! Bishop move generation: diagonal rays.

use crate::game_state::chess_types::{Board, SquareIndex};
use crate::move_generation::legal_move_shared::push_rays;
use crate::moves::directions::BISHOP_DIRECTIONS;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(board: &Board, from: SquareIndex, out: &mut Vec<Move>) {
    push_rays(board, from, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::chess_types::Board;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::placement_parser::load_placement;

    #[test]
    fn bishop_stops_on_first_blocker() {
        let mut board = Board::empty();
        // Bishop c1, own pawn d2, enemy pawn a3.
        load_placement(&mut board, "8/8/8/8/8/p7/3P4/2B5").expect("should parse");
        let mut out = Vec::new();
        generate_bishop_moves(&board, algebraic_to_square("c1").expect("c1"), &mut out);
        let targets: Vec<String> = out.iter().map(|mv| mv.to_name()).collect();
        assert_eq!(targets, vec!["b2", "a3"]);
    }
}
