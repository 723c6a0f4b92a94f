//! Static board evaluation.
//!
//! Search delegates scoring to the `BoardScorer` trait. `MaterialScorer`
//! sums fixed piece values, positive for White and negative for Black.

use crate::game_state::chess_rules::piece_value;
use crate::game_state::chess_types::{Board, Piece};
use crate::utils::state_string::code_to_piece;

pub trait BoardScorer: Send + Sync {
    /// Score from White's point of view.
    fn score(&self, board: &Board) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn signed_value(piece: Piece) -> i32 {
        piece.color.sign() * piece_value(piece.kind)
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        (0..64)
            .filter_map(|square| board.piece_at(square))
            .map(Self::signed_value)
            .sum()
    }
}

/// Material score of a serialized board. Unknown codes count as empty.
pub fn evaluate_state_string(state: &str) -> i32 {
    state
        .as_bytes()
        .chunks_exact(2)
        .filter_map(|code| code_to_piece(code).ok().flatten())
        .map(MaterialScorer::signed_value)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{evaluate_state_string, BoardScorer, MaterialScorer};
    use crate::game_state::chess_rules::STARTING_POSITION_PLACEMENT;
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind};
    use crate::utils::placement_parser::load_placement;
    use crate::utils::state_string::serialize_board;

    #[test]
    fn opening_is_balanced() {
        let mut board = Board::empty();
        load_placement(&mut board, STARTING_POSITION_PLACEMENT).expect("should parse");
        assert_eq!(MaterialScorer.score(&board), 0);
        assert_eq!(evaluate_state_string(&serialize_board(&board)), 0);
    }

    #[test]
    fn extra_queen_is_worth_nine_hundred() {
        let mut board = Board::empty();
        load_placement(&mut board, "4k3/8/8/8/8/8/8/3QK3").expect("should parse");
        assert_eq!(MaterialScorer.score(&board), 900);
        assert_eq!(MaterialScorer::signed_value(Piece::new(Color::Black, PieceKind::Bishop)), -230);
    }
}
