//! King safety: check detection and the legality filter.
//!
//! Attacks are found the same way the rules define them: generate the
//! opponent's pseudo-legal moves and look for one landing on the square.
//! Hypothetical positions are always built on a scratch copy of the board.

use tracing::trace;

use crate::game_state::chess_types::{Board, Color, MoveContext, PieceKind, SquareIndex};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::generate_moves;
use crate::moves::move_descriptions::Move;

/// First square (scan order) holding `color`'s king.
pub fn king_square(board: &Board, color: Color) -> Option<SquareIndex> {
    (0..64).find(|&square| {
        board
            .piece_at(square)
            .is_some_and(|piece| piece.color == color && piece.kind == PieceKind::King)
    })
}

/// Whether any pseudo-legal move of `attacker` lands on `square`.
pub fn is_square_attacked(
    board: &Board,
    context: &MoveContext,
    square: SquareIndex,
    attacker: Color,
) -> bool {
    generate_moves(board, context, attacker, false)
        .iter()
        .any(|mv| mv.to == square)
}

/// `false` when `color` has no king on the board.
pub fn is_king_in_check(board: &Board, context: &MoveContext, color: Color) -> bool {
    let Some(king) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, context, king, color.opposite())
}

/// Only two pieces left, read as bare kings.
pub fn is_insufficient_material(board: &Board) -> bool {
    board.occupied_count() == 2
}

/// Drops every candidate that would leave `color`'s king attacked.
///
/// Each candidate is played as a bare relocation on its own copy of the
/// board; `board` itself is never written.
pub fn filter_illegal_moves(
    board: &Board,
    context: &MoveContext,
    color: Color,
    moves: &mut Vec<Move>,
) {
    let king = king_square(board, color);

    moves.retain(|mv| {
        let mut scratch = board.clone();
        if apply_move(&mut scratch, *mv).is_err() {
            return false;
        }

        let king_after = if king == Some(mv.from) { Some(mv.to) } else { king };
        let Some(king_after) = king_after else {
            return true;
        };

        let exposed = is_square_attacked(&scratch, context, king_after, color.opposite());
        if exposed {
            trace!(%mv, ?color, "dropping move that leaves king attacked");
        }
        !exposed
    });
}

#[cfg(test)]
mod tests {
    use super::{filter_illegal_moves, is_insufficient_material, is_king_in_check, king_square};
    use crate::game_state::chess_types::{Board, Color, MoveContext};
    use crate::move_generation::move_generator::generate_moves;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::placement_parser::load_placement;
    use crate::utils::state_string::serialize_board;

    fn board(placement: &str) -> Board {
        let mut board = Board::empty();
        load_placement(&mut board, placement).expect("should parse");
        board
    }

    #[test]
    fn back_rank_check_is_seen() {
        let context = MoveContext::default();
        let quiet = board("1r5k/5ppp/8/8/8/8/5PPP/1R3RK1");
        assert!(!is_king_in_check(&quiet, &context, Color::Black));
        assert!(!is_king_in_check(&quiet, &context, Color::White));

        // Rook b1 has taken on b8.
        let checked = board("1R5k/5ppp/8/8/8/8/5PPP/5RK1");
        assert!(is_king_in_check(&checked, &context, Color::Black));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let lone_rook = board("8/8/8/8/8/8/8/R7");
        assert_eq!(king_square(&lone_rook, Color::Black), None);
        assert!(!is_king_in_check(&lone_rook, &MoveContext::default(), Color::Black));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let position = board("8/8/8/8/8/8/r7/4K3");
        let moves = generate_moves(&position, &MoveContext::default(), Color::White, true);
        let targets: Vec<String> = moves.iter().map(|mv| mv.to_name()).collect();
        assert_eq!(targets, vec!["f1", "d1"]);
    }

    #[test]
    fn filter_leaves_the_board_untouched() {
        let position = board("4r2k/8/8/8/8/8/4B3/4K3");
        let before = serialize_board(&position);
        let context = MoveContext::default();
        let mut moves = generate_moves(&position, &context, Color::White, false);
        filter_illegal_moves(&position, &context, Color::White, &mut moves);
        assert_eq!(serialize_board(&position), before);
        assert!(moves.iter().all(|mv| mv.from != algebraic_to_square("e2").expect("e2")));
    }

    #[test]
    fn two_kings_are_insufficient_material() {
        assert!(is_insufficient_material(&board("4k3/8/8/8/8/8/8/4K3")));
        assert!(!is_insufficient_material(&board("4k3/8/8/8/8/8/8/4KQ2")));
    }
}
