//! Whole-side move generation.
//!
//! Scans the board from `a1` to `h8` and dispatches each piece of the
//! requested color to its per-kind generator. Output order is scan order,
//! then each generator's direction order; the search relies on it for
//! deterministic tie-breaking.

use crate::game_state::chess_types::{Board, Color, MoveContext, PieceKind, SquareIndex};
use crate::move_generation::legal_move_checks::filter_illegal_moves;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, board: &Board, context: &MoveContext, color: Color) -> Vec<Move>;
}

/// Movement patterns and occupancy only.
pub struct PseudoLegalMoveGenerator;

/// Pseudo-legal moves minus those that leave the mover's king attacked.
pub struct LegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, board: &Board, context: &MoveContext, color: Color) -> Vec<Move> {
        generate_moves(board, context, color, false)
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, board: &Board, context: &MoveContext, color: Color) -> Vec<Move> {
        generate_moves(board, context, color, true)
    }
}

pub fn generate_moves(
    board: &Board,
    context: &MoveContext,
    color: Color,
    filter_legal: bool,
) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);

    for square in 0..64 as SquareIndex {
        let Some(piece) = board.piece_at(square) else {
            continue;
        };
        if piece.color != color {
            continue;
        }

        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(board, context, square, color, &mut moves),
            PieceKind::Knight => generate_knight_moves(board, square, &mut moves),
            PieceKind::Bishop => generate_bishop_moves(board, square, &mut moves),
            PieceKind::Rook => generate_rook_moves(board, square, &mut moves),
            PieceKind::Queen => generate_queen_moves(board, square, &mut moves),
            PieceKind::King => generate_king_moves(board, context, square, color, &mut moves),
        }
    }

    if filter_legal {
        filter_illegal_moves(board, context, color, &mut moves);
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::{LegalMoveGenerator, MoveGenerator, PseudoLegalMoveGenerator};
    use crate::game_state::chess_rules::STARTING_POSITION_PLACEMENT;
    use crate::game_state::chess_types::{Board, Color, MoveContext};
    use crate::utils::placement_parser::load_placement;

    #[test]
    fn opening_has_twenty_moves_for_each_side() {
        let mut board = Board::empty();
        load_placement(&mut board, STARTING_POSITION_PLACEMENT).expect("should parse");
        let context = MoveContext::default();

        for color in [Color::White, Color::Black] {
            assert_eq!(LegalMoveGenerator.generate_moves(&board, &context, color).len(), 20);
            assert_eq!(PseudoLegalMoveGenerator.generate_moves(&board, &context, color).len(), 20);
        }
    }

    #[test]
    fn moves_come_out_in_board_scan_order() {
        let mut board = Board::empty();
        load_placement(&mut board, STARTING_POSITION_PLACEMENT).expect("should parse");
        let moves =
            LegalMoveGenerator.generate_moves(&board, &MoveContext::default(), Color::White);
        let first: Vec<String> = moves.iter().take(4).map(ToString::to_string).collect();
        assert_eq!(first, vec!["b1c3", "b1a3", "g1h3", "g1f3"]);
    }

    #[test]
    fn pinned_piece_is_filtered() {
        let mut board = Board::empty();
        // White bishop on e2 pinned against e1 by the rook on e8.
        load_placement(&mut board, "4r2k/8/8/8/8/8/4B3/4K3").expect("should parse");
        let context = MoveContext::default();

        let pseudo = PseudoLegalMoveGenerator.generate_moves(&board, &context, Color::White);
        let legal = LegalMoveGenerator.generate_moves(&board, &context, Color::White);
        assert!(pseudo.iter().any(|mv| mv.from_name() == "e2"));
        assert!(legal.iter().all(|mv| mv.from_name() != "e2"));
    }
}
