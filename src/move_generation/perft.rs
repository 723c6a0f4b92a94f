//! Move-path enumeration for validating the generator.
//!
//! Every node plays its move through the full commit path, so en passant,
//! castling and promotion are counted the way a real game would see them.

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Board, Color, MoveContext};
use crate::move_generation::legal_move_apply::commit_move_effects;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub castles: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    context: &MoveContext,
    side_to_move: Color,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_moves(board, context, side_to_move) {
        let mut next_board = board.clone();
        let next_context = commit_move_effects(&mut next_board, context, mv)?;

        if depth == 1 {
            total.nodes += 1;
            if next_context.captured_piece.is_some() {
                total.captures += 1;
            }
            if next_context.is_castling {
                total.castles += 1;
            }
            continue;
        }

        total.merge(perft(
            generator,
            &next_board,
            &next_context,
            side_to_move.opposite(),
            depth - 1,
        )?);
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::chess_rules::STARTING_POSITION_PLACEMENT;
    use crate::game_state::chess_types::{Board, Color, MoveContext};
    use crate::move_generation::move_generator::LegalMoveGenerator;
    use crate::utils::placement_parser::load_placement;

    fn opening() -> Board {
        let mut board = Board::empty();
        load_placement(&mut board, STARTING_POSITION_PLACEMENT).expect("should parse");
        board
    }

    #[test]
    fn opening_perft_matches_reference_counts() {
        let board = opening();
        let context = MoveContext::default();
        let expected = [(1, 20), (2, 400), (3, 8902)];
        for (depth, nodes) in expected {
            let counts = perft(&LegalMoveGenerator, &board, &context, Color::White, depth)
                .expect("perft should run");
            assert_eq!(counts.nodes, nodes, "depth {depth}");
        }
    }

    #[test]
    fn opening_depth_three_captures() {
        let context = MoveContext::default();
        let counts = perft(&LegalMoveGenerator, &opening(), &context, Color::White, 3)
            .expect("perft should run");
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.castles, 0);
    }
}
