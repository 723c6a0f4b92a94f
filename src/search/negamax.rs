//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The search works on its own scratch copy of the board and walks the tree
//! with the bare `apply_move`/`undo_move` pair. Castling rook moves, en
//! passant removal and promotion are not played out during lookahead, and
//! the move context stays at the root's record for the whole search.

use tracing::debug;

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Board, Color, MoveContext};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::move_generator::generate_moves;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::BoardScorer;

/// Score of a node whose side to move has no legal moves.
pub const TERMINAL_SCORE: i32 = 10_000;

/// Window bound; larger than any reachable score.
pub const SEARCH_INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched beneath each root move.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

/// Picks `color`'s best legal move. The earliest generated move wins ties.
pub fn search_best_move<S: BoardScorer>(
    board: &Board,
    context: &MoveContext,
    color: Color,
    scorer: &S,
    config: SearchConfig,
) -> ChessResult<SearchResult> {
    let moves = generate_moves(board, context, color, true);
    let sign = color.sign();
    let mut scratch = board.clone();

    let mut alpha = -SEARCH_INFINITY;
    let beta = SEARCH_INFINITY;
    let mut result = SearchResult {
        best_move: None,
        best_score: -SEARCH_INFINITY,
        nodes: 0,
    };

    for mv in moves {
        let applied = apply_move(&mut scratch, mv)?;
        let score = -negamax(
            &mut scratch,
            context,
            scorer,
            config.depth,
            -beta,
            -alpha,
            -sign,
            &mut result.nodes,
        )?;
        undo_move(&mut scratch, applied)?;

        if score > result.best_score {
            result.best_score = score;
            result.best_move = Some(mv);
        }
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    debug!(
        ?color,
        best_move = ?result.best_move.map(|mv| mv.to_string()),
        score = result.best_score,
        nodes = result.nodes,
        "search finished"
    );
    Ok(result)
}

/// Score of `board` for the side given by `sign` (`1` White, `-1` Black).
#[allow(clippy::too_many_arguments)]
pub fn negamax<S: BoardScorer>(
    board: &mut Board,
    context: &MoveContext,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    sign: i32,
    nodes: &mut u64,
) -> ChessResult<i32> {
    *nodes += 1;

    if depth == 0 {
        return Ok(sign * scorer.score(board));
    }

    let moves = generate_moves(board, context, Color::from_sign(sign), true);
    if moves.is_empty() {
        // Mate and stalemate are not told apart. The penalty is signed like
        // the static score, so it is a loss only when White is to move.
        return Ok(sign * -TERMINAL_SCORE);
    }

    let mut best = -SEARCH_INFINITY;
    for mv in moves {
        let applied = apply_move(board, mv)?;
        let score = -negamax(board, context, scorer, depth - 1, -beta, -alpha, -sign, nodes)?;
        undo_move(board, applied)?;

        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::{negamax, search_best_move, SearchConfig, SEARCH_INFINITY, TERMINAL_SCORE};
    use crate::game_state::chess_types::{Board, Color, MoveContext};
    use crate::search::board_scoring::MaterialScorer;
    use crate::utils::placement_parser::load_placement;
    use crate::utils::state_string::serialize_board;

    fn board(placement: &str) -> Board {
        let mut board = Board::empty();
        load_placement(&mut board, placement).expect("should parse");
        board
    }

    fn run_negamax(position: &mut Board, depth: u8, sign: i32, nodes: &mut u64) -> i32 {
        negamax(
            position,
            &MoveContext::default(),
            &MaterialScorer,
            depth,
            -SEARCH_INFINITY,
            SEARCH_INFINITY,
            sign,
            nodes,
        )
        .expect("search should run")
    }

    #[test]
    fn depth_zero_is_signed_material() {
        let mut position = board("4k3/8/8/8/8/8/8/3QK3");
        let mut nodes = 0;
        let white = run_negamax(&mut position, 0, 1, &mut nodes);
        let black = run_negamax(&mut position, 0, -1, &mut nodes);
        assert_eq!(white, 900);
        assert_eq!(black, -900);
        assert_eq!(nodes, 2);
    }

    #[test]
    fn terminal_penalty_is_scaled_by_sign() {
        // Black to move is stalemated.
        let mut black_stuck = board("7k/5Q2/5K2/8/8/8/8/8");
        let mut nodes = 0;
        assert_eq!(run_negamax(&mut black_stuck, 1, -1, &mut nodes), TERMINAL_SCORE);

        // White to move is stalemated.
        let mut white_stuck = board("7K/5q2/5k2/8/8/8/8/8");
        assert_eq!(run_negamax(&mut white_stuck, 1, 1, &mut nodes), -TERMINAL_SCORE);
        assert_eq!(nodes, 2);
    }

    #[test]
    fn search_takes_a_hanging_queen() {
        let position = board("4k3/8/8/8/8/8/4q3/3QK3");
        let result = search_best_move(
            &position,
            &MoveContext::default(),
            Color::White,
            &MaterialScorer,
            SearchConfig { depth: 1 },
        )
        .expect("search should run");
        let best = result.best_move.expect("white has moves");
        assert_eq!(best.to_name(), "e2");
    }

    #[test]
    fn search_leaves_the_board_as_it_found_it() {
        let position = board("r3k2r/ppp2ppp/8/3pP3/8/8/PPP2PPP/R3K2R");
        let before = serialize_board(&position);
        let result = search_best_move(
            &position,
            &MoveContext::default(),
            Color::Black,
            &MaterialScorer,
            SearchConfig { depth: 1 },
        )
        .expect("search should run");
        assert!(result.best_move.is_some());
        assert!(result.nodes > 0);
        assert_eq!(serialize_board(&position), before);
    }

    #[test]
    fn no_legal_moves_means_no_best_move() {
        let position = board("7k/5Q2/5K2/8/8/8/8/8");
        let result = search_best_move(
            &position,
            &MoveContext::default(),
            Color::Black,
            &MaterialScorer,
            SearchConfig::default(),
        )
        .expect("search should run");
        assert_eq!(result.best_move, None);
    }
}
