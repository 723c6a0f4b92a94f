//! Engine abstraction layer.
//!
//! Lets callers (the game boundary, the self-play binary) pick a move
//! strategy at runtime behind a single trait.

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Board, Color, MoveContext};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// `best_move` is `None` when `color` has no legal moves.
    fn choose_move(
        &mut self,
        board: &Board,
        context: &MoveContext,
        color: Color,
    ) -> ChessResult<EngineOutput>;
}
