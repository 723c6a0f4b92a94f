//! Deterministic material-negamax engine used for the automated opponent.

use tracing::info;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::chess_types::{Board, Color, MoveContext};
use crate::search::board_scoring::MaterialScorer;
use crate::search::negamax::{search_best_move, SearchConfig};

#[derive(Debug, Clone, Default)]
pub struct NegamaxEngine {
    config: SearchConfig,
    scorer: MaterialScorer,
}

impl NegamaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            scorer: MaterialScorer,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Mailbox Negamax"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        context: &MoveContext,
        color: Color,
    ) -> ChessResult<EngineOutput> {
        let result = search_best_move(board, context, color, &self.scorer, self.config)?;

        let mut out = EngineOutput {
            best_move: result.best_move,
            score: result.best_move.map(|_| result.best_score),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info string negamax_engine depth {} nodes {}",
            self.config.depth, result.nodes
        ));

        if let Some(mv) = result.best_move {
            info!(
                %mv,
                ?color,
                score = result.best_score,
                nodes = result.nodes,
                "engine move chosen"
            );
        } else {
            info!(?color, "engine has no legal move");
        }
        Ok(out)
    }
}
