//! The chess game as seen by a host application.
//!
//! `Chess` owns the authoritative board, the last-move record and the turn
//! counter, and caches the legal moves of the side to move. Everything that
//! simulates moves (legality filtering, search) works on copies, so the
//! board only changes through `commit_move`, `deserialize_board` and the
//! setup calls.

use tracing::debug;

use crate::engines::engine_negamax::NegamaxEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_PLACEMENT;
use crate::game_state::chess_types::{Board, Color, MoveContext};
use crate::game_state::game_trait::TwoPlayerGame;
use crate::move_generation::legal_move_apply::commit_move_effects;
use crate::move_generation::legal_move_checks::{is_insufficient_material, is_king_in_check};
use crate::move_generation::move_generator::generate_moves;
use crate::moves::move_descriptions::Move;
use crate::search::negamax::SearchConfig;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::placement_parser::parse_position;
use crate::utils::state_string::{deserialize_board, serialize_board};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
}

#[derive(Debug, Clone)]
pub struct Chess {
    board: Board,
    context: MoveContext,
    /// Moves committed so far; even means White to move.
    turn: u32,
    legal_moves: Vec<Move>,
    engine: NegamaxEngine,
}

impl Default for Chess {
    fn default() -> Self {
        Self::new()
    }
}

impl Chess {
    /// A game at the standard opening position.
    pub fn new() -> Self {
        Self::with_search_config(SearchConfig::default())
    }

    pub fn with_search_config(config: SearchConfig) -> Self {
        let mut game = Self {
            board: Board::empty(),
            context: MoveContext::default(),
            turn: 0,
            legal_moves: Vec::new(),
            engine: NegamaxEngine::new(config),
        };
        game.set_up_board();
        game
    }

    /// A game at `position` (placement field, optionally with FEN tail).
    pub fn from_position(position: &str) -> ChessResult<Self> {
        let mut game = Self::new();
        game.load_starting_position(position)?;
        Ok(game)
    }

    /// Replaces the position. The last-move record is reset; castling
    /// history and side to move come from the optional FEN tail fields.
    pub fn load_starting_position(&mut self, position: &str) -> ChessResult<()> {
        let parsed = parse_position(position)?;
        self.board = parsed.board;
        self.context = MoveContext {
            castling: parsed.castling,
            ..MoveContext::default()
        };
        self.turn = match parsed.side_to_move {
            Color::White => 0,
            Color::Black => 1,
        };
        self.refresh_legal_moves();
        Ok(())
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.turn % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn move_context(&self) -> &MoveContext {
        &self.context
    }

    pub fn search_config(&self) -> SearchConfig {
        self.engine.config()
    }

    pub fn serialize_board(&self) -> String {
        serialize_board(&self.board)
    }

    /// Restores a serialized board. Side to move and castling history are
    /// kept. The last-move record is cleared since it described the board
    /// being replaced, so no en passant capture is offered right after.
    pub fn deserialize_board(&mut self, state: &str) -> ChessResult<()> {
        deserialize_board(&mut self.board, state)?;
        self.context = MoveContext {
            castling: self.context.castling,
            ..MoveContext::default()
        };
        self.refresh_legal_moves();
        Ok(())
    }

    /// Legal moves for `color` in the current position.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        if color == self.side_to_move() {
            self.legal_moves.clone()
        } else {
            generate_moves(&self.board, &self.context, color, true)
        }
    }

    /// Cached legal moves of the side to move.
    #[inline]
    pub fn current_legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// Highlights every destination reachable from `from` and reports
    /// whether there was at least one.
    pub fn highlight_moves_from(&mut self, from: &str) -> ChessResult<bool> {
        let from = algebraic_to_square(from)?;
        self.board.clear_highlights();
        let mut any = false;
        for mv in self.legal_moves.iter().filter(|mv| mv.from == from) {
            self.board.set_highlighted(mv.to, true);
            any = true;
        }
        Ok(any)
    }

    pub fn clear_board_highlights(&mut self) {
        self.board.clear_highlights();
    }

    pub fn is_king_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, &self.context, color)
    }

    /// The side that delivered checkmate, if the side to move is mated.
    pub fn winner(&self) -> Option<Color> {
        let side = self.side_to_move();
        if self.legal_moves.is_empty() && self.is_king_in_check(side) {
            Some(side.opposite())
        } else {
            None
        }
    }

    /// Stalemate, or only two pieces left on the board.
    pub fn is_draw(&self) -> bool {
        let stalemate = self.legal_moves.is_empty() && !self.is_king_in_check(self.side_to_move());
        stalemate || is_insufficient_material(&self.board)
    }

    pub fn outcome(&self) -> GameOutcome {
        let side = self.side_to_move();
        if self.legal_moves.is_empty() {
            if self.is_king_in_check(side) {
                return GameOutcome::Checkmate {
                    winner: side.opposite(),
                };
            }
            return GameOutcome::Stalemate;
        }
        if is_insufficient_material(&self.board) {
            return GameOutcome::InsufficientMaterial;
        }
        GameOutcome::InProgress
    }

    /// Plays a move given by square names, with all special-move effects.
    pub fn commit_move(&mut self, from: &str, to: &str) -> ChessResult<Move> {
        let mv = Move::from_names(from, to)?;
        self.commit(mv)?;
        Ok(mv)
    }

    /// Plays `mv` if it is in the side to move's legal set.
    pub fn commit(&mut self, mv: Move) -> ChessResult<()> {
        if !self.legal_moves.contains(&mv) {
            return Err(ChessError::IllegalMove {
                from: mv.from_name(),
                to: mv.to_name(),
            });
        }

        let side = self.side_to_move();
        self.context = commit_move_effects(&mut self.board, &self.context, mv)?;
        self.turn += 1;
        self.board.clear_highlights();
        self.refresh_legal_moves();

        debug!(
            %mv,
            ?side,
            capture = self.context.captured_piece.is_some(),
            castling = self.context.is_castling,
            replies = self.legal_moves.len(),
            "move committed"
        );
        Ok(())
    }

    /// Searches for `color`'s move and commits it. Blocks until the
    /// fixed-depth search completes. `Ok(None)` means `color` has no legal
    /// move and the position is terminal.
    pub fn request_ai_move(&mut self, color: Color) -> ChessResult<Option<Move>> {
        if color != self.side_to_move() {
            return Err(ChessError::WrongSideToMove(color));
        }

        let output = self.engine.choose_move(&self.board, &self.context, color)?;
        let Some(mv) = output.best_move else {
            return Ok(None);
        };
        self.commit(mv)?;
        Ok(Some(mv))
    }

    fn refresh_legal_moves(&mut self) {
        self.legal_moves = generate_moves(&self.board, &self.context, self.side_to_move(), true);
    }
}

impl TwoPlayerGame for Chess {
    fn set_up_board(&mut self) {
        let Ok(parsed) = parse_position(STARTING_POSITION_PLACEMENT) else {
            return;
        };
        self.board = parsed.board;
        self.context = MoveContext::default();
        self.turn = 0;
        self.refresh_legal_moves();
    }

    fn check_for_winner(&self) -> Option<Color> {
        self.winner()
    }

    fn check_for_draw(&self) -> bool {
        self.is_draw()
    }

    fn can_move(&self, from: &str, to: &str) -> bool {
        Move::from_names(from, to).is_ok_and(|mv| self.legal_moves.contains(&mv))
    }

    fn commit_move(&mut self, from: &str, to: &str) -> ChessResult<()> {
        Chess::commit_move(self, from, to).map(|_| ())
    }

    fn state_string(&self) -> String {
        self.serialize_board()
    }
}
