//! Crate root module declarations for the mailbox chess engine.
//!
//! The engine keeps an 8x8 array-of-squares board, enumerates legal moves
//! under full chess law, and picks moves for an automated opponent with a
//! fixed-depth negamax search. Presentation and game-loop code live outside
//! this crate and talk to it through [`game_state::chess_game::Chess`].

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_game;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_trait;
    pub mod move_context;
    pub mod undo_state;
}

pub mod moves {
    pub mod directions;
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod negamax;
}

pub mod engines {
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod placement_parser;
    pub mod render_board;
    pub mod state_string;
}
