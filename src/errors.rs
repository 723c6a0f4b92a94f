//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by notation parsing, move
//! application and the game boundary. Parsing and move-validation variants
//! are recoverable and suitable for showing to a user. `UndoMismatch` and
//! `PieceTableFull` indicate misuse of the apply/undo contract or a corrupted
//! board and are not expected during normal play.

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A square name, placement string, or serialized board could not be parsed.
    #[error("invalid notation: {0}")]
    InvalidNotation(String),

    /// The requested move is not in the current legal move set.
    #[error("illegal move: {from}{to}")]
    IllegalMove { from: String, to: String },

    /// Tried to move a piece off a square that holds nothing.
    #[error("no piece on square {0}")]
    EmptySquare(String),

    /// An undo record was replayed against a board that changed since the
    /// matching apply.
    #[error("undo record {from}{to} does not match the board")]
    UndoMismatch { from: String, to: String },

    /// More pieces were created than the piece table can index.
    #[error("piece table is full")]
    PieceTableFull,

    /// An engine move was requested for the side that is not on move.
    #[error("{0:?} is not the side to move")]
    WrongSideToMove(Color),
}

pub type ChessResult<T> = Result<T, ChessError>;
