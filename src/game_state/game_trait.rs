//! Capability set a two-player board game exposes to its host application.

use crate::errors::ChessResult;
use crate::game_state::chess_types::Color;

pub trait TwoPlayerGame {
    /// Resets to the game's opening position.
    fn set_up_board(&mut self);

    /// The side that has won, if any.
    fn check_for_winner(&self) -> Option<Color>;

    fn check_for_draw(&self) -> bool;

    /// Whether the side to move may play `from -> to` (square names).
    fn can_move(&self, from: &str, to: &str) -> bool;

    /// Plays `from -> to` for the side to move.
    fn commit_move(&mut self, from: &str, to: &str) -> ChessResult<()>;

    /// Serialized position for save/restore.
    fn state_string(&self) -> String;
}
