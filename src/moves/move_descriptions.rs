//! Origin/destination move pairs.
//!
//! A `Move` is plain data. Captures, castling, promotion and en passant are
//! not encoded; they are derived from the board when the move is committed.

use std::fmt;

use crate::errors::ChessResult;
use crate::game_state::chess_types::{col_of, row_of, SquareIndex};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: SquareIndex,
    pub to: SquareIndex,
}

impl Move {
    #[inline]
    pub const fn new(from: SquareIndex, to: SquareIndex) -> Self {
        Self { from, to }
    }

    pub fn from_names(from: &str, to: &str) -> ChessResult<Self> {
        Ok(Self::new(algebraic_to_square(from)?, algebraic_to_square(to)?))
    }

    pub fn from_name(&self) -> String {
        square_to_algebraic(self.from)
    }

    pub fn to_name(&self) -> String {
        square_to_algebraic(self.to)
    }

    /// Chebyshev distance travelled, 2 for a king castling or a pawn double push.
    #[inline]
    pub fn distance(&self) -> u8 {
        let d_row = row_of(self.from).abs_diff(row_of(self.to));
        let d_col = col_of(self.from).abs_diff(col_of(self.to));
        d_row.max(d_col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from_name(), self.to_name())
    }
}

#[cfg(test)]
mod tests {
    use super::Move;

    #[test]
    fn displays_as_long_algebraic() {
        let mv = Move::from_names("e2", "e4").expect("names should parse");
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(mv.distance(), 2);
    }

    #[test]
    fn bad_names_fail() {
        assert!(Move::from_names("e2", "e9").is_err());
    }
}
