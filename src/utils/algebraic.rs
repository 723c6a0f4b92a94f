//! Square-name conversions.
//!
//! Converts between algebraic names (`e4`) and `(row, col)` coordinates or
//! square indices. Row 0 is rank 1, column 0 is file a.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{col_of, row_of, square_index, SquareIndex};

/// Name of the square at `(row, col)`, for example `(3, 4)` is `"e4"`.
#[inline]
pub fn square_name(row: u8, col: u8) -> String {
    let file_char = char::from(b'a' + col);
    let rank_char = char::from(b'1' + row);
    format!("{file_char}{rank_char}")
}

/// Parses a two-character square name into `(row, col)`.
pub fn parse_square_name(name: &str) -> ChessResult<(u8, u8)> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidNotation(format!(
            "square name must be two characters: {name:?}"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidNotation(format!(
            "invalid file in square name: {name:?}"
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidNotation(format!(
            "invalid rank in square name: {name:?}"
        )));
    }

    Ok((rank - b'1', file - b'a'))
}

#[inline]
pub fn algebraic_to_square(name: &str) -> ChessResult<SquareIndex> {
    let (row, col) = parse_square_name(name)?;
    Ok(square_index(row, col))
}

#[inline]
pub fn square_to_algebraic(square: SquareIndex) -> String {
    square_name(row_of(square), col_of(square))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, parse_square_name, square_name, square_to_algebraic};
    use crate::errors::ChessError;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(square_name(0, 0), "a1");
        assert_eq!(square_name(7, 7), "h8");
        assert_eq!(parse_square_name("e4").expect("e4 should parse"), (3, 4));
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(square_to_algebraic(0), "a1");
    }

    #[test]
    fn every_square_name_parses_back() {
        for row in 0..8 {
            for col in 0..8 {
                let name = square_name(row, col);
                assert_eq!(parse_square_name(&name), Ok((row, col)));
            }
        }
    }

    #[test]
    fn malformed_names_are_rejected() {
        for bad in ["", "e", "e44", "i1", "a9", "A1", "é4"] {
            assert!(
                matches!(parse_square_name(bad), Err(ChessError::InvalidNotation(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
