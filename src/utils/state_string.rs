//! Serialized board strings.
//!
//! A board serializes to 128 characters: a two-character code for each
//! square in row-major order starting at `a1`. `"00"` is an empty square,
//! otherwise a color letter (`W`/`B`) followed by a piece letter
//! (`P N B R Q K`). This is the canonical form for save/restore.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STATE_STRING_LEN;
use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, SquareIndex};

pub const EMPTY_SQUARE_CODE: &str = "00";

/// Two-character code for whatever stands on `square`.
pub fn piece_code(board: &Board, square: SquareIndex) -> String {
    match board.piece_at(square) {
        Some(piece) => piece_to_code(piece).iter().collect(),
        None => EMPTY_SQUARE_CODE.to_owned(),
    }
}

#[inline]
pub fn piece_to_code(piece: Piece) -> [char; 2] {
    [piece.color.code(), piece.kind.letter()]
}

/// Decodes a two-character code; `Ok(None)` for `"00"`.
pub fn code_to_piece(code: &[u8]) -> ChessResult<Option<Piece>> {
    match code {
        [b'0', b'0'] => Ok(None),
        [color, kind] => {
            let color = Color::from_code(char::from(*color));
            let kind = PieceKind::from_letter(char::from(*kind));
            match (color, kind) {
                (Some(color), Some(kind)) => Ok(Some(Piece::new(color, kind))),
                _ => Err(ChessError::InvalidNotation(format!(
                    "unknown piece code {:?}",
                    String::from_utf8_lossy(code)
                ))),
            }
        }
        _ => Err(ChessError::InvalidNotation(format!(
            "piece code must be two characters: {:?}",
            String::from_utf8_lossy(code)
        ))),
    }
}

pub fn serialize_board(board: &Board) -> String {
    let mut out = String::with_capacity(STATE_STRING_LEN);
    for square in 0..64 {
        match board.piece_at(square) {
            Some(piece) => out.extend(piece_to_code(piece)),
            None => out.push_str(EMPTY_SQUARE_CODE),
        }
    }
    out
}

/// Replaces the board contents with `state`. Piece identities are rebuilt,
/// so ids handed out before the call no longer refer to this board's pieces.
///
/// The board is left untouched when `state` fails to parse.
pub fn deserialize_board(board: &mut Board, state: &str) -> ChessResult<()> {
    let bytes = state.as_bytes();
    if bytes.len() != STATE_STRING_LEN {
        return Err(ChessError::InvalidNotation(format!(
            "board state must be {STATE_STRING_LEN} characters, got {}",
            bytes.len()
        )));
    }

    let decoded = bytes
        .chunks_exact(2)
        .map(code_to_piece)
        .collect::<ChessResult<Vec<_>>>()?;

    board.clear();
    for (square, piece) in decoded.into_iter().enumerate() {
        if let Some(piece) = piece {
            board.place_new(square as SquareIndex, piece)?;
        }
    }
    Ok(())
}
