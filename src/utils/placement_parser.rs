//! FEN-style position parser.
//!
//! The placement field lists ranks from rank 8 down to rank 1 separated by
//! `/`; digits are runs of empty squares, uppercase letters are White and
//! lowercase letters Black. The optional trailing fields of a full FEN
//! string are honored for side to move and castling; en passant and the
//! clocks are accepted and ignored.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{square_index, Board, Color, Piece, PieceKind};
use crate::game_state::move_context::{CastleSide, CastlingHistory};

/// Everything a position string can describe.
#[derive(Debug, Clone)]
pub struct ParsedPosition {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingHistory,
}

/// Parses a placement field, optionally followed by FEN tail fields.
pub fn parse_position(position: &str) -> ChessResult<ParsedPosition> {
    let mut parts = position.split_whitespace();
    let placement = parts
        .next()
        .ok_or_else(|| ChessError::InvalidNotation("empty position string".to_owned()))?;

    let mut board = Board::empty();
    load_placement(&mut board, placement)?;

    let side_to_move = match parts.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => {
            return Err(ChessError::InvalidNotation(format!(
                "invalid side-to-move field: {other}"
            )))
        }
    };

    let castling = match parts.next() {
        None => CastlingHistory::default(),
        Some(field) => parse_castling_field(field)?,
    };

    Ok(ParsedPosition {
        board,
        side_to_move,
        castling,
    })
}

/// Clears `board` and fills it from a placement field. On error the board
/// may hold a partial placement.
pub fn load_placement(board: &mut Board, placement: &str) -> ChessResult<()> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidNotation(format!(
            "placement must contain 8 ranks, got {}",
            ranks.len()
        )));
    }

    board.clear();
    for (rank_from_top, rank_str) in ranks.iter().enumerate() {
        let row = 7 - rank_from_top as u8;
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidNotation(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as u8;
                if col > 8 {
                    break;
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidNotation(format!("invalid piece character '{ch}' in placement"))
            })?;
            if col >= 8 {
                col += 1;
                break;
            }
            board.place_new(square_index(row, col), piece)?;
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidNotation(format!(
                "rank {} does not span 8 files: {rank_str:?}",
                row + 1
            )));
        }
    }

    Ok(())
}

fn parse_castling_field(field: &str) -> ChessResult<CastlingHistory> {
    if field == "-" {
        return Ok(CastlingHistory::all_moved());
    }

    let mut available = [false; 4];
    for ch in field.chars() {
        let slot = match ch {
            'K' => 0,
            'Q' => 1,
            'k' => 2,
            'q' => 3,
            _ => {
                return Err(ChessError::InvalidNotation(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        };
        available[slot] = true;
    }

    let mut history = CastlingHistory::default();
    let rights = [
        (Color::White, CastleSide::Kingside),
        (Color::White, CastleSide::Queenside),
        (Color::Black, CastleSide::Kingside),
        (Color::Black, CastleSide::Queenside),
    ];
    for ((color, side), available) in rights.into_iter().zip(available) {
        if !available {
            history.mark_rook_moved(color, side);
        }
    }
    Ok(history)
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = PieceKind::from_letter(ch.to_ascii_uppercase())?;
    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::{load_placement, parse_position};
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_PLACEMENT;
    use crate::game_state::chess_types::{square_index, Board, Color, Piece, PieceKind};
    use crate::game_state::move_context::CastleSide;

    #[test]
    fn starting_placement_maps_top_rank_to_row_seven() {
        let mut board = Board::empty();
        load_placement(&mut board, STARTING_POSITION_PLACEMENT).expect("should parse");

        assert_eq!(board.occupied_count(), 32);
        assert_eq!(
            board.piece_at(square_index(0, 4)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(square_index(7, 3)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            board.piece_at(square_index(6, 0)),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }

    #[test]
    fn fen_tail_sets_side_and_castling() {
        let parsed = parse_position("7k/5Q2/5K2/8/8/8/8/8 b - - 0 1").expect("should parse");
        assert_eq!(parsed.side_to_move, Color::Black);
        assert!(!parsed.castling.may_castle(Color::White, CastleSide::Kingside));

        let parsed = parse_position("5k2/8/8/8/8/8/8/4K2R w K - 0 1").expect("should parse");
        assert_eq!(parsed.side_to_move, Color::White);
        assert!(parsed.castling.may_castle(Color::White, CastleSide::Kingside));
        assert!(!parsed.castling.may_castle(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn bare_placement_keeps_every_castling_right() {
        let parsed = parse_position(STARTING_POSITION_PLACEMENT).expect("should parse");
        assert_eq!(parsed.side_to_move, Color::White);
        assert!(parsed.castling.may_castle(Color::Black, CastleSide::Queenside));
    }

    #[test]
    fn malformed_placements_are_rejected() {
        for bad in [
            "",
            "8/8/8/8/8/8/8",
            "9/8/8/8/8/8/8/8",
            "ppppppppp/8/8/8/8/8/8/8",
            "7/8/8/8/8/8/8/8",
            "x7/8/8/8/8/8/8/8",
            "44p/8/8/8/8/8/8/8",
        ] {
            let mut board = Board::empty();
            assert!(
                matches!(load_placement(&mut board, bad), Err(ChessError::InvalidNotation(_))),
                "{bad:?} should be rejected"
            );
        }
        assert!(parse_position("8/8/8/8/8/8/8/8 x").is_err());
    }
}
