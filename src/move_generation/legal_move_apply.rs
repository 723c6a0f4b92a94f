//! Applying and reversing moves.
//!
//! `apply_move`/`undo_move` perform the bare relocation used by search and
//! by the legality filter. `commit_move_effects` is the full path for a move
//! that is really played: it layers castling, en passant and promotion on
//! top of the relocation and produces the next move-context record.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    KINGSIDE_KING_DEST_COL, KINGSIDE_ROOK_COL, KINGSIDE_ROOK_DEST_COL, QUEENSIDE_KING_DEST_COL,
    QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_DEST_COL,
};
use crate::game_state::chess_types::{
    col_of, row_of, square_index, AppliedMove, Board, Color, MoveContext, Piece, PieceKind,
    SquareIndex,
};
use crate::game_state::move_context::{CastleSide, LastMove};
use crate::move_generation::legal_moves_pawn::promotion_row;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::square_to_algebraic;

/// Moves whatever stands on `mv.from` to `mv.to`, replacing any occupant.
pub fn apply_move(board: &mut Board, mv: Move) -> ChessResult<AppliedMove> {
    let moved_piece = board
        .piece_id_at(mv.from)
        .ok_or_else(|| ChessError::EmptySquare(square_to_algebraic(mv.from)))?;
    let captured_piece = board.piece_id_at(mv.to);

    board.set_occupant(mv.to, Some(moved_piece));
    board.set_occupant(mv.from, None);

    Ok(AppliedMove {
        from: mv.from,
        to: mv.to,
        moved_piece,
        captured_piece,
    })
}

/// Reverses `applied`, putting back the exact piece identities it removed.
///
/// Fails without touching the board if the mover is no longer on the
/// destination or the origin has been filled since the apply.
pub fn undo_move(board: &mut Board, applied: AppliedMove) -> ChessResult<()> {
    if board.piece_id_at(applied.to) != Some(applied.moved_piece) || !board.is_empty(applied.from) {
        return Err(ChessError::UndoMismatch {
            from: square_to_algebraic(applied.from),
            to: square_to_algebraic(applied.to),
        });
    }

    board.set_occupant(applied.from, Some(applied.moved_piece));
    board.set_occupant(applied.to, applied.captured_piece);
    Ok(())
}

/// Plays `mv` for real and returns the move context that follows it.
///
/// All-or-nothing: on error `board` is unchanged.
pub fn commit_move_effects(
    board: &mut Board,
    context: &MoveContext,
    mv: Move,
) -> ChessResult<MoveContext> {
    let mover = board
        .piece_at(mv.from)
        .ok_or_else(|| ChessError::EmptySquare(square_to_algebraic(mv.from)))?;

    let mut next_board = board.clone();
    let en_passant_victim = square_index(row_of(mv.from), col_of(mv.to));
    let is_en_passant = mover.kind == PieceKind::Pawn
        && col_of(mv.from) != col_of(mv.to)
        && next_board.is_empty(mv.to)
        && next_board.piece_at(en_passant_victim)
            == Some(Piece::new(mover.color.opposite(), PieceKind::Pawn));

    let applied = apply_move(&mut next_board, mv)?;
    let mut captured_piece = applied.captured_piece;
    let mut moved_piece = applied.moved_piece;

    let is_castling = mover.kind == PieceKind::King && mv.distance() == 2;
    if is_castling {
        relocate_castling_rook(&mut next_board, mv)?;
    }

    if is_en_passant {
        captured_piece = next_board.piece_id_at(en_passant_victim);
        next_board.set_occupant(en_passant_victim, None);
    }

    if mover.kind == PieceKind::Pawn && row_of(mv.to) == promotion_row(mover.color) {
        next_board.retire(moved_piece);
        moved_piece = next_board.place_new(mv.to, Piece::new(mover.color, PieceKind::Queen))?;
    }

    let mut castling = context.castling;
    if mover.kind == PieceKind::King {
        castling.mark_king_moved(mover.color);
    }
    if mover.kind == PieceKind::Rook {
        if let Some((color, side)) = rook_home(mv.from) {
            if color == mover.color {
                castling.mark_rook_moved(color, side);
            }
        }
    }
    if applied.captured_piece.is_some() {
        if let Some((color, side)) = rook_home(mv.to) {
            castling.mark_rook_moved(color, side);
        }
    }

    let pawn_double_move = mover.kind == PieceKind::Pawn && mv.distance() == 2;
    let en_passant_row = pawn_double_move.then(|| (row_of(mv.from) + row_of(mv.to)) / 2);

    *board = next_board;

    Ok(MoveContext {
        last_move: Some(LastMove {
            from: mv.from,
            to: mv.to,
            kind: mover.kind,
            color: mover.color,
        }),
        pawn_double_move,
        en_passant_row,
        is_castling,
        castling,
        moved_piece: Some(moved_piece),
        captured_piece,
    })
}

fn relocate_castling_rook(board: &mut Board, king_move: Move) -> ChessResult<()> {
    let row = row_of(king_move.to);
    let (rook_from, rook_to) = match col_of(king_move.to) {
        KINGSIDE_KING_DEST_COL => (KINGSIDE_ROOK_COL, KINGSIDE_ROOK_DEST_COL),
        QUEENSIDE_KING_DEST_COL => (QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_DEST_COL),
        _ => return Ok(()),
    };

    let rook_from = square_index(row, rook_from);
    if board.is_empty(rook_from) {
        return Ok(());
    }
    apply_move(board, Move::new(rook_from, square_index(row, rook_to)))?;
    Ok(())
}

/// Which castling rook starts on `square`, if any.
fn rook_home(square: SquareIndex) -> Option<(Color, CastleSide)> {
    [Color::White, Color::Black].into_iter().find_map(|color| {
        let row = color.home_row();
        if square == square_index(row, KINGSIDE_ROOK_COL) {
            Some((color, CastleSide::Kingside))
        } else if square == square_index(row, QUEENSIDE_ROOK_COL) {
            Some((color, CastleSide::Queenside))
        } else {
            None
        }
    })
}
