//! Terminal-oriented board renderer for debugging and the self-play binary.

use crate::game_state::chess_types::{square_index, Board, Color};

/// Renders the board with rank 8 on top. White pieces are uppercase letters,
/// Black lowercase, empty squares `·`.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..8u8).rev() {
        out.push(char::from(b'1' + row));
        out.push(' ');

        for col in 0..8u8 {
            match board.piece_at(square_index(row, col)) {
                Some(piece) if piece.color == Color::White => out.push(piece.kind.letter()),
                Some(piece) => out.push(piece.kind.letter().to_ascii_lowercase()),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::chess_rules::STARTING_POSITION_PLACEMENT;
    use crate::game_state::chess_types::Board;
    use crate::utils::placement_parser::load_placement;

    #[test]
    fn renders_opening_with_black_on_top() {
        let mut board = Board::empty();
        load_placement(&mut board, STARTING_POSITION_PLACEMENT).expect("should parse");
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
    }
}
