//! Value types shared by the board model, move generation and search.

pub use crate::game_state::board::{Board, Square};
pub use crate::game_state::move_context::MoveContext;
pub use crate::game_state::undo_state::AppliedMove;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Letter used in the serialized board string.
    #[inline]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    #[inline]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'W' => Some(Color::White),
            'B' => Some(Color::Black),
            _ => None,
        }
    }

    /// Negamax sign: `1` for White, `-1` for Black.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn from_sign(sign: i32) -> Self {
        if sign >= 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Direction a pawn of this color advances in row index.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row this color's king and rooks start on.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

/// Piece kind (color is carried separately in [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parses an uppercase piece letter.
    #[inline]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece identity. Value-like; where it stands is tracked by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Handle into the board's piece table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(pub u8);

/// Board square index (`0..=63`), `row * 8 + col`, `0 == a1`.
pub type SquareIndex = u8;

#[inline]
pub const fn square_index(row: u8, col: u8) -> SquareIndex {
    row * 8 + col
}

#[inline]
pub const fn row_of(square: SquareIndex) -> u8 {
    square / 8
}

#[inline]
pub const fn col_of(square: SquareIndex) -> u8 {
    square % 8
}

/// Offsets `square` by `(d_row, d_col)`, returning `None` off the board.
#[inline]
pub fn offset_square(square: SquareIndex, d_row: i8, d_col: i8) -> Option<SquareIndex> {
    let row = row_of(square) as i8 + d_row;
    let col = col_of(square) as i8 + d_col;
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some(square_index(row as u8, col as u8))
    } else {
        None
    }
}
