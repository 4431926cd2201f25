//! Core value types for the 8x8 mailbox representation.
//!
//! The board is a grid of signed piece codes: zero is empty, the magnitude
//! selects the piece kind and the sign selects the color (positive = light).
//! Row 0 is the eighth rank, so light pawns advance toward row 0.

pub use crate::game_state::game_state::GameState;

/// Signed piece code stored in each board cell.
pub type PieceCode = i8;

/// Code of an empty square.
pub const EMPTY: PieceCode = 0;

/// 8x8 grid indexed `[row][col]`.
pub type Board = [[PieceCode; 8]; 8];

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Sign applied to piece codes of this color.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Negamax turn multiplier: +1 when light is the mover.
    #[inline]
    pub const fn turn_multiplier(self) -> i32 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Row delta of a single pawn push.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    /// Back rank holding the king and rooks at game start.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }
}

/// Piece kind; the discriminant is the magnitude of the board code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn = 1,
    Rook = 2,
    Knight = 3,
    Bishop = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion targets in the order they are emitted by the generator.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    #[inline]
    pub const fn code(self) -> PieceCode {
        self as PieceCode
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    pub const fn from_code(code: PieceCode) -> Option<Self> {
        match code.unsigned_abs() {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Rook),
            3 => Some(PieceKind::Knight),
            4 => Some(PieceKind::Bishop),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Upper-case letter used in notation and FEN.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'R' => Some(PieceKind::Rook),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[inline]
pub const fn piece_code(color: Color, kind: PieceKind) -> PieceCode {
    color.sign() * kind.code()
}

#[inline]
pub const fn piece_color(code: PieceCode) -> Option<Color> {
    if code > 0 {
        Some(Color::Light)
    } else if code < 0 {
        Some(Color::Dark)
    } else {
        None
    }
}

#[inline]
pub const fn piece_kind(code: PieceCode) -> Option<PieceKind> {
    PieceKind::from_code(code)
}

#[inline]
pub fn is_color(code: PieceCode, color: Color) -> bool {
    piece_color(code) == Some(color)
}

/// Board coordinate. Signed so that ray walks can step off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Square displaced by `(d_row, d_col)`, or `None` when off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let next = Self::new(self.row + d_row, self.col + d_col);
        if next.is_on_board() {
            Some(next)
        } else {
            None
        }
    }
}

/// Castling availability for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub light_kingside: bool,
    pub dark_kingside: bool,
    pub light_queenside: bool,
    pub dark_queenside: bool,
}

impl CastleRights {
    pub const ALL: CastleRights = CastleRights {
        light_kingside: true,
        dark_kingside: true,
        light_queenside: true,
        dark_queenside: true,
    };

    pub const NONE: CastleRights = CastleRights {
        light_kingside: false,
        dark_kingside: false,
        light_queenside: false,
        dark_queenside: false,
    };

    /// Compact 4-bit identifier used for equality and hashing.
    #[inline]
    pub const fn id(self) -> u8 {
        (self.light_kingside as u8)
            | (self.dark_kingside as u8) << 1
            | (self.light_queenside as u8) << 2
            | (self.dark_queenside as u8) << 3
    }

    #[inline]
    pub const fn kingside(self, color: Color) -> bool {
        match color {
            Color::Light => self.light_kingside,
            Color::Dark => self.dark_kingside,
        }
    }

    #[inline]
    pub const fn queenside(self, color: Color) -> bool {
        match color {
            Color::Light => self.light_queenside,
            Color::Dark => self.dark_queenside,
        }
    }

    pub fn revoke_kingside(&mut self, color: Color) {
        match color {
            Color::Light => self.light_kingside = false,
            Color::Dark => self.dark_kingside = false,
        }
    }

    pub fn revoke_queenside(&mut self, color: Color) {
        match color {
            Color::Light => self.light_queenside = false,
            Color::Dark => self.dark_queenside = false,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke_kingside(color);
        self.revoke_queenside(color);
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::ALL
    }
}

/// Hashable snapshot of everything that identifies a position for
/// repetition detection and the transposition table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    pub board: Board,
    pub castle_rights_id: u8,
    pub en_passant_square: Option<Square>,
    pub light_to_move: bool,
}
