//! Self-describing move value.
//!
//! A `Move` snapshots the moved and captured piece codes from the board at
//! construction time, so it stays meaningful in the move log after the board
//! has changed. Equality and hashing use only the compact move id built from
//! the origin, destination and promotion target.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: PieceCode,
    pub piece_captured: PieceCode,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Ordinary move or capture; pieces are read from `board`.
    pub fn new(from: Square, to: Square, board: &Board) -> Self {
        Self {
            from,
            to,
            piece_moved: board[from.row as usize][from.col as usize],
            piece_captured: board[to.row as usize][to.col as usize],
            is_en_passant: false,
            is_castle: false,
            promotion: None,
        }
    }

    /// En-passant capture; the captured pawn is the opposing pawn beside `from`.
    pub fn en_passant(from: Square, to: Square, board: &Board) -> Self {
        let piece_moved = board[from.row as usize][from.col as usize];
        Self {
            piece_captured: -piece_moved,
            is_en_passant: true,
            ..Self::new(from, to, board)
        }
    }

    /// King move of two files with the rook hop applied by make/undo.
    pub fn castle(from: Square, to: Square, board: &Board) -> Self {
        Self {
            is_castle: true,
            ..Self::new(from, to, board)
        }
    }

    #[inline]
    pub fn with_promotion(self, kind: PieceKind) -> Self {
        Self {
            promotion: Some(kind),
            ..self
        }
    }

    /// Compact equality key: digits of the origin/destination rows and columns,
    /// prefixed by the promotion code.
    #[inline]
    pub fn move_id(&self) -> u32 {
        let promo = self.promotion.map_or(0, |kind| kind.code() as u32);
        promo * 10_000
            + self.from.row as u32 * 1000
            + self.from.col as u32 * 100
            + self.to.row as u32 * 10
            + self.to.col as u32
    }

    #[inline]
    pub fn moved_kind(&self) -> Option<PieceKind> {
        piece_kind(self.piece_moved)
    }

    #[inline]
    pub fn mover(&self) -> Option<Color> {
        piece_color(self.piece_moved)
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured != EMPTY
    }

    #[inline]
    pub fn is_pawn_move(&self) -> bool {
        self.moved_kind() == Some(PieceKind::Pawn)
    }

    #[inline]
    pub fn is_king_move(&self) -> bool {
        self.moved_kind() == Some(PieceKind::King)
    }

    /// Code written to the destination square (the promoted piece if any).
    #[inline]
    pub fn placed_piece(&self) -> PieceCode {
        match (self.promotion, self.mover()) {
            (Some(kind), Some(color)) => piece_code(color, kind),
            _ => self.piece_moved,
        }
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_victim(&self) -> Square {
        Square::new(self.from.row, self.to.col)
    }

    /// Algebraic notation without disambiguation: `Nf3`, `exd5`, `e8=Q`, `0-0`.
    pub fn notation(&self) -> String {
        if self.is_castle {
            return if self.to.col > self.from.col {
                "0-0".to_owned()
            } else {
                "0-0-0".to_owned()
            };
        }

        let mut out = String::with_capacity(6);
        match self.moved_kind() {
            Some(PieceKind::Pawn) | None => {
                if self.is_capture() {
                    out.push(char::from(b'a' + self.from.col as u8));
                }
            }
            Some(kind) => out.push(kind.letter()),
        }
        if self.is_capture() {
            out.push('x');
        }
        out.push_str(&square_to_algebraic(self.to));
        if let Some(kind) = self.promotion {
            out.push('=');
            out.push(kind.letter());
        }
        out
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id() == other.move_id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
