//! Direction and offset tables indexed by piece kind.

use crate::game_state::chess_types::PieceKind;

/// Row/column step.
pub type Direction = (i8, i8);

pub const ORTHOGONAL: [Direction; 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

pub const DIAGONAL: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal rays first, then diagonal. Check detection relies on this split.
pub const ALL_RAYS: [Direction; 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

pub const KING_OFFSETS: [Direction; 8] = ALL_RAYS;

/// Ray directions for sliders; empty for stepping pieces and pawns.
pub const fn sliding_directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Rook => &ORTHOGONAL,
        PieceKind::Bishop => &DIAGONAL,
        PieceKind::Queen => &ALL_RAYS,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
    }
}

#[inline]
pub const fn is_orthogonal(direction: Direction) -> bool {
    direction.0 == 0 || direction.1 == 0
}

#[inline]
pub const fn negate(direction: Direction) -> Direction {
    (-direction.0, -direction.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_tables_match_piece_kind() {
        assert_eq!(sliding_directions(PieceKind::Rook).len(), 4);
        assert!(sliding_directions(PieceKind::Rook).iter().all(|d| is_orthogonal(*d)));
        assert!(sliding_directions(PieceKind::Bishop).iter().all(|d| !is_orthogonal(*d)));
        assert_eq!(sliding_directions(PieceKind::Queen).len(), 8);
        assert!(sliding_directions(PieceKind::Knight).is_empty());
    }
}
