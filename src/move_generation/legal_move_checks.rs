//! Check, pin and attacked-square detection.
//!
//! Rays are walked outward from the king. The first friendly piece on a ray is
//! a pin candidate; an enemy slider (or adjacent pawn/king) behind it pins it,
//! and with nothing in between it gives check. Knights are tested through the
//! offset table and only ever check.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::piece_directions::{is_orthogonal, Direction, ALL_RAYS, KNIGHT_OFFSETS};

/// A friendly piece that may only move along `direction` (or its negation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: Direction,
}

/// An enemy piece giving check. `direction` points from the king toward it
/// (for knights it is the knight offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckInfo {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

/// Whether an enemy `kind` found `distance` squares away along `direction`
/// attacks the ray's origin.
#[inline]
fn attacks_along_ray(kind: PieceKind, direction: Direction, distance: u8, attacker: Color) -> bool {
    match kind {
        PieceKind::Rook => is_orthogonal(direction),
        PieceKind::Bishop => !is_orthogonal(direction),
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        PieceKind::Pawn => {
            distance == 1 && direction.1 != 0 && direction.0 == -attacker.pawn_direction()
        }
        PieceKind::Knight => false,
    }
}

/// Checks and pins against the `color` king standing on `king`.
///
/// `king` need not be the king's current square: king moves are validated by
/// passing the destination. The king's own square is treated as empty so a
/// king stepping back along a checking ray is still seen as in check.
pub fn pins_and_checks(board: &Board, king: Square, color: Color) -> CheckInfo {
    let enemy = color.opposite();
    let mut info = CheckInfo::default();

    for direction in ALL_RAYS {
        let mut possible_pin: Option<Pin> = None;
        let mut square = king;
        let mut distance = 0u8;

        while let Some(next) = square.offset(direction.0, direction.1) {
            square = next;
            distance += 1;
            let code = board[square.row as usize][square.col as usize];
            let Some(kind) = piece_kind(code) else {
                continue;
            };

            if is_color(code, color) {
                if kind == PieceKind::King {
                    continue;
                }
                if possible_pin.is_none() {
                    possible_pin = Some(Pin { square, direction });
                    continue;
                }
                break;
            }

            if attacks_along_ray(kind, direction, distance, enemy) {
                match possible_pin {
                    None => {
                        info.in_check = true;
                        info.checks.push(Check { square, direction });
                    }
                    Some(pin) => info.pins.push(pin),
                }
            }
            break;
        }
    }

    let enemy_knight = piece_code(enemy, PieceKind::Knight);
    for offset in KNIGHT_OFFSETS {
        if let Some(square) = king.offset(offset.0, offset.1) {
            if board[square.row as usize][square.col as usize] == enemy_knight {
                info.in_check = true;
                info.checks.push(Check {
                    square,
                    direction: offset,
                });
            }
        }
    }

    info
}

/// Whether `square` is attacked by any `attacker` piece. Every piece blocks rays.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    for direction in ALL_RAYS {
        let mut current = square;
        let mut distance = 0u8;
        while let Some(next) = current.offset(direction.0, direction.1) {
            current = next;
            distance += 1;
            let code = board[current.row as usize][current.col as usize];
            let Some(kind) = piece_kind(code) else {
                continue;
            };
            if is_color(code, attacker) && attacks_along_ray(kind, direction, distance, attacker) {
                return true;
            }
            break;
        }
    }

    let attacker_knight = piece_code(attacker, PieceKind::Knight);
    KNIGHT_OFFSETS.iter().any(|offset| {
        square
            .offset(offset.0, offset.1)
            .is_some_and(|sq| board[sq.row as usize][sq.col as usize] == attacker_knight)
    })
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(&game_state.board, game_state.king_square(color), color.opposite())
}

/// Squares a non-king move may land on to resolve `check`: the checker's
/// square, plus the squares between it and the king for sliders.
pub fn blocking_squares(board: &Board, king: Square, check: Check) -> Vec<Square> {
    let checker = board[check.square.row as usize][check.square.col as usize];
    if piece_kind(checker) == Some(PieceKind::Knight) {
        return vec![check.square];
    }

    let mut squares = Vec::with_capacity(7);
    let mut square = king;
    while let Some(next) = square.offset(check.direction.0, check.direction.1) {
        square = next;
        squares.push(square);
        if square == check.square {
            break;
        }
    }
    squares
}
