use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{CheckInfo, Pin};
use crate::moves::chess_move::Move;
use crate::moves::piece_directions::{negate, Direction};

/// Per-square generator signature; one entry per piece kind.
pub type PieceGenerator = fn(&GameState, Square, &CheckInfo, &mut Vec<Move>);

#[inline]
pub fn pin_direction(pins: &[Pin], square: Square) -> Option<Direction> {
    pins.iter()
        .find(|pin| pin.square == square)
        .map(|pin| pin.direction)
}

/// A pinned piece may travel along its pin axis in either sense.
#[inline]
pub fn allowed_by_pin(pin: Option<Direction>, direction: Direction) -> bool {
    match pin {
        None => true,
        Some(axis) => axis == direction || axis == negate(direction),
    }
}

#[inline]
pub fn is_enemy(game_state: &GameState, square: Square) -> bool {
    is_color(game_state.piece_at(square), game_state.side_to_move.opposite())
}

/// Walk each ray until the edge, a friendly piece (excluded) or an enemy
/// piece (included).
pub fn generate_sliding_moves(
    game_state: &GameState,
    from: Square,
    directions: &[Direction],
    info: &CheckInfo,
    out: &mut Vec<Move>,
) {
    let pin = pin_direction(&info.pins, from);
    for &direction in directions {
        if !allowed_by_pin(pin, direction) {
            continue;
        }
        let mut square = from;
        while let Some(next) = square.offset(direction.0, direction.1) {
            square = next;
            let code = game_state.piece_at(square);
            if code == EMPTY {
                out.push(Move::new(from, square, &game_state.board));
                continue;
            }
            if is_enemy(game_state, square) {
                out.push(Move::new(from, square, &game_state.board));
            }
            break;
        }
    }
}
