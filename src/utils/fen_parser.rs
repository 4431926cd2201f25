//! FEN-to-GameState parser.
//!
//! Builds a mailbox state from a Forsyth-Edwards Notation string: grid,
//! side to move, castle rights, en-passant target and both clocks.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castle_rights = parse_castling_rights(castling_part)?;
    let en_passant_square = parse_en_passant_square(en_passant_part)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid fullmove number: {fullmove_part}")))?;

    Ok(GameState::from_parts(
        board,
        side_to_move,
        castle_rights,
        en_passant_square,
        halfmove_clock,
        fullmove_number.max(1),
    ))
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = [[EMPTY; 8]; 8];
    let mut kings = [0usize; 2];

    // FEN lists the eighth rank first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            if col >= 8 {
                return Err(invalid("board rank has too many files"));
            }
            if kind == PieceKind::King {
                kings[color.index()] += 1;
            }

            board[row][col] = piece_code(color, kind);
            col += 1;
        }

        if col != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    if kings != [1, 1] {
        return Err(invalid("each side needs exactly one king"));
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastleRights> {
    let mut rights = CastleRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.light_kingside = true,
            'Q' => rights.light_queenside = true,
            'k' => rights.dark_kingside = true,
            'q' => rights.dark_queenside = true,
            _ => return Err(invalid(&format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(&format!("invalid en-passant square: {en_passant_part}")))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    PieceKind::from_letter(ch).map(|kind| (color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::{STARTING_BOARD, STARTING_POSITION_FEN};
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen_matches_starting_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.board, STARTING_BOARD);
        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.castle_rights, CastleRights::ALL);
        assert_eq!(game_state.king_square(Color::Dark), Square::new(0, 4));
        assert_eq!(game_state.fullmove_number(), 1);
    }

    #[test]
    fn parse_reads_en_passant_and_clocks() {
        let game_state = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 7 31").expect("FEN should parse");
        assert_eq!(game_state.en_passant_square, Some(Square::new(2, 3)));
        assert_eq!(game_state.castle_rights, CastleRights::NONE);
        assert_eq!(game_state.initial_halfmove_clock, 7);
        assert_eq!(game_state.fullmove_number(), 31);
    }

    #[test]
    fn malformed_fen_is_rejected() {
        for fen in [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkz - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
        ] {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }
    }

    #[test]
    fn positions_without_both_kings_are_rejected() {
        assert!(parse_fen("8/8/8/8/8/8/4P3/4K3 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1").is_err());
    }
}
