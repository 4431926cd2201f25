use crate::game_state::draw_rules::halfmove_clock;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(game_state.castle_rights);
    let en_passant = game_state
        .en_passant_square
        .map_or_else(|| "-".to_owned(), square_to_algebraic);

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        halfmove_clock(game_state),
        game_state.fullmove_number()
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, cells) in board.iter().enumerate() {
        let mut empty_count = 0u8;

        for &code in cells {
            match piece_to_fen_char(code) {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(code: PieceCode) -> Option<char> {
    let letter = piece_kind(code)?.letter();
    match piece_color(code)? {
        Color::Light => Some(letter),
        Color::Dark => Some(letter.to_ascii_lowercase()),
    }
}

fn generate_castling_field(rights: CastleRights) -> String {
    let mut out = String::new();

    if rights.light_kingside {
        out.push('K');
    }
    if rights.light_queenside {
        out.push('Q');
    }
    if rights.dark_kingside {
        out.push('k');
    }
    if rights.dark_queenside {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::make_move;
    use crate::utils::fen_parser::parse_fen;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(generate_fen(&parsed), STARTING_POSITION_FEN);
    }

    #[test]
    fn set_up_positions_keep_their_clocks() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 37",
        ] {
            let parsed = parse_fen(fen).expect("FEN should parse");
            assert_eq!(generate_fen(&parsed), fen);
        }
    }

    #[test]
    fn clocks_and_en_passant_follow_played_moves() {
        let mut game = GameState::new_game();
        for text in ["e2e4", "g8f6", "g1f3"] {
            let mv = long_algebraic_to_move(&mut game, text).expect("move should be legal");
            make_move(&mut game, mv);
        }
        assert_eq!(
            generate_fen(&game),
            "rnbqkb1r/pppppppp/5n2/8/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 2 2"
        );

        let mut game = GameState::new_game();
        let mv = long_algebraic_to_move(&mut game, "d2d4").expect("move should be legal");
        make_move(&mut game, mv);
        assert_eq!(
            generate_fen(&game),
            "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq d3 0 1"
        );
    }
}
