use super::*;

fn board(fen: &str) -> Board {
    fen.parse().unwrap()
}

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

#[test]
fn long_form_is_coordinate_text() {
    assert_eq!(long_form(mv("e2e4")), "e2e4");
    assert_eq!(long_form(mv("g1f3")), "g1f3");
    assert_eq!(long_form(mv("e7e8q")), "e7e8q");
}

#[test]
fn pawn_pushes_and_piece_moves() {
    let start = Board::default();
    assert_eq!(short_form(&start, mv("e2e4")), "e4");
    assert_eq!(short_form(&start, mv("g1f3")), "Nf3");
}

#[test]
fn captures_are_marked() {
    // After 1. e4 d5, the e-pawn can take on d5.
    let b = board("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2");
    assert_eq!(short_form(&b, mv("e4d5")), "exd5");
}

#[test]
fn promotion_spells_out_the_piece() {
    let b = board("8/4P3/8/8/8/8/2k5/K7 w - - 0 1");
    assert_eq!(short_form(&b, mv("e7e8q")), "e8=Q");
    assert_eq!(short_form(&b, mv("e7e8n")), "e8=N");
}

#[test]
fn castling_prints_as_o_o() {
    let b = board("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
    assert_eq!(short_form(&b, mv("e1h1")), "O-O");
    assert_eq!(short_form(&b, mv("e1a1")), "O-O-O");
}

#[test]
fn twin_knights_disambiguate_by_file() {
    // Knights on a1 and c1 can both reach b3.
    let b = board("k7/8/8/8/8/8/8/N1N4K w - - 0 1");
    assert_eq!(short_form(&b, mv("a1b3")), "Nab3");
    assert_eq!(short_form(&b, mv("c1b3")), "Ncb3");
}

#[test]
fn stacked_rooks_disambiguate_by_rank() {
    // Rooks on a1 and a5 can both reach a3.
    let b = board("1k6/8/8/R7/8/8/8/R6K w - - 0 1");
    assert_eq!(short_form(&b, mv("a1a3")), "R1a3");
    assert_eq!(short_form(&b, mv("a5a3")), "R5a3");
}

#[test]
fn check_and_mate_suffixes() {
    let mate = board("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    assert_eq!(short_form(&mate, mv("e1e8")), "Qe8#");

    let check = board("4k3/8/8/8/8/8/8/3Q2K1 w - - 0 1");
    assert_eq!(short_form(&check, mv("d1e2")), "Qe2+");
}

#[test]
fn moves_without_a_piece_fall_back_to_coordinates() {
    assert_eq!(short_form(&Board::default(), mv("e5e6")), "e5e6");
}
