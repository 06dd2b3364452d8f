//! Textual move notation.
//!
//! `cozy_chess` prints moves in raw coordinate form only, so the short
//! algebraic writer lives here. Both forms double as deterministic sort
//! keys for the ordering selectors.

use cozy_chess::{Board, File, Move, Piece, Rank};

use crate::rules::{apply, legal_moves};

/// Canonical long-form (coordinate) notation, e.g. `e2e4` or `e7e8q`.
///
/// Castling keeps the engine's king-takes-rook encoding, so white short
/// castling prints as `e1h1`.
pub fn long_form(mv: Move) -> String {
    let mut text = format!("{}{}", mv.from, mv.to);
    if let Some(promo) = mv.promotion {
        text.push(piece_char(promo));
    }
    text
}

/// Short algebraic notation, e.g. `Nf3`, `exd5`, `O-O` or `e8=Q#`.
///
/// `mv` must be legal in `board`; a move that does not start on a piece
/// falls back to its coordinate text.
pub fn short_form(board: &Board, mv: Move) -> String {
    let side = board.side_to_move();
    let piece = match board.piece_on(mv.from) {
        Some(piece) => piece,
        None => return long_form(mv),
    };

    // Castling is the one case where the destination holds our own piece.
    if piece == Piece::King && board.colors(side).has(mv.to) {
        let castle = if (mv.to.file() as u8) > (mv.from.file() as u8) {
            "O-O"
        } else {
            "O-O-O"
        };
        return format!("{}{}", castle, suffix(board, mv));
    }

    let capture = board.colors(!side).has(mv.to)
        || (piece == Piece::Pawn && mv.from.file() != mv.to.file());

    let mut text = String::new();
    if piece == Piece::Pawn {
        if capture {
            text.push(file_char(mv.from.file()));
            text.push('x');
        }
        text.push_str(&mv.to.to_string());
        if let Some(promo) = mv.promotion {
            text.push('=');
            text.push(piece_char(promo).to_ascii_uppercase());
        }
    } else {
        text.push(piece_char(piece).to_ascii_uppercase());
        text.push_str(&disambiguation(board, mv, piece));
        if capture {
            text.push('x');
        }
        text.push_str(&mv.to.to_string());
    }
    text.push_str(suffix(board, mv));
    text
}

/// Which part of the origin square is needed to tell `mv` apart from other
/// legal moves of the same piece kind to the same destination.
fn disambiguation(board: &Board, mv: Move, piece: Piece) -> String {
    let rivals: Vec<Move> = legal_moves(board)
        .into_iter()
        .filter(|other| {
            other.to == mv.to
                && other.from != mv.from
                && board.piece_on(other.from) == Some(piece)
        })
        .collect();
    if rivals.is_empty() {
        return String::new();
    }
    let file_taken = rivals.iter().any(|other| other.from.file() == mv.from.file());
    let rank_taken = rivals.iter().any(|other| other.from.rank() == mv.from.rank());
    if !file_taken {
        file_char(mv.from.file()).to_string()
    } else if !rank_taken {
        rank_char(mv.from.rank()).to_string()
    } else {
        mv.from.to_string()
    }
}

/// `+` for check, `#` for mate, nothing otherwise.
fn suffix(board: &Board, mv: Move) -> &'static str {
    let next = apply(board, mv);
    if next.checkers().is_empty() {
        ""
    } else if legal_moves(&next).is_empty() {
        "#"
    } else {
        "+"
    }
}

fn piece_char(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    }
}

fn file_char(file: File) -> char {
    (b'a' + file as u8) as char
}

fn rank_char(rank: Rank) -> char {
    (b'1' + rank as u8) as char
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
