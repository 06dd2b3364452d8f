//! Material-count evaluation.

use cozy_chess::{Board, Color, Piece};

/// Classic point values, matching [`SCORED_PIECES`] by index.
const PIECE_VALUES: [i32; 5] = [1, 3, 3, 5, 9];

/// Piece kinds that contribute to the count. Kings never leave the board,
/// so they carry no score; mate detection is the rules engine's job.
const SCORED_PIECES: [Piece; 5] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
];

/// Material balance of `board` from White's point of view.
///
/// Positive means White is ahead, independent of whose turn it is. The
/// score is the weighted piece-count difference and nothing else.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0i32;
    for (piece, value) in SCORED_PIECES.into_iter().zip(PIECE_VALUES) {
        let white = board.colored_pieces(Color::White, piece).len() as i32;
        let black = board.colored_pieces(Color::Black, piece).len() as i32;
        score += value * (white - black);
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
