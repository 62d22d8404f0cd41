//! Check and checkmate detection.
//!
//! Both probes copy the board, play the move on the copy and inspect the
//! result; the caller's board is never touched.

use super::moves::is_shape_legal;
use super::{Board, Color, Move, PieceType, Strategy};
use log::trace;

/// Whether `side`'s king is attacked once `mv` has been played on a copy of `board`.
pub fn is_in_check(board: &Board, mv: &Move, side: Color) -> bool {
    let simulated = board.simulate(mv);
    is_king_attacked(&simulated, side)
}

/// Whether `side` is checkmated once `mv` has been played on a copy of `board`.
///
/// Only king mobility is examined: blocking the attack or capturing the
/// attacker with another piece is not considered.
pub fn is_checkmated(board: &Board, mv: &Move, side: Color) -> bool {
    let simulated = board.simulate(mv);
    if !is_king_attacked(&simulated, side) {
        return false;
    }

    let king = simulated.find_king(side);
    let escape = PieceType::King.possible_moves(king).into_iter().find(|&to| {
        let strategy = match simulated.side_at(to) {
            Some(color) if color == side => return false,
            Some(_) => Strategy::Capture,
            None => Strategy::Normal,
        };
        let step = Move::synthetic(side, king, to, strategy);
        is_shape_legal(&simulated, PieceType::King, &step) && !is_in_check(&simulated, &step, side)
    });

    match escape {
        Some(to) => {
            trace!("{} king escapes to {}", side, to);
            false
        }
        None => true,
    }
}

/// Whether any enemy piece could capture `side`'s king on this board.
pub(crate) fn is_king_attacked(board: &Board, side: Color) -> bool {
    let king = board.find_king(side);
    board.pieces().filter(|(_, piece)| piece.color != side).any(|(field, piece)| {
        let attack = Move::synthetic(piece.color, field, king, Strategy::Capture);
        let attacks = is_shape_legal(board, piece.kind, &attack);
        if attacks {
            trace!("{} {} on {} attacks the king on {}", piece.color, piece.kind, field, king);
        }
        attacks
    })
}
