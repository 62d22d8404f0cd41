//! Move legality, check and checkmate detection on an 8x8 chess board.

pub mod chess_board;
pub mod game;

pub use chess_board::{Board, Color, Coordinate, Move, MoveError, PieceType, Strategy};
pub use game::{Game, GameResult, MoveOutcome};
