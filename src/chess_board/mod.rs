pub mod check;
pub mod error;
pub mod fen;
pub mod model;
pub mod move_generation;
pub mod moves;
pub use check::{is_checkmated, is_in_check};
pub use error::{BoardError, FenError, IllegalMove, MoveError};
pub use model::{name, Color, Coordinate, Entity, NameFormat, Piece, PieceType, Square};
pub use moves::{is_shape_legal, parse_notation, Move, Strategy};

mod chess_board;
#[cfg(test)]
mod proptests;
#[cfg(test)]
pub mod test_utils;
pub use chess_board::Board;
