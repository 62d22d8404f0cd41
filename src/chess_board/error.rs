use super::Strategy;
use thiserror::Error;

/// Raised when a row/column pair does not name a square of the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("location ({row}:{col}) is outside the board")]
    OutOfRange { row: isize, col: isize },
}

/// The reason a syntactically valid move was refused by the legality gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("there is no piece on the origin square")]
    EmptyOrigin,
    #[error("the piece on the origin square belongs to the opponent")]
    WrongTurn,
    #[error("the destination square holds a piece of the same color")]
    SameColorDestination,
    #[error("the piece cannot move that way")]
    IllegalShape,
    #[error("the move would leave the mover's king in check")]
    LeavesMoverInCheck,
    #[error("{0} is not supported")]
    Unsupported(Strategy),
}

impl IllegalMove {
    /// Stable tag for the rejection, as reported to front ends.
    pub fn reason(&self) -> &'static str {
        match self {
            IllegalMove::EmptyOrigin => "empty-origin",
            IllegalMove::WrongTurn => "wrong-turn",
            IllegalMove::SameColorDestination => "same-color-destination",
            IllegalMove::IllegalShape => "illegal-shape",
            IllegalMove::LeavesMoverInCheck => "leaves-mover-in-check",
            IllegalMove::Unsupported(_) => "unsupported",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("invalid move syntax '{0}', expected two squares such as \"e2 e4\"")]
    Syntax(String),
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),
    #[error("the game is already over")]
    GameOver,
}

impl MoveError {
    pub fn reason(&self) -> &'static str {
        match self {
            MoveError::Syntax(_) => "invalid-syntax",
            MoveError::Illegal(illegal) => illegal.reason(),
            MoveError::GameOver => "game-over",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("invalid FEN string: piece placement is missing")]
    Empty,
    #[error("invalid FEN string: expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("invalid FEN string: too many squares in row {0}")]
    TooManyColumns(usize),
    #[error("invalid FEN string: too few squares in row {0}")]
    TooFewColumns(usize),
    #[error("invalid piece character in FEN string: {0}")]
    InvalidPiece(char),
    #[error("invalid FEN string: invalid active color '{0}'")]
    InvalidActiveColor(String),
    #[error("position must hold exactly one {color} king, found {found}")]
    KingCount { color: &'static str, found: usize },
    #[error("the {0} king is in check although it is not {0}'s turn")]
    OpponentInCheck(&'static str),
}
