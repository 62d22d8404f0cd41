//! A running game: the live board, whose turn it is and whether the game has
//! ended. This is the only place where legal moves are executed.

pub mod cli;

use crate::chess_board::check::is_king_attacked;
use crate::chess_board::{
    is_checkmated, is_in_check, Board, Color, Coordinate, FenError, Move, MoveError, NameFormat, Piece, PieceType,
};
use log::info;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Checkmate { winner: Color },
    Resignation { winner: Color },
}

impl GameResult {
    pub fn winner(&self) -> Color {
        match self {
            GameResult::Checkmate { winner } | GameResult::Resignation { winner } => *winner,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Checkmate { winner } => write!(f, "checkmate! {} wins", winner.name(NameFormat::Verbose)),
            GameResult::Resignation { winner } => {
                write!(f, "{} resigns, {} wins", winner.opposite().name(NameFormat::Verbose), winner.name(NameFormat::Verbose))
            }
        }
    }
}

/// What a played move did to the opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub description: String,
    pub check: bool,
    pub checkmate: bool,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    over: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::starting(),
            turn: Color::White,
            over: None,
        }
    }

    /// A game from an arbitrary position.
    ///
    /// Each side needs exactly one king, and the side that is not to move may
    /// not be in check.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let (board, turn) = Board::from_fen(fen)?;
        for color in [Color::White, Color::Black] {
            let found = board.count(Piece::new(color, PieceType::King));
            if found != 1 {
                return Err(FenError::KingCount {
                    color: color.name(NameFormat::Lower),
                    found,
                });
            }
        }
        if is_king_attacked(&board, turn.opposite()) {
            return Err(FenError::OpponentInCheck(turn.opposite().name(NameFormat::Lower)));
        }
        Ok(Self { board, turn, over: None })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn result(&self) -> Option<GameResult> {
        self.over
    }

    pub fn is_over(&self) -> bool {
        self.over.is_some()
    }

    pub fn to_fen(&self) -> String {
        self.board.to_fen(self.turn)
    }

    /// Validates `notation` for the side to move, reports check and checkmate
    /// for the opponent, then executes the move and passes the turn.
    pub fn play(&mut self, notation: &str) -> Result<MoveOutcome, MoveError> {
        if self.over.is_some() {
            return Err(MoveError::GameOver);
        }

        let (mv, description) = Move::new(&self.board, self.turn, notation)?;
        let opponent = self.turn.opposite();
        let check = is_in_check(&self.board, &mv, opponent);
        let checkmate = check && is_checkmated(&self.board, &mv, opponent);

        self.board.execute(&mv);
        if checkmate {
            let result = GameResult::Checkmate { winner: self.turn };
            info!("{}", result);
            self.over = Some(result);
        }
        self.turn = opponent;

        Ok(MoveOutcome {
            mv,
            description,
            check,
            checkmate,
        })
    }

    /// The side to move gives up.
    pub fn resign(&mut self) -> Result<GameResult, MoveError> {
        if self.over.is_some() {
            return Err(MoveError::GameOver);
        }
        let result = GameResult::Resignation {
            winner: self.turn.opposite(),
        };
        info!("{}", result);
        self.over = Some(result);
        Ok(result)
    }

    /// Squares the piece on `from` may legally move to. Empty when `from` does
    /// not hold a piece of the side to move.
    pub fn legal_destinations(&self, from: Coordinate) -> Vec<Coordinate> {
        let Some(piece) = self.board.decode_square(from).piece() else {
            return Vec::new();
        };
        if piece.color != self.turn {
            return Vec::new();
        }
        let mut destinations: Vec<Coordinate> = piece
            .kind
            .possible_moves(from)
            .into_iter()
            .filter(|to| Move::new(&self.board, self.turn, &format!("{} {}", from, to)).is_ok())
            .collect();
        destinations.sort_by_key(|to| (to.col(), std::cmp::Reverse(to.row())));
        destinations.dedup();
        destinations
    }
}

/// Accepts the compact form "e2e4" besides "e2 e4". Anything else is passed
/// through trimmed and left for the engine to reject.
pub fn expand_notation(input: &str) -> String {
    let input = input.trim();
    let compact = match input.as_bytes() {
        [file1, rank1, file2, rank2] => {
            file1.is_ascii_alphabetic() && rank1.is_ascii_digit() && file2.is_ascii_alphabetic() && rank2.is_ascii_digit()
        }
        _ => false,
    };
    if compact {
        format!("{} {}", &input[..2], &input[2..])
    } else {
        input.to_string()
    }
}
