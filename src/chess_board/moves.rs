use super::check::is_in_check;
use super::move_generation::{BISHOP_DIRECTIONS, KING_MOVES, KNIGHT_MOVES, ROOK_DIRECTIONS};
use super::{Board, Color, Coordinate, IllegalMove, MoveError, NameFormat, PieceType, Square};
use log::debug;
use std::fmt;

/// What kind of move a request is, fixed when the move is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// to an empty square
    Normal,
    /// onto an enemy piece
    Capture,
    Castling,
    EnPassant,
    Promotion,
    /// Reserved, never produced by classification.
    Stalemate,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Normal => write!(f, "normal move"),
            Strategy::Capture => write!(f, "capture"),
            Strategy::Castling => write!(f, "castling"),
            Strategy::EnPassant => write!(f, "en passant"),
            Strategy::Promotion => write!(f, "promotion"),
            Strategy::Stalemate => write!(f, "stalemate"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Move {
    pub side: Color,
    pub from: Coordinate,
    pub to: Coordinate,
    pub strategy: Strategy,
}

impl Move {
    /// Parses `notation` ("e2 e4") and runs it through the legality gate for
    /// `side` on `board`.
    ///
    /// Returns the move together with a human readable description. The board
    /// is never modified.
    pub fn new(board: &Board, side: Color, notation: &str) -> Result<(Self, String), MoveError> {
        let (from, to) = parse_notation(notation)?;
        let mv = Move {
            side,
            from,
            to,
            strategy: classify(board, side, from, to),
        };
        mv.check_legality(board).map_err(|reason| {
            debug!("{} rejected for {}: {}", mv.as_notation(), side, reason.reason());
            reason
        })?;
        let description = mv.describe(board);
        Ok((mv, description))
    }

    /// Builds a move without any validation. Used for hypothetical attacks and
    /// king steps while probing for check.
    pub fn synthetic(side: Color, from: Coordinate, to: Coordinate, strategy: Strategy) -> Self {
        Move { side, from, to, strategy }
    }

    pub fn as_notation(&self) -> String {
        format!("{} {}", self.from, self.to)
    }

    /// The legality gate. Checks run in a fixed order and the first failure wins.
    fn check_legality(&self, board: &Board) -> Result<(), IllegalMove> {
        if self.from == self.to {
            return Err(IllegalMove::IllegalShape);
        }
        let piece = board.decode_square(self.from).piece().ok_or(IllegalMove::EmptyOrigin)?;
        if piece.color != self.side {
            return Err(IllegalMove::WrongTurn);
        }
        if board.side_at(self.to) == Some(self.side) {
            return Err(IllegalMove::SameColorDestination);
        }
        if !matches!(self.strategy, Strategy::Normal | Strategy::Capture) {
            return Err(IllegalMove::Unsupported(self.strategy));
        }
        if !is_shape_legal(board, piece.kind, self) {
            return Err(IllegalMove::IllegalShape);
        }
        if is_in_check(board, self, self.side) {
            return Err(IllegalMove::LeavesMoverInCheck);
        }
        Ok(())
    }

    fn describe(&self, board: &Board) -> String {
        let mover = match board.decode_square(self.from) {
            Square::Occupied(piece) => piece.describe(),
            Square::Empty => self.side.name(NameFormat::Verbose).to_string(),
        };
        match board.decode_square(self.to) {
            Square::Occupied(captured) => format!("{} captured {} at {}", mover, captured.describe(), self.to),
            Square::Empty => format!("{} moved to {}", mover, self.to),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_notation())
    }
}

/// Splits "e2 e4" into origin and destination.
pub fn parse_notation(notation: &str) -> Result<(Coordinate, Coordinate), MoveError> {
    let words: Vec<&str> = notation.split_whitespace().collect();
    match words.as_slice() {
        [before, after] => {
            let syntax_error = |_| MoveError::Syntax(notation.to_string());
            Ok((
                Coordinate::from_algebraic(before).map_err(syntax_error)?,
                Coordinate::from_algebraic(after).map_err(syntax_error)?,
            ))
        }
        _ => Err(MoveError::Syntax(notation.to_string())),
    }
}

/// Classifies a request from the board as it is before the move.
///
/// A friendly destination is classified as `Normal`; the gate rejects it later.
fn classify(board: &Board, side: Color, from: Coordinate, to: Coordinate) -> Strategy {
    let direction = side.pawn_direction();
    let row_delta = to.row() as isize - from.row() as isize;
    let col_delta = to.col() as isize - from.col() as isize;

    if let Some(mover) = board.decode_square(from).piece().filter(|p| p.color == side) {
        match mover.kind {
            PieceType::King if from.row() == side.home_row() && from.col() == 4 && row_delta == 0 && col_delta.abs() == 2 => {
                return Strategy::Castling;
            }
            PieceType::Pawn if row_delta == direction && to.row() == side.last_row() => {
                let advances = col_delta == 0 && board.is_empty(to);
                let takes = col_delta.abs() == 1 && board.side_at(to) == Some(side.opposite());
                if advances || takes {
                    return Strategy::Promotion;
                }
            }
            PieceType::Pawn if row_delta == direction && col_delta.abs() == 1 && board.is_empty(to) => {
                let fifth_row = side.pawn_start_row() as isize + 3 * direction;
                let passed = board.decode_square(Coordinate::new(from.row() as isize, to.col() as isize).unwrap_or(to));
                let beside_enemy_pawn = matches!(passed.piece(), Some(p) if p.kind == PieceType::Pawn && p.color != side);
                if from.row() as isize == fifth_row && beside_enemy_pawn {
                    return Strategy::EnPassant;
                }
            }
            _ => {}
        }
    }

    match board.side_at(to) {
        Some(color) if color != side => Strategy::Capture,
        _ => Strategy::Normal,
    }
}

/// Whether the piece kind may travel from `mv.from` to `mv.to` under the
/// move's strategy on this board. Turn order and check are not considered.
pub fn is_shape_legal(board: &Board, kind: PieceType, mv: &Move) -> bool {
    match kind {
        PieceType::Rook => is_rook_move_valid(board, mv),
        PieceType::Bishop => is_bishop_move_valid(board, mv),
        PieceType::Queen => is_rook_move_valid(board, mv) || is_bishop_move_valid(board, mv),
        PieceType::Knight => is_single_hop_valid(mv, &KNIGHT_MOVES),
        PieceType::King => is_single_hop_valid(mv, &KING_MOVES),
        PieceType::Pawn => is_pawn_move_valid(board, mv),
    }
}

fn is_rook_move_valid(board: &Board, mv: &Move) -> bool {
    walk_rays(board, mv, &ROOK_DIRECTIONS)
}

fn is_bishop_move_valid(board: &Board, mv: &Move) -> bool {
    walk_rays(board, mv, &BISHOP_DIRECTIONS)
}

/// Steps outward along each direction until the board edge or the first
/// occupied square.
///
/// A normal move needs every stepped square up to the destination to be empty.
/// A capture succeeds only if the first occupied square is the destination.
fn walk_rays(board: &Board, mv: &Move, directions: &[(isize, isize)]) -> bool {
    for &(dr, dc) in directions {
        let mut current = mv.from;
        while let Some(next) = current.offset(dr, dc) {
            let occupied = !board.is_empty(next);
            match mv.strategy {
                Strategy::Normal => {
                    if occupied {
                        break; // path is not clear
                    }
                    if next == mv.to {
                        return true;
                    }
                }
                Strategy::Capture => {
                    if occupied {
                        if next == mv.to {
                            return true;
                        }
                        break;
                    }
                }
                _ => return false,
            }
            current = next;
        }
    }
    false
}

/// Knights and kings jump to one of their fixed offsets and cannot be blocked.
fn is_single_hop_valid(mv: &Move, offsets: &[(isize, isize)]) -> bool {
    matches!(mv.strategy, Strategy::Normal | Strategy::Capture)
        && offsets.iter().any(|&(dr, dc)| mv.from.offset(dr, dc) == Some(mv.to))
}

fn is_pawn_move_valid(board: &Board, mv: &Move) -> bool {
    let direction = mv.side.pawn_direction();
    let row_delta = mv.to.row() as isize - mv.from.row() as isize;
    let col_delta = mv.to.col() as isize - mv.from.col() as isize;

    match mv.strategy {
        Strategy::Normal => {
            if col_delta != 0 {
                return false;
            }
            if row_delta == direction {
                return true;
            }
            // double step from the starting rank over an empty square
            row_delta == 2 * direction
                && mv.from.row() == mv.side.pawn_start_row()
                && mv.from.offset(direction, 0).is_some_and(|middle| board.is_empty(middle))
        }
        Strategy::Capture => row_delta == direction && col_delta.abs() == 1,
        _ => false,
    }
}
