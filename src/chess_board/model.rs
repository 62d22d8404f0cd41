use super::error::{BoardError, MoveError};
use std::fmt;

pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White plays up the board towards row 0.
    pub fn pawn_direction(&self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_start_row(&self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row holding the king and rooks in the starting layout.
    pub fn home_row(&self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row on which a pawn of this color would promote.
    pub fn last_row(&self) -> u8 {
        self.opposite().home_row()
    }

    pub fn name(&self, format: NameFormat) -> &'static str {
        name((*self).into(), format)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name(NameFormat::Lower))
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
    ];

    pub fn name(&self, format: NameFormat) -> &'static str {
        name((*self).into(), format)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name(NameFormat::Verbose))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Self {
        Self { color, kind }
    }

    /// FEN letter of the piece, uppercase for White.
    pub fn to_char(&self) -> char {
        let symbol = self.kind.name(NameFormat::Symbol);
        let letter = symbol.chars().next().unwrap_or('?');
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    /// e.g. "white ○ Pawn"
    pub fn describe(&self) -> String {
        format!("{} {}", self.color.name(NameFormat::Verbose), self.kind.name(NameFormat::Verbose))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Occupied(Piece),
    Empty,
}

impl Square {
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }

    pub fn piece(&self) -> Option<Piece> {
        match self {
            Square::Occupied(piece) => Some(*piece),
            Square::Empty => None,
        }
    }

    /// Side owning the square, `None` for an empty one.
    pub fn color(&self) -> Option<Color> {
        self.piece().map(|p| p.color)
    }
}

/// A validated square of the board. Row 0 is rank 8, column 0 is file a.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    pub fn new(row: isize, col: isize) -> Result<Self, BoardError> {
        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(BoardError::OutOfRange { row, col })
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// The square `dr` rows and `dc` columns away, if it is still on the board.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Self> {
        Self::new(self.row as isize + dr, self.col as isize + dc).ok()
    }

    /// All 64 squares, row by row.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Coordinate { row, col }))
    }

    /// Parses a square like "e2": file a-h, rank 1-8.
    pub fn from_algebraic(square: &str) -> Result<Self, MoveError> {
        let mut chars = square.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
                let col = file as isize - 'a' as isize;
                let row = BOARD_SIZE as isize - (rank as isize - '0' as isize);
                Self::new(row, col).map_err(|_| MoveError::Syntax(square.to_string()))
            }
            _ => Err(MoveError::Syntax(square.to_string())),
        }
    }

    pub fn as_algebraic(&self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = BOARD_SIZE as u8 - self.row;
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_algebraic())
    }
}

/// How a side or a piece kind is spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameFormat {
    /// "white ○", "Knight"
    Verbose,
    /// "○", "N"
    Symbol,
    /// "WHITE", "KNIGHT"
    Upper,
    /// "white", "knight"
    Lower,
}

impl NameFormat {
    pub const ALL: [NameFormat; 4] = [NameFormat::Verbose, NameFormat::Symbol, NameFormat::Upper, NameFormat::Lower];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Color(Color),
    Piece(PieceType),
}

impl From<Color> for Entity {
    fn from(color: Color) -> Self {
        Entity::Color(color)
    }
}

impl From<PieceType> for Entity {
    fn from(kind: PieceType) -> Self {
        Entity::Piece(kind)
    }
}

/// The one naming table for sides and piece kinds.
pub fn name(entity: Entity, format: NameFormat) -> &'static str {
    use Entity::{Color as C, Piece as P};
    use NameFormat::*;
    match (entity, format) {
        (C(Color::White), Verbose) => "white ○",
        (C(Color::White), Symbol) => "○",
        (C(Color::White), Upper) => "WHITE",
        (C(Color::White), Lower) => "white",
        (C(Color::Black), Verbose) => "black ●",
        (C(Color::Black), Symbol) => "●",
        (C(Color::Black), Upper) => "BLACK",
        (C(Color::Black), Lower) => "black",

        (P(PieceType::Pawn), Verbose) => "Pawn",
        (P(PieceType::Pawn), Symbol) => "P",
        (P(PieceType::Pawn), Upper) => "PAWN",
        (P(PieceType::Pawn), Lower) => "pawn",
        (P(PieceType::Rook), Verbose) => "Rook",
        (P(PieceType::Rook), Symbol) => "R",
        (P(PieceType::Rook), Upper) => "ROOK",
        (P(PieceType::Rook), Lower) => "rook",
        (P(PieceType::Knight), Verbose) => "Knight",
        (P(PieceType::Knight), Symbol) => "N",
        (P(PieceType::Knight), Upper) => "KNIGHT",
        (P(PieceType::Knight), Lower) => "knight",
        (P(PieceType::Bishop), Verbose) => "Bishop",
        (P(PieceType::Bishop), Symbol) => "B",
        (P(PieceType::Bishop), Upper) => "BISHOP",
        (P(PieceType::Bishop), Lower) => "bishop",
        (P(PieceType::Queen), Verbose) => "Queen",
        (P(PieceType::Queen), Symbol) => "Q",
        (P(PieceType::Queen), Upper) => "QUEEN",
        (P(PieceType::Queen), Lower) => "queen",
        (P(PieceType::King), Verbose) => "King",
        (P(PieceType::King), Symbol) => "K",
        (P(PieceType::King), Upper) => "KING",
        (P(PieceType::King), Lower) => "king",
    }
}
