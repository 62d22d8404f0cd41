use super::fen::{self, INITIAL_POSITION};
use super::model::BOARD_SIZE;
use super::{Color, Coordinate, Move, NameFormat, Piece, PieceType, Square};
use lazy_static::lazy_static;
use log::trace;

lazy_static! {
    static ref STARTING_BOARD: Board = fen::from_fen(INITIAL_POSITION)
        .map(|(board, _)| board)
        .expect("standard starting position is valid FEN");
}

/// The 8x8 grid. Row 0 is Black's back rank, row 7 is White's.
///
/// The board is `Copy` so that simulations work on a stack-local copy and never
/// touch the authoritative board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates a board without any piece on it
    pub fn empty() -> Self {
        Self {
            squares: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a board holding the standard starting layout
    pub fn starting() -> Self {
        *STARTING_BOARD
    }

    /// Resets the board to the standard starting layout.
    pub fn init(&mut self) {
        *self = *STARTING_BOARD;
    }

    pub fn from_fen(fen: &str) -> Result<(Self, Color), super::FenError> {
        fen::from_fen(fen)
    }

    pub fn to_fen(&self, active_color: Color) -> String {
        fen::to_fen(self, active_color)
    }

    /// Content of a square. This is the only place where cells are decoded.
    pub fn decode_square(&self, field: Coordinate) -> Square {
        self.squares[field.row() as usize][field.col() as usize]
    }

    pub fn side_at(&self, field: Coordinate) -> Option<Color> {
        self.decode_square(field).color()
    }

    pub fn is_empty(&self, field: Coordinate) -> bool {
        self.decode_square(field).is_empty()
    }

    pub fn place(&mut self, field: Coordinate, square: Square) {
        self.squares[field.row() as usize][field.col() as usize] = square;
    }

    /// Moves whatever stands on the origin to the destination and clears the origin.
    /// No rule is checked here.
    pub fn execute(&mut self, mv: &Move) {
        let moving = self.decode_square(mv.from);
        trace!("executing {} ({:?})", mv.as_notation(), moving);
        self.place(mv.to, moving);
        self.place(mv.from, Square::Empty);
    }

    /// A copy of the board with `mv` executed on it.
    pub fn simulate(&self, mv: &Move) -> Board {
        let mut simulated = *self;
        simulated.execute(mv);
        simulated
    }

    /// Location of the king of `color`.
    ///
    /// # Panics
    ///
    /// A position without that king breaks the engine's preconditions and panics.
    pub fn find_king(&self, color: Color) -> Coordinate {
        let king = Piece::new(color, PieceType::King);
        match self.pieces().find(|(_, piece)| *piece == king) {
            Some((field, _)) => field,
            None => panic!("no {} king on the board", color),
        }
    }

    /// Returns an iterator over all pieces on the board along with their coordinates.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(move |field| self.decode_square(field).piece().map(|piece| (field, piece)))
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|(_, p)| *p == piece).count()
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in 0..BOARD_SIZE {
            let rank = BOARD_SIZE - row;
            board_representation.push_str(&format!("{} │", rank));
            for col in 0..BOARD_SIZE {
                let square = match &self.squares[row][col] {
                    Square::Empty => ' ',
                    Square::Occupied(piece) => piece.to_char(),
                };
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", rank));

            if row < BOARD_SIZE - 1 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str(&format!(
            "    uppercase: {}   lowercase: {}\n",
            Color::White.name(NameFormat::Verbose),
            Color::Black.name(NameFormat::Verbose)
        ));

        board_representation
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::field;
    use super::super::Strategy;
    use super::*;

    #[test]
    fn test_init_layout() {
        let mut board = Board::empty();
        board.init();
        assert_eq!(board, Board::starting());

        for col in 0..8 {
            assert_eq!(
                board.decode_square(Coordinate::new(6, col).unwrap()),
                Square::Occupied(Piece::new(Color::White, PieceType::Pawn))
            );
            assert_eq!(
                board.decode_square(Coordinate::new(1, col).unwrap()),
                Square::Occupied(Piece::new(Color::Black, PieceType::Pawn))
            );
            for row in 2..6 {
                assert!(board.is_empty(Coordinate::new(row, col).unwrap()));
            }
        }
        assert_eq!(board.decode_square(field("e1")), Square::Occupied(Piece::new(Color::White, PieceType::King)));
        assert_eq!(board.decode_square(field("d8")), Square::Occupied(Piece::new(Color::Black, PieceType::Queen)));
        assert_eq!(board.decode_square(field("b1")), Square::Occupied(Piece::new(Color::White, PieceType::Knight)));
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn test_init_resets_a_played_board() {
        let mut board = Board::starting();
        board.execute(&Move::synthetic(Color::White, field("e2"), field("e4"), Strategy::Normal));
        assert_ne!(board, Board::starting());
        board.init();
        assert_eq!(board, Board::starting());
    }

    #[test]
    fn test_execute_moves_piece() {
        let mut board = Board::starting();
        board.execute(&Move::synthetic(Color::White, field("e2"), field("e4"), Strategy::Normal));
        assert!(board.is_empty(field("e2")));
        assert_eq!(board.decode_square(field("e4")), Square::Occupied(Piece::new(Color::White, PieceType::Pawn)));
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn test_execute_capture_replaces_piece() {
        let (mut board, _) = Board::from_fen("4k3/8/8/p7/8/8/8/R3K3 w - - 0 1").unwrap();
        board.execute(&Move::synthetic(Color::White, field("a1"), field("a5"), Strategy::Capture));
        assert_eq!(board.side_at(field("a5")), Some(Color::White));
        assert_eq!(board.side_at(field("a1")), None);
        assert_eq!(board.count(Piece::new(Color::Black, PieceType::Pawn)), 0);
    }

    #[test]
    fn test_simulate_leaves_original_untouched() {
        let board = Board::starting();
        let simulated = board.simulate(&Move::synthetic(Color::White, field("g1"), field("f3"), Strategy::Normal));
        assert_eq!(board, Board::starting());
        assert!(simulated.is_empty(field("g1")));
        assert_eq!(simulated.side_at(field("f3")), Some(Color::White));
    }

    #[test]
    fn test_find_king() {
        let board = Board::starting();
        assert_eq!(board.find_king(Color::White), field("e1"));
        assert_eq!(board.find_king(Color::Black), field("e8"));
    }

    #[test]
    #[should_panic(expected = "no black king")]
    fn test_find_missing_king_panics() {
        let (board, _) = Board::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        board.find_king(Color::Black);
    }

    #[test]
    fn test_render() {
        let rendered = Board::starting().render_to_string();
        assert!(rendered.contains("8 │ r │ n │ b │ q │ k │ b │ n │ r │ 8"));
        assert!(rendered.contains("1 │ R │ N │ B │ Q │ K │ B │ N │ R │ 1"));
        assert!(rendered.contains("4 │   │   │   │   │   │   │   │   │ 4"));
    }
}
