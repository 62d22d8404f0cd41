use super::model::BOARD_SIZE;
use super::{Board, Color, Coordinate, FenError, Piece, PieceType, Square};

pub const INITIAL_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Parses the piece placement and the active color of a FEN string.
///
/// Castling, en passant and clock fields are accepted but ignored. A missing
/// active color means White.
pub fn from_fen(fen: &str) -> Result<(Board, Color), FenError> {
    let mut board = Board::empty();
    let mut parts = fen.split_whitespace();
    let placement = parts.next().ok_or(FenError::Empty)?;

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(FenError::RowCount(rows.len()));
    }

    // FEN lists rank 8 first, which is row 0
    for (row_index, row) in rows.iter().enumerate() {
        let mut col_index = 0;

        for c in row.chars() {
            if col_index >= BOARD_SIZE {
                return Err(FenError::TooManyColumns(row_index));
            }
            if let Some(skip) = c.to_digit(10) {
                col_index += skip as usize;
                continue;
            }
            let piece = match c {
                'p' => Piece::new(Color::Black, PieceType::Pawn),
                'r' => Piece::new(Color::Black, PieceType::Rook),
                'n' => Piece::new(Color::Black, PieceType::Knight),
                'b' => Piece::new(Color::Black, PieceType::Bishop),
                'q' => Piece::new(Color::Black, PieceType::Queen),
                'k' => Piece::new(Color::Black, PieceType::King),
                'P' => Piece::new(Color::White, PieceType::Pawn),
                'R' => Piece::new(Color::White, PieceType::Rook),
                'N' => Piece::new(Color::White, PieceType::Knight),
                'B' => Piece::new(Color::White, PieceType::Bishop),
                'Q' => Piece::new(Color::White, PieceType::Queen),
                'K' => Piece::new(Color::White, PieceType::King),
                _ => return Err(FenError::InvalidPiece(c)),
            };
            let field = Coordinate::new(row_index as isize, col_index as isize)
                .map_err(|_| FenError::TooManyColumns(row_index))?;
            board.place(field, Square::Occupied(piece));
            col_index += 1;
        }
        if col_index > BOARD_SIZE {
            return Err(FenError::TooManyColumns(row_index));
        }
        if col_index < BOARD_SIZE {
            return Err(FenError::TooFewColumns(row_index));
        }
    }

    let active_color = match parts.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
    };

    Ok((board, active_color))
}

pub fn to_fen(board: &Board, active_color: Color) -> String {
    let mut board_representation = String::new();

    let mut empty_count = 0;

    for field in Coordinate::all() {
        match board.decode_square(field) {
            Square::Occupied(piece) => {
                if empty_count > 0 {
                    board_representation.push_str(&empty_count.to_string());
                    empty_count = 0;
                }
                board_representation.push(piece.to_char());
            }
            Square::Empty => {
                empty_count += 1;
            }
        }

        if field.col() as usize == BOARD_SIZE - 1 {
            if empty_count > 0 {
                board_representation.push_str(&empty_count.to_string());
                empty_count = 0;
            }
            if (field.row() as usize) < BOARD_SIZE - 1 {
                board_representation.push('/');
            }
        }
    }

    let active_color = if active_color == Color::White { "w" } else { "b" };

    format!("{} {} - - 0 1", board_representation, active_color)
}

#[cfg(test)]
mod test {
    use super::super::test_utils::field;
    use super::*;

    #[test]
    fn fen_empty_board() {
        let (board, active_color) = from_fen("8/8/8/8/8/8/8/8 w - - 0 1").expect("Failed to parse FEN");
        assert_eq!(board, Board::empty());
        assert_eq!(active_color, Color::White);
    }

    #[test]
    fn fen_one_pawn() {
        let (board, _) = from_fen("8/8/8/8/8/8/8/P7 w - - 0 1").expect("Failed to parse FEN");
        assert_eq!(board.decode_square(field("a1")), Square::Occupied(Piece::new(Color::White, PieceType::Pawn)));
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn fen_initial_board() {
        let (board, active_color) = from_fen(INITIAL_POSITION).expect("Failed to parse FEN");
        assert_eq!(board.decode_square(field("a8")), Square::Occupied(Piece::new(Color::Black, PieceType::Rook)));
        assert_eq!(board.decode_square(field("e1")), Square::Occupied(Piece::new(Color::White, PieceType::King)));
        assert_eq!(board.decode_square(field("e4")), Square::Empty);
        assert_eq!(active_color, Color::White);
    }

    #[test]
    fn fen_placement_only_defaults_to_white() {
        let (_, active_color) = from_fen("4k3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(active_color, Color::White);
        let (_, active_color) = from_fen("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        assert_eq!(active_color, Color::Black);
    }

    #[test]
    fn fen_invalid_piece() {
        assert_eq!(from_fen("8/8/8/8/8/8/8/X7 w - - 0 1"), Err(FenError::InvalidPiece('X')));
    }

    #[test]
    fn fen_invalid_extra_columns() {
        let fen = "rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";
        assert_eq!(from_fen(fen), Err(FenError::TooManyColumns(0)));
        assert_eq!(from_fen("44p/8/8/8/8/8/8/8 w"), Err(FenError::TooManyColumns(0)));
    }

    #[test]
    fn fen_invalid_short_row() {
        assert_eq!(from_fen("8/8/8/8/8/8/8/7 w"), Err(FenError::TooFewColumns(7)));
    }

    #[test]
    fn fen_invalid_row_count() {
        assert_eq!(from_fen("8/8/8 w"), Err(FenError::RowCount(3)));
        assert_eq!(from_fen("   "), Err(FenError::Empty));
    }

    #[test]
    fn fen_invalid_active_color() {
        assert_eq!(
            from_fen("8/8/8/8/8/8/8/8 x - - 0 1"),
            Err(FenError::InvalidActiveColor("x".to_string()))
        );
    }

    #[test]
    fn test_to_fen_initial_position() {
        assert_eq!(to_fen(&Board::starting(), Color::White), INITIAL_POSITION);
    }

    #[test]
    fn test_to_fen_custom_position() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1";
        let (board, active_color) = from_fen(fen).unwrap();
        assert_eq!(to_fen(&board, active_color), fen);
    }
}
