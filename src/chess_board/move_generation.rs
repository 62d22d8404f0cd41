use super::{Coordinate, PieceType};

pub(crate) const KNIGHT_MOVES: [(isize, isize); 8] =
    [(-2, -1), (-1, -2), (1, -2), (2, -1), (2, 1), (1, 2), (-1, 2), (-2, 1)];
pub(crate) const KING_MOVES: [(isize, isize); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl PieceType {
    /// Squares the piece could reach from `from` on an empty board.
    ///
    /// Occupancy, turn order and check are ignored. Pawn geometry covers both
    /// vertical senses since it does not know the pawn's color.
    pub fn possible_moves(&self, from: Coordinate) -> Vec<Coordinate> {
        match self {
            PieceType::Pawn => generate_pawn_moves(from),
            PieceType::Knight => generate_moves_from_directions(from, &KNIGHT_MOVES),
            PieceType::Bishop => generate_sliding_moves(from, &BISHOP_DIRECTIONS),
            PieceType::Rook => generate_sliding_moves(from, &ROOK_DIRECTIONS),
            PieceType::Queen => {
                let mut moves = generate_sliding_moves(from, &ROOK_DIRECTIONS);
                moves.extend(generate_sliding_moves(from, &BISHOP_DIRECTIONS));
                moves
            }
            PieceType::King => generate_moves_from_directions(from, &KING_MOVES),
        }
    }
}

fn generate_pawn_moves(from: Coordinate) -> Vec<Coordinate> {
    let mut moves = Vec::with_capacity(8);
    for forward in [-1, 1] {
        moves.extend([(forward, 0), (forward, -1), (forward, 1)].iter().filter_map(|&(dr, dc)| from.offset(dr, dc)));
    }

    // Double step away from either starting rank
    match from.row() {
        6 => moves.extend(from.offset(-2, 0)),
        1 => moves.extend(from.offset(2, 0)),
        _ => {}
    }
    moves
}

/// Single hops, each offset clipped to the board on its own.
fn generate_moves_from_directions(from: Coordinate, directions: &[(isize, isize)]) -> Vec<Coordinate> {
    directions.iter().filter_map(|&(dr, dc)| from.offset(dr, dc)).collect()
}

/// Every square along each direction up to the board edge.
fn generate_sliding_moves(from: Coordinate, directions: &[(isize, isize)]) -> Vec<Coordinate> {
    let mut moves = Vec::with_capacity(14);
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            moves.push(next);
            current = next;
        }
    }
    moves
}
