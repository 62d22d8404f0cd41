//! Property-based tests using proptest.

use super::{Board, Color, Coordinate, Move, MoveError, Piece, PieceType, Square};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Every move `side` may play on `board`, found by running each geometric
/// destination through the legality gate.
fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == side)
        .flat_map(|(from, piece)| {
            piece
                .kind
                .possible_moves(from)
                .into_iter()
                .filter_map(move |to| Move::new(board, side, &format!("{} {}", from, to)).ok())
                .map(|(mv, _)| mv)
        })
        .collect()
}

/// Plays up to `plies` random legal moves from the starting position.
fn random_playout(seed: u64, plies: usize) -> (Board, Color) {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut board = Board::starting();
    let mut side = Color::White;
    for _ in 0..plies {
        let moves = legal_moves(&board, side);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.execute(&mv);
        side = side.opposite();
    }
    (board, side)
}

fn kind_strategy() -> impl Strategy<Value = PieceType> {
    prop::sample::select(PieceType::ALL.to_vec())
}

fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
    (0..8isize, 0..8isize).prop_map(|(row, col)| Coordinate::new(row, col).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: geometry stays on the board and never includes the origin
    #[test]
    fn prop_geometry_stays_on_board(kind in kind_strategy(), from in coordinate_strategy()) {
        let moves = kind.possible_moves(from);
        prop_assert!(!moves.is_empty());
        prop_assert!(!moves.contains(&from));
        for to in moves {
            prop_assert!(to.row() < 8 && to.col() < 8);
            prop_assert!(Coordinate::new(to.row() as isize, to.col() as isize).is_ok());
        }
    }

    /// Property: the same request on the same board gets the same verdict and
    /// never changes the board
    #[test]
    fn prop_move_requests_are_idempotent(
        seed in any::<u64>(),
        plies in 0..30usize,
        from in coordinate_strategy(),
        to in coordinate_strategy(),
    ) {
        let (board, side) = random_playout(seed, plies);
        let before = board;
        let notation = format!("{} {}", from, to);

        let first = Move::new(&board, side, &notation);
        let second = Move::new(&board, side, &notation);
        prop_assert_eq!(first, second);
        prop_assert_eq!(board, before);
    }

    /// Property: after executing a legal move the destination holds the moved
    /// piece and the origin is empty
    #[test]
    fn prop_execute_then_decode(seed in any::<u64>(), plies in 0..30usize, pick in any::<prop::sample::Index>()) {
        let (mut board, side) = random_playout(seed, plies);
        let moves = legal_moves(&board, side);
        prop_assume!(!moves.is_empty());
        let mv = moves[pick.index(moves.len())];

        let moving = board.decode_square(mv.from);
        board.execute(&mv);
        prop_assert_eq!(board.decode_square(mv.to), moving);
        prop_assert_eq!(board.decode_square(mv.from), Square::Empty);
    }

    /// Property: rejected requests always carry a reason tag
    #[test]
    fn prop_rejections_are_tagged(from in coordinate_strategy(), to in coordinate_strategy()) {
        let board = Board::starting();
        if let Err(error) = Move::new(&board, Color::White, &format!("{} {}", from, to)) {
            prop_assert!(matches!(error, MoveError::Illegal(_)));
            prop_assert!(!error.reason().is_empty());
        }
    }
}

#[test]
fn test_random_playout_keeps_the_board_consistent() {
    let mut rng = Pcg64::seed_from_u64(0x7ab1a);
    for _ in 0..8 {
        let mut board = Board::starting();
        let mut side = Color::White;
        let mut pieces = board.pieces().count();

        for _ in 0..80 {
            let moves = legal_moves(&board, side);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            board.execute(&mv);
            side = side.opposite();

            assert_eq!(board.count(Piece::new(Color::White, PieceType::King)), 1);
            assert_eq!(board.count(Piece::new(Color::Black, PieceType::King)), 1);
            let now = board.pieces().count();
            assert!(now <= pieces, "piece count grew after {}", mv);
            pieces = now;
            // the side that just moved is never left in check
            assert!(!super::check::is_king_attacked(&board, side.opposite()));
        }
    }
}
