use super::{Board, Color, Coordinate};

pub fn field(square: &str) -> Coordinate {
    Coordinate::from_algebraic(square).unwrap()
}

pub fn board_from_fen(fen: &str) -> (Board, Color) {
    Board::from_fen(fen).unwrap()
}

pub fn assert_destinations<I: Iterator<Item = Coordinate>>(generated: I, mut expected: Vec<&str>) {
    let mut generated_converted: Vec<_> = generated.map(|m| m.as_algebraic()).collect();
    generated_converted.sort();
    expected.sort();

    assert_eq!(generated_converted, expected);
}
