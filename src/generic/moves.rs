use crate::{Candidate, Coordinate, Square};

/// A (Δrow, Δcol) displacement.
pub type Offset = (i32, i32);

/// Knight geometry in the order destinations are generated. Ties between
/// equally short paths are broken by this order, so it must not change.
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Produces the squares reachable in one move from a given square.
pub trait MoveGenerator {
    /// Displacements tried from every square, in generation order.
    fn offsets(&self) -> &[Offset];

    /// One new square per offset the validator accepts, each carrying
    /// `from`'s path with its own coordinate appended.
    fn successors(&self, from: &Square) -> Vec<Square> {
        let (row, col): Candidate = from.coordinate().into();
        self.offsets()
            .iter()
            .filter_map(|&(d_row, d_col)| {
                Square::validate((row + d_row, col + d_col), from.path())
            })
            .collect()
    }

    fn destinations(&self, from: Coordinate) -> Vec<Coordinate> {
        self.successors(&Square::start(from))
            .into_iter()
            .map(|square| square.coordinate())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Knight;

impl MoveGenerator for Knight {
    fn offsets(&self) -> &[Offset] {
        &KNIGHT_OFFSETS
    }
}

pub fn knight_moves(from: Coordinate) -> Vec<Coordinate> {
    Knight.destinations(from)
}

pub fn is_knight_move(from: Coordinate, to: Coordinate) -> bool {
    let d_row = from.row().abs_diff(to.row());
    let d_col = from.col().abs_diff(to.col());
    matches!((d_row, d_col), (1, 2) | (2, 1))
}
