use std::fmt::Display;

use itertools::iproduct;
use serde::{Deserialize, Serialize};

/// A raw (row, column) pair as handed in by a caller. It may lie off the board.
pub type Candidate = (i32, i32);

/// A (row, column) pair that is known to lie on the 8x8 board.
///
/// The fields are private, the only way to get one is through
/// [`Coordinate::new`] or [`TryFrom<Candidate>`], both of which reject
/// anything outside `0..=7` on either axis.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(into = "(u8, u8)", try_from = "Candidate")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    pub const BOARD_SIZE: i32 = 8;
    pub const SQUARES: usize = (Self::BOARD_SIZE * Self::BOARD_SIZE) as usize;

    pub fn new(row: i32, col: i32) -> Option<Self> {
        if Self::on_board(row) && Self::on_board(col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    fn on_board(axis: i32) -> bool {
        (0..Self::BOARD_SIZE).contains(&axis)
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        iproduct!(0..Self::BOARD_SIZE, 0..Self::BOARD_SIZE)
            .filter_map(|(row, col)| Self::new(row, col))
    }
}

impl TryFrom<Candidate> for Coordinate {
    type Error = String;

    fn try_from((row, col): Candidate) -> Result<Self, Self::Error> {
        Coordinate::new(row, col)
            .ok_or_else(|| format!("({}, {}) is not on the board", row, col))
    }
}

impl From<Coordinate> for (u8, u8) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.row, coordinate.col)
    }
}

impl From<Coordinate> for Candidate {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.row as i32, coordinate.col as i32)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
