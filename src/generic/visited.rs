use ndarray::Array2;

use crate::Coordinate;

/// Squares already enqueued during one search, one flag per board cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    data: Array2<bool>,
    len: usize,
}

impl Default for VisitedSet {
    fn default() -> Self {
        Self::new()
    }
}

impl VisitedSet {
    pub fn new() -> Self {
        let size = Coordinate::BOARD_SIZE as usize;
        Self {
            data: Array2::from_elem((size, size), false),
            len: 0,
        }
    }

    /// Marks `coordinate`, returns `false` if it was already marked.
    pub fn insert(&mut self, coordinate: Coordinate) -> bool {
        let cell = &mut self.data[(coordinate.row(), coordinate.col())];
        if *cell {
            return false;
        }
        *cell = true;
        self.len += 1;
        true
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.data[(coordinate.row(), coordinate.col())]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
