use crate::{Candidate, Coordinate};

/// A search node: a coordinate together with the squares visited to reach it.
///
/// The path always starts at the search's start square and ends with
/// `coordinate`. Squares are never mutated, a successor is validated
/// against its parent's path and gets its own copy of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square {
    coordinate: Coordinate,
    path: Vec<Coordinate>,
}

impl Square {
    /// Returns `None` if `candidate` is off the board. Otherwise the new
    /// square's path is `trail` followed by the candidate itself.
    pub fn validate(candidate: Candidate, trail: &[Coordinate]) -> Option<Self> {
        let coordinate = Coordinate::try_from(candidate).ok()?;
        let mut path = Vec::with_capacity(trail.len() + 1);
        path.extend_from_slice(trail);
        path.push(coordinate);
        Some(Self { coordinate, path })
    }

    /// A square with an empty trail, used as the root of a search.
    pub fn start(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            path: vec![coordinate],
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Coordinate> {
        self.path
    }
}
