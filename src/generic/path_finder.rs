use std::{collections::VecDeque, fmt::Display};

use log::{debug, warn};
use serde::Serialize;

use crate::{Candidate, Coordinate, Knight, MoveGenerator, Square, VisitedSet};

/// A successful result of [`find_path`].
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    /// Start and target were the same square, nothing was searched.
    Stationary { square: Coordinate },
    /// The search reached the target. `path` runs from start to target inclusive.
    Journey { path: Vec<Coordinate> },
}

impl Route {
    pub fn path(&self) -> Vec<Coordinate> {
        match self {
            Route::Stationary { square } => vec![*square],
            Route::Journey { path } => path.clone(),
        }
    }

    pub fn into_path(self) -> Vec<Coordinate> {
        match self {
            Route::Stationary { square } => vec![square],
            Route::Journey { path } => path,
        }
    }

    /// Number of knight moves, one less than the number of squares.
    pub fn moves(&self) -> usize {
        match self {
            Route::Stationary { .. } => 0,
            Route::Journey { path } => path.len().saturating_sub(1),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum PathError {
    /// An endpoint lies outside the board. Nothing was searched.
    OffBoard { row: i32, col: i32 },
    /// The frontier ran dry before the target was dequeued.
    NoPath {
        start: Coordinate,
        target: Coordinate,
    },
    /// More squares were expanded than the board holds.
    SearchLimit { expanded: usize },
}

impl Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::OffBoard { row, col } => write!(f, "({}, {}) is not on the board", row, col),
            PathError::NoPath { start, target } => {
                write!(f, "there is no path from {} to {}", start, target)
            }
            PathError::SearchLimit { expanded } => write!(
                f,
                "search expanded {} squares but the board only has {}",
                expanded,
                Coordinate::SQUARES
            ),
        }
    }
}

impl std::error::Error for PathError {}

/// Where a [`Search`] stands after a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Expanding,
    Found(Square),
    Exhausted,
}

/// One breadth-first search from a start square towards a target.
///
/// The frontier is FIFO and every coordinate is enqueued at most once, so the
/// first time the target is dequeued its path is a shortest one.
pub struct Search<'a, G: MoveGenerator> {
    generator: &'a G,
    start: Coordinate,
    target: Coordinate,
    frontier: VecDeque<Square>,
    visited: VisitedSet,
    expanded: usize,
}

impl<'a, G: MoveGenerator> Search<'a, G> {
    pub fn new(generator: &'a G, start: Coordinate, target: Coordinate) -> Self {
        let mut visited = VisitedSet::new();
        visited.insert(start);
        Self {
            generator,
            start,
            target,
            frontier: VecDeque::from([Square::start(start)]),
            visited,
            expanded: 0,
        }
    }

    /// Dequeues one square and either reports it as the target or enqueues
    /// its unvisited destinations.
    pub fn step(&mut self) -> SearchState {
        let Some(square) = self.frontier.pop_front() else {
            return SearchState::Exhausted;
        };
        self.expanded += 1;

        if square.coordinate() == self.target {
            return SearchState::Found(square);
        }

        for next in self.generator.successors(&square) {
            if self.visited.insert(next.coordinate()) {
                self.frontier.push_back(next);
            }
        }
        SearchState::Expanding
    }

    /// Steps until the target is found, the frontier drains, or `limit`
    /// squares have been expanded with work still queued.
    pub fn run(&mut self, limit: usize) -> Result<Square, PathError> {
        loop {
            if self.expanded >= limit && !self.frontier.is_empty() {
                return Err(PathError::SearchLimit {
                    expanded: self.expanded,
                });
            }
            match self.step() {
                SearchState::Expanding => continue,
                SearchState::Found(square) => return Ok(square),
                SearchState::Exhausted => {
                    return Err(PathError::NoPath {
                        start: self.start,
                        target: self.target,
                    })
                }
            }
        }
    }

    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }
}

/// Shortest-path lookups over the moves of `G`.
///
/// Holds no search state of its own, every call to [`PathFinder::find`]
/// builds a fresh frontier and visited set.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<G: MoveGenerator> {
    generator: G,
    limit: usize,
}

impl Default for PathFinder<Knight> {
    fn default() -> Self {
        Self::new(Knight)
    }
}

impl<G: MoveGenerator> PathFinder<G> {
    pub fn new(generator: G) -> Self {
        Self::with_limit(generator, Coordinate::SQUARES)
    }

    pub fn with_limit(generator: G, limit: usize) -> Self {
        Self { generator, limit }
    }

    pub fn find(&self, start: Candidate, target: Candidate) -> Result<Route, PathError> {
        let start = Square::validate(start, &[])
            .ok_or_else(|| off_board(start))?
            .coordinate();
        let target = Coordinate::try_from(target).map_err(|_| off_board(target))?;

        if start == target {
            debug!("{} is already the target", start);
            return Ok(Route::Stationary { square: start });
        }

        debug!("searching from {} to {}", start, target);
        let mut search = Search::new(&self.generator, start, target);
        match search.run(self.limit) {
            Ok(square) => {
                debug!(
                    "found {} move path after expanding {} squares",
                    square.path().len() - 1,
                    search.expanded()
                );
                Ok(Route::Journey {
                    path: square.into_path(),
                })
            }
            Err(err) => {
                warn!("search from {} to {} failed: {}", start, target, err);
                Err(err)
            }
        }
    }
}

fn off_board((row, col): Candidate) -> PathError {
    warn!("rejecting off-board square ({}, {})", row, col);
    PathError::OffBoard { row, col }
}

/// Shortest knight path between two squares.
///
/// Usage:
/// ```
/// use knight_travails::{find_path, Route};
///
/// let route = find_path((0, 0), (7, 7)).unwrap();
/// assert_eq!(route.moves(), 6);
///
/// assert!(matches!(find_path((3, 3), (3, 3)), Ok(Route::Stationary { .. })));
/// assert!(find_path((0, 0), (8, 8)).is_err());
/// ```
pub fn find_path(start: Candidate, target: Candidate) -> Result<Route, PathError> {
    PathFinder::default().find(start, target)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{is_knight_move, Offset};

    fn at(row: i32, col: i32) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    fn moves(start: Candidate, target: Candidate) -> usize {
        find_path(start, target).unwrap().moves()
    }

    /// Moves nowhere, so every search with distinct endpoints runs dry.
    struct Frozen;

    impl MoveGenerator for Frozen {
        fn offsets(&self) -> &[Offset] {
            &[]
        }
    }

    #[test]
    fn same_square_is_stationary() {
        for square in Coordinate::all() {
            let route = find_path(square.into(), square.into()).unwrap();
            assert_eq!(route, Route::Stationary { square });
            assert_eq!(route.path(), vec![square]);
            assert_eq!(route.moves(), 0);
        }
    }

    #[test]
    fn single_moves() {
        assert_eq!(moves((0, 0), (1, 2)), 1);
        assert_eq!(moves((0, 0), (2, 1)), 1);
        assert_eq!(moves((3, 3), (4, 5)), 1);
        for to in crate::knight_moves(at(3, 3)) {
            assert_eq!(moves((3, 3), to.into()), 1);
        }
    }

    #[test]
    fn known_distances() {
        let cases = [
            ((0, 0), (7, 7), 6),
            ((0, 7), (7, 0), 6),
            ((0, 0), (1, 1), 4),
            ((0, 0), (2, 2), 4),
            ((0, 0), (0, 1), 3),
            ((0, 0), (4, 0), 2),
            ((0, 0), (3, 3), 2),
            ((0, 0), (7, 0), 5),
            ((3, 3), (4, 3), 3),
            ((1, 1), (6, 6), 4),
            ((2, 0), (5, 7), 4),
        ];
        for (start, target, expected) in cases {
            assert_eq!(moves(start, target), expected, "{:?} -> {:?}", start, target);
        }
    }

    #[test]
    fn corner_to_corner_path_is_reproducible() {
        let expected = vec![
            at(0, 0),
            at(2, 1),
            at(4, 2),
            at(6, 3),
            at(4, 4),
            at(6, 5),
            at(7, 7),
        ];
        for _ in 0..3 {
            assert_eq!(find_path((0, 0), (7, 7)).unwrap().into_path(), expected);
        }
    }

    #[test]
    fn every_pair_has_a_valid_symmetric_path() {
        for start in Coordinate::all() {
            for target in Coordinate::all() {
                let path = find_path(start.into(), target.into()).unwrap().into_path();
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&target));
                assert!(path.windows(2).all(|pair| is_knight_move(pair[0], pair[1])));
                assert!(path.len() <= 7, "{} -> {} took {:?}", start, target, path);

                let back = find_path(target.into(), start.into()).unwrap();
                assert_eq!(back.moves(), path.len() - 1);
            }
        }
    }

    #[test]
    fn off_board_input_is_rejected() {
        assert_eq!(
            find_path((0, 0), (8, 8)),
            Err(PathError::OffBoard { row: 8, col: 8 })
        );
        assert_eq!(
            find_path((-1, 0), (0, 0)),
            Err(PathError::OffBoard { row: -1, col: 0 })
        );
        assert_eq!(
            find_path((9, 9), (9, 9)),
            Err(PathError::OffBoard { row: 9, col: 9 })
        );
        // start is checked before target
        assert_eq!(
            find_path((0, -3), (10, 0)),
            Err(PathError::OffBoard { row: 0, col: -3 })
        );
    }

    #[test]
    fn exhausted_search_reports_no_path() {
        let finder = PathFinder::new(Frozen);
        assert_eq!(
            finder.find((0, 0), (7, 7)),
            Err(PathError::NoPath {
                start: at(0, 0),
                target: at(7, 7),
            })
        );
        assert_eq!(
            finder.find((5, 5), (5, 5)),
            Ok(Route::Stationary { square: at(5, 5) })
        );
    }

    #[test]
    fn limit_stops_the_search() {
        let finder = PathFinder::with_limit(Knight, 3);
        assert_eq!(
            finder.find((0, 0), (7, 7)),
            Err(PathError::SearchLimit { expanded: 3 })
        );
    }

    #[test]
    fn search_never_expands_more_than_the_board() {
        let target = at(7, 7);
        for start in Coordinate::all() {
            let mut search = Search::new(&Knight, start, target);
            let square = search.run(Coordinate::SQUARES).unwrap();
            assert_eq!(square.coordinate(), target);
            assert!(search.expanded() <= Coordinate::SQUARES);
            assert!(search.visited().len() <= Coordinate::SQUARES);
        }
    }

    #[test]
    fn step_walks_the_states() {
        let mut search = Search::new(&Knight, at(0, 0), at(2, 1));
        // (0, 0) itself
        assert_eq!(search.step(), SearchState::Expanding);
        assert!(search.visited().contains(at(2, 1)));
        assert!(search.visited().contains(at(1, 2)));

        match search.step() {
            SearchState::Found(square) => assert_eq!(square.path(), &[at(0, 0), at(2, 1)]),
            other => panic!("expected the target, got {:?}", other),
        }

        let mut frozen = Search::new(&Frozen, at(0, 0), at(2, 1));
        assert_eq!(frozen.step(), SearchState::Expanding);
        assert_eq!(frozen.step(), SearchState::Exhausted);
    }

    #[test]
    fn errors_serialize_with_a_tag() {
        let json = serde_json::to_value(PathError::OffBoard { row: 8, col: 8 }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "off_board", "row": 8, "col": 8 })
        );
        assert_eq!(
            PathError::OffBoard { row: -1, col: 0 }.to_string(),
            "(-1, 0) is not on the board"
        );
    }
}
