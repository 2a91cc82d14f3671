mod coordinate;
mod moves;
mod path_finder;
mod square;
mod visited;

pub use coordinate::{Candidate, Coordinate};
pub use moves::{is_knight_move, knight_moves, Knight, MoveGenerator, Offset, KNIGHT_OFFSETS};
pub use path_finder::{find_path, PathError, PathFinder, Route, Search, SearchState};
pub use square::Square;
pub use visited::VisitedSet;
