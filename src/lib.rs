#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to solve Mazes on a Grid.
//!
//! ## Introduction
//! A Maze is a rectangular Grid of Walls and open Cells. Walking starts at the top of the Maze
//! and the Goal is the first open Cell on its last row. This crate turns such a Grid into a
//! Graph of open Cells and searches that Graph with one of four strategies:
//!
//! - [`Algorithm::DepthFirst`]: follows a single corridor as far as it goes before
//!   backtracking. Returns the first Path it stumbles upon, which is rarely the shortest.
//! - [`Algorithm::Dijkstra`]: expands Cells in order of their distance from the start.
//! - [`Algorithm::AStar`]: like Dijkstra, but guided towards the Goal by the Manhattan distance.
//! - [`Algorithm::WeightedAStar`]: A* with an inflated Heuristic. Usually expands fewer Cells,
//!   but the resulting Path may be longer than necessary.
//!
//! All three informed strategies are the same algorithm ([`search_informed`]) with a different
//! [Heuristic](heuristics). Every search reports the Path, the Cells it explored and the number
//! of steps it took.
//!
//! ## Examples
//! Parsing a Maze and finding a Path:
//! ```
//! use maze_pathfinding::prelude::*;
//!
//! // '#' = wall, '-' = open
//! let maze: Maze = "
//!     ## - # # #
//!     ## - - - #
//!     ## # # - #
//! ".parse().unwrap();
//!
//! let graph = maze.graph();
//! let start = maze.start();
//! let goal = maze.goal().unwrap();
//!
//! let solution = search_informed(&graph, start, goal, heuristics::manhattan).unwrap();
//!
//! assert_eq!(solution.path, vec![(0, 1), (1, 1), (1, 2), (1, 3), (2, 3)]);
//! assert_eq!(solution.path.cost(), 4);
//! ```
//!
//! If the Goal cannot be reached, a [`SearchError::NoPath`] is returned, which still contains
//! the statistics of the failed search:
//! ```
//! # use maze_pathfinding::prelude::*;
//! let maze: Maze = "
//!     ## - #
//!     ## # #
//!     ## - #
//! ".parse().unwrap();
//!
//! let result = search_uninformed(&maze.graph(), maze.start(), maze.goal().unwrap());
//!
//! match result {
//!     Err(SearchError::NoPath { explored, steps }) => {
//!         assert_eq!(explored, vec![(0, 1)]);
//!         assert_eq!(steps, 1);
//!     }
//!     other => panic!("expected no path, got {:?}", other),
//! }
//! ```
//!
//! ### Configuration
//! The informed searches accept a [`SearchConfig`]. It controls how the priority of the start
//! Cell is seeded and the weight used by [`Algorithm::WeightedAStar`]:
//! ```
//! # use maze_pathfinding::prelude::*;
//! # let maze: Maze = "# - #\n# - #".parse().unwrap();
//! let config = SearchConfig {
//!     weight: 4.0,
//!     ..SearchConfig::LEGACY
//! };
//!
//! let solution = Algorithm::WeightedAStar
//!     .search(&maze.graph(), maze.start(), maze.goal().unwrap(), &config)
//!     .unwrap();
//!
//! assert_eq!(solution.path, vec![(0, 1), (1, 1)]);
//! ```

/// A shorthand for Coordinates on the grid, ordered as `(row, column)`
pub type Point = (usize, usize);

/// A [`HashMap`](hashbrown::HashMap) keyed by Points
pub type PointMap<V> = hashbrown::HashMap<Point, V>;

#[cfg(feature = "log")]
macro_rules! timed {
    ($info: expr, $($code: tt)+) => {{
        let start = std::time::Instant::now();
        let ret = { $($code)+ };
        log::trace!("{}: {:?}", $info, start.elapsed());
        ret
    }};
}

#[cfg(not(feature = "log"))]
macro_rules! timed {
    ($info: expr, $($code: tt)+) => {{
        $($code)+
    }};
}

pub mod neighbors;

mod graph;
pub use self::graph::MazeGraph;

mod path;
pub use self::path::Path;

pub mod heuristics;

mod config;
pub use self::config::{SearchConfig, StartSeed};

mod search;
pub use self::search::{
    search_informed, search_informed_with_config, search_uninformed, Algorithm, SearchError,
    Solution,
};

mod maze;
pub use self::maze::{Cell, Maze, MazeError};

mod report;
pub use self::report::{solve_all, Report};

/// The most commonly used items of this crate
pub mod prelude {
    pub use crate::{
        heuristics,
        neighbors::{CompassNeighborhood, Dir},
        search_informed, search_informed_with_config, search_uninformed, solve_all, Algorithm,
        Cell, Maze, MazeError, MazeGraph, Path, Point, Report, SearchConfig, SearchError,
        Solution, StartSeed,
    };
}
