mod informed;
pub use informed::{search_informed, search_informed_with_config};

mod depth_first;
pub use depth_first::search_uninformed;

use crate::{heuristics, MazeGraph, Path, Point, SearchConfig};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// The result of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// the route from the start to the goal, both inclusive
    pub path: Path<Point>,
    /// every Cell the search touched, starting with the start Cell
    pub explored: Vec<Point>,
    /// the number of steps the search took
    pub steps: usize,
}

/// The ways a search can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The goal cannot be reached from the start. Carries the statistics of the exhausted search.
    #[error("no path to the goal after {steps} steps and {} explored cells", .explored.len())]
    NoPath {
        /// every Cell the search touched before giving up
        explored: Vec<Point>,
        /// the number of steps the search took
        steps: usize,
    },
    /// The start or goal is not an open Cell of the Graph
    #[error("{0:?} is not an open cell of the maze")]
    NotInGraph(Point),
}

fn check_endpoints(graph: &MazeGraph, start: Point, goal: Point) -> Result<(), SearchError> {
    for point in [start, goal] {
        if !graph.contains(point) {
            return Err(SearchError::NotInGraph(point));
        }
    }
    Ok(())
}

/// An entry of the informed search's frontier: `(id, estimated total cost, heuristic)`.
///
/// Ordered so that a [`BinaryHeap`](std::collections::BinaryHeap) pops the lowest estimate
/// first. Equal estimates prefer the lower heuristic, then the lower Point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeuristicElement(pub Point, pub f64, pub f64);

impl PartialEq for HeuristicElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for HeuristicElement {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1
            .total_cmp(&self.1)
            .then_with(|| rhs.2.total_cmp(&self.2))
            .then_with(|| rhs.0.cmp(&self.0))
    }
}

/// The search strategies provided by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// [`search_uninformed`]: depth-first search
    DepthFirst,
    /// [`search_informed`] with [`heuristics::zero`]
    Dijkstra,
    /// [`search_informed`] with [`heuristics::manhattan`]
    AStar,
    /// [`search_informed`] with the Manhattan distance scaled by [`SearchConfig::weight`]
    WeightedAStar,
}

impl Algorithm {
    /// All Algorithms, in the order they are usually reported
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::AStar,
        Algorithm::Dijkstra,
        Algorithm::WeightedAStar,
    ];

    /// the name used in reports
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "DEPTH FIRST SEARCH",
            Algorithm::Dijkstra => "DIJKSTRA'S ALGORITHM",
            Algorithm::AStar => "A* GRAPH SEARCH",
            Algorithm::WeightedAStar => "WEIGHTED A* GRAPH SEARCH",
        }
    }

    /// true if the Algorithm always finds a shortest Path
    pub fn is_optimal(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar)
    }

    /// Searches `graph` from `start` to `goal` using this Algorithm.
    ///
    /// `config` is ignored by [`Algorithm::DepthFirst`].
    ///
    /// ## Examples
    /// ```
    /// # use maze_pathfinding::prelude::*;
    /// let maze: Maze = "# - #\n# - #\n# - #".parse().unwrap();
    /// let graph = maze.graph();
    ///
    /// for algorithm in Algorithm::ALL {
    ///     let solution = algorithm
    ///         .search(&graph, (0, 1), (2, 1), &SearchConfig::default())
    ///         .unwrap();
    ///     assert_eq!(solution.path, vec![(0, 1), (1, 1), (2, 1)]);
    /// }
    /// ```
    pub fn search(
        self,
        graph: &MazeGraph,
        start: Point,
        goal: Point,
        config: &SearchConfig,
    ) -> Result<Solution, SearchError> {
        match self {
            Algorithm::DepthFirst => search_uninformed(graph, start, goal),
            Algorithm::Dijkstra => {
                search_informed_with_config(graph, start, goal, heuristics::zero, config)
            }
            Algorithm::AStar => {
                search_informed_with_config(graph, start, goal, heuristics::manhattan, config)
            }
            Algorithm::WeightedAStar => search_informed_with_config(
                graph,
                start,
                goal,
                heuristics::weighted(config.weight),
                config,
            ),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}
