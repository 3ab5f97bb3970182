use super::{check_endpoints, HeuristicElement, SearchError, Solution};
use crate::{MazeGraph, Path, Point, PointMap, SearchConfig};

use std::collections::BinaryHeap;

/// What the informed search knows about a Cell it has touched.
#[derive(Clone, Copy, Debug)]
struct Visit {
    /// steps from the start along the best known route
    cost: usize,
    /// `cost` plus the Heuristic of the Cell
    estimate: f64,
    /// the Cell this one was last improved from. `None` only for the start.
    parent: Option<Point>,
}

/// Searches a [`MazeGraph`] using a priority queue ordered by `steps so far + heuristic`.
///
/// The `heuristic` decides which classic algorithm this is:
/// - [`heuristics::zero`](crate::heuristics::zero) makes it [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// - [`heuristics::manhattan`](crate::heuristics::manhattan) makes it [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
/// - [`heuristics::weighted_manhattan`](crate::heuristics::weighted_manhattan) makes it weighted A*
///
/// Uses the default [`SearchConfig`]. See [`search_informed_with_config`] for details.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use maze_pathfinding::prelude::*;
/// let maze: Maze = "
///     ## - # #
///     ## - - #
///     ## - - #
///     ## # - #
/// ".parse().unwrap();
/// let graph = maze.graph();
///
/// let solution = search_informed(&graph, (0, 1), (3, 2), heuristics::manhattan).unwrap();
///
/// assert_eq!(solution.path, vec![(0, 1), (1, 1), (1, 2), (2, 2), (3, 2)]);
/// assert_eq!(solution.explored.len(), 6);
/// assert_eq!(solution.steps, 9);
/// ```
pub fn search_informed(
    graph: &MazeGraph,
    start: Point,
    goal: Point,
    heuristic: impl Fn(Point, Point) -> f64,
) -> Result<Solution, SearchError> {
    search_informed_with_config(graph, start, goal, heuristic, &SearchConfig::default())
}

/// Searches a [`MazeGraph`] using a priority queue ordered by `steps so far + heuristic`.
///
/// The frontier pops the Cell with the lowest estimated total cost. Equal estimates prefer the
/// Cell with the lower Heuristic, i.e. the one closer to the goal, and after that the lower
/// Point. Each pop counts as one step. The search stops as soon as the goal is popped.
///
/// When a neighbor's estimate improves, it is pushed again instead of updating its old entry.
/// There is no closed set: an outdated entry that is popped later expands its Cell a second
/// time, and that pop is counted as a step as well. Such an expansion can never improve a
/// neighbor with a consistent Heuristic.
///
/// After the goal is found, the Path is walked back from the goal to the start, adding one step
/// per Cell.
///
/// ## Arguments
/// - `graph` - the Maze to search
/// - `start` - the Cell to start at
/// - `goal` - the Cell to search for
/// - `heuristic` - estimates the steps from a Cell (first argument) to the goal (second argument).
///     Must not be negative.
/// - `config` - how the start Cell is seeded. (See [`SearchConfig`])
///
/// ## Returns
/// - `Ok(Solution)` with the Path, the touched Cells in the order they were discovered (the start
///     first) and the number of steps.
/// - `Err(SearchError::NoPath)` if the frontier ran empty before the goal was reached.
/// - `Err(SearchError::NotInGraph)` if `start` or `goal` is not an open Cell.
pub fn search_informed_with_config(
    graph: &MazeGraph,
    start: Point,
    goal: Point,
    heuristic: impl Fn(Point, Point) -> f64,
    config: &SearchConfig,
) -> Result<Solution, SearchError> {
    check_endpoints(graph, start, goal)?;

    let mut visited: PointMap<Visit> = PointMap::with_capacity(graph.len());
    let mut discovered = vec![start];
    let mut next = BinaryHeap::with_capacity(graph.len() / 2);
    let mut steps = 0;

    let seed = heuristic(start, config.seed_point(goal));
    visited.insert(
        start,
        Visit {
            cost: 0,
            estimate: seed,
            parent: None,
        },
    );
    next.push(HeuristicElement(start, seed, seed));

    timed!("informed search", {
        while let Some(HeuristicElement(current_id, _, _)) = next.pop() {
            steps += 1;
            if current_id == goal {
                break;
            }
            let current_cost = visited[&current_id].cost;

            for &other_id in graph.neighbors(current_id).unwrap_or_default() {
                let other_cost = current_cost + 1;
                let other_heuristic = heuristic(other_id, goal);
                let other_estimate = other_cost as f64 + other_heuristic;

                let parent = if other_id == start {
                    None
                } else {
                    Some(current_id)
                };
                match visited.get_mut(&other_id) {
                    Some(visit) if visit.estimate <= other_estimate => continue,
                    Some(visit) => {
                        visit.cost = other_cost;
                        visit.estimate = other_estimate;
                        visit.parent = parent;
                    }
                    None => {
                        visited.insert(
                            other_id,
                            Visit {
                                cost: other_cost,
                                estimate: other_estimate,
                                parent,
                            },
                        );
                        discovered.push(other_id);
                    }
                }
                next.push(HeuristicElement(other_id, other_estimate, other_heuristic));
            }
        }
    });

    if !visited.contains_key(&goal) {
        #[cfg(feature = "log")]
        log::debug!(
            "informed search: no path from {:?} to {:?} ({} steps, {} explored)",
            start,
            goal,
            steps,
            discovered.len()
        );
        return Err(SearchError::NoPath {
            explored: discovered,
            steps,
        });
    }

    let path = {
        let mut path = vec![];
        let mut current = goal;

        while let Some(prev) = visited[&current].parent {
            steps += 1;
            path.push(current);
            current = prev;
        }
        path.push(start);
        path.reverse();
        path
    };

    #[cfg(feature = "log")]
    log::debug!(
        "informed search: path of {} cells from {:?} to {:?} ({} steps, {} explored)",
        path.len(),
        start,
        goal,
        steps,
        discovered.len()
    );

    Ok(Solution {
        path: Path::new(path),
        explored: discovered,
        steps,
    })
}
