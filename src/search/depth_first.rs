use super::{check_endpoints, SearchError, Solution};
use crate::{MazeGraph, Path, Point, PointMap};

/// Searches a [`MazeGraph`] using [Depth-first search](https://en.wikipedia.org/wiki/Depth-first_search).
///
/// The frontier is a stack, so the search follows one corridor until it hits a dead end before
/// trying anything else. Neighbors are pushed in the order of the Graph's neighbor lists and
/// therefore popped in reverse: with the default expansion order (up, left, right, down), the
/// Cell below is tried first.
///
/// Every pop counts as one step, including pops of Cells that were already explored and are
/// skipped. The Path returned is the first one found, which is not necessarily the shortest.
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
/// let solution = search_uninformed(&graph, (0, 1), (3, 2)).unwrap();
///
/// // down is tried before right
/// assert_eq!(solution.path, vec![(0, 1), (1, 1), (2, 1), (2, 2), (3, 2)]);
/// assert_eq!(solution.steps, 5);
/// ```
///
/// ## Returns
/// - `Ok(Solution)` with the Path, the explored Cells in the order they were visited (ending with
///     the goal) and the number of steps.
/// - `Err(SearchError::NoPath)` if the stack ran empty before the goal was reached.
/// - `Err(SearchError::NotInGraph)` if `start` or `goal` is not an open Cell.
pub fn search_uninformed(
    graph: &MazeGraph,
    start: Point,
    goal: Point,
) -> Result<Solution, SearchError> {
    check_endpoints(graph, start, goal)?;

    // (cell, the cell it was pushed from)
    let mut stack: Vec<(Point, Option<Point>)> = vec![(start, None)];
    let mut parents: PointMap<Option<Point>> = PointMap::with_capacity(graph.len());
    let mut explored = vec![];
    let mut steps = 0;

    let found = timed!("depth first search", {
        let mut found = false;
        while let Some((current_id, parent)) = stack.pop() {
            steps += 1;
            if parents.contains_key(&current_id) {
                continue;
            }
            parents.insert(current_id, parent);
            explored.push(current_id);

            if current_id == goal {
                found = true;
                break;
            }
            for &other_id in graph.neighbors(current_id).unwrap_or_default() {
                stack.push((other_id, Some(current_id)));
            }
        }
        found
    });

    if !found {
        #[cfg(feature = "log")]
        log::debug!(
            "depth first search: no path from {:?} to {:?} ({} steps, {} explored)",
            start,
            goal,
            steps,
            explored.len()
        );
        return Err(SearchError::NoPath { explored, steps });
    }

    let path = {
        let mut path = vec![];
        let mut current = goal;

        while let Some(prev) = parents[&current] {
            path.push(current);
            current = prev;
        }
        path.push(start);
        path.reverse();
        path
    };

    #[cfg(feature = "log")]
    log::debug!(
        "depth first search: path of {} cells from {:?} to {:?} ({} steps, {} explored)",
        path.len(),
        start,
        goal,
        steps,
        explored.len()
    );

    Ok(Solution {
        path: Path::new(path),
        explored,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        neighbors::{CompassNeighborhood, Dir::*},
        Maze,
    };

    fn graph_of(text: &str) -> MazeGraph {
        text.parse::<Maze>().unwrap().graph()
    }

    const CROSSROADS: &str = "
        # - # #
        # - - #
        # - - #
        # # - #
    ";

    #[test]
    fn straight_corridor() {
        let graph = graph_of("# - #\n# - #\n# - #");
        let solution = search_uninformed(&graph, (0, 1), (2, 1)).unwrap();

        assert_eq!(solution.path, vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(solution.explored, vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(solution.steps, 3);
    }

    #[test]
    fn visits_neighbors_in_reverse_order() {
        let graph = graph_of(CROSSROADS);
        let solution = search_uninformed(&graph, (0, 1), (3, 2)).unwrap();

        assert_eq!(solution.path, vec![(0, 1), (1, 1), (2, 1), (2, 2), (3, 2)]);
        assert_eq!(
            solution.explored,
            vec![(0, 1), (1, 1), (2, 1), (2, 2), (3, 2)]
        );
        assert_eq!(solution.steps, 5);
    }

    #[test]
    fn custom_order_changes_route() {
        let maze: Maze = CROSSROADS.parse().unwrap();
        let (rows, cols) = maze.size();
        let neighborhood = CompassNeighborhood::with_order(rows, cols, [DOWN, LEFT, UP, RIGHT]);
        let graph = maze.graph_with_neighborhood(&neighborhood);

        let solution = search_uninformed(&graph, (0, 1), (3, 2)).unwrap();
        assert_eq!(solution.path, vec![(0, 1), (1, 1), (1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn skips_already_explored() {
        // a loop: the start is pushed again by its neighbors
        let graph = graph_of("# - - #\n# - - #\n# # # #\n# - # #");
        let result = search_uninformed(&graph, (0, 1), (3, 1));

        match result {
            Err(SearchError::NoPath { explored, steps }) => {
                assert_eq!(explored.len(), 4);
                assert!(steps > explored.len());
            }
            other => panic!("expected no path, got {:?}", other),
        }
    }

    #[test]
    fn start_is_goal() {
        let graph = graph_of(CROSSROADS);
        let solution = search_uninformed(&graph, (1, 2), (1, 2)).unwrap();

        assert_eq!(solution.path, vec![(1, 2)]);
        assert_eq!(solution.explored, vec![(1, 2)]);
        assert_eq!(solution.steps, 1);
    }

    #[test]
    fn unreachable_goal() {
        let graph = graph_of("# - #\n# # #\n# - #");

        assert_eq!(
            search_uninformed(&graph, (0, 1), (2, 1)),
            Err(SearchError::NoPath {
                explored: vec![(0, 1)],
                steps: 1,
            })
        );
    }
}
