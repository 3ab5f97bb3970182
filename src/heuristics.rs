//! Heuristics for the informed searches.
//!
//! A Heuristic estimates how many steps it takes to get from a Cell to the goal. It is a plain
//! function `(point, goal) -> estimate` and is handed to [`search_informed`](crate::search_informed).
//! Any `Fn(Point, Point) -> f64` works, as long as it never returns a negative value.
//!
//! | Heuristic              | Algorithm       | Shortest Path guaranteed |
//! |------------------------|-----------------|--------------------------|
//! | [`zero`]               | Dijkstra        | yes                      |
//! | [`manhattan`]          | A*              | yes                      |
//! | [`weighted_manhattan`] | weighted A*     | no                       |

use crate::Point;

/// The factor applied to the Manhattan distance by [`weighted_manhattan`]
pub const DEFAULT_WEIGHT: f64 = 2.7;

/// Always estimates 0, which turns the informed search into Dijkstra's algorithm.
pub fn zero(_point: Point, _goal: Point) -> f64 {
    0.0
}

/// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two Points.
///
/// Never overestimates the remaining steps on a Grid where only the 4 cardinal directions are
/// walkable, so A* with this Heuristic finds a shortest Path.
///
/// ```
/// # use maze_pathfinding::heuristics::manhattan;
/// assert_eq!(manhattan((3, 1), (0, 4)), 6.0);
/// ```
pub fn manhattan(point: Point, goal: Point) -> f64 {
    (point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1)) as f64
}

/// The Manhattan distance scaled by [`DEFAULT_WEIGHT`].
///
/// Overestimates the remaining steps, trading the optimality of the Path for fewer expansions.
pub fn weighted_manhattan(point: Point, goal: Point) -> f64 {
    DEFAULT_WEIGHT * manhattan(point, goal)
}

/// The Manhattan distance scaled by an arbitrary `weight`.
///
/// A `weight` of `1.0` is plain A*, `0.0` is Dijkstra. Negative weights are clamped to `0.0`.
///
/// ```
/// # use maze_pathfinding::heuristics::weighted;
/// let h = weighted(1.5);
/// assert_eq!(h((0, 1), (2, 3)), 6.0);
/// ```
pub fn weighted(weight: f64) -> impl Fn(Point, Point) -> f64 + Copy {
    let weight = weight.max(0.0);
    move |point, goal| weight * manhattan(point, goal)
}
