//! The compass Directions and the order in which a Cell's neighbors are expanded

use crate::Point;

/// One of the 4 cardinal Directions on the Grid.
///
/// Rows grow downwards and columns grow to the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    /// towards row 0
    UP = 0,
    /// towards column 0
    LEFT = 1,
    /// away from column 0
    RIGHT = 2,
    /// away from row 0
    DOWN = 3,
}
pub use self::Dir::*;

const UNIT_CIRCLE: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

impl Dir {
    /// The order in which neighbors are expanded by default: up, left, right, down.
    ///
    /// Depth-first search pushes neighbors in this order, which means they are visited in
    /// reverse: down first, up last.
    pub const EXPANSION_ORDER: [Dir; 4] = [UP, LEFT, RIGHT, DOWN];

    /// the `(row, column)` offset of a single step in this Direction
    pub fn offset(self) -> (isize, isize) {
        UNIT_CIRCLE[self as usize]
    }
}

/// The first column that belongs to the Maze. Column 0 is a reserved border.
pub const FIRST_COLUMN: usize = 1;

/// Returns the Point one step from `pos` in `dir`, if it is still within a grid of
/// `(rows, cols)`. Points in the reserved border column are treated as out of bounds.
pub fn get_in_dir(pos: Point, dir: Dir, (rows, cols): (usize, usize)) -> Option<Point> {
    let (dr, dc) = dir.offset();
    let row = pos.0.checked_add_signed(dr)?;
    let col = pos.1.checked_add_signed(dc)?;
    if row < rows && (FIRST_COLUMN..cols).contains(&col) {
        Some((row, col))
    } else {
        None
    }
}

/// Enumerates the neighbors of a Cell along the 4 cardinal Directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood).
///
/// ```text
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
///
/// The order of the Directions decides the order of every neighbor list in a
/// [`MazeGraph`](crate::MazeGraph), which in turn decides the route taken by depth-first search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompassNeighborhood {
    rows: usize,
    cols: usize,
    order: [Dir; 4],
}

impl CompassNeighborhood {
    /// Creates a new CompassNeighborhood using [`Dir::EXPANSION_ORDER`].
    ///
    /// `rows` and `cols` are the size of the Grid to move on.
    pub fn new(rows: usize, cols: usize) -> CompassNeighborhood {
        CompassNeighborhood::with_order(rows, cols, Dir::EXPANSION_ORDER)
    }

    /// Creates a new CompassNeighborhood that expands neighbors in a custom order.
    ///
    /// ## Panics
    /// If `order` does not contain every Direction exactly once.
    ///
    /// ## Examples
    /// ```
    /// # use maze_pathfinding::neighbors::*;
    /// let neighborhood = CompassNeighborhood::with_order(3, 3, [RIGHT, DOWN, LEFT, UP]);
    ///
    /// let mut neighbors = vec![];
    /// neighborhood.get_all_neighbors((1, 1), &mut neighbors);
    /// assert_eq!(neighbors, vec![(1, 2), (2, 1), (0, 1)]);
    /// ```
    pub fn with_order(rows: usize, cols: usize, order: [Dir; 4]) -> CompassNeighborhood {
        assert!(
            Dir::EXPANSION_ORDER.iter().all(|dir| order.contains(dir)),
            "expansion order {:?} is not a permutation of the 4 Directions",
            order
        );
        CompassNeighborhood { rows, cols, order }
    }

    /// the `(rows, cols)` of the Grid
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Appends all in-bounds neighbors of `point` to `target`, in expansion order.
    ///
    /// Note that this does not check whether the neighbors are walls.
    pub fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        let size = self.size();
        target.extend(
            self.order
                .iter()
                .filter_map(|&dir| get_in_dir(point, dir, size)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_steps() {
        for dir in Dir::EXPANSION_ORDER {
            let (dr, dc) = dir.offset();
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
    }

    #[test]
    fn in_dir_bounds() {
        let size = (3, 4);
        assert_eq!(get_in_dir((0, 1), UP, size), None);
        assert_eq!(get_in_dir((0, 1), LEFT, size), None);
        assert_eq!(get_in_dir((0, 1), RIGHT, size), Some((0, 2)));
        assert_eq!(get_in_dir((0, 1), DOWN, size), Some((1, 1)));
        assert_eq!(get_in_dir((2, 3), DOWN, size), None);
        assert_eq!(get_in_dir((2, 3), RIGHT, size), None);
    }

    #[test]
    fn default_order() {
        let neighborhood = CompassNeighborhood::new(5, 5);
        let mut neighbors = vec![];
        neighborhood.get_all_neighbors((2, 2), &mut neighbors);
        assert_eq!(neighbors, vec![(1, 2), (2, 1), (2, 3), (3, 2)]);
    }

    #[test]
    fn skips_border_column() {
        let neighborhood = CompassNeighborhood::new(5, 5);
        let mut neighbors = vec![];
        neighborhood.get_all_neighbors((4, 1), &mut neighbors);
        assert_eq!(neighbors, vec![(3, 1), (4, 2)]);
    }

    #[test]
    fn permuted_order() {
        let neighborhood = CompassNeighborhood::with_order(5, 5, [DOWN, UP, RIGHT, LEFT]);
        let mut neighbors = vec![];
        neighborhood.get_all_neighbors((2, 2), &mut neighbors);
        assert_eq!(neighbors, vec![(3, 2), (1, 2), (2, 3), (2, 1)]);
    }

    #[test]
    #[should_panic(expected = "not a permutation")]
    fn repeated_direction_is_rejected() {
        CompassNeighborhood::with_order(5, 5, [UP, UP, LEFT, LEFT]);
    }
}
