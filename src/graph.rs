use crate::{
    neighbors::{CompassNeighborhood, FIRST_COLUMN},
    Point, PointMap,
};

/// The adjacency lists of all open Cells of a Maze.
///
/// Every open Cell of the Grid is a Node of the Graph, even if it has no open neighbors. The
/// neighbors of a Node are stored in the expansion order of the [`CompassNeighborhood`] used
/// to build the Graph. Since each Cell checks its surroundings independently, the adjacency is
/// symmetric: if `a` lists `b`, `b` lists `a`.
///
/// Column 0 is a reserved border column. It is never part of the Graph, not even as a neighbor.
///
/// The Graph is immutable once built and can be shared between any number of searches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGraph {
    rows: usize,
    cols: usize,
    adjacency: PointMap<Vec<Point>>,
}

impl MazeGraph {
    /// Builds the Graph of a Grid with the default expansion order (up, left, right, down).
    ///
    /// ## Arguments
    /// - `(rows, cols)` - the size of the Grid
    /// - `is_open` - whether the Cell at a Point can be walked on
    ///
    /// ## Examples
    /// ```
    /// use maze_pathfinding::MazeGraph;
    ///
    /// // '#' = wall, '-' = open
    /// let grid = [
    ///     "#-#",
    ///     "#--",
    ///     "#-#",
    /// ];
    /// let is_open = |(row, col): (usize, usize)| grid[row].as_bytes()[col] == b'-';
    ///
    /// let graph = MazeGraph::new((3, 3), is_open);
    ///
    /// assert_eq!(graph.len(), 4);
    /// assert_eq!(graph.neighbors((1, 1)), Some(&[(0, 1), (1, 2), (2, 1)][..]));
    /// assert_eq!(graph.neighbors((0, 2)), None); // walls are not part of the Graph
    /// ```
    pub fn new((rows, cols): (usize, usize), is_open: impl Fn(Point) -> bool) -> MazeGraph {
        MazeGraph::with_neighborhood(&CompassNeighborhood::new(rows, cols), is_open)
    }

    /// Builds the Graph of a Grid, expanding neighbors in the order of `neighborhood`.
    ///
    /// The size of the Grid is taken from the Neighborhood.
    pub fn with_neighborhood(
        neighborhood: &CompassNeighborhood,
        is_open: impl Fn(Point) -> bool,
    ) -> MazeGraph {
        let (rows, cols) = neighborhood.size();
        let mut adjacency = PointMap::with_capacity(rows * cols.saturating_sub(FIRST_COLUMN));

        let mut all_neighbors = vec![];
        timed!("build maze graph", {
            for row in 0..rows {
                for col in FIRST_COLUMN..cols {
                    let pos = (row, col);
                    if !is_open(pos) {
                        continue;
                    }
                    all_neighbors.clear();
                    neighborhood.get_all_neighbors(pos, &mut all_neighbors);
                    let neighbors = all_neighbors
                        .iter()
                        .copied()
                        .filter(|&other| is_open(other))
                        .collect();
                    adjacency.insert(pos, neighbors);
                }
            }
        });

        MazeGraph {
            rows,
            cols,
            adjacency,
        }
    }

    /// the `(rows, cols)` of the Grid this Graph was built from
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// the number of open Cells
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// true if the Grid had no open Cells
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// true if `point` is an open Cell of the Graph
    pub fn contains(&self, point: Point) -> bool {
        self.adjacency.contains_key(&point)
    }

    /// The neighbors of `point` in expansion order, or `None` if `point` is not an open Cell.
    pub fn neighbors(&self, point: Point) -> Option<&[Point]> {
        self.adjacency.get(&point).map(Vec::as_slice)
    }

    /// true if `b` can be reached from `a` in a single step
    pub fn are_adjacent(&self, a: Point, b: Point) -> bool {
        self.neighbors(a).is_some_and(|n| n.contains(&b))
    }

    /// An Iterator over all open Cells. The order is unspecified.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.adjacency.keys().copied()
    }
}
