use crate::{
    neighbors::{CompassNeighborhood, FIRST_COLUMN},
    MazeGraph, Point,
};
use std::{fmt, path::Path as FilePath, str::FromStr};
use thiserror::Error;

/// A single Cell of a [`Maze`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// cannot be walked on, written as `#`
    Wall,
    /// can be walked on, written as `-`
    Open,
}

impl Cell {
    /// Parses the marker of a Cell
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '#' => Some(Cell::Wall),
            '-' => Some(Cell::Open),
            _ => None,
        }
    }

    /// the marker of this Cell
    pub fn to_char(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => '-',
        }
    }
}

/// The ways reading a [`Maze`] can fail
#[derive(Debug, Error)]
pub enum MazeError {
    /// the input did not contain any rows
    #[error("the maze is empty")]
    Empty,
    /// a row is narrower than the two columns every Maze needs
    #[error("row {row} has {len} columns, at least 2 are required")]
    TooNarrow {
        /// index of the offending row
        row: usize,
        /// number of Cells in that row
        len: usize,
    },
    /// a row has a different length than the first row
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        /// index of the offending row
        row: usize,
        /// number of Cells in the first row
        expected: usize,
        /// number of Cells in the offending row
        found: usize,
    },
    /// a character other than `#` or `-` was found
    #[error("unknown cell marker {marker:?} at {pos:?}")]
    InvalidCell {
        /// `(row, column)` of the marker
        pos: Point,
        /// the character found
        marker: char,
    },
    /// the Maze file could not be read
    #[error("failed to read maze: {0}")]
    Io(#[from] std::io::Error),
}

/// A rectangular Grid of Walls and open Cells.
///
/// The text format has one row per line, with `#` for walls and `-` for open Cells. Whitespace
/// between the markers is ignored and so are empty lines.
///
/// The start of every Maze is `(0, 1)`, the Cell right of the top-left corner. The goal is the
/// first open Cell on the last row. Column 0 is a border that searches never enter, so it is
/// never the goal either.
///
/// ## Examples
/// ```
/// use maze_pathfinding::{Cell, Maze};
///
/// let maze: Maze = "
///     ## - # #
///     ## - - #
///     ## # - #
/// ".parse().unwrap();
///
/// assert_eq!(maze.size(), (3, 4));
/// assert_eq!(maze.get((1, 2)), Some(Cell::Open));
/// assert_eq!(maze.start(), (0, 1));
/// assert_eq!(maze.goal(), Some((2, 2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Maze {
    /// The Cell every search starts at
    pub const START: Point = (0, 1);

    /// Creates a Maze from its rows.
    ///
    /// Fails if there are no rows, or if the rows are not all of the same length of at least 2.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Maze, MazeError> {
        let cols = rows.first().ok_or(MazeError::Empty)?.len();
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (index, row) in rows.iter().enumerate() {
            if row.len() < 2 {
                return Err(MazeError::TooNarrow {
                    row: index,
                    len: row.len(),
                });
            }
            if row.len() != cols {
                return Err(MazeError::Ragged {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Maze {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Reads a Maze from a text file.
    pub fn load(path: impl AsRef<FilePath>) -> Result<Maze, MazeError> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }

    /// the `(rows, cols)` of the Maze
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// the Cell at `pos`, or `None` if `pos` is outside of the Maze
    pub fn get(&self, (row, col): Point) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// true if `pos` is inside of the Maze and not a Wall
    pub fn is_open(&self, pos: Point) -> bool {
        self.get(pos) == Some(Cell::Open)
    }

    /// The Cell every search starts at. See [`Maze::START`].
    pub fn start(&self) -> Point {
        Maze::START
    }

    /// The first open Cell on the last row, if there is one. Column 0 is skipped.
    pub fn goal(&self) -> Option<Point> {
        let row = self.rows - 1;
        (FIRST_COLUMN..self.cols)
            .map(|col| (row, col))
            .find(|&pos| self.is_open(pos))
    }

    /// Builds the [`MazeGraph`] of this Maze with the default expansion order.
    pub fn graph(&self) -> MazeGraph {
        MazeGraph::new(self.size(), |pos| self.is_open(pos))
    }

    /// Builds the [`MazeGraph`] of this Maze with a custom expansion order.
    ///
    /// The size of `neighborhood` should match [`Maze::size`].
    pub fn graph_with_neighborhood(&self, neighborhood: &CompassNeighborhood) -> MazeGraph {
        MazeGraph::with_neighborhood(neighborhood, |pos| self.is_open(pos))
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(text: &str) -> Result<Maze, MazeError> {
        let rows = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .enumerate()
                    .map(|(col, marker)| {
                        Cell::from_char(marker).ok_or(MazeError::InvalidCell {
                            pos: (row, col),
                            marker,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Maze::from_rows(rows)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let mut cells = row.iter();
            if let Some(first) = cells.next() {
                write!(fmt, "{}", first.to_char())?;
            }
            for cell in cells {
                write!(fmt, " {}", cell.to_char())?;
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}
