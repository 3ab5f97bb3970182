use crate::Point;

/// A route through the Maze, from the start to the goal (both inclusive).
///
/// Since every step between two neighboring Cells costs the same, the Cost of a Path is the
/// number of steps it takes, which is one less than the number of Cells in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<P = Point> {
    path: Vec<P>,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Cells
    pub fn new(path: Vec<P>) -> Path<P> {
        Path { path }
    }

    /// the number of steps from the first to the last Cell
    pub fn cost(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// the number of Cells in the Path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// true if the Path contains no Cells
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// the first Cell of the Path
    pub fn first(&self) -> Option<&P> {
        self.path.first()
    }

    /// the last Cell of the Path
    pub fn last(&self) -> Option<&P> {
        self.path.last()
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }

    /// the Cells of the Path as a slice
    pub fn as_slice(&self) -> &[P] {
        &self.path
    }
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.path == *rhs
    }
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost())?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{:?}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {:?}", p)?;
            }
            Ok(())
        }
    }
}
