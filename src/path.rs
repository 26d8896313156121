use crate::{neighbors::Neighborhood, Point};

/// a Type to represent the Cost of traversing a Path
pub type Cost = usize;

/// A Path found by a search
///
/// Stores the sequence of Points from start to goal (both inclusive) in `path` and the total
/// Cost of walking it in `cost`. A Path from a Point to itself is just that one Point with a
/// Cost of `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
    /// the Path
    pub path: Vec<P>,
    /// the total Cost of the Path
    pub cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use astar_grid::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 2);
    ///
    /// assert_eq!(path.path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost, 2);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// the total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Consumes the Path and returns the Points on it.
    pub fn into_vec(self) -> Vec<P> {
        self.path
    }
}

impl Path<Point> {
    /// Converts the Path into flat Grid indices (`x + y * width`).
    ///
    /// ## Examples
    /// ```
    /// # use astar_grid::Path;
    /// let path = Path::new(vec![(0, 0), (1, 0), (1, 1)], 2);
    ///
    /// assert_eq!(path.to_indices(3), vec![0, 1, 4]);
    /// ```
    pub fn to_indices(&self, width: usize) -> Vec<usize> {
        self.path.iter().map(|&(x, y)| x + y * width).collect()
    }

    /// Checks that every step of the Path is a single move of `neighborhood`.
    pub fn is_connected<N: Neighborhood>(&self, neighborhood: &N) -> bool {
        let mut neighbors = vec![];
        self.path.windows(2).all(|step| {
            neighbors.clear();
            neighborhood.get_all_neighbors(step[0], &mut neighbors);
            neighbors.contains(&step[1])
        })
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

use std::cmp::Ordering;

impl<P: Ord> Ord for Path<P> {
    fn cmp(&self, other: &Path<P>) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl<P: Ord> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
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
