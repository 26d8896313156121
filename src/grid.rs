//! The occupancy Grid that searches run on.

use crate::Point;
use std::fmt;

/// The raw value stored in a Cell of the [`Grid`].
///
/// `0` marks a free Cell. Every other value (walls, agents, markers, ...) is blocked.
pub type Cell = i32;

/// The value of a free Cell
pub const FREE: Cell = 0;
/// The value used for walls by [`Grid::set_blocked`]
pub const WALL: Cell = 1;

/// Errors caused by a malformed Grid or by addressing a Cell outside of it.
///
/// These are contract violations by the caller and are kept separate from a search simply
/// not finding a Path, which is reported as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The Grid has no rows or its rows have no Cells.
    #[error("grid must have at least one row and one column")]
    Empty,
    /// A row does not have the same length as the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// index of the offending row
        row: usize,
        /// the length of the first row
        expected: usize,
        /// the length of the offending row
        found: usize,
    },
    /// A Point lies outside of the Grid.
    #[error("point {point:?} is outside of the {width}x{height} grid")]
    OutOfBounds {
        /// the offending Point
        point: Point,
        /// width of the Grid
        width: usize,
        /// height of the Grid
        height: usize,
    },
}

/// A rectangular occupancy Grid, indexed by `(x, y)` with `0 <= x < width` and `0 <= y < height`.
///
/// Cells are stored row-major, so the Cell at `(x, y)` lives at index `x + y * width`.
/// The Grid is never modified by a search.
///
/// ## Examples
/// ```
/// use astar_grid::Grid;
///
/// // 0 = free, 1 = wall, 2 = another agent
/// let grid = Grid::from_rows(&[
///     [0, 0, 0],
///     [1, 2, 0],
///     [0, 0, 0],
/// ])
/// .unwrap();
///
/// assert_eq!(grid.size(), (3, 3));
/// assert!(grid.is_free((2, 1)));
/// assert!(!grid.is_free((1, 1)));
/// assert!(!grid.is_free((3, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a Grid of the given size where every Cell is free.
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            cells: vec![FREE; width * height],
        }
    }

    /// Creates a Grid from a list of rows, where `rows[y][x]` is the Cell at `(x, y)`.
    ///
    /// Fails with [`GridError::Empty`] if there are no Cells and with [`GridError::Ragged`]
    /// if the rows differ in length.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Grid, GridError> {
        let width = match rows.first() {
            Some(row) if !row.as_ref().is_empty() => row.as_ref().len(),
            _ => return Err(GridError::Empty),
        };
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Grid {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` of the Grid
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Checks if a Point lies on the Grid.
    pub fn in_bounds(&self, (x, y): Point) -> bool {
        x < self.width && y < self.height
    }

    /// The flat index of a Point, or `None` if it is outside of the Grid.
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if self.in_bounds(point) {
            Some(point.0 + point.1 * self.width)
        } else {
            None
        }
    }

    /// The Point belonging to a flat index, or `None` if the index is too large.
    pub fn point_of(&self, index: usize) -> Option<Point> {
        if index < self.cells.len() {
            Some((index % self.width, index / self.width))
        } else {
            None
        }
    }

    /// The Cell at a Point, or `None` if it is outside of the Grid.
    pub fn get(&self, point: Point) -> Option<Cell> {
        self.index_of(point).map(|i| self.cells[i])
    }

    /// Overwrites the Cell at a Point.
    pub fn set(&mut self, point: Point, cell: Cell) -> Result<(), GridError> {
        let index = self.index_of(point).ok_or(GridError::OutOfBounds {
            point,
            width: self.width,
            height: self.height,
        })?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Marks the Cell at a Point as a wall.
    pub fn set_blocked(&mut self, point: Point) -> Result<(), GridError> {
        self.set(point, WALL)
    }

    /// Checks if a Point is on the Grid and can be walked over.
    pub fn is_free(&self, point: Point) -> bool {
        self.get(point) == Some(FREE)
    }

    /// The raw Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for &cell in row {
                write!(fmt, "{}", if cell == FREE { '.' } else { '#' })?;
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}
