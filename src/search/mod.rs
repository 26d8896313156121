//! The A* search and its entry points for [`Grid`]s.

mod a_star;
pub use a_star::{a_star_search, a_star_search_with_stats, SearchStats};

mod frontier;
mod node;

use crate::{neighbors::Neighborhood, Grid, Path, Point, SearchConfig};

/// Finds the shortest Path from `start` to `goal` on `grid`.
///
/// Cells that hold anything other than `0` are treated as walls. Returns `None` if `start` or
/// `goal` are outside of the Grid or blocked, or if there is no way between them. The returned
/// Path starts with `start`, ends with `goal` and has a [`cost`](Path::cost) equal to its number
/// of steps.
///
/// Ties between equally short Paths are always broken the same way, so the same input gives
/// the same Path on every call.
///
/// ## Examples
/// ```
/// use astar_grid::prelude::*;
///
/// let grid = Grid::from_rows(&[
///     [0, 0, 0, 0, 0],
///     [1, 1, 1, 0, 0],
///     [0, 0, 0, 0, 0],
///     [0, 1, 1, 1, 1],
///     [0, 0, 0, 0, 0],
/// ])
/// .unwrap();
///
/// let path = find_path(&grid, (0, 0), (4, 4), &ManhattanNeighborhood::new()).unwrap();
///
/// assert_eq!(path.cost(), 14);
/// assert_eq!(path.len(), 15);
/// assert_eq!(path.first(), Some(&(0, 0)));
/// assert_eq!(path.last(), Some(&(4, 4)));
///
/// // (5, 5) is not on the Grid
/// assert!(find_path(&grid, (5, 5), (4, 4), &ManhattanNeighborhood::new()).is_none());
/// ```
pub fn find_path<N: Neighborhood>(
    grid: &Grid,
    start: Point,
    goal: Point,
    neighborhood: &N,
) -> Option<Path<Point>> {
    find_path_with_config(grid, start, goal, neighborhood, &SearchConfig::default())
}

/// Same as [`find_path`], but with a custom [`SearchConfig`].
pub fn find_path_with_config<N: Neighborhood>(
    grid: &Grid,
    start: Point,
    goal: Point,
    neighborhood: &N,
    config: &SearchConfig,
) -> Option<Path<Point>> {
    a_star_search(neighborhood, |p| grid.is_free(p), start, goal, config)
}

/// Runs one search for every `(start, goal)` pair in `queries`.
///
/// The result at index `i` belongs to `queries[i]`.
///
/// ## Examples
/// ```
/// use astar_grid::prelude::*;
///
/// let grid = Grid::from_rows(&[
///     [0, 0, 0],
///     [0, 1, 0],
///     [0, 1, 0],
/// ])
/// .unwrap();
///
/// let paths = find_paths(
///     &grid,
///     &[((0, 2), (2, 2)), ((1, 1), (0, 0))],
///     &ManhattanNeighborhood::new(),
///     &SearchConfig::default(),
/// );
///
/// assert_eq!(paths[0].as_ref().map(|p| p.cost()), Some(6));
/// assert!(paths[1].is_none());
/// ```
pub fn find_paths<N: Neighborhood>(
    grid: &Grid,
    queries: &[(Point, Point)],
    neighborhood: &N,
    config: &SearchConfig,
) -> Vec<Option<Path<Point>>> {
    queries
        .iter()
        .map(|&(start, goal)| find_path_with_config(grid, start, goal, neighborhood, config))
        .collect()
}

/// Same as [`find_paths`], but the searches are spread across the rayon Thread Pool.
///
/// Every search owns its own frontier and node table, only the Grid is shared.
#[cfg(feature = "parallel")]
pub fn find_paths_parallel<N: Neighborhood + Sync>(
    grid: &Grid,
    queries: &[(Point, Point)],
    neighborhood: &N,
    config: &SearchConfig,
) -> Vec<Option<Path<Point>>> {
    use rayon::prelude::*;

    log_debug!("running {} searches in parallel", queries.len());
    queries
        .par_iter()
        .map(|&(start, goal)| find_path_with_config(grid, start, goal, neighborhood, config))
        .collect()
}
