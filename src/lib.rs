#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find shortest Paths on an occupancy Grid.
//!
//! ## Introduction
//! Agents moving on a Grid usually need the shortest way from where they are to where they want
//! to be, walking around walls and other Agents. This crate answers exactly that question with
//! the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm): given a [`Grid`], a
//! start and a goal it either returns the Points of a shortest Path from start to goal (both
//! inclusive) or `None` if there is no such Path.
//!
//! Not finding a Path is a normal outcome and never an error. This includes start or goal lying
//! outside of the Grid or on a blocked Cell. Only malformed input, like a Grid built from rows
//! of different lengths, is reported through [`GridError`].
//!
//! Every search is a plain function call that owns all of its state, so any number of searches
//! can run at the same time on the same Grid.
//!
//! ## Examples
//! Creating the Grid:
//! ```
//! use astar_grid::prelude::*;
//!
//! // 0 = free, 1 = wall, 2 = another agent
//! let grid = Grid::from_rows(&[
//!     [0, 0, 0, 0, 0],
//!     [0, 1, 1, 1, 0],
//!     [0, 0, 0, 1, 0],
//!     [0, 2, 0, 1, 0],
//!     [0, 0, 0, 0, 0],
//! ])
//! .unwrap();
//! ```
//! Every Cell that is not `0` is treated as blocked.
//!
//! ### Pathfinding
//! Finding the Path to a Goal:
//! ```
//! # use astar_grid::prelude::*;
//! #
//! # // 0 = free, 1 = wall, 2 = another agent
//! # let grid = Grid::from_rows(&[
//! #     [0, 0, 0, 0, 0],
//! #     [0, 1, 1, 1, 0],
//! #     [0, 0, 0, 1, 0],
//! #     [0, 2, 0, 1, 0],
//! #     [0, 0, 0, 0, 0],
//! # ])
//! # .unwrap();
//! #
//! let start = (0, 0);
//! let goal = (2, 2);
//!
//! // find_path returns Some(Path) on success
//! let path = find_path(&grid, start, goal, &ManhattanNeighborhood::new()).unwrap();
//!
//! assert_eq!(path.path, vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
//! assert_eq!(path.cost(), 4);
//! ```
//! The last Parameter is the Movement Model. See the [neighbors Module](neighbors/index.html).
//!
//! ### Configuration
//! [`find_path_with_config`] takes a [`SearchConfig`] to limit how much work a single search
//! may do before giving up:
//! ```
//! # use astar_grid::prelude::*;
//! let grid = Grid::new(100, 100);
//!
//! let config = SearchConfig::default().with_max_expansions(10);
//! let path = find_path_with_config(
//!     &grid,
//!     (0, 0),
//!     (99, 99),
//!     &ManhattanNeighborhood::new(),
//!     &config,
//! );
//!
//! assert!(path.is_none());
//! ```
//!
//! ## Crate Features
//! - `parallel` (default): enables [`find_paths_parallel`] using rayon.
//! - `log`: reports the outcome of every search through the `log` facade.

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        log::debug!($($arg)+)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        if false {
            let _ = format!($($arg)+);
        }
    };
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)+) => {
        log::trace!($($arg)+)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)+) => {
        if false {
            let _ = format!($($arg)+);
        }
    };
}

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// A [`HashMap`](hashbrown::HashMap) keyed by Points
pub type PointMap<V> = hashbrown::HashMap<Point, V>;
/// A [`HashSet`](hashbrown::HashSet) of Points
pub type PointSet = hashbrown::HashSet<Point>;

mod config;
pub use self::config::SearchConfig;

mod grid;
pub use self::grid::{Cell, Grid, GridError, FREE, WALL};

pub mod neighbors;

mod path;
pub use self::path::{Cost, Path};

mod search;
#[cfg(feature = "parallel")]
pub use self::search::find_paths_parallel;
pub use self::search::{
    a_star_search, a_star_search_with_stats, find_path, find_path_with_config, find_paths,
    SearchStats,
};

/// The most commonly used items of this crate
pub mod prelude {
    #[cfg(feature = "parallel")]
    pub use crate::find_paths_parallel;
    pub use crate::{
        a_star_search, find_path, find_path_with_config, find_paths,
        neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
        Grid, Path, SearchConfig,
    };
}
