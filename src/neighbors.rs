//! The Movement Models a search can use

use crate::{Cost, Point};
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// Different Scenarios may have different constraints as to how a Path may be formed.
/// For example if Agents can only move along the 4 cardinal directions, any Paths generated should
/// reflect that by only containing those steps.
///
/// This Trait provides a function to query all neighboring Points of an existing Point, the Cost
/// of stepping to one of them and a Heuristic for how long it might take to reach a goal from a
/// Point.
///
/// The Movement Models provided by this Module:
/// - [`ManhattanNeighborhood`] for Agents that can move up, down, left or right
/// - [`MooreNeighborhood`] for Agents that can additionally move along the 4 diagonals
pub trait Neighborhood: Clone + Debug {
    /// Appends all Neighbors of a Point to `target`.
    ///
    /// The order has to be the same on every call, since it decides which of several equally
    /// short Paths is found. Points left of or above the Grid are never produced, but it is not
    /// necessary to check the right and bottom edge or whether the Tile at a Point is solid.
    /// That check is done later.
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);

    /// Gives a Heuristic for how long it takes to reach `goal` from `point`.
    ///
    /// The result has to be consistent with [`step_cost`](Neighborhood::step_cost), i.e. it may
    /// never overestimate, or the found Paths are no longer the shortest ones.
    fn heuristic(&self, point: Point, goal: Point) -> Cost;

    /// The Cost of a single step between two neighboring Points.
    fn step_cost(&self, _from: Point, _to: Point) -> Cost {
        1
    }

    /// Decides if a step between two neighboring free Points is legal.
    ///
    /// `is_free` answers for any Point on or off the Grid.
    fn allows_step(&self, _from: Point, _to: Point, _is_free: &dyn Fn(Point) -> bool) -> bool {
        true
    }
}

fn offset(point: Point, (dx, dy): (isize, isize)) -> Option<Point> {
    Some((
        point.0.checked_add_signed(dx)?,
        point.1.checked_add_signed(dy)?,
    ))
}

/// The distance between two Points when moving along the 4 cardinal directions
pub fn manhattan_distance(a: Point, b: Point) -> Cost {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// The distance between two Points when diagonal steps cost the same as straight ones
pub fn chebyshev_distance(a: Point, b: Point) -> Cost {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// Every step costs `1` and Neighbors are listed as up, right, down, left.
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManhattanNeighborhood;

impl ManhattanNeighborhood {
    const OFFSETS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

    /// Creates a new ManhattanNeighborhood.
    pub fn new() -> ManhattanNeighborhood {
        ManhattanNeighborhood
    }
}

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        target.extend(Self::OFFSETS.iter().filter_map(|&diff| offset(point, diff)));
    }
    fn heuristic(&self, point: Point, goal: Point) -> Cost {
        manhattan_distance(point, goal)
    }
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood),
/// [Maximum Metric](https://en.wikipedia.org/wiki/Chebyshev_distance) or Chebyshev Metric.
///
/// Every step costs `1`. A diagonal step is only allowed if both Tiles it passes by are free,
/// so Paths never squeeze through the gap between two diagonally touching walls.
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MooreNeighborhood;

impl MooreNeighborhood {
    const OFFSETS: [(isize, isize); 8] = [
        (0, -1),
        (1, -1),
        (1, 0),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
    ];

    /// Creates a new MooreNeighborhood.
    pub fn new() -> MooreNeighborhood {
        MooreNeighborhood
    }
}

impl Neighborhood for MooreNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        target.extend(Self::OFFSETS.iter().filter_map(|&diff| offset(point, diff)));
    }
    fn heuristic(&self, point: Point, goal: Point) -> Cost {
        chebyshev_distance(point, goal)
    }
    fn allows_step(&self, from: Point, to: Point, is_free: &dyn Fn(Point) -> bool) -> bool {
        from.0 == to.0 || from.1 == to.1 || (is_free((to.0, from.1)) && is_free((from.0, to.1)))
    }
}
