use super::frontier::Frontier;
use super::node::{NodeID, SearchNode};
use crate::{neighbors::Neighborhood, Path, Point, PointMap, PointSet, SearchConfig};

use slab::Slab;

/// Counters collected while running a single search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Points that were taken from the frontier and had their Neighbors looked at
    pub expanded: usize,
    /// Points that were added to the frontier, including the start
    pub discovered: usize,
    /// times a queued Point got a cheaper route
    pub relaxations: usize,
    /// the largest size the frontier reached
    pub max_frontier: usize,
    /// `true` if the search stopped because of [`SearchConfig::max_expansions`]
    pub limit_reached: bool,
}

/// Searches for the shortest Path from `start` to `goal` using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// This is the closure driven backend of [`find_path`](crate::find_path). The Grid itself is
/// never needed, only a way to tell if a Point can be walked over.
///
/// ## Arguments
/// - `neighborhood` - the Movement Model, see [`Neighborhood`]
/// - `is_free` - returns `true` if a Point is on the Grid and can be walked over
/// - `start` - the Point to start at
/// - `goal` - the Point to find a Path to
/// - `config` - limits for the search, see [`SearchConfig`]
///
/// ## Returns
/// the Path, if one was found, or `None` if the `goal` is unreachable, `start` or `goal` are not
/// free or the search hit `config.max_expansions`.
///
/// The first Point in the Path is always `start` and the last is `goal`.
///
/// ## Examples
/// ```
/// use astar_grid::{prelude::*, Point};
///
/// let walls = [(1, 0), (1, 1)];
/// let is_free = |(x, y): Point| x < 3 && y < 3 && !walls.contains(&(x, y));
///
/// let path = a_star_search(
///     &ManhattanNeighborhood::new(),
///     is_free,
///     (0, 0),
///     (2, 0),
///     &SearchConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(path.cost(), 6);
/// assert_eq!(path.len(), 7);
/// ```
pub fn a_star_search<N: Neighborhood>(
    neighborhood: &N,
    is_free: impl Fn(Point) -> bool,
    start: Point,
    goal: Point,
    config: &SearchConfig,
) -> Option<Path<Point>> {
    a_star_search_with_stats(neighborhood, is_free, start, goal, config).0
}

/// Same as [`a_star_search`], but also returns what the search did.
pub fn a_star_search_with_stats<N: Neighborhood>(
    neighborhood: &N,
    is_free: impl Fn(Point) -> bool,
    start: Point,
    goal: Point,
    config: &SearchConfig,
) -> (Option<Path<Point>>, SearchStats) {
    let mut stats = SearchStats::default();

    if !is_free(start) || !is_free(goal) {
        log_debug!("a*: {:?} -> {:?} rejected, endpoint is blocked", start, goal);
        return (None, stats);
    }
    if start == goal {
        return (Some(Path::new(vec![start], 0)), stats);
    }

    let mut nodes: Slab<SearchNode> = Slab::with_capacity(config.size_hint);
    let mut ids = PointMap::with_capacity(config.size_hint);
    let mut explored = PointSet::with_capacity(config.size_hint);
    let mut frontier = Frontier::with_capacity(config.size_hint / 2);

    let start_id = nodes.insert(SearchNode::new(
        start,
        0,
        neighborhood.heuristic(start, goal),
        None,
        0,
    ));
    ids.insert(start, start_id);
    frontier.push(start_id, nodes[start_id].priority());
    stats.discovered = 1;
    stats.max_frontier = 1;

    let step_filter: &dyn Fn(Point) -> bool = &is_free;
    let mut neighbors = vec![];

    while let Some(current_id) = frontier.pop() {
        let (current_pos, current_g) = {
            let current = &nodes[current_id];
            (current.pos, current.g)
        };
        if current_pos == goal {
            let path = reconstruct(&nodes, current_id);
            log_debug!(
                "a*: {:?} -> {:?} found, cost {}, {} expanded",
                start,
                goal,
                current_g,
                stats.expanded
            );
            return (Some(Path::new(path, current_g)), stats);
        }
        if let Some(limit) = config.max_expansions {
            if stats.expanded >= limit {
                stats.limit_reached = true;
                log_debug!(
                    "a*: {:?} -> {:?} gave up after {} expansions",
                    start,
                    goal,
                    limit
                );
                return (None, stats);
            }
        }

        explored.insert(current_pos);
        stats.expanded += 1;

        neighbors.clear();
        neighborhood.get_all_neighbors(current_pos, &mut neighbors);
        for &other_pos in neighbors.iter() {
            if explored.contains(&other_pos)
                || !is_free(other_pos)
                || !neighborhood.allows_step(current_pos, other_pos, step_filter)
            {
                continue;
            }
            let other_g = current_g + neighborhood.step_cost(current_pos, other_pos);

            if let Some(&other_id) = ids.get(&other_pos) {
                // not explored, so it is still in the frontier
                let other = &mut nodes[other_id];
                if other_g < other.g {
                    other.relax(other_g, current_id);
                    frontier.decrease_key(other_id, other.priority());
                    stats.relaxations += 1;
                }
            } else {
                let heuristic = neighborhood.heuristic(other_pos, goal);
                let seq = nodes.len();
                let other_id = nodes.insert(SearchNode::new(
                    other_pos,
                    other_g,
                    heuristic,
                    Some(current_id),
                    seq,
                ));
                ids.insert(other_pos, other_id);
                frontier.push(other_id, nodes[other_id].priority());
                stats.discovered += 1;
            }
        }
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }
    debug_assert!(frontier.is_empty());

    log_debug!(
        "a*: {:?} -> {:?} unreachable, {} expanded",
        start,
        goal,
        stats.expanded
    );
    (None, stats)
}

/// Follows the parent links from `goal_id` back to the start.
fn reconstruct(nodes: &Slab<SearchNode>, goal_id: NodeID) -> Vec<Point> {
    let mut steps = vec![];
    let mut current = Some(goal_id);
    while let Some(id) = current {
        let node = &nodes[id];
        log_trace!("a*: path step {:?} (g = {})", node.pos, node.g);
        steps.push(node.pos);
        current = node.parent;
    }
    steps.reverse();
    steps
}
