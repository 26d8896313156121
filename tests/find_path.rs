use astar_grid::{neighbors::manhattan_distance, prelude::*, Cell, GridError, Point};
use nanorand::{Rng, WyRand};
use std::collections::VecDeque;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn grid_from<const W: usize>(rows: &[[Cell; W]]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

/// Length of the shortest 4-connected route, found by a plain breadth-first search.
fn bfs_distance(grid: &Grid, start: Point, goal: Point) -> Option<usize> {
    if !grid.is_free(start) || !grid.is_free(goal) {
        return None;
    }
    let mut dist = vec![usize::MAX; grid.width() * grid.height()];
    let mut queue = VecDeque::new();
    dist[grid.index_of(start)?] = 0;
    queue.push_back(start);
    let mut neighbors = vec![];
    while let Some(current) = queue.pop_front() {
        let d = dist[grid.index_of(current)?];
        if current == goal {
            return Some(d);
        }
        neighbors.clear();
        ManhattanNeighborhood.get_all_neighbors(current, &mut neighbors);
        for &other in neighbors.iter() {
            if let Some(i) = grid.index_of(other) {
                if grid.is_free(other) && dist[i] == usize::MAX {
                    dist[i] = d + 1;
                    queue.push_back(other);
                }
            }
        }
    }
    None
}

fn assert_valid(grid: &Grid, path: &Path<Point>, start: Point, goal: Point) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    assert_eq!(path.len(), path.cost() + 1);
    assert!(path.iter().all(|&p| grid.is_free(p)), "{}", path);
    assert!(
        path.windows(2)
            .all(|step| manhattan_distance(step[0], step[1]) == 1),
        "{}",
        path
    );
}

#[test]
fn open_grid() {
    init();
    let grid = Grid::new(5, 5);
    let path = find_path(&grid, (0, 0), (4, 4), &ManhattanNeighborhood).unwrap();

    assert_eq!(path.len(), 9);
    assert_eq!(path[0], (0, 0));
    assert_eq!(path[8], (4, 4));
    assert_valid(&grid, &path, (0, 0), (4, 4));
}

#[test]
fn forced_corridor() {
    init();
    let grid = grid_from(&[
        [0, 1, 1, 1, 1],
        [0, 1, 0, 0, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 0, 0, 1, 0],
    ]);
    let path = find_path(&grid, (0, 0), (4, 4), &ManhattanNeighborhood).unwrap();

    #[rustfmt::skip]
    assert_eq!(
        path.path,
        vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 4), (2, 4), (2, 3), (2, 2), (2, 1), (3, 1), (4, 1), (4, 2), (4, 3), (4, 4)],
    );
    assert_eq!(path.cost(), 14);
}

#[test]
fn goal_inside_ring() {
    init();
    let grid = grid_from(&[
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 1, 1, 1],
        [0, 0, 1, 0, 1],
        [0, 0, 1, 1, 1],
    ]);
    assert!(find_path(&grid, (0, 0), (3, 3), &ManhattanNeighborhood).is_none());
    assert!(find_path(&grid, (0, 0), (3, 3), &MooreNeighborhood).is_none());
}

#[test]
fn start_is_goal() {
    init();
    let grid = Grid::new(3, 3);
    let path = find_path(&grid, (1, 1), (1, 1), &ManhattanNeighborhood).unwrap();

    assert_eq!(path.path, vec![(1, 1)]);
    assert_eq!(path.cost(), 0);
    assert_eq!(path.to_indices(grid.width()), vec![4]);
}

#[test]
fn out_of_bounds() {
    init();
    let grid = Grid::new(3, 3);
    assert!(find_path(&grid, (5, 5), (1, 1), &ManhattanNeighborhood).is_none());
    assert!(find_path(&grid, (1, 1), (3, 0), &ManhattanNeighborhood).is_none());
    assert!(find_path(&grid, (5, 5), (5, 5), &ManhattanNeighborhood).is_none());
}

#[test]
fn every_path_blocked() {
    init();
    let grid = grid_from(&[
        [0, 1, 1, 1, 1],
        [1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1],
        [1, 1, 1, 1, 0],
    ]);
    assert!(find_path(&grid, (0, 0), (4, 4), &ManhattanNeighborhood).is_none());
}

#[test]
fn agents_block_like_walls() {
    init();
    let grid = grid_from(&[
        [0, 0, 0], //
        [2, 2, 0],
        [0, 0, 0],
    ]);
    let path = find_path(&grid, (0, 0), (0, 2), &ManhattanNeighborhood).unwrap();
    assert_eq!(path.cost(), 6);
    assert_valid(&grid, &path, (0, 0), (0, 2));
}

#[test]
fn maze() {
    init();
    let grid = grid_from(&[
        [0, 0, 0, 0, 0, 0, 1, 0],
        [0, 1, 1, 1, 1, 0, 0, 0],
        [0, 1, 0, 0, 0, 0, 1, 0],
        [0, 1, 0, 1, 1, 1, 1, 0],
        [0, 1, 0, 0, 0, 0, 0, 0],
        [0, 1, 1, 1, 1, 0, 1, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
    ]);

    let path = find_path(&grid, (0, 0), (6, 4), &ManhattanNeighborhood).unwrap();
    assert_eq!(path.len(), 13);
    let indices = path.to_indices(grid.width());
    assert_eq!(indices[0], 0);
    assert_eq!(indices[12], 38);
    assert_valid(&grid, &path, (0, 0), (6, 4));

    let path = find_path(&grid, (2, 2), (0, 3), &ManhattanNeighborhood).unwrap();
    assert_eq!(path.len(), 14);
    let indices = path.to_indices(grid.width());
    assert_eq!(indices[0], 18);
    assert_eq!(indices[13], 24);
    assert_valid(&grid, &path, (2, 2), (0, 3));
}

#[test]
fn winding_path() {
    init();
    let grid = grid_from(&[
        [0, 1, 0, 0, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 0, 0, 1, 0],
    ]);
    let path = find_path(&grid, (0, 0), (4, 4), &ManhattanNeighborhood).unwrap();
    assert_eq!(path.cost(), 16);
    assert!(path.len() < 25);
    assert_valid(&grid, &path, (0, 0), (4, 4));
}

#[test]
fn tie_break_is_fixed() {
    init();
    let grid = Grid::new(5, 5);
    let path = find_path(&grid, (0, 0), (4, 4), &ManhattanNeighborhood).unwrap();
    #[rustfmt::skip]
    assert_eq!(
        path.path,
        vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (4, 1), (4, 2), (4, 3), (4, 4)],
    );

    let grid = grid_from(&[
        [0, 0, 0, 0, 0],
        [1, 1, 1, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 1],
        [0, 0, 0, 0, 0],
    ]);
    let path = find_path(&grid, (0, 0), (4, 4), &ManhattanNeighborhood).unwrap();
    #[rustfmt::skip]
    assert_eq!(
        path.path,
        vec![(0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (3, 2), (2, 2), (1, 2), (0, 2), (0, 3), (0, 4), (1, 4), (2, 4), (3, 4), (4, 4)],
    );
}

#[test]
fn deterministic() {
    init();
    let mut rng = WyRand::new_seed(7);
    let grid = random_grid(&mut rng, 30, 30, 25);
    for _ in 0..20 {
        let start = (rng.generate_range(0_usize..30), rng.generate_range(0_usize..30));
        let goal = (rng.generate_range(0_usize..30), rng.generate_range(0_usize..30));
        let first = find_path(&grid, start, goal, &ManhattanNeighborhood);
        let second = find_path(&grid, start, goal, &ManhattanNeighborhood);
        assert_eq!(first, second);
    }
}

fn random_grid(rng: &mut WyRand, width: usize, height: usize, wall_percent: u32) -> Grid {
    let mut grid = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            if rng.generate_range(0_u32..100) < wall_percent {
                grid.set_blocked((x, y)).unwrap();
            }
        }
    }
    grid
}

#[test]
fn matches_breadth_first_search() {
    init();
    let mut rng = WyRand::new_seed(42);
    let mut found = 0;
    for _ in 0..300 {
        let width = rng.generate_range(1_usize..12);
        let height = rng.generate_range(1_usize..12);
        let grid = random_grid(&mut rng, width, height, 30);
        let start = (rng.generate_range(0..width), rng.generate_range(0..height));
        let goal = (rng.generate_range(0..width), rng.generate_range(0..height));

        let path = find_path(&grid, start, goal, &ManhattanNeighborhood);
        let expected = bfs_distance(&grid, start, goal);
        assert_eq!(
            path.as_ref().map(|p| p.cost()),
            expected,
            "{} -> {:?} {:?}",
            grid,
            start,
            goal
        );
        if let Some(path) = path {
            assert_valid(&grid, &path, start, goal);
            found += 1;
        }
    }
    assert!(found > 0);
}

#[test]
fn batch_of_searches() {
    init();
    let mut rng = WyRand::new_seed(3);
    let grid = random_grid(&mut rng, 20, 20, 20);
    let queries: Vec<(Point, Point)> = (0..40)
        .map(|_| {
            (
                (rng.generate_range(0_usize..20), rng.generate_range(0_usize..20)),
                (rng.generate_range(0_usize..20), rng.generate_range(0_usize..20)),
            )
        })
        .collect();
    let config = SearchConfig::default();

    let paths = find_paths(&grid, &queries, &ManhattanNeighborhood, &config);
    for (&(start, goal), path) in queries.iter().zip(paths.iter()) {
        assert_eq!(
            path.as_ref().map(|p| p.cost()),
            bfs_distance(&grid, start, goal)
        );
    }

    #[cfg(feature = "parallel")]
    assert_eq!(
        find_paths_parallel(&grid, &queries, &ManhattanNeighborhood, &config),
        paths
    );
}

#[test]
fn guard_stops_search() {
    init();
    let grid = Grid::new(200, 200);
    let config = SearchConfig::GUARDED.with_max_expansions(50);
    assert!(
        find_path_with_config(&grid, (0, 0), (199, 199), &ManhattanNeighborhood, &config).is_none()
    );
    // a short Path still fits into the budget
    assert!(
        find_path_with_config(&grid, (0, 0), (5, 5), &ManhattanNeighborhood, &config).is_some()
    );
}

#[test]
fn malformed_grid() {
    let rows = vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0]];
    assert_eq!(
        Grid::from_rows(&rows),
        Err(GridError::Ragged {
            row: 2,
            expected: 3,
            found: 2
        })
    );
}
