use astar_grid::{prelude::*, Point};
use rand::Rng;
use std::time::Instant;

const SIZE: usize = 512;

fn main() {
    let mut rng = rand::thread_rng();

    let (width, height) = (SIZE, SIZE);
    let points: [Point; 4] = [(0, 0), (0, SIZE - 1), (SIZE - 1, 0), (SIZE - 1, SIZE - 1)];
    let queries: Vec<(Point, Point)> = (0..4)
        .flat_map(|i| (0..4).filter(move |j| *j != i).map(move |j| (points[i], points[j])))
        .collect();
    let config = SearchConfig::default().with_size_hint(SIZE * 4);

    let mut results: Vec<(&str, Vec<f64>)> = vec![("sequential", vec![]), ("parallel", vec![])];

    for _ in 0..10 {
        let mut grid = Grid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if rng.gen_range(0..100) < 30 {
                    grid.set_blocked((x, y)).expect("point is on the grid");
                }
            }
        }
        for &p in points.iter() {
            grid.set(p, astar_grid::FREE).expect("point is on the grid");
        }

        println!("finished Grid gen");

        let start_time = Instant::now();
        let sequential = find_paths(&grid, &queries, &ManhattanNeighborhood, &config);
        results[0].1.push(start_time.elapsed().as_secs_f64() * 1000.0);

        let start_time = Instant::now();
        let parallel = find_paths_parallel(&grid, &queries, &ManhattanNeighborhood, &config);
        results[1].1.push(start_time.elapsed().as_secs_f64() * 1000.0);

        assert_eq!(sequential, parallel);

        let costs: Vec<Option<usize>> = sequential
            .iter()
            .map(|p| p.as_ref().map(|p| p.cost()))
            .collect();
        println!("costs: {:?}", costs);
    }

    for (name, times) in results {
        let min_time = times.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_time = times.iter().cloned().fold(0.0_f64, f64::max);
        let avg_time = times.iter().sum::<f64>() / times.len() as f64;

        println!(
            "{} | {:.3}ms - {:.3}ms; {:.3}ms",
            name, min_time, max_time, avg_time,
        );
    }
}
