use maze_pathfinding::prelude::*;
use nanorand::{Rng, WyRand};
use std::collections::{HashMap, VecDeque};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// roughly a third of the cells are walls, the start is always open.
/// The border column is filled like any other, searches must ignore it.
fn random_maze(rng: &mut WyRand, rows: usize, cols: usize) -> Maze {
    let grid: Vec<Vec<Cell>> = (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| {
                    if (row, col) == Maze::START || rng.generate_range(0_u32..3) != 0 {
                        Cell::Open
                    } else {
                        Cell::Wall
                    }
                })
                .collect()
        })
        .collect();
    Maze::from_rows(grid).unwrap()
}

/// shortest distance in steps, by breadth-first search
fn reference_distance(graph: &MazeGraph, start: Point, goal: Point) -> Option<usize> {
    let mut distances = HashMap::new();
    let mut queue = VecDeque::new();
    distances.insert(start, 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let distance = distances[&current];
        if current == goal {
            return Some(distance);
        }
        for &other in graph.neighbors(current).unwrap() {
            if !distances.contains_key(&other) {
                distances.insert(other, distance + 1);
                queue.push_back(other);
            }
        }
    }
    None
}

fn assert_valid(graph: &MazeGraph, solution: &Solution, start: Point, goal: Point) {
    assert_eq!(solution.path.first(), Some(&start));
    assert_eq!(solution.path.last(), Some(&goal));
    for pair in solution.path.as_slice().windows(2) {
        assert!(
            graph.are_adjacent(pair[0], pair[1]),
            "{:?} -> {:?} is not a step",
            pair[0],
            pair[1]
        );
    }
    for cell in &solution.path {
        assert!(solution.explored.contains(cell), "{:?} not explored", cell);
    }
    assert_eq!(solution.explored.first(), Some(&start));
}

#[test]
fn random_mazes() {
    init();

    let mut rng = WyRand::new_seed(42);
    let config = SearchConfig::default();
    let mut solved = 0;

    for _ in 0..200 {
        let maze = random_maze(&mut rng, 12, 14);
        let Some(goal) = maze.goal() else {
            continue;
        };
        let graph = maze.graph();
        assert!(graph.contains(goal), "goal {:?} is not in the graph\n{}", goal, maze);
        let start = maze.start();
        let shortest = reference_distance(&graph, start, goal);

        for algorithm in Algorithm::ALL {
            let result = algorithm.search(&graph, start, goal, &config);
            match (shortest, result) {
                (Some(shortest), Ok(solution)) => {
                    assert_valid(&graph, &solution, start, goal);
                    if algorithm.is_optimal() {
                        assert_eq!(solution.path.cost(), shortest, "{}\n{}", algorithm, maze);
                    } else {
                        assert!(solution.path.cost() >= shortest, "{}\n{}", algorithm, maze);
                    }
                }
                (None, Err(SearchError::NoPath { explored, .. })) => {
                    assert!(!explored.contains(&goal), "{}\n{}", algorithm, maze);
                }
                (shortest, result) => panic!(
                    "{} disagrees with reference {:?}: {:?}\n{}",
                    algorithm, shortest, result, maze
                ),
            }
        }
        if shortest.is_some() {
            solved += 1;
        }
    }

    assert!(solved > 0);
}

#[test]
fn searches_are_deterministic() {
    init();

    let mut rng = WyRand::new_seed(7);
    let maze = random_maze(&mut rng, 20, 20);
    let Some(goal) = maze.goal() else {
        return;
    };
    let graph = maze.graph();

    for algorithm in Algorithm::ALL {
        let first = algorithm.search(&graph, maze.start(), goal, &SearchConfig::default());
        let second = algorithm.search(&graph, maze.start(), goal, &SearchConfig::default());
        assert_eq!(first, second, "{}", algorithm);
    }
}

#[test]
fn open_field() {
    init();

    // every path of length 8 is a shortest path, the tie-breaking decides which one is taken
    let maze: Maze = "
        # - - - - #
        # - - - - #
        # - - - - #
        # - - - - #
        # - - - - #
    "
    .parse()
    .unwrap();
    let graph = maze.graph();
    let goal = maze.goal().unwrap();
    assert_eq!(goal, (4, 1));

    let dfs = search_uninformed(&graph, maze.start(), goal).unwrap();
    // down is always tried first
    assert_eq!(dfs.path, vec![(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)]);
    assert_eq!(dfs.steps, 5);

    let a_star = search_informed(&graph, maze.start(), goal, heuristics::manhattan).unwrap();
    assert_eq!(a_star.path, vec![(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)]);

    let dijkstra = search_informed(&graph, maze.start(), goal, heuristics::zero).unwrap();
    assert_eq!(dijkstra.path.cost(), 4);
    assert!(dijkstra.explored.len() > a_star.explored.len());
}

#[test]
fn weighted_a_star_explores_less_than_dijkstra() {
    init();

    let maze: Maze = "
        # - - - - - - - #
        # - # # # # # - #
        # - # - - - # - #
        # - # - # - # - #
        # - - - # - - - #
        # # # # # # # - #
    "
    .parse()
    .unwrap();
    let graph = maze.graph();
    let goal = maze.goal().unwrap();

    let dijkstra = search_informed(&graph, maze.start(), goal, heuristics::zero).unwrap();
    let weighted =
        search_informed(&graph, maze.start(), goal, heuristics::weighted_manhattan).unwrap();

    assert_eq!(dijkstra.path.cost(), reference_distance(&graph, maze.start(), goal).unwrap());
    assert!(weighted.path.cost() >= dijkstra.path.cost());
    assert!(weighted.explored.len() <= dijkstra.explored.len());
}

#[test]
fn reports_for_every_algorithm() {
    init();

    let maze: Maze = "# - # #\n# - - #\n# - - #\n# # - #".parse().unwrap();
    let reports = solve_all(
        "maze-Crossroads",
        &maze.graph(),
        maze.start(),
        maze.goal().unwrap(),
        &SearchConfig::LEGACY,
    );

    assert_eq!(reports.len(), 4);
    let text: String = reports.iter().map(|r| r.to_string()).collect();
    for algorithm in Algorithm::ALL {
        assert!(text.contains(&format!("RESULTS FOR maze-Crossroads USING {}:", algorithm)));
    }
    assert_eq!(text.matches("Path length: 5\n").count(), 4);
}
