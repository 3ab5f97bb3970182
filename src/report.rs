use crate::{Algorithm, MazeGraph, Point, SearchConfig, SearchError, Solution};
use std::fmt;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The outcome of running one [`Algorithm`] on one Maze, together with how long it took.
///
/// The `Display` implementation renders the statistics as a human readable block:
/// ```
/// # use maze_pathfinding::prelude::*;
/// let maze: Maze = "# - #\n# - #".parse().unwrap();
/// let report = Report::run(
///     "maze-Tiny",
///     Algorithm::DepthFirst,
///     &maze.graph(),
///     maze.start(),
///     maze.goal().unwrap(),
///     &SearchConfig::default(),
/// );
///
/// let text = report.to_string();
/// assert!(text.starts_with("RESULTS FOR maze-Tiny USING DEPTH FIRST SEARCH:\n"));
/// assert!(text.contains("Path found: [(0, 1), (1, 1)]\n"));
/// assert!(text.contains("Path length: 2\n"));
/// assert!(text.contains("Number of explored nodes: 2\n"));
/// assert!(text.contains("Number of steps: 2\n"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// the name of the Maze
    pub maze_name: String,
    /// the Algorithm that was run
    pub algorithm: Algorithm,
    /// what the Algorithm found
    pub outcome: Result<Solution, SearchError>,
    /// the time the search took
    pub elapsed: Duration,
}

impl Report {
    /// Runs `algorithm` and measures how long it takes.
    pub fn run(
        maze_name: impl Into<String>,
        algorithm: Algorithm,
        graph: &MazeGraph,
        start: Point,
        goal: Point,
        config: &SearchConfig,
    ) -> Report {
        let started = Instant::now();
        let outcome = algorithm.search(graph, start, goal, config);
        let elapsed = started.elapsed();

        Report {
            maze_name: maze_name.into(),
            algorithm,
            outcome,
            elapsed,
        }
    }

    /// the number of steps the search took, whether it succeeded or not
    pub fn steps(&self) -> Option<usize> {
        match &self.outcome {
            Ok(solution) => Some(solution.steps),
            Err(SearchError::NoPath { steps, .. }) => Some(*steps),
            Err(SearchError::NotInGraph(_)) => None,
        }
    }

    /// the Cells the search explored, whether it succeeded or not
    pub fn explored(&self) -> &[Point] {
        match &self.outcome {
            Ok(solution) => &solution.explored,
            Err(SearchError::NoPath { explored, .. }) => explored,
            Err(SearchError::NotInGraph(_)) => &[],
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            fmt,
            "RESULTS FOR {} USING {}:",
            self.maze_name, self.algorithm
        )?;
        match &self.outcome {
            Ok(solution) => {
                writeln!(fmt, "Path found: {:?}", solution.path.as_slice())?;
                writeln!(fmt, "Path length: {}", solution.path.len())?;
            }
            Err(err) => writeln!(fmt, "No path found: {}", err)?,
        }
        writeln!(fmt, "Number of explored nodes: {}", self.explored().len())?;
        if let Some(steps) = self.steps() {
            writeln!(fmt, "Number of steps: {}", steps)?;
        }
        writeln!(
            fmt,
            "Execution Time: {} seconds",
            self.elapsed.as_secs_f64()
        )
    }
}

/// Runs every [`Algorithm`] on the same Graph and returns their Reports in the order of
/// [`Algorithm::ALL`].
///
/// With the `parallel` feature, the searches run concurrently. They only ever read the Graph.
pub fn solve_all(
    maze_name: &str,
    graph: &MazeGraph,
    start: Point,
    goal: Point,
    config: &SearchConfig,
) -> Vec<Report> {
    let run = |&algorithm: &Algorithm| Report::run(maze_name, algorithm, graph, start, goal, config);

    #[cfg(feature = "parallel")]
    let reports = Algorithm::ALL.par_iter().map(run).collect();
    #[cfg(not(feature = "parallel"))]
    let reports = Algorithm::ALL.iter().map(run).collect();

    reports
}
