use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use wend::domains::maze::{Cell, Maze, MazeProblem};
use wend::search::engine::SearchEngine;
use wend::search::report::SearchReport;
use wend::search::stats::render_report_table;
use wend::search::strategy::{SearchOptions, Strategy};

const DEFAULT_MAZE: &str = "\
    ..........\n\
    .########.\n\
    .#......#.\n\
    .#.####.#.\n\
    .#.#..#.#.\n\
    .#.#.##.#.\n\
    .#.#....#.\n\
    .#.######.\n\
    .#........\n\
    ..........\n";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to a maze file ('.' open, '#' blocked); a built-in maze is used
    /// when omitted
    #[clap(short, long)]
    maze_file: Option<PathBuf>,

    /// Start cell as row,col
    #[clap(long, default_value = "0,0")]
    start: String,

    /// Goal cell as row,col
    #[clap(long, default_value = "4,4")]
    goal: String,

    /// Allow diagonal movement (14 per step instead of 10)
    #[clap(short, long)]
    diagonals: bool,
}

fn parse_cell(text: &str) -> Result<Cell, String> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(format!("expected row,col, found {:?}", text));
    }
    let row = parts[0]
        .parse()
        .map_err(|e| format!("bad row {:?}: {}", parts[0], e))?;
    let col = parts[1]
        .parse()
        .map_err(|e| format!("bad col {:?}: {}", parts[1], e))?;
    Ok(Cell::new(row, col))
}

/// Draws the maze with the solved route overlaid: `S` start, `G` goal,
/// `*` route, `#` blocked, `.` open.
fn render_route(maze: &Maze, report: &SearchReport<Cell>, start: Cell, goal: Cell) -> String {
    let on_route: HashSet<(usize, usize)> = report
        .path
        .iter()
        .map(|step| (step.state.row, step.state.col))
        .collect();

    let mut out = String::new();
    for row in 0..maze.rows() {
        for col in 0..maze.cols() {
            let cell = Cell::new(row, col);
            let symbol = if cell == start {
                'S'
            } else if cell == goal {
                'G'
            } else if on_route.contains(&(row, col)) {
                '*'
            } else if maze.is_blocked(cell) {
                '#'
            } else {
                '.'
            };
            out.push(symbol);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let text = match &args.maze_file {
        Some(path) => fs::read_to_string(path).expect("failed to read maze file"),
        None => DEFAULT_MAZE.to_string(),
    };
    let maze = Maze::parse(&text).expect("invalid maze");
    let start = parse_cell(&args.start).expect("invalid start cell");
    let goal = parse_cell(&args.goal).expect("invalid goal cell");

    let mut problem = MazeProblem::new(maze, goal);
    if args.diagonals {
        problem = problem.with_diagonals();
    }

    let report = SearchEngine::new(SearchOptions::new(Strategy::AStar))
        .run(&problem, start)
        .expect("invalid configuration");

    if report.is_goal() {
        println!(
            "Path found: cost {}, {} cells\n",
            report.solution_cost().unwrap_or(0),
            report.path.len()
        );
        println!("{}", render_route(problem.maze(), &report, start, goal));
        let coordinates: Vec<String> = report
            .path
            .iter()
            .map(|step| format!("({},{})", step.state.row, step.state.col))
            .collect();
        println!("Route: {}", coordinates.join(" -> "));
    } else {
        println!("No path found from start to goal.");
    }

    println!("\n{}", render_report_table(Strategy::AStar, &report));
}
