use clap::{Parser, ValueEnum};
use wend::domains::eight_puzzle::{Board, EightPuzzle, PuzzleHeuristic};
use wend::search::engine::SearchEngine;
use wend::search::progress::ProgressSnapshot;
use wend::search::report::Termination;
use wend::search::stats::render_report_table;
use wend::search::strategy::{SearchOptions, Strategy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Dfs,
    Bfs,
    Bestfs,
    Astar,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Dfs => Strategy::DepthFirst,
            StrategyArg::Bfs => Strategy::BreadthFirst,
            StrategyArg::Bestfs => Strategy::BestFirst,
            StrategyArg::Astar => Strategy::AStar,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Misplaced,
}

impl From<HeuristicArg> for PuzzleHeuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Manhattan => PuzzleHeuristic::Manhattan,
            HeuristicArg::Misplaced => PuzzleHeuristic::MisplacedTiles,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search strategy
    #[clap(short, long, value_enum, default_value = "bfs")]
    strategy: StrategyArg,

    /// Heuristic consulted by the informed strategies
    #[clap(long, value_enum, default_value = "manhattan")]
    heuristic: HeuristicArg,

    /// Nine tiles in row-major order, 0 for the blank
    #[clap(short, long, default_value = "1,2,3,4,0,5,7,8,6")]
    board: String,

    /// Override the depth limit; 0 disables it
    #[clap(long)]
    depth_limit: Option<u32>,

    /// Also emit the run statistics as JSON
    #[clap(long)]
    json: bool,
}

fn parse_board(text: &str) -> Result<Board, String> {
    let cells = text
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u8>()
                .map_err(|e| format!("bad tile {:?}: {}", part, e))
        })
        .collect::<Result<Vec<u8>, String>>()?;
    let cells: [u8; 9] = cells
        .try_into()
        .map_err(|cells: Vec<u8>| format!("expected 9 tiles, found {}", cells.len()))?;
    Board::new(cells).map_err(|e| e.to_string())
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let start = parse_board(&args.board).expect("invalid board");
    let strategy = Strategy::from(args.strategy);
    let domain = EightPuzzle::with_heuristic(Board::SOLVED, args.heuristic.into());

    let mut options = SearchOptions::new(strategy);
    if let Some(limit) = args.depth_limit {
        options = options.with_depth_limit(if limit == 0 { None } else { Some(limit) });
    }

    println!("Solving with {}:\n{}\n", strategy, start);

    let mut sink = |snapshot: &ProgressSnapshot| {
        println!(
            "Nodes explored: {}, frontier size: {}, current depth: {}",
            snapshot.nodes_explored, snapshot.frontier_len, snapshot.depth
        );
    };
    let report = SearchEngine::new(options)
        .run_with_progress(&domain, start, &mut sink)
        .expect("search failed");

    match report.termination {
        Termination::Goal => {
            println!("Solution found in {} moves:\n", report.moves());
            for (index, step) in report.path.iter().enumerate() {
                match &step.action {
                    Some(action) => println!("Step {} ({}):", index, action),
                    None => println!("Step {}:", index),
                }
                println!("{}\n", step.state);
            }
        }
        Termination::DepthLimited => {
            println!("No solution found within the depth limit.");
            if !start.solvable_from(domain.goal()) {
                println!("Note: this instance is unsolvable (tile-parity invariant).");
            } else {
                println!("Try raising --depth-limit.");
            }
        }
        Termination::Exhausted => {
            println!("No solution exists: the state space is exhausted.");
            if !start.solvable_from(domain.goal()) {
                println!("Note: this instance is unsolvable (tile-parity invariant).");
            }
        }
    }

    println!("{}", render_report_table(strategy, &report));
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report.stats).expect("stats are serializable")
        );
    }
}
