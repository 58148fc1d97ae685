use clap::{Parser, ValueEnum};
use wend::domains::water_jug::{JugConfig, WaterJug};
use wend::search::engine::SearchEngine;
use wend::search::report::Termination;
use wend::search::stats::render_report_table;
use wend::search::strategy::{SearchOptions, Strategy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Dfs,
    Bfs,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Dfs => Strategy::DepthFirst,
            StrategyArg::Bfs => Strategy::BreadthFirst,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Capacity of jug 1 in litres
    capacity1: u32,

    /// Capacity of jug 2 in litres
    capacity2: u32,

    /// Amount to measure out
    target: u32,

    /// Search strategy
    #[clap(short, long, value_enum, default_value = "bfs")]
    strategy: StrategyArg,

    /// Override the depth limit
    #[clap(long)]
    depth_limit: Option<u32>,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = JugConfig::new(args.capacity1, args.capacity2, args.target);
    let domain = WaterJug::new(config);
    let strategy = Strategy::from(args.strategy);

    let mut options = SearchOptions::new(strategy);
    if let Some(limit) = args.depth_limit {
        options = options.with_depth_limit(Some(limit));
    }

    println!(
        "Measuring {}L with jugs of {}L and {}L, using {}\n",
        config.target, config.capacity1, config.capacity2, strategy
    );

    let report = SearchEngine::new(options)
        .run(&domain, WaterJug::START)
        .expect("invalid configuration");

    match report.termination {
        Termination::Goal => {
            println!("Solution found ({} steps):", report.moves());
            for (index, step) in report.path.iter().enumerate() {
                let (jug1, jug2) = step.state;
                let action = step.action.as_deref().unwrap_or("both jugs empty");
                println!("Step {}: Jug1={}L, Jug2={}L  [{}]", index, jug1, jug2, action);
            }
        }
        Termination::DepthLimited | Termination::Exhausted => {
            println!("No solution found.");
            if !config.feasible() {
                println!(
                    "Note: {}L is not measurable with these jugs — the target must \
                     be divisible by gcd({}, {}).",
                    config.target, config.capacity1, config.capacity2
                );
            } else if report.termination == Termination::DepthLimited {
                println!("A solution should exist; try raising --depth-limit.");
            }
        }
    }

    println!("\n{}", render_report_table(strategy, &report));
}
