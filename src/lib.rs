//! Wend is a generic, reusable state-space search engine for discrete puzzle
//! problems.
//!
//! The engine is problem-agnostic and can run Depth-First, Breadth-First,
//! greedy Best-First, and A* searches over any domain you define. The core
//! idea is a two-layered architecture: a generic search backend and a small
//! problem-specific domain plug-in.
//!
//! # Core Concepts
//!
//! - **[`SearchDomain`](search::domain::SearchDomain)**: a trait you implement
//!   to define the "what" of your problem: the state representation, the
//!   legal transitions, the goal test, and optionally a heuristic.
//! - **[`Strategy`](search::strategy::Strategy)**: how the frontier is
//!   ordered — a stack, a FIFO queue, or a priority queue keyed by heuristic
//!   alone (greedy) or by cost plus heuristic (A*).
//! - **[`SearchEngine`](search::engine::SearchEngine)**: the engine that owns
//!   the frontier, the open/closed bookkeeping, and the node table, and
//!   returns a [`SearchReport`](search::report::SearchReport).
//!
//! Three classic domains ship in [`domains`]: the 8-puzzle, the water-jug
//! problem, and grid-maze pathfinding with optional weighted diagonals.
//!
//! # Example: measuring 2L with 4L and 3L jugs
//!
//! ```
//! use wend::domains::water_jug::{JugConfig, WaterJug};
//! use wend::search::engine::SearchEngine;
//! use wend::search::strategy::{SearchOptions, Strategy};
//!
//! let domain = WaterJug::new(JugConfig::new(4, 3, 2));
//! let engine = SearchEngine::new(SearchOptions::new(Strategy::BreadthFirst));
//! let report = engine.run(&domain, WaterJug::START).unwrap();
//!
//! assert!(report.is_goal());
//! assert_eq!(report.moves(), 4);
//!
//! let (jug1, jug2) = report.path.last().unwrap().state;
//! assert!(jug1 == 2 || jug2 == 2);
//!
//! for step in &report.path {
//!     println!(
//!         "jug1={}L jug2={}L  {}",
//!         step.state.0,
//!         step.state.1,
//!         step.action.as_deref().unwrap_or("start"),
//!     );
//! }
//! ```

pub mod domains;
pub mod error;
pub mod search;
