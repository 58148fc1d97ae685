use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// The goal test passed on a popped node.
    Goal,
    /// The frontier emptied without reaching the goal.
    Exhausted,
    /// The frontier emptied and at least one branch was cut off by the depth
    /// limit; raising the limit may uncover a solution.
    DepthLimited,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Termination::Goal => "goal reached",
            Termination::Exhausted => "exhausted",
            Termination::DepthLimited => "depth limit reached",
        };
        write!(f, "{}", text)
    }
}

/// One entry of a solved path, root first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<S> {
    pub state: S,
    /// Label of the transition that produced this state; `None` on the root.
    pub action: Option<String>,
    pub depth: u32,
    pub g_cost: u64,
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes popped from the frontier and processed, the goal pop included.
    pub nodes_explored: u64,
    /// Nodes produced by expansion (root included), duplicates and all.
    pub nodes_generated: u64,
    /// Candidates discarded because their key was already open or closed.
    pub duplicates_pruned: u64,
    /// Open entries replaced by a strictly cheaper route (A* only).
    pub relaxations: u64,
    /// Largest frontier size observed during the run.
    pub peak_frontier: usize,
    pub elapsed: Duration,
}

/// The outcome of one search run: how it stopped, the solved path (empty on
/// failure), and the run's counters.
///
/// Exhaustion is a modeled outcome, not an error — only configuration
/// problems and internal invariant violations surface as [`Err`].
#[derive(Debug, Clone)]
pub struct SearchReport<S> {
    pub termination: Termination,
    /// Root-to-goal sequence of states; empty unless the run succeeded.
    pub path: Vec<Step<S>>,
    pub stats: SearchStats,
}

impl<S> SearchReport<S> {
    pub fn is_goal(&self) -> bool {
        self.termination == Termination::Goal
    }

    /// Number of moves in the solved path (states minus one); 0 on failure.
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Accumulated cost of the goal node, if the run succeeded.
    pub fn solution_cost(&self) -> Option<u64> {
        self.path.last().map(|step| step.g_cost)
    }

    /// Depth of the goal node, if the run succeeded.
    pub fn solution_depth(&self) -> Option<u32> {
        self.path.last().map(|step| step.depth)
    }
}
