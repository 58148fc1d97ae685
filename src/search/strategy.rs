use std::fmt;

use serde::{Deserialize, Serialize};

/// Depth past which the uninformed and greedy strategies refuse to expand,
/// unless overridden through [`SearchOptions::with_depth_limit`].
pub const DEFAULT_DEPTH_LIMIT: u32 = 50;

/// Default number of explored nodes between progress reports.
pub const DEFAULT_PROGRESS_EVERY: u64 = 1000;

/// The frontier-ordering policy — the one axis of polymorphism the engine
/// supports.
///
/// A tagged enum rather than a caller-supplied comparator, so the ordering
/// rules live in one place and carry no hidden state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Stack frontier: pop the most recently generated node. No optimality
    /// guarantee; depth-limited by default.
    DepthFirst,
    /// FIFO frontier: shortest path in move count for unweighted expansion.
    BreadthFirst,
    /// Greedy priority frontier ordered by ascending heuristic alone. Not
    /// optimal — a locally attractive branch may win over a shorter path.
    BestFirst,
    /// Priority frontier ordered by ascending `g + h`, ties broken by
    /// ascending `h`. Optimal given an admissible heuristic; duplicate
    /// suppression is cost-aware (a cheaper route may reclaim an open key).
    AStar,
}

impl Strategy {
    /// Whether this strategy consults the domain heuristic.
    pub fn is_informed(self) -> bool {
        matches!(self, Strategy::BestFirst | Strategy::AStar)
    }

    /// The depth cap applied when none is set explicitly. A* relies on
    /// cost-optimality and open/closed pruning to terminate instead.
    pub fn default_depth_limit(self) -> Option<u32> {
        match self {
            Strategy::AStar => None,
            _ => Some(DEFAULT_DEPTH_LIMIT),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::DepthFirst => "DFS",
            Strategy::BreadthFirst => "BFS",
            Strategy::BestFirst => "BestFS",
            Strategy::AStar => "A*",
        };
        write!(f, "{}", name)
    }
}

/// Per-run engine configuration. Immutable for the duration of one run.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub strategy: Strategy,
    /// Nodes at this depth are goal-tested but not expanded. `None` disables
    /// the cap.
    pub depth_limit: Option<u32>,
    /// Explored-node interval between progress callbacks; 0 disables them.
    pub progress_every: u64,
}

impl SearchOptions {
    /// Options with the strategy's default depth limit and progress cadence.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            depth_limit: strategy.default_depth_limit(),
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }

    pub fn with_depth_limit(mut self, depth_limit: Option<u32>) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_progress_every(mut self, progress_every: u64) -> Self {
        self.progress_every = progress_every;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_limit_defaults_follow_the_strategy() {
        assert_eq!(
            SearchOptions::new(Strategy::DepthFirst).depth_limit,
            Some(DEFAULT_DEPTH_LIMIT)
        );
        assert_eq!(
            SearchOptions::new(Strategy::BestFirst).depth_limit,
            Some(DEFAULT_DEPTH_LIMIT)
        );
        assert_eq!(SearchOptions::new(Strategy::AStar).depth_limit, None);
    }

    #[test]
    fn depth_limit_is_overridable() {
        let options = SearchOptions::new(Strategy::BreadthFirst).with_depth_limit(Some(200));
        assert_eq!(options.depth_limit, Some(200));

        let uncapped = SearchOptions::new(Strategy::DepthFirst).with_depth_limit(None);
        assert_eq!(uncapped.depth_limit, None);
    }
}
