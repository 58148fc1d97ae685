use std::collections::{HashMap, HashSet};
use std::time::Instant;

use tracing::debug;

use crate::{
    error::Result,
    search::{
        domain::SearchDomain,
        frontier::{Frontier, OpenSlot},
        node::{NodeId, SearchNode},
        path,
        progress::{NullProgress, ProgressSink, ProgressSnapshot},
        report::{SearchReport, SearchStats, Termination},
        strategy::{SearchOptions, Strategy},
    },
};

/// The main engine for searching discrete state spaces.
///
/// The `SearchEngine` is domain-agnostic: it owns the frontier, the open and
/// closed key sets, and the append-only node table, and drives the generic
/// explore-expand loop. Everything problem-specific — states, transitions,
/// goal test, heuristic — comes in through a [`SearchDomain`] implementation.
///
/// One call to [`run`](Self::run) is one self-contained search: the
/// bookkeeping lives for exactly that call and nothing is shared between
/// runs, so a single engine value can be reused across domains and starts.
pub struct SearchEngine {
    options: SearchOptions,
}

impl SearchEngine {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Runs the configured search from `start` until the goal is reached or
    /// the frontier is exhausted.
    ///
    /// # Returns
    ///
    /// * `Ok(report)` — the run completed; inspect
    ///   [`termination`](SearchReport::termination) for success, exhaustion,
    ///   or the depth-limit case. Exhaustion is a modeled outcome, not an
    ///   error.
    /// * `Err(error)` — the configuration was rejected before any node was
    ///   generated, or an internal invariant was violated.
    pub fn run<D: SearchDomain>(
        &self,
        domain: &D,
        start: D::State,
    ) -> Result<SearchReport<D::State>> {
        self.run_with_progress(domain, start, &mut NullProgress)
    }

    /// Like [`run`](Self::run), reporting a [`ProgressSnapshot`] to `progress`
    /// every `progress_every` explored nodes.
    pub fn run_with_progress<D: SearchDomain>(
        &self,
        domain: &D,
        start: D::State,
        progress: &mut dyn ProgressSink,
    ) -> Result<SearchReport<D::State>> {
        domain.validate(&start)?;

        let strategy = self.options.strategy;
        let started = Instant::now();
        let mut stats = SearchStats::default();

        let mut nodes: Vec<SearchNode<D::State>> = Vec::new();
        let mut open: HashMap<D::Key, OpenSlot> = HashMap::new();
        let mut closed: HashSet<D::Key> = HashSet::new();
        let mut frontier = Frontier::for_strategy(strategy);
        let mut depth_capped = false;

        let root_h = if strategy.is_informed() {
            domain.heuristic(&start)
        } else {
            0
        };
        let root = SearchNode {
            id: 0,
            parent: None,
            depth: 0,
            g_cost: 0,
            h_cost: root_h,
            action: None,
            state: start,
        };
        open.insert(
            domain.canonical_key(&root.state),
            OpenSlot { node: 0, g_cost: 0 },
        );
        let (root_primary, root_secondary) = Self::priority(strategy, 0, root_h);
        frontier.push(0, root_primary, root_secondary);
        nodes.push(root);
        stats.nodes_generated = 1;
        stats.peak_frontier = 1;

        while let Some(id) = frontier.pop() {
            let key = domain.canonical_key(&nodes[id as usize].state);
            // The slot holder is the live route to this key; anything else is
            // a lazily invalidated heap entry left over from an A* relaxation.
            if !matches!(open.get(&key), Some(slot) if slot.node == id) {
                continue;
            }
            open.remove(&key);

            stats.nodes_explored += 1;
            if self.options.progress_every > 0
                && stats.nodes_explored % self.options.progress_every == 0
            {
                let node = &nodes[id as usize];
                progress.on_progress(&ProgressSnapshot {
                    nodes_explored: stats.nodes_explored,
                    frontier_len: frontier.len(),
                    depth: node.depth,
                    g_cost: node.g_cost,
                });
            }

            if domain.is_goal(&nodes[id as usize].state) {
                stats.elapsed = started.elapsed();
                let goal = &nodes[id as usize];
                debug!(
                    %strategy,
                    explored = stats.nodes_explored,
                    depth = goal.depth,
                    cost = goal.g_cost,
                    "goal reached"
                );
                let path = path::reconstruct(&nodes, id)?;
                return Ok(SearchReport {
                    termination: Termination::Goal,
                    path,
                    stats,
                });
            }

            closed.insert(key);

            if let Some(limit) = self.options.depth_limit {
                if nodes[id as usize].depth >= limit {
                    depth_capped = true;
                    continue;
                }
            }

            let (parent_depth, parent_g) = {
                let node = &nodes[id as usize];
                (node.depth, node.g_cost)
            };
            let successors = domain.expand(&nodes[id as usize].state);
            stats.nodes_generated += successors.len() as u64;

            for successor in successors {
                let succ_key = domain.canonical_key(&successor.state);
                if closed.contains(&succ_key) {
                    stats.duplicates_pruned += 1;
                    continue;
                }

                let g_cost = parent_g + successor.cost;
                if let Some(slot) = open.get(&succ_key) {
                    // Cost-aware replacement is an A*-only rule; every other
                    // strategy treats an open key as a plain duplicate.
                    if strategy == Strategy::AStar && g_cost < slot.g_cost {
                        stats.relaxations += 1;
                    } else {
                        stats.duplicates_pruned += 1;
                        continue;
                    }
                }

                let h_cost = if strategy.is_informed() {
                    domain.heuristic(&successor.state)
                } else {
                    0
                };
                let node_id = nodes.len() as NodeId;
                let (primary, secondary) = Self::priority(strategy, g_cost, h_cost);
                open.insert(
                    succ_key,
                    OpenSlot {
                        node: node_id,
                        g_cost,
                    },
                );
                frontier.push(node_id, primary, secondary);
                nodes.push(SearchNode {
                    id: node_id,
                    parent: Some(id),
                    depth: parent_depth + 1,
                    g_cost,
                    h_cost,
                    action: successor.action,
                    state: successor.state,
                });
            }

            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        }

        stats.elapsed = started.elapsed();
        let termination = if depth_capped {
            Termination::DepthLimited
        } else {
            Termination::Exhausted
        };
        debug!(
            %strategy,
            explored = stats.nodes_explored,
            %termination,
            "frontier exhausted"
        );
        Ok(SearchReport {
            termination,
            path: Vec::new(),
            stats,
        })
    }

    fn priority(strategy: Strategy, g_cost: u64, h_cost: u64) -> (u64, u64) {
        match strategy {
            Strategy::BestFirst => (h_cost, 0),
            Strategy::AStar => (g_cost + h_cost, h_cost),
            Strategy::DepthFirst | Strategy::BreadthFirst => (0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::SearchError;
    use crate::search::domain::Successor;

    /// A small explicit graph: adjacency lists with edge costs, a per-state
    /// heuristic table, and a goal index.
    struct GraphDomain {
        edges: Vec<Vec<(usize, u64)>>,
        h: Vec<u64>,
        goal: usize,
        validate_error: Option<String>,
    }

    impl GraphDomain {
        fn new(edges: Vec<Vec<(usize, u64)>>, goal: usize) -> Self {
            let h = vec![0; edges.len()];
            Self {
                edges,
                h,
                goal,
                validate_error: None,
            }
        }
    }

    impl SearchDomain for GraphDomain {
        type State = usize;
        type Key = usize;

        fn canonical_key(&self, state: &usize) -> usize {
            *state
        }

        fn expand(&self, state: &usize) -> Vec<Successor<usize>> {
            self.edges[*state]
                .iter()
                .map(|&(to, cost)| Successor::new(to, cost))
                .collect()
        }

        fn is_goal(&self, state: &usize) -> bool {
            *state == self.goal
        }

        fn heuristic(&self, state: &usize) -> u64 {
            self.h[*state]
        }

        fn validate(&self, _start: &usize) -> Result<()> {
            match &self.validate_error {
                Some(message) => {
                    Err(SearchError::InvalidConfiguration(message.clone()).into())
                }
                None => Ok(()),
            }
        }
    }

    fn states<S: Copy>(report: &SearchReport<S>) -> Vec<S> {
        report.path.iter().map(|step| step.state).collect()
    }

    /// 0 branches to 1 and 2, both of which reach 3.
    fn diamond() -> GraphDomain {
        GraphDomain::new(
            vec![vec![(1, 1), (2, 1)], vec![(3, 1)], vec![(3, 1)], vec![]],
            3,
        )
    }

    #[test]
    fn dfs_follows_the_most_recently_generated_branch() {
        let engine = SearchEngine::new(SearchOptions::new(Strategy::DepthFirst));
        let report = engine.run(&diamond(), 0).unwrap();
        assert!(report.is_goal());
        assert_eq!(states(&report), vec![0, 2, 3]);
    }

    #[test]
    fn bfs_follows_the_oldest_branch_and_prunes_the_other() {
        let engine = SearchEngine::new(SearchOptions::new(Strategy::BreadthFirst));
        let report = engine.run(&diamond(), 0).unwrap();
        assert!(report.is_goal());
        assert_eq!(states(&report), vec![0, 1, 3]);
        // 3 is generated twice; the second candidate finds it already open.
        assert_eq!(report.stats.duplicates_pruned, 1);
    }

    #[test]
    fn goal_at_the_root_is_a_zero_move_path() {
        let engine = SearchEngine::new(SearchOptions::new(Strategy::BreadthFirst));
        let domain = GraphDomain::new(vec![vec![]], 0);
        let report = engine.run(&domain, 0).unwrap();
        assert!(report.is_goal());
        assert_eq!(report.moves(), 0);
        assert_eq!(report.stats.nodes_explored, 1);
    }

    #[test]
    fn astar_relaxes_a_costlier_open_entry_and_skips_the_stale_pop() {
        // The direct edge to 1 costs 10; the detour through 2 costs 2. The
        // detour is discovered after 1 is already open, so the open slot
        // must be reclaimed and the leftover heap entry skipped on pop.
        let domain = GraphDomain::new(
            vec![
                vec![(1, 10), (2, 1)],
                vec![(3, 1)],
                vec![(1, 1)],
                vec![(4, 100)],
                vec![],
            ],
            4,
        );
        let engine = SearchEngine::new(SearchOptions::new(Strategy::AStar));
        let report = engine.run(&domain, 0).unwrap();

        assert!(report.is_goal());
        assert_eq!(states(&report), vec![0, 2, 1, 3, 4]);
        assert_eq!(report.solution_cost(), Some(103));
        assert_eq!(report.stats.relaxations, 1);
        // The stale entry for the costlier route to 1 is popped but never
        // counted as explored: 0, 2, the relaxed 1, 3, and the goal.
        assert_eq!(report.stats.nodes_explored, 5);
    }

    #[test]
    fn bfs_never_relaxes_an_open_entry() {
        let domain = GraphDomain::new(
            vec![vec![(1, 10), (2, 1)], vec![(3, 1)], vec![(1, 1)], vec![]],
            3,
        );
        let engine = SearchEngine::new(SearchOptions::new(Strategy::BreadthFirst));
        let report = engine.run(&domain, 0).unwrap();
        assert!(report.is_goal());
        assert_eq!(report.stats.relaxations, 0);
        assert!(report.stats.duplicates_pruned >= 1);
    }

    #[test]
    fn best_first_orders_by_heuristic_alone() {
        // Two routes to the goal; the heuristic favours the longer one.
        let mut domain = GraphDomain::new(
            vec![
                vec![(1, 1), (2, 1)],
                vec![(4, 1)],
                vec![(3, 1)],
                vec![(4, 1)],
                vec![],
            ],
            4,
        );
        domain.h = vec![9, 8, 1, 1, 0];
        let engine = SearchEngine::new(SearchOptions::new(Strategy::BestFirst));
        let report = engine.run(&domain, 0).unwrap();
        assert!(report.is_goal());
        // Greedy takes the attractive detour through 2 and 3 even though the
        // route through 1 is shorter.
        assert_eq!(states(&report), vec![0, 2, 3, 4]);
    }

    #[test]
    fn depth_limit_refuses_expansion_and_is_reported() {
        let line = GraphDomain::new(
            vec![vec![(1, 1)], vec![(2, 1)], vec![(3, 1)], vec![]],
            3,
        );
        let engine = SearchEngine::new(
            SearchOptions::new(Strategy::BreadthFirst).with_depth_limit(Some(2)),
        );
        let report = engine.run(&line, 0).unwrap();
        assert!(!report.is_goal());
        assert_eq!(report.termination, Termination::DepthLimited);
        assert!(report.path.is_empty());
    }

    #[test]
    fn unreachable_goal_without_a_cap_is_plain_exhaustion() {
        let domain = GraphDomain::new(vec![vec![(1, 1)], vec![], vec![]], 2);
        let engine = SearchEngine::new(SearchOptions::new(Strategy::AStar));
        let report = engine.run(&domain, 0).unwrap();
        assert_eq!(report.termination, Termination::Exhausted);
        assert_eq!(report.stats.nodes_explored, 2);
    }

    #[test]
    fn validation_failure_aborts_before_any_node_is_generated() {
        let mut domain = diamond();
        domain.validate_error = Some("goal out of range".into());
        let engine = SearchEngine::new(SearchOptions::new(Strategy::BreadthFirst));
        let err = engine.run(&domain, 0).unwrap_err();
        assert!(matches!(
            err.inner(),
            SearchError::InvalidConfiguration(message) if message == "goal out of range"
        ));
    }

    #[test]
    fn progress_fires_on_the_configured_cadence() {
        let line = GraphDomain::new(
            vec![
                vec![(1, 1)],
                vec![(2, 1)],
                vec![(3, 1)],
                vec![(4, 1)],
                vec![(5, 1)],
                vec![],
            ],
            5,
        );
        let engine = SearchEngine::new(
            SearchOptions::new(Strategy::BreadthFirst).with_progress_every(2),
        );
        let mut seen = Vec::new();
        let mut sink = |snapshot: &ProgressSnapshot| seen.push(snapshot.nodes_explored);
        let report = engine
            .run_with_progress(&line, 0, &mut sink)
            .unwrap();
        assert!(report.is_goal());
        assert_eq!(seen, vec![2, 4, 6]);
    }

    #[test]
    fn path_depths_and_costs_are_monotonic() {
        let engine = SearchEngine::new(SearchOptions::new(Strategy::BreadthFirst));
        let report = engine.run(&diamond(), 0).unwrap();
        for (step, next) in report.path.iter().zip(report.path.iter().skip(1)) {
            assert_eq!(next.depth, step.depth + 1);
            assert!(next.g_cost > step.g_cost);
        }
    }
}
