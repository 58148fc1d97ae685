/// Identifier of a node within one search run.
///
/// Ids are handed out by the run itself, monotonically from zero (the root),
/// and double as indices into the run's append-only node table. An id is
/// never reused or mutated for the lifetime of the run.
pub type NodeId = u32;

/// One generated point in the state space: the domain payload plus the
/// bookkeeping the engine needs for ordering and path reconstruction.
///
/// Nodes are immutable once created. `parent` is `None` only on the root.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    /// Path length from the root; the root is at depth 0.
    pub depth: u32,
    /// Accumulated path cost from the root.
    pub g_cost: u64,
    /// Heuristic estimate to the goal; zero under uninformed strategies.
    pub h_cost: u64,
    /// Label of the transition that produced this node, for reporting only.
    pub action: Option<String>,
    pub state: S,
}

impl<S> SearchNode<S> {
    /// Total estimated cost through this node, the A* ordering key.
    pub fn f_cost(&self) -> u64 {
        self.g_cost + self.h_cost
    }
}
