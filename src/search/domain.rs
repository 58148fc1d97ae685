use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;

/// A single legal transition out of a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S> {
    pub state: S,
    /// Cost of taking this transition (1 for unweighted domains).
    pub cost: u64,
    /// Optional human-readable label for reporting; never part of identity.
    pub action: Option<String>,
}

impl<S> Successor<S> {
    pub fn new(state: S, cost: u64) -> Self {
        Self {
            state,
            cost,
            action: None,
        }
    }

    pub fn with_action(state: S, cost: u64, action: impl Into<String>) -> Self {
        Self {
            state,
            cost,
            action: Some(action.into()),
        }
    }
}

/// A trait that defines the "frontend" for a specific problem domain.
///
/// This is the primary interface for connecting a concrete problem (like the
/// 8-puzzle or a grid maze) to the generic search engine. By implementing this
/// trait, you provide the engine with the state representation, the expansion
/// rule, the goal test, and optionally a heuristic — the engine supplies the
/// frontier management, duplicate detection, and path reconstruction.
pub trait SearchDomain {
    /// The domain payload carried by each search node. Immutable once created.
    type State: Clone + Debug;

    /// The canonical encoding of a state used for duplicate detection.
    ///
    /// Must be a pure function of the state alone, and injective: two
    /// domain-distinct states never share a key.
    type Key: Clone + Debug + Eq + Hash;

    /// Encodes a state into its canonical key. Deterministic, no side effects.
    fn canonical_key(&self, state: &Self::State) -> Self::Key;

    /// Produces every legal transition out of `state`, respecting the
    /// domain's constraints. Never mutates `state`.
    fn expand(&self, state: &Self::State) -> Vec<Successor<Self::State>>;

    /// Whether `state` satisfies the goal condition.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimated remaining cost from `state` to the goal, consumed by the
    /// informed strategies. The default suits uninformed domains.
    fn heuristic(&self, _state: &Self::State) -> u64 {
        0
    }

    /// Checks the domain configuration and the start state before the engine
    /// generates any node. Errors here abort the run without searching.
    fn validate(&self, _start: &Self::State) -> Result<()> {
        Ok(())
    }
}
