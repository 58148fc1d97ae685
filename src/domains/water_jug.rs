//! The two-jug measuring puzzle: fill, empty, and pour between two jugs
//! until either holds the target amount.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SearchError},
    search::domain::{SearchDomain, Successor},
};

/// Fill levels of the two jugs, in litres.
pub type JugState = (u32, u32);

/// Jug capacities and the amount to measure out. Immutable for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JugConfig {
    pub capacity1: u32,
    pub capacity2: u32,
    pub target: u32,
}

impl JugConfig {
    pub fn new(capacity1: u32, capacity2: u32, target: u32) -> Self {
        Self {
            capacity1,
            capacity2,
            target,
        }
    }

    /// Static feasibility: a target is measurable iff it fits in a jug and
    /// divides by `gcd(capacity1, capacity2)`.
    ///
    /// Informational only — the engine still proves infeasibility by
    /// exhaustion, and callers consult this afterwards to distinguish "no
    /// solution exists" from "raise the depth limit".
    pub fn feasible(&self) -> bool {
        if self.target == 0 {
            return true;
        }
        if self.target > self.capacity1.max(self.capacity2) {
            return false;
        }
        let divisor = gcd(self.capacity1, self.capacity2);
        divisor != 0 && self.target % divisor == 0
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Domain plug-in for the water-jug puzzle.
#[derive(Debug, Clone)]
pub struct WaterJug {
    config: JugConfig,
}

impl WaterJug {
    /// Both jugs start empty.
    pub const START: JugState = (0, 0);

    pub fn new(config: JugConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JugConfig {
        &self.config
    }
}

impl SearchDomain for WaterJug {
    type State = JugState;
    type Key = JugState;

    fn canonical_key(&self, state: &JugState) -> JugState {
        *state
    }

    fn expand(&self, state: &JugState) -> Vec<Successor<JugState>> {
        let (jug1, jug2) = *state;
        let JugConfig {
            capacity1,
            capacity2,
            ..
        } = self.config;
        let mut successors = Vec::with_capacity(6);

        if jug1 < capacity1 {
            successors.push(Successor::with_action(
                (capacity1, jug2),
                1,
                format!("fill jug 1 ({}L)", capacity1),
            ));
        }
        if jug2 < capacity2 {
            successors.push(Successor::with_action(
                (jug1, capacity2),
                1,
                format!("fill jug 2 ({}L)", capacity2),
            ));
        }
        if jug1 > 0 {
            successors.push(Successor::with_action((0, jug2), 1, "empty jug 1"));
        }
        if jug2 > 0 {
            successors.push(Successor::with_action((jug1, 0), 1, "empty jug 2"));
        }
        if jug1 > 0 && jug2 < capacity2 {
            let amount = jug1.min(capacity2 - jug2);
            successors.push(Successor::with_action(
                (jug1 - amount, jug2 + amount),
                1,
                format!("pour jug 1 -> jug 2 ({}L)", amount),
            ));
        }
        if jug2 > 0 && jug1 < capacity1 {
            let amount = jug2.min(capacity1 - jug1);
            successors.push(Successor::with_action(
                (jug1 + amount, jug2 - amount),
                1,
                format!("pour jug 2 -> jug 1 ({}L)", amount),
            ));
        }

        successors
    }

    fn is_goal(&self, state: &JugState) -> bool {
        state.0 == self.config.target || state.1 == self.config.target
    }

    fn validate(&self, _start: &JugState) -> Result<()> {
        let JugConfig {
            capacity1,
            capacity2,
            target,
        } = self.config;
        if target > capacity1.max(capacity2) {
            return Err(SearchError::InvalidConfiguration(format!(
                "target {}L exceeds both jug capacities ({}L, {}L)",
                target, capacity1, capacity2
            ))
            .into());
        }
        Ok(())
    }
}
