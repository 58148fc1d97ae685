//! Problem-domain plug-ins for the generic engine: small modules that supply
//! states, transitions, goal tests, and heuristics, nothing more.

pub mod eight_puzzle;
pub mod maze;
pub mod water_jug;
