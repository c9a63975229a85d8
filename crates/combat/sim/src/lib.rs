//! Composition root for running skirmishes outside of a game.
//!
//! Wires `combat-core` ships and encounters to a seeded ChaCha random
//! source and environment-driven configuration.
pub mod config;
pub mod logging;
pub mod random;
pub mod skirmish;

pub use config::{ConfigError, ShipSpec, SimConfig};
pub use random::ChaChaRandom;
pub use skirmish::{SkirmishSummary, build_ship, run};
