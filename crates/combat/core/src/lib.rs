//! Deterministic ship-to-ship combat exchange.
//!
//! `combat-core` defines the rules for a single attack between two craft:
//! weapons produce [`Shot`]s, a [`Combatant`] aggregates them into a volley,
//! and an [`Encounter`] filters the volley through an injected
//! [`RandomNumberService`] against the defender's evasion before delivering
//! the surviving shots. Every collaborator is a trait so callers can swap in
//! their own ships, weapons and random sources.
pub mod config;
pub mod encounter;
pub mod error;
pub mod rng;
pub mod ship;
pub mod shot;
pub mod weapon;

pub use config::CombatConfig;
pub use encounter::{AttackReport, Encounter, HitOutcome, is_hit};
pub use error::CombatError;
pub use rng::{PcgRandom, RandomNumberService};
pub use ship::{Combatant, DamageModel, HitTally, SpaceShip, Unhandled};
pub use shot::Shot;
pub use weapon::{Cannon, CannonBuilder, Weapon};
