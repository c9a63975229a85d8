//! Single attack exchange between two combatants.
//!
//! # Algorithm
//!
//! 1. Sample the defender's evasion once for the whole attack
//! 2. Ask the attacker for its volley
//! 3. Roll `[HIT_ROLL_MIN, HIT_ROLL_MAX)` per shot; keep the shot iff the roll beats evasion
//! 4. Deliver the kept shots, in firing order, with one call to the defender
//!
//! The encounter owns nothing but borrows of its collaborators, so one
//! instance can be reused for any number of attacks. Errors raised by a
//! collaborator abort the attack and propagate untouched.

mod hit;

pub use hit::{HitOutcome, is_hit};

use crate::config::CombatConfig;
use crate::error::CombatError;
use crate::rng::RandomNumberService;
use crate::ship::Combatant;

/// Summary of one resolved attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    /// Evasion value sampled from the defender at the start of the attack.
    pub evasion: f64,
    /// Shots fired by the attacker (one hit roll each).
    pub fired: usize,
    /// Shots delivered to the defender.
    pub hits: usize,
}

impl AttackReport {
    pub fn misses(&self) -> usize {
        self.fired - self.hits
    }
}

/// Binds one attacker, one defender and one random source.
pub struct Encounter<'a, A, D, R>
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
    R: RandomNumberService + ?Sized,
{
    attacker: &'a mut A,
    defender: &'a mut D,
    rng: &'a mut R,
}

impl<'a, A, D, R> Encounter<'a, A, D, R>
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
    R: RandomNumberService + ?Sized,
{
    pub fn new(attacker: &'a mut A, defender: &'a mut D, rng: &'a mut R) -> Self {
        Self {
            attacker,
            defender,
            rng,
        }
    }

    pub fn attacker(&self) -> &A {
        self.attacker
    }

    pub fn defender(&self) -> &D {
        self.defender
    }

    /// Resolves one attack from the attacker against the defender.
    ///
    /// # Errors
    ///
    /// Returns whatever error the defender raises while accepting the
    /// surviving shots. No retry or rollback is attempted.
    pub fn attack(&mut self) -> Result<AttackReport, CombatError> {
        let evasion = self.defender.evasion();
        let volley = self.attacker.shoot();
        let fired = volley.len();

        let hits: Vec<_> = volley
            .into_iter()
            .filter(|shot| {
                let roll = self
                    .rng
                    .range(CombatConfig::HIT_ROLL_MIN, CombatConfig::HIT_ROLL_MAX);
                let outcome = HitOutcome::from_roll(roll, evasion);
                tracing::trace!(?shot, roll, evasion, %outcome, "hit roll");
                outcome.is_hit()
            })
            .collect();

        let report = AttackReport {
            evasion,
            fired,
            hits: hits.len(),
        };
        tracing::debug!(
            fired = report.fired,
            hits = report.hits,
            evasion,
            "Delivering surviving shots to defender"
        );

        self.defender.accept_incoming_shots(hits)?;
        Ok(report)
    }
}
