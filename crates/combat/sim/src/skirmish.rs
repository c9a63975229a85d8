//! Assembles two ships from configuration and resolves their attacks.

use combat_core::{
    AttackReport, Cannon, CombatError, Combatant, Encounter, HitTally, RandomNumberService, Shot,
    SpaceShip,
};
use serde::Serialize;

use crate::config::{ShipSpec, SimConfig};

/// Aggregate result of every resolved attack.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkirmishSummary {
    pub seed: u64,
    pub rounds: Vec<AttackReport>,
    pub total_fired: usize,
    pub total_hits: usize,
}

impl SkirmishSummary {
    /// Fraction of fired shots that were delivered, or 0 when nothing fired.
    pub fn hit_rate(&self) -> f64 {
        if self.total_fired == 0 {
            return 0.0;
        }
        self.total_hits as f64 / self.total_fired as f64
    }
}

/// Builds a ship from `spec` with every slot filled by a cannon.
pub fn build_ship(spec: &ShipSpec, shots_per_weapon: usize) -> Result<SpaceShip, CombatError> {
    let mut ship = SpaceShip::new(spec.weapon_slots, spec.evasion);
    while ship.can_equip() {
        let cannon = Cannon::builder()
            .shots_per_fire(shots_per_weapon)
            .muzzle(Shot::new(0, 0, 1))
            .build();
        ship.equip(Box::new(cannon))?;
    }
    Ok(ship)
}

/// Resolves `config.rounds` attacks from the attacker against the defender.
///
/// The defender tallies hits; a single encounter is reused for every round.
pub fn run<R>(config: &SimConfig, rng: &mut R) -> Result<SkirmishSummary, CombatError>
where
    R: RandomNumberService + ?Sized,
{
    let mut attacker = build_ship(&config.attacker, config.shots_per_weapon)?;
    let mut defender =
        build_ship(&config.defender, config.shots_per_weapon)?.with_damage_model(HitTally::new());

    tracing::info!(
        "Attacker: {} weapons; defender evasion {}",
        attacker.equipped_count(),
        defender.evasion()
    );

    let mut encounter = Encounter::new(&mut attacker, &mut defender, rng);
    let mut rounds = Vec::with_capacity(config.rounds);
    for round in 0..config.rounds {
        let report = encounter.attack()?;
        tracing::debug!(
            "Round {}: {} of {} shots hit",
            round + 1,
            report.hits,
            report.fired
        );
        rounds.push(report);
    }

    let tally = *defender.damage_model();
    Ok(SkirmishSummary {
        seed: config.seed,
        total_fired: rounds.iter().map(|report| report.fired).sum(),
        total_hits: tally.hits(),
        rounds,
    })
}
