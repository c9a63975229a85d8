use std::fmt;

use super::{Combatant, DamageModel, Unhandled};
use crate::error::CombatError;
use crate::shot::Shot;
use crate::weapon::Weapon;

/// Stock ship with a fixed number of weapon slots and a fixed evasion.
///
/// Weapons are kept in equip order, which is also the firing and reloading
/// order. Incoming shots are handed to the composed [`DamageModel`].
pub struct SpaceShip<D: DamageModel = Unhandled> {
    weapon_slots: usize,
    evasion: f64,
    weapons: Vec<Box<dyn Weapon>>,
    damage: D,
}

impl SpaceShip<Unhandled> {
    /// Creates an unarmed ship whose delivery hook is not yet implemented.
    ///
    /// `evasion` is taken as-is; values outside 0-100 are not rejected.
    pub fn new(weapon_slots: usize, evasion: f64) -> Self {
        Self {
            weapon_slots,
            evasion,
            weapons: Vec::new(),
            damage: Unhandled,
        }
    }
}

impl<D: DamageModel> SpaceShip<D> {
    /// Replaces the delivery behaviour, keeping slots, evasion and weapons.
    pub fn with_damage_model<M: DamageModel>(self, damage: M) -> SpaceShip<M> {
        SpaceShip {
            weapon_slots: self.weapon_slots,
            evasion: self.evasion,
            weapons: self.weapons,
            damage,
        }
    }

    pub fn damage_model(&self) -> &D {
        &self.damage
    }

    pub fn equipped_count(&self) -> usize {
        self.weapons.len()
    }
}

impl<D: DamageModel> Combatant for SpaceShip<D> {
    fn weapon_slots(&self) -> usize {
        self.weapon_slots
    }

    fn available_weapon_slots(&self) -> usize {
        self.weapon_slots.saturating_sub(self.weapons.len())
    }

    fn evasion(&self) -> f64 {
        self.evasion
    }

    fn equip(&mut self, weapon: Box<dyn Weapon>) -> Result<(), CombatError> {
        if !self.can_equip() {
            tracing::warn!(
                "Refusing to equip weapon: {} of {} slots occupied",
                self.weapons.len(),
                self.weapon_slots
            );
            return Err(CombatError::CapacityExceeded {
                weapon_slots: self.weapon_slots,
            });
        }

        self.weapons.push(weapon);
        tracing::debug!(
            "Weapon equipped ({} slots remaining)",
            self.available_weapon_slots()
        );
        Ok(())
    }

    fn shoot(&mut self) -> Vec<Shot> {
        let volley: Vec<Shot> = self
            .weapons
            .iter_mut()
            .flat_map(|weapon| weapon.shoot())
            .collect();
        self.reload_weapons();

        tracing::debug!(
            "Fired {} weapons for a volley of {} shots",
            self.weapons.len(),
            volley.len()
        );
        volley
    }

    fn reload_weapons(&mut self) {
        for weapon in &mut self.weapons {
            weapon.reload();
        }
    }

    fn accept_incoming_shots(&mut self, shots: Vec<Shot>) -> Result<(), CombatError> {
        self.damage.absorb(&shots)
    }
}

impl<D: DamageModel + fmt::Debug> fmt::Debug for SpaceShip<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpaceShip")
            .field("weapon_slots", &self.weapon_slots)
            .field("evasion", &self.evasion)
            .field("equipped", &self.weapons.len())
            .field("damage", &self.damage)
            .finish()
    }
}
