//! Combatant capability and the stock space ship.
//!
//! A [`Combatant`] is both what an [`crate::Encounter`] drives (as attacker
//! and as defender) and the surface other game logic calls to fit weapons
//! and query slot or evasion stats.
//!
//! # Delivery
//!
//! How a ship reacts to shots that got through is not part of the ship
//! itself. [`SpaceShip`] delegates it to a [`DamageModel`]; the default
//! [`Unhandled`] model refuses, so a ship that is meant to be shot at must be
//! assembled with a concrete model such as [`HitTally`].

mod damage;
mod space_ship;

pub use damage::{DamageModel, HitTally, Unhandled};
pub use space_ship::SpaceShip;

use crate::error::CombatError;
use crate::shot::Shot;
use crate::weapon::Weapon;

/// A craft that can carry weapons, fire volleys and be fired upon.
pub trait Combatant {
    /// Total weapon slot capacity.
    fn weapon_slots(&self) -> usize;

    /// Slots not yet occupied by an equipped weapon.
    fn available_weapon_slots(&self) -> usize;

    /// Percentage-like threshold a hit roll must exceed to land.
    fn evasion(&self) -> f64;

    /// Returns true if another weapon can be equipped.
    fn can_equip(&self) -> bool {
        self.available_weapon_slots() > 0
    }

    /// Mounts `weapon` in the next free slot.
    ///
    /// # Errors
    ///
    /// Returns [`CombatError::CapacityExceeded`] when no slot is free. The
    /// equipped set is left unchanged.
    fn equip(&mut self, weapon: Box<dyn Weapon>) -> Result<(), CombatError>;

    /// Fires every equipped weapon and returns the combined volley.
    ///
    /// All weapons fire in equip order before any of them is reloaded; the
    /// reload pass then runs in the same order.
    fn shoot(&mut self) -> Vec<Shot>;

    /// Reloads every equipped weapon in equip order.
    fn reload_weapons(&mut self);

    /// Receives every shot of one attack that beat this ship's evasion.
    ///
    /// Called exactly once per attack, with an empty vector when nothing hit.
    fn accept_incoming_shots(&mut self, shots: Vec<Shot>) -> Result<(), CombatError>;
}
