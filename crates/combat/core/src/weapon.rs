//! Weapon capability and the stock cannon.
//!
//! A weapon discharges a batch of shots per fire action and must be reloaded
//! before the next discharge is meaningful. The crate does not enforce that
//! ordering; it is a usage contract honoured by [`crate::Combatant::shoot`].

use crate::config::CombatConfig;
use crate::shot::Shot;

/// Anything that can be mounted in a weapon slot.
pub trait Weapon {
    /// Discharges the weapon, returning every shot of this fire action.
    ///
    /// A weapon that cannot fire returns an empty vector.
    fn shoot(&mut self) -> Vec<Shot>;

    /// Returns the weapon to a fireable state. May be a no-op.
    fn reload(&mut self);
}

impl<W: Weapon + ?Sized> Weapon for Box<W> {
    fn shoot(&mut self) -> Vec<Shot> {
        (**self).shoot()
    }

    fn reload(&mut self) {
        (**self).reload()
    }
}

/// Fires a fixed number of identical shots per discharge.
///
/// A cannon starts loaded. Firing empties it; until [`Weapon::reload`] is
/// called further discharges produce nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cannon {
    shots_per_fire: usize,
    muzzle: Shot,
    loaded: bool,
}

impl Cannon {
    /// Creates a loaded cannon firing `shots_per_fire` copies of `muzzle`.
    pub fn new(shots_per_fire: usize, muzzle: Shot) -> Self {
        Self {
            shots_per_fire,
            muzzle,
            loaded: true,
        }
    }

    /// Creates a builder for constructing a cannon.
    pub fn builder() -> CannonBuilder {
        CannonBuilder::default()
    }

    pub fn shots_per_fire(&self) -> usize {
        self.shots_per_fire
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

impl Weapon for Cannon {
    fn shoot(&mut self) -> Vec<Shot> {
        if !self.loaded {
            return Vec::new();
        }
        self.loaded = false;
        vec![self.muzzle; self.shots_per_fire]
    }

    fn reload(&mut self) {
        self.loaded = true;
    }
}

/// Builder for constructing a [`Cannon`].
#[derive(Clone, Debug)]
pub struct CannonBuilder {
    shots_per_fire: usize,
    muzzle: Shot,
    loaded: bool,
}

impl Default for CannonBuilder {
    fn default() -> Self {
        Self::from_config(&CombatConfig::default())
    }
}

impl CannonBuilder {
    /// Starts a builder using the tunable defaults in `config`.
    pub fn from_config(config: &CombatConfig) -> Self {
        Self {
            shots_per_fire: config.default_shots_per_fire,
            muzzle: Shot::ORIGIN,
            loaded: true,
        }
    }

    /// Sets how many shots each discharge produces.
    pub fn shots_per_fire(mut self, shots_per_fire: usize) -> Self {
        self.shots_per_fire = shots_per_fire;
        self
    }

    /// Sets the shot template copied into every discharge.
    pub fn muzzle(mut self, muzzle: Shot) -> Self {
        self.muzzle = muzzle;
        self
    }

    /// Builds the cannon unloaded, so it must be reloaded before firing.
    pub fn unloaded(mut self) -> Self {
        self.loaded = false;
        self
    }

    /// Builds the cannon.
    pub fn build(self) -> Cannon {
        Cannon {
            shots_per_fire: self.shots_per_fire,
            muzzle: self.muzzle,
            loaded: self.loaded,
        }
    }
}
