//! Delivery behaviours composed into [`super::SpaceShip`].

use crate::error::CombatError;
use crate::shot::Shot;

/// Decides what a ship does with the shots that hit it.
pub trait DamageModel {
    /// Applies one attack's worth of hits.
    fn absorb(&mut self, shots: &[Shot]) -> Result<(), CombatError>;
}

/// Placeholder model that refuses every delivery.
///
/// This is the baseline for a freshly built ship: receiving fire requires a
/// concrete model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unhandled;

impl DamageModel for Unhandled {
    fn absorb(&mut self, _shots: &[Shot]) -> Result<(), CombatError> {
        Err(CombatError::Unsupported {
            operation: "accept_incoming_shots",
        })
    }
}

/// Counts delivered hits without applying any damage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitTally {
    hits: usize,
    deliveries: usize,
}

impl HitTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total shots received across all deliveries.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of deliveries received, including empty ones.
    pub fn deliveries(&self) -> usize {
        self.deliveries
    }
}

impl DamageModel for HitTally {
    fn absorb(&mut self, shots: &[Shot]) -> Result<(), CombatError> {
        self.hits += shots.len();
        self.deliveries += 1;
        Ok(())
    }
}
