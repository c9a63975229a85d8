//! Error types surfaced by ships and encounters.
//!
//! All failures are local and non-recoverable: an error raised while an
//! attack is in flight aborts it and propagates to the caller unchanged.

/// Errors raised by combatants and propagated by [`crate::Encounter::attack`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CombatError {
    /// Equip attempted while every weapon slot is occupied.
    #[error("cannot equip weapon: all {weapon_slots} weapon slots are occupied")]
    CapacityExceeded { weapon_slots: usize },

    /// The combatant has no behaviour for the requested operation.
    ///
    /// Raised by the default delivery hook of [`crate::SpaceShip`]; a concrete
    /// [`crate::DamageModel`] must be composed in to receive shots.
    #[error("operation '{operation}' is not supported by this combatant")]
    Unsupported { operation: &'static str },
}

impl CombatError {
    /// Returns true if the error reflects how the combatant was assembled
    /// rather than the state of the battle.
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}
