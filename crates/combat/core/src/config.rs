/// Combat tuning constants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatConfig {
    /// Shots fired per weapon discharge when a cannon is built without an
    /// explicit count.
    pub default_shots_per_fire: usize,
}

impl CombatConfig {
    // ===== hit roll bounds =====
    /// Inclusive lower bound passed to the random source for each hit roll.
    pub const HIT_ROLL_MIN: i32 = 0;
    /// Exclusive upper bound passed to the random source for each hit roll.
    pub const HIT_ROLL_MAX: i32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SHOTS_PER_FIRE: usize = 1;

    pub fn new() -> Self {
        Self {
            default_shots_per_fire: Self::DEFAULT_SHOTS_PER_FIRE,
        }
    }

    pub fn with_shots_per_fire(default_shots_per_fire: usize) -> Self {
        Self {
            default_shots_per_fire,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
