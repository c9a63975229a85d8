//! Hit check against evasion.

/// Result of rolling one shot against the defender's evasion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum HitOutcome {
    /// The roll beat evasion; the shot is delivered.
    Hit,
    /// The roll did not beat evasion; the shot is discarded.
    Miss,
}

impl HitOutcome {
    /// Classifies a roll against `evasion`.
    pub fn from_roll(roll: i32, evasion: f64) -> Self {
        if is_hit(roll, evasion) {
            Self::Hit
        } else {
            Self::Miss
        }
    }

    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit)
    }
}

/// Check if a shot lands.
///
/// A shot hits only when `roll` is strictly greater than `evasion`; an equal
/// roll goes to the defender. The roll is not range-checked.
pub fn is_hit(roll: i32, evasion: f64) -> bool {
    f64::from(roll) > evasion
}
