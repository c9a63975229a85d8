//! Skirmish configuration structures and loaders.
use std::env;
use std::str::FromStr;

/// Errors raised while reading configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Loadout of one ship taking part in the skirmish.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipSpec {
    pub weapon_slots: usize,
    pub evasion: f64,
}

/// Configuration required to run a skirmish.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub seed: u64,
    pub rounds: usize,
    pub attacker: ShipSpec,
    pub defender: ShipSpec,
    pub shots_per_weapon: usize,
    pub report_json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rounds: 1,
            attacker: ShipSpec {
                weapon_slots: 2,
                evasion: 0.0,
            },
            defender: ShipSpec {
                weapon_slots: 1,
                evasion: 25.0,
            },
            shots_per_weapon: 1,
            report_json: false,
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_SEED` - Seed for the hit-roll generator (default: 42)
    /// - `SKIRMISH_ROUNDS` - Attacks to resolve (default: 1)
    /// - `SKIRMISH_ATTACKER_SLOTS` - Attacker weapon slots, all filled (default: 2)
    /// - `SKIRMISH_ATTACKER_EVASION` - Attacker evasion (default: 0)
    /// - `SKIRMISH_DEFENDER_SLOTS` - Defender weapon slots (default: 1)
    /// - `SKIRMISH_DEFENDER_EVASION` - Defender evasion (default: 25)
    /// - `SKIRMISH_SHOTS_PER_WEAPON` - Shots per cannon discharge (default: 1)
    /// - `SKIRMISH_REPORT_JSON` - Print the summary as JSON (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    ///
    /// Missing keys keep their defaults; present but unparsable keys fail.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(seed) = read_var(&lookup, "SKIRMISH_SEED")? {
            config.seed = seed;
        }
        if let Some(rounds) = read_var(&lookup, "SKIRMISH_ROUNDS")? {
            config.rounds = rounds;
        }
        if let Some(slots) = read_var(&lookup, "SKIRMISH_ATTACKER_SLOTS")? {
            config.attacker.weapon_slots = slots;
        }
        if let Some(evasion) = read_var(&lookup, "SKIRMISH_ATTACKER_EVASION")? {
            config.attacker.evasion = evasion;
        }
        if let Some(slots) = read_var(&lookup, "SKIRMISH_DEFENDER_SLOTS")? {
            config.defender.weapon_slots = slots;
        }
        if let Some(evasion) = read_var(&lookup, "SKIRMISH_DEFENDER_EVASION")? {
            config.defender.evasion = evasion;
        }
        if let Some(shots) = read_var(&lookup, "SKIRMISH_SHOTS_PER_WEAPON")? {
            config.shots_per_weapon = shots;
        }
        if let Some(json) = read_var(&lookup, "SKIRMISH_REPORT_JSON")? {
            config.report_json = json;
        }

        Ok(config)
    }
}

fn read_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let config = SimConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = SimConfig::from_lookup(lookup_from(&[
            ("SKIRMISH_SEED", "7"),
            ("SKIRMISH_ROUNDS", "12"),
            ("SKIRMISH_ATTACKER_SLOTS", "4"),
            ("SKIRMISH_DEFENDER_EVASION", " 62.5 "),
            ("SKIRMISH_REPORT_JSON", "true"),
        ]))
        .unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.rounds, 12);
        assert_eq!(config.attacker.weapon_slots, 4);
        assert_eq!(config.defender.evasion, 62.5);
        assert!(config.report_json);
        assert_eq!(config.shots_per_weapon, 1);
    }

    #[test]
    fn invalid_value_names_the_key() {
        let err = SimConfig::from_lookup(lookup_from(&[("SKIRMISH_ROUNDS", "many")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value \"many\" for SKIRMISH_ROUNDS"
        );
    }
}
