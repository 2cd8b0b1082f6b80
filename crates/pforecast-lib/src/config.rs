//! Host configuration options consulted by the predictor.

use serde::{Deserialize, Serialize};

use crate::shiplist::Cost;

/// Highest player number.
pub const MAX_PLAYERS: i32 = 11;

pub const RACE_LIZARD: i32 = 2;
pub const RACE_CRYSTAL: i32 = 7;
pub const RACE_ROBOT: i32 = 9;

/// Per-player configuration value.
///
/// Stored as a list where entry 0 belongs to player 1. Players beyond the
/// end of the list reuse the last entry, so a single-element list acts as a
/// uniform setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerArray(Vec<i32>);

impl PlayerArray {
    /// Same value for every player.
    pub fn uniform(value: i32) -> Self {
        Self(vec![value])
    }

    pub fn from_values(values: Vec<i32>) -> Self {
        Self(values)
    }

    /// Value for a player; 0 for an empty array.
    pub fn get(&self, player: i32) -> i32 {
        let index = usize::try_from(player.max(1) - 1).unwrap_or(0);
        self.0
            .get(index)
            .or_else(|| self.0.last())
            .copied()
            .unwrap_or(0)
    }

    /// Set the value for one player, growing the array as needed.
    pub fn set(&mut self, player: i32, value: i32) {
        let index = usize::try_from(player.max(1) - 1).unwrap_or(0);
        if self.0.len() <= index {
            let fill = self.0.last().copied().unwrap_or(0);
            self.0.resize(index + 1, fill);
        }
        self.0[index] = value;
    }
}

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfiguration {
    /// Mission number of the first extended mission.
    pub ext_missions_start_at: i32,
    /// Race played by each player slot.
    pub player_race: PlayerArray,
    /// Fuel burnt per turn for every 100 kt of hull mass (rounded up).
    pub fuel_usage_per_turn_for_100kt: PlayerArray,
    /// Cloaking fuel per 100 kt of hull mass; also the per-turn minimum.
    pub cloak_fuel_burn: PlayerArray,
    /// Damage at which cloaking fails (PHost).
    pub damage_level_for_cloak_fail: PlayerArray,
    /// Damage at which hyperjumps fail.
    pub damage_level_for_hyperjump_fail: i32,
    /// Mine units per torpedo, in percent of torpedo type squared.
    pub units_per_torp_rate: PlayerArray,
    /// Web mine units per torpedo, in percent of torpedo type squared.
    pub units_per_web_rate: PlayerArray,
    pub use_accurate_fuel_model: bool,
    pub allow_gravity_wells: bool,
    pub gravity_well_range: i32,
    /// Gravity wells are circles instead of squares.
    pub round_gravity_wells: bool,
    /// Cost of one fighter built from cargo.
    pub fighter_cost: Cost,
}

impl Default for HostConfiguration {
    fn default() -> Self {
        Self {
            ext_missions_start_at: 20,
            player_race: PlayerArray::from_values((1..=MAX_PLAYERS).collect()),
            fuel_usage_per_turn_for_100kt: PlayerArray::uniform(0),
            cloak_fuel_burn: PlayerArray::uniform(5),
            damage_level_for_cloak_fail: PlayerArray::uniform(1),
            damage_level_for_hyperjump_fail: 100,
            units_per_torp_rate: PlayerArray::uniform(100),
            units_per_web_rate: PlayerArray::uniform(100),
            use_accurate_fuel_model: false,
            allow_gravity_wells: true,
            gravity_well_range: 3,
            round_gravity_wells: false,
            fighter_cost: Cost {
                tritanium: 3,
                molybdenum: 2,
                supplies: 5,
                ..Cost::default()
            },
        }
    }
}

impl HostConfiguration {
    /// Race played by a player.
    pub fn race_of(&self, player: i32) -> i32 {
        self.player_race.get(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_array_reuses_last_value() {
        let arr = PlayerArray::from_values(vec![5, 7]);
        assert_eq!(arr.get(1), 5);
        assert_eq!(arr.get(2), 7);
        assert_eq!(arr.get(11), 7);
        assert_eq!(PlayerArray::from_values(Vec::new()).get(3), 0);
    }

    #[test]
    fn player_array_set_grows() {
        let mut arr = PlayerArray::uniform(100);
        arr.set(9, 400);
        assert_eq!(arr.get(8), 100);
        assert_eq!(arr.get(9), 400);
    }

    #[test]
    fn configuration_deserializes_with_defaults() {
        let json = r#"{ "use_accurate_fuel_model": true, "cloak_fuel_burn": [5, 10] }"#;
        let config: HostConfiguration = serde_json::from_str(json).expect("valid config");
        assert!(config.use_accurate_fuel_model);
        assert_eq!(config.cloak_fuel_burn.get(2), 10);
        assert_eq!(config.ext_missions_start_at, 20);
        assert_eq!(config.race_of(9), RACE_ROBOT);
        assert_eq!(config.fighter_cost.tritanium, 3);
    }
}
