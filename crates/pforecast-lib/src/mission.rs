//! Mission numbers.

use crate::config::HostConfiguration;

pub const MISSION_NONE: i32 = 0;
pub const MISSION_MINESWEEP: i32 = 1;
pub const MISSION_LAY_MINES: i32 = 2;
pub const MISSION_TOW: i32 = 7;
/// Race-specific mission; lays web mines for Crystal-race ships.
pub const MISSION_SPECIAL: i32 = 9;
pub const MISSION_CLOAK: i32 = 10;

/// PHost extended missions, numbered relative to `ext_missions_start_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtMission {
    BuildTorpsFromCargo = 0,
    LayMines = 1,
    LayWeb = 2,
    ScoopTorpedoes = 3,
    BuildFighters = 7,
    Cloak = 14,
    Training = 17,
    LayMinesIn = 19,
    LayWebIn = 20,
}

impl ExtMission {
    /// Mission number under a configuration.
    pub fn number(self, config: &HostConfiguration) -> i32 {
        config.ext_missions_start_at + self as i32
    }

    /// True if `mission` is this extended mission.
    pub fn matches(self, mission: i32, config: &HostConfiguration) -> bool {
        mission == self.number(config)
    }
}
