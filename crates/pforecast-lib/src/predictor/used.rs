use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Uncertain inputs a forecast depended on.
    ///
    /// Each flag names a player- or host-controlled decision that may still
    /// change before the turn is processed; callers can warn that the
    /// prediction rests on it. Flags accumulate over turns.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct UsedProperties: u16 {
        const MISSION = 1 << 0;
        const FRIENDLY_CODE = 1 << 1;
        const SHIPYARD = 1 << 2;
        const REPAIR = 1 << 3;
        const CLOAK = 1 << 4;
        const DAMAGE_LIMIT = 1 << 5;
        const TOWEE = 1 << 6;
        const ALCHEMY = 1 << 7;
        const BUILD_FIGHTERS = 1 << 8;
    }
}

impl UsedProperties {
    /// Human-readable flag names, in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter()
            .filter_map(|flag| {
                Some(match flag {
                    f if f == Self::MISSION => "mission",
                    f if f == Self::FRIENDLY_CODE => "friendly-code",
                    f if f == Self::SHIPYARD => "shipyard",
                    f if f == Self::REPAIR => "repair",
                    f if f == Self::CLOAK => "cloak",
                    f if f == Self::DAMAGE_LIMIT => "damage-limit",
                    f if f == Self::TOWEE => "towee",
                    f if f == Self::ALCHEMY => "alchemy",
                    f if f == Self::BUILD_FIGHTERS => "build-fighters",
                    _ => return None,
                })
            })
            .collect()
    }
}

impl fmt::Display for UsedProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(","))
    }
}
