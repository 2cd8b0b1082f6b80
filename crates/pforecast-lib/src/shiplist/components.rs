//! Hulls, engines, and weapon components.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::cost::Cost;

/// Hull special function relevant to movement and cargo prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HullFunction {
    Cloak,
    /// Cloaks without burning fuel.
    AdvancedCloak,
    /// Cloak keeps working when damaged.
    HardenedCloak,
    /// Moves twice as far per warp factor.
    Gravitonic,
    Hyperdrive,
    MerlinAlchemy,
    NeutronicRefinery,
    AriesRefinery,
    /// Damage does not limit speed.
    HardenedEngines,
}

impl HullFunction {
    pub const ALL: [HullFunction; 9] = [
        HullFunction::Cloak,
        HullFunction::AdvancedCloak,
        HullFunction::HardenedCloak,
        HullFunction::Gravitonic,
        HullFunction::Hyperdrive,
        HullFunction::MerlinAlchemy,
        HullFunction::NeutronicRefinery,
        HullFunction::AriesRefinery,
        HullFunction::HardenedEngines,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HullFunction::Cloak => "Cloak",
            HullFunction::AdvancedCloak => "AdvancedCloak",
            HullFunction::HardenedCloak => "HardenedCloak",
            HullFunction::Gravitonic => "Gravitonic",
            HullFunction::Hyperdrive => "Hyperdrive",
            HullFunction::MerlinAlchemy => "MerlinAlchemy",
            HullFunction::NeutronicRefinery => "NeutronicRefinery",
            HullFunction::AriesRefinery => "AriesRefinery",
            HullFunction::HardenedEngines => "HardenedEngines",
        }
    }

    /// True for any of the cloaking functions.
    pub fn is_cloak(&self) -> bool {
        matches!(
            self,
            HullFunction::Cloak | HullFunction::AdvancedCloak | HullFunction::HardenedCloak
        )
    }
}

impl fmt::Display for HullFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HullFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        HullFunction::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownHullFunction {
                name: wanted.to_string(),
            })
    }
}

/// A hull function granted from a given experience level on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HullFunctionAssignment {
    pub function: HullFunction,
    #[serde(default)]
    pub min_level: i32,
}

impl HullFunctionAssignment {
    pub fn new(function: HullFunction) -> Self {
        Self {
            function,
            min_level: 0,
        }
    }

    /// Whether this grant applies to a ship of the given experience level.
    pub fn applies(&self, function: HullFunction, level: i32) -> bool {
        self.function == function && level >= self.min_level
    }
}

impl FromStr for HullFunctionAssignment {
    type Err = Error;

    /// Parse `Name` or `Name:level`.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((name, level)) => Ok(Self {
                function: name.parse()?,
                min_level: level.trim().parse().map_err(|_| Error::ShipListValidation {
                    message: format!("invalid experience level in hull function '{s}'"),
                })?,
            }),
            None => Ok(Self::new(s.parse()?)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hull {
    pub id: i32,
    pub name: String,
    pub mass: i32,
    pub max_fuel: i32,
    pub max_cargo: i32,
    pub max_crew: i32,
    pub num_engines: i32,
    pub max_beams: i32,
    pub max_launchers: i32,
    pub num_bays: i32,
    pub functions: Vec<HullFunctionAssignment>,
}

impl Hull {
    pub fn has_function(&self, function: HullFunction, level: i32) -> bool {
        self.functions.iter().any(|f| f.applies(function, level))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    pub id: i32,
    pub name: String,
    /// Fuel factors for warp 1 through 9.
    pub fuel_factors: [i32; 9],
    /// Explicitly configured maximum efficient warp.
    pub max_efficient_warp: Option<i32>,
}

impl Engine {
    /// Fuel factor for a warp factor; 0 outside 1..=9.
    pub fn fuel_factor(&self, warp: i32) -> i32 {
        usize::try_from(warp - 1)
            .ok()
            .and_then(|index| self.fuel_factors.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Highest warp this engine drives at no more than 120% of the
    /// hyperdrive-standard fuel factor (`120·warp²`), unless configured.
    pub fn max_efficient_warp(&self) -> i32 {
        if let Some(warp) = self.max_efficient_warp {
            return warp.clamp(1, 9);
        }
        (1..=9)
            .rev()
            .find(|&warp| self.fuel_factor(warp) <= 120 * warp * warp)
            .unwrap_or(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beam {
    pub id: i32,
    pub name: String,
    pub mass: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorpedoLauncher {
    pub id: i32,
    pub name: String,
    pub launcher_mass: i32,
    /// Cost of one torpedo built from cargo.
    pub torpedo_cost: Cost,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transwarp() -> Engine {
        Engine {
            id: 9,
            name: "Transwarp Drive".to_string(),
            fuel_factors: [100, 400, 900, 1600, 2500, 3600, 4900, 6400, 8100],
            max_efficient_warp: None,
        }
    }

    #[test]
    fn fuel_factor_outside_range_is_zero() {
        let engine = transwarp();
        assert_eq!(engine.fuel_factor(0), 0);
        assert_eq!(engine.fuel_factor(9), 8100);
        assert_eq!(engine.fuel_factor(10), 0);
    }

    #[test]
    fn max_efficient_warp_is_derived_from_fuel_factors() {
        assert_eq!(transwarp().max_efficient_warp(), 9);

        let heavy_nova = Engine {
            fuel_factors: [100, 415, 940, 1700, 2600, 3733, 12300, 21450, 72900],
            ..transwarp()
        };
        assert_eq!(heavy_nova.max_efficient_warp(), 6);

        let configured = Engine {
            max_efficient_warp: Some(7),
            ..heavy_nova
        };
        assert_eq!(configured.max_efficient_warp(), 7);
    }

    #[test]
    fn hull_function_assignment_respects_level() {
        let grant: HullFunctionAssignment = "Hyperdrive:2".parse().expect("valid grant");
        assert!(!grant.applies(HullFunction::Hyperdrive, 1));
        assert!(grant.applies(HullFunction::Hyperdrive, 2));
        assert!(!grant.applies(HullFunction::Cloak, 5));
        assert!("Teleport".parse::<HullFunctionAssignment>().is_err());
    }
}
