//! Host (ruleset) identification and the host-dependent rule set.
//!
//! Two host families are modelled: the legacy integer-BASIC host ("Host",
//! also SRace and NuHost which follow its rules) and PHost. Rather than
//! asking "which host is this?" throughout the turn function, callers
//! resolve a [`HostRules`] value once and branch on its fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{HostConfiguration, RACE_LIZARD};
use crate::error::{Error, Result};

/// Pack a version number the way host versions are compared.
pub const fn mk_version(major: u32, minor: u32, patch: u32) -> u32 {
    major * 100_000 + minor * 1_000 + patch
}

/// Host implementation family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    #[default]
    Unknown,
    Host,
    SRace,
    PHost,
    NuHost,
}

/// Host family plus packed version number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HostVersion {
    pub kind: HostKind,
    pub version: u32,
}

impl HostVersion {
    pub const fn new(kind: HostKind, version: u32) -> Self {
        Self { kind, version }
    }

    pub fn is_phost(&self) -> bool {
        self.kind == HostKind::PHost
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            HostKind::Unknown => return f.write_str("unknown"),
            HostKind::Host => "Host",
            HostKind::SRace => "SRace",
            HostKind::PHost => "PHost",
            HostKind::NuHost => "NuHost",
        };
        let major = self.version / 100_000;
        let minor = (self.version / 1_000) % 100;
        let patch = self.version % 1_000;
        write!(f, "{name} {major}.{minor}.{patch}")
    }
}

impl FromStr for HostVersion {
    type Err = Error;

    /// Parse strings like `PHost 4.0.5`, `Host 3.22.20` or `PHost 4.0e`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidHostVersion {
            text: s.to_string(),
        };
        let mut words = s.split_whitespace();
        let kind = match words.next().map(|w| w.to_ascii_lowercase()) {
            None => return Err(invalid()),
            Some(w) if w == "unknown" => return Ok(HostVersion::default()),
            Some(w) if w == "host" || w == "thost" => HostKind::Host,
            Some(w) if w == "srace" => HostKind::SRace,
            Some(w) if w == "phost" => HostKind::PHost,
            Some(w) if w == "nuhost" => HostKind::NuHost,
            Some(_) => return Err(invalid()),
        };
        let Some(number) = words.next() else {
            return Ok(HostVersion::new(kind, 0));
        };
        if words.next().is_some() {
            return Err(invalid());
        }

        let mut parts = number.split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let minor_text = parts.next().unwrap_or("0");
        let digits: String = minor_text
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let suffix = &minor_text[digits.len()..];
        let minor = digits.parse::<u32>().map_err(|_| invalid())?;
        let patch = match (suffix.chars().next(), parts.next()) {
            (Some(letter), None) if suffix.len() == 1 && letter.is_ascii_alphabetic() => {
                u32::from(letter.to_ascii_lowercase()) - u32::from('a') + 1
            }
            (None, Some(p)) => p.parse::<u32>().map_err(|_| invalid())?,
            (None, None) => 0,
            _ => return Err(invalid()),
        };
        if parts.next().is_some() || minor >= 100 || patch >= 1_000 {
            return Err(invalid());
        }
        Ok(HostVersion::new(kind, mk_version(major, minor, patch)))
    }
}

impl TryFrom<String> for HostVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<HostVersion> for String {
    fn from(value: HostVersion) -> Self {
        value.to_string()
    }
}

/// Registration status of the player's key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStatus {
    #[default]
    Unregistered,
    Registered,
}

/// Registration key; only its status matters for prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationKey {
    pub status: KeyStatus,
}

impl RegistrationKey {
    pub const fn registered() -> Self {
        Self {
            status: KeyStatus::Registered,
        }
    }

    pub const fn unregistered() -> Self {
        Self {
            status: KeyStatus::Unregistered,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.status == KeyStatus::Registered
    }
}

/// Fuel usage formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelModel {
    /// Integer-truncating formula of the legacy host.
    Legacy,
    /// PHost default formula.
    PHostStandard,
    /// PHost exponential-decay formula (`UseAccurateFuelModel`).
    PHostAccurate,
}

/// Per-turn heading and rounding rules for sub-light movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementModel {
    /// Dominant axis first, minor axis proportional.
    Legacy,
    /// Trigonometric heading, components rounded away from zero.
    PHost,
}

/// Which existing minefield a laying ship extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinefieldSelection {
    /// Geometrically closest candidate.
    Closest,
    /// Candidate with the lowest id.
    LowestId,
}

/// Every host-dependent decision of the turn function, resolved once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostRules {
    pub fuel_model: FuelModel,
    /// Accurate model charges one extra kt when the rounded usage equals the fuel aboard.
    pub accurate_fuel_bug: bool,
    pub movement: MovementModel,
    /// Alchemy output truncated to a multiple of three.
    pub alchemy_rounding: bool,
    /// Alchemy and refinery functions on one hull combine into a direct refinery.
    pub alchemy_combinations: bool,
    /// `nat`/`nad`/`nam` exclude one mineral from the default selection.
    pub alchemy_exclusion_codes: bool,
    /// `alt`/`ald`/`alm` only work with a registered key.
    pub alchemy_codes_need_registration: bool,
    /// Registered-only ship codes such as `msc` check the key.
    pub registered_codes_check_key: bool,
    pub extended_missions: bool,
    pub min_hyperjump_distance2: i64,
    pub exact_hyperjump_min_distance2: i64,
    pub exact_hyperjump_max_distance2: i64,
    pub hyperjump_resets_fcode: bool,
    /// Damage speed limit uses the PHost formula.
    pub phost_damage_speed: bool,
    /// Cloak damage threshold comes from the configuration.
    pub configured_cloak_damage: bool,
    pub scoop_needs_beams: bool,
    pub minefield_selection: MinefieldSelection,
}

impl HostRules {
    /// Resolve the rule set for a host version and configuration.
    pub fn resolve(host: &HostVersion, config: &HostConfiguration) -> Self {
        let phost = host.is_phost();
        let legacy_exclusion = matches!(host.kind, HostKind::Host | HostKind::SRace)
            && host.version >= mk_version(3, 22, 40);
        let fuel_model = if !phost {
            FuelModel::Legacy
        } else if config.use_accurate_fuel_model {
            FuelModel::PHostAccurate
        } else {
            FuelModel::PHostStandard
        };

        Self {
            fuel_model,
            accurate_fuel_bug: phost && host.version < mk_version(4, 0, 5),
            movement: if phost {
                MovementModel::PHost
            } else {
                MovementModel::Legacy
            },
            alchemy_rounding: !phost,
            alchemy_combinations: phost && host.version >= mk_version(3, 4, 8),
            alchemy_exclusion_codes: legacy_exclusion
                || (phost && host.version >= mk_version(4, 0, 0)),
            alchemy_codes_need_registration: matches!(
                host.kind,
                HostKind::Host | HostKind::SRace | HostKind::Unknown
            ),
            registered_codes_check_key: !phost,
            extended_missions: phost,
            min_hyperjump_distance2: if phost { 401 } else { 400 },
            exact_hyperjump_min_distance2: 340 * 340,
            exact_hyperjump_max_distance2: 360 * 360,
            hyperjump_resets_fcode: !phost,
            phost_damage_speed: phost,
            configured_cloak_damage: phost,
            scoop_needs_beams: host.kind != HostKind::Host && host.kind != HostKind::SRace,
            minefield_selection: if phost {
                MinefieldSelection::LowestId
            } else {
                MinefieldSelection::Closest
            },
        }
    }

    /// True if a jump over this squared distance lands exactly on the waypoint.
    pub fn is_exact_hyperjump_distance2(&self, distance2: i64) -> bool {
        (self.exact_hyperjump_min_distance2..=self.exact_hyperjump_max_distance2)
            .contains(&distance2)
    }

    /// Highest warp factor a ship with this much damage can use.
    pub fn damage_speed_limit(&self, damage: i32, race: i32) -> i32 {
        let lizard = race == RACE_LIZARD;
        let limit = if self.phost_damage_speed {
            let tolerance = if lizard { 150 } else { 100 };
            (tolerance - damage) / 10
        } else {
            let base = if lizard { 15 } else { 10 };
            base - damage / 10
        };
        limit.clamp(0, 9)
    }

    /// Damage at or above which a cloak fails for this owner.
    pub fn cloak_damage_limit(&self, owner: i32, config: &HostConfiguration) -> i32 {
        if self.configured_cloak_damage {
            config.damage_level_for_cloak_fail.get(owner)
        } else {
            1
        }
    }
}
