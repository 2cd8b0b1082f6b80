//! Mine laying and mine scooping analysis.
//!
//! Both entry points answer "what would this ship do to minefields this
//! turn?" without changing anything. Laying can be ordered through a
//! standard mission refined by friendly codes (`mdX` drops a fraction of
//! the torpedoes, `miX` lays in another player's name) or through a PHost
//! extended mission carrying count, owner or target field as parameters.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{MAX_PLAYERS, RACE_CRYSTAL, RACE_ROBOT};
use crate::host::{HostRules, MinefieldSelection, RegistrationKey};
use crate::mission::{ExtMission, MISSION_LAY_MINES, MISSION_MINESWEEP, MISSION_SPECIAL};
use crate::predictor::PredictorContext;
use crate::universe::{Minefield, ShipData};

/// Outcome of a lay or scoop analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinefieldMission {
    /// Field to extend or scoop from; 0 creates a new field.
    pub minefield_id: i32,
    pub owner: i32,
    pub is_web: bool,
    pub num_torpedoes: i32,
    pub num_units: i32,
    /// The ship's mission decided the outcome.
    pub mission_used: bool,
    /// The ship's friendly code decided the outcome.
    pub friendly_code_used: bool,
}

/// How a laying order names its minefield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayOrder {
    /// Standard mission, refined by friendly codes.
    Standard,
    /// Extended mission with torpedo count and owner.
    WithOwner,
    /// Extended mission with torpedo count and target field.
    IntoField,
}

/// Analyze whether `ship` lays mines this turn.
pub fn check_lay_mission(
    ship: &ShipData,
    ctx: &PredictorContext<'_>,
    rules: &HostRules,
) -> Option<MinefieldMission> {
    if !ship.has_launchers() || ship.cargo.ammo <= 0 {
        return None;
    }
    let race = ctx.config.race_of(ship.owner);
    let (is_web, order) = lay_order(ship, ctx, rules, race)?;

    let mut result = MinefieldMission {
        owner: ship.owner,
        is_web,
        num_torpedoes: ship.cargo.ammo,
        mission_used: true,
        ..MinefieldMission::default()
    };
    let mut owner_fixed = false;
    let mut target = 0;

    match order {
        LayOrder::WithOwner | LayOrder::IntoField => {
            if ship.intercept_param > 0 {
                result.num_torpedoes = result.num_torpedoes.min(ship.intercept_param);
            }
            if order == LayOrder::IntoField {
                target = ship.tow_param;
            } else if (1..=MAX_PLAYERS).contains(&ship.tow_param) {
                result.owner = ship.tow_param;
                owner_fixed = true;
            }
        }
        LayOrder::Standard => {
            let fcode = ship.friendly_code.as_str();
            if ctx
                .ship_list
                .friendly_codes()
                .is_accepted_for_ship(fcode, race, ctx.key)
            {
                if let Some(count) = drop_fraction(fcode, ship.cargo.ammo) {
                    result.num_torpedoes = count;
                    result.friendly_code_used = true;
                } else if let Some(owner) = identity_override(fcode) {
                    result.owner = owner;
                    owner_fixed = true;
                    result.friendly_code_used = true;
                }
            }
        }
    }
    if result.num_torpedoes <= 0 {
        return None;
    }

    let rate = if is_web {
        &ctx.config.units_per_web_rate
    } else {
        &ctx.config.units_per_torp_rate
    };
    let mut units = result.num_torpedoes * ship.torpedo_type * ship.torpedo_type * rate.get(ship.owner)
        / 100;
    if race == RACE_ROBOT && !owner_fixed {
        units *= 4;
    }
    result.num_units = units;

    result.minefield_id = if target != 0 {
        let field = ctx.universe.minefield(target)?;
        if field.owner != result.owner || field.is_web != is_web {
            return None;
        }
        field.id
    } else {
        find_field_to_extend(ship, ctx, rules, result.owner, is_web).map_or(0, |f| f.id)
    };

    debug!(
        field = result.minefield_id,
        owner = result.owner,
        torpedoes = result.num_torpedoes,
        units = result.num_units,
        web = is_web,
        "lays mines"
    );
    Some(result)
}

fn lay_order(
    ship: &ShipData,
    ctx: &PredictorContext<'_>,
    rules: &HostRules,
    race: i32,
) -> Option<(bool, LayOrder)> {
    let mission = ship.mission;
    if rules.extended_missions {
        let config = ctx.config;
        if ExtMission::LayMines.matches(mission, config) {
            return Some((false, LayOrder::WithOwner));
        }
        if ExtMission::LayMinesIn.matches(mission, config) {
            return Some((false, LayOrder::IntoField));
        }
        if race == RACE_CRYSTAL {
            if ExtMission::LayWeb.matches(mission, config) {
                return Some((true, LayOrder::WithOwner));
            }
            if ExtMission::LayWebIn.matches(mission, config) {
                return Some((true, LayOrder::IntoField));
            }
        }
    }
    if mission == MISSION_LAY_MINES {
        Some((false, LayOrder::Standard))
    } else if mission == MISSION_SPECIAL && race == RACE_CRYSTAL {
        Some((true, LayOrder::Standard))
    } else {
        None
    }
}

/// Torpedoes dropped under an `mdX` friendly code.
fn drop_fraction(fcode: &str, ammo: i32) -> Option<i32> {
    let suffix = fcode.strip_prefix("md")?;
    match suffix {
        "0" => Some(ammo),
        "h" => Some(ammo / 2),
        "q" => Some(ammo / 4),
        _ => {
            let tenths = suffix.parse::<i32>().ok().filter(|n| (1..=9).contains(n))?;
            Some(ammo * tenths / 10)
        }
    }
}

/// Owner named by an `miX` friendly code.
fn identity_override(fcode: &str) -> Option<i32> {
    match fcode.strip_prefix("mi")? {
        "a" => Some(10),
        "b" => Some(11),
        digit => digit.parse::<i32>().ok().filter(|n| (1..=9).contains(n)),
    }
}

fn find_field_to_extend<'u>(
    ship: &ShipData,
    ctx: &PredictorContext<'u>,
    rules: &HostRules,
    owner: i32,
    is_web: bool,
) -> Option<&'u Minefield> {
    let candidates = ctx
        .universe
        .minefields()
        .filter(|f| f.owner == owner && f.is_web == is_web && f.contains(ship.position));
    match rules.minefield_selection {
        MinefieldSelection::Closest => {
            candidates.min_by_key(|f| (f.position.squared_distance_to(ship.position), f.id))
        }
        MinefieldSelection::LowestId => candidates.min_by_key(|f| f.id),
    }
}

/// Analyze whether `ship` scoops torpedoes from a minefield this turn.
pub fn check_scoop_mission(
    ship: &ShipData,
    ctx: &PredictorContext<'_>,
    rules: &HostRules,
) -> Option<MinefieldMission> {
    if !ship.has_launchers() {
        return None;
    }
    if rules.scoop_needs_beams && ship.num_beams <= 0 {
        return None;
    }
    let race = ctx.config.race_of(ship.owner);
    let key = if rules.registered_codes_check_key {
        *ctx.key
    } else {
        RegistrationKey::registered()
    };

    let mut result = MinefieldMission {
        owner: ship.owner,
        mission_used: true,
        ..MinefieldMission::default()
    };
    let (target, limit) = if ship.friendly_code == "msc"
        && ship.mission == MISSION_MINESWEEP
        && ctx
            .ship_list
            .friendly_codes()
            .is_accepted_for_ship("msc", race, &key)
    {
        result.friendly_code_used = true;
        (0, 0)
    } else if rules.extended_missions
        && ExtMission::ScoopTorpedoes.matches(ship.mission, ctx.config)
    {
        (ship.intercept_param, ship.tow_param)
    } else {
        return None;
    };

    let field = ctx
        .universe
        .minefields()
        .filter(|f| f.owner == ship.owner && f.contains(ship.position))
        .filter(|f| target == 0 || f.id == target)
        .min_by_key(|f| f.id)?;

    let rate = if field.is_web {
        &ctx.config.units_per_web_rate
    } else {
        &ctx.config.units_per_torp_rate
    };
    let units_per_torpedo = ship.torpedo_type * ship.torpedo_type * rate.get(ship.owner) / 100;
    if units_per_torpedo <= 0 {
        return None;
    }
    let hull = ctx.ship_list.hull(ship.hull)?;
    let free_cargo = (hull.max_cargo - ship.cargo.used_space()).max(0);
    let mut torpedoes = free_cargo.min(field.units / units_per_torpedo);
    if limit > 0 {
        torpedoes = torpedoes.min(limit);
    }
    if torpedoes <= 0 {
        return None;
    }

    result.minefield_id = field.id;
    result.is_web = field.is_web;
    result.num_torpedoes = torpedoes;
    result.num_units = torpedoes * units_per_torpedo;
    debug!(
        field = field.id,
        torpedoes, units = result.num_units, "scoops torpedoes"
    );
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_fraction_codes() {
        assert_eq!(drop_fraction("md0", 40), Some(40));
        assert_eq!(drop_fraction("md3", 40), Some(12));
        assert_eq!(drop_fraction("mdh", 41), Some(20));
        assert_eq!(drop_fraction("mdq", 41), Some(10));
        assert_eq!(drop_fraction("mdx", 40), None);
        assert_eq!(drop_fraction("mkt", 40), None);
    }

    #[test]
    fn identity_override_codes() {
        assert_eq!(identity_override("mi4"), Some(4));
        assert_eq!(identity_override("mia"), Some(10));
        assert_eq!(identity_override("mib"), Some(11));
        assert_eq!(identity_override("mi0"), None);
        assert_eq!(identity_override("mic"), None);
        assert_eq!(identity_override("md4"), None);
    }
}
