//! Fuel usage formulas.
//!
//! Three formulas are in use, selected by [`FuelModel`]:
//!
//! - legacy host: integer-truncating over the table distance, full rate for
//!   a move spanning the turn's maximum
//! - PHost standard: load rounded to tens, true Euclidean distance
//! - PHost accurate: exponential decay over the whole load
//!
//! All functions return 0 instead of failing on degenerate input (zero fuel
//! factor, zero distance, unknown components).

use crate::geometry::Point;
use crate::host::{FuelModel, HostRules};
use crate::shiplist::{Hull, ShipList};
use crate::universe::ShipData;

use super::tim_distance;

/// Fuel needed to move by `movement` in one turn.
///
/// * `fuel_factor` - engine fuel factor at the current warp
/// * `way` - maximum distance of this turn (warp squared, doubled for gravitonic hulls)
/// * `load` - engine load in kt, see [`engine_load`]
/// * `fuel` - fuel aboard before moving; only the accurate model looks at it
pub fn compute_fuel_usage(
    rules: &HostRules,
    fuel_factor: i32,
    movement: Point,
    way: i32,
    load: i32,
    fuel: i32,
) -> i32 {
    if fuel_factor <= 0 || way <= 0 || movement.is_zero() {
        return 0;
    }
    let ff = i64::from(fuel_factor);
    let way64 = i64::from(way);

    match rules.fuel_model {
        FuelModel::Legacy => {
            // A move spanning the whole turn's distance pays the full rate.
            let dist = if movement.squared_distance_to(Point::default()) >= way64 * way64 {
                way64
            } else {
                i64::from(tim_distance(movement.x, movement.y).min(way))
            };
            let usage = ff * i64::from(load / 10) * dist / (10_000 * way64);
            usage as i32
        }
        FuelModel::PHostStandard => {
            let dist = movement.distance_to(Point::default());
            let load_tens = f64::from((load + 5) / 10);
            (load_tens * ff as f64 * dist / (10_000.0 * way64 as f64)) as i32
        }
        FuelModel::PHostAccurate => {
            let dist = movement.distance_to(Point::default());
            let exact =
                f64::from(load) * (1.0 - (-(ff as f64) * dist / (way64 as f64 * 100_000.0)).exp());
            let rounded = exact.round() as i32;
            if rules.accurate_fuel_bug && rounded == fuel && exact > f64::from(fuel) {
                rounded + 1
            } else {
                rounded
            }
        }
    }
}

/// Fuel burnt per turn regardless of movement: `ceil(mass * rate / 100)` per turn.
pub fn turn_fuel_usage(hull_mass: i32, rate: i32, turns: i32) -> i32 {
    if rate <= 0 || turns <= 0 {
        return 0;
    }
    let per_turn = (hull_mass * rate + 99) / 100;
    per_turn * turns
}

/// Fuel burnt by cloaking for one turn.
pub fn cloak_fuel_usage(hull: &Hull, advanced_cloak: bool, rate: i32) -> i32 {
    if advanced_cloak {
        0
    } else {
        rate.max(hull.mass * rate / 100)
    }
}

/// Total mass of a ship: hull, weapons, cargo and fuel.
///
/// Components missing from the ship list weigh nothing.
pub fn ship_mass(data: &ShipData, ship_list: &ShipList) -> i32 {
    let hull = ship_list.hull(data.hull).map_or(0, |h| h.mass);
    let beams = ship_list
        .beam(data.beam_type)
        .map_or(0, |b| b.mass * data.num_beams.max(0));
    let launchers = ship_list
        .launcher(data.torpedo_type)
        .map_or(0, |l| l.launcher_mass * data.num_launchers.max(0));
    hull + beams + launchers + data.cargo.mass()
}

/// Mass the engines have to move: the ship itself plus a towed ship.
///
/// The legacy host only counts the towed mass in whole tens.
pub fn engine_load(
    data: &ShipData,
    towee: Option<&ShipData>,
    ship_list: &ShipList,
    rules: &HostRules,
) -> i32 {
    let own = ship_mass(data, ship_list);
    let towed = towee.map_or(0, |t| ship_mass(t, ship_list));
    match rules.fuel_model {
        FuelModel::Legacy => own + towed / 10 * 10,
        FuelModel::PHostStandard | FuelModel::PHostAccurate => own + towed,
    }
}
