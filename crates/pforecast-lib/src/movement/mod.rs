//! Fuel and movement mathematics.
//!
//! - [`fuel`] - Fuel usage formulas, engine load and per-turn burn
//! - `distance_table` - Integer distances reproduced by the legacy host
//!
//! Everything here is a pure function of its arguments.

mod distance_table;
pub mod fuel;

pub use fuel::{
    cloak_fuel_usage, compute_fuel_usage, engine_load, ship_mass, turn_fuel_usage,
};

use crate::geometry::Point;
use crate::host::{HostRules, MovementModel};

use distance_table::{DISTANCE_TABLE, DISTANCE_TABLE_SIZE};

/// Distance covered by a successful hyperjump that does not land exactly.
pub const HYPERJUMP_DISTANCE: f64 = 350.0;

/// Integer distance for a displacement, as computed by the legacy host.
///
/// Components below 168 are looked up in the precomputed table; larger
/// displacements fall back to the rounded Euclidean distance.
pub fn tim_distance(dx: i32, dy: i32) -> i32 {
    let (ax, ay) = (dx.unsigned_abs(), dy.unsigned_abs());
    let dx = ax as usize;
    let dy = ay as usize;
    if dx >= DISTANCE_TABLE_SIZE || dy >= DISTANCE_TABLE_SIZE {
        let (x, y) = (i64::from(ax), i64::from(ay));
        return ((x * x + y * y) as f64).sqrt().round() as i32;
    }

    let row = &DISTANCE_TABLE[dy];
    let mut distance = dy as u32;
    let mut remaining = dx;
    let mut index = 0;
    while remaining >= 8 {
        distance += row[index].count_ones();
        index += 1;
        remaining -= 8;
    }
    let mask = (1u16 << remaining) - 1;
    distance += (u16::from(row[index]) & mask).count_ones();
    distance as i32
}

/// Maximum distance moved in one turn at a warp factor.
pub fn max_distance(warp: i32, gravitonic: bool) -> i32 {
    let way = warp * warp;
    if gravitonic {
        2 * way
    } else {
        way
    }
}

/// Displacement for one turn of sub-light movement towards `offset`.
///
/// Returns `offset` itself if the waypoint is reachable this turn.
pub fn compute_displacement(offset: Point, way: i32, model: MovementModel) -> Point {
    if offset.is_zero() || way <= 0 {
        return Point::default();
    }
    match model {
        MovementModel::Legacy => legacy_displacement(offset, way),
        MovementModel::PHost => phost_displacement(offset, way),
    }
}

fn legacy_displacement(offset: Point, way: i32) -> Point {
    if tim_distance(offset.x, offset.y) <= way {
        return offset;
    }
    let ax = f64::from(offset.x.abs());
    let ay = f64::from(offset.y.abs());
    let dist = (ax * ax + ay * ay).sqrt();
    let way = f64::from(way);

    let (mx, my) = if ax >= ay {
        let mx = (way * ax / dist).round();
        (mx, (mx * ay / ax).round())
    } else {
        let my = (way * ay / dist).round();
        ((my * ax / ay).round(), my)
    };
    Point::new(
        (mx as i32) * offset.x.signum(),
        (my as i32) * offset.y.signum(),
    )
}

fn phost_displacement(offset: Point, way: i32) -> Point {
    let way2 = i64::from(way) * i64::from(way);
    if offset.squared_distance_to(Point::default()) <= way2 {
        return offset;
    }
    // Heading is measured from north, clockwise.
    let heading = f64::from(offset.x).atan2(f64::from(offset.y));
    let way = f64::from(way);
    let mut mx = (way * heading.sin()).round() as i32;
    let mut my = (way * heading.cos()).round() as i32;
    if offset.x == 0 {
        mx = 0;
    }
    if offset.y == 0 {
        my = 0;
    }
    Point::new(mx, my)
}

/// Displacement of a hyperjump towards `offset`.
///
/// Jumps over an "exact" distance land on the waypoint; all others cover
/// [`HYPERJUMP_DISTANCE`] in the waypoint's direction.
pub fn hyperjump_displacement(offset: Point, rules: &HostRules) -> Point {
    let distance2 = offset.squared_distance_to(Point::default());
    if distance2 == 0 || rules.is_exact_hyperjump_distance2(distance2) {
        return offset;
    }
    let dist = (distance2 as f64).sqrt();
    Point::new(
        (HYPERJUMP_DISTANCE * f64::from(offset.x) / dist).round() as i32,
        (HYPERJUMP_DISTANCE * f64::from(offset.y) / dist).round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostConfiguration;
    use crate::host::{mk_version, HostKind, HostVersion};

    #[test]
    fn tim_distance_matches_known_values() {
        assert_eq!(tim_distance(0, 0), 0);
        assert_eq!(tim_distance(1, 1), 1);
        assert_eq!(tim_distance(2, 2), 3);
        assert_eq!(tim_distance(3, 4), 5);
        assert_eq!(tim_distance(-3, 4), 5);
        assert_eq!(tim_distance(100, 37), 107);
        assert_eq!(tim_distance(0, 167), 167);
    }

    #[test]
    fn tim_distance_along_x_skips_third_step() {
        let straight: Vec<i32> = (0..=3).map(|dx| tim_distance(dx, 0)).collect();
        assert_eq!(straight, vec![0, 1, 2, 2]);
        assert_eq!(tim_distance(-3, 0), 2);
        assert_eq!(tim_distance(4, 0), 3);
        assert_eq!(tim_distance(167, 0), 166);
        // The same move along y is counted in full.
        assert_eq!(tim_distance(0, 3), 3);
    }

    #[test]
    fn tim_distance_falls_back_to_euclid_outside_table() {
        assert_eq!(tim_distance(168, 0), 168);
        assert_eq!(tim_distance(200, 100), 224);
        assert_eq!(tim_distance(-300, -400), 500);
    }

    #[test]
    fn tim_distance_is_symmetric_off_axis() {
        for dx in (1..168).step_by(7) {
            for dy in (1..168).step_by(11) {
                assert_eq!(
                    tim_distance(dx, dy),
                    tim_distance(dy, dx),
                    "asymmetric at ({dx},{dy})"
                );
            }
        }
    }

    #[test]
    fn legacy_displacement_moves_dominant_axis_first() {
        let moved = compute_displacement(Point::new(100, 50), 81, MovementModel::Legacy);
        assert_eq!(moved, Point::new(72, 36));

        let moved = compute_displacement(Point::new(-20, 100), 81, MovementModel::Legacy);
        assert_eq!(moved, Point::new(-16, 79));

        let reachable = Point::new(30, 40);
        assert_eq!(
            compute_displacement(reachable, 81, MovementModel::Legacy),
            reachable
        );
    }

    #[test]
    fn phost_displacement_zeroes_straight_axes() {
        assert_eq!(
            compute_displacement(Point::new(0, -200), 81, MovementModel::PHost),
            Point::new(0, -81)
        );
        assert_eq!(
            compute_displacement(Point::new(100, 50), 81, MovementModel::PHost),
            Point::new(72, 36)
        );
        assert_eq!(
            compute_displacement(Point::new(3, 4), 4, MovementModel::PHost),
            Point::new(2, 3)
        );
    }

    #[test]
    fn no_displacement_without_warp() {
        assert_eq!(
            compute_displacement(Point::new(10, 10), 0, MovementModel::PHost),
            Point::default()
        );
    }

    #[test]
    fn gravitonic_hulls_move_twice_as_far() {
        assert_eq!(max_distance(9, false), 81);
        assert_eq!(max_distance(9, true), 162);
        assert_eq!(max_distance(0, true), 0);
    }

    #[test]
    fn hyperjump_covers_fixed_distance_unless_exact() {
        let rules = HostRules::resolve(
            &HostVersion::new(HostKind::PHost, mk_version(4, 0, 5)),
            &HostConfiguration::default(),
        );
        assert_eq!(
            hyperjump_displacement(Point::new(0, 500), &rules),
            Point::new(0, 350)
        );
        assert_eq!(
            hyperjump_displacement(Point::new(300, 400), &rules),
            Point::new(210, 280)
        );
        let exact = Point::new(0, 345);
        assert_eq!(hyperjump_displacement(exact, &rules), exact);
    }
}
