//! Optimum warp factor search.

use tracing::debug;

use crate::geometry::Point;

use super::{PredictorContext, ShipPredictor};

/// Slowest warp factor at which `ship_id` gets from `origin` to `target`
/// as early as at its engine's maximum efficient warp.
///
/// Returns the maximum efficient warp itself when the target cannot be
/// reached within the movement time limit. Never goes below warp 2 when the
/// target lies in the gravity well of a planet other than one sitting at the
/// origin, since warp 1 does not get captured. Returns 0 for an unknown
/// ship.
pub fn get_optimum_warp(
    ctx: &PredictorContext<'_>,
    ship_id: i32,
    origin: Point,
    target: Point,
) -> i32 {
    let Some(ship) = ctx.universe.ship(ship_id) else {
        return 0;
    };
    let max_warp = ctx
        .ship_list
        .engine(ship.data.engine)
        .map_or(9, |e| e.max_efficient_warp());

    let Some(best) = turns_to_arrive(ctx, ship_id, origin, target, max_warp) else {
        debug!(ship = ship_id, warp = max_warp, "target out of reach");
        return max_warp;
    };

    let origin_planet = ctx.universe.planet_at(origin).map(|p| p.id);
    let target_planet = ctx
        .universe
        .find_gravity_planet_at(target, ctx.map, ctx.config);
    let floor = match target_planet {
        Some(p) if Some(p.id) != origin_planet => 2,
        _ => 1,
    };

    let mut warp = max_warp;
    while warp > floor {
        match turns_to_arrive(ctx, ship_id, origin, target, warp - 1) {
            Some(turns) if turns <= best => warp -= 1,
            _ => break,
        }
    }
    debug!(ship = ship_id, warp, turns = best, "optimum warp");
    warp
}

fn turns_to_arrive(
    ctx: &PredictorContext<'_>,
    ship_id: i32,
    origin: Point,
    target: Point,
    warp: i32,
) -> Option<i32> {
    let mut predictor = ShipPredictor::new(*ctx, ship_id);
    predictor.set_position(origin);
    predictor.set_waypoint(target);
    predictor.set_warp_factor(warp);
    predictor.compute_movement();
    (!predictor.is_at_turn_limit()).then(|| predictor.num_turns())
}
