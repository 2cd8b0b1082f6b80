mod common;

use common::{ship, Game, FALCON, FREIGHTER, HOME, STARDRIVE_1};
use pforecast_lib::mission::{MISSION_NONE, MISSION_TOW};
use pforecast_lib::{Point, ShipPredictor, UsedProperties};

fn falcon_game(host: &str, waypoint: Point, warp: i32) -> Game {
    let mut game = Game::new(host);
    let mut falcon = ship(1, FALCON, STARDRIVE_1);
    falcon.data.friendly_code = "HYP".to_string();
    falcon.data.warp = warp;
    falcon.data.waypoint = waypoint;
    game.add_ship(falcon);
    game
}

#[test]
fn short_hop_is_not_a_jump() {
    let game = falcon_game("Host 3.2.0", Point::new(15, 0), 1);
    let mut predictor = game.predictor(1);
    assert!(predictor.is_hyperdriving());

    predictor.compute_turn();
    assert_eq!(predictor.position(), Point::new(2001, 2000));
    assert_eq!(predictor.warp_factor(), 1);
    assert!(predictor.is_hyperdriving());
    assert_eq!(predictor.friendly_code(), "HYP");
    assert_eq!(predictor.cargo().fuel, 100);
}

#[test]
fn jump_covers_fixed_distance_and_costs_fifty_kt() {
    let game = falcon_game("PHost 4.0.5", Point::new(0, 500), 1);
    let mut predictor = game.predictor(1);
    predictor.compute_turn();

    assert_eq!(predictor.position(), Point::new(2000, 2350));
    assert!(predictor.is_at_waypoint());
    assert_eq!(predictor.warp_factor(), 0);
    assert!(!predictor.is_hyperdriving());
    assert_eq!(predictor.cargo().fuel, 50);
    assert_eq!(predictor.movement_fuel_used(), 50);
    assert_eq!(predictor.friendly_code(), "HYP");
}

#[test]
fn legacy_jump_lands_exactly_and_resets_code() {
    let game = falcon_game("Host 3.22.20", Point::new(200, 280), 1);
    let mut predictor = game.predictor(1);
    predictor.compute_turn();

    assert_eq!(predictor.position(), Point::new(2200, 2280));
    assert_eq!(predictor.friendly_code(), "???");
}

#[test]
fn damaged_hyperdrive_moves_normally() {
    let mut game = falcon_game("PHost 4.0.5", Point::new(0, 500), 9);
    game.scenario.config.damage_level_for_hyperjump_fail = 50;
    if let Some(falcon) = game.scenario.universe.ship_mut(1) {
        falcon.data.damage = 60;
    }

    let mut predictor = game.predictor(1);
    predictor.compute_turn();

    // Damage caps the warp at 4, which moves 16 ly.
    assert_eq!(predictor.warp_factor(), 4);
    assert_eq!(predictor.position(), Point::new(2000, 2016));
    assert_eq!(predictor.movement_fuel_used(), 10);
    assert!(predictor
        .used_properties()
        .contains(UsedProperties::DAMAGE_LIMIT));
}

#[test]
fn jump_cancels_tow() {
    let mut game = falcon_game("PHost 4.0.5", Point::new(0, 500), 1);
    if let Some(falcon) = game.scenario.universe.ship_mut(1) {
        falcon.data.mission = MISSION_TOW;
        falcon.data.tow_param = 2;
    }
    game.add_ship(ship(2, FREIGHTER, STARDRIVE_1));

    let towee = ShipPredictor::new(game.ctx(), 2);
    let mut predictor = ShipPredictor::with_towee(game.ctx(), 1, towee);
    predictor.compute_turn();

    assert_eq!(predictor.mission(), MISSION_NONE);
    assert_eq!(predictor.position(), Point::new(2000, 2350));
    let towee = predictor.towee().expect("towee linked");
    assert_eq!(towee.position(), HOME);
    assert_eq!(towee.num_turns(), 1);
}
