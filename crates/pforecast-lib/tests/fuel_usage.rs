mod common;

use common::{ship, Game, EMERALD, FREIGHTER, HEAVYNOVA_6, HOME, STARDRIVE_1};
use pforecast_lib::config::PlayerArray;
use pforecast_lib::mission::MISSION_TOW;
use pforecast_lib::{Point, ShipPredictor, UsedProperties};

/// Emerald moving 45 ly at warp 7 with 474 kt tritanium aboard.
fn accurate_model_game(host: &str, fuel: i32) -> Game {
    let mut game = Game::new(host);
    game.scenario.config.use_accurate_fuel_model = true;
    let mut emerald = ship(1, EMERALD, HEAVYNOVA_6);
    emerald.data.warp = 7;
    emerald.data.waypoint = Point::new(45, 0);
    emerald.data.cargo.tritanium = 474;
    emerald.data.cargo.fuel = fuel;
    game.add_ship(emerald);
    game
}

fn run_one_turn(game: &Game) -> (i32, i32) {
    let mut predictor = game.predictor(1);
    predictor.compute_turn();
    assert_eq!(predictor.position(), Point::new(2045, 2000));
    (predictor.movement_fuel_used(), predictor.cargo().fuel)
}

#[test]
fn accurate_model_reproduces_old_phost_asymmetry() {
    let with_79 = accurate_model_game("PHost 3.2.5", 79);
    assert_eq!(run_one_turn(&with_79), (78, 1));

    // One kt less fuel makes the move cost one kt more.
    let with_78 = accurate_model_game("PHost 3.2.5", 78);
    assert_eq!(run_one_turn(&with_78), (79, -1));
}

#[test]
fn accurate_model_asymmetry_fixed_in_phost_4_0_5() {
    let with_79 = accurate_model_game("PHost 4.0.5", 79);
    assert_eq!(run_one_turn(&with_79), (78, 1));

    let with_78 = accurate_model_game("PHost 4.0.5", 78);
    assert_eq!(run_one_turn(&with_78), (78, 0));
}

fn straight_move(host: &str) -> i32 {
    let mut game = Game::new(host);
    let mut emerald = ship(1, EMERALD, HEAVYNOVA_6);
    emerald.data.warp = 9;
    emerald.data.waypoint = Point::new(0, 50);
    emerald.data.cargo.fuel = 305;
    game.add_ship(emerald);

    let mut predictor = game.predictor(1);
    predictor.compute_turn();
    assert!(predictor.is_at_waypoint());
    predictor.movement_fuel_used()
}

#[test]
fn legacy_host_truncates_load_to_tens() {
    // 485 kt: legacy counts 48 tens, PHost rounds to 49.
    assert_eq!(straight_move("Host 3.22.20"), 216);
    assert_eq!(straight_move("PHost 4.0.5"), 220);
}

fn legacy_short_hop(distance: i32) -> i32 {
    let mut game = Game::new("Host 3.22.20");
    let mut emerald = ship(1, EMERALD, HEAVYNOVA_6);
    emerald.data.warp = 2;
    emerald.data.waypoint = Point::new(distance, 0);
    emerald.data.cargo.tritanium = 2_420;
    game.add_ship(emerald);

    let mut predictor = game.predictor(1);
    predictor.compute_turn();
    assert!(predictor.is_at_waypoint());
    predictor.movement_fuel_used()
}

#[test]
fn legacy_host_charges_three_ly_like_two() {
    // 180 + 100 + 2420 = 2700 kt at warp 2.
    let burnt: Vec<i32> = (1..=4).map(legacy_short_hop).collect();
    assert_eq!(burnt, vec![2, 5, 5, 11]);
}

fn tow_game(mission: i32) -> Game {
    let mut game = Game::new("PHost 4.0.5");
    let mut tower = ship(1, EMERALD, HEAVYNOVA_6);
    tower.data.warp = 9;
    tower.data.waypoint = Point::new(0, 50);
    tower.data.cargo.fuel = 300;
    tower.data.mission = mission;
    tower.data.tow_param = 2;
    game.add_ship(tower);
    game.add_ship(ship(2, FREIGHTER, STARDRIVE_1));
    game
}

#[test]
fn towed_ship_mass_adds_to_engine_load() {
    let game = tow_game(MISSION_TOW);
    let towee = ShipPredictor::new(game.ctx(), 2);
    let mut tower = ShipPredictor::with_towee(game.ctx(), 1, towee);
    tower.compute_turn();

    // 180 + 300 + (30 + 100) = 610 kt
    assert_eq!(tower.movement_fuel_used(), 274);
    assert_eq!(tower.cargo().fuel, 26);
    assert!(tower.used_properties().contains(UsedProperties::TOWEE));

    let towee = tower.towee().expect("towee linked");
    assert_eq!(towee.position(), Point::new(2000, 2050));
    assert!(towee.is_at_waypoint());
    assert_eq!(towee.num_turns(), 1);
    assert_eq!(towee.cargo().fuel, 100);
}

#[test]
fn towee_advances_without_tow_mission() {
    let game = tow_game(0);
    let towee = ShipPredictor::new(game.ctx(), 2);
    let mut tower = ShipPredictor::with_towee(game.ctx(), 1, towee);
    tower.compute_turn();

    assert_eq!(tower.movement_fuel_used(), 216);
    assert!(!tower.used_properties().contains(UsedProperties::TOWEE));
    let towee = tower.towee().expect("towee linked");
    assert_eq!(towee.position(), HOME);
    assert_eq!(towee.num_turns(), 1);
}

#[test]
fn turn_fuel_burn_rounds_up_and_spares_negative_fuel() {
    let mut game = Game::new("PHost 4.0.5");
    game.scenario.config.fuel_usage_per_turn_for_100kt = PlayerArray::uniform(5);
    game.add_ship(ship(1, EMERALD, HEAVYNOVA_6));

    let mut predictor = game.predictor(1);
    predictor.compute_turn();
    assert_eq!(predictor.cargo().fuel, 91);
    assert_eq!(predictor.movement_fuel_used(), 0);

    let mut dry = game.predictor(1);
    dry.set_fuel(-5);
    dry.compute_turn();
    assert_eq!(dry.cargo().fuel, -5);
}
