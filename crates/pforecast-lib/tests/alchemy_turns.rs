mod common;

use common::{ship, Game, MERLIN, NEUTRONIC, TRANSWARP};
use pforecast_lib::shiplist::HullFunctionAssignment;
use pforecast_lib::universe::{UnitScoreDefinition, SCORE_ID_EXP_LEVEL};
use pforecast_lib::{HullFunction, Ship, UsedProperties};

fn merlin() -> Ship {
    let mut merlin = ship(1, MERLIN, TRANSWARP);
    merlin.data.friendly_code = "xyz".to_string();
    merlin.data.cargo.supplies = 900;
    merlin.data.cargo.tritanium = 10;
    merlin.data.cargo.duranium = 20;
    merlin.data.cargo.molybdenum = 30;
    merlin
}

fn run_turn(host: &str, ship: Ship) -> (pforecast_lib::Cargo, UsedProperties) {
    let mut game = Game::new(host);
    game.add_ship(ship);
    let mut predictor = game.predictor(1);
    predictor.compute_turn();
    (*predictor.cargo(), predictor.used_properties())
}

#[test]
fn merlin_converts_supplies_into_all_minerals() {
    for host in ["Host 3.22.20", "PHost 4.0.5"] {
        let (cargo, used) = run_turn(host, merlin());
        assert_eq!(
            (cargo.tritanium, cargo.duranium, cargo.molybdenum),
            (110, 120, 130),
            "minerals under {host}"
        );
        assert_eq!(cargo.supplies, 0, "supplies under {host}");
        assert!(used.contains(UsedProperties::ALCHEMY));
        assert!(!used.contains(UsedProperties::FRIENDLY_CODE));
    }
}

#[test]
fn nal_code_stops_alchemy() {
    let mut ship = merlin();
    ship.data.friendly_code = "NAL".to_string();
    for host in ["Host 3.22.20", "PHost 4.0.5"] {
        let (cargo, used) = run_turn(host, ship.clone());
        assert_eq!(cargo.supplies, 900);
        assert_eq!(cargo.tritanium, 10);
        assert!(used.contains(UsedProperties::FRIENDLY_CODE));
        assert!(!used.contains(UsedProperties::ALCHEMY));
    }
}

#[test]
fn alchemy_with_refinery_depends_on_host_version() {
    let mut ship = merlin();
    ship.functions
        .push(HullFunctionAssignment::new(HullFunction::AriesRefinery));

    // Combination hosts refine supplies directly, 3 per kt of fuel.
    let (cargo, _) = run_turn("PHost 4.0.5", ship.clone());
    assert_eq!((cargo.fuel, cargo.supplies), (400, 0));
    assert_eq!(cargo.tritanium, 10);

    // Older hosts run the refinery alone.
    let (cargo, _) = run_turn("PHost 3.2.5", ship);
    assert_eq!((cargo.fuel, cargo.supplies), (160, 900));
    assert_eq!((cargo.tritanium, cargo.duranium, cargo.molybdenum), (0, 0, 0));
}

#[test]
fn experience_gated_function_needs_level() {
    let mut ship = merlin();
    ship.functions.push(HullFunctionAssignment {
        function: HullFunction::AriesRefinery,
        min_level: 2,
    });
    // No experience recorded: the grant does not apply, plain alchemy runs.
    let (cargo, _) = run_turn("PHost 4.0.5", ship.clone());
    assert_eq!(cargo.fuel, 100);
    assert_eq!(cargo.tritanium, 110);

    let mut game = Game::new("PHost 4.0.5");
    let index = game.scenario.scores.add(UnitScoreDefinition {
        id: SCORE_ID_EXP_LEVEL,
        name: "Experience".to_string(),
        limit: 0,
    });
    ship.unit_scores.insert(index, 2);
    game.add_ship(ship);
    let mut predictor = game.predictor(1);
    predictor.compute_turn();
    assert_eq!(predictor.cargo().fuel, 400);
}

#[test]
fn neutronic_refinery_burns_supplies_and_minerals() {
    let mut refinery = ship(1, NEUTRONIC, TRANSWARP);
    refinery.data.cargo.supplies = 50;
    refinery.data.cargo.tritanium = 20;
    refinery.data.cargo.duranium = 40;

    let (cargo, used) = run_turn("PHost 4.0.5", refinery);
    assert_eq!(cargo.fuel, 150);
    assert_eq!((cargo.tritanium, cargo.duranium, cargo.supplies), (0, 10, 0));
    assert_eq!(used, UsedProperties::ALCHEMY);
}
