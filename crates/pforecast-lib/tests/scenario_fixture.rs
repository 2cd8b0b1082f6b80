mod common;

use common::{fixtures_dir, ship_list};
use pforecast_lib::{HostKind, Point, Scenario, ShipPredictor, UsedProperties};

fn fixture_scenario() -> Scenario {
    Scenario::from_path(&fixtures_dir().join("scenario.json")).expect("load fixture scenario")
}

#[test]
fn fixture_scenario_validates() {
    let scenario = fixture_scenario();
    assert_eq!(scenario.host.kind, HostKind::PHost);
    assert!(scenario.key.is_registered());
    assert_eq!(scenario.universe.ships().count(), 3);
    assert_eq!(scenario.universe.minefields().count(), 1);
    scenario.validate(&ship_list()).expect("fixture is consistent");
}

#[test]
fn emerald_reaches_vega_in_three_turns() {
    let scenario = fixture_scenario();
    let list = ship_list();
    let mut predictor = ShipPredictor::new(scenario.context(&list), 1);
    predictor.compute_movement();

    assert_eq!(predictor.num_turns(), 3);
    assert_eq!(predictor.position(), Point::new(2150, 2100));
    let vega = scenario.universe.planet_at(predictor.position());
    assert_eq!(vega.map(|p| p.name.as_str()), Some("Vega"));
}

#[test]
fn falcon_hyperjumps() {
    let scenario = fixture_scenario();
    let list = ship_list();
    let mut predictor = ShipPredictor::new(scenario.context(&list), 2);
    assert!(predictor.is_hyperdriving());
    predictor.compute_movement();

    assert_eq!(predictor.num_turns(), 1);
    assert_eq!(predictor.position(), Point::new(2000, 2350));
    assert_eq!(predictor.cargo().fuel, 100);
}

#[test]
fn merlin_makes_tritanium() {
    let scenario = fixture_scenario();
    let list = ship_list();
    let mut predictor = ShipPredictor::new(scenario.context(&list), 3);
    predictor.compute_turn();

    assert_eq!(predictor.cargo().tritanium, 300);
    assert_eq!(predictor.cargo().supplies, 0);
    assert_eq!(
        predictor.used_properties(),
        UsedProperties::ALCHEMY | UsedProperties::FRIENDLY_CODE
    );
}

#[test]
fn prediction_leaves_scenario_untouched() {
    let scenario = fixture_scenario();
    let before = scenario.clone();
    let list = ship_list();
    for id in [1, 2, 3] {
        let mut predictor = ShipPredictor::new(scenario.context(&list), id);
        predictor.compute_movement();
    }
    assert_eq!(scenario, before);
}
