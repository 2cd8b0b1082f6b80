//! Shared fixtures for integration tests.
//!
//! Loads the ship list under `docs/fixtures/shiplist` and builds small
//! universes around it in code.

#![allow(dead_code)]

use std::path::PathBuf;

use pforecast_lib::universe::{Cargo, Planet, Ship, ShipData};
use pforecast_lib::{Point, PredictorContext, Scenario, ShipList, ShipPredictor};

pub const OUTRIDER: i32 = 1;
pub const FREIGHTER: i32 = 15;
pub const EMERALD: i32 = 16;
pub const WHITE_FALCON: i32 = 21;
pub const DARK_WING: i32 = 29;
pub const BR4: i32 = 44;
pub const FALCON: i32 = 51;
pub const GORBIE: i32 = 69;
pub const MERLIN: i32 = 104;
pub const NEUTRONIC: i32 = 105;
pub const ARIES: i32 = 97;

pub const STARDRIVE_1: i32 = 1;
pub const HEAVYNOVA_6: i32 = 6;
pub const TRANSWARP: i32 = 9;

/// Deep-space spot used as default ship position.
pub const HOME: Point = Point::new(2000, 2000);

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn ship_list() -> ShipList {
    ShipList::from_dir(&fixtures_dir().join("shiplist")).expect("load fixture ship list")
}

/// A ship list plus a scenario to predict in.
pub struct Game {
    pub ship_list: ShipList,
    pub scenario: Scenario,
}

impl Game {
    /// Empty universe under the given host, e.g. `"PHost 4.0.5"`.
    pub fn new(host: &str) -> Self {
        let mut scenario = Scenario::default();
        scenario.host = host.parse().expect("valid host version");
        Self {
            ship_list: ship_list(),
            scenario,
        }
    }

    pub fn add_ship(&mut self, ship: Ship) {
        self.scenario.universe.add_ship(ship);
    }

    pub fn add_planet(&mut self, id: i32, position: Point, owner: i32) {
        self.scenario.universe.add_planet(Planet {
            id,
            name: format!("Planet {id}"),
            position,
            owner,
            base: None,
        });
    }

    pub fn ctx(&self) -> PredictorContext<'_> {
        self.scenario.context(&self.ship_list)
    }

    pub fn predictor(&self, ship_id: i32) -> ShipPredictor<'_> {
        ShipPredictor::new(self.ctx(), ship_id)
    }
}

/// Player 1 ship at [`HOME`] with no orders and 100 kt of fuel.
pub fn ship(id: i32, hull: i32, engine: i32) -> Ship {
    Ship {
        id,
        name: format!("Ship {id}"),
        data: ShipData {
            owner: 1,
            position: HOME,
            friendly_code: "abc".to_string(),
            hull,
            engine,
            cargo: Cargo {
                fuel: 100,
                ..Cargo::default()
            },
            crew: 10,
            ..ShipData::default()
        },
        ..Ship::default()
    }
}
