//! Scenario files: a game snapshot to run predictions against.
//!
//! A scenario is a JSON document holding the host version, configuration,
//! registration key, map geometry, unit score definitions and universe.
//! Every section is optional; missing sections take their defaults.
//!
//! ```json
//! {
//!   "host": "PHost 4.0.5",
//!   "config": { "allow_gravity_wells": true },
//!   "universe": {
//!     "ships": [{ "id": 1, "owner": 1, "hull": 16, "engine": 6 }],
//!     "planets": [{ "id": 7, "position": { "x": 1500, "y": 1500 } }]
//!   }
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::HostConfiguration;
use crate::error::{Error, Result};
use crate::geometry::MapConfiguration;
use crate::host::{HostVersion, RegistrationKey};
use crate::predictor::PredictorContext;
use crate::shiplist::ShipList;
use crate::universe::{UnitScoreDefinitions, Universe};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub host: HostVersion,
    pub config: HostConfiguration,
    pub key: RegistrationKey,
    pub map: MapConfiguration,
    pub scores: UnitScoreDefinitions,
    pub universe: Universe,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let scenario = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            host = %scenario.host,
            ships = scenario.universe.ships().count(),
            planets = scenario.universe.planets().count(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Check that every ship refers to a hull of the ship list.
    ///
    /// Unknown engines only produce a warning; such ships predict without
    /// burning movement fuel.
    pub fn validate(&self, ship_list: &ShipList) -> Result<()> {
        for ship in self.universe.ships() {
            if ship_list.hull(ship.data.hull).is_none() {
                return Err(Error::ScenarioValidation {
                    message: format!("ship {} uses unknown hull {}", ship.id, ship.data.hull),
                });
            }
            if ship.data.engine != 0 && ship_list.engine(ship.data.engine).is_none() {
                warn!(ship = ship.id, engine = ship.data.engine, "unknown engine");
            }
        }
        Ok(())
    }

    /// Prediction context over this scenario and a ship list.
    pub fn context<'a>(&'a self, ship_list: &'a ShipList) -> PredictorContext<'a> {
        PredictorContext {
            universe: &self.universe,
            scores: &self.scores,
            ship_list,
            map: &self.map,
            config: &self.config,
            host: &self.host,
            key: &self.key,
        }
    }
}
