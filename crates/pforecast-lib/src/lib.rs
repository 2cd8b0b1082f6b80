//! Ship movement and resource prediction library entry points.
//!
//! This crate forecasts what happens to a starship over future turns under
//! the rules of a legacy or PHost game host: where it ends up, how much fuel
//! it burns, and how missions, friendly codes and hull functions change its
//! cargo. Predictions work on private copies; the game state passed in is
//! never modified. Higher-level consumers (the CLI) should only depend on the
//! items exported here.
//!

#![deny(warnings)]

pub mod alchemy;
pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod minefield;
pub mod mission;
pub mod movement;
pub mod predictor;
pub mod scenario;
pub mod shiplist;
pub mod universe;

pub use config::HostConfiguration;
pub use error::{Error, Result};
pub use geometry::{MapConfiguration, MapMode, Point};
pub use host::{mk_version, HostKind, HostRules, HostVersion, KeyStatus, RegistrationKey};
pub use minefield::{check_lay_mission, check_scoop_mission, MinefieldMission};
pub use predictor::{
    get_optimum_warp, PredictorContext, ShipPredictor, UsedProperties, MOVEMENT_TIME_LIMIT,
};
pub use scenario::Scenario;
pub use shiplist::{HullFunction, ShipList};
pub use universe::{Cargo, Element, Ship, ShipData, Universe};
