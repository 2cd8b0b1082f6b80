//! Ship list: hulls, engines, weapons and friendly codes.
//!
//! This module is organized into focused submodules:
//!
//! - [`components`] - Hull, engine, beam and torpedo launcher definitions
//! - [`cost`] - Resource cost vectors and the affordability computation
//! - [`fcode`] - Special friendly code definitions
//! - [`catalog`] - Loading a ship list from a directory of CSV tables
//!
//! # Example
//!
//! ```no_run
//! use pforecast_lib::shiplist::{HullFunction, ShipList};
//!
//! let ship_list = ShipList::from_dir(std::path::Path::new("shiplist")).unwrap();
//! let hull = ship_list.hull(16).unwrap();
//! let can_cloak = hull.has_function(HullFunction::Cloak, 0);
//! ```

pub mod catalog;
pub mod components;
pub mod cost;
pub mod fcode;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub use components::{Beam, Engine, Hull, HullFunction, HullFunctionAssignment, TorpedoLauncher};
pub use cost::Cost;
pub use fcode::{FriendlyCode, FriendlyCodeList};

use crate::error::Result;

/// Collection of component definitions used by a game.
#[derive(Debug, Clone, Default)]
pub struct ShipList {
    hulls: BTreeMap<i32, Hull>,
    engines: BTreeMap<i32, Engine>,
    beams: BTreeMap<i32, Beam>,
    launchers: BTreeMap<i32, TorpedoLauncher>,
    friendly_codes: FriendlyCodeList,
    source: Option<PathBuf>,
}

impl ShipList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a ship list from a directory of CSV tables.
    ///
    /// See [`catalog`] for the expected files and columns.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut list = catalog::load_dir(dir)?;
        list.source = Some(dir.to_path_buf());
        Ok(list)
    }

    pub fn add_hull(&mut self, hull: Hull) {
        self.hulls.insert(hull.id, hull);
    }

    pub fn add_engine(&mut self, engine: Engine) {
        self.engines.insert(engine.id, engine);
    }

    pub fn add_beam(&mut self, beam: Beam) {
        self.beams.insert(beam.id, beam);
    }

    pub fn add_launcher(&mut self, launcher: TorpedoLauncher) {
        self.launchers.insert(launcher.id, launcher);
    }

    pub fn friendly_codes(&self) -> &FriendlyCodeList {
        &self.friendly_codes
    }

    pub fn friendly_codes_mut(&mut self) -> &mut FriendlyCodeList {
        &mut self.friendly_codes
    }

    pub fn hull(&self, id: i32) -> Option<&Hull> {
        self.hulls.get(&id)
    }

    pub fn engine(&self, id: i32) -> Option<&Engine> {
        self.engines.get(&id)
    }

    pub fn beam(&self, id: i32) -> Option<&Beam> {
        self.beams.get(&id)
    }

    pub fn launcher(&self, id: i32) -> Option<&TorpedoLauncher> {
        self.launchers.get(&id)
    }

    /// All hulls ordered by id.
    pub fn hulls(&self) -> impl Iterator<Item = &Hull> {
        self.hulls.values()
    }

    /// Whether a hull provides a function at the given experience level.
    pub fn has_hull_function(&self, hull_id: i32, function: HullFunction, level: i32) -> bool {
        self.hull(hull_id)
            .is_some_and(|hull| hull.has_function(function, level))
    }

    /// Directory this ship list was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
