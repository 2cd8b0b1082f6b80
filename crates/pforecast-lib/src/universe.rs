//! Read-only game universe: ships, planets, starbases and minefields.
//!
//! The predictor never mutates these objects; it copies a ship's
//! [`ShipData`] into a private snapshot and works on that.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::HostConfiguration;
use crate::geometry::{MapConfiguration, Point};
use crate::shiplist::{HullFunction, HullFunctionAssignment, ShipList};

/// Unit score id holding a ship's experience level.
pub const SCORE_ID_EXP_LEVEL: i32 = 1;

/// Cargo element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fuel,
    Tritanium,
    Duranium,
    Molybdenum,
    Supplies,
    Money,
    Colonists,
    /// Torpedoes or fighters, depending on the ship's weapons.
    Ammo,
}

impl Element {
    pub const ALL: [Element; 8] = [
        Element::Fuel,
        Element::Tritanium,
        Element::Duranium,
        Element::Molybdenum,
        Element::Supplies,
        Element::Money,
        Element::Colonists,
        Element::Ammo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Element::Fuel => "fuel",
            Element::Tritanium => "tritanium",
            Element::Duranium => "duranium",
            Element::Molybdenum => "molybdenum",
            Element::Supplies => "supplies",
            Element::Money => "money",
            Element::Colonists => "colonists",
            Element::Ammo => "ammo",
        }
    }
}

/// Cargo and fuel aboard a ship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cargo {
    pub fuel: i32,
    pub tritanium: i32,
    pub duranium: i32,
    pub molybdenum: i32,
    pub supplies: i32,
    pub money: i32,
    pub colonists: i32,
    pub ammo: i32,
}

impl Cargo {
    pub fn get(&self, element: Element) -> i32 {
        match element {
            Element::Fuel => self.fuel,
            Element::Tritanium => self.tritanium,
            Element::Duranium => self.duranium,
            Element::Molybdenum => self.molybdenum,
            Element::Supplies => self.supplies,
            Element::Money => self.money,
            Element::Colonists => self.colonists,
            Element::Ammo => self.ammo,
        }
    }

    pub fn get_mut(&mut self, element: Element) -> &mut i32 {
        match element {
            Element::Fuel => &mut self.fuel,
            Element::Tritanium => &mut self.tritanium,
            Element::Duranium => &mut self.duranium,
            Element::Molybdenum => &mut self.molybdenum,
            Element::Supplies => &mut self.supplies,
            Element::Money => &mut self.money,
            Element::Colonists => &mut self.colonists,
            Element::Ammo => &mut self.ammo,
        }
    }

    pub fn set(&mut self, element: Element, amount: i32) {
        *self.get_mut(element) = amount;
    }

    pub fn add(&mut self, element: Element, amount: i32) {
        *self.get_mut(element) += amount;
    }

    /// Cargo room taken: minerals, supplies, colonists and ammo. Fuel and
    /// money have their own storage.
    pub fn used_space(&self) -> i32 {
        self.tritanium + self.duranium + self.molybdenum + self.supplies + self.colonists + self.ammo
    }

    /// Total mass in kt; money is weightless.
    pub fn mass(&self) -> i32 {
        self.used_space() + self.fuel
    }
}

/// The predictable state of one ship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipData {
    pub owner: i32,
    pub position: Point,
    /// Waypoint relative to `position`.
    pub waypoint: Point,
    pub warp: i32,
    pub mission: i32,
    pub intercept_param: i32,
    pub tow_param: i32,
    pub primary_enemy: i32,
    pub friendly_code: String,
    pub hull: i32,
    pub engine: i32,
    pub beam_type: i32,
    pub num_beams: i32,
    pub torpedo_type: i32,
    pub num_launchers: i32,
    pub num_bays: i32,
    pub cargo: Cargo,
    pub crew: i32,
    pub damage: i32,
}

impl ShipData {
    /// True if the ship carries torpedo launchers.
    pub fn has_launchers(&self) -> bool {
        self.torpedo_type > 0 && self.num_launchers > 0
    }

    pub fn has_bays(&self) -> bool {
        self.num_bays > 0
    }
}

/// A ship as seen in the universe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub data: ShipData,
    /// Unit score values keyed by index into [`UnitScoreDefinitions`].
    #[serde(default)]
    pub unit_scores: BTreeMap<usize, i32>,
    /// Hull functions granted to this ship individually.
    #[serde(default)]
    pub functions: Vec<HullFunctionAssignment>,
}

impl Ship {
    /// Experience level, if the game tracks one.
    pub fn experience_level(&self, scores: &UnitScoreDefinitions) -> Option<i32> {
        scores
            .lookup(SCORE_ID_EXP_LEVEL)
            .and_then(|index| self.unit_scores.get(&index))
            .copied()
    }

    /// Whether this ship has a function, from its hull or individually.
    ///
    /// `hull` is passed separately so a predictor can ask about an
    /// overridden hull type.
    pub fn has_function(
        &self,
        function: HullFunction,
        hull: i32,
        scores: &UnitScoreDefinitions,
        ship_list: &ShipList,
    ) -> bool {
        let level = self.experience_level(scores).unwrap_or(0);
        ship_list.has_hull_function(hull, function, level)
            || self.functions.iter().any(|f| f.applies(function, level))
    }
}

/// Definition of one unit score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitScoreDefinition {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub limit: i32,
}

/// Unit score definitions of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitScoreDefinitions(Vec<UnitScoreDefinition>);

impl UnitScoreDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition and return its index.
    pub fn add(&mut self, definition: UnitScoreDefinition) -> usize {
        self.0.push(definition);
        self.0.len() - 1
    }

    /// Index of the definition with the given score id.
    pub fn lookup(&self, id: i32) -> Option<usize> {
        self.0.iter().position(|d| d.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&UnitScoreDefinition> {
        self.0.get(index)
    }
}

/// Starbase shipyard order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipyardAction {
    #[default]
    None,
    Fix,
    Recycle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Starbase {
    pub shipyard_action: ShipyardAction,
    pub shipyard_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub id: i32,
    #[serde(default)]
    pub name: String,
    pub position: Point,
    #[serde(default)]
    pub owner: i32,
    #[serde(default)]
    pub base: Option<Starbase>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minefield {
    pub id: i32,
    pub owner: i32,
    pub position: Point,
    pub units: i32,
    #[serde(default)]
    pub is_web: bool,
}

impl Minefield {
    /// Radius in light-years.
    pub fn radius(&self) -> i32 {
        (f64::from(self.units.max(0))).sqrt() as i32
    }

    pub fn contains(&self, pt: Point) -> bool {
        let r = i64::from(self.radius());
        self.position.squared_distance_to(pt) <= r * r
    }
}

/// Game universe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UniverseSpec", into = "UniverseSpec")]
pub struct Universe {
    ships: BTreeMap<i32, Ship>,
    planets: BTreeMap<i32, Planet>,
    minefields: BTreeMap<i32, Minefield>,
}

/// Serialized form of [`Universe`]: plain lists.
#[derive(Serialize, Deserialize)]
struct UniverseSpec {
    #[serde(default)]
    ships: Vec<Ship>,
    #[serde(default)]
    planets: Vec<Planet>,
    #[serde(default)]
    minefields: Vec<Minefield>,
}

impl From<UniverseSpec> for Universe {
    fn from(spec: UniverseSpec) -> Self {
        let mut univ = Universe::new();
        spec.ships.into_iter().for_each(|s| univ.add_ship(s));
        spec.planets.into_iter().for_each(|p| univ.add_planet(p));
        spec.minefields.into_iter().for_each(|m| univ.add_minefield(m));
        univ
    }
}

impl From<Universe> for UniverseSpec {
    fn from(univ: Universe) -> Self {
        Self {
            ships: univ.ships.into_values().collect(),
            planets: univ.planets.into_values().collect(),
            minefields: univ.minefields.into_values().collect(),
        }
    }
}

impl Universe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_ship(&mut self, ship: Ship) {
        self.ships.insert(ship.id, ship);
    }

    pub fn add_planet(&mut self, planet: Planet) {
        self.planets.insert(planet.id, planet);
    }

    pub fn add_minefield(&mut self, field: Minefield) {
        self.minefields.insert(field.id, field);
    }

    pub fn ship(&self, id: i32) -> Option<&Ship> {
        self.ships.get(&id)
    }

    pub fn ship_mut(&mut self, id: i32) -> Option<&mut Ship> {
        self.ships.get_mut(&id)
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values()
    }

    pub fn planet(&self, id: i32) -> Option<&Planet> {
        self.planets.get(&id)
    }

    pub fn planets(&self) -> impl Iterator<Item = &Planet> {
        self.planets.values()
    }

    /// Minefields ordered by id.
    pub fn minefields(&self) -> impl Iterator<Item = &Minefield> {
        self.minefields.values()
    }

    pub fn minefield(&self, id: i32) -> Option<&Minefield> {
        self.minefields.get(&id)
    }

    /// Planet located exactly at a point.
    pub fn planet_at(&self, pt: Point) -> Option<&Planet> {
        self.planets.values().find(|p| p.position == pt)
    }

    /// Planet whose gravity well captures a ship at `pt`.
    ///
    /// A planet exactly at `pt` wins; otherwise the closest planet within
    /// range (lowest id on ties). Returns `None` when gravity wells are
    /// disabled and no planet is exactly at `pt`.
    pub fn find_gravity_planet_at(
        &self,
        pt: Point,
        map: &MapConfiguration,
        config: &HostConfiguration,
    ) -> Option<&Planet> {
        let pt = map.normalize(pt);
        if let Some(planet) = self.planet_at(pt) {
            return Some(planet);
        }
        if !config.allow_gravity_wells {
            return None;
        }
        let range = i64::from(config.gravity_well_range);
        self.planets
            .values()
            .filter(|p| {
                let d = map.delta(pt, p.position);
                let (dx, dy) = (i64::from(d.x), i64::from(d.y));
                if config.round_gravity_wells {
                    dx * dx + dy * dy <= range * range
                } else {
                    dx.abs() <= range && dy.abs() <= range
                }
            })
            .min_by_key(|p| {
                let d = map.delta(pt, p.position);
                (d.squared_distance_to(Point::default()), p.id)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(id: i32, x: i32, y: i32) -> Planet {
        Planet {
            id,
            position: Point::new(x, y),
            ..Planet::default()
        }
    }

    #[test]
    fn gravity_well_prefers_closest_planet() {
        let mut univ = Universe::new();
        univ.add_planet(planet(1, 1000, 1000));
        univ.add_planet(planet(2, 1005, 1000));
        let map = MapConfiguration::default();
        let config = HostConfiguration::default();

        let found = univ.find_gravity_planet_at(Point::new(1003, 1000), &map, &config);
        assert_eq!(found.map(|p| p.id), Some(2));
        let found = univ.find_gravity_planet_at(Point::new(1002, 1003), &map, &config);
        assert_eq!(found.map(|p| p.id), Some(1));
        assert!(univ
            .find_gravity_planet_at(Point::new(1010, 1010), &map, &config)
            .is_none());
    }

    #[test]
    fn round_gravity_wells_exclude_corners() {
        let mut univ = Universe::new();
        univ.add_planet(planet(1, 1000, 1000));
        let map = MapConfiguration::default();
        let mut config = HostConfiguration::default();
        let corner = Point::new(1003, 1003);

        assert!(univ.find_gravity_planet_at(corner, &map, &config).is_some());
        config.round_gravity_wells = true;
        assert!(univ.find_gravity_planet_at(corner, &map, &config).is_none());
        config.allow_gravity_wells = false;
        assert!(univ
            .find_gravity_planet_at(Point::new(1000, 1000), &map, &config)
            .is_some());
    }

    #[test]
    fn minefield_radius_is_truncated_square_root() {
        let field = Minefield {
            id: 1,
            owner: 1,
            position: Point::new(2000, 2000),
            units: 120,
            is_web: false,
        };
        assert_eq!(field.radius(), 10);
        assert!(field.contains(Point::new(2010, 2000)));
        assert!(!field.contains(Point::new(2008, 2007)));
    }

    #[test]
    fn universe_deserializes_from_lists() {
        let json = r#"{
            "ships": [{ "id": 3, "owner": 4, "hull": 2, "cargo": { "fuel": 50 } }],
            "planets": [{ "id": 9, "position": { "x": 1, "y": 2 } }]
        }"#;
        let univ: Universe = serde_json::from_str(json).expect("valid universe");
        let ship = univ.ship(3).expect("ship present");
        assert_eq!(ship.data.owner, 4);
        assert_eq!(ship.data.cargo.fuel, 50);
        assert_eq!(univ.planet_at(Point::new(1, 2)).map(|p| p.id), Some(9));
        assert_eq!(univ.minefields().count(), 0);
    }
}
