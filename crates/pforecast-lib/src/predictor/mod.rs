//! Turn-by-turn prediction of a single ship.
//!
//! A [`ShipPredictor`] copies one ship out of the universe and advances
//! that private copy turn by turn. The universe, ship list and
//! configuration are only ever read.
//!
//! - [`used`] - Flags recording which uncertain inputs a forecast relied on
//! - [`optimum`] - Slowest warp factor that still arrives as early as possible

pub mod optimum;
pub mod used;

pub use optimum::get_optimum_warp;
pub use used::UsedProperties;

use tracing::{debug, trace};

use crate::alchemy::Reaction;
use crate::config::HostConfiguration;
use crate::geometry::{MapConfiguration, Point};
use crate::host::{HostRules, HostVersion, RegistrationKey};
use crate::minefield::check_lay_mission;
use crate::mission::{ExtMission, MISSION_CLOAK, MISSION_NONE, MISSION_TOW};
use crate::movement::{
    cloak_fuel_usage, compute_displacement, compute_fuel_usage, engine_load,
    hyperjump_displacement, max_distance, turn_fuel_usage,
};
use crate::shiplist::{Cost, Hull, HullFunction, ShipList};
use crate::universe::{Cargo, Ship, ShipData, ShipyardAction, UnitScoreDefinitions, Universe};

/// Turns after which [`ShipPredictor::compute_movement`] gives up.
pub const MOVEMENT_TIME_LIMIT: i32 = 30;

/// Fuel burnt by a hyperjump.
pub const HYPERJUMP_FUEL: i32 = 50;

const HYPERJUMP_CODE: &str = "HYP";
const BUILD_TORPEDOES_CODE: &str = "mkt";
const BUILD_FIGHTERS_CODE: &str = "lfm";
const RESET_CODE: &str = "???";
const SUPPLIES_PER_REPAIR: i32 = 5;

/// Read-only game state a prediction runs against.
#[derive(Debug, Clone, Copy)]
pub struct PredictorContext<'a> {
    pub universe: &'a Universe,
    pub scores: &'a UnitScoreDefinitions,
    pub ship_list: &'a ShipList,
    pub map: &'a MapConfiguration,
    pub config: &'a HostConfiguration,
    pub host: &'a HostVersion,
    pub key: &'a RegistrationKey,
}

impl PredictorContext<'_> {
    /// Host-dependent rules for this game.
    pub fn rules(&self) -> HostRules {
        HostRules::resolve(self.host, self.config)
    }
}

/// Forecast of one ship, optionally towing another.
#[derive(Debug, Clone)]
pub struct ShipPredictor<'a> {
    ctx: PredictorContext<'a>,
    ship_id: i32,
    ship: Option<&'a Ship>,
    data: ShipData,
    towee: Option<Box<ShipPredictor<'a>>>,
    movement_fuel_used: i32,
    cloak_fuel_used: i32,
    turns: i32,
    turn_limit: bool,
    used: UsedProperties,
}

impl<'a> ShipPredictor<'a> {
    /// Start a prediction for a ship.
    ///
    /// An unknown ship id yields a predictor whose turns do nothing.
    pub fn new(ctx: PredictorContext<'a>, ship_id: i32) -> Self {
        let ship = ctx.universe.ship(ship_id);
        Self {
            ctx,
            ship_id,
            ship,
            data: ship.map(|s| s.data.clone()).unwrap_or_default(),
            towee: None,
            movement_fuel_used: 0,
            cloak_fuel_used: 0,
            turns: 0,
            turn_limit: false,
            used: UsedProperties::empty(),
        }
    }

    /// Start a prediction for a ship that may tow the ship predicted by `towee`.
    ///
    /// Tow chains must not form a cycle.
    pub fn with_towee(ctx: PredictorContext<'a>, ship_id: i32, towee: ShipPredictor<'a>) -> Self {
        Self {
            towee: Some(Box::new(towee)),
            ..Self::new(ctx, ship_id)
        }
    }

    /// Advance the prediction by one turn.
    pub fn compute_turn(&mut self) {
        let ship_list = self.ctx.ship_list;
        let (Some(ship), Some(hull)) = (self.ship, ship_list.hull(self.data.hull)) else {
            trace!(ship = self.ship_id, "ship or hull unknown, turn skipped");
            self.turns += 1;
            return;
        };
        let rules = self.ctx.rules();

        self.check_training(&rules);
        if self.turns == 0 {
            self.lay_mines(&rules);
        }
        self.build_torpedoes(hull, &rules);
        self.build_fighters(hull, &rules);
        self.run_alchemy(ship, hull, &rules);
        self.check_starbase_fix(hull);
        self.repair_with_supplies();
        self.burn_cloak_fuel(ship, hull, &rules);
        self.limit_speed_for_damage(ship, &rules);
        self.move_ship(ship, &rules);
        self.burn_turn_fuel(hull);

        self.turns += 1;
        trace!(
            ship = self.ship_id,
            turn = self.turns,
            position = %self.data.position,
            waypoint = %self.data.waypoint,
            fuel = self.data.cargo.fuel,
            "turn computed"
        );
    }

    /// Advance until the waypoint is reached, at most [`MOVEMENT_TIME_LIMIT`] turns.
    ///
    /// Fuel is clamped to zero between turns, so a ship running dry keeps
    /// moving; check [`Self::cargo`] for the fuel actually left.
    pub fn compute_movement(&mut self) {
        while !self.is_at_waypoint() && self.turns < MOVEMENT_TIME_LIMIT {
            self.compute_turn();
            if self.data.cargo.fuel < 0 {
                self.data.cargo.fuel = 0;
            }
        }
        self.turn_limit = !self.is_at_waypoint();
        debug!(
            ship = self.ship_id,
            turns = self.turns,
            fuel_used = self.movement_fuel_used,
            turn_limit = self.turn_limit,
            "movement computed"
        );
    }

    pub fn set_position(&mut self, pos: Point) {
        self.data.position = pos;
    }

    /// Set the waypoint as an absolute map position.
    pub fn set_waypoint(&mut self, pos: Point) {
        self.data.waypoint = pos - self.data.position;
    }

    pub fn set_warp_factor(&mut self, warp: i32) {
        self.data.warp = warp;
    }

    pub fn set_mission(&mut self, mission: i32, intercept: i32, tow: i32) {
        self.data.mission = mission;
        self.data.intercept_param = intercept;
        self.data.tow_param = tow;
    }

    pub fn set_friendly_code(&mut self, fcode: &str) {
        self.data.friendly_code = fcode.to_string();
    }

    pub fn set_fuel(&mut self, fuel: i32) {
        self.data.cargo.fuel = fuel;
    }

    pub fn ship_id(&self) -> i32 {
        self.ship_id
    }

    /// Fuel used for movement (including hyperjumps) so far.
    pub fn movement_fuel_used(&self) -> i32 {
        self.movement_fuel_used
    }

    pub fn cloak_fuel_used(&self) -> i32 {
        self.cloak_fuel_used
    }

    pub fn num_turns(&self) -> i32 {
        self.turns
    }

    /// True if [`Self::compute_movement`] stopped before reaching the waypoint.
    pub fn is_at_turn_limit(&self) -> bool {
        self.turn_limit
    }

    pub fn used_properties(&self) -> UsedProperties {
        self.used
    }

    pub fn position(&self) -> Point {
        self.data.position
    }

    /// Absolute waypoint.
    pub fn waypoint(&self) -> Point {
        self.data.position + self.data.waypoint
    }

    pub fn is_at_waypoint(&self) -> bool {
        self.data.waypoint.is_zero()
    }

    pub fn cargo(&self) -> &Cargo {
        &self.data.cargo
    }

    pub fn warp_factor(&self) -> i32 {
        self.data.warp
    }

    pub fn owner(&self) -> i32 {
        self.data.owner
    }

    pub fn friendly_code(&self) -> &str {
        &self.data.friendly_code
    }

    pub fn mission(&self) -> i32 {
        self.data.mission
    }

    /// Current state of the predicted ship.
    pub fn ship_data(&self) -> &ShipData {
        &self.data
    }

    pub fn hull(&self) -> Option<&'a Hull> {
        self.ctx.ship_list.hull(self.data.hull)
    }

    pub fn towee(&self) -> Option<&ShipPredictor<'a>> {
        self.towee.as_deref()
    }

    /// True if the ship is set up to hyperjump: hyperdrive, `HYP` code and
    /// a nonzero warp factor.
    pub fn is_hyperdriving(&self) -> bool {
        self.data.friendly_code == HYPERJUMP_CODE
            && self.data.warp > 0
            && self.has_function(HullFunction::Hyperdrive)
    }

    fn has_function(&self, function: HullFunction) -> bool {
        self.ship.is_some_and(|ship| {
            ship.has_function(function, self.data.hull, self.ctx.scores, self.ctx.ship_list)
        })
    }

    fn race(&self) -> i32 {
        self.ctx.config.race_of(self.data.owner)
    }

    fn is_towing(&self) -> bool {
        self.data.mission == MISSION_TOW
            && self
                .towee
                .as_ref()
                .is_some_and(|t| t.ship_id == self.data.tow_param)
    }

    fn advance_towee(&mut self) {
        if let Some(towee) = self.towee.as_mut() {
            towee.compute_turn();
        }
    }

    fn check_training(&mut self, rules: &HostRules) {
        if rules.extended_missions && ExtMission::Training.matches(self.data.mission, self.ctx.config)
        {
            self.data.warp = 0;
            self.data.primary_enemy = 0;
            self.used.insert(UsedProperties::MISSION);
        }
    }

    fn lay_mines(&mut self, rules: &HostRules) {
        if let Some(result) = check_lay_mission(&self.data, &self.ctx, rules) {
            self.data.cargo.ammo -= result.num_torpedoes;
            if result.mission_used {
                self.used.insert(UsedProperties::MISSION);
            }
            if result.friendly_code_used {
                self.used.insert(UsedProperties::FRIENDLY_CODE);
            }
        }
    }

    /// Whether a build order is given by friendly code or extended mission.
    /// Returns the flag to mark, or `None` without an order.
    fn build_order(&self, code: &str, mission: ExtMission, rules: &HostRules) -> Option<UsedProperties> {
        if rules.extended_missions && mission.matches(self.data.mission, self.ctx.config) {
            Some(UsedProperties::MISSION)
        } else if self.data.friendly_code == code
            && self
                .ctx
                .ship_list
                .friendly_codes()
                .is_accepted_for_ship(code, self.race(), self.ctx.key)
        {
            Some(UsedProperties::FRIENDLY_CODE)
        } else {
            None
        }
    }

    /// Number of units of `cost` the cargo pays for without overflowing the hold.
    fn affordable(&self, cost: &Cost, hull: &Hull) -> i32 {
        let cargo = &self.data.cargo;
        let available = Cost {
            tritanium: cargo.tritanium,
            duranium: cargo.duranium,
            molybdenum: cargo.molybdenum,
            money: cargo.money,
            supplies: cargo.supplies,
        };
        let mut count = cost.max_amount(hull.max_cargo, &available);
        while count > 0 {
            let mut after = *cargo;
            pay(&mut after, &cost.times(count));
            if after.used_space() + count <= hull.max_cargo {
                break;
            }
            count -= 1;
        }
        count
    }

    fn build_torpedoes(&mut self, hull: &Hull, rules: &HostRules) {
        let Some(flag) = self.build_order(BUILD_TORPEDOES_CODE, ExtMission::BuildTorpsFromCargo, rules)
        else {
            return;
        };
        if !self.data.has_launchers() || self.data.cargo.fuel <= 0 {
            return;
        }
        let Some(launcher) = self.ctx.ship_list.launcher(self.data.torpedo_type) else {
            return;
        };
        let count = self.affordable(&launcher.torpedo_cost, hull);
        if count <= 0 {
            return;
        }
        pay(&mut self.data.cargo, &launcher.torpedo_cost.times(count));
        self.data.cargo.ammo += count;
        self.used.insert(flag);
        debug!(ship = self.ship_id, count, "builds torpedoes");
    }

    fn build_fighters(&mut self, hull: &Hull, rules: &HostRules) {
        let Some(flag) = self.build_order(BUILD_FIGHTERS_CODE, ExtMission::BuildFighters, rules)
        else {
            return;
        };
        if !self.data.has_bays() {
            return;
        }
        let cost = self.ctx.config.fighter_cost;
        let count = self.affordable(&cost, hull);
        if count <= 0 {
            return;
        }
        pay(&mut self.data.cargo, &cost.times(count));
        self.data.cargo.ammo += count;
        self.used.insert(flag | UsedProperties::BUILD_FIGHTERS);
        debug!(ship = self.ship_id, count, "builds fighters");
    }

    fn run_alchemy(&mut self, ship: &Ship, hull: &Hull, rules: &HostRules) {
        let has = |function| {
            ship.has_function(function, self.data.hull, self.ctx.scores, self.ctx.ship_list)
        };
        let Some(reaction) = Reaction::select(
            has(HullFunction::MerlinAlchemy),
            has(HullFunction::AriesRefinery),
            has(HullFunction::NeutronicRefinery),
            rules,
        ) else {
            return;
        };
        reaction.apply(
            &self.data.friendly_code,
            &mut self.data.cargo,
            hull,
            rules,
            self.ctx.key,
            &mut self.used,
        );
    }

    fn check_starbase_fix(&mut self, hull: &Hull) {
        let Some(planet) = self.ctx.universe.planet_at(self.data.position) else {
            return;
        };
        let fixes_us = planet.base.is_some_and(|base| {
            base.shipyard_action == ShipyardAction::Fix && base.shipyard_id == self.ship_id
        });
        if fixes_us && planet.owner == self.data.owner {
            self.data.damage = 0;
            self.data.crew = hull.max_crew;
            self.used.insert(UsedProperties::SHIPYARD);
        }
    }

    fn repair_with_supplies(&mut self) {
        let repair = self
            .data
            .damage
            .min(self.data.cargo.supplies / SUPPLIES_PER_REPAIR);
        if repair > 0 {
            self.data.damage -= repair;
            self.data.cargo.supplies -= repair * SUPPLIES_PER_REPAIR;
            self.used.insert(UsedProperties::REPAIR);
        }
    }

    fn burn_cloak_fuel(&mut self, ship: &Ship, hull: &Hull, rules: &HostRules) {
        let config = self.ctx.config;
        let cloaking = self.data.mission == MISSION_CLOAK
            || (rules.extended_missions && ExtMission::Cloak.matches(self.data.mission, config));
        let has = |function| {
            ship.has_function(function, self.data.hull, self.ctx.scores, self.ctx.ship_list)
        };
        let advanced = has(HullFunction::AdvancedCloak);
        let hardened = has(HullFunction::HardenedCloak);
        if !cloaking || !(advanced || hardened || has(HullFunction::Cloak)) {
            return;
        }

        let owner = self.data.owner;
        let needed = cloak_fuel_usage(hull, advanced, config.cloak_fuel_burn.get(owner));
        let too_damaged = self.data.damage >= rules.cloak_damage_limit(owner, config) && !hardened;
        if needed > self.data.cargo.fuel || too_damaged {
            debug!(
                ship = self.ship_id,
                needed,
                fuel = self.data.cargo.fuel,
                damage = self.data.damage,
                "cloak fails"
            );
            self.data.mission = MISSION_NONE;
        } else {
            self.data.cargo.fuel -= needed;
            self.cloak_fuel_used += needed;
            self.used.insert(UsedProperties::CLOAK);
        }
    }

    fn limit_speed_for_damage(&mut self, ship: &Ship, rules: &HostRules) {
        if self.data.damage <= 0
            || ship.has_function(
                HullFunction::HardenedEngines,
                self.data.hull,
                self.ctx.scores,
                self.ctx.ship_list,
            )
        {
            return;
        }
        let limit = rules.damage_speed_limit(self.data.damage, self.race());
        if self.data.warp > limit {
            self.data.warp = limit;
        }
        self.used.insert(UsedProperties::DAMAGE_LIMIT);
    }

    fn move_ship(&mut self, ship: &Ship, rules: &HostRules) {
        if self.is_hyperdriving() {
            let distance2 = self.data.waypoint.squared_distance_to(Point::default());
            if distance2 >= rules.min_hyperjump_distance2
                && self.data.damage < self.ctx.config.damage_level_for_hyperjump_fail
            {
                self.hyperjump(rules);
                return;
            }
            debug!(ship = self.ship_id, distance2, "hyperjump not possible");
        }

        if !self.data.waypoint.is_zero() && self.data.warp > 0 {
            self.move_sublight(ship, rules);
        } else {
            self.advance_towee();
        }
    }

    fn hyperjump(&mut self, rules: &HostRules) {
        self.data.cargo.fuel -= HYPERJUMP_FUEL;
        self.movement_fuel_used += HYPERJUMP_FUEL;
        if self.data.mission == MISSION_TOW {
            self.data.mission = MISSION_NONE;
        }
        self.advance_towee();

        let jump = hyperjump_displacement(self.data.waypoint, rules);
        self.data.position = self.ctx.map.normalize(self.data.position + jump);
        self.data.waypoint = Point::default();
        self.data.warp = 0;
        if rules.hyperjump_resets_fcode {
            self.data.friendly_code = RESET_CODE.to_string();
        }
        debug!(ship = self.ship_id, position = %self.data.position, "hyperjump");
    }

    fn move_sublight(&mut self, ship: &Ship, rules: &HostRules) {
        let ctx = self.ctx;
        let gravitonic = ship.has_function(
            HullFunction::Gravitonic,
            self.data.hull,
            ctx.scores,
            ctx.ship_list,
        );
        let way = max_distance(self.data.warp, gravitonic);
        let movement = compute_displacement(self.data.waypoint, way, rules.movement);

        let towing = self.is_towing();
        self.advance_towee();
        let towee_data = if towing {
            self.towee.as_ref().map(|t| &t.data)
        } else {
            None
        };
        let load = engine_load(&self.data, towee_data, ctx.ship_list, rules);
        let fuel_factor = ctx
            .ship_list
            .engine(self.data.engine)
            .map_or(0, |e| e.fuel_factor(self.data.warp));
        let fuel = compute_fuel_usage(rules, fuel_factor, movement, way, load, self.data.cargo.fuel);
        self.data.cargo.fuel -= fuel;
        self.movement_fuel_used += fuel;

        self.data.waypoint = self.data.waypoint - movement;
        self.data.position = ctx.map.normalize(self.data.position + movement);
        if self.data.warp > 1 && ctx.universe.planet_at(self.data.position).is_none() {
            self.apply_gravity_well();
        }

        if towing {
            let position = self.data.position;
            if let Some(towee) = self.towee.as_mut() {
                towee.data.position = position;
                towee.data.waypoint = Point::default();
            }
            self.used.insert(UsedProperties::TOWEE);
        }
    }

    fn apply_gravity_well(&mut self) {
        let ctx = self.ctx;
        let Some(planet) = ctx
            .universe
            .find_gravity_planet_at(self.data.position, ctx.map, ctx.config)
        else {
            return;
        };
        let target = self.data.position + self.data.waypoint;
        let same_well = ctx
            .universe
            .find_gravity_planet_at(target, ctx.map, ctx.config)
            .is_some_and(|p| p.id == planet.id);
        self.data.position = planet.position;
        self.data.waypoint = if same_well {
            Point::default()
        } else {
            ctx.map.delta(planet.position, target)
        };
        debug!(ship = self.ship_id, planet = planet.id, "captured by gravity well");
    }

    fn burn_turn_fuel(&mut self, hull: &Hull) {
        if self.data.cargo.fuel < 0 {
            return;
        }
        let rate = self
            .ctx
            .config
            .fuel_usage_per_turn_for_100kt
            .get(self.data.owner);
        self.data.cargo.fuel -= turn_fuel_usage(hull.mass, rate, 1);
    }
}

/// Deduct a total cost from cargo; money is spent before supplies.
fn pay(cargo: &mut Cargo, cost: &Cost) {
    cargo.tritanium -= cost.tritanium;
    cargo.duranium -= cost.duranium;
    cargo.molybdenum -= cost.molybdenum;
    let from_money = cost.money.min(cargo.money.max(0));
    cargo.money -= from_money;
    cargo.supplies -= cost.money - from_money + cost.supplies;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pay_spends_money_before_supplies() {
        let mut cargo = Cargo {
            tritanium: 10,
            money: 3,
            supplies: 20,
            ..Cargo::default()
        };
        let cost = Cost {
            tritanium: 2,
            money: 5,
            supplies: 1,
            ..Cost::default()
        };
        pay(&mut cargo, &cost);
        assert_eq!((cargo.tritanium, cargo.money, cargo.supplies), (8, 0, 17));
    }
}
