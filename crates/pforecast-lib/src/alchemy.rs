//! Alchemy and refinery reactions.
//!
//! Ships with the matching hull function convert cargo at the start of a
//! turn. The reactions are pure functions over the cargo; the predictor
//! picks which one runs, see [`Reaction::select`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::host::{HostRules, RegistrationKey};
use crate::predictor::UsedProperties;
use crate::shiplist::Hull;
use crate::universe::{Cargo, Element};

/// Friendly code that disables all reactions.
pub const NO_ALCHEMY_CODE: &str = "NAL";

/// Supplies per fuel for an Alchemy + Aries ship on combination hosts.
pub const ARIES_DIRECT_RATIO: i32 = 3;
/// Supplies per fuel for an Alchemy + Neutronic ship on combination hosts.
pub const NEUTRONIC_DIRECT_RATIO: i32 = 4;

/// Minerals produced or consumed by a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineralSelection {
    pub tritanium: bool,
    pub duranium: bool,
    pub molybdenum: bool,
}

impl MineralSelection {
    pub const ALL: MineralSelection = MineralSelection {
        tritanium: true,
        duranium: true,
        molybdenum: true,
    };

    fn only(element: Element) -> Self {
        Self {
            tritanium: element == Element::Tritanium,
            duranium: element == Element::Duranium,
            molybdenum: element == Element::Molybdenum,
        }
    }

    fn without(element: Element) -> Self {
        let only = Self::only(element);
        Self {
            tritanium: !only.tritanium,
            duranium: !only.duranium,
            molybdenum: !only.molybdenum,
        }
    }

    /// Selected minerals in host processing order (T, D, M).
    pub fn elements(&self) -> Vec<Element> {
        [
            (self.tritanium, Element::Tritanium),
            (self.duranium, Element::Duranium),
            (self.molybdenum, Element::Molybdenum),
        ]
        .into_iter()
        .filter_map(|(on, element)| on.then_some(element))
        .collect()
    }

    pub fn count(&self) -> i32 {
        self.elements().len() as i32
    }
}

/// Mineral selection requested by a friendly code.
///
/// Returns the selection and whether the friendly code decided it. `alt`,
/// `ald` and `alm` pick one mineral (registered players only on the legacy
/// host); `nat`, `nad` and `nam` exclude one where the host supports it.
/// Anything else selects all three.
pub fn select_minerals(
    fcode: &str,
    rules: &HostRules,
    key: &RegistrationKey,
) -> (MineralSelection, bool) {
    if rules.alchemy_codes_need_registration && !key.is_registered() {
        return (MineralSelection::ALL, false);
    }
    let selection = match fcode {
        "alt" => MineralSelection::only(Element::Tritanium),
        "ald" => MineralSelection::only(Element::Duranium),
        "alm" => MineralSelection::only(Element::Molybdenum),
        "nat" if rules.alchemy_exclusion_codes => MineralSelection::without(Element::Tritanium),
        "nad" if rules.alchemy_exclusion_codes => MineralSelection::without(Element::Duranium),
        "nam" if rules.alchemy_exclusion_codes => {
            MineralSelection::without(Element::Molybdenum)
        }
        _ => return (MineralSelection::ALL, false),
    };
    (selection, true)
}

/// Merlin alchemy: 3 supplies make 1 mineral.
pub fn do_merlin_alchemy(
    fcode: &str,
    cargo: &mut Cargo,
    rules: &HostRules,
    key: &RegistrationKey,
    used: &mut UsedProperties,
) {
    let (selection, decisive) = select_minerals(fcode, rules, key);
    let mut minerals = cargo.supplies.max(0) / 3;
    if rules.alchemy_rounding {
        minerals -= minerals % 3;
    }
    let elements = selection.elements();
    let per_mineral = minerals / elements.len().max(1) as i32;
    if per_mineral <= 0 {
        return;
    }

    for element in &elements {
        cargo.add(*element, per_mineral);
    }
    cargo.supplies -= 3 * per_mineral * elements.len() as i32;
    used.insert(UsedProperties::ALCHEMY);
    if decisive {
        used.insert(UsedProperties::FRIENDLY_CODE);
    }
    debug!(
        minerals = per_mineral * elements.len() as i32,
        supplies_left = cargo.supplies,
        "merlin alchemy"
    );
}

/// Aries refinery: minerals become fuel 1:1, up to the free tank space.
pub fn do_aries_refinery(
    fcode: &str,
    cargo: &mut Cargo,
    hull: &Hull,
    rules: &HostRules,
    key: &RegistrationKey,
    used: &mut UsedProperties,
) {
    let (selection, decisive) = select_minerals(fcode, rules, key);
    let mut room = free_fuel_room(cargo, hull);
    let mut produced = 0;
    for element in selection.elements() {
        let amount = cargo.get(element).max(0).min(room);
        cargo.add(element, -amount);
        room -= amount;
        produced += amount;
    }
    if produced <= 0 {
        return;
    }

    cargo.fuel += produced;
    used.insert(UsedProperties::ALCHEMY);
    if decisive {
        used.insert(UsedProperties::FRIENDLY_CODE);
    }
    debug!(fuel = produced, "aries refinery");
}

/// Neutronic refinery: 1 supply plus 1 mineral make 1 fuel.
pub fn do_neutronic_refinery(cargo: &mut Cargo, hull: &Hull, used: &mut UsedProperties) {
    let minerals = cargo.tritanium.max(0) + cargo.duranium.max(0) + cargo.molybdenum.max(0);
    let produced = free_fuel_room(cargo, hull)
        .min(cargo.supplies.max(0))
        .min(minerals);
    if produced <= 0 {
        return;
    }

    let mut remaining = produced;
    for element in MineralSelection::ALL.elements() {
        let amount = cargo.get(element).max(0).min(remaining);
        cargo.add(element, -amount);
        remaining -= amount;
    }
    cargo.supplies -= produced;
    cargo.fuel += produced;
    used.insert(UsedProperties::ALCHEMY);
    debug!(fuel = produced, "neutronic refinery");
}

/// Direct refinery of hulls combining alchemy with a refinery:
/// `supplies_per_fuel` supplies make 1 fuel.
pub fn do_direct_refinery(
    cargo: &mut Cargo,
    hull: &Hull,
    supplies_per_fuel: i32,
    used: &mut UsedProperties,
) {
    if supplies_per_fuel <= 0 {
        return;
    }
    let produced = free_fuel_room(cargo, hull).min(cargo.supplies.max(0) / supplies_per_fuel);
    if produced <= 0 {
        return;
    }
    cargo.supplies -= produced * supplies_per_fuel;
    cargo.fuel += produced;
    used.insert(UsedProperties::ALCHEMY);
    debug!(fuel = produced, ratio = supplies_per_fuel, "direct refinery");
}

fn free_fuel_room(cargo: &Cargo, hull: &Hull) -> i32 {
    (hull.max_fuel - cargo.fuel).max(0)
}

/// The single reaction a ship performs in a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Merlin,
    Aries,
    Neutronic,
    Direct { supplies_per_fuel: i32 },
}

impl Reaction {
    /// Pick the reaction for a ship's functions.
    ///
    /// Combination hosts merge Alchemy with a refinery into a direct
    /// refinery; other hosts run only the refinery in that case.
    pub fn select(merlin: bool, aries: bool, neutronic: bool, rules: &HostRules) -> Option<Self> {
        if merlin && rules.alchemy_combinations {
            if aries {
                return Some(Reaction::Direct {
                    supplies_per_fuel: ARIES_DIRECT_RATIO,
                });
            }
            if neutronic {
                return Some(Reaction::Direct {
                    supplies_per_fuel: NEUTRONIC_DIRECT_RATIO,
                });
            }
        }
        if neutronic {
            Some(Reaction::Neutronic)
        } else if aries {
            Some(Reaction::Aries)
        } else if merlin {
            Some(Reaction::Merlin)
        } else {
            None
        }
    }

    /// Run this reaction on a ship's cargo.
    ///
    /// The `NAL` friendly code blocks every reaction.
    pub fn apply(
        self,
        fcode: &str,
        cargo: &mut Cargo,
        hull: &Hull,
        rules: &HostRules,
        key: &RegistrationKey,
        used: &mut UsedProperties,
    ) {
        if fcode == NO_ALCHEMY_CODE {
            used.insert(UsedProperties::FRIENDLY_CODE);
            return;
        }
        match self {
            Reaction::Merlin => do_merlin_alchemy(fcode, cargo, rules, key, used),
            Reaction::Aries => do_aries_refinery(fcode, cargo, hull, rules, key, used),
            Reaction::Neutronic => do_neutronic_refinery(cargo, hull, used),
            Reaction::Direct { supplies_per_fuel } => {
                do_direct_refinery(cargo, hull, supplies_per_fuel, used)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostConfiguration;
    use crate::host::{mk_version, HostKind, HostVersion};

    fn rules(kind: HostKind, version: u32) -> HostRules {
        HostRules::resolve(
            &HostVersion::new(kind, version),
            &HostConfiguration::default(),
        )
    }

    fn thost() -> HostRules {
        rules(HostKind::Host, mk_version(3, 22, 20))
    }

    fn phost() -> HostRules {
        rules(HostKind::PHost, mk_version(4, 0, 5))
    }

    fn tanker(max_fuel: i32) -> Hull {
        Hull {
            id: 1,
            name: "Tanker".to_string(),
            mass: 100,
            max_fuel,
            max_cargo: 1000,
            max_crew: 10,
            num_engines: 1,
            max_beams: 0,
            max_launchers: 0,
            num_bays: 0,
            functions: Vec::new(),
        }
    }

    fn supplies(amount: i32) -> Cargo {
        Cargo {
            supplies: amount,
            ..Cargo::default()
        }
    }

    #[test]
    fn single_mineral_codes_need_registration_on_legacy_host() {
        let reg = RegistrationKey::registered();
        let unreg = RegistrationKey::unregistered();
        assert_eq!(
            select_minerals("alt", &thost(), &unreg),
            (MineralSelection::ALL, false)
        );
        let (selection, decisive) = select_minerals("alt", &thost(), &reg);
        assert!(decisive);
        assert_eq!(selection.elements(), vec![Element::Tritanium]);
        let (selection, _) = select_minerals("alm", &phost(), &unreg);
        assert_eq!(selection.elements(), vec![Element::Molybdenum]);
    }

    #[test]
    fn exclusion_codes_depend_on_host() {
        let reg = RegistrationKey::registered();
        let (selection, decisive) = select_minerals("nat", &phost(), &reg);
        assert!(decisive);
        assert_eq!(selection.count(), 2);
        assert!(!selection.tritanium);

        assert_eq!(
            select_minerals("nat", &thost(), &reg),
            (MineralSelection::ALL, false)
        );
        let new_thost = rules(HostKind::Host, mk_version(3, 22, 40));
        assert_eq!(select_minerals("nad", &new_thost, &reg).0.count(), 2);
    }

    #[test]
    fn merlin_splits_minerals_evenly() {
        let mut cargo = Cargo {
            tritanium: 10,
            duranium: 20,
            molybdenum: 30,
            supplies: 900,
            ..Cargo::default()
        };
        let mut used = UsedProperties::empty();
        do_merlin_alchemy("xyz", &mut cargo, &phost(), &RegistrationKey::default(), &mut used);
        assert_eq!(
            (cargo.tritanium, cargo.duranium, cargo.molybdenum),
            (110, 120, 130)
        );
        assert_eq!(cargo.supplies, 0);
        assert_eq!(used, UsedProperties::ALCHEMY);
    }

    #[test]
    fn legacy_merlin_rounds_to_multiple_of_three() {
        let reg = RegistrationKey::registered();
        let mut legacy = supplies(50);
        let mut used = UsedProperties::empty();
        do_merlin_alchemy("alt", &mut legacy, &thost(), &reg, &mut used);
        assert_eq!((legacy.tritanium, legacy.supplies), (15, 5));
        assert!(used.contains(UsedProperties::FRIENDLY_CODE));

        let mut modern = supplies(50);
        do_merlin_alchemy("alt", &mut modern, &phost(), &reg, &mut used);
        assert_eq!((modern.tritanium, modern.supplies), (16, 2));
    }

    #[test]
    fn merlin_exclusion_code_feeds_two_minerals() {
        let mut cargo = supplies(90);
        let mut used = UsedProperties::empty();
        do_merlin_alchemy("nat", &mut cargo, &phost(), &RegistrationKey::default(), &mut used);
        assert_eq!(
            (cargo.tritanium, cargo.duranium, cargo.molybdenum, cargo.supplies),
            (0, 15, 15, 0)
        );
    }

    #[test]
    fn aries_is_bounded_by_tank() {
        let mut cargo = Cargo {
            fuel: 90,
            tritanium: 5,
            duranium: 10,
            molybdenum: 10,
            ..Cargo::default()
        };
        let mut used = UsedProperties::empty();
        do_aries_refinery(
            "abc",
            &mut cargo,
            &tanker(100),
            &phost(),
            &RegistrationKey::default(),
            &mut used,
        );
        assert_eq!(cargo.fuel, 100);
        assert_eq!(
            (cargo.tritanium, cargo.duranium, cargo.molybdenum),
            (0, 5, 10)
        );
        assert!(used.contains(UsedProperties::ALCHEMY));
    }

    #[test]
    fn neutronic_needs_supplies_and_minerals() {
        let mut cargo = Cargo {
            fuel: 0,
            tritanium: 3,
            molybdenum: 20,
            supplies: 10,
            ..Cargo::default()
        };
        let mut used = UsedProperties::empty();
        do_neutronic_refinery(&mut cargo, &tanker(500), &mut used);
        assert_eq!(cargo.fuel, 10);
        assert_eq!((cargo.tritanium, cargo.molybdenum, cargo.supplies), (0, 13, 0));
    }

    #[test]
    fn direct_refinery_uses_only_supplies() {
        let mut cargo = Cargo {
            supplies: 31,
            tritanium: 50,
            ..Cargo::default()
        };
        let mut used = UsedProperties::empty();
        do_direct_refinery(&mut cargo, &tanker(500), ARIES_DIRECT_RATIO, &mut used);
        assert_eq!((cargo.fuel, cargo.supplies, cargo.tritanium), (10, 1, 50));
    }

    #[test]
    fn reaction_priority_depends_on_combination_support() {
        let old_phost = rules(HostKind::PHost, mk_version(3, 2, 5));
        assert_eq!(
            Reaction::select(true, true, false, &phost()),
            Some(Reaction::Direct {
                supplies_per_fuel: ARIES_DIRECT_RATIO
            })
        );
        assert_eq!(
            Reaction::select(true, false, true, &phost()),
            Some(Reaction::Direct {
                supplies_per_fuel: NEUTRONIC_DIRECT_RATIO
            })
        );
        assert_eq!(
            Reaction::select(true, true, false, &old_phost),
            Some(Reaction::Aries)
        );
        assert_eq!(
            Reaction::select(true, false, false, &old_phost),
            Some(Reaction::Merlin)
        );
        assert_eq!(Reaction::select(false, false, false, &phost()), None);
    }

    #[test]
    fn nal_blocks_reactions() {
        let mut cargo = supplies(900);
        let mut used = UsedProperties::empty();
        Reaction::Merlin.apply(
            NO_ALCHEMY_CODE,
            &mut cargo,
            &tanker(100),
            &thost(),
            &RegistrationKey::default(),
            &mut used,
        );
        assert_eq!(cargo, supplies(900));
        assert_eq!(used, UsedProperties::FRIENDLY_CODE);
    }
}
