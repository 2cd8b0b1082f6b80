//! Friendly code definitions.

use serde::{Deserialize, Serialize};

use crate::host::RegistrationKey;

/// A special friendly code known to the ruleset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendlyCode {
    pub code: String,
    /// Valid on ships.
    pub ship: bool,
    /// Valid on planets.
    pub planet: bool,
    /// Valid on starbases.
    pub base: bool,
    /// Only honoured for registered players.
    pub registered_only: bool,
    /// Races allowed to use the code; empty means everybody.
    pub races: Vec<i32>,
    pub description: String,
}

impl FriendlyCode {
    /// Code valid on ships for everybody.
    pub fn for_ships(code: &str, description: &str) -> Self {
        Self {
            code: code.to_string(),
            ship: true,
            planet: false,
            base: false,
            registered_only: false,
            races: Vec::new(),
            description: description.to_string(),
        }
    }

    pub fn allows_race(&self, race: i32) -> bool {
        self.races.is_empty() || self.races.contains(&race)
    }
}

/// All special friendly codes of a ship list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendlyCodeList {
    codes: Vec<FriendlyCode>,
}

impl FriendlyCodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, code: FriendlyCode) {
        self.codes.retain(|c| c.code != code.code);
        self.codes.push(code);
    }

    /// Look up a code (case-sensitive, like the host).
    pub fn get(&self, code: &str) -> Option<&FriendlyCode> {
        self.codes.iter().find(|c| c.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FriendlyCode> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether a ship of the given race, under the given key, may use `code`.
    pub fn is_accepted_for_ship(&self, code: &str, race: i32, key: &RegistrationKey) -> bool {
        self.get(code).is_some_and(|c| {
            c.ship && c.allows_race(race) && (!c.registered_only || key.is_registered())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acceptance_checks_unit_race_and_key() {
        let mut list = FriendlyCodeList::new();
        list.add(FriendlyCode::for_ships("mkt", "Make torpedoes"));
        list.add(FriendlyCode {
            registered_only: true,
            races: vec![7],
            ..FriendlyCode::for_ships("msc", "Mine scoop")
        });
        list.add(FriendlyCode {
            ship: false,
            planet: true,
            ..FriendlyCode::for_ships("nuk", "Attack")
        });

        let unreg = RegistrationKey::unregistered();
        let reg = RegistrationKey::registered();
        assert!(list.is_accepted_for_ship("mkt", 1, &unreg));
        assert!(!list.is_accepted_for_ship("MKT", 1, &unreg));
        assert!(!list.is_accepted_for_ship("msc", 7, &unreg));
        assert!(list.is_accepted_for_ship("msc", 7, &reg));
        assert!(!list.is_accepted_for_ship("msc", 1, &reg));
        assert!(!list.is_accepted_for_ship("nuk", 1, &reg));
        assert!(!list.is_accepted_for_ship("xyz", 1, &reg));
    }
}
