//! Resource cost vectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cost of one unit of something, in minerals, money and supplies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cost {
    pub tritanium: i32,
    pub duranium: i32,
    pub molybdenum: i32,
    pub money: i32,
    pub supplies: i32,
}

impl Cost {
    /// Cost of `count` units.
    pub fn times(&self, count: i32) -> Cost {
        Cost {
            tritanium: self.tritanium * count,
            duranium: self.duranium * count,
            molybdenum: self.molybdenum * count,
            money: self.money * count,
            supplies: self.supplies * count,
        }
    }

    /// Largest number of units, at most `limit`, that `available` can pay for.
    ///
    /// Money shortfalls are covered by supplies at 1:1, so money and supplies
    /// form a single pool; supplies demanded as such must still be present.
    pub fn max_amount(&self, limit: i32, available: &Cost) -> i32 {
        let mut result = limit.max(0);
        for (need, have) in [
            (self.tritanium, available.tritanium),
            (self.duranium, available.duranium),
            (self.molybdenum, available.molybdenum),
            (self.supplies, available.supplies),
        ] {
            if need > 0 {
                result = result.min(have.max(0) / need);
            }
        }
        let pool_need = self.money + self.supplies;
        if pool_need > 0 {
            let pool = available.money.max(0) + available.supplies.max(0);
            result = result.min(pool / pool_need);
        }
        result
    }

    pub fn is_zero(&self) -> bool {
        *self == Cost::default()
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            ('T', self.tritanium),
            ('D', self.duranium),
            ('M', self.molybdenum),
            ('$', self.money),
            ('S', self.supplies),
        ];
        let text = parts
            .iter()
            .filter(|(_, amount)| *amount != 0)
            .map(|(tag, amount)| format!("{tag}{amount}"))
            .collect::<Vec<_>>()
            .join(" ");
        f.write_str(&text)
    }
}

impl FromStr for Cost {
    type Err = Error;

    /// Parse `T1 D1 M1 $5 S0`; tags are case-insensitive, missing tags are 0.
    fn from_str(s: &str) -> Result<Self> {
        let mut cost = Cost::default();
        for token in s.split_whitespace() {
            let mut chars = token.chars();
            let tag = chars.next().map(|c| c.to_ascii_uppercase());
            let amount = chars
                .as_str()
                .parse::<i32>()
                .map_err(|_| Error::InvalidCost {
                    text: s.to_string(),
                })?;
            let slot = match tag {
                Some('T') => &mut cost.tritanium,
                Some('D') => &mut cost.duranium,
                Some('M') => &mut cost.molybdenum,
                Some('$') => &mut cost.money,
                Some('S') => &mut cost.supplies,
                _ => {
                    return Err(Error::InvalidCost {
                        text: s.to_string(),
                    })
                }
            };
            *slot = amount;
        }
        Ok(cost)
    }
}

impl TryFrom<String> for Cost {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Cost> for String {
    fn from(value: Cost) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available(t: i32, d: i32, m: i32, money: i32, sup: i32) -> Cost {
        Cost {
            tritanium: t,
            duranium: d,
            molybdenum: m,
            money,
            supplies: sup,
        }
    }

    #[test]
    fn parses_and_formats() {
        let cost: Cost = "T1 d2 M3 $40".parse().expect("valid cost");
        assert_eq!(cost, available(1, 2, 3, 40, 0));
        assert_eq!(cost.to_string(), "T1 D2 M3 $40");
        assert_eq!("".parse::<Cost>().expect("empty cost"), Cost::default());
        assert!("X5".parse::<Cost>().is_err());
        assert!("T".parse::<Cost>().is_err());
    }

    #[test]
    fn minerals_bound_the_amount() {
        let torpedo: Cost = "T1 D1 M1 $5".parse().unwrap();
        assert_eq!(torpedo.max_amount(1000, &available(10, 4, 30, 500, 0)), 4);
    }

    #[test]
    fn supplies_cover_missing_money() {
        let torpedo: Cost = "T1 D1 M1 $5".parse().unwrap();
        // 20 money + 30 supplies pay for 10 torpedoes
        assert_eq!(torpedo.max_amount(1000, &available(50, 50, 50, 20, 30)), 10);
    }

    #[test]
    fn explicit_supply_cost_is_not_paid_with_money() {
        let fighter: Cost = "T3 M2 S5".parse().unwrap();
        assert_eq!(fighter.max_amount(1000, &available(30, 0, 20, 1000, 12)), 2);
    }

    #[test]
    fn limit_caps_result() {
        let cheap: Cost = "$1".parse().unwrap();
        assert_eq!(cheap.max_amount(7, &available(0, 0, 0, 100, 0)), 7);
        assert_eq!(cheap.max_amount(-3, &available(0, 0, 0, 100, 0)), 0);
    }
}
