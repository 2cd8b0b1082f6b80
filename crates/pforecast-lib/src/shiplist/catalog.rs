//! Ship list loading from CSV tables.
//!
//! A ship list directory contains:
//!
//! - `hulls.csv` - `id, name, mass, fuel, cargo, crew, engines, beams, launchers, bays, functions`
//! - `engines.csv` - `id, name, warp1..warp9, max_efficient_warp` (last column optional)
//! - `beams.csv` - `id, name, mass` (optional file)
//! - `torpedoes.csv` - `id, name, launcher_mass, torpedo_cost` (optional file)
//! - `fcodes.csv` - `code, units, registered, races, description` (optional file)
//!
//! Header names are matched case-insensitively against a list of synonyms.
//! Hull functions are `;`-separated, each optionally suffixed with
//! `:level` for experience-dependent grants.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};

use crate::error::{Error, Result};

use super::components::{Beam, Engine, Hull, HullFunctionAssignment, TorpedoLauncher};
use super::cost::Cost;
use super::fcode::{FriendlyCode, FriendlyCodeList};
use super::ShipList;

type Synonyms<'a> = &'a [(&'a str, &'a [&'a str])];

/// Load every table from a ship list directory.
pub fn load_dir(dir: &Path) -> Result<ShipList> {
    let mut list = ShipList::new();

    for hull in load_hulls(open_table(dir, "hulls.csv")?)? {
        list.add_hull(hull);
    }
    for engine in load_engines(open_table(dir, "engines.csv")?)? {
        list.add_engine(engine);
    }
    if let Some(file) = open_optional_table(dir, "beams.csv")? {
        for beam in load_beams(file)? {
            list.add_beam(beam);
        }
    }
    if let Some(file) = open_optional_table(dir, "torpedoes.csv")? {
        for launcher in load_launchers(file)? {
            list.add_launcher(launcher);
        }
    }
    if let Some(file) = open_optional_table(dir, "fcodes.csv")? {
        *list.friendly_codes_mut() = load_friendly_codes(file)?;
    }

    info!(
        path = %dir.display(),
        hulls = list.hulls().count(),
        friendly_codes = list.friendly_codes().len(),
        "loaded ship list"
    );
    Ok(list)
}

fn open_table(dir: &Path, name: &str) -> Result<fs::File> {
    let path = dir.join(name);
    if !path.exists() {
        return Err(Error::ShipListTableMissing { path });
    }
    Ok(fs::File::open(path)?)
}

fn open_optional_table(dir: &Path, name: &str) -> Result<Option<fs::File>> {
    let path = dir.join(name);
    if !path.exists() {
        warn!(path = %path.display(), "optional ship list table missing");
        return Ok(None);
    }
    Ok(Some(fs::File::open(path)?))
}

/// Load hull definitions.
pub fn load_hulls<R: Read>(reader: R) -> Result<Vec<Hull>> {
    let synonyms: Synonyms = &[
        ("id", &["id", "hull_id", "hullid"]),
        ("name", &["name", "hull_name", "hull"]),
        ("mass", &["mass", "hull_mass", "mass_kt"]),
        ("fuel", &["fuel", "max_fuel", "fuel_capacity"]),
        ("cargo", &["cargo", "max_cargo", "cargo_capacity"]),
        ("crew", &["crew", "max_crew"]),
        ("engines", &["engines", "num_engines"]),
        ("beams", &["beams", "max_beams"]),
        ("launchers", &["launchers", "max_launchers", "torpedo_launchers"]),
        ("bays", &["bays", "num_bays", "fighter_bays"]),
        ("functions", &["functions", "hull_functions", "specials"]),
    ];
    let required = [
        "id", "name", "mass", "fuel", "cargo", "crew", "engines", "beams", "launchers",
    ];
    let table = Table::read(reader, "hulls.csv", synonyms, &required)?;

    let mut hulls = BTreeMap::new();
    for row in table.rows() {
        let id = row.int("id")?;
        let functions = row
            .text("functions")
            .split(';')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::parse::<HullFunctionAssignment>)
            .collect::<Result<Vec<_>>>()?;
        let hull = Hull {
            id,
            name: row.text("name"),
            mass: row.int("mass")?,
            max_fuel: row.int("fuel")?,
            max_cargo: row.int("cargo")?,
            max_crew: row.int("crew")?,
            num_engines: row.int("engines")?,
            max_beams: row.int("beams")?,
            max_launchers: row.int("launchers")?,
            num_bays: row.int_or("bays", 0)?,
            functions,
        };
        if hulls.insert(id, hull).is_some() {
            return Err(duplicate("hulls.csv", id));
        }
    }
    Ok(hulls.into_values().collect())
}

/// Load engine definitions.
pub fn load_engines<R: Read>(reader: R) -> Result<Vec<Engine>> {
    let synonyms: Synonyms = &[
        ("id", &["id", "engine_id"]),
        ("name", &["name", "engine_name", "engine"]),
        ("warp1", &["warp1", "ff1", "fuel_factor_1"]),
        ("warp2", &["warp2", "ff2", "fuel_factor_2"]),
        ("warp3", &["warp3", "ff3", "fuel_factor_3"]),
        ("warp4", &["warp4", "ff4", "fuel_factor_4"]),
        ("warp5", &["warp5", "ff5", "fuel_factor_5"]),
        ("warp6", &["warp6", "ff6", "fuel_factor_6"]),
        ("warp7", &["warp7", "ff7", "fuel_factor_7"]),
        ("warp8", &["warp8", "ff8", "fuel_factor_8"]),
        ("warp9", &["warp9", "ff9", "fuel_factor_9"]),
        ("max_efficient_warp", &["max_efficient_warp", "max_eff_warp"]),
    ];
    const WARPS: [&str; 9] = [
        "warp1", "warp2", "warp3", "warp4", "warp5", "warp6", "warp7", "warp8", "warp9",
    ];
    let mut required = vec!["id", "name"];
    required.extend_from_slice(&WARPS);
    let table = Table::read(reader, "engines.csv", synonyms, &required)?;

    let mut engines = BTreeMap::new();
    for row in table.rows() {
        let id = row.int("id")?;
        let mut fuel_factors = [0; 9];
        for (slot, column) in fuel_factors.iter_mut().zip(WARPS) {
            *slot = row.int(column)?;
        }
        let max_efficient_warp = match row.text("max_efficient_warp") {
            text if text.is_empty() => None,
            _ => Some(row.int("max_efficient_warp")?),
        };
        let engine = Engine {
            id,
            name: row.text("name"),
            fuel_factors,
            max_efficient_warp,
        };
        if engines.insert(id, engine).is_some() {
            return Err(duplicate("engines.csv", id));
        }
    }
    Ok(engines.into_values().collect())
}

/// Load beam weapon definitions.
pub fn load_beams<R: Read>(reader: R) -> Result<Vec<Beam>> {
    let synonyms: Synonyms = &[
        ("id", &["id", "beam_id"]),
        ("name", &["name", "beam_name", "beam"]),
        ("mass", &["mass", "beam_mass"]),
    ];
    let table = Table::read(reader, "beams.csv", synonyms, &["id", "name", "mass"])?;

    let mut beams = BTreeMap::new();
    for row in table.rows() {
        let id = row.int("id")?;
        let beam = Beam {
            id,
            name: row.text("name"),
            mass: row.int("mass")?,
        };
        if beams.insert(id, beam).is_some() {
            return Err(duplicate("beams.csv", id));
        }
    }
    Ok(beams.into_values().collect())
}

/// Load torpedo launcher definitions.
pub fn load_launchers<R: Read>(reader: R) -> Result<Vec<TorpedoLauncher>> {
    let synonyms: Synonyms = &[
        ("id", &["id", "torpedo_id", "launcher_id"]),
        ("name", &["name", "torpedo_name", "launcher"]),
        ("launcher_mass", &["launcher_mass", "mass", "tube_mass"]),
        ("torpedo_cost", &["torpedo_cost", "torp_cost", "cost"]),
    ];
    let required = ["id", "name", "launcher_mass", "torpedo_cost"];
    let table = Table::read(reader, "torpedoes.csv", synonyms, &required)?;

    let mut launchers = BTreeMap::new();
    for row in table.rows() {
        let id = row.int("id")?;
        let launcher = TorpedoLauncher {
            id,
            name: row.text("name"),
            launcher_mass: row.int("launcher_mass")?,
            torpedo_cost: row.text("torpedo_cost").parse::<Cost>()?,
        };
        if launchers.insert(id, launcher).is_some() {
            return Err(duplicate("torpedoes.csv", id));
        }
    }
    Ok(launchers.into_values().collect())
}

/// Load special friendly code definitions.
pub fn load_friendly_codes<R: Read>(reader: R) -> Result<FriendlyCodeList> {
    let synonyms: Synonyms = &[
        ("code", &["code", "fcode", "friendly_code"]),
        ("units", &["units", "applies_to", "flags"]),
        ("registered", &["registered", "registered_only"]),
        ("races", &["races", "race"]),
        ("description", &["description", "desc", "info"]),
    ];
    let table = Table::read(reader, "fcodes.csv", synonyms, &["code", "units"])?;

    let mut list = FriendlyCodeList::new();
    for row in table.rows() {
        let code = row.text("code");
        if code.is_empty() || code.len() > 3 {
            return Err(Error::ShipListValidation {
                message: format!("invalid friendly code '{code}' in fcodes.csv at row {}", row.line),
            });
        }
        let units = row.text("units").to_ascii_lowercase();
        let races = row
            .text("races")
            .split(';')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(|r| {
                r.parse::<i32>().map_err(|e| Error::ShipListValidation {
                    message: format!("invalid race '{r}' for code '{code}': {e}"),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        list.add(FriendlyCode {
            ship: units.contains('s'),
            planet: units.contains('p'),
            base: units.contains('b'),
            registered_only: parse_flag(&row.text("registered")),
            races,
            description: row.text("description"),
            code,
        });
    }
    Ok(list)
}

fn parse_flag(text: &str) -> bool {
    matches!(
        text.to_ascii_lowercase().as_str(),
        "1" | "y" | "yes" | "true" | "r"
    )
}

fn duplicate(table: &str, id: i32) -> Error {
    Error::ShipListValidation {
        message: format!("duplicate id {id} in {table}"),
    }
}

/// Normalize header strings for robust matching.
fn normalize(s: &str) -> String {
    s.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// A parsed CSV table with canonical column names resolved to indexes.
struct Table {
    name: String,
    index_map: BTreeMap<String, usize>,
    records: Vec<(u64, StringRecord)>,
}

impl Table {
    fn read<R: Read>(
        reader: R,
        name: &str,
        synonyms: Synonyms,
        required: &[&str],
    ) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::ShipListValidation {
                message: format!("failed to read {name} headers: {err}"),
            })?
            .clone();
        let normalized_headers: Vec<String> = headers.iter().map(normalize).collect();

        let mut index_map = BTreeMap::new();
        for (canon, alts) in synonyms {
            let found = alts.iter().find_map(|alt| {
                let alt_n = normalize(alt);
                normalized_headers.iter().position(|h| *h == alt_n)
            });
            if let Some(index) = found {
                index_map.insert(canon.to_string(), index);
            }
        }

        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|c| !index_map.contains_key(*c))
            .collect();
        if !missing.is_empty() {
            return Err(Error::ShipListValidation {
                message: format!(
                    "{name} missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut records = Vec::new();
        // header is line 1
        let mut line: u64 = 1;
        for result in csv_reader.records() {
            line += 1;
            let record = result.map_err(|e| Error::ShipListValidation {
                message: format!("{name}: {e}"),
            })?;
            records.push((line, record));
        }

        Ok(Self {
            name: name.to_string(),
            index_map,
            records,
        })
    }

    fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.records.iter().map(move |(line, record)| Row {
            table: self,
            line: *line,
            record,
        })
    }
}

struct Row<'a> {
    table: &'a Table,
    line: u64,
    record: &'a StringRecord,
}

impl Row<'_> {
    /// Field text, empty if the column is absent.
    fn text(&self, field: &str) -> String {
        self.table
            .index_map
            .get(field)
            .and_then(|&i| self.record.get(i))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    fn int(&self, field: &str) -> Result<i32> {
        let text = self.text(field);
        if text.is_empty() {
            return Err(Error::ShipListValidation {
                message: format!("missing {field} in {} at row {}", self.table.name, self.line),
            });
        }
        text.parse::<i32>().map_err(|e| Error::ShipListValidation {
            message: format!(
                "invalid {field} in {} at row {}: {e}",
                self.table.name, self.line
            ),
        })
    }

    fn int_or(&self, field: &str, default: i32) -> Result<i32> {
        if self.text(field).is_empty() {
            Ok(default)
        } else {
            self.int(field)
        }
    }
}
