//! Output formatting for forecasts.
//!
//! Reports are plain serializable structs; the text renderers return
//! strings so callers (and tests) decide where they go.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use pforecast_lib::{Cargo, Point, ShipList, ShipPredictor};
use serde::Serialize;

use crate::terminal::ColorPalette;

/// Report format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Final state of a towed ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToweeReport {
    pub ship_id: i32,
    pub position: Point,
    pub fuel: i32,
}

/// Outcome of a forecast for one ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionReport {
    pub ship_id: i32,
    pub name: String,
    pub hull: Option<String>,
    pub turns: i32,
    pub turn_limit: bool,
    pub position: Point,
    pub waypoint: Point,
    pub at_waypoint: bool,
    pub warp: i32,
    pub mission: i32,
    pub friendly_code: String,
    pub damage: i32,
    pub movement_fuel_used: i32,
    pub cloak_fuel_used: i32,
    pub cargo: Cargo,
    /// Uncertain inputs the forecast relied on.
    pub used: Vec<&'static str>,
    pub towee: Option<ToweeReport>,
}

impl PredictionReport {
    pub fn from_predictor(predictor: &ShipPredictor<'_>, name: &str) -> Self {
        let data = predictor.ship_data();
        Self {
            ship_id: predictor.ship_id(),
            name: name.to_string(),
            hull: predictor.hull().map(|h| h.name.clone()),
            turns: predictor.num_turns(),
            turn_limit: predictor.is_at_turn_limit(),
            position: predictor.position(),
            waypoint: predictor.waypoint(),
            at_waypoint: predictor.is_at_waypoint(),
            warp: predictor.warp_factor(),
            mission: predictor.mission(),
            friendly_code: predictor.friendly_code().to_string(),
            damage: data.damage,
            movement_fuel_used: predictor.movement_fuel_used(),
            cloak_fuel_used: predictor.cloak_fuel_used(),
            cargo: *predictor.cargo(),
            used: predictor.used_properties().names(),
            towee: predictor.towee().map(|t| ToweeReport {
                ship_id: t.ship_id(),
                position: t.position(),
                fuel: t.cargo().fuel,
            }),
        }
    }
}

/// Render a forecast as human-readable text.
pub fn format_prediction(report: &PredictionReport, palette: &ColorPalette) -> String {
    let p = palette;
    let mut out = String::new();
    let hull = report.hull.as_deref().unwrap_or("<unknown hull>");
    let _ = writeln!(
        out,
        "{}Ship {} ({}){}, {}",
        p.white_bold, report.ship_id, report.name, p.reset, hull
    );
    let _ = writeln!(out, "{}  Turns:{}       {}", p.gray, p.reset, report.turns);
    let _ = writeln!(
        out,
        "{}  Position:{}    {}{}{}",
        p.gray, p.reset, p.cyan, report.position, p.reset
    );
    if report.at_waypoint {
        let _ = writeln!(out, "{}  Waypoint:{}    {}reached{}", p.gray, p.reset, p.green, p.reset);
    } else if report.turn_limit {
        let _ = writeln!(
            out,
            "{}  Waypoint:{}    {} {}(not reached within turn limit){}",
            p.gray, p.reset, report.waypoint, p.red, p.reset
        );
    } else {
        let _ = writeln!(out, "{}  Waypoint:{}    {}", p.gray, p.reset, report.waypoint);
    }
    let _ = writeln!(out, "{}  Warp:{}        {}", p.gray, p.reset, report.warp);
    let _ = writeln!(
        out,
        "{}  Mission:{}     {} (fcode {})",
        p.gray, p.reset, report.mission, report.friendly_code
    );
    let _ = writeln!(
        out,
        "{}  Fuel used:{}   {}{} movement, {} cloak{}",
        p.gray, p.reset, p.orange, report.movement_fuel_used, report.cloak_fuel_used, p.reset
    );
    let _ = writeln!(out, "{}  Cargo:{}       {}", p.gray, p.reset, format_cargo(&report.cargo));
    let _ = writeln!(out, "{}  Damage:{}      {}", p.gray, p.reset, report.damage);
    let used = if report.used.is_empty() {
        "nothing uncertain".to_string()
    } else {
        report.used.join(", ")
    };
    let _ = writeln!(out, "{}  Depends on:{}  {}", p.gray, p.reset, used);
    if let Some(towee) = &report.towee {
        let _ = writeln!(
            out,
            "{}  Towee:{}       ship {} at {}, fuel {}",
            p.gray, p.reset, towee.ship_id, towee.position, towee.fuel
        );
    }
    out
}

/// One-line cargo summary, e.g. `N480 T0 D0 M0 S0 $0 C0 A40`.
pub fn format_cargo(cargo: &Cargo) -> String {
    format!(
        "N{} T{} D{} M{} S{} ${} C{} A{}",
        cargo.fuel,
        cargo.tritanium,
        cargo.duranium,
        cargo.molybdenum,
        cargo.supplies,
        cargo.money,
        cargo.colonists,
        cargo.ammo
    )
}

/// Optimum warp result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimumWarpReport {
    pub ship_id: i32,
    pub origin: Point,
    pub target: Point,
    pub warp: i32,
}

pub fn format_optimum_warp(report: &OptimumWarpReport) -> String {
    format!(
        "Optimum warp for ship {} from {} to {}: {}\n",
        report.ship_id, report.origin, report.target, report.warp
    )
}

/// Hull listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HullRow {
    pub id: i32,
    pub name: String,
    pub mass: i32,
    pub max_fuel: i32,
    pub max_cargo: i32,
    pub functions: Vec<&'static str>,
}

pub fn hull_rows(ship_list: &ShipList) -> Vec<HullRow> {
    ship_list
        .hulls()
        .map(|hull| HullRow {
            id: hull.id,
            name: hull.name.clone(),
            mass: hull.mass,
            max_fuel: hull.max_fuel,
            max_cargo: hull.max_cargo,
            functions: hull.functions.iter().map(|f| f.function.name()).collect(),
        })
        .collect()
}

/// Render the hull listing as a table.
pub fn format_hull_table(rows: &[HullRow]) -> String {
    if rows.is_empty() {
        return "No hulls in ship list.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "Available hulls ({}):", rows.len());
    let _ = writeln!(
        out,
        "{:>4} {:<32} {:>6} {:>6} {:>6}  Functions",
        "Id", "Name", "Mass", "Fuel", "Cargo"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>4} {:<32} {:>6} {:>6} {:>6}  {}",
            row.id,
            row.name,
            row.mass,
            row.max_fuel,
            row.max_cargo,
            row.functions.join(", ")
        );
    }
    out
}

/// Write any report to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> PredictionReport {
        PredictionReport {
            ship_id: 1,
            name: "Emerald Dawn".to_string(),
            hull: Some("Emerald Class Battlecruiser".to_string()),
            turns: 3,
            turn_limit: false,
            position: Point::new(2150, 2100),
            waypoint: Point::new(2150, 2100),
            at_waypoint: true,
            warp: 9,
            mission: 0,
            friendly_code: "abc".to_string(),
            damage: 0,
            movement_fuel_used: 120,
            cloak_fuel_used: 0,
            cargo: Cargo {
                fuel: 360,
                ammo: 40,
                ..Cargo::default()
            },
            used: Vec::new(),
            towee: None,
        }
    }

    #[test]
    fn text_report_lists_outcome() {
        let text = format_prediction(&report(), &ColorPalette::plain());
        assert!(text.starts_with("Ship 1 (Emerald Dawn), Emerald Class Battlecruiser\n"));
        assert!(text.contains("Position:    (2150,2100)"));
        assert!(text.contains("Waypoint:    reached"));
        assert!(text.contains("120 movement, 0 cloak"));
        assert!(text.contains("N360 T0 D0 M0 S0 $0 C0 A40"));
        assert!(text.contains("nothing uncertain"));
        assert!(!text.contains("Towee"));
    }

    #[test]
    fn text_report_flags_turn_limit_and_towee() {
        let mut report = report();
        report.at_waypoint = false;
        report.turn_limit = true;
        report.used = vec!["mission", "towee"];
        report.towee = Some(ToweeReport {
            ship_id: 4,
            position: Point::new(2100, 2000),
            fuel: 80,
        });
        let text = format_prediction(&report, &ColorPalette::plain());
        assert!(text.contains("not reached within turn limit"));
        assert!(text.contains("Depends on:  mission, towee"));
        assert!(text.contains("Towee:       ship 4 at (2100,2000), fuel 80"));
    }

    #[test]
    fn report_serializes_points_and_flags() {
        let json = serde_json::to_value(report()).expect("serializable");
        assert_eq!(json["position"]["x"], 2150);
        assert_eq!(json["cargo"]["ammo"], 40);
        assert_eq!(json["used"], serde_json::json!([]));
    }

    #[test]
    fn empty_hull_table() {
        assert_eq!(format_hull_table(&[]), "No hulls in ship list.\n");
    }
}
