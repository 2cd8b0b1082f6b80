use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pforecast_cli::output::{
    format_hull_table, format_optimum_warp, format_prediction, hull_rows, render_json,
    OptimumWarpReport, OutputFormat, PredictionReport,
};
use pforecast_cli::terminal::ColorPalette;
use pforecast_lib::mission::MISSION_TOW;
use pforecast_lib::{get_optimum_warp, Point, Scenario, ShipList, ShipPredictor};

#[derive(Parser, Debug)]
#[command(author, version, about = "What-if forecasts of ship movement and cargo")]
struct Cli {
    /// Ship list directory (hulls.csv, engines.csv, ...).
    #[arg(long, global = true, env = "PFORECAST_SHIPLIST")]
    shiplist: Option<PathBuf>,

    /// Scenario JSON file.
    #[arg(long, global = true, env = "PFORECAST_SCENARIO")]
    scenario: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Forecast one ship, optionally with modified orders.
    Predict(PredictArgs),
    /// Slowest warp factor that arrives as early as possible.
    OptimumWarp {
        /// Ship id.
        #[arg(long)]
        ship: i32,
        /// Target position as X,Y.
        #[arg(long, allow_hyphen_values = true)]
        to: Point,
    },
    /// List the hulls of the ship list.
    Hulls,
}

#[derive(Args, Debug)]
struct PredictArgs {
    /// Ship id.
    #[arg(long)]
    ship: i32,
    /// Compute exactly this many turns instead of moving to the waypoint.
    #[arg(long)]
    turns: Option<u32>,
    /// Warp factor override.
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..=9))]
    warp: Option<i32>,
    /// Waypoint override as absolute X,Y.
    #[arg(long, allow_hyphen_values = true)]
    waypoint: Option<Point>,
    /// Friendly code override.
    #[arg(long)]
    fcode: Option<String>,
    /// Mission override; intercept and tow parameters are kept.
    #[arg(long)]
    mission: Option<i32>,
    /// Fuel override.
    #[arg(long)]
    fuel: Option<i32>,
    /// Tow this ship (sets the tow mission).
    #[arg(long, conflicts_with = "mission")]
    tow_ship: Option<i32>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Command::Hulls => handle_hulls(&cli),
        Command::Predict(args) => handle_predict(&cli, args),
        Command::OptimumWarp { ship, to } => handle_optimum_warp(&cli, *ship, *to),
    }
}

fn load_ship_list(cli: &Cli) -> Result<ShipList> {
    let Some(dir) = cli.shiplist.as_deref() else {
        bail!("no ship list given; use --shiplist or set PFORECAST_SHIPLIST");
    };
    ShipList::from_dir(dir)
        .with_context(|| format!("failed to load ship list from {}", dir.display()))
}

fn load_scenario(path: Option<&Path>, ship_list: &ShipList) -> Result<Scenario> {
    let Some(path) = path else {
        bail!("no scenario given; use --scenario or set PFORECAST_SCENARIO");
    };
    let scenario = Scenario::from_path(path)
        .with_context(|| format!("failed to load scenario from {}", path.display()))?;
    scenario
        .validate(ship_list)
        .with_context(|| format!("scenario {} does not match the ship list", path.display()))?;
    Ok(scenario)
}

fn handle_hulls(cli: &Cli) -> Result<()> {
    let ship_list = load_ship_list(cli)?;
    let rows = hull_rows(&ship_list);
    match cli.format {
        OutputFormat::Text => print!("{}", format_hull_table(&rows)),
        OutputFormat::Json => render_json(&rows).context("failed to write JSON output")?,
    }
    Ok(())
}

fn handle_predict(cli: &Cli, args: &PredictArgs) -> Result<()> {
    let ship_list = load_ship_list(cli)?;
    let scenario = load_scenario(cli.scenario.as_deref(), &ship_list)?;
    let Some(ship) = scenario.universe.ship(args.ship) else {
        bail!("ship {} is not in the scenario", args.ship);
    };
    let ctx = scenario.context(&ship_list);

    let mut predictor = match args.tow_ship {
        Some(towee_id) => {
            if scenario.universe.ship(towee_id).is_none() {
                bail!("towed ship {towee_id} is not in the scenario");
            }
            let mut predictor =
                ShipPredictor::with_towee(ctx, args.ship, ShipPredictor::new(ctx, towee_id));
            let intercept = ship.data.intercept_param;
            predictor.set_mission(MISSION_TOW, intercept, towee_id);
            predictor
        }
        None => ShipPredictor::new(ctx, args.ship),
    };
    if let Some(mission) = args.mission {
        let data = predictor.ship_data();
        let (intercept, tow) = (data.intercept_param, data.tow_param);
        predictor.set_mission(mission, intercept, tow);
    }
    if let Some(warp) = args.warp {
        predictor.set_warp_factor(warp);
    }
    if let Some(waypoint) = args.waypoint {
        predictor.set_waypoint(waypoint);
    }
    if let Some(fcode) = &args.fcode {
        predictor.set_friendly_code(fcode);
    }
    if let Some(fuel) = args.fuel {
        predictor.set_fuel(fuel);
    }

    match args.turns {
        Some(turns) => {
            for _ in 0..turns {
                predictor.compute_turn();
            }
        }
        None => predictor.compute_movement(),
    }
    debug!(ship = args.ship, turns = predictor.num_turns(), "forecast finished");

    let report = PredictionReport::from_predictor(&predictor, &ship.name);
    match cli.format {
        OutputFormat::Text => print!("{}", format_prediction(&report, &ColorPalette::detect())),
        OutputFormat::Json => render_json(&report).context("failed to write JSON output")?,
    }
    Ok(())
}

fn handle_optimum_warp(cli: &Cli, ship_id: i32, target: Point) -> Result<()> {
    let ship_list = load_ship_list(cli)?;
    let scenario = load_scenario(cli.scenario.as_deref(), &ship_list)?;
    let Some(ship) = scenario.universe.ship(ship_id) else {
        bail!("ship {ship_id} is not in the scenario");
    };
    let ctx = scenario.context(&ship_list);
    let report = OptimumWarpReport {
        ship_id,
        origin: ship.data.position,
        target,
        warp: get_optimum_warp(&ctx, ship_id, ship.data.position, target),
    };
    match cli.format {
        OutputFormat::Text => print!("{}", format_optimum_warp(&report)),
        OutputFormat::Json => render_json(&report).context("failed to write JSON output")?,
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
