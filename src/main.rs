use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use freefall_simulation::*;

#[derive(Parser, Debug)]
#[command(name = "freefall-sim")]
#[command(about = "Closed-form free-fall kinematics simulator")]
#[command(version)]
struct Args {
    /// Initial height in meters
    #[arg(long, default_value_t = DEFAULT_INITIAL_HEIGHT)]
    height: f64,

    /// Gravitational acceleration in m/s²
    #[arg(long, default_value_t = EARTH_GRAVITY)]
    gravity: f64,

    /// Display unit for heights (m, ft or cm)
    #[arg(long, default_value = "m")]
    unit: String,

    /// Seconds between simulation steps
    #[arg(long, default_value_t = DEFAULT_STEP_INTERVAL)]
    interval: f64,

    /// Explicit run duration in seconds (defaults to the physical fall time)
    #[arg(long)]
    duration: Option<f64>,

    /// Output path for the position-vs-time chart
    #[arg(long, default_value = "freefall_chart.png")]
    chart: PathBuf,

    /// Skip wall-clock pacing between steps
    #[arg(long)]
    fast: bool,

    /// Start the interactive console menu instead of a one-shot run
    #[arg(long)]
    interactive: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let unit: HeightUnit = args.unit.parse()?;
    let params = SimulationParameters::new(args.height, args.gravity, unit)?;
    let mut engine = SimulationEngine::new(params);

    if args.interactive {
        menu::Menu::new(engine, args.chart).run()?;
        return Ok(());
    }

    engine.start(args.duration, args.interval)?;
    if args.fast {
        engine.run(&mut ConsoleReporter, &NoopPacer)?;
    } else {
        engine.run(&mut ConsoleReporter, &WallClockPacer)?;
    }

    render_chart(engine.trajectory(), &engine.model(), &args.chart)?;
    println!("Chart written to {}", args.chart.display());

    Ok(())
}
