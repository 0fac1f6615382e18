use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::constants::DEFAULT_STEP_INTERVAL;
use crate::display::chart::render_chart;
use crate::display::console::ConsoleReporter;
use crate::display::Reporter;
use crate::engine::pacing::WallClockPacer;
use crate::engine::simulation::{SimulationEngine, SimulationParameters};
use crate::physics::units::HeightUnit;

const FORMULAS: &str = "\
FREE-FALL FORMULAS
==================================================
1. Position:        y = h0 - (1/2) g t^2
2. Velocity:        v = g t
3. Total fall time: t = sqrt(2 h0 / g)

   h0 = initial height, g = gravitational
   acceleration, t = elapsed time
==================================================";

/// Interactive console front end: a command dispatch loop mapping typed
/// commands to engine operations. Pure boundary glue; all validation
/// lives in the engine and parameter types.
pub struct Menu {
    engine: SimulationEngine,
    step_interval: f64,
    chart_path: PathBuf,
}

impl Menu {
    pub fn new(engine: SimulationEngine, chart_path: PathBuf) -> Self {
        Menu {
            engine,
            step_interval: DEFAULT_STEP_INTERVAL,
            chart_path,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        println!("FREE-FALL SIMULATOR");
        Self::print_help();

        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }
            if !self.dispatch(line.trim()) {
                break;
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Executes one command. Returns false to leave the loop.
    fn dispatch(&mut self, line: &str) -> bool {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(c) => c,
            None => return true,
        };
        let argument = words.next();

        match command {
            "help" => Self::print_help(),
            "status" => self.show_status(),
            "start" => self.start_run(),
            "height" => self.set_height(argument),
            "gravity" => self.set_gravity(argument),
            "unit" => self.set_unit(argument),
            "interval" => self.set_interval(argument),
            "time" => {
                println!(
                    "Estimated total fall time: {:.2} s",
                    self.engine.model().total_fall_time()
                );
            }
            "formulas" => println!("{}", FORMULAS),
            "chart" => self.draw_chart(argument),
            "reset" => {
                self.engine.reset();
                ConsoleReporter.reset();
            }
            "quit" | "exit" => return false,
            other => println!("Unknown command '{}'. Type 'help' for the command list.", other),
        }
        true
    }

    fn print_help() {
        println!("Commands:");
        println!("  status            show current parameters");
        println!("  start             run the simulation and draw the chart");
        println!("  height <value>    set initial height (current unit display)");
        println!("  gravity <value>   set gravity in m/s²");
        println!("  unit <m|ft|cm>    set the display unit");
        println!("  interval <secs>   set the step interval");
        println!("  time              show the estimated total fall time");
        println!("  formulas          show the physics formulas");
        println!("  chart [path]      redraw the chart of the last run");
        println!("  reset             reset the simulation");
        println!("  quit              exit");
    }

    fn show_status(&self) {
        let params = self.engine.parameters();
        println!(
            "Height: {} m | Gravity: {} m/s² | Unit: {} | Interval: {} s | State: {:?}",
            params.initial_height(),
            params.gravity(),
            params.display_unit(),
            self.step_interval,
            self.engine.state()
        );
    }

    fn start_run(&mut self) {
        if let Err(e) = self.engine.start(None, self.step_interval) {
            println!("{}", e);
            return;
        }
        if let Err(e) = self.engine.run(&mut ConsoleReporter, &WallClockPacer) {
            println!("{}", e);
            return;
        }
        self.draw_chart(None);
    }

    fn set_height(&mut self, argument: Option<&str>) {
        match argument.map(str::parse::<f64>) {
            Some(Ok(height)) => {
                let current = *self.engine.parameters();
                match SimulationParameters::new(height, current.gravity(), current.display_unit())
                    .and_then(|p| self.engine.configure(p))
                {
                    Ok(()) => println!("Height set to {} m", height),
                    Err(e) => println!("{}", e),
                }
            }
            _ => println!("Usage: height <positive number>"),
        }
    }

    fn set_gravity(&mut self, argument: Option<&str>) {
        match argument.map(str::parse::<f64>) {
            Some(Ok(gravity)) => {
                let current = *self.engine.parameters();
                match SimulationParameters::new(current.initial_height(), gravity, current.display_unit())
                    .and_then(|p| self.engine.configure(p))
                {
                    Ok(()) => println!("Gravity set to {} m/s²", gravity),
                    Err(e) => println!("{}", e),
                }
            }
            _ => println!("Usage: gravity <positive number>"),
        }
    }

    fn set_unit(&mut self, argument: Option<&str>) {
        match argument.map(str::parse::<HeightUnit>) {
            Some(Ok(unit)) => {
                let current = *self.engine.parameters();
                match SimulationParameters::new(current.initial_height(), current.gravity(), unit)
                    .and_then(|p| self.engine.configure(p))
                {
                    Ok(()) => println!("Display unit set to {}", unit),
                    Err(e) => println!("{}", e),
                }
            }
            _ => println!("Usage: unit <m|ft|cm>"),
        }
    }

    fn set_interval(&mut self, argument: Option<&str>) {
        match argument.map(str::parse::<f64>) {
            Some(Ok(interval)) if interval > 0.0 => {
                self.step_interval = interval;
                println!("Step interval set to {} s", interval);
            }
            _ => println!("Usage: interval <positive number of seconds>"),
        }
    }

    fn draw_chart(&self, argument: Option<&str>) {
        let path = argument.map(PathBuf::from).unwrap_or_else(|| self.chart_path.clone());
        match render_chart(self.engine.trajectory(), &self.engine.model(), &path) {
            Ok(()) => println!("Chart written to {}", path.display()),
            Err(e) => println!("{}", e),
        }
    }
}
