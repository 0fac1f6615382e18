use super::Reporter;
use crate::physics::units::HeightUnit;

/// Prints the trajectory as formatted text, one line per tick, plus a
/// banner at the start and lifecycle messages at the end of a run.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn simulation_started(&mut self, initial_height: f64, gravity: f64, estimated_duration: f64) {
        println!("Starting free-fall simulation...");
        println!("Initial height: {} m", initial_height);
        println!("Gravity: {} m/s²", gravity);
        println!("Estimated total time: {:.2} s", estimated_duration);
        println!("{}", "-".repeat(50));
    }

    fn progress(&mut self, time: f64, display_height: f64, unit: HeightUnit, velocity: f64) {
        println!(
            "T: {:5.2}s | Height: {:6.2} {} | Velocity: {:6.2} m/s",
            time, display_height, unit, velocity
        );
    }

    fn landed(&mut self) {
        println!("The object has reached the ground!");
    }

    fn finished(&mut self) {
        println!("Simulation finished.");
    }

    fn paused(&mut self) {
        println!("Simulation paused.");
    }

    fn reset(&mut self) {
        println!("Simulation reset.");
    }
}
