pub mod chart;
pub mod console;

use crate::physics::units::HeightUnit;

/// Per-tick and lifecycle notifications consumed by the display layer.
/// The engine stays ignorant of how (or whether) they are rendered.
pub trait Reporter {
    fn simulation_started(&mut self, initial_height: f64, gravity: f64, estimated_duration: f64);
    fn progress(&mut self, time: f64, display_height: f64, unit: HeightUnit, velocity: f64);
    fn landed(&mut self);
    fn finished(&mut self);
    fn paused(&mut self);
    fn reset(&mut self);
}

/// Discards every notification. Used in tests and batch runs.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn simulation_started(&mut self, _initial_height: f64, _gravity: f64, _duration: f64) {}
    fn progress(&mut self, _time: f64, _display_height: f64, _unit: HeightUnit, _velocity: f64) {}
    fn landed(&mut self) {}
    fn finished(&mut self) {}
    fn paused(&mut self) {}
    fn reset(&mut self) {}
}
