// Physical Constants
pub const EARTH_GRAVITY: f64 = 9.8; // m/s²

// Unit Conversion Factors (relative to meters)
pub const METERS_TO_FEET: f64 = 3.28084;
pub const METERS_TO_CENTIMETERS: f64 = 100.0;

// Simulation Defaults
pub const DEFAULT_INITIAL_HEIGHT: f64 = 100.0; // m
pub const DEFAULT_STEP_INTERVAL: f64 = 0.1; // s

// Chart Parameters
pub const THEORETICAL_CURVE_POINTS: usize = 100;
pub const CHART_WIDTH: u32 = 1000;
pub const CHART_HEIGHT: u32 = 600;
