pub mod constants;
pub mod display;
pub mod engine;
pub mod errors;
pub mod menu;
pub mod physics;

pub use constants::*;
pub use engine::pacing::{NoopPacer, Pacer, WallClockPacer};
pub use engine::simulation::{
    SimulationEngine, SimulationParameters, SimulationState, TickOutcome,
};
pub use engine::trajectory::{Sample, Trajectory};

// Re-export commonly used items from physics
pub use physics::kinematics::FreeFallModel;
pub use physics::units::HeightUnit;

// Re-export commonly used items from display
pub use display::chart::render_chart;
pub use display::console::ConsoleReporter;
pub use display::{NullReporter, Reporter};
