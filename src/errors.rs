use thiserror::Error;

use crate::engine::simulation::SimulationState;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid step interval: {0} (must be > 0)")]
    InvalidInterval(f64),

    #[error("Unknown height unit: {0}")]
    InvalidUnit(String),

    #[error("Operation '{operation}' is not allowed in state {state:?}")]
    InvalidTransition {
        operation: &'static str,
        state: SimulationState,
    },

    #[error("No trajectory samples recorded; run a simulation before charting")]
    EmptyTrajectory,

    #[error("Chart rendering failed: {0}")]
    RenderError(String),
}
