use crate::errors::SimulationError;

/// Closed-form free-fall model for an object released from rest.
///
/// Position and velocity are computed directly from elapsed time:
///
/// - position: `y = h₀ - ½gt²`, clamped at the ground
/// - velocity: `v = gt`
/// - total fall time: `t = √(2h₀/g)`
///
/// Parameters are validated at construction, so the formula methods
/// never fail.
#[derive(Debug, Clone, Copy)]
pub struct FreeFallModel {
    initial_height: f64,
    gravity: f64,
}

impl FreeFallModel {
    pub fn new(initial_height: f64, gravity: f64) -> Result<Self, SimulationError> {
        if initial_height <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "initial height must be > 0, got {}",
                initial_height
            )));
        }
        if gravity <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "gravity must be > 0, got {}",
                gravity
            )));
        }

        Ok(FreeFallModel {
            initial_height,
            gravity,
        })
    }

    pub fn initial_height(&self) -> f64 {
        self.initial_height
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Time until the object reaches the ground, in seconds.
    pub fn total_fall_time(&self) -> f64 {
        (2.0 * self.initial_height / self.gravity).sqrt()
    }

    /// Height above the ground at time `t`, in meters. Never negative;
    /// once the closed-form position passes the ground it stays at 0.
    pub fn height_at(&self, time: f64) -> f64 {
        (self.initial_height - 0.5 * self.gravity * time * time).max(0.0)
    }

    /// Downward speed at time `t`, in m/s. Grows without bound; terminal
    /// velocity is not modeled.
    pub fn velocity_at(&self, time: f64) -> f64 {
        self.gravity * time
    }
}
