use crate::display::Reporter;
use crate::engine::pacing::Pacer;
use crate::engine::trajectory::{Sample, Trajectory};
use crate::errors::SimulationError;
use crate::physics::kinematics::FreeFallModel;
use crate::physics::units::HeightUnit;

/// Validated configuration for a run. Fields are private so a value can
/// only exist with positive height and gravity; mutation goes through
/// `SimulationEngine::configure` with a freshly validated value.
#[derive(Debug, Clone, Copy)]
pub struct SimulationParameters {
    model: FreeFallModel,
    display_unit: HeightUnit,
}

impl SimulationParameters {
    pub fn new(
        initial_height: f64,
        gravity: f64,
        display_unit: HeightUnit,
    ) -> Result<Self, SimulationError> {
        // FreeFallModel holds the >0 checks for height and gravity.
        Ok(SimulationParameters {
            model: FreeFallModel::new(initial_height, gravity)?,
            display_unit,
        })
    }

    pub fn initial_height(&self) -> f64 {
        self.model.initial_height()
    }

    pub fn gravity(&self) -> f64 {
        self.model.gravity()
    }

    pub fn display_unit(&self) -> HeightUnit {
        self.display_unit
    }

    pub fn model(&self) -> FreeFallModel {
        self.model
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum SimulationState {
    Idle,
    Running,
    Paused,
    Finished,
}

/// Result of a single tick, reported back to the driving loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The run continues; pace before the next tick.
    Advanced(Sample),
    /// Height reached the ground; the engine is now Finished.
    Landed(Sample),
    /// The configured duration ran out before landing; Finished.
    TimeExpired(Sample),
}

/// Sequential free-fall simulation engine.
///
/// Owns the parameters, the lifecycle state machine and the trajectory.
/// Stepping is split from pacing: `tick` advances the simulation by one
/// interval with no notion of wall-clock time, and `run` drives ticks
/// with an injected `Pacer` and `Reporter`. A single engine instance is
/// one simulation; there is no process-global state.
pub struct SimulationEngine {
    parameters: SimulationParameters,
    state: SimulationState,
    trajectory: Trajectory,
    current_time: f64,
    step_interval: f64,
    duration: f64,
}

impl SimulationEngine {
    pub fn new(parameters: SimulationParameters) -> Self {
        SimulationEngine {
            parameters,
            state: SimulationState::Idle,
            trajectory: Trajectory::new(),
            current_time: 0.0,
            step_interval: 0.0,
            duration: 0.0,
        }
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn elapsed_time(&self) -> f64 {
        self.current_time
    }

    pub fn model(&self) -> FreeFallModel {
        self.parameters.model()
    }

    /// Replaces the simulation parameters. Rejected while Running: a
    /// mid-run swap would silently change the physics of an in-progress
    /// fall. A rejected call leaves state and parameters untouched.
    pub fn configure(&mut self, parameters: SimulationParameters) -> Result<(), SimulationError> {
        if self.state == SimulationState::Running {
            return Err(SimulationError::InvalidTransition {
                operation: "configure",
                state: self.state,
            });
        }
        self.parameters = parameters;
        Ok(())
    }

    /// Begins a fresh run: clears the trajectory, zeroes elapsed time and
    /// transitions to Running. When `duration` is `None` the physical
    /// fall time is used.
    pub fn start(
        &mut self,
        duration: Option<f64>,
        step_interval: f64,
    ) -> Result<(), SimulationError> {
        if self.state != SimulationState::Idle && self.state != SimulationState::Finished {
            return Err(SimulationError::InvalidTransition {
                operation: "start",
                state: self.state,
            });
        }
        if step_interval <= 0.0 {
            return Err(SimulationError::InvalidInterval(step_interval));
        }
        if let Some(d) = duration {
            if d <= 0.0 {
                return Err(SimulationError::InvalidParameter(format!(
                    "duration must be > 0, got {}",
                    d
                )));
            }
        }

        self.duration = duration.unwrap_or_else(|| self.model().total_fall_time());
        self.step_interval = step_interval;
        self.current_time = 0.0;
        self.trajectory.clear();
        self.state = SimulationState::Running;
        Ok(())
    }

    /// One iteration of the stepping loop: sample the model at the
    /// current time, record the sample, then either land, run out the
    /// clock, or advance by one interval.
    pub fn tick(&mut self) -> Result<TickOutcome, SimulationError> {
        if self.state != SimulationState::Running {
            return Err(SimulationError::InvalidTransition {
                operation: "tick",
                state: self.state,
            });
        }

        let model = self.model();
        let sample = Sample {
            time_seconds: self.current_time,
            height_meters: model.height_at(self.current_time),
            velocity_mps: model.velocity_at(self.current_time),
        };
        self.trajectory.push(sample);

        if sample.height_meters <= 0.0 {
            self.state = SimulationState::Finished;
            return Ok(TickOutcome::Landed(sample));
        }

        self.current_time += self.step_interval;
        if self.current_time > self.duration {
            self.state = SimulationState::Finished;
            return Ok(TickOutcome::TimeExpired(sample));
        }

        Ok(TickOutcome::Advanced(sample))
    }

    /// Drives `tick` until the run lands, runs out of time, or is paused.
    /// Pause is cooperative: it is observed at the loop condition, before
    /// the next tick.
    pub fn run(
        &mut self,
        reporter: &mut dyn Reporter,
        pacer: &dyn Pacer,
    ) -> Result<(), SimulationError> {
        if self.state != SimulationState::Running {
            return Err(SimulationError::InvalidTransition {
                operation: "run",
                state: self.state,
            });
        }

        if self.current_time == 0.0 {
            reporter.simulation_started(
                self.parameters.initial_height(),
                self.parameters.gravity(),
                self.duration,
            );
        }

        while self.state == SimulationState::Running {
            let outcome = self.tick()?;
            let unit = self.parameters.display_unit();
            let sample = match outcome {
                TickOutcome::Advanced(s) | TickOutcome::Landed(s) | TickOutcome::TimeExpired(s) => s,
            };
            reporter.progress(
                sample.time_seconds,
                unit.convert(sample.height_meters),
                unit,
                sample.velocity_mps,
            );
            match outcome {
                TickOutcome::Advanced(_) => pacer.pace(self.step_interval),
                TickOutcome::Landed(_) => {
                    reporter.landed();
                    reporter.finished();
                }
                TickOutcome::TimeExpired(_) => reporter.finished(),
            }
        }

        Ok(())
    }

    /// Stops the loop before its next tick. Valid only while Running.
    pub fn pause(&mut self) -> Result<(), SimulationError> {
        if self.state != SimulationState::Running {
            return Err(SimulationError::InvalidTransition {
                operation: "pause",
                state: self.state,
            });
        }
        self.state = SimulationState::Paused;
        Ok(())
    }

    /// Continues a paused run from its current elapsed time.
    pub fn resume(&mut self) -> Result<(), SimulationError> {
        if self.state != SimulationState::Paused {
            return Err(SimulationError::InvalidTransition {
                operation: "resume",
                state: self.state,
            });
        }
        self.state = SimulationState::Running;
        Ok(())
    }

    /// Returns to Idle from any state. Clears the trajectory and elapsed
    /// time; configured parameters are kept.
    pub fn reset(&mut self) {
        self.state = SimulationState::Idle;
        self.current_time = 0.0;
        self.trajectory.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::NullReporter;
    use crate::engine::pacing::NoopPacer;
    use approx::assert_relative_eq;

    fn create_test_engine() -> SimulationEngine {
        let params = SimulationParameters::new(100.0, 9.8, HeightUnit::Meter).unwrap();
        SimulationEngine::new(params)
    }

    #[test]
    fn test_engine_starts_idle() {
        let engine = create_test_engine();
        assert_eq!(engine.state(), SimulationState::Idle);
        assert!(engine.trajectory().is_empty());
    }

    #[test]
    fn test_start_validates_interval() {
        let mut engine = create_test_engine();
        let err = engine.start(None, 0.0).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInterval(_)));
        assert_eq!(engine.state(), SimulationState::Idle);
    }

    #[test]
    fn test_start_validates_duration() {
        let mut engine = create_test_engine();
        let err = engine.start(Some(-1.0), 0.1).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidParameter(_)));
        assert_eq!(engine.state(), SimulationState::Idle);
    }

    #[test]
    fn test_start_while_running_is_rejected() {
        let mut engine = create_test_engine();
        engine.start(None, 0.1).unwrap();
        let err = engine.start(None, 0.1).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidTransition { .. }));
        assert_eq!(engine.state(), SimulationState::Running);
    }

    #[test]
    fn test_pause_from_idle_is_rejected() {
        let mut engine = create_test_engine();
        assert!(engine.pause().is_err());
        assert_eq!(engine.state(), SimulationState::Idle);
    }

    #[test]
    fn test_configure_while_running_is_rejected() {
        let mut engine = create_test_engine();
        engine.start(None, 0.1).unwrap();
        let replacement = SimulationParameters::new(50.0, 1.62, HeightUnit::Foot).unwrap();
        assert!(engine.configure(replacement).is_err());
        assert_relative_eq!(engine.parameters().initial_height(), 100.0);
        assert_relative_eq!(engine.parameters().gravity(), 9.8);
    }

    #[test]
    fn test_tick_records_one_sample() {
        let mut engine = create_test_engine();
        engine.start(None, 0.1).unwrap();

        let outcome = engine.tick().unwrap();
        match outcome {
            TickOutcome::Advanced(sample) => {
                assert_relative_eq!(sample.time_seconds, 0.0);
                assert_relative_eq!(sample.height_meters, 100.0);
                assert_relative_eq!(sample.velocity_mps, 0.0);
            }
            other => panic!("Expected Advanced outcome, got {:?}", other),
        }
        assert_eq!(engine.trajectory().len(), 1);
        assert_relative_eq!(engine.elapsed_time(), 0.1);
    }

    #[test]
    fn test_full_run_lands_and_finishes() {
        let mut engine = create_test_engine();
        engine.start(None, 0.5).unwrap();
        engine.run(&mut NullReporter, &NoopPacer).unwrap();

        assert_eq!(engine.state(), SimulationState::Finished);
        let samples = engine.trajectory().samples();
        assert!(!samples.is_empty());

        // Strictly increasing time, non-increasing height.
        for pair in samples.windows(2) {
            assert!(pair[1].time_seconds > pair[0].time_seconds);
            assert!(pair[1].height_meters <= pair[0].height_meters);
        }
    }

    #[test]
    fn test_short_duration_expires_without_landing() {
        let mut engine = create_test_engine();
        engine.start(Some(1.0), 0.5).unwrap();
        engine.run(&mut NullReporter, &NoopPacer).unwrap();

        assert_eq!(engine.state(), SimulationState::Finished);
        let last = engine.trajectory().samples().last().unwrap();
        assert!(
            last.height_meters > 0.0,
            "Object should still be above ground after 1 s of a ~4.5 s fall"
        );
    }

    #[test]
    fn test_pause_and_resume_continue_the_same_run() {
        let mut engine = create_test_engine();
        engine.start(None, 0.1).unwrap();

        engine.tick().unwrap();
        engine.tick().unwrap();
        engine.pause().unwrap();
        assert_eq!(engine.state(), SimulationState::Paused);
        assert!(engine.tick().is_err());

        let samples_before = engine.trajectory().len();
        engine.resume().unwrap();
        engine.run(&mut NullReporter, &NoopPacer).unwrap();

        assert_eq!(engine.state(), SimulationState::Finished);
        assert!(engine.trajectory().len() > samples_before);
        for pair in engine.trajectory().samples().windows(2) {
            assert!(pair[1].time_seconds > pair[0].time_seconds);
        }
    }

    #[test]
    fn test_reset_returns_to_idle_and_keeps_parameters() {
        let mut engine = create_test_engine();
        engine.start(None, 0.5).unwrap();
        engine.run(&mut NullReporter, &NoopPacer).unwrap();
        assert_eq!(engine.state(), SimulationState::Finished);

        engine.reset();
        assert_eq!(engine.state(), SimulationState::Idle);
        assert!(engine.trajectory().is_empty());
        assert_relative_eq!(engine.elapsed_time(), 0.0);
        assert_relative_eq!(engine.parameters().initial_height(), 100.0);
    }
}
