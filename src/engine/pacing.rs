use std::time::Duration;

/// Pacing between simulation ticks.
///
/// The stepping computation itself is untimed; the pacer only slows the
/// loop down so console output stays readable. It is advisory wall-clock
/// pacing, not a real-time guarantee.
pub trait Pacer {
    fn pace(&self, step_interval_secs: f64);
}

/// Sleeps for the step interval. Used by the interactive binary.
pub struct WallClockPacer;

impl Pacer for WallClockPacer {
    fn pace(&self, step_interval_secs: f64) {
        if step_interval_secs > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(step_interval_secs));
        }
    }
}

/// Runs the loop as fast as possible. Used in tests and batch runs.
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn pace(&self, _step_interval_secs: f64) {}
}
