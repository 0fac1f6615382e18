/// One recorded point of a run. Produced once per tick, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time_seconds: f64,
    pub height_meters: f64,
    pub velocity_mps: f64,
}

/// Ordered record of the samples produced by a run.
///
/// Append-only while the simulation is running; insertion order is time
/// order. Consumers get a read-only slice. Memory is bounded by the
/// caller's choice of duration and step interval, not by the store.
#[derive(Debug, Default)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    pub fn new() -> Self {
        Trajectory {
            samples: Vec::new(),
        }
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time of the last recorded sample, or 0 when the run has not
    /// produced any yet.
    pub fn max_time(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.time_seconds)
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
