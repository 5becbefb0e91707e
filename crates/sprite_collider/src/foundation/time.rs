//! Time measurement utilities

use std::time::{Duration, Instant};

/// Wall-clock stopwatch with lap splits
///
/// Used to time the stages of a pipeline: each [`lap`](Self::lap) returns the
/// time since the previous lap, while [`elapsed`](Self::elapsed) keeps
/// counting from the start.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
    last_lap: Instant,
}

impl Stopwatch {
    /// Start a new stopwatch now
    pub fn start_new() -> Self {
        let now = Instant::now();
        Self { started: now, last_lap: now }
    }
    
    /// Time since the previous lap (or the start)
    pub fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let split = now - self.last_lap;
        self.last_lap = now;
        split
    }
    
    /// Time since the start
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
    
    /// Time since the start in milliseconds
    pub fn elapsed_millis(&self) -> f32 {
        millis(self.elapsed())
    }
}

/// Convert a duration to fractional milliseconds
pub fn millis(duration: Duration) -> f32 {
    duration.as_secs_f32() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laps_never_exceed_total() {
        let mut stopwatch = Stopwatch::start_new();
        let first = stopwatch.lap();
        let second = stopwatch.lap();
        
        assert!(first + second <= stopwatch.elapsed());
    }

    #[test]
    fn test_millis_conversion() {
        assert!((millis(Duration::from_micros(1500)) - 1.5).abs() < 1e-6);
    }
}
