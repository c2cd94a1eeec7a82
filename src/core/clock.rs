//=========================================================================
// Frame Clock
//=========================================================================
//
// Variable-step delta time for the main loop.
//
// Timestamps are seconds since the clock was created. A timestamp older
// than the previous one (clock adjustments, test input) yields a delta
// of zero rather than a negative step.
//
//=========================================================================

use std::time::Instant;

/// Computes the elapsed seconds between consecutive loop iterations.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
    last_frame_time: Option<f64>,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            last_frame_time: None,
            frames: 0,
        }
    }

    /// Reads the monotonic clock and returns the delta since the last tick.
    pub fn tick(&mut self) -> f32 {
        let now = self.origin.elapsed().as_secs_f64();
        self.tick_at(now)
    }

    /// Returns the delta between `now` and the previous timestamp.
    ///
    /// The first tick reports 0.
    pub fn tick_at(&mut self, now: f64) -> f32 {
        let delta = match self.last_frame_time {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };

        self.last_frame_time = Some(match self.last_frame_time {
            Some(last) => last.max(now),
            None => now,
        });
        self.frames += 1;

        delta as f32
    }

    /// Number of ticks taken so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick_at(12.5), 0.0);
        assert_eq!(clock.frames(), 1);
    }

    #[test]
    fn delta_is_difference_of_timestamps() {
        let mut clock = FrameClock::new();
        clock.tick_at(1.0);

        assert!((clock.tick_at(1.25) - 0.25).abs() < 1e-6);
        assert!((clock.tick_at(2.0) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn equal_timestamps_give_zero() {
        let mut clock = FrameClock::new();
        clock.tick_at(3.0);
        assert_eq!(clock.tick_at(3.0), 0.0);
    }

    #[test]
    fn backwards_timestamp_never_goes_negative() {
        let mut clock = FrameClock::new();
        clock.tick_at(5.0);

        assert_eq!(clock.tick_at(4.0), 0.0);
        // The step back does not inflate the following delta
        assert!((clock.tick_at(5.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn monotonic_ticks_are_non_negative() {
        let mut clock = FrameClock::new();
        for _ in 0..100 {
            assert!(clock.tick() >= 0.0);
        }
    }
}
