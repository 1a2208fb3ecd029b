/// Frame clock over the host's animation callback.
///
/// The browser hands us absolute timestamps; the clock turns them into
/// clamped deltas and can be stopped so a torn-down simulation ignores
/// any callback that still fires.
pub struct Clock {
    last: Option<f64>,
    running: bool,
    /// Largest delta handed out, in seconds. Tab switches produce huge
    /// frame gaps that must not turn into teleporting cars.
    max_delta: f32,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last: None,
            running: true,
            max_delta: 0.1,
        }
    }

    /// Advance to `now` (seconds) and return the delta since the previous
    /// frame. The first frame after start or resume yields zero.
    pub fn frame(&mut self, now: f64) -> f32 {
        if !self.running {
            return 0.0;
        }
        let dt = match self.last {
            Some(last) => ((now - last) as f32).clamp(0.0, self.max_delta),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }

    /// Stop the clock. Further frames are no-ops until [`Clock::resume`].
    pub fn stop(&mut self) {
        self.running = false;
        self.last = None;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed timestep accumulator.
/// Ensures simulation logic runs at a consistent rate regardless of frame time.
pub struct TickAccumulator {
    /// The fixed delta time per step.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    carry: f32,
}

impl TickAccumulator {
    /// Maximum steps consumed per frame (spiral-of-death cap).
    const MAX_STEPS: f32 = 8.0;

    pub fn new(dt: f32) -> Self {
        Self { dt, carry: 0.0 }
    }

    /// Add frame time to the accumulator. Returns the number of fixed
    /// steps to run this frame.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.carry += frame_dt.max(0.0);
        self.carry = self.carry.min(self.dt * Self::MAX_STEPS);
        let steps = (self.carry / self.dt) as u32;
        self.carry -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between steps (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.carry / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_zero_delta() {
        let mut clock = Clock::new();
        assert_eq!(clock.frame(10.0), 0.0);
        assert!((clock.frame(10.016) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn stopped_clock_is_a_noop() {
        let mut clock = Clock::new();
        clock.frame(1.0);
        clock.stop();
        assert_eq!(clock.frame(2.0), 0.0);
        assert_eq!(clock.frame(3.0), 0.0);
    }

    #[test]
    fn resume_does_not_replay_the_gap() {
        let mut clock = Clock::new();
        clock.frame(1.0);
        clock.stop();
        clock.resume();
        // First frame after resume is zero, not the 59-second gap.
        assert_eq!(clock.frame(60.0), 0.0);
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut clock = Clock::new();
        clock.frame(0.0);
        assert!(clock.frame(5.0) <= 0.1 + 1e-6);
    }

    #[test]
    fn accumulator_one_step_exact() {
        let mut acc = TickAccumulator::new(1.0 / 60.0);
        assert_eq!(acc.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn accumulator_carries_partials() {
        let mut acc = TickAccumulator::new(1.0 / 60.0);
        assert_eq!(acc.accumulate(0.008), 0);
        assert_eq!(acc.accumulate(0.010), 1);
    }

    #[test]
    fn accumulator_caps_runaway_frames() {
        let mut acc = TickAccumulator::new(1.0 / 60.0);
        assert_eq!(acc.accumulate(1.0), 8);
    }

    #[test]
    fn alpha_stays_normalized() {
        let mut acc = TickAccumulator::new(1.0 / 60.0);
        acc.accumulate(0.008);
        let a = acc.alpha();
        assert!((0.0..=1.0).contains(&a), "alpha was {}", a);
    }
}
