//! One-shot timer scheduler.
//!
//! Traffic-light cycles, car respawn cooldowns and gate close delays are
//! logically independent timers multiplexed onto the fixed tick. Each is a
//! cancellable handle owned by the component it serves; clearing the
//! scheduler on reset cancels every pending timer in one place, so no
//! callback can fire into a torn-down world.

use std::collections::HashMap;

/// Cancellable handle to a pending one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

pub struct Scheduler {
    next_id: u64,
    pending: HashMap<TimerId, f32>,
    fired: Vec<TimerId>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            pending: HashMap::new(),
            fired: Vec::new(),
        }
    }

    /// Arm a one-shot timer. It fires on the first tick where its
    /// remaining time reaches zero.
    pub fn schedule(&mut self, duration: f32) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id, duration.max(0.0));
        id
    }

    /// Cancel a pending timer. Idempotent: cancelling an already-fired or
    /// already-cancelled id does nothing.
    pub fn cancel(&mut self, id: TimerId) {
        self.pending.remove(&id);
    }

    /// Advance all pending timers by `dt` and retire the due ones into
    /// this tick's fired set. Fired ids are ordered by creation so ticks
    /// are deterministic.
    pub fn tick(&mut self, dt: f32) {
        self.fired.clear();
        for (id, remaining) in self.pending.iter_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.fired.push(*id);
            }
        }
        self.fired.sort_unstable();
        for id in &self.fired {
            self.pending.remove(id);
        }
    }

    /// Whether `id` fired on the most recent tick.
    pub fn just_fired(&self, id: TimerId) -> bool {
        self.fired.binary_search(&id).is_ok()
    }

    /// Timers retired on the most recent tick.
    pub fn fired(&self) -> &[TimerId] {
        &self.fired
    }

    /// Number of timers still pending.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Cancel everything, including the current fired set.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.fired.clear();
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
