use serde::{Deserialize, Serialize};

use crate::core::timer::TimerId;

/// Phase of a traffic light. The cycle is fixed:
/// green → yellow → red → green, with no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightPhase {
    Green,
    Yellow,
    Red,
}

/// Share of the cycle each phase occupies.
const GREEN_SHARE: f32 = 0.45;
const YELLOW_SHARE: f32 = 0.10;
const RED_SHARE: f32 = 0.45;

impl LightPhase {
    pub fn next(self) -> LightPhase {
        match self {
            LightPhase::Green => LightPhase::Yellow,
            LightPhase::Yellow => LightPhase::Red,
            LightPhase::Red => LightPhase::Green,
        }
    }

    /// Duration of this phase for a given full cycle length, seconds.
    pub fn duration(self, cycle_time: f32) -> f32 {
        let share = match self {
            LightPhase::Green => GREEN_SHARE,
            LightPhase::Yellow => YELLOW_SHARE,
            LightPhase::Red => RED_SHARE,
        };
        cycle_time * share
    }

    /// Numeric code for the wire protocol.
    pub fn index(self) -> u32 {
        match self {
            LightPhase::Green => 0,
            LightPhase::Yellow => 1,
            LightPhase::Red => 2,
        }
    }
}

/// Per-light cyclic timer state. Each light free-runs on its own one-shot
/// scheduler timer that re-arms on every transition.
#[derive(Debug, Clone)]
pub struct TrafficLightComponent {
    pub phase: LightPhase,
    /// Length of one full green+yellow+red cycle, seconds.
    pub cycle_time: f32,
    /// Pending phase timer; armed lazily on the first tick.
    pub timer: Option<TimerId>,
}

impl TrafficLightComponent {
    pub fn new(cycle_time: f32, initial: LightPhase) -> Self {
        Self {
            phase: initial,
            cycle_time,
            timer: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_is_closed() {
        let mut phase = LightPhase::Green;
        for _ in 0..3 {
            phase = phase.next();
        }
        assert_eq!(phase, LightPhase::Green);
    }

    #[test]
    fn durations_sum_to_cycle_time() {
        let cycle = 10.0;
        let total = LightPhase::Green.duration(cycle)
            + LightPhase::Yellow.duration(cycle)
            + LightPhase::Red.duration(cycle);
        assert!((total - cycle).abs() < 1e-5);
        assert!((LightPhase::Green.duration(cycle) - 4.5).abs() < 1e-6);
        assert!((LightPhase::Yellow.duration(cycle) - 1.0).abs() < 1e-6);
        assert!((LightPhase::Red.duration(cycle) - 4.5).abs() < 1e-6);
    }
}
