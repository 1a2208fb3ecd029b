use crate::core::timer::TimerId;

/// Who owns a gate's open/closed state.
///
/// `Auto`: the gate controller toggles it from player proximity.
/// `External`: a caller-supplied value is authoritative; proximity still
/// fires approach/leave events for side effects, but never flips the
/// visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateMode {
    Auto,
    External(bool),
}

/// Proximity-driven gate with an animation-visible latch.
#[derive(Debug, Clone)]
pub struct GateComponent {
    pub mode: GateMode,
    /// Visible open/closed state.
    pub open: bool,
    /// 2D (XZ) distance at which the gate reacts to the player.
    pub trigger_distance: f32,
    /// How long the gate stays open after the player leaves, seconds.
    /// Zero closes it on the exit edge itself.
    pub close_delay: f32,
    /// Edge-detection state: whether the player is currently within
    /// `trigger_distance`.
    pub inside: bool,
    /// Pending close-delay timer.
    pub close_timer: Option<TimerId>,
    /// Animation progress toward `open`, 0 = shut, 1 = fully open.
    pub anim_t: f32,
}

impl GateComponent {
    pub fn new(trigger_distance: f32) -> Self {
        Self {
            mode: GateMode::Auto,
            open: false,
            trigger_distance,
            close_delay: 0.0,
            inside: false,
            close_timer: None,
            anim_t: 0.0,
        }
    }

    pub fn with_mode(mut self, mode: GateMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_close_delay(mut self, close_delay: f32) -> Self {
        self.close_delay = close_delay;
        self
    }
}
