use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::timer::TimerId;

/// One of the four axis-aligned headings a car can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// Unit direction of travel in the XZ plane.
    pub fn unit(self) -> Vec3 {
        match self {
            Heading::North => Vec3::new(0.0, 0.0, 1.0),
            Heading::South => Vec3::new(0.0, 0.0, -1.0),
            Heading::East => Vec3::new(1.0, 0.0, 0.0),
            Heading::West => Vec3::new(-1.0, 0.0, 0.0),
        }
    }

    /// Unit vector perpendicular to travel, used for lane offsets.
    pub fn perp(self) -> Vec3 {
        let u = self.unit();
        Vec3::new(u.z, 0.0, -u.x)
    }

    /// Rotation of the car sprite so it faces its direction of travel.
    pub fn rotation(self) -> f32 {
        let u = self.unit();
        u.x.atan2(u.z)
    }
}

/// Autonomous car state. Cars are pooled: when one drives out of the
/// world it is deactivated, waits out a cooldown and reappears behind
/// the opposite edge instead of being despawned.
#[derive(Debug, Clone)]
pub struct CarComponent {
    pub heading: Heading,
    /// Travel speed in world units per second.
    pub speed: f32,
    /// Signed offset perpendicular to the heading, applied at spawn.
    pub lane_offset: f32,
    /// Delay before the car first appears, seconds.
    pub initial_delay: f32,
    /// Externally driven (a red light): a stopped car keeps its pose.
    pub stopped: bool,
    /// Pending respawn cooldown, if the car is off the board.
    pub respawn: Option<TimerId>,
}

impl CarComponent {
    pub fn new(heading: Heading, speed: f32) -> Self {
        Self {
            heading,
            speed,
            lane_offset: 0.0,
            initial_delay: 0.0,
            stopped: false,
            respawn: None,
        }
    }

    pub fn with_lane_offset(mut self, lane_offset: f32) -> Self {
        self.lane_offset = lane_offset;
        self
    }

    pub fn with_initial_delay(mut self, initial_delay: f32) -> Self {
        self.initial_delay = initial_delay;
        self
    }
}
