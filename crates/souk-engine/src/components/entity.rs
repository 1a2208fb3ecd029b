use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::types::EntityId;
use crate::components::car::CarComponent;
use crate::components::gate::GateComponent;
use crate::components::light::TrafficLightComponent;

/// What an entity is, for projection horizons and renderer styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Building,
    Npc,
    Car,
    Light,
    Gate,
}

impl EntityKind {
    /// Numeric code written to the view buffer for the renderer.
    pub fn code(self) -> u32 {
        match self {
            EntityKind::Building => 1,
            EntityKind::Npc => 2,
            EntityKind::Car => 3,
            EntityKind::Light => 4,
            EntityKind::Gate => 5,
        }
    }
}

/// Fat Entity — a single struct with optional components.
/// Designed for simplicity and rapid prototyping over ECS purity.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    pub kind: EntityKind,
    /// Inactive entities are skipped by motion and projection
    /// (e.g. a car waiting out its respawn cooldown).
    pub active: bool,
    /// Position in world space. `y` is vertical and usually zero.
    pub position: Vec3,
    /// Rotation around the vertical axis, radians.
    pub rotation: f32,
    /// Uniform world-space scale.
    pub scale: f32,
    pub car: Option<CarComponent>,
    pub light: Option<TrafficLightComponent>,
    pub gate: Option<GateComponent>,
}

impl Entity {
    /// Create a new entity of the given kind at the origin.
    pub fn new(id: EntityId, kind: EntityKind) -> Self {
        Self {
            id,
            tag: String::new(),
            kind,
            active: true,
            position: Vec3::ZERO,
            rotation: 0.0,
            scale: 1.0,
            car: None,
            light: None,
            gate: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_car(mut self, car: CarComponent) -> Self {
        self.car = Some(car);
        self
    }

    pub fn with_light(mut self, light: TrafficLightComponent) -> Self {
        self.light = Some(light);
        self
    }

    pub fn with_gate(mut self, gate: GateComponent) -> Self {
        self.gate = Some(gate);
        self
    }
}
