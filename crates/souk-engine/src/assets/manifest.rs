use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::game::SimContext;
use crate::components::car::{CarComponent, Heading};
use crate::components::entity::{Entity, EntityKind};
use crate::components::gate::{GateComponent, GateMode};
use crate::components::light::{LightPhase, TrafficLightComponent};
use crate::components::zone::{TriggerZone, ZoneKind, ZoneMetric, ZoneShape};

/// Scene manifest describing a town's entities and trigger zones.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneManifest {
    /// Entities to spawn, in paint-tie order.
    #[serde(default)]
    pub entities: Vec<EntityDescriptor>,
    /// Trigger zones, registered in wire-slot order.
    #[serde(default)]
    pub zones: Vec<ZoneDescriptor>,
}

/// Describes a single entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDescriptor {
    /// Human-readable tag (e.g., "bakery").
    pub tag: String,
    pub kind: EntityKind,
    /// World position [x, y, z].
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub car: Option<CarDescriptor>,
    #[serde(default)]
    pub light: Option<LightDescriptor>,
    #[serde(default)]
    pub gate: Option<GateDescriptor>,
}

/// Car options (see the motion system).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarDescriptor {
    pub heading: Heading,
    pub speed: f32,
    #[serde(default)]
    pub lane_offset: f32,
    #[serde(default)]
    pub initial_delay: f32,
}

/// Traffic-light options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightDescriptor {
    pub cycle_time: f32,
    #[serde(default = "default_light_phase")]
    pub initial: LightPhase,
}

/// Gate options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateDescriptor {
    pub trigger_distance: f32,
    /// Present = start in externally-controlled mode with this state.
    #[serde(default)]
    pub controlled: Option<bool>,
    #[serde(default)]
    pub close_delay: f32,
}

/// Describes a trigger zone. Exactly one of `radius`/`half_extents` is
/// expected; a missing or non-positive one yields an inert zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneDescriptor {
    pub id: String,
    pub position: [f32; 3],
    #[serde(default)]
    pub kind: ZoneKind,
    #[serde(default)]
    pub metric: ZoneMetric,
    #[serde(default)]
    pub radius: Option<f32>,
    #[serde(default)]
    pub half_extents: Option<[f32; 3]>,
    /// Optional explicit hysteresis thresholds for sphere zones.
    #[serde(default)]
    pub enter_radius: Option<f32>,
    #[serde(default)]
    pub exit_radius: Option<f32>,
}

fn default_scale() -> f32 {
    1.0
}

fn default_light_phase() -> LightPhase {
    LightPhase::Green
}

impl SceneManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON (editor tooling).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Instantiate the described scene into a fresh context. Cars start
    /// off the board and enter via the respawn path after their initial
    /// delay, so the opening frame is not a wall of traffic.
    pub fn spawn_into(&self, ctx: &mut SimContext) {
        for desc in &self.entities {
            let id = ctx.next_id();
            let mut entity = Entity::new(id, desc.kind)
                .with_tag(desc.tag.clone())
                .with_position(Vec3::from_array(desc.position))
                .with_rotation(desc.rotation)
                .with_scale(desc.scale);

            if let Some(car) = &desc.car {
                let component = CarComponent::new(car.heading, car.speed)
                    .with_lane_offset(car.lane_offset)
                    .with_initial_delay(car.initial_delay);
                entity.rotation = car.heading.rotation();
                entity = entity.with_car(component);
                entity.active = false;
                if let Some(c) = entity.car.as_mut() {
                    c.respawn = Some(ctx.scheduler.schedule(car.initial_delay));
                }
            }
            if let Some(light) = &desc.light {
                entity = entity.with_light(TrafficLightComponent::new(
                    light.cycle_time,
                    light.initial,
                ));
            }
            if let Some(gate) = &desc.gate {
                let mut component = GateComponent::new(gate.trigger_distance)
                    .with_close_delay(gate.close_delay);
                if let Some(controlled) = gate.controlled {
                    component = component.with_mode(GateMode::External(controlled));
                }
                entity = entity.with_gate(component);
            }

            ctx.world.upsert_entity(entity);
        }

        for desc in &self.zones {
            ctx.world.register_zone(desc.to_zone());
        }

        log::info!(
            "scene: {} entities, {} zones",
            self.entities.len(),
            self.zones.len()
        );
    }
}

impl ZoneDescriptor {
    fn to_zone(&self) -> TriggerZone {
        let position = Vec3::from_array(self.position);
        let mut zone = match (self.radius, self.half_extents) {
            (_, Some(h)) => TriggerZone::boxed(self.id.clone(), position, Vec3::from_array(h)),
            (radius, None) => TriggerZone::sphere(self.id.clone(), position, radius.unwrap_or(0.0)),
        };
        zone.kind = self.kind;
        zone.metric = self.metric;
        if let (Some(enter), ZoneShape::Sphere { .. }) = (self.enter_radius, zone.shape) {
            let exit = self
                .exit_radius
                .unwrap_or(enter * crate::components::zone::HYSTERESIS_FACTOR);
            zone = zone.with_hysteresis(enter, exit);
        }
        zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::game::SimConfig;

    const TOWN: &str = r#"{
        "entities": [
            { "tag": "bakery", "kind": "building", "position": [10.0, 0.0, 20.0], "scale": 2.0 },
            { "tag": "taxi", "kind": "car", "position": [0.0, 0.0, 0.0],
              "car": { "heading": "east", "speed": 8.0, "lane_offset": 2.0, "initial_delay": 1.5 } },
            { "tag": "crossing", "kind": "light", "position": [5.0, 3.0, 5.0],
              "light": { "cycle_time": 12.0, "initial": "red" } },
            { "tag": "north-gate", "kind": "gate", "position": [0.0, 0.0, 30.0],
              "gate": { "trigger_distance": 4.0, "controlled": false } }
        ],
        "zones": [
            { "id": "bakery", "position": [10.0, 0.0, 20.0], "radius": 5.0 },
            { "id": "plaza", "position": [0.0, 0.0, 0.0], "half_extents": [6.0, 0.0, 6.0], "metric": "xz" },
            { "id": "wall-north", "position": [0.0, 0.0, 40.0], "kind": "wall", "radius": 2.0 }
        ]
    }"#;

    #[test]
    fn parses_and_spawns_the_whole_scene() {
        let manifest = SceneManifest::from_json(TOWN).unwrap();
        let mut ctx = SimContext::new(&SimConfig::default());
        manifest.spawn_into(&mut ctx);

        assert_eq!(ctx.world.scene.len(), 4);
        assert_eq!(ctx.world.zones().len(), 3);

        let bakery = ctx.world.scene.find_by_tag("bakery").unwrap();
        assert_eq!(bakery.kind, EntityKind::Building);
        assert_eq!(bakery.scale, 2.0);

        let taxi = ctx.world.scene.find_by_tag("taxi").unwrap();
        let car = taxi.car.as_ref().unwrap();
        assert_eq!(car.heading, Heading::East);
        assert!(!taxi.active, "cars enter via the respawn path");
        assert!(car.respawn.is_some());

        let light = ctx.world.scene.find_by_tag("crossing").unwrap();
        assert_eq!(
            light.light.as_ref().unwrap().phase,
            LightPhase::Red
        );

        let gate = ctx.world.scene.find_by_tag("north-gate").unwrap();
        assert_eq!(
            gate.gate.as_ref().unwrap().mode,
            GateMode::External(false)
        );
    }

    #[test]
    fn zone_kinds_and_shapes_survive_parsing() {
        let manifest = SceneManifest::from_json(TOWN).unwrap();
        let mut ctx = SimContext::new(&SimConfig::default());
        manifest.spawn_into(&mut ctx);

        let wall = ctx.world.zone("wall-north").unwrap();
        assert_eq!(wall.kind, ZoneKind::Wall);

        let plaza = ctx.world.zone("plaza").unwrap();
        assert!(matches!(plaza.shape, ZoneShape::Box { .. }));
        assert_eq!(plaza.metric, ZoneMetric::Xz);
    }

    #[test]
    fn explicit_hysteresis_overrides_the_default() {
        let json = r#"{
            "zones": [
                { "id": "store", "position": [0,0,0], "radius": 5.0,
                  "enter_radius": 5.0, "exit_radius": 9.0 }
            ]
        }"#;
        let manifest = SceneManifest::from_json(json).unwrap();
        let mut ctx = SimContext::new(&SimConfig::default());
        manifest.spawn_into(&mut ctx);
        let z = ctx.world.zone("store").unwrap();
        assert_eq!(z.enter_radius, 5.0);
        assert_eq!(z.exit_radius, 9.0);
    }

    #[test]
    fn missing_geometry_parses_to_an_inert_zone() {
        let json = r#"{ "zones": [ { "id": "husk", "position": [0,0,0] } ] }"#;
        let manifest = SceneManifest::from_json(json).unwrap();
        let mut ctx = SimContext::new(&SimConfig::default());
        manifest.spawn_into(&mut ctx);
        assert!(ctx.world.zone("husk").unwrap().is_inert());
    }

    #[test]
    fn manifest_roundtrips_through_json() {
        let manifest = SceneManifest::from_json(TOWN).unwrap();
        let json = manifest.to_json().unwrap();
        let again = SceneManifest::from_json(&json).unwrap();
        assert_eq!(again.entities.len(), manifest.entities.len());
        assert_eq!(again.zones.len(), manifest.zones.len());
    }
}
