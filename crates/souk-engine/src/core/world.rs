use glam::Vec3;

use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::zone::TriggerZone;
use crate::core::scene::Scene;

/// The avatar the camera hangs off. Owned exclusively by [`WorldState`];
/// mutated only through the world's player operations.
#[derive(Debug, Clone, Copy)]
pub struct PlayerState {
    pub position: Vec3,
    /// Heading around the vertical axis, radians, wrapped to [-π, π].
    pub yaw: f32,
    /// Walk speed in world units per second (informational; movement is
    /// step-per-input, see the controller).
    pub speed: f32,
}

/// Single owner of all mutable simulation state: the player, the entity
/// scene and the trigger-zone registry. All mutation is synchronous and
/// last-write-wins; a multi-threaded embedding must funnel every write
/// through the one task that owns this struct.
pub struct WorldState {
    pub player: PlayerState,
    pub scene: Scene,
    zones: Vec<TriggerZone>,
    spawn_position: Vec3,
    spawn_yaw: f32,
    /// Half-width of the square world; positions are clamped to ±bound.
    pub bound: f32,
}

impl WorldState {
    pub fn new(spawn_position: Vec3, spawn_yaw: f32, bound: f32) -> Self {
        Self {
            player: PlayerState {
                position: spawn_position,
                yaw: spawn_yaw,
                speed: 0.0,
            },
            scene: Scene::new(),
            zones: Vec::new(),
            spawn_position,
            spawn_yaw,
            bound,
        }
    }

    // -- Player operations --

    /// Translate the player, clamped to the world bounds. Solid zones are
    /// the controller's concern, not the world's.
    pub fn move_player(&mut self, delta: Vec3) {
        let p = self.player.position + delta;
        self.player.position = Vec3::new(
            p.x.clamp(-self.bound, self.bound),
            p.y,
            p.z.clamp(-self.bound, self.bound),
        );
    }

    pub fn rotate_player(&mut self, delta_yaw: f32) {
        self.player.yaw = crate::renderer::project::normalize_angle(self.player.yaw + delta_yaw);
    }

    /// Return the player to the configured spawn transform.
    pub fn reset_player(&mut self) {
        self.player.position = self.spawn_position;
        self.player.yaw = self.spawn_yaw;
        self.player.speed = 0.0;
    }

    // -- Entity operations --

    /// Insert or replace an entity by id.
    pub fn upsert_entity(&mut self, entity: Entity) {
        self.scene.upsert(entity);
    }

    // -- Zone operations --

    /// Register a zone, replacing any previous zone with the same id
    /// atomically (the old edge state is discarded, so a replacement can
    /// never double-fire). Degenerate geometry is accepted but inert.
    pub fn register_zone(&mut self, zone: TriggerZone) {
        if zone.is_inert() {
            log::warn!("zone '{}' has degenerate geometry and will never fire", zone.id);
        }
        match self.zones.iter_mut().find(|z| z.id == zone.id) {
            Some(slot) => *slot = zone,
            None => self.zones.push(zone),
        }
    }

    /// Remove a zone by id. Unknown ids are ignored.
    pub fn unregister_zone(&mut self, id: &str) {
        self.zones.retain(|z| z.id != id);
    }

    pub fn zone(&self, id: &str) -> Option<&TriggerZone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn zone_mut(&mut self, id: &str) -> Option<&mut TriggerZone> {
        self.zones.iter_mut().find(|z| z.id == id)
    }

    pub fn zones(&self) -> &[TriggerZone] {
        &self.zones
    }

    pub fn zones_mut(&mut self) -> &mut [TriggerZone] {
        &mut self.zones
    }

    /// Registration slot of a zone, used as its wire identifier.
    pub fn zone_slot(&self, id: &str) -> Option<u32> {
        self.zones.iter().position(|z| z.id == id).map(|i| i as u32)
    }

    /// Drop every entity and zone and respawn the player. Used by the
    /// runner's reset path before the game rebuilds the scene.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.zones.clear();
        self.reset_player();
    }

    /// Convenience lookup for systems that need an entity's transform.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.scene.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn world() -> WorldState {
        WorldState::new(Vec3::ZERO, 0.0, 120.0)
    }

    #[test]
    fn move_player_clamps_to_bounds() {
        let mut w = world();
        w.move_player(Vec3::new(500.0, 0.0, -500.0));
        assert_eq!(w.player.position.x, 120.0);
        assert_eq!(w.player.position.z, -120.0);
    }

    #[test]
    fn rotate_player_wraps_yaw() {
        let mut w = world();
        w.rotate_player(3.0 * PI);
        assert!(w.player.yaw.abs() <= PI + 1e-6);
    }

    #[test]
    fn reset_player_restores_spawn() {
        let mut w = WorldState::new(Vec3::new(0.0, 0.0, -30.0), 0.5, 120.0);
        w.move_player(Vec3::new(10.0, 0.0, 10.0));
        w.rotate_player(1.0);
        w.reset_player();
        assert_eq!(w.player.position, Vec3::new(0.0, 0.0, -30.0));
        assert_eq!(w.player.yaw, 0.5);
    }

    #[test]
    fn register_zone_replaces_same_id_atomically() {
        let mut w = world();
        let mut z = TriggerZone::sphere("bakery", Vec3::ZERO, 5.0);
        z.inside = true;
        w.register_zone(z);
        w.register_zone(TriggerZone::sphere("bakery", Vec3::new(1.0, 0.0, 0.0), 6.0));
        assert_eq!(w.zones().len(), 1);
        let z = w.zone("bakery").unwrap();
        assert_eq!(z.enter_radius, 6.0);
        // Replacement discards the old edge state.
        assert!(!z.inside);
    }

    #[test]
    fn unregister_zone_removes() {
        let mut w = world();
        w.register_zone(TriggerZone::sphere("bakery", Vec3::ZERO, 5.0));
        w.unregister_zone("bakery");
        assert!(w.zone("bakery").is_none());
        // Unknown id is a no-op.
        w.unregister_zone("bakery");
    }

    #[test]
    fn zone_slot_follows_registration_order() {
        let mut w = world();
        w.register_zone(TriggerZone::sphere("a", Vec3::ZERO, 5.0));
        w.register_zone(TriggerZone::sphere("b", Vec3::ZERO, 5.0));
        assert_eq!(w.zone_slot("a"), Some(0));
        assert_eq!(w.zone_slot("b"), Some(1));
        assert_eq!(w.zone_slot("c"), None);
    }
}
