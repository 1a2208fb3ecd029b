//! Pseudo-3D projection: world space → percent-of-viewport screen space.
//!
//! The renderer is a DOM/CSS-transform stage, so the projection is the
//! cheap kind the layout was built around: horizontal placement comes from
//! the view angle alone, while size and opacity fall off with distance.
//! That is not a true perspective divide and must stay that way.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec3;

use crate::components::entity::EntityKind;

/// Distances are floored here before any reciprocal, so an entity sitting
/// exactly on the player never divides by zero.
pub const DISTANCE_EPSILON: f32 = 1e-4;

/// Distance falloff for size.
const SCALE_K: f32 = 0.05;
/// Distance falloff for opacity, gentler than size.
const OPACITY_K: f32 = 0.02;
/// Size floor; beyond this the falloff clamps.
const SCALE_FLOOR: f32 = 0.05;
/// Stacking base: z_order = floor(Z_BASE - distance).
const Z_BASE: f32 = 1000.0;
/// Vertical percent of the viewport where the horizon line sits.
const HORIZON_Y: f32 = 45.0;
/// How far below the horizon a ground-level entity drops as it nears.
const GROUND_DROP: f32 = 40.0;
/// Screen percent per world unit of entity height, before distance scale.
const HEIGHT_GAIN: f32 = 6.0;

/// A projected entity, in the renderer's coordinate frame:
/// `screen_x`/`screen_y` are percent-of-viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub screen_x: f32,
    pub screen_y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub visible: bool,
    pub z_order: i32,
}

/// Wrap any angle into [-π, π] by modulo arithmetic. Inputs of any
/// magnitude are valid; clamping would be a latent bug.
pub fn normalize_angle(theta: f32) -> f32 {
    (theta + PI).rem_euclid(TAU) - PI
}

/// Render-distance horizon per entity kind, world units. Big silhouettes
/// read from further away than street-level detail.
pub fn horizon(kind: EntityKind) -> f32 {
    match kind {
        EntityKind::Building => 120.0,
        EntityKind::Gate => 100.0,
        EntityKind::Car => 90.0,
        EntityKind::Light => 70.0,
        EntityKind::Npc => 50.0,
    }
}

/// Project one world position into screen space relative to the player.
///
/// Culling is a 180° forward field of view plus the per-kind horizon.
/// An invisible result still carries coherent numbers, so callers may
/// fade entities out rather than popping them.
pub fn project(entity_pos: Vec3, player_pos: Vec3, player_yaw: f32, kind: EntityKind) -> Projected {
    let rel = entity_pos - player_pos;
    let distance = Vec3::new(rel.x, 0.0, rel.z).length().max(DISTANCE_EPSILON);
    let angle = normalize_angle(rel.x.atan2(rel.z) - player_yaw);

    let visible = angle.abs() <= FRAC_PI_2 && distance <= horizon(kind);

    let scale = (1.0 / (distance * SCALE_K + 1.0)).max(SCALE_FLOOR);
    let opacity = (1.0 / (distance * OPACITY_K + 1.0)).clamp(0.0, 1.0);

    let screen_x = 50.0 + 50.0 * angle.sin();
    let screen_y = HORIZON_Y + GROUND_DROP * scale - entity_pos.y * HEIGHT_GAIN * scale;

    Projected {
        screen_x,
        screen_y,
        scale,
        opacity,
        visible,
        z_order: (Z_BASE - distance).floor() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn normalize_stays_in_range_and_congruent() {
        for i in -100..100 {
            let theta = i as f32 * 0.37;
            let n = normalize_angle(theta);
            assert!((-PI..=PI).contains(&n), "out of range: {} -> {}", theta, n);
            let diff = (theta - n) / TAU;
            assert!(
                (diff - diff.round()).abs() < 1e-3,
                "not congruent: {} -> {}",
                theta,
                n
            );
        }
    }

    #[test]
    fn normalize_handles_large_magnitudes() {
        assert!((normalize_angle(7.0 * PI) - PI).abs() < 1e-4 || (normalize_angle(7.0 * PI) + PI).abs() < 1e-4);
        assert!(normalize_angle(-9.5 * PI).abs() <= PI + EPS);
    }

    #[test]
    fn entity_ahead_is_visible_and_centered() {
        let p = project(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 0.0, EntityKind::Building);
        assert!(p.visible);
        assert!((p.screen_x - 50.0).abs() < EPS);
    }

    #[test]
    fn entity_behind_is_never_visible() {
        let p = project(Vec3::new(0.0, 0.0, -10.0), Vec3::ZERO, 0.0, EntityKind::Building);
        assert!(!p.visible);
    }

    #[test]
    fn visibility_follows_player_yaw() {
        // Entity due east; player facing east sees it dead ahead.
        let p = project(
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::ZERO,
            FRAC_PI_2,
            EntityKind::Building,
        );
        assert!(p.visible);
        assert!((p.screen_x - 50.0).abs() < 1e-3);
        // Facing west, it is directly behind.
        let p = project(
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::ZERO,
            -FRAC_PI_2,
            EntityKind::Building,
        );
        assert!(!p.visible);
    }

    #[test]
    fn scale_and_opacity_decrease_with_distance() {
        let mut last_scale = f32::INFINITY;
        let mut last_opacity = f32::INFINITY;
        for d in 1..40 {
            let p = project(
                Vec3::new(0.0, 0.0, d as f32 * 2.0),
                Vec3::ZERO,
                0.0,
                EntityKind::Building,
            );
            assert!(p.scale < last_scale, "scale not strictly decreasing at {}", d);
            assert!(p.opacity < last_opacity, "opacity not strictly decreasing at {}", d);
            assert!((0.0..=1.0).contains(&p.opacity));
            last_scale = p.scale;
            last_opacity = p.opacity;
        }
    }

    #[test]
    fn zero_distance_does_not_blow_up() {
        let p = project(Vec3::ZERO, Vec3::ZERO, 0.0, EntityKind::Npc);
        assert!(p.scale.is_finite());
        assert!(p.opacity.is_finite());
        assert!(p.visible);
    }

    #[test]
    fn nearer_entities_stack_above() {
        let near = project(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 0.0, EntityKind::Npc);
        let far = project(Vec3::new(0.0, 0.0, 30.0), Vec3::ZERO, 0.0, EntityKind::Npc);
        assert!(near.z_order > far.z_order);
    }

    #[test]
    fn horizon_culls_by_kind() {
        let pos = Vec3::new(0.0, 0.0, 60.0);
        assert!(project(pos, Vec3::ZERO, 0.0, EntityKind::Building).visible);
        assert!(!project(pos, Vec3::ZERO, 0.0, EntityKind::Npc).visible);
    }

    #[test]
    fn side_angles_map_to_viewport_edges() {
        // 90° left of straight ahead lands at x ≈ 0.
        let p = project(Vec3::new(-10.0, 0.0, 0.001), Vec3::ZERO, 0.0, EntityKind::Building);
        assert!(p.screen_x < 1.0);
        let p = project(Vec3::new(10.0, 0.0, 0.001), Vec3::ZERO, 0.0, EntityKind::Building);
        assert!(p.screen_x > 99.0);
    }
}
