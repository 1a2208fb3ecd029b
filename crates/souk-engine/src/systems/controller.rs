//! Player movement: turns queued directional input into world mutations.

use glam::Vec3;

use crate::api::game::SimConfig;
use crate::core::world::WorldState;
use crate::input::queue::{InputEvent, InputQueue, MoveDir};
use crate::systems::triggers;

/// Direction of travel for a movement input, given the player's yaw.
/// Forward is the view direction; strafes are perpendicular in XZ.
fn step_direction(dir: MoveDir, yaw: f32) -> Vec3 {
    let forward = Vec3::new(yaw.sin(), 0.0, yaw.cos());
    let right = Vec3::new(yaw.cos(), 0.0, -yaw.sin());
    match dir {
        MoveDir::Forward => forward,
        MoveDir::Backward => -forward,
        MoveDir::Left => -right,
        MoveDir::Right => right,
    }
}

/// Apply all queued movement and rotation, one fixed step per event.
/// A step that would land inside a wall or solid object is cancelled
/// outright rather than slid along the surface.
///
/// Returns true if a reset was requested; the runner owns the actual
/// teardown.
pub fn apply_movement(input: &InputQueue, config: &SimConfig, world: &mut WorldState) -> bool {
    let mut reset_requested = false;
    for event in input.iter() {
        match *event {
            InputEvent::Move { dir } => {
                let delta = step_direction(dir, world.player.yaw) * config.move_step;
                let candidate = world.player.position + delta;
                if !triggers::blocked(world, candidate) {
                    world.move_player(delta);
                }
            }
            InputEvent::Rotate { dx, dy: _ } => {
                world.rotate_player(dx * config.turn_step);
            }
            InputEvent::Reset => reset_requested = true,
            InputEvent::Custom { .. } => {}
        }
    }
    reset_requested
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::zone::{TriggerZone, ZoneKind};
    use std::f32::consts::FRAC_PI_2;

    fn setup() -> (WorldState, SimConfig) {
        let config = SimConfig {
            move_step: 1.0,
            turn_step: 1.0,
            ..Default::default()
        };
        let world = WorldState::new(Vec3::ZERO, 0.0, config.world_bound);
        (world, config)
    }

    #[test]
    fn forward_follows_yaw() {
        let (mut world, config) = setup();
        let mut input = InputQueue::new();
        input.push(InputEvent::Move {
            dir: MoveDir::Forward,
        });
        apply_movement(&input, &config, &mut world);
        assert!((world.player.position.z - 1.0).abs() < 1e-6);

        // Face east, step forward: now +x.
        let mut input = InputQueue::new();
        input.push(InputEvent::Rotate {
            dx: FRAC_PI_2,
            dy: 0.0,
        });
        input.push(InputEvent::Move {
            dir: MoveDir::Forward,
        });
        apply_movement(&input, &config, &mut world);
        assert!((world.player.position.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn each_event_is_one_step() {
        let (mut world, config) = setup();
        let mut input = InputQueue::new();
        for _ in 0..3 {
            input.push(InputEvent::Move {
                dir: MoveDir::Forward,
            });
        }
        apply_movement(&input, &config, &mut world);
        assert!((world.player.position.z - 3.0).abs() < 1e-6);
    }

    #[test]
    fn strafe_is_perpendicular() {
        let (mut world, config) = setup();
        let mut input = InputQueue::new();
        input.push(InputEvent::Move { dir: MoveDir::Right });
        apply_movement(&input, &config, &mut world);
        assert!((world.player.position.x - 1.0).abs() < 1e-6);
        assert!(world.player.position.z.abs() < 1e-6);
    }

    #[test]
    fn walls_cancel_the_step() {
        let (mut world, config) = setup();
        world.register_zone(
            TriggerZone::sphere("wall", Vec3::new(0.0, 0.0, 1.0), 0.5).with_kind(ZoneKind::Wall),
        );
        let mut input = InputQueue::new();
        input.push(InputEvent::Move {
            dir: MoveDir::Forward,
        });
        apply_movement(&input, &config, &mut world);
        assert_eq!(world.player.position, Vec3::ZERO);
    }

    #[test]
    fn reset_is_reported_not_applied() {
        let (mut world, config) = setup();
        let mut input = InputQueue::new();
        input.push(InputEvent::Move {
            dir: MoveDir::Forward,
        });
        input.push(InputEvent::Reset);
        let reset = apply_movement(&input, &config, &mut world);
        assert!(reset);
        // Movement still applied; the runner performs the teardown.
        assert!(world.player.position.z > 0.0);
    }
}
