//! Car motion: advance along fixed headings, pool-respawn at the edges.

use crate::api::game::SimConfig;
use crate::api::types::SimEvent;
use crate::core::rng::Rng;
use crate::core::timer::Scheduler;
use crate::core::world::WorldState;

/// Respawn lands at `bound + BASE + rng·SPREAD` behind the opposite edge,
/// so cars reappear staggered instead of in lockstep.
const RESPAWN_OFFSET_BASE: f32 = 2.0;
const RESPAWN_OFFSET_SPREAD: f32 = 20.0;

/// Advance all car entities by one fixed step.
///
/// Must run before trigger evaluation and projection within a tick, so
/// downstream state reflects the just-moved positions.
pub fn tick_motion(
    world: &mut WorldState,
    scheduler: &mut Scheduler,
    rng: &mut Rng,
    events: &mut Vec<SimEvent>,
    config: &SimConfig,
    dt: f32,
) {
    let bound = config.world_bound;
    for entity in world.scene.iter_mut() {
        let Some(car) = entity.car.as_mut() else {
            continue;
        };

        // Off the board: wait for the cooldown, then reappear behind the
        // opposite edge with the lane offset applied.
        if let Some(timer) = car.respawn {
            if scheduler.just_fired(timer) {
                let along = -(bound + rng.range(RESPAWN_OFFSET_BASE, RESPAWN_OFFSET_SPREAD));
                entity.position =
                    car.heading.unit() * along + car.heading.perp() * car.lane_offset;
                entity.rotation = car.heading.rotation();
                entity.active = true;
                car.stopped = false;
                car.respawn = None;
                events.push(SimEvent::CarRespawned { id: entity.id });
                log::debug!("car {} respawned at {:?}", entity.id.0, entity.position);
            }
            continue;
        }

        if !entity.active || car.stopped {
            continue;
        }

        entity.position += car.heading.unit() * car.speed * dt * config.motion_scale;

        // Out of bounds along the heading: deactivate immediately, not
        // clipped, and arm the respawn cooldown.
        let along = entity.position.dot(car.heading.unit());
        if along > bound {
            entity.active = false;
            car.respawn = Some(scheduler.schedule(config.respawn_cooldown));
        }
    }
}
