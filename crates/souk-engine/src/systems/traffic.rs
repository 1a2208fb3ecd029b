//! Traffic-light FSM: green → yellow → red, each light on its own
//! self-re-arming one-shot timer.

use crate::api::types::SimEvent;
use crate::core::timer::Scheduler;
use crate::core::world::WorldState;

/// Advance every traffic light whose phase timer fired this tick, and arm
/// timers for lights that do not have one yet (fresh spawns and rebuilt
/// worlds — arming lazily keeps scene construction timer-free).
///
/// Re-arming on fire rather than running a fixed-interval ticker means a
/// phase forced from outside simply restarts its own share of the cycle.
pub fn tick_lights(world: &mut WorldState, scheduler: &mut Scheduler, events: &mut Vec<SimEvent>) {
    for entity in world.scene.iter_mut() {
        let Some(light) = entity.light.as_mut() else {
            continue;
        };

        match light.timer {
            None => {
                light.timer = Some(scheduler.schedule(light.phase.duration(light.cycle_time)));
            }
            Some(timer) if scheduler.just_fired(timer) => {
                light.phase = light.phase.next();
                light.timer = Some(scheduler.schedule(light.phase.duration(light.cycle_time)));
                events.push(SimEvent::LightChanged {
                    id: entity.id,
                    phase: light.phase,
                });
            }
            Some(_) => {}
        }
    }
}
