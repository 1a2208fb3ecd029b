//! Gate controller: proximity-driven open/close with an animated latch.

use std::f32::consts::FRAC_PI_2;

use crate::api::types::SimEvent;
use crate::core::timer::Scheduler;
use crate::core::world::WorldState;
use crate::extensions::easing::Easing;

/// Seconds for the swing animation between fully shut and fully open.
const GATE_ANIM_TIME: f32 = 0.4;

/// The proximity predicate behind every gate: 2D (XZ) distance within the
/// trigger distance. Pure, so UI code can preview a gate's reaction.
pub fn is_open(player_pos: glam::Vec3, gate_pos: glam::Vec3, trigger_distance: f32) -> bool {
    let rel = player_pos - gate_pos;
    glam::Vec2::new(rel.x, rel.z).length() <= trigger_distance
}

/// Tick every gate: single-threshold edge detection on XZ distance to the
/// player, visible-state ownership per [`GateMode`], and the swing
/// animation.
///
/// Approach/leave events fire in both modes; only `Auto` lets proximity
/// drive the visible state. A non-zero `close_delay` holds the gate open
/// after the player leaves, on a cancellable timer — walking back in
/// before it fires simply cancels the close.
///
/// [`GateMode`]: crate::components::gate::GateMode
pub fn tick_gates(
    world: &mut WorldState,
    scheduler: &mut Scheduler,
    events: &mut Vec<SimEvent>,
    dt: f32,
) {
    use crate::components::gate::GateMode;

    let player = world.player.position;
    for entity in world.scene.iter_mut() {
        let gate_pos = entity.position;
        let Some(gate) = entity.gate.as_mut() else {
            continue;
        };

        let near = is_open(player, gate_pos, gate.trigger_distance);

        let was_open = gate.open;

        // Edge detection fires in both modes.
        if near && !gate.inside {
            gate.inside = true;
            events.push(SimEvent::GateApproached { id: entity.id });
            if gate.mode == GateMode::Auto {
                if let Some(timer) = gate.close_timer.take() {
                    scheduler.cancel(timer);
                }
                gate.open = true;
            }
        } else if !near && gate.inside {
            gate.inside = false;
            events.push(SimEvent::GateLeft { id: entity.id });
            if gate.mode == GateMode::Auto {
                if gate.close_delay > 0.0 {
                    gate.close_timer = Some(scheduler.schedule(gate.close_delay));
                } else {
                    gate.open = false;
                }
            }
        }

        // Delayed close lands here.
        if let Some(timer) = gate.close_timer {
            if scheduler.just_fired(timer) {
                gate.close_timer = None;
                if gate.mode == GateMode::Auto {
                    gate.open = false;
                }
            }
        }

        // External mode: the supplied value is authoritative every tick.
        if let GateMode::External(open) = gate.mode {
            gate.open = open;
        }

        if gate.open != was_open {
            events.push(if gate.open {
                SimEvent::GateOpened { id: entity.id }
            } else {
                SimEvent::GateClosed { id: entity.id }
            });
        }

        // Swing the latch; the renderer reads the eased angle off the
        // entity's rotation channel.
        let target = if gate.open { 1.0 } else { 0.0 };
        let step = dt / GATE_ANIM_TIME;
        if gate.anim_t < target {
            gate.anim_t = (gate.anim_t + step).min(target);
        } else if gate.anim_t > target {
            gate.anim_t = (gate.anim_t - step).max(target);
        }
        entity.rotation = Easing::QuadInOut.apply(gate.anim_t) * FRAC_PI_2;
    }
}

/// Switch a gate between automatic and externally-controlled state.
/// `None` returns ownership to the proximity logic.
pub fn set_gate_override(world: &mut WorldState, tag: &str, open: Option<bool>) {
    use crate::components::gate::GateMode;

    if let Some(entity) = world.scene.find_by_tag_mut(tag) {
        if let Some(gate) = entity.gate.as_mut() {
            gate.mode = match open {
                Some(value) => GateMode::External(value),
                None => GateMode::Auto,
            };
        }
    }
}
