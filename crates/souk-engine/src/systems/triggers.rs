//! Proximity triggers: edge-detected enter/exit against registered zones,
//! with a hysteresis band so boundary jitter never double-fires.

use glam::Vec3;

use crate::api::types::SimEvent;
use crate::components::zone::ZoneKind;
use crate::core::world::WorldState;

/// Evaluate every trigger zone against the player position and emit
/// enter/exit events for edges crossed this tick.
///
/// A zone becomes active when the player comes within its enter
/// threshold and stays active until the player passes the exit threshold;
/// the band in between is dead on purpose. Solid and inert zones never
/// fire. Runs after motion, so it sees this tick's positions.
pub fn tick_zones(world: &mut WorldState, events: &mut Vec<SimEvent>) {
    let player = world.player.position;
    for zone in world.zones_mut() {
        if zone.kind != ZoneKind::Trigger || zone.is_inert() {
            continue;
        }
        if !zone.inside && zone.contains(player) {
            zone.inside = true;
            log::debug!("zone '{}' entered", zone.id);
            events.push(SimEvent::ZoneEntered {
                zone: zone.id.clone(),
            });
        } else if zone.inside && zone.outside_exit(player) {
            zone.inside = false;
            log::debug!("zone '{}' exited", zone.id);
            events.push(SimEvent::ZoneExited {
                zone: zone.id.clone(),
            });
        }
    }
}

/// Whether `position` lies inside any solid (wall/object) zone. The
/// controller uses this to cancel a step that would walk through a wall.
pub fn blocked(world: &WorldState, position: Vec3) -> bool {
    world
        .zones()
        .iter()
        .any(|z| z.kind.is_solid() && z.contains(position))
}
