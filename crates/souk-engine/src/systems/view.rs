use crate::core::world::WorldState;
use crate::renderer::instance::{ViewBuffer, ViewInstance};
use crate::renderer::project::project;

/// Build the view buffer from the world: project every active entity
/// relative to the player, cull, then order back-to-front for painting.
///
/// Call once per frame, after every system has run, so the DOM renderer
/// sees this tick's positions.
pub fn build_view_buffer(world: &WorldState, buffer: &mut ViewBuffer) {
    buffer.clear();

    let player = world.player;
    for entity in world.scene.iter() {
        if !entity.active {
            continue;
        }

        let projected = project(entity.position, player.position, player.yaw, entity.kind);
        if !projected.visible {
            continue;
        }

        buffer.push(ViewInstance {
            screen_x: projected.screen_x,
            screen_y: projected.screen_y,
            scale: projected.scale * entity.scale,
            opacity: projected.opacity,
            z_order: projected.z_order as f32,
            kind: entity.kind.code() as f32,
            rotation: entity.rotation,
            entity_id: entity.id.0 as f32,
        });
    }

    buffer.sort_for_paint();
}
