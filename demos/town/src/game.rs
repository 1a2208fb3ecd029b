//! The virtual souk: scene assembly and town-level rules.

use glam::{Vec2, Vec3};
use souk_engine::systems::gate::set_gate_override;
use souk_engine::{
    Game, InputEvent, InputQueue, LightPhase, SceneManifest, SimConfig, SimContext,
};

/// Cars brake when a non-green light is within this XZ distance.
const LIGHT_STOP_RADIUS: f32 = 12.0;

/// Custom input kind: override the bazaar gate.
/// `a < 0` returns it to automatic, `a == 0` forces shut, `a > 0` forces open.
pub const CUSTOM_GATE_OVERRIDE: u32 = 1;

/// Tag of the gate the UI override button controls.
pub const BAZAAR_GATE: &str = "bazaar-gate";

pub struct TownGame;

impl TownGame {
    pub fn new() -> Self {
        TownGame
    }
}

impl Default for TownGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TownGame {
    fn config(&self) -> SimConfig {
        SimConfig {
            player_spawn: Vec3::new(0.0, 0.0, -40.0),
            ..Default::default()
        }
    }

    fn init(&mut self, ctx: &mut SimContext) {
        let manifest = SceneManifest::from_json(include_str!("town.json"))
            .expect("embedded town manifest is valid");
        manifest.spawn_into(ctx);
    }

    fn update(&mut self, ctx: &mut SimContext, input: &InputQueue) {
        for event in input.iter() {
            if let InputEvent::Custom { kind, a, .. } = *event {
                if kind == CUSTOM_GATE_OVERRIDE {
                    let mode = if a < 0.0 { None } else { Some(a > 0.0) };
                    set_gate_override(&mut ctx.world, BAZAAR_GATE, mode);
                }
            }
        }

        // Cars obey the lights: anything not green within the stop radius
        // holds the car until the light turns.
        let lights: Vec<(Vec3, LightPhase)> = ctx
            .world
            .scene
            .iter()
            .filter_map(|e| e.light.as_ref().map(|l| (e.position, l.phase)))
            .collect();

        for entity in ctx.world.scene.iter_mut() {
            let pos = entity.position;
            let Some(car) = entity.car.as_mut() else {
                continue;
            };
            if car.respawn.is_some() {
                continue;
            }
            car.stopped = lights.iter().any(|(light_pos, phase)| {
                *phase != LightPhase::Green
                    && Vec2::new(pos.x - light_pos.x, pos.z - light_pos.z).length()
                        <= LIGHT_STOP_RADIUS
            });
        }
    }
}
