use glam::Vec3;

use crate::api::types::{EntityId, SimEvent};
use crate::core::rng::Rng;
use crate::core::timer::Scheduler;
use crate::core::world::WorldState;

/// Configuration for the simulation, provided by the game.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Half-width of the square world; entities respawn past ±bound.
    pub world_bound: f32,
    /// World units the player moves per directional input event.
    pub move_step: f32,
    /// Radians of yaw per unit of rotate input.
    pub turn_step: f32,
    /// Global multiplier on autonomous entity speeds.
    pub motion_scale: f32,
    /// Seconds a car stays off the board before respawning.
    pub respawn_cooldown: f32,
    /// Player spawn transform.
    pub player_spawn: Vec3,
    pub player_yaw: f32,
    /// Maximum number of view instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of sim events per frame (default: 32).
    pub max_events: usize,
    /// Seed for the injectable RNG, so tests are deterministic.
    pub rng_seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_bound: 120.0,
            move_step: 0.8,
            turn_step: 0.04,
            motion_scale: 1.0,
            respawn_cooldown: 1.0,
            player_spawn: Vec3::ZERO,
            player_yaw: 0.0,
            max_instances: 256,
            max_events: 32,
            rng_seed: 42,
        }
    }
}

/// The core contract every town must fulfill.
pub trait Game {
    /// Return simulation configuration. Called once before init.
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// Setup initial state: spawn entities, register zones.
    fn init(&mut self, ctx: &mut SimContext);

    /// The game-logic tick, run before the engine systems each step.
    /// Town-level rules live here (e.g. cars obeying red lights).
    fn update(&mut self, ctx: &mut SimContext, input: &crate::input::queue::InputQueue);
}

/// Mutable access to simulation state, passed to Game::init and
/// Game::update and threaded through every system.
pub struct SimContext {
    pub world: WorldState,
    pub scheduler: Scheduler,
    pub rng: Rng,
    /// Events produced this frame, drained by the bridge after the tick.
    pub events: Vec<SimEvent>,
    next_id: u32,
}

impl SimContext {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            world: WorldState::new(config.player_spawn, config.player_yaw, config.world_bound),
            scheduler: Scheduler::new(),
            rng: Rng::new(config.rng_seed),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a simulation event for this frame's consumers.
    pub fn emit(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data. Called at the top of every frame.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Tear the world down to a clean slate: every pending timer is
    /// cancelled, so nothing can fire into the rebuilt scene. The runner
    /// follows this with `Game::init`.
    pub fn reset(&mut self) {
        self.scheduler.clear();
        self.events.clear();
        self.world.clear();
        self.next_id = 1;
    }
}
