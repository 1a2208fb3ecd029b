use souk_engine::systems::{controller, gate, motion, traffic, triggers, view};
use souk_engine::{
    Clock, EventRecord, Game, InputEvent, InputQueue, ProtocolLayout, SimConfig, SimContext,
    TickAccumulator, ViewBuffer,
};

/// Generic simulation runner that wires up the engine loop.
///
/// Each concrete town (e.g., `town`) creates a `thread_local!` SimRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct SimRunner<G: Game> {
    game: G,
    ctx: SimContext,
    input: InputQueue,
    view_buffer: ViewBuffer,
    clock: Clock,
    accumulator: TickAccumulator,
    config: SimConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame_counter: u32,
    /// Flat buffer of packed event records for SharedArrayBuffer reads.
    event_buffer: Vec<EventRecord>,
}

impl<G: Game> SimRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let accumulator = TickAccumulator::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let view_buffer = ViewBuffer::with_capacity(config.max_instances);
        let event_buffer = Vec::with_capacity(config.max_events);
        let ctx = SimContext::new(&config);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            view_buffer,
            clock: Clock::new(),
            accumulator,
            config,
            layout,
            initialized: false,
            frame_counter: 0,
            event_buffer,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Tear everything down and rebuild from the initial scene. Every
    /// pending timer dies with the old world, so nothing stale fires
    /// into the new one.
    pub fn reset(&mut self) {
        self.ctx.reset();
        self.input.drain();
        self.view_buffer.clear();
        self.event_buffer.clear();
        self.game.init(&mut self.ctx);
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Drive one animation-callback frame from an absolute timestamp.
    pub fn frame(&mut self, now_seconds: f64) {
        let dt = self.clock.frame(now_seconds);
        self.tick(dt);
    }

    /// Run one frame: apply input, step the simulation, publish buffers.
    ///
    /// Within each fixed step the order is fixed — game logic, timers,
    /// motion, lights, gates, triggers — so trigger state always sees the
    /// step's final positions, and projection runs only after all steps.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data.
        self.ctx.clear_frame_data();

        // Each queued event is one fixed step of movement; apply once per
        // frame, not once per fixed step.
        let reset_requested = controller::apply_movement(&self.input, &self.config, &mut self.ctx.world);
        if reset_requested {
            self.reset();
            return;
        }

        let steps = self.accumulator.accumulate(dt);
        for _ in 0..steps {
            let step_dt = self.accumulator.dt();

            self.game.update(&mut self.ctx, &self.input);

            self.ctx.scheduler.tick(step_dt);
            motion::tick_motion(
                &mut self.ctx.world,
                &mut self.ctx.scheduler,
                &mut self.ctx.rng,
                &mut self.ctx.events,
                &self.config,
                step_dt,
            );
            traffic::tick_lights(
                &mut self.ctx.world,
                &mut self.ctx.scheduler,
                &mut self.ctx.events,
            );
            gate::tick_gates(
                &mut self.ctx.world,
                &mut self.ctx.scheduler,
                &mut self.ctx.events,
                step_dt,
            );
            triggers::tick_zones(&mut self.ctx.world, &mut self.ctx.events);
        }

        // Drain input after update.
        self.input.drain();

        // Publish this frame's view of the world.
        view::build_view_buffer(&self.ctx.world, &mut self.view_buffer);

        self.event_buffer.clear();
        for event in self.ctx.events.iter().take(self.config.max_events) {
            let record = event.pack(|id| self.ctx.world.zone_slot(id).unwrap_or(u32::MAX));
            self.event_buffer.push(record);
        }

        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// Stop the frame clock; callbacks that still arrive are no-ops.
    pub fn stop(&mut self) {
        self.clock.stop();
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SimContext {
        &mut self.ctx
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.view_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.view_buffer.instance_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.event_buffer.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.event_buffer.len() as u32
    }

    // ---- Player pose accessors for the DOM minimap ----

    pub fn player_x(&self) -> f32 {
        self.ctx.world.player.position.x
    }

    pub fn player_z(&self) -> f32 {
        self.ctx.world.player.position.z
    }

    pub fn player_yaw(&self) -> f32 {
        self.ctx.world.player.yaw
    }
}
