pub mod runner;

pub use runner::SimRunner;

/// Generate all `#[wasm_bindgen]` exports for a town.
///
/// This macro eliminates the per-game boilerplate by generating:
/// - `thread_local!` storage for the SimRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, frame loop, input handlers, buffer
///   accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use souk_engine::*;
/// use souk_web::SimRunner;
///
/// mod game;
/// use game::TownGame;
///
/// souk_web::export_game!(TownGame, "souk-town");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `souk_engine::Game`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SimRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SimRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Simulation not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::SimRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        /// Drive one animation frame from `performance.now()` milliseconds.
        #[wasm_bindgen]
        pub fn game_frame(now_ms: f64) {
            with_runner(|r| r.frame(now_ms / 1000.0));
        }

        /// Step with an explicit delta, for hosts that compute their own.
        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        /// 0 = forward, 1 = backward, 2 = left, 3 = right.
        #[wasm_bindgen]
        pub fn game_move(dir: u32) {
            let dir = match dir {
                0 => MoveDir::Forward,
                1 => MoveDir::Backward,
                2 => MoveDir::Left,
                _ => MoveDir::Right,
            };
            with_runner(|r| r.push_input(InputEvent::Move { dir }));
        }

        #[wasm_bindgen]
        pub fn game_rotate(dx: f32, dy: f32) {
            with_runner(|r| r.push_input(InputEvent::Rotate { dx, dy }));
        }

        #[wasm_bindgen]
        pub fn game_reset() {
            with_runner(|r| r.push_input(InputEvent::Reset));
        }

        #[wasm_bindgen]
        pub fn game_stop() {
            with_runner(|r| r.stop());
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_event_count() -> u32 {
            with_runner(|r| r.event_count())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.layout().buffer_total_floats as u32)
        }

        // ---- Player pose for the DOM minimap ----

        #[wasm_bindgen]
        pub fn get_player_x() -> f32 {
            with_runner(|r| r.player_x())
        }

        #[wasm_bindgen]
        pub fn get_player_z() -> f32 {
            with_runner(|r| r.player_z())
        }

        #[wasm_bindgen]
        pub fn get_player_yaw() -> f32 {
            with_runner(|r| r.player_yaw())
        }
    };
}
