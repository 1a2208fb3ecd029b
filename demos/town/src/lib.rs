use wasm_bindgen::prelude::*;

use souk_engine::{InputEvent, MoveDir};

mod game;
pub use game::{TownGame, BAZAAR_GATE, CUSTOM_GATE_OVERRIDE};

souk_web::export_game!(TownGame, "souk-town");
