pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod extensions;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use crate::api::game::{Game, SimConfig, SimContext};
pub use crate::api::types::{EntityId, EventRecord, SimEvent};
pub use crate::assets::manifest::SceneManifest;
pub use crate::bridge::protocol::ProtocolLayout;
pub use crate::components::car::{CarComponent, Heading};
pub use crate::components::entity::{Entity, EntityKind};
pub use crate::components::gate::{GateComponent, GateMode};
pub use crate::components::light::{LightPhase, TrafficLightComponent};
pub use crate::components::zone::{TriggerZone, ZoneKind, ZoneMetric, ZoneShape};
pub use crate::core::rng::Rng;
pub use crate::core::scene::Scene;
pub use crate::core::time::{Clock, TickAccumulator};
pub use crate::core::timer::{Scheduler, TimerId};
pub use crate::core::world::{PlayerState, WorldState};
pub use crate::input::queue::{InputEvent, InputQueue, MoveDir};
pub use crate::renderer::instance::{ViewBuffer, ViewInstance};
pub use crate::renderer::project::{normalize_angle, project, Projected};
pub use crate::systems::view::build_view_buffer;

// Extensions — decoupled optional systems
pub use crate::extensions::{ease, lerp, Easing};
