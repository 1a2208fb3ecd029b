use bytemuck::{Pod, Zeroable};

use crate::components::light::LightPhase;

/// Unique identifier for an entity in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// A simulation event produced during a tick.
///
/// Systems push these into the context's per-frame queue; Rust consumers
/// read the queue directly, the browser reads the packed [`EventRecord`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// The player crossed into a trigger zone.
    ZoneEntered { zone: String },
    /// The player left a trigger zone (past its exit radius).
    ZoneExited { zone: String },
    /// A traffic light advanced to a new phase.
    LightChanged { id: EntityId, phase: LightPhase },
    /// The player came within a gate's trigger distance.
    GateApproached { id: EntityId },
    /// The player moved back out of a gate's trigger distance.
    GateLeft { id: EntityId },
    /// A gate's visible state flipped to open.
    GateOpened { id: EntityId },
    /// A gate's visible state flipped to closed.
    GateClosed { id: EntityId },
    /// A car left the world bounds and reappeared behind the opposite edge.
    CarRespawned { id: EntityId },
    /// A game-defined event forwarded to the UI layer untouched.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// Wire form of a [`SimEvent`]: 4 floats written to the SharedArrayBuffer.
/// `kind` identifies the event, `a`/`b`/`c` carry the payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EventRecord {
    pub const FLOATS: usize = 4;
}

/// Event kind codes shared with the TypeScript consumer.
pub const EVENT_ZONE_ENTERED: u32 = 1;
pub const EVENT_ZONE_EXITED: u32 = 2;
pub const EVENT_LIGHT_CHANGED: u32 = 3;
pub const EVENT_GATE_APPROACHED: u32 = 4;
pub const EVENT_GATE_LEFT: u32 = 5;
pub const EVENT_GATE_OPENED: u32 = 6;
pub const EVENT_GATE_CLOSED: u32 = 7;
pub const EVENT_CAR_RESPAWNED: u32 = 8;
/// Game-defined event kinds are offset past the engine's range.
pub const EVENT_CUSTOM_BASE: u32 = 100;

impl SimEvent {
    /// Pack into the wire record. Zone ids are resolved to registration
    /// slots by the caller, since the string id never crosses the wire.
    pub fn pack(&self, zone_slot: impl Fn(&str) -> u32) -> EventRecord {
        match self {
            SimEvent::ZoneEntered { zone } => EventRecord {
                kind: EVENT_ZONE_ENTERED as f32,
                a: zone_slot(zone) as f32,
                ..Default::default()
            },
            SimEvent::ZoneExited { zone } => EventRecord {
                kind: EVENT_ZONE_EXITED as f32,
                a: zone_slot(zone) as f32,
                ..Default::default()
            },
            SimEvent::LightChanged { id, phase } => EventRecord {
                kind: EVENT_LIGHT_CHANGED as f32,
                a: id.0 as f32,
                b: phase.index() as f32,
                ..Default::default()
            },
            SimEvent::GateApproached { id } => EventRecord {
                kind: EVENT_GATE_APPROACHED as f32,
                a: id.0 as f32,
                ..Default::default()
            },
            SimEvent::GateLeft { id } => EventRecord {
                kind: EVENT_GATE_LEFT as f32,
                a: id.0 as f32,
                ..Default::default()
            },
            SimEvent::GateOpened { id } => EventRecord {
                kind: EVENT_GATE_OPENED as f32,
                a: id.0 as f32,
                ..Default::default()
            },
            SimEvent::GateClosed { id } => EventRecord {
                kind: EVENT_GATE_CLOSED as f32,
                a: id.0 as f32,
                ..Default::default()
            },
            SimEvent::CarRespawned { id } => EventRecord {
                kind: EVENT_CAR_RESPAWNED as f32,
                a: id.0 as f32,
                ..Default::default()
            },
            SimEvent::Custom { kind, a, b, c } => EventRecord {
                kind: (EVENT_CUSTOM_BASE + kind) as f32,
                a: *a,
                b: *b,
                c: *c,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_record_is_4_floats() {
        assert_eq!(std::mem::size_of::<EventRecord>(), 16);
        assert_eq!(EventRecord::FLOATS, 4);
    }

    #[test]
    fn zone_event_packs_slot() {
        let ev = SimEvent::ZoneEntered {
            zone: "bakery".into(),
        };
        let rec = ev.pack(|id| if id == "bakery" { 7 } else { 0 });
        assert_eq!(rec.kind, EVENT_ZONE_ENTERED as f32);
        assert_eq!(rec.a, 7.0);
    }
}
