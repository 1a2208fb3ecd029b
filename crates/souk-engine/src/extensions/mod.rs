// extensions/mod.rs
//
// Optional extension modules, decoupled from Entity/Scene internals.

pub mod easing;

pub use easing::{ease, lerp, Easing};
