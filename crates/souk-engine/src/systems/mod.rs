pub mod controller;
pub mod gate;
pub mod motion;
pub mod traffic;
pub mod triggers;
pub mod view;
