//! Simulation logic for the house demo, kept free of rendering and input so
//! every behavior can be ticked and tested without an engine loop.
//!
//! The `game` crate owns the window and the frame loop; it calls into this
//! crate once per frame with the elapsed time and the sampled inputs.

pub mod components;
pub mod config;
pub mod facing;
pub mod movement;
pub mod npc;
pub mod room;

pub use components::*;
pub use config::*;
pub use facing::*;
pub use movement::*;
pub use npc::*;
pub use room::*;
