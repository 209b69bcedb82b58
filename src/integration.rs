//! Integration layer
//!
//! Wires the core to the outside world:
//! - Runtime owning state and the message queues
//! - Renderer drawing a frame from state
//! - AppRunner driving terminal events through both

pub mod app_runner;
pub mod renderer;
pub mod runtime;
