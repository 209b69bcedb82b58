//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Section components and overlays
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
