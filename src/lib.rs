//! # Folio - a portfolio in the terminal
//!
//! A terminal rendition of a personal portfolio site, built with Ratatui.
//! Sections show static content; the contact form posts to a backend.
//! The library follows an Elm-like architecture for predictable state
//! management.
//!
//! ## Architecture Overview
//!
//! - **State** ([`core::state`]): application state
//! - **Message** ([`core::msg`]): events that can change the state
//! - **Update** ([`core::update`]): pure state transitions
//! - **Command** ([`core::cmd`]): side effects (HTTP, notifications, terminal)
//! - **View** ([`presentation::components`]): rendering from current state
//!
//! ## Example Usage
//!
//! ```rust
//! use folio::{
//!     core::msg::ui::UiMsg, domain::ui::Section, update, AppState, Msg,
//! };
//!
//! let state = AppState::default();
//! let (state, commands) = update(Msg::Ui(UiMsg::GoToSection(Section::Contact)), state);
//!
//! assert_eq!(state.ui.section, Section::Contact);
//! assert!(commands.is_empty());
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
