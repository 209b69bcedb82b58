//! Domain logic
//!
//! This module contains domain-specific types and rules:
//! - Contact form record, submission lifecycle and errors
//! - Static portfolio content
//! - Notifications
//! - Text processing utilities
//! - Navigation sections

pub mod contact;
pub mod content;
pub mod notification;
pub mod text;
pub mod ui;
