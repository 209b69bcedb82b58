//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing and configuration
//! - Content loading
//! - Contact backend client and its background service

pub mod cli;
pub mod config;
pub mod contact_client;
pub mod contact_service;
pub mod content_provider;
pub mod notification;
pub mod tui;
