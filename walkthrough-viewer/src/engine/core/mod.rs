//! Core application setup and state management.
//!
//! Handles window configuration, plugin wiring and the loading-to-running
//! state transition for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
pub mod app_setup;

/// Application state machine gating loading and runtime systems.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
