//! Shared tuning constants for the walkthrough viewer.

/// Camera input rates, clamps and smoothing factors.
pub mod camera;

/// Asset path roots for the scene manifest.
pub mod path;

/// Scene defaults for lighting and the ground plane.
pub mod render_settings;
