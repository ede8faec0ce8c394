//! Manifest loading and scene construction.
//!
//! Manages the loading pipeline from manifest parsing through camera
//! initialisation to final scene spawning with progress tracking.

/// Scene manifest loading from JSON configuration.
///
/// Initialises the walk pose once the manifest is parsed.
pub mod manifest_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;

/// Ground, lighting, camera and model spawning once the manifest is ready.
pub mod scene_builder;
