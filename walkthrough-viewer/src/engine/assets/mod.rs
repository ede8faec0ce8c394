//! Scene description assets.
//!
//! The viewer is data-driven: a JSON manifest describes the camera spawn,
//! ground plane, lighting and model imports.

/// Scene manifest loaded as a Bevy asset. Mirrors the JSON structure.
pub mod scene_manifest;
