//! Scene entity construction.
//!
//! Linear use of the engine's mesh, material, light and scene-loading
//! APIs, driven entirely by the manifest.

/// Flat ground plane mesh and material.
pub mod ground;

/// Ambient plus directional lighting standing in for a hemispheric light.
pub mod lighting;

/// glTF scene imports placed per manifest entry.
pub mod models;
