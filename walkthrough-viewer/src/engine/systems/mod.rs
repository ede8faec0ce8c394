//! Runtime support systems.

/// FPS overlay text updates from the frame-time diagnostics.
pub mod fps_tracking;
