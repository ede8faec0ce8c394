//! Keyboard-driven walkthrough camera.
//!
//! Tracks held movement keys, integrates them into a walk pose every
//! rendered frame, and eases the camera transform toward that pose.

/// Ordered set of currently-held movement keys.
pub mod held_keys;

/// Key bindings, held-key tracking systems and per-frame pose integration.
pub mod keyboard_rotate;

/// Integrated camera pose resource and smoothed transform sync.
pub mod walk_state;
