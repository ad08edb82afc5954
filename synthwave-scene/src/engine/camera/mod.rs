//! Scene camera.
//!
//! A fixed-position perspective camera whose look target follows the pointer.

/// Camera spawn (HDR + bloom) and pointer-driven look-at system.
pub mod look_camera;
