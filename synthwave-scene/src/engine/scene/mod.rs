//! Scene geometry builders and their per-frame animation systems.
//!
//! Everything here is built once when the scene starts and only transformed
//! afterwards; nothing is allocated per frame.

/// Pulsing arrow indicator.
pub mod arrow;

/// Bent ground grid tiles and the endless scroll between them.
pub mod grid;

/// Point-cloud starfield with a slow tumble.
pub mod stars;

/// Fixed-size light streak pool recycled on the near threshold.
pub mod streaks;

/// Gradient sun sphere and its optional additive glow.
pub mod sun;
