//! Per-frame runtime systems outside the scene entities themselves.
//!
//! Input tracking feeds the animation context; the frame set fixes the order
//! in which each tick reads and advances state.

/// Frame ordering: input, camera, advance, present.
pub mod frame;

/// FPS overlay for native builds.
///
/// Spawns the overlay node and refreshes it from frame time diagnostics.
pub mod fps_tracking;

/// Pointer and window resize tracking into the animation context.
pub mod input;
