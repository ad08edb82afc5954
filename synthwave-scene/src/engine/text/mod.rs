//! Cycling title text.
//!
//! Titles fade in, hold, fade out and are replaced by the next string. The
//! state machine is independent of rendering; the overlay system projects
//! each live title into screen space.

/// Per-entity fade state machine.
pub mod fade;

/// Font readiness, string rotation and entity lifecycle.
pub mod cycler;

/// Screen-space placement of title text.
pub mod overlay;
