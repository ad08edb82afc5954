//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and the per-session animation context shared by all frame systems.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app, registers the profile asset type and schedules the
/// loading and frame systems for both native and WASM targets.
pub mod app_setup;

/// Application state machine from profile loading to the running scene.
pub mod app_state;

/// Pointer offsets, viewport extents and the scene RNG.
pub mod context;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
