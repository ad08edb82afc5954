//! Asset loading and scene initialisation.
//!
//! The profile gates the whole scene. Font and glow texture are optional:
//! the frame loop runs without them and picks them up once they resolve.

/// Scene profile loading, validation and fallback to the built-in preset.
pub mod profile_loader;

/// Builds every scene entity once the profile is known.
pub mod scene_creator;

/// Load-state watchers for the optional font and glow texture.
pub mod optional_assets;
