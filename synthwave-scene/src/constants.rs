/// Asset paths resolved relative to the `assets/` directory.
pub mod path;

/// Fixed render settings that are not part of a scene profile.
pub mod render_settings;
