//! Scene profile definitions.
//!
//! A profile describes every tunable of the scene (camera, bloom, grid,
//! streaks, stars, sun, arrow, text and page glue) and is loaded from JSON.

/// Profile types, validation and colour helpers.
pub mod scene_config;

/// Built-in `portfolio` and `legacy` profiles.
pub mod presets;
