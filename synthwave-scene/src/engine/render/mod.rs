//! Render-side configuration: the sun's gradient material and the bloom pass.

/// Bloom settings derived from the scene profile.
pub mod bloom;

/// Custom WGSL material for the striped gradient sun.
pub mod sun_material;
