/// Scene profile loaded at startup. Falls back to the built-in portfolio preset
/// when missing or invalid.
pub const SCENE_CONFIG_PATH: &str = "config/synthwave.json";

pub const SUN_SHADER_PATH: &str = "shaders/sun_gradient.wgsl";
