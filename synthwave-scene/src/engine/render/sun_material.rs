use bevy::{
    color::ColorToComponents,
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef, ShaderType},
};

use crate::constants::path::SUN_SHADER_PATH;
use crate::engine::assets::scene_config::{SunConfig, colour};

#[derive(Debug, Clone, Copy, ShaderType)]
pub struct SunGradient {
    pub top_colour: Vec4,
    pub bottom_colour: Vec4,
    /// Rise start, rise end, fall start, fall end of the wide horizon band.
    pub fade_band: Vec4,
    pub offset: f32,
    pub exponent: f32,
}

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct SunMaterial {
    #[uniform(0)]
    pub gradient: SunGradient,
}

impl SunMaterial {
    pub fn from_config(config: &SunConfig) -> Self {
        Self {
            gradient: SunGradient {
                top_colour: colour(&config.top_colour).to_linear().to_vec4(),
                bottom_colour: colour(&config.bottom_colour).to_linear().to_vec4(),
                fade_band: Vec4::from_array(config.fade_band),
                offset: config.offset,
                exponent: config.exponent,
            },
        }
    }
}

impl Material for SunMaterial {
    fn fragment_shader() -> ShaderRef {
        SUN_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::scene_config::SceneConfig;

    #[test]
    fn gradient_carries_profile_band_and_shape() {
        let material = SunMaterial::from_config(&SceneConfig::legacy().sun);

        assert_eq!(material.gradient.fade_band, Vec4::new(0.0, 0.16, 0.01, 0.40));
        assert_eq!(material.gradient.offset, 0.8);
        assert_eq!(material.gradient.exponent, 0.6);
        assert_eq!(material.gradient.top_colour.w, 1.0);
    }
}
