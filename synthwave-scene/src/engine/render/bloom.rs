use bevy::core_pipeline::bloom::{Bloom, BloomPrefilter};

use crate::constants::render_settings::BLOOM_INTENSITY_SCALE;
use crate::engine::assets::scene_config::BloomConfig;

/// Map profile bloom parameters onto Bevy's bloom pass.
///
/// Strength scales the intensity, threshold drives the prefilter and radius
/// maps onto the high-pass frequency (larger radius, wider glow).
pub fn bloom_from_config(config: &BloomConfig) -> Bloom {
    Bloom {
        intensity: config.strength * BLOOM_INTENSITY_SCALE,
        high_pass_frequency: config.radius.clamp(0.0, 1.0),
        prefilter: BloomPrefilter {
            threshold: config.threshold,
            threshold_softness: 0.0,
        },
        ..Bloom::NATURAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stronger_profile_blooms_brighter() {
        let portfolio = bloom_from_config(&BloomConfig::default());
        let legacy = bloom_from_config(&BloomConfig {
            threshold: 0.21,
            strength: 1.5,
            radius: 0.55,
        });

        assert!(legacy.intensity > portfolio.intensity);
        assert_eq!(portfolio.prefilter.threshold, 0.021);
        assert_eq!(legacy.high_pass_frequency, 0.55);
    }

    #[test]
    fn radius_is_clamped_to_frequency_range() {
        let bloom = bloom_from_config(&BloomConfig {
            threshold: 0.0,
            strength: 1.0,
            radius: 3.0,
        });

        assert_eq!(bloom.high_pass_frequency, 1.0);
    }
}
