use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Mutable per-session state written by input events and read by the next
/// frame tick.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AnimationContext {
    /// Pointer offset from the viewport centre, scaled by the profile's
    /// pointer divisors.
    pub pointer: Vec2,
    pub half_extent: Vec2,
    pub aspect: f32,
}

impl AnimationContext {
    pub fn new(width: f32, height: f32) -> Self {
        let mut context = Self {
            pointer: Vec2::ZERO,
            half_extent: Vec2::ZERO,
            aspect: 1.0,
        };
        context.resized(width, height);
        context
    }

    pub fn pointer_moved(&mut self, cursor: Vec2, divisor: Vec2) {
        self.pointer = (cursor - self.half_extent) / divisor;
    }

    pub fn resized(&mut self, width: f32, height: f32) {
        self.half_extent = Vec2::new(width, height) * 0.5;
        // Minimised windows report a zero height.
        if height > 0.0 {
            self.aspect = width / height;
        }
    }
}

/// Random source for streak respawns and star placement.
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

impl SceneRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_at_centre_has_no_offset() {
        let mut context = AnimationContext::new(1920.0, 1080.0);
        context.pointer_moved(Vec2::new(960.0, 540.0), Vec2::new(1000.0, 800.0));

        assert_eq!(context.pointer, Vec2::ZERO);
    }

    #[test]
    fn pointer_offset_is_scaled_per_axis() {
        let mut context = AnimationContext::new(1000.0, 800.0);
        context.pointer_moved(Vec2::new(1000.0, 0.0), Vec2::new(1000.0, 800.0));

        assert_eq!(context.pointer, Vec2::new(0.5, -0.5));
    }

    #[test]
    fn resize_updates_extent_and_aspect() {
        let mut context = AnimationContext::new(800.0, 600.0);
        context.resized(1200.0, 400.0);

        assert_eq!(context.half_extent, Vec2::new(600.0, 200.0));
        assert_eq!(context.aspect, 3.0);
    }

    #[test]
    fn zero_height_keeps_previous_aspect() {
        let mut context = AnimationContext::new(800.0, 400.0);
        context.resized(800.0, 0.0);

        assert_eq!(context.aspect, 2.0);
    }
}
