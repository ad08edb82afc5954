use bevy::prelude::*;

pub const CLEAR_COLOUR: Color = Color::BLACK;

/// Equivalent of a soft 0x404040 ambient term.
pub const AMBIENT_COLOUR: Color = Color::srgb(0.25, 0.25, 0.25);
pub const AMBIENT_BRIGHTNESS: f32 = 80.0;

pub const FPS_FONT_SIZE: f32 = 16.0;

/// Scales the profile's bloom strength into Bevy's bloom intensity range.
pub const BLOOM_INTENSITY_SCALE: f32 = 0.24;
