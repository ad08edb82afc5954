use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::page::contact_icons::ContactIcon;

/// Reasons a scene profile is rejected. A rejected profile is replaced by the
/// portfolio preset, so none of these are fatal.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid colour '{value}' for {field}")]
    InvalidColour { field: &'static str, value: String },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("text fade step must be within (0, 1], got {0}")]
    FadeStep(f32),
}

/// Complete description of one synthwave scene.
///
/// Every section defaults to the portfolio preset, so a JSON profile only has
/// to carry the values it changes.
#[derive(Resource, Asset, TypePath, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Fixed RNG seed for reproducible streak and star layouts.
    pub seed: Option<u64>,
    pub camera: CameraConfig,
    pub bloom: BloomConfig,
    pub grid: GridConfig,
    pub streaks: StreakConfig,
    pub stars: StarConfig,
    pub sun: SunConfig,
    pub arrow: ArrowConfig,
    pub text: TextConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Look-target deflection per unit of pointer offset (x, y).
    pub look_gain: [f32; 2],
    /// Distance ahead of the camera the look target sits at.
    pub look_ahead: f32,
    /// Pixel distances from the viewport centre that map to one unit of
    /// pointer offset.
    pub pointer_divisor: [f32; 2],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    pub threshold: f32,
    pub strength: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Tile width, also the scroll span between the two tiles.
    pub size: f32,
    /// Tile depth as a multiple of `size`.
    pub depth_ratio: f32,
    pub divisions: u32,
    pub bend_exponent: f32,
    pub bend_height: f32,
    pub height: f32,
    pub scroll_step: f32,
    pub wrap_threshold: f32,
    pub colour: String,
}

impl GridConfig {
    pub fn span(&self) -> f32 {
        self.size
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StreakConfig {
    pub count: usize,
    pub length: f32,
    pub radius: f32,
    pub resolution: u32,
    /// Radius of the circle around the view axis streaks respawn on.
    pub spawn_radius: f32,
    /// How far behind the spawn circle (in multiples of its radius) a
    /// recycled streak is placed.
    pub depth_factor: f32,
    pub step: f32,
    pub near_threshold: f32,
    pub colour: String,
}

impl StreakConfig {
    /// Deepest forward coordinate a streak can ever be placed at.
    pub fn far_bound(&self) -> f32 {
        -self.spawn_radius * self.depth_factor
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    pub count: usize,
    pub spread: f32,
    pub depth: f32,
    pub spin: f32,
    pub colour: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    pub radius: f32,
    pub sectors: u32,
    pub stacks: u32,
    pub position: [f32; 3],
    pub initial_yaw: f32,
    pub spin: f32,
    pub top_colour: String,
    pub bottom_colour: String,
    pub offset: f32,
    pub exponent: f32,
    /// Edges of the wide transparent band near the horizon:
    /// rise start, rise end, fall start, fall end (in texture v).
    pub fade_band: [f32; 4],
    pub glow_texture: Option<String>,
    pub glow_colour: String,
    pub glow_scale: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArrowConfig {
    pub size: f32,
    pub position: [f32; 3],
    /// Rotation about X in radians.
    pub tilt: f32,
    pub pulse_rate: f32,
    pub pulse_amplitude: f32,
    pub pulse_base: f32,
    pub colour: String,
}

/// World height of a text line.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
    /// Multiplied by the viewport aspect ratio, tracking resizes.
    AspectScaled(f32),
    Fixed(f32),
}

impl TextSize {
    pub fn world_size(&self, aspect: f32) -> f32 {
        match *self {
            TextSize::AspectScaled(factor) => factor * aspect,
            TextSize::Fixed(size) => size,
        }
    }
}

/// How a text entity moves while it cycles through its fade states.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextMotion {
    Fade,
    /// Fade while sliding toward the camera by `step` per tick and growing by
    /// `growth` per tick.
    Drift { step: f32, growth: f32 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub strings: Vec<String>,
    pub fade_step: f32,
    pub hold_ticks: u32,
    pub anchor: [f32; 3],
    pub size: TextSize,
    pub colour: String,
    pub motion: TextMotion,
    /// Font loaded asynchronously. `None` uses Bevy's built-in font.
    pub font_path: Option<String>,
    /// Upper bound on simultaneously live text entities. Defaults to the
    /// number of strings.
    pub max_active: Option<usize>,
}

impl TextConfig {
    pub fn capacity(&self) -> usize {
        self.max_active.unwrap_or(self.strings.len())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactLink {
    pub icon: ContactIcon,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub canvas_selector: String,
    pub content_selector: String,
    pub icons_selector: String,
    pub close_selector: String,
    pub contacts: Vec<ContactLink>,
    pub biography_selector: String,
    pub biography: Vec<String>,
    pub biography_interval_secs: f32,
    pub character_stagger_secs: f32,
}

/// Parse a `#rrggbb` colour string.
pub fn parse_colour(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    Srgba::hex(value)
        .map(Color::from)
        .map_err(|_| ConfigError::InvalidColour {
            field,
            value: value.to_string(),
        })
}

/// Colour lookup for profiles that already passed [`SceneConfig::validate`].
pub fn colour(value: &str) -> Color {
    Srgba::hex(value).map(Color::from).unwrap_or(Color::WHITE)
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let colours = [
            ("grid.colour", &self.grid.colour),
            ("streaks.colour", &self.streaks.colour),
            ("stars.colour", &self.stars.colour),
            ("sun.top_colour", &self.sun.top_colour),
            ("sun.bottom_colour", &self.sun.bottom_colour),
            ("sun.glow_colour", &self.sun.glow_colour),
            ("arrow.colour", &self.arrow.colour),
            ("text.colour", &self.text.colour),
        ];
        for (field, value) in colours {
            parse_colour(field, value)?;
        }

        positive("camera.fov_degrees", self.camera.fov_degrees)?;
        positive("camera.pointer_divisor.x", self.camera.pointer_divisor[0])?;
        positive("camera.pointer_divisor.y", self.camera.pointer_divisor[1])?;
        positive("grid.size", self.grid.size)?;
        positive("grid.depth_ratio", self.grid.depth_ratio)?;
        positive("grid.divisions", self.grid.divisions as f32)?;
        positive("streaks.spawn_radius", self.streaks.spawn_radius)?;
        positive("streaks.step", self.streaks.step)?;
        positive("streaks.length", self.streaks.length)?;
        positive("streaks.radius", self.streaks.radius)?;
        positive("stars.spread", self.stars.spread)?;
        positive("stars.depth", self.stars.depth)?;
        positive("sun.radius", self.sun.radius)?;
        positive("page.biography_interval_secs", self.page.biography_interval_secs)?;

        if self.text.strings.is_empty() {
            return Err(ConfigError::Empty {
                field: "text.strings",
            });
        }
        if !(self.text.fade_step > 0.0 && self.text.fade_step <= 1.0) {
            return Err(ConfigError::FadeStep(self.text.fade_step));
        }

        Ok(())
    }
}
