//! Built-in scene profiles.
//!
//! `portfolio` is the current look of the page; `legacy` keeps the earlier
//! square-tile layout with denser, shorter streaks and a wider sun glow.

use std::f32::consts::FRAC_PI_2;

use super::scene_config::*;
use crate::page::contact_icons::ContactIcon;

const TITLES: [&str; 15] = [
    "David Dahncke",
    "Freelancer",
    "Software Engineer",
    "Coach",
    "Consultant",
    "AI Creative",
    "C++",
    "Python",
    "Kotlin",
    "Java",
    "Swift",
    "C#",
    "Mobile",
    "Desktop",
    "Web",
];

const BIOGRAPHY_EN: &str = " Hello! I'm David, a passionate Software Engineer with expertise in developing innovative solutions. I specialize in AI, mobile, and web technologies, striving to blend creativity with technology to push the boundaries of what's possible. Let's connect and explore new horizons together!";

const BIOGRAPHY_DE: &str = "Hallo! Ich bin David, ein leidenschaftlicher Software Engineer mit Erfahrung in der Entwicklung innovativer Lösungen. Ich bin auf KI-, Mobile- und Web-Technologien spezialisiert und strebe danach, Kreativität mit Technologie zu verbinden, um die Grenzen des Möglichen zu erweitern. Lasst uns zusammenarbeiten und gemeinsam neue Horizonte erkunden!";

impl SceneConfig {
    pub fn portfolio() -> Self {
        Self {
            seed: None,
            camera: CameraConfig::default(),
            bloom: BloomConfig::default(),
            grid: GridConfig::default(),
            streaks: StreakConfig::default(),
            stars: StarConfig::default(),
            sun: SunConfig::default(),
            arrow: ArrowConfig::default(),
            text: TextConfig::default(),
            page: PageConfig::default(),
        }
    }

    pub fn legacy() -> Self {
        let mut config = Self::portfolio();

        config.bloom.threshold = 0.21;
        config.bloom.strength = 1.5;

        config.grid.size = 300.0;
        config.grid.depth_ratio = 1.0;
        config.grid.bend_exponent = 2.0;

        config.streaks.count = 250;
        config.streaks.length = 50.0;
        config.streaks.depth_factor = 1.0;

        config.sun.offset = 0.8;
        config.sun.exponent = 0.6;
        config.sun.fade_band = [0.0, 0.16, 0.01, 0.40];
        config.sun.glow_scale = 240.0;

        config.text.size = TextSize::Fixed(2.0);

        config
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 10.0, 20.0],
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            look_gain: [4.0, 2.0],
            look_ahead: 10.0,
            pointer_divisor: [1000.0, 800.0],
        }
    }
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            threshold: 0.021,
            strength: 1.25,
            radius: 0.55,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 600.0,
            depth_ratio: 2.0,
            divisions: 50,
            bend_exponent: 4.0,
            bend_height: 12.0,
            height: -1.0,
            scroll_step: 0.5,
            wrap_threshold: 150.0,
            colour: "#ff51c8".into(),
        }
    }
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            count: 150,
            length: 75.0,
            radius: 0.1,
            resolution: 32,
            spawn_radius: 500.0,
            depth_factor: 2.0,
            step: 5.0,
            near_threshold: 10.0,
            colour: "#ffffff".into(),
        }
    }
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            spread: 2000.0,
            depth: 2000.0,
            spin: 0.0005,
            colour: "#ffffff".into(),
        }
    }
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            radius: 64.0,
            sectors: 32,
            stacks: 32,
            position: [0.0, 80.0, -250.0],
            initial_yaw: 180.0,
            spin: 0.01,
            top_colour: "#ffab00".into(),
            bottom_colour: "#ff51c8".into(),
            offset: 0.4,
            exponent: 0.9,
            fade_band: [0.05, 0.26, 0.27, 0.40],
            glow_texture: Some("textures/glow_tex.png".into()),
            glow_colour: "#ff51c8".into(),
            glow_scale: 100.0,
        }
    }
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            size: 2.0,
            position: [0.0, -10.0, -10.0],
            // Quarter turn to lie flat, then the full 180 rad tilt the page
            // has always shipped with.
            tilt: FRAC_PI_2 + 180.0,
            pulse_rate: 5.0,
            pulse_amplitude: 0.1,
            pulse_base: 0.9,
            colour: "#ffffff".into(),
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            strings: TITLES.iter().map(|title| title.to_string()).collect(),
            fade_step: 0.01,
            hold_ticks: 60,
            anchor: [0.0, 10.0, 0.0],
            size: TextSize::AspectScaled(2.0),
            colour: "#fff00f".into(),
            motion: TextMotion::Fade,
            font_path: None,
            max_active: None,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            canvas_selector: "#threejs-canvas".into(),
            content_selector: ".content".into(),
            icons_selector: ".icons".into(),
            close_selector: ".closebtn".into(),
            contacts: vec![
                ContactLink {
                    icon: ContactIcon::Linkedin,
                    href: "https://linkedin.com/in/david-dahncke".into(),
                },
                ContactLink {
                    icon: ContactIcon::Mail,
                    href: "mailto:me@daviddahncke.com".into(),
                },
                ContactLink {
                    icon: ContactIcon::Github,
                    href: "https://github.com/Fx5C5C".into(),
                },
                ContactLink {
                    icon: ContactIcon::Instagram,
                    href: "https://www.instagram.com/david.dahncke".into(),
                },
            ],
            biography_selector: ".biography".into(),
            biography: vec![BIOGRAPHY_EN.into(), BIOGRAPHY_DE.into()],
            biography_interval_secs: 12.0,
            character_stagger_secs: 0.01,
        }
    }
}
