use bevy::prelude::*;
use bevy::window::PresentMode;

#[cfg(target_arch = "wasm32")]
use crate::engine::assets::scene_config::PageConfig;

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some(PageConfig::default().canvas_selector),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Synthwave".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::scene_config::PageConfig;

    #[test]
    fn window_uses_vsync() {
        assert_eq!(create_window_config().present_mode, PresentMode::AutoVsync);
    }

    #[test]
    fn canvas_selector_matches_host_page() {
        assert_eq!(PageConfig::default().canvas_selector, "#threejs-canvas");
    }
}
