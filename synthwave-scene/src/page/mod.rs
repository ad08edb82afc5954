//! Host page interactions outside the render canvas.
//!
//! Contact icons, click-to-scroll and the biography rotation. DOM access only
//! exists on wasm32; the scheduling logic is shared and runs natively too.

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;

/// Biography rotation with staggered per-character reveal.
pub mod biography;

/// Contact link icons and their inline SVG markup.
pub mod contact_icons;

/// Smooth scrolling between the scene and the page content on click.
pub mod scroll;

pub struct PagePlugin;

impl Plugin for PagePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Running), biography::start_biography)
            .add_systems(
                Update,
                biography::cycle_biography.run_if(in_state(AppState::Running)),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(
            OnEnter(AppState::Running),
            (inject_contact_icons, scroll::install_scroll_listener),
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn inject_contact_icons(config: Res<crate::engine::assets::scene_config::SceneConfig>) {
    if let Err(error) = contact_icons::inject_contact_icons(&config.page) {
        warn!("Contact icons unavailable: {error:?}");
    }
}
