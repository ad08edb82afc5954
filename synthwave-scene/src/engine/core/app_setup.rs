use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::camera::look_camera::update_camera_look;
use crate::engine::core::app_state::AppState;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::optional_assets::{
    request_optional_assets, watch_font_load, watch_glow_load,
};
use crate::engine::loading::profile_loader::{ProfileLoader, resolve_scene_profile, start_loading};
use crate::engine::loading::scene_creator::create_scene;
use crate::engine::render::sun_material::SunMaterial;
use crate::engine::scene::{
    arrow::pulse_arrow, grid::scroll_ground_grid, stars::spin_starfield,
    streaks::recycle_streaks, sun::spin_sun,
};
use crate::engine::systems::frame::FrameSet;
use crate::engine::systems::input::{track_pointer, track_resize};
use crate::engine::text::{cycler::advance_text, overlay::place_text_overlay};
use crate::page::PagePlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{create_native_overlays, fps_text_update_system};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneConfig>::new(&["json"]))
        .add_plugins(MaterialPlugin::<SunMaterial>::default())
        .add_plugins(PagePlugin);

    app.init_resource::<ProfileLoader>();

    // Loading: resolve the profile, then build the scene once.
    app.add_systems(Startup, start_loading)
        .add_systems(
            Update,
            resolve_scene_profile.run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            OnEnter(AppState::Running),
            (create_scene, request_optional_assets).chain(),
        );

    app.configure_sets(
        Update,
        (
            FrameSet::Input,
            FrameSet::Camera,
            FrameSet::Advance,
            FrameSet::Present,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    app.add_systems(
        Update,
        (
            (track_resize, track_pointer).in_set(FrameSet::Input),
            update_camera_look.in_set(FrameSet::Camera),
            (
                scroll_ground_grid,
                recycle_streaks,
                spin_sun,
                spin_starfield,
                pulse_arrow,
                watch_glow_load,
                (watch_font_load, advance_text).chain(),
            )
                .in_set(FrameSet::Advance),
            place_text_overlay.in_set(FrameSet::Present),
        ),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, create_native_overlays)
            .add_systems(Update, fps_text_update_system);
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
