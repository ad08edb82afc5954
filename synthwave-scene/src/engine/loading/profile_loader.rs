use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::path::SCENE_CONFIG_PATH;
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::core::app_state::AppState;
use crate::engine::core::context::{AnimationContext, SceneRng};
use crate::engine::text::cycler::TextCycler;

#[derive(Resource, Default)]
pub struct ProfileLoader {
    handle: Option<Handle<SceneConfig>>,
}

// Start the loading process
pub fn start_loading(mut profile_loader: ResMut<ProfileLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene profile from {}", SCENE_CONFIG_PATH);
    profile_loader.handle = Some(asset_server.load(SCENE_CONFIG_PATH));
}

/// Wait for the profile to resolve, install it and enter the running state.
pub fn resolve_scene_profile(
    mut commands: Commands,
    profile_loader: Res<ProfileLoader>,
    asset_server: Res<AssetServer>,
    profiles: Res<Assets<SceneConfig>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(ref handle) = profile_loader.handle else {
        return;
    };

    let loaded = match asset_server.load_state(handle.id()) {
        LoadState::Loaded => match profiles.get(handle) {
            Some(profile) => Some(profile.clone()),
            None => return,
        },
        LoadState::Failed(error) => {
            warn!("Scene profile unavailable ({error}), using built-in preset");
            None
        }
        _ => return,
    };

    let (width, height) = windows
        .single()
        .map(|window| (window.width(), window.height()))
        .unwrap_or((1280.0, 720.0));

    install_scene_profile(&mut commands, choose_profile(loaded), width, height);

    info!("→ Transitioning to Running state");
    next_state.set(AppState::Running);
}

/// Keep a loaded profile only if it validates.
pub fn choose_profile(loaded: Option<SceneConfig>) -> SceneConfig {
    let Some(profile) = loaded else {
        return SceneConfig::portfolio();
    };

    match profile.validate() {
        Ok(()) => {
            info!("✓ Scene profile loaded");
            profile
        }
        Err(error) => {
            warn!("Scene profile rejected: {error}; using built-in preset");
            SceneConfig::portfolio()
        }
    }
}

/// Insert the profile and every resource derived from it.
pub fn install_scene_profile(commands: &mut Commands, config: SceneConfig, width: f32, height: f32) {
    commands.insert_resource(SceneRng::new(config.seed));
    commands.insert_resource(AnimationContext::new(width, height));
    commands.insert_resource(TextCycler::default());
    commands.insert_resource(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_profile_falls_back_to_portfolio() {
        assert_eq!(choose_profile(None), SceneConfig::portfolio());
    }

    #[test]
    fn invalid_profile_falls_back_to_portfolio() {
        let mut profile = SceneConfig::legacy();
        profile.sun.top_colour = "#zzzzzz".into();

        assert_eq!(choose_profile(Some(profile)), SceneConfig::portfolio());
    }

    #[test]
    fn valid_profile_is_kept() {
        assert_eq!(
            choose_profile(Some(SceneConfig::legacy())),
            SceneConfig::legacy()
        );
    }

    #[test]
    fn installing_a_profile_creates_the_animation_context() {
        let mut app = App::new();
        app.add_systems(Startup, |mut commands: Commands| {
            install_scene_profile(&mut commands, SceneConfig::legacy(), 1000.0, 500.0);
        });
        app.update();

        let context = app.world().resource::<AnimationContext>();
        assert_eq!(context.half_extent, Vec2::new(500.0, 250.0));
        assert_eq!(context.aspect, 2.0);
        assert!(app.world().contains_resource::<SceneRng>());
        assert!(app.world().contains_resource::<TextCycler>());
        assert_eq!(*app.world().resource::<SceneConfig>(), SceneConfig::legacy());
    }
}
