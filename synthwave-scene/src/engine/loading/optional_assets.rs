use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::scene::sun::{GlowTexture, SunGlow};
use crate::engine::text::cycler::TextCycler;

/// Where an optional asset stands. `Unavailable` is final: nothing retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Pending,
    Ready,
    Unavailable,
}

pub fn resolution(state: Option<&LoadState>) -> Resolution {
    match state {
        Some(LoadState::Loaded) => Resolution::Ready,
        Some(LoadState::Failed(_)) => Resolution::Unavailable,
        // Handles the server has never seen cannot resolve.
        None => Resolution::Unavailable,
        Some(_) => Resolution::Pending,
    }
}

/// Request the title font. Without a configured path the built-in font is
/// ready immediately.
pub fn request_optional_assets(
    config: Res<SceneConfig>,
    asset_server: Res<AssetServer>,
    mut cycler: ResMut<TextCycler>,
) {
    match config.text.font_path {
        Some(ref path) => {
            info!("Loading title font from {path}");
            cycler.request_font(asset_server.load(path));
        }
        None => cycler.publish_font(Handle::default()),
    }
}

pub fn watch_font_load(asset_server: Res<AssetServer>, mut cycler: ResMut<TextCycler>) {
    let Some(handle) = cycler.pending_font().cloned() else {
        return;
    };

    match resolution(asset_server.get_load_state(&handle).as_ref()) {
        Resolution::Pending => {}
        Resolution::Ready => {
            info!("✓ Title font loaded");
            cycler.publish_font(handle);
        }
        Resolution::Unavailable => {
            warn!("Title font unavailable, titles stay hidden");
            cycler.abandon_font();
        }
    }
}

pub fn watch_glow_load(
    asset_server: Res<AssetServer>,
    mut glow_texture: ResMut<GlowTexture>,
    mut glows: Query<&mut Visibility, With<SunGlow>>,
) {
    let Some(ref handle) = glow_texture.pending else {
        return;
    };

    match resolution(asset_server.get_load_state(handle).as_ref()) {
        Resolution::Pending => return,
        Resolution::Ready => {
            info!("✓ Sun glow texture loaded");
            for mut visibility in &mut glows {
                *visibility = Visibility::Inherited;
            }
        }
        Resolution::Unavailable => warn!("Sun glow texture unavailable, glow stays hidden"),
    }

    glow_texture.pending = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::text::cycler::advance_text;
    use crate::engine::text::fade::FadingText;

    fn watcher_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()));
        app
    }

    #[test]
    fn unresolvable_glow_texture_keeps_glow_hidden() {
        let mut app = watcher_app();
        app.insert_resource(GlowTexture {
            pending: Some(Handle::default()),
        })
        .add_systems(Update, watch_glow_load);
        let glow = app.world_mut().spawn((Visibility::Hidden, SunGlow)).id();

        for _ in 0..3 {
            app.update();
        }

        assert_eq!(
            app.world().get::<Visibility>(glow),
            Some(&Visibility::Hidden)
        );
        assert!(app.world().resource::<GlowTexture>().pending.is_none());
    }

    #[test]
    fn glow_without_pending_texture_is_left_alone() {
        let mut app = watcher_app();
        app.init_resource::<GlowTexture>()
            .add_systems(Update, watch_glow_load);
        let glow = app.world_mut().spawn((Visibility::Hidden, SunGlow)).id();

        app.update();

        assert_eq!(
            app.world().get::<Visibility>(glow),
            Some(&Visibility::Hidden)
        );
    }

    #[test]
    fn unresolvable_font_leaves_titles_inactive() {
        let mut app = watcher_app();
        app.insert_resource(SceneConfig::portfolio())
            .init_resource::<TextCycler>()
            .add_systems(Update, (watch_font_load, advance_text).chain());
        app.world_mut()
            .resource_mut::<TextCycler>()
            .request_font(Handle::default());

        for _ in 0..5 {
            app.update();
        }

        let cycler = app.world().resource::<TextCycler>();
        assert!(cycler.font().is_none());
        assert!(cycler.pending_font().is_none());
        let titles = app
            .world_mut()
            .query::<&FadingText>()
            .iter(app.world())
            .count();
        assert_eq!(titles, 0);
    }

    #[test]
    fn profile_without_font_path_uses_builtin_font() {
        let mut app = watcher_app();
        let mut config = SceneConfig::portfolio();
        config.text.font_path = None;
        app.insert_resource(config)
            .init_resource::<TextCycler>()
            .add_systems(Update, request_optional_assets);

        app.update();

        let cycler = app.world().resource::<TextCycler>();
        assert!(cycler.font().is_some());
        assert!(cycler.pending_font().is_none());
    }

    #[test]
    fn load_states_map_to_resolutions() {
        assert_eq!(resolution(Some(&LoadState::Loaded)), Resolution::Ready);
        assert_eq!(resolution(Some(&LoadState::Loading)), Resolution::Pending);
        assert_eq!(resolution(Some(&LoadState::NotLoaded)), Resolution::Pending);
        assert_eq!(resolution(None), Resolution::Unavailable);
    }
}
