use bevy::prelude::*;
use bevy::window::{CursorMoved, WindowResized};

use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::core::context::AnimationContext;

/// Latest cursor position wins; intermediate moves within a frame are
/// irrelevant to the look target.
pub fn track_pointer(
    mut cursor_events: EventReader<CursorMoved>,
    config: Res<SceneConfig>,
    mut context: ResMut<AnimationContext>,
) {
    if let Some(event) = cursor_events.read().last() {
        let divisor = Vec2::from_array(config.camera.pointer_divisor);
        context.pointer_moved(event.position, divisor);
    }
}

pub fn track_resize(
    mut resize_events: EventReader<WindowResized>,
    mut context: ResMut<AnimationContext>,
) {
    if let Some(event) = resize_events.read().last() {
        debug!("Viewport resized to {}x{}", event.width, event.height);
        context.resized(event.width, event.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_app() -> App {
        let mut app = App::new();
        app.add_event::<CursorMoved>()
            .add_event::<WindowResized>()
            .insert_resource(SceneConfig::portfolio())
            .insert_resource(AnimationContext::new(2000.0, 1600.0))
            .add_systems(Update, (track_resize, track_pointer).chain());
        app
    }

    #[test]
    fn last_cursor_move_sets_pointer_offset() {
        let mut app = input_app();
        let window = app.world_mut().spawn_empty().id();
        for position in [Vec2::ZERO, Vec2::new(2000.0, 0.0)] {
            app.world_mut().send_event(CursorMoved {
                window,
                position,
                delta: None,
            });
        }

        app.update();

        let context = app.world().resource::<AnimationContext>();
        assert_eq!(context.pointer, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn resize_updates_extent_and_aspect() {
        let mut app = input_app();
        let window = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(WindowResized {
            window,
            width: 800.0,
            height: 400.0,
        });

        app.update();

        let context = app.world().resource::<AnimationContext>();
        assert_eq!(context.half_extent, Vec2::new(400.0, 200.0));
        assert_eq!(context.aspect, 2.0);
    }

    #[test]
    fn no_events_leaves_context_unchanged() {
        let mut app = input_app();
        app.update();

        assert_eq!(
            *app.world().resource::<AnimationContext>(),
            AnimationContext::new(2000.0, 1600.0)
        );
    }
}
