use bevy::prelude::*;

use crate::engine::assets::scene_config::{ArrowConfig, SceneConfig, colour};

/// Pulsing "scroll down" indicator below the horizon.
#[derive(Component)]
pub struct Arrow;

/// Uniform scale at `seconds` since startup.
pub fn pulse_scale(seconds: f32, config: &ArrowConfig) -> f32 {
    (seconds * config.pulse_rate).sin() * config.pulse_amplitude + config.pulse_base
}

pub fn spawn_arrow(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &SceneConfig,
) {
    let arrow = &config.arrow;
    let half_width = arrow.size / 1.5;
    let triangle = Triangle2d::new(
        Vec2::new(0.0, -arrow.size),
        Vec2::new(half_width, 0.0),
        Vec2::new(-half_width, 0.0),
    );

    commands.spawn((
        Mesh3d(meshes.add(triangle)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: colour(&arrow.colour),
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        Transform::from_translation(Vec3::from_array(arrow.position))
            .with_rotation(Quat::from_rotation_x(arrow.tilt)),
        Arrow,
    ));
}

pub fn pulse_arrow(
    time: Res<Time>,
    config: Res<SceneConfig>,
    mut arrows: Query<&mut Transform, With<Arrow>>,
) {
    let scale = pulse_scale(time.elapsed_secs(), &config.arrow);
    for mut transform in &mut arrows {
        transform.scale = Vec3::splat(scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn pulse_oscillates_between_bounds() {
        let config = ArrowConfig::default();

        assert_eq!(pulse_scale(0.0, &config), 0.9);
        for step in 0..200 {
            let scale = pulse_scale(step as f32 * 0.05, &config);
            assert!((0.8 - 1e-6..=1.0 + 1e-6).contains(&scale));
        }
    }

    #[test]
    fn peak_after_a_quarter_period() {
        let config = ArrowConfig::default();
        let quarter_period = std::f32::consts::FRAC_PI_2 / config.pulse_rate;

        assert!((pulse_scale(quarter_period, &config) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn arrow_scale_follows_elapsed_time() {
        let config = SceneConfig::portfolio();
        let quarter_period = std::f32::consts::FRAC_PI_2 / config.arrow.pulse_rate;

        let mut app = App::new();
        app.init_resource::<Time>()
            .insert_resource(config)
            .add_systems(Update, pulse_arrow);
        let arrow = app.world_mut().spawn((Transform::IDENTITY, Arrow)).id();

        app.update();
        let scale = app.world().get::<Transform>(arrow).unwrap().scale;
        assert!(scale.abs_diff_eq(Vec3::splat(0.9), 1e-5));

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(quarter_period));
        app.update();
        let scale = app.world().get::<Transform>(arrow).unwrap().scale;
        assert!(scale.abs_diff_eq(Vec3::splat(1.0), 1e-4));
    }
}
