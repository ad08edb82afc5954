use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::prelude::*;
use rand::Rng;

use crate::engine::assets::scene_config::{SceneConfig, StreakConfig, colour};
use crate::engine::core::context::SceneRng;

/// Thin light trail travelling toward the camera. Streaks are recycled, never
/// despawned.
#[derive(Component)]
pub struct Streak;

/// Random position on the spawn circle.
///
/// Initial placements scatter across the whole radius and depth range so the
/// pool does not arrive as a single wave; recycled streaks always restart on
/// the full-radius circle at the far bound.
pub fn respawn_position(config: &StreakConfig, rng: &mut impl Rng, initial: bool) -> Vec3 {
    let radius = config.spawn_radius;
    let distance = if initial {
        rng.gen_range(0.0..radius)
    } else {
        radius
    };
    let angle = rng.gen_range(0.0..TAU);
    let scatter = if initial {
        rng.gen_range(0.0..radius)
    } else {
        0.0
    };

    Vec3::new(
        angle.cos() * distance,
        angle.sin() * distance,
        -distance * config.depth_factor + scatter,
    )
}

/// Advance one streak; returns true if it crossed the near threshold and was
/// recycled.
pub fn step_streak(translation: &mut Vec3, config: &StreakConfig, rng: &mut impl Rng) -> bool {
    translation.z += config.step;

    if translation.z > config.near_threshold {
        *translation = respawn_position(config, rng, false);
        return true;
    }

    false
}

pub fn spawn_streak_pool(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &SceneConfig,
    rng: &mut SceneRng,
) {
    let streaks = &config.streaks;
    let mesh = meshes.add(
        Cylinder::new(streaks.radius, streaks.length)
            .mesh()
            .resolution(streaks.resolution),
    );
    let material = materials.add(StandardMaterial {
        base_color: colour(&streaks.colour),
        unlit: true,
        ..default()
    });
    // Cylinders are built along Y; lay them along the view axis.
    let orientation = Quat::from_rotation_x(FRAC_PI_2);

    for _ in 0..streaks.count {
        let position = respawn_position(streaks, &mut rng.0, true);
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position).with_rotation(orientation),
            Streak,
        ));
    }

    info!(
        "Streak pool: {} streaks of length {:.0}",
        streaks.count, streaks.length
    );
}

pub fn recycle_streaks(
    config: Res<SceneConfig>,
    mut rng: ResMut<SceneRng>,
    mut streaks: Query<&mut Transform, With<Streak>>,
) {
    let mut recycled = 0;
    for mut transform in &mut streaks {
        if step_streak(&mut transform.translation, &config.streaks, &mut rng.0) {
            recycled += 1;
        }
    }

    if recycled > 0 {
        debug!("Recycled {recycled} streaks");
    }
}
