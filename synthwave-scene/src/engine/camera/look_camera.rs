use bevy::prelude::*;
use bevy::render::camera::PerspectiveProjection;

use crate::engine::assets::scene_config::CameraConfig;
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::core::context::AnimationContext;
use crate::engine::render::bloom::bloom_from_config;

#[derive(Component)]
pub struct SceneCamera;

/// Point the camera looks at for a given pointer offset.
pub fn look_target(position: Vec3, pointer: Vec2, config: &CameraConfig) -> Vec3 {
    position
        + Vec3::new(
            pointer.x * config.look_gain[0],
            -pointer.y * config.look_gain[1],
            -config.look_ahead,
        )
}

pub fn spawn_scene_camera(commands: &mut Commands, config: &SceneConfig) {
    let camera = &config.camera;
    let position = Vec3::from_array(camera.position);

    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.near,
            far: camera.far,
            ..default()
        }),
        Transform::from_translation(position)
            .looking_at(look_target(position, Vec2::ZERO, camera), Vec3::Y),
        bloom_from_config(&config.bloom),
        SceneCamera,
    ));
}

pub fn update_camera_look(
    config: Res<SceneConfig>,
    context: Res<AnimationContext>,
    mut cameras: Query<&mut Transform, With<SceneCamera>>,
) {
    for mut transform in &mut cameras {
        let target = look_target(transform.translation, context.pointer, &config.camera);
        transform.look_at(target, Vec3::Y);
    }
}
