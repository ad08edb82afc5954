use bevy::prelude::*;

use crate::engine::assets::scene_config::{SceneConfig, colour};
use crate::engine::render::sun_material::SunMaterial;

#[derive(Component)]
pub struct Sun;

/// Additive halo behind the sun. Hidden until its texture is available.
#[derive(Component)]
pub struct SunGlow;

/// Glow texture requested at startup, resolved by the optional asset watcher.
#[derive(Resource, Default)]
pub struct GlowTexture {
    pub pending: Option<Handle<Image>>,
}

pub fn spawn_sun(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    sun_materials: &mut Assets<SunMaterial>,
    config: &SceneConfig,
) {
    let sun = &config.sun;

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(sun.radius).mesh().uv(sun.sectors, sun.stacks))),
        MeshMaterial3d(sun_materials.add(SunMaterial::from_config(sun))),
        Transform::from_translation(Vec3::from_array(sun.position))
            .with_rotation(Quat::from_rotation_y(sun.initial_yaw)),
        Sun,
    ));
}

/// Spawn the glow quad and request its texture. Profiles without a glow
/// texture get no glow at all.
pub fn spawn_sun_glow(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    config: &SceneConfig,
) -> GlowTexture {
    let sun = &config.sun;
    let Some(ref path) = sun.glow_texture else {
        return GlowTexture::default();
    };

    let texture: Handle<Image> = asset_server.load(path);
    commands.spawn((
        Mesh3d(meshes.add(Rectangle::new(sun.glow_scale, sun.glow_scale))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: colour(&sun.glow_colour),
            base_color_texture: Some(texture.clone()),
            alpha_mode: AlphaMode::Add,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(Vec3::from_array(sun.position)),
        Visibility::Hidden,
        SunGlow,
    ));

    GlowTexture {
        pending: Some(texture),
    }
}

pub fn spin_sun(config: Res<SceneConfig>, mut suns: Query<&mut Transform, With<Sun>>) {
    for mut transform in &mut suns {
        transform.rotate_y(config.sun.spin);
    }
}
