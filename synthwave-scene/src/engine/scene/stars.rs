use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use rand::Rng;

use crate::engine::assets::scene_config::{SceneConfig, StarConfig, colour};
use crate::engine::core::context::SceneRng;

/// Background point cloud, slowly tumbling about X and Y.
#[derive(Component, Debug, Default)]
pub struct Starfield {
    pub pitch: f32,
    pub yaw: f32,
}

pub fn star_positions(config: &StarConfig, rng: &mut impl Rng) -> Vec<[f32; 3]> {
    let half_spread = config.spread / 2.0;
    (0..config.count)
        .map(|_| {
            [
                rng.gen_range(-half_spread..=half_spread),
                rng.gen_range(-half_spread..=half_spread),
                -rng.gen_range(0.0..=config.depth),
            ]
        })
        .collect()
}

pub fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &SceneConfig,
    rng: &mut SceneRng,
) {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(
        Mesh::ATTRIBUTE_POSITION,
        star_positions(&config.stars, &mut rng.0),
    );

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: colour(&config.stars.colour),
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
        Starfield::default(),
    ));
}

pub fn spin_starfield(
    config: Res<SceneConfig>,
    mut starfields: Query<(&mut Starfield, &mut Transform)>,
) {
    for (mut starfield, mut transform) in &mut starfields {
        starfield.pitch += config.stars.spin;
        starfield.yaw += config.stars.spin;
        transform.rotation = Quat::from_euler(EulerRot::XYZ, starfield.pitch, starfield.yaw, 0.0);
    }
}
