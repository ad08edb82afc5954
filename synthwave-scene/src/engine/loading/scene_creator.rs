use bevy::prelude::*;

use crate::constants::render_settings::{AMBIENT_BRIGHTNESS, AMBIENT_COLOUR, CLEAR_COLOUR};
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::camera::look_camera::spawn_scene_camera;
use crate::engine::core::context::SceneRng;
use crate::engine::render::sun_material::SunMaterial;
use crate::engine::scene::{
    arrow::spawn_arrow,
    grid::spawn_ground_grid,
    stars::spawn_starfield,
    streaks::spawn_streak_pool,
    sun::{spawn_sun, spawn_sun_glow},
};

/// Build every scene entity from the installed profile. Runs once on entering
/// the running state.
pub fn create_scene(
    mut commands: Commands,
    config: Res<SceneConfig>,
    mut rng: ResMut<SceneRng>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut sun_materials: ResMut<Assets<SunMaterial>>,
) {
    commands.insert_resource(ClearColor(CLEAR_COLOUR));
    commands.insert_resource(AmbientLight {
        color: AMBIENT_COLOUR,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    spawn_scene_camera(&mut commands, &config);
    spawn_ground_grid(&mut commands, &mut meshes, &mut materials, &config);
    spawn_streak_pool(&mut commands, &mut meshes, &mut materials, &config, &mut rng);
    spawn_sun(&mut commands, &mut meshes, &mut sun_materials, &config);
    let glow = spawn_sun_glow(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        &config,
    );
    commands.insert_resource(glow);
    spawn_starfield(&mut commands, &mut meshes, &mut materials, &config, &mut rng);
    spawn_arrow(&mut commands, &mut meshes, &mut materials, &config);

    info!("✓ Scene created");
}
