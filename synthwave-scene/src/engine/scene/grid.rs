//! Bent, endlessly scrolling ground grid built from two alternating tiles.
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::view::NoFrustumCulling;

use crate::engine::assets::scene_config::{GridConfig, SceneConfig, colour};

/// One of the two scrolling tiles. `slot` is 0 for the tile that starts
/// nearest the camera.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTile {
    pub slot: usize,
}

/// Lift applied to a vertex at lateral offset `x`, curving the grid up toward
/// its side edges.
pub fn bend_height(x: f32, config: &GridConfig) -> f32 {
    let normalised = x.abs() / (config.size / 4.0);
    normalised.powf(config.bend_exponent) * config.bend_height
}

/// Lattice vertices, row by row from the far edge.
pub fn bent_grid_vertices(config: &GridConfig) -> Vec<[f32; 3]> {
    let divisions = config.divisions as usize;
    let width = config.size;
    let depth = config.size * config.depth_ratio;
    let cell_width = width / divisions as f32;
    let cell_depth = depth / divisions as f32;

    let mut vertices = Vec::with_capacity((divisions + 1) * (divisions + 1));
    for row in 0..=divisions {
        let z = row as f32 * cell_depth - depth / 2.0;
        for column in 0..=divisions {
            let x = column as f32 * cell_width - width / 2.0;
            vertices.push([x, bend_height(x, config), z]);
        }
    }

    vertices
}

/// Line indices for rows, columns and one diagonal per cell, matching a
/// triangulated plane drawn as wireframe.
pub fn bent_grid_indices(divisions: u32) -> Vec<u32> {
    let columns = divisions + 1;
    let mut indices = Vec::new();

    for row in 0..=divisions {
        for column in 0..divisions {
            let i = row * columns + column;
            indices.extend_from_slice(&[i, i + 1]);
        }
    }

    for column in 0..=divisions {
        for row in 0..divisions {
            let i = row * columns + column;
            indices.extend_from_slice(&[i, i + columns]);
        }
    }

    for row in 0..divisions {
        for column in 0..divisions {
            let near_left = (row + 1) * columns + column;
            let far_right = row * columns + column + 1;
            indices.extend_from_slice(&[near_left, far_right]);
        }
    }

    indices
}

pub fn create_bent_grid_mesh(config: &GridConfig) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, bent_grid_vertices(config));
    mesh.insert_indices(Indices::U32(bent_grid_indices(config.divisions)));

    mesh
}

/// Spawn both tiles, the second exactly one span behind the first.
pub fn spawn_ground_grid(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &SceneConfig,
) {
    let grid = &config.grid;
    let mesh = meshes.add(create_bent_grid_mesh(grid));
    let material = materials.add(StandardMaterial {
        base_color: colour(&grid.colour),
        unlit: true,
        ..default()
    });

    let first_z = -grid.span() / 2.0;
    for (slot, z) in [first_z, first_z - grid.span()].into_iter().enumerate() {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_xyz(0.0, grid.height, z),
            NoFrustumCulling,
            GridTile { slot },
        ));
    }

    info!(
        "Ground grid: {} divisions, span {:.0}, {} line segments per tile",
        grid.divisions,
        grid.span(),
        bent_grid_indices(grid.divisions).len() / 2
    );
}

/// Advance both tiles and move whichever passed the wrap threshold directly
/// behind the other.
pub fn scroll_tiles(z: [f32; 2], config: &GridConfig) -> [f32; 2] {
    let mut z = z.map(|tile| tile + config.scroll_step);

    if z[0] >= config.wrap_threshold {
        z[0] = z[1] - config.span();
    }
    if z[1] >= config.wrap_threshold {
        z[1] = z[0] - config.span();
    }

    z
}

pub fn scroll_ground_grid(
    config: Res<SceneConfig>,
    mut tiles: Query<(&GridTile, &mut Transform)>,
) {
    let mut current = [None; 2];
    for (tile, transform) in &tiles {
        if let Some(z) = current.get_mut(tile.slot) {
            *z = Some(transform.translation.z);
        }
    }
    let [Some(near), Some(far)] = current else {
        return;
    };

    let next = scroll_tiles([near, far], &config.grid);
    for (tile, mut transform) in &mut tiles {
        if let Some(&z) = next.get(tile.slot) {
            transform.translation.z = z;
        }
    }
}
