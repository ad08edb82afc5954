use bevy::prelude::*;

use crate::engine::assets::scene_config::{SceneConfig, colour};
use crate::engine::camera::look_camera::SceneCamera;
use crate::engine::core::context::AnimationContext;
use crate::engine::text::fade::FadingText;

/// Screen-space box for one title line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub font_size: f32,
}

/// Lay out a line standing on the projected anchor, which is the baseline.
/// `cap` is the projection of the point one text height above it; their
/// distance is the glyph height. The box spans the whole viewport width so
/// centred justification lands on the anchor.
pub fn overlay_layout(anchor: Vec2, cap: Vec2, viewport_width: f32) -> OverlayLayout {
    let font_size = anchor.distance(cap);

    OverlayLayout {
        left: anchor.x - viewport_width / 2.0,
        top: cap.y,
        width: viewport_width,
        font_size,
    }
}

pub fn place_text_overlay(
    config: Res<SceneConfig>,
    context: Res<AnimationContext>,
    cameras: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    mut texts: Query<(
        &FadingText,
        &mut Node,
        &mut TextFont,
        &mut TextColor,
        &mut Visibility,
    )>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    let text = &config.text;
    let base = colour(&text.colour);
    let world_size = text.size.world_size(context.aspect);
    let viewport_width = context.half_extent.x * 2.0;

    for (fading, mut node, mut font, mut text_colour, mut visibility) in &mut texts {
        let world_anchor = Vec3::from_array(text.anchor) + Vec3::Z * fading.depth;
        let world_cap = world_anchor + Vec3::Y * world_size * fading.scale;

        let (Ok(anchor), Ok(cap)) = (
            camera.world_to_viewport(camera_transform, world_anchor),
            camera.world_to_viewport(camera_transform, world_cap),
        ) else {
            // Behind the camera.
            *visibility = Visibility::Hidden;
            continue;
        };

        let layout = overlay_layout(anchor, cap, viewport_width);
        node.left = Val::Px(layout.left);
        node.top = Val::Px(layout.top);
        node.width = Val::Px(layout.width);
        font.font_size = layout.font_size;
        text_colour.0 = base.with_alpha(fading.opacity);
        *visibility = Visibility::Inherited;
    }
}
