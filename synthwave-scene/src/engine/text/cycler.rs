use bevy::prelude::*;

use crate::engine::assets::scene_config::{SceneConfig, TextConfig, colour};
use crate::engine::text::fade::{FadeStep, FadingText};

/// Font readiness and string rotation for the title text.
///
/// The font starts out unavailable. Until it is published no title is ever
/// spawned; a failed load leaves it unavailable for the whole session.
#[derive(Resource, Default, Debug)]
pub struct TextCycler {
    pending_font: Option<Handle<Font>>,
    font: Option<Handle<Font>>,
    next_index: usize,
    /// Set once the first title has been spawned.
    primed: bool,
}

impl TextCycler {
    pub fn request_font(&mut self, handle: Handle<Font>) {
        self.pending_font = Some(handle);
    }

    pub fn pending_font(&self) -> Option<&Handle<Font>> {
        self.pending_font.as_ref()
    }

    /// Promote the pending font (or the given one) to ready.
    pub fn publish_font(&mut self, handle: Handle<Font>) {
        self.pending_font = None;
        self.font = Some(handle);
    }

    pub fn abandon_font(&mut self) {
        self.pending_font = None;
    }

    pub fn font(&self) -> Option<&Handle<Font>> {
        self.font.as_ref()
    }

    /// Next string in rotation, wrapping at the end of the list.
    pub fn next_content(&mut self, config: &TextConfig) -> Option<String> {
        if config.strings.is_empty() {
            return None;
        }
        let content = config.strings[self.next_index % config.strings.len()].clone();
        self.next_index = (self.next_index + 1) % config.strings.len();
        Some(content)
    }
}

fn spawn_title(commands: &mut Commands, font: Handle<Font>, content: String, config: &TextConfig) {
    commands.spawn((
        Text::new(content.clone()),
        TextFont {
            font,
            ..default()
        },
        TextColor(colour(&config.colour).with_alpha(0.0)),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            ..default()
        },
        // Shown by the overlay once it has a screen position.
        Visibility::Hidden,
        FadingText::new(content),
    ));
}

/// Tick every live title, despawn finished ones and spawn replacements.
pub fn advance_text(
    mut commands: Commands,
    config: Res<SceneConfig>,
    mut cycler: ResMut<TextCycler>,
    mut texts: Query<(Entity, &mut FadingText)>,
) {
    let Some(font) = cycler.font().cloned() else {
        return;
    };

    let mut live = 0;
    let mut finished = 0;
    for (entity, mut text) in &mut texts {
        match text.tick(&config.text) {
            FadeStep::Running => live += 1,
            FadeStep::Finished => {
                commands.entity(entity).despawn();
                finished += 1;
            }
        }
    }

    let mut wanted = finished;
    if !cycler.primed {
        cycler.primed = true;
        wanted += 1;
    }

    let capacity = config.text.capacity();
    while wanted > 0 && live < capacity {
        let Some(content) = cycler.next_content(&config.text) else {
            break;
        };
        debug!("Title: {content}");
        spawn_title(&mut commands, font.clone(), content, &config.text);
        live += 1;
        wanted -= 1;
    }
}
