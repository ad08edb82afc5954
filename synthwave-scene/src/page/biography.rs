use std::ops::Range;

use bevy::prelude::*;

use crate::engine::assets::scene_config::{PageConfig, SceneConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BiographyAction {
    /// Replace the container with one hidden span per character of entry.
    Show(usize),
    /// Make these character spans visible.
    Reveal(Range<usize>),
}

/// Rotates the biography entries on a fixed interval and reveals each one a
/// character at a time.
#[derive(Resource, Debug, Clone)]
pub struct BiographyCycler {
    lengths: Vec<usize>,
    interval: f32,
    stagger: f32,
    current: Option<usize>,
    shown_at: f32,
    revealed: usize,
}

impl BiographyCycler {
    pub fn new(page: &PageConfig) -> Self {
        Self {
            lengths: page.biography.iter().map(|text| text.chars().count()).collect(),
            interval: page.biography_interval_secs,
            stagger: page.character_stagger_secs,
            current: None,
            shown_at: 0.0,
            revealed: 0,
        }
    }

    /// DOM updates due at `now` seconds. The first poll shows entry 0.
    pub fn poll(&mut self, now: f32) -> Vec<BiographyAction> {
        let mut actions = Vec::new();
        if self.lengths.is_empty() {
            return actions;
        }

        let due = match self.current {
            None => Some(0),
            Some(current) if now - self.shown_at >= self.interval => {
                Some((current + 1) % self.lengths.len())
            }
            Some(_) => None,
        };
        if let Some(next) = due {
            self.current = Some(next);
            self.shown_at = now;
            self.revealed = 0;
            actions.push(BiographyAction::Show(next));
        }

        let Some(current) = self.current else {
            return actions;
        };
        let length = self.lengths[current];
        // Character i appears `i * stagger` after the switch.
        let visible = if self.stagger > 0.0 {
            (((now - self.shown_at) / self.stagger).floor() as usize + 1).min(length)
        } else {
            length
        };
        if visible > self.revealed {
            actions.push(BiographyAction::Reveal(self.revealed..visible));
            self.revealed = visible;
        }

        actions
    }
}

pub fn start_biography(mut commands: Commands, config: Res<SceneConfig>) {
    commands.insert_resource(BiographyCycler::new(&config.page));
}

pub fn cycle_biography(
    time: Res<Time>,
    config: Res<SceneConfig>,
    mut cycler: ResMut<BiographyCycler>,
) {
    for action in cycler.poll(time.elapsed_secs()) {
        apply_action(&config.page, &action);
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_action(page: &PageConfig, action: &BiographyAction) {
    if let Err(error) = apply_to_document(page, action) {
        warn!("Biography update failed: {error:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_action(_page: &PageConfig, action: &BiographyAction) {
    if let BiographyAction::Show(entry) = action {
        debug!("Biography entry {entry}");
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_to_document(page: &PageConfig, action: &BiographyAction) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Ok(());
    };
    let Some(container) = document.query_selector(&page.biography_selector)? else {
        return Ok(());
    };

    match action {
        BiographyAction::Show(entry) => {
            container.set_inner_html("");
            let Some(text) = page.biography.get(*entry) else {
                return Ok(());
            };
            for character in text.chars() {
                let span = document.create_element("span")?;
                span.set_text_content(Some(&character.to_string()));
                span.set_class_name("character");
                container.append_child(&span)?;
            }
        }
        BiographyAction::Reveal(range) => {
            let characters = container.query_selector_all(".character")?;
            for index in range.clone() {
                let Some(node) = characters.get(index as u32) else {
                    break;
                };
                let span: web_sys::HtmlElement = node.dyn_into()?;
                span.style().set_property("opacity", "1")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(entries: &[&str]) -> PageConfig {
        PageConfig {
            biography: entries.iter().map(|entry| entry.to_string()).collect(),
            biography_interval_secs: 12.0,
            character_stagger_secs: 0.25,
            ..default()
        }
    }

    #[test]
    fn first_poll_shows_first_entry_with_one_character() {
        let mut cycler = BiographyCycler::new(&page(&["hello", "hallo"]));

        assert_eq!(
            cycler.poll(0.0),
            vec![BiographyAction::Show(0), BiographyAction::Reveal(0..1)]
        );
        assert!(cycler.poll(0.1).is_empty());
    }

    #[test]
    fn characters_reveal_on_the_stagger() {
        let mut cycler = BiographyCycler::new(&page(&["hello"]));
        cycler.poll(0.0);

        assert_eq!(cycler.poll(0.5), vec![BiographyAction::Reveal(1..3)]);
        // Never past the end of the text.
        assert_eq!(cycler.poll(10.0), vec![BiographyAction::Reveal(3..5)]);
        assert!(cycler.poll(11.0).is_empty());
    }

    #[test]
    fn entries_rotate_on_the_interval() {
        let mut cycler = BiographyCycler::new(&page(&["hello", "hallo"]));
        cycler.poll(0.0);

        assert_eq!(cycler.poll(12.0)[0], BiographyAction::Show(1));
        assert_eq!(cycler.poll(24.0)[0], BiographyAction::Show(0));
    }

    #[test]
    fn characters_count_as_chars_not_bytes() {
        let mut cycler = BiographyCycler::new(&page(&["Lösung"]));
        cycler.poll(0.0);

        assert_eq!(cycler.poll(5.0), vec![BiographyAction::Reveal(1..6)]);
    }

    #[test]
    fn no_entries_means_no_actions() {
        let mut cycler = BiographyCycler::new(&page(&[]));

        assert!(cycler.poll(0.0).is_empty());
        assert!(cycler.poll(50.0).is_empty());
    }
}
