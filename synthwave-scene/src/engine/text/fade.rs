use bevy::prelude::*;

use crate::engine::assets::scene_config::{TextConfig, TextMotion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeState {
    In,
    Visible,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStep {
    Running,
    /// Fully faded out; the entity should be removed.
    Finished,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct FadingText {
    pub content: String,
    pub opacity: f32,
    pub state: FadeState,
    /// Ticks left in the visible state.
    pub hold: u32,
    pub age: u32,
    /// Forward offset from the text anchor accumulated by drift motion.
    pub depth: f32,
    pub scale: f32,
}

impl FadingText {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            opacity: 0.0,
            state: FadeState::In,
            hold: 0,
            age: 0,
            depth: 0.0,
            scale: 1.0,
        }
    }

    /// Advance one tick. State changes cascade within the tick, so entering
    /// `Visible` also consumes the first hold tick and entering `Out` also
    /// takes the first fade-out step.
    pub fn tick(&mut self, config: &TextConfig) -> FadeStep {
        self.age += 1;

        if let TextMotion::Drift { step, growth } = config.motion {
            self.depth += step;
            self.scale += growth;
        }

        if self.state == FadeState::In {
            self.opacity = (self.opacity + config.fade_step).min(1.0);
            if self.opacity >= 1.0 {
                self.state = FadeState::Visible;
                self.hold = config.hold_ticks;
            }
        }

        if self.state == FadeState::Visible {
            self.hold = self.hold.saturating_sub(1);
            if self.hold == 0 {
                self.state = FadeState::Out;
            }
        }

        if self.state == FadeState::Out {
            self.opacity = (self.opacity - config.fade_step).max(0.0);
            if self.opacity <= 0.0 {
                return FadeStep::Finished;
            }
        }

        FadeStep::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::scene_config::SceneConfig;

    fn run_to_completion(text: &mut FadingText, config: &TextConfig) -> Vec<(FadeState, f32)> {
        let mut trace = Vec::new();
        for _ in 0..10_000 {
            let step = text.tick(config);
            trace.push((text.state, text.opacity));
            if step == FadeStep::Finished {
                return trace;
            }
        }
        panic!("text never finished");
    }

    #[test]
    fn new_text_starts_invisible_and_fading_in() {
        let text = FadingText::new("Coach");

        assert_eq!(text.opacity, 0.0);
        assert_eq!(text.state, FadeState::In);
    }

    #[test]
    fn states_follow_in_visible_out_order() {
        let config = SceneConfig::portfolio().text;
        let mut text = FadingText::new("Freelancer");
        let trace = run_to_completion(&mut text, &config);

        let mut states: Vec<FadeState> = trace.iter().map(|(state, _)| *state).collect();
        states.dedup();
        assert_eq!(states, vec![FadeState::In, FadeState::Visible, FadeState::Out]);
    }

    #[test]
    fn opacity_is_monotonic_per_state_and_bounded() {
        let config = SceneConfig::portfolio().text;
        let mut text = FadingText::new("Swift");
        let trace = run_to_completion(&mut text, &config);

        for window in trace.windows(2) {
            let (previous_state, previous) = window[0];
            let (state, opacity) = window[1];
            assert!((0.0..=1.0).contains(&opacity));
            if previous_state == FadeState::In && state == FadeState::In {
                assert!(opacity >= previous);
            }
            if state == FadeState::Out {
                assert!(opacity <= previous);
            }
        }
        assert_eq!(trace.last().map(|(_, opacity)| *opacity), Some(0.0));
    }

    #[test]
    fn holds_fully_visible_for_configured_ticks() {
        let config = SceneConfig::portfolio().text;
        let mut text = FadingText::new("Kotlin");
        let trace = run_to_completion(&mut text, &config);

        let visible = trace
            .iter()
            .filter(|(state, _)| *state == FadeState::Visible)
            .count();
        // The tick that saturates also spends one hold tick, and the tick
        // that empties the hold already fades.
        assert_eq!(visible as u32, config.hold_ticks - 1);
        assert!(
            trace
                .iter()
                .filter(|(state, _)| *state == FadeState::Visible)
                .all(|(_, opacity)| *opacity == 1.0)
        );
    }

    #[test]
    fn large_fade_step_still_cycles() {
        let mut config = SceneConfig::portfolio().text;
        config.fade_step = 1.0;
        config.hold_ticks = 2;
        let mut text = FadingText::new("Web");

        assert_eq!(text.tick(&config), FadeStep::Running);
        assert_eq!(text.state, FadeState::Visible);
        assert_eq!(text.tick(&config), FadeStep::Finished);
        assert_eq!(text.opacity, 0.0);
    }

    #[test]
    fn fade_motion_keeps_text_in_place() {
        let config = SceneConfig::portfolio().text;
        let mut text = FadingText::new("Java");
        for _ in 0..10 {
            text.tick(&config);
        }

        assert_eq!(text.depth, 0.0);
        assert_eq!(text.scale, 1.0);
        assert_eq!(text.age, 10);
    }

    #[test]
    fn drift_motion_slides_forward_and_grows() {
        let mut config = SceneConfig::portfolio().text;
        config.motion = TextMotion::Drift {
            step: 0.5,
            growth: 0.25,
        };
        let mut text = FadingText::new("C#");
        for _ in 0..4 {
            text.tick(&config);
        }

        assert_eq!(text.depth, 2.0);
        assert_eq!(text.scale, 2.0);
    }
}
