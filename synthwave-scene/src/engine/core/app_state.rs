use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting for the scene profile to load or fail.
    #[default]
    Loading,
    /// Scene built; frame systems are ticking.
    Running,
}

#[derive(Component)]
pub struct FpsText;
