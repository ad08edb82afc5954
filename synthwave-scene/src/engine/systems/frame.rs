use bevy::prelude::*;

/// Order of work inside one frame tick. Configured as a chain, so each set
/// sees the writes of the previous one within the same frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Pointer and viewport changes land in the animation context.
    Input,
    /// Camera look target from the latest pointer offsets.
    Camera,
    /// One fixed step of motion for every dynamic entity.
    Advance,
    /// Screen-space placement derived from the advanced state.
    Present,
}
