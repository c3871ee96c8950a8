use serde::{Deserialize, Serialize};

use crate::camera::MoveDirection;

/// Lesson-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// ArrowUp = "move_forward"
/// Escape = "quit"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Fly along the view direction while held.
    MoveForward,
    /// Fly against the view direction while held.
    MoveBackward,
    /// Slide left while held.
    StrafeLeft,
    /// Slide right while held.
    StrafeRight,
    /// Step the look-at eye toward +X.
    ShiftEyeLeft,
    /// Step the look-at eye toward -X.
    ShiftEyeRight,
    /// Step the look-at eye toward +Y.
    ShiftEyeUp,
    /// Step the look-at eye toward -Y.
    ShiftEyeDown,
    /// Close the window.
    Quit,
}

impl KeyAction {
    /// Movement direction for held actions, `None` for discrete ones.
    #[must_use]
    pub const fn move_direction(self) -> Option<MoveDirection> {
        match self {
            Self::MoveForward => Some(MoveDirection::Forward),
            Self::MoveBackward => Some(MoveDirection::Backward),
            Self::StrafeLeft => Some(MoveDirection::StrafeLeft),
            Self::StrafeRight => Some(MoveDirection::StrafeRight),
            _ => None,
        }
    }

    /// Whether the action repeats while the key auto-repeats.
    #[must_use]
    pub const fn repeats(self) -> bool {
        matches!(
            self,
            Self::ShiftEyeLeft
                | Self::ShiftEyeRight
                | Self::ShiftEyeUp
                | Self::ShiftEyeDown
        )
    }
}
