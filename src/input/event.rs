/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// tracks cursor and key state and reports discrete key actions.
///
/// # Example
///
/// ```ignore
/// let action = processor.handle_event(InputEvent::CursorMoved {
///     x: 100.0,
///     y: 200.0,
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Keyboard key changed state.
    Key {
        /// Physical key in `winit::keyboard::KeyCode` debug form
        /// (`"ArrowUp"`, `"KeyA"`, `"Escape"`).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Auto-repeat of a key that is already down.
        repeat: bool,
    },
}

impl InputEvent {
    /// Shorthand for a fresh key press.
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::Key {
            key: key.to_owned(),
            pressed: true,
            repeat: false,
        }
    }

    /// Shorthand for a key release.
    #[must_use]
    pub fn key_up(key: &str) -> Self {
        Self::Key {
            key: key.to_owned(),
            pressed: false,
            repeat: false,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit keyboard event. Keys without a physical code are
    /// dropped.
    #[must_use]
    pub fn from_winit_key(event: &winit::event::KeyEvent) -> Option<Self> {
        use winit::keyboard::PhysicalKey;
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        Some(Self::Key {
            key: format!("{code:?}"),
            pressed: event.state == winit::event::ElementState::Pressed,
            repeat: event.repeat,
        })
    }
}
