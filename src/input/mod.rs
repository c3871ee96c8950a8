//! Input handling: event types, key actions, and the input processor that
//! turns raw window events into per-frame camera input.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Cursor/key state tracking and key bindings.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::{InputProcessor, KeyBindings};
