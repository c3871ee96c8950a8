//! Converts raw platform events into camera input and key actions.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! held movement keys) and the key-binding map. It sits between raw window
//! events and the lesson engine.

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use super::keyboard::KeyAction;
use crate::camera::{FrameInput, HeldKeys};

/// Maps physical key strings to [`KeyAction`]s.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"ArrowUp"`, `"Escape"`, etc. Several keys may share one
/// action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → action.
    bindings: HashMap<String, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("ArrowUp".into(), KeyAction::MoveForward),
            ("ArrowDown".into(), KeyAction::MoveBackward),
            ("ArrowLeft".into(), KeyAction::StrafeLeft),
            ("ArrowRight".into(), KeyAction::StrafeRight),
            ("KeyA".into(), KeyAction::ShiftEyeLeft),
            ("KeyD".into(), KeyAction::ShiftEyeRight),
            ("KeyW".into(), KeyAction::ShiftEyeUp),
            ("KeyS".into(), KeyAction::ShiftEyeDown),
            ("Escape".into(), KeyAction::Quit),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// An empty binding map.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Look up the action for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding of `key`.
    pub fn bind(&mut self, key: impl Into<String>, action: KeyAction) {
        let _ = self.bindings.insert(key.into(), action);
    }

    /// Remove the binding for `key`, returning the action it had.
    pub fn unbind(&mut self, key: &str) -> Option<KeyAction> {
        self.bindings.remove(key)
    }

    /// Keys bound to `action`, sorted.
    #[must_use]
    pub fn keys_for(&self, action: KeyAction) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| k.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Tracks cursor position and held movement keys between frames.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(action) = processor.handle_event(event) {
///     engine.apply(action);
/// }
/// // Once per frame:
/// let input = processor.frame_input(dt, width, height);
/// ```
pub struct InputProcessor {
    /// Last cursor position, `None` until the first cursor event.
    cursor: Option<Vec2>,
    /// Physical keys currently down that are bound to a movement action.
    held_keys: HashSet<String>,
    /// Key string → action mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeyBindings::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            cursor: None,
            held_keys: HashSet::new(),
            key_bindings,
        }
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Movement directions currently held. A direction stays held while
    /// any key bound to it is down.
    #[must_use]
    pub fn held(&self) -> HeldKeys {
        let mut held = HeldKeys::NONE;
        self.held_keys
            .iter()
            .filter_map(|key| self.key_bindings.lookup(key))
            .filter_map(KeyAction::move_direction)
            .for_each(|dir| held.insert(dir));
        held
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Process a raw input event. Returns the discrete action triggered by a
    /// key press (or by an auto-repeat, for actions that repeat).
    pub fn handle_event(&mut self, event: InputEvent) -> Option<KeyAction> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Some(Vec2::new(x, y));
                None
            }
            InputEvent::Key {
                key,
                pressed,
                repeat,
            } => self.handle_key(&key, pressed, repeat),
        }
    }

    fn handle_key(
        &mut self,
        key: &str,
        pressed: bool,
        repeat: bool,
    ) -> Option<KeyAction> {
        let action = self.key_bindings.lookup(key)?;

        if action.move_direction().is_some() {
            if pressed {
                let _ = self.held_keys.insert(key.to_owned());
            } else {
                let _ = self.held_keys.remove(key);
            }
            return None;
        }

        if pressed && (!repeat || action.repeats()) {
            log::debug!("key {key} -> {action:?}");
            Some(action)
        } else {
            None
        }
    }

    /// Snapshot for this frame. Before any cursor event the cursor counts
    /// as centered.
    #[must_use]
    pub fn frame_input(&self, elapsed: f32, width: u32, height: u32) -> FrameInput {
        let held = self.held();
        match self.cursor {
            Some(cursor) => {
                FrameInput::from_cursor(elapsed, cursor, width, height, held)
            }
            None => FrameInput {
                elapsed,
                cursor_delta: Vec2::ZERO,
                held,
            },
        }
    }

    /// Record that the OS cursor was warped to the viewport center.
    pub fn recenter(&mut self, width: u32, height: u32) {
        self.cursor = Some(Vec2::new((width / 2) as f32, (height / 2) as f32));
    }

    /// Ask `warp` to move the OS cursor to the viewport center and record
    /// the move only if it succeeded. On failure the tracked cursor is left
    /// alone, so the offset keeps turning the camera until a real cursor
    /// event arrives.
    ///
    /// # Errors
    ///
    /// Returns whatever `warp` returns.
    pub fn recenter_with<E>(
        &mut self,
        width: u32,
        height: u32,
        warp: impl FnOnce(u32, u32) -> Result<(), E>,
    ) -> Result<(), E> {
        warp(width / 2, height / 2)?;
        self.recenter(width, height);
        Ok(())
    }

    /// Drop all held keys (e.g. when the window loses focus and release
    /// events will not arrive).
    pub fn release_all(&mut self) {
        self.held_keys.clear();
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
