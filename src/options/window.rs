use serde::{Deserialize, Serialize};

/// Initial window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WindowOptions {
    /// Inner width in logical pixels.
    pub width: u32,
    /// Inner height in logical pixels.
    pub height: u32,
    /// Title override; unset uses the lesson title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Wait for vsync when presenting.
    pub vsync: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: None,
            vsync: true,
        }
    }
}
