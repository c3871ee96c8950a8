//! Lesson options with TOML preset support.
//!
//! Startup lesson, window size, free-fly camera defaults, look-at camera and
//! keybindings are consolidated here. Options serialize to/from TOML so a
//! preset can override just the parts it cares about.

mod camera;
mod look_at;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use look_at::LookAtOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::TutorialError;
use crate::input::KeyBindings;
use crate::lessons::LessonKind;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Lesson started when none is named on the command line.
    pub lesson: LessonKind,
    /// Window size and title.
    pub window: WindowOptions,
    /// Free-fly camera starting state.
    pub camera: CameraOptions,
    /// Fixed-target camera used by the triangle and cube lessons.
    pub look_at: LookAtOptions,
    /// Keyboard binding options.
    pub keybindings: KeyBindings,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TutorialError> {
        let content = std::fs::read_to_string(path).map_err(TutorialError::Io)?;
        let opts = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Parse options from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, TutorialError> {
        toml::from_str(content)
            .map_err(|e| TutorialError::OptionsParse(e.to_string()))
    }

    /// Serialize to pretty-printed TOML.
    pub fn to_toml(&self) -> Result<String, TutorialError> {
        toml::to_string_pretty(self)
            .map_err(|e| TutorialError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TutorialError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TutorialError::Io)?;
        }
        std::fs::write(path, content).map_err(TutorialError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        match std::fs::read_dir(dir) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) =
                            path.file_stem().and_then(|s| s.to_str())
                        {
                            names.push(stem.to_owned());
                        }
                    }
                }
            }
            Err(e) => {
                log::warn!("cannot list presets in {}: {e}", dir.display());
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = opts.to_toml().unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn optional_fields_round_trip_when_set() {
        let mut opts = Options::default();
        opts.camera.fixed_aspect = Some(4.0 / 3.0);
        opts.window.title = Some("Tutorial 6".into());
        let parsed = Options::from_toml(&opts.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.camera.fixed_aspect, Some(4.0 / 3.0));
        assert_eq!(parsed.window.title.as_deref(), Some("Tutorial 6"));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
speed = 6.5
clamp_pitch = false
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.speed, 6.5);
        assert!(!opts.camera.clamp_pitch);
        // Everything else should be default
        assert_eq!(opts.camera.position, [0.0, 0.0, 5.0]);
        assert_eq!(opts.window.width, 1024);
        assert_eq!(opts.lesson, LessonKind::FreeFly);
        assert_eq!(opts.look_at.eye, [4.0, 3.0, 3.0]);
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn keybindings_section_replaces_map() {
        let toml_str = r#"
[keybindings.bindings]
KeyW = "move_forward"
KeyQ = "quit"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("Escape"), None);
    }

    #[test]
    fn lesson_uses_kebab_case_names() {
        let opts = Options::from_toml("lesson = \"colored-cube\"").unwrap();
        assert_eq!(opts.lesson, LessonKind::ColoredCube);
        assert!(opts.to_toml().unwrap().contains("lesson = \"colored-cube\""));
    }

    #[test]
    fn bad_toml_is_an_options_error() {
        let err = Options::from_toml("[camera]\nspeed = \"fast\"").unwrap_err();
        assert!(matches!(err, TutorialError::OptionsParse(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("tutorial3d-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.window.width = 640;
        opts.save(&dir.join("small.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("small.toml")).unwrap();
        assert_eq!(loaded.window.width, 640);
        assert_eq!(Options::list_presets(&dir), vec!["default", "small"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/definitely/not/here.toml"))
            .unwrap_err();
        assert!(matches!(err, TutorialError::Io(_)));
    }

    #[test]
    fn list_presets_of_missing_dir_is_empty() {
        assert!(Options::list_presets(Path::new("/definitely/not/here"))
            .is_empty());
    }
}
