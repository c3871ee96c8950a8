use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Free-fly camera starting state and projection parameters.
pub struct CameraOptions {
    /// Starting eye position.
    pub position: [f32; 3],
    /// Starting yaw in radians (π looks toward -Z).
    pub horizontal_angle: f32,
    /// Starting pitch in radians (0 looks at the horizon).
    pub vertical_angle: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Radians of turn per pixel of cursor offset from center.
    pub sensitivity: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Fixed projection aspect (e.g. `1.3333`); unset follows the window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_aspect: Option<f32>,
    /// Keep the pitch just inside straight up/down.
    pub clamp_pitch: bool,
    /// Warp the OS cursor back to the window center after every frame.
    pub recenter_cursor: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 5.0],
            horizontal_angle: PI,
            vertical_angle: 0.0,
            fov_degrees: 45.0,
            speed: 3.0,
            sensitivity: 0.000_05,
            znear: 0.1,
            zfar: 100.0,
            fixed_aspect: None,
            clamp_pitch: true,
            recenter_cursor: true,
        }
    }
}
