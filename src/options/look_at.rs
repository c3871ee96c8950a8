use serde::{Deserialize, Serialize};

/// Fixed-target camera used by the triangle and cube lessons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LookAtOptions {
    /// Eye position.
    pub eye: [f32; 3],
    /// Look-at target.
    pub target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Fixed projection aspect; unset follows the window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_aspect: Option<f32>,
    /// World units moved per shift-eye key press.
    pub nudge_step: f32,
}

impl Default for LookAtOptions {
    fn default() -> Self {
        Self {
            eye: [4.0, 3.0, 3.0],
            target: [0.0, 0.0, 0.0],
            fov_degrees: 45.0,
            znear: 0.1,
            zfar: 100.0,
            fixed_aspect: None,
            nudge_step: 0.1,
        }
    }
}
