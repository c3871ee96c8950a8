use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// How the projection aspect ratio is chosen each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AspectMode {
    /// Follow the viewport (`width / height`).
    Viewport,
    /// Always use the given ratio, whatever the window size.
    Fixed(f32),
}

impl AspectMode {
    /// Resolve the aspect ratio for a viewport. A zero-height viewport
    /// yields 1.0.
    #[must_use]
    pub fn resolve(self, width: u32, height: u32) -> f32 {
        match self {
            Self::Fixed(ratio) => ratio,
            Self::Viewport if height == 0 => 1.0,
            Self::Viewport => width as f32 / height as f32,
        }
    }
}

/// Persistent free-fly camera state, mutated once per frame by
/// [`advance`](crate::camera::controller::advance).
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// Eye position in world space.
    pub position: Vec3,
    /// Yaw in radians. Never wrapped.
    pub horizontal_angle: f32,
    /// Pitch in radians.
    pub vertical_angle: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Look sensitivity in radians per pixel of cursor offset.
    pub sensitivity: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Projection aspect policy.
    pub aspect: AspectMode,
    /// Symmetric pitch bound; `None` leaves the vertical angle unclamped.
    pub pitch_limit: Option<f32>,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            horizontal_angle: PI,
            vertical_angle: 0.0,
            fov_degrees: 45.0,
            speed: 3.0,
            sensitivity: 0.000_05,
            znear: 0.1,
            zfar: 100.0,
            aspect: AspectMode::Viewport,
            pitch_limit: Some(DEFAULT_PITCH_LIMIT),
        }
    }
}

/// Just inside straight up/down, so `up` never collapses to zero.
pub const DEFAULT_PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

impl From<&CameraOptions> for CameraState {
    fn from(opts: &CameraOptions) -> Self {
        Self {
            position: Vec3::from_array(opts.position),
            horizontal_angle: opts.horizontal_angle,
            vertical_angle: opts.vertical_angle,
            fov_degrees: opts.fov_degrees,
            speed: opts.speed,
            sensitivity: opts.sensitivity,
            znear: opts.znear,
            zfar: opts.zfar,
            aspect: opts
                .fixed_aspect
                .map_or(AspectMode::Viewport, AspectMode::Fixed),
            pitch_limit: opts.clamp_pitch.then_some(DEFAULT_PITCH_LIMIT),
        }
    }
}

/// View and projection matrices for one frame. Always freshly computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewProjection {
    /// World → camera transform.
    pub view: Mat4,
    /// Camera → clip transform (wgpu `[0, 1]` depth).
    pub projection: Mat4,
}

impl ViewProjection {
    /// `projection * view`.
    #[must_use]
    pub fn combined(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Full model-view-projection for a model matrix.
    #[must_use]
    pub fn mvp(&self, model: Mat4) -> Mat4 {
        self.combined() * model
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform: the MVP matrix plus a flat color for single-color shaders.
pub struct MvpUniform {
    /// Column-major model-view-projection matrix.
    pub mvp: [[f32; 4]; 4],
    /// RGBA color used by the solid-color shader (ignored by the
    /// vertex-color shader).
    pub color: [f32; 4],
}

impl Default for MvpUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl MvpUniform {
    /// Identity transform, opaque white.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mvp: Mat4::IDENTITY.to_cols_array_2d(),
            color: [1.0; 4],
        }
    }

    /// Identity transform with the given color.
    #[must_use]
    pub fn with_color(color: [f32; 4]) -> Self {
        Self {
            color,
            ..Self::new()
        }
    }

    /// Replace the matrix.
    pub fn set_mvp(&mut self, mvp: Mat4) {
        self.mvp = mvp.to_cols_array_2d();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tutorial_values() {
        let state = CameraState::default();
        assert_eq!(state.position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(state.horizontal_angle, PI);
        assert_eq!(state.vertical_angle, 0.0);
        assert_eq!(state.fov_degrees, 45.0);
        assert_eq!(state.speed, 3.0);
        assert_eq!(state.sensitivity, 0.000_05);
    }

    #[test]
    fn state_from_default_options_equals_default_state() {
        let state = CameraState::from(&CameraOptions::default());
        assert_eq!(state, CameraState::default());
    }

    #[test]
    fn options_select_fixed_aspect_and_disable_clamp() {
        let opts = CameraOptions {
            fixed_aspect: Some(4.0 / 3.0),
            clamp_pitch: false,
            ..CameraOptions::default()
        };
        let state = CameraState::from(&opts);
        assert_eq!(state.aspect, AspectMode::Fixed(4.0 / 3.0));
        assert_eq!(state.pitch_limit, None);
    }

    #[test]
    fn aspect_resolution() {
        assert_eq!(AspectMode::Viewport.resolve(1024, 768), 1024.0 / 768.0);
        assert_eq!(AspectMode::Viewport.resolve(800, 0), 1.0);
        assert_eq!(AspectMode::Fixed(2.0).resolve(100, 100), 2.0);
    }

    #[test]
    fn mvp_applies_model_last() {
        let vp = ViewProjection {
            view: Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0)),
            projection: Mat4::IDENTITY,
        };
        let model = Mat4::from_translation(Vec3::X);
        let p = vp.mvp(model).transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(1.0, 0.0, -5.0)).length() < 1e-6);
    }

    #[test]
    fn uniform_is_tightly_packed() {
        assert_eq!(size_of::<MvpUniform>(), 80);
        let u = MvpUniform::with_color([1.0, 0.0, 0.0, 1.0]);
        assert_eq!(u.mvp, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(u.color, [1.0, 0.0, 0.0, 1.0]);
    }
}
