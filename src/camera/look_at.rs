use glam::{Mat4, Vec3};

use crate::camera::core::{AspectMode, ViewProjection};
use crate::input::KeyAction;
use crate::options::LookAtOptions;

/// Camera with a fixed target whose eye can be nudged in discrete steps.
#[derive(Debug, Clone, PartialEq)]
pub struct LookAtCamera {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// World up.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Projection aspect policy.
    pub aspect: AspectMode,
    /// Distance moved per nudge.
    pub nudge_step: f32,
}

impl Default for LookAtCamera {
    fn default() -> Self {
        Self::from(&LookAtOptions::default())
    }
}

impl From<&LookAtOptions> for LookAtCamera {
    fn from(opts: &LookAtOptions) -> Self {
        Self {
            eye: Vec3::from_array(opts.eye),
            target: Vec3::from_array(opts.target),
            up: Vec3::Y,
            fov_degrees: opts.fov_degrees,
            znear: opts.znear,
            zfar: opts.zfar,
            aspect: opts
                .fixed_aspect
                .map_or(AspectMode::Viewport, AspectMode::Fixed),
            nudge_step: opts.nudge_step,
        }
    }
}

impl LookAtCamera {
    /// Move the eye for a shift-eye action. Returns `false` for actions
    /// that do not move the eye.
    pub fn nudge(&mut self, action: KeyAction) -> bool {
        let step = self.nudge_step;
        match action {
            KeyAction::ShiftEyeLeft => self.eye.x += step,
            KeyAction::ShiftEyeRight => self.eye.x -= step,
            KeyAction::ShiftEyeUp => self.eye.y += step,
            KeyAction::ShiftEyeDown => self.eye.y -= step,
            _ => return false,
        }
        true
    }

    /// Build view and projection for the current eye.
    #[must_use]
    pub fn view_projection(&self, width: u32, height: u32) -> ViewProjection {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let projection = Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect.resolve(width, height),
            self.znear,
            self.zfar,
        );
        ViewProjection { view, projection }
    }
}
