use glam::Mat4;

use super::mesh::Mesh;
use super::{FrameContext, Lesson, NIGHT_BLUE};
use crate::camera::LookAtCamera;
use crate::gpu::RenderContext;
use crate::options::LookAtOptions;

const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Model rotation at `seconds` into the lesson: a swing about +Y whose
/// angle (radians) follows `cos(seconds)`, so the triangle rocks back and
/// forth between ±1 rad.
#[must_use]
pub fn model_matrix(seconds: f32) -> Mat4 {
    Mat4::from_rotation_y(seconds.cos())
}

/// A blue triangle rocking about the Y axis, seen from a fixed eye.
pub struct RotatingTriangle {
    mesh: Mesh,
    camera: LookAtCamera,
}

impl RotatingTriangle {
    /// Upload the triangle and set up the look-at camera.
    #[must_use]
    pub fn new(context: &RenderContext, look_at: &LookAtOptions) -> Self {
        Self {
            mesh: Mesh::solid_triangle(context, "Rotating Triangle", BLUE),
            camera: LookAtCamera::from(look_at),
        }
    }
}

impl Lesson for RotatingTriangle {
    fn title(&self) -> &'static str {
        "Rotating Triangle"
    }

    fn clear_color(&self) -> wgpu::Color {
        NIGHT_BLUE
    }

    fn update(&mut self, frame: &FrameContext, queue: &wgpu::Queue) {
        let (width, height) = frame.viewport;
        let vp = self.camera.view_projection(width, height);
        self.mesh
            .set_mvp(queue, vp.mvp(model_matrix(frame.elapsed_total)));
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        self.mesh.draw(pass);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn starts_rotated_by_one_radian() {
        let expected = Mat4::from_rotation_y(1.0);
        assert!(model_matrix(0.0).abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn rotation_keeps_y_axis_fixed() {
        for t in [0.0_f32, 0.7, 2.0, 10.0] {
            let y = model_matrix(t).transform_vector3(Vec3::Y);
            assert!(y.abs_diff_eq(Vec3::Y, 1e-6));
        }
    }

    #[test]
    fn swing_passes_through_identity() {
        // cos(π/2) = 0
        let m = model_matrix(std::f32::consts::FRAC_PI_2);
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }
}
