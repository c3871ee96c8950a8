use glam::Mat4;

use super::mesh::Mesh;
use super::{FrameContext, Lesson, NIGHT_BLUE};
use crate::camera::LookAtCamera;
use crate::gpu::RenderContext;
use crate::input::KeyAction;
use crate::options::LookAtOptions;

/// The vertex-colored cube; shift-eye keys nudge the camera.
pub struct ColoredCube {
    mesh: Mesh,
    camera: LookAtCamera,
}

impl ColoredCube {
    /// Upload the cube and set up the look-at camera.
    #[must_use]
    pub fn new(context: &RenderContext, look_at: &LookAtOptions) -> Self {
        Self {
            mesh: Mesh::colored_cube(context, "Colored Cube"),
            camera: LookAtCamera::from(look_at),
        }
    }
}

impl Lesson for ColoredCube {
    fn title(&self) -> &'static str {
        "Colored Cube"
    }

    fn clear_color(&self) -> wgpu::Color {
        NIGHT_BLUE
    }

    fn uses_depth(&self) -> bool {
        true
    }

    fn update(&mut self, frame: &FrameContext, queue: &wgpu::Queue) {
        let (width, height) = frame.viewport;
        let vp = self.camera.view_projection(width, height);
        self.mesh.set_mvp(queue, vp.mvp(Mat4::IDENTITY));
    }

    fn handle_action(&mut self, action: KeyAction) -> bool {
        let moved = self.camera.nudge(action);
        if moved {
            log::debug!("eye moved to {}", self.camera.eye);
        }
        moved
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        self.mesh.draw(pass);
    }
}
