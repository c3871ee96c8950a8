use glam::Mat4;

use super::mesh::Mesh;
use super::{FrameContext, Lesson, NIGHT_BLUE};
use crate::camera::{self, CameraState};
use crate::gpu::RenderContext;
use crate::options::CameraOptions;

/// The colored cube explored with a mouse-look, arrow-key camera.
pub struct FreeFly {
    mesh: Mesh,
    camera: CameraState,
    recenter_cursor: bool,
}

impl FreeFly {
    /// Upload the cube and place the camera at its starting state.
    #[must_use]
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        Self {
            mesh: Mesh::colored_cube(context, "Free Fly"),
            camera: CameraState::from(options),
            recenter_cursor: options.recenter_cursor,
        }
    }

    /// Current camera state.
    #[must_use]
    pub const fn camera(&self) -> &CameraState {
        &self.camera
    }
}

impl Lesson for FreeFly {
    fn title(&self) -> &'static str {
        "Free Fly"
    }

    fn clear_color(&self) -> wgpu::Color {
        NIGHT_BLUE
    }

    fn uses_depth(&self) -> bool {
        true
    }

    fn wants_cursor_recenter(&self) -> bool {
        self.recenter_cursor
    }

    fn update(&mut self, frame: &FrameContext, queue: &wgpu::Queue) {
        let (width, height) = frame.viewport;
        let vp = camera::advance(&mut self.camera, &frame.input, width, height);
        self.mesh.set_mvp(queue, vp.mvp(Mat4::IDENTITY));
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        self.mesh.draw(pass);
    }
}
