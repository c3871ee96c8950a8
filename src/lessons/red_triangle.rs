use super::mesh::Mesh;
use super::{FrameContext, Lesson};
use crate::gpu::RenderContext;

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// One red triangle with no transform at all.
pub struct RedTriangle {
    mesh: Mesh,
}

impl RedTriangle {
    /// Upload the triangle. Its MVP stays the identity.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        Self {
            mesh: Mesh::solid_triangle(context, "Red Triangle", RED),
        }
    }
}

impl Lesson for RedTriangle {
    fn title(&self) -> &'static str {
        "Red Triangle"
    }

    fn clear_color(&self) -> wgpu::Color {
        wgpu::Color::BLACK
    }

    fn update(&mut self, _frame: &FrameContext, _queue: &wgpu::Queue) {}

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        self.mesh.draw(pass);
    }
}
