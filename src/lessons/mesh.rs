//! One pipeline, one vertex buffer, one MVP uniform: everything a lesson
//! needs to put its geometry on screen.

use glam::Mat4;

use crate::camera::MvpUniform;
use crate::geometry::{self, ColoredVertex, PositionVertex};
use crate::gpu::{pipeline_helpers, RenderContext, UniformBinding};

/// A drawable triangle list with its own uniform.
pub(crate) struct Mesh {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    uniform: UniformBinding<MvpUniform>,
}

impl Mesh {
    /// The lesson triangle, drawn in a single flat color.
    pub(crate) fn solid_triangle(
        context: &RenderContext,
        label: &str,
        color: [f32; 4],
    ) -> Self {
        let device = &context.device;
        let uniform =
            UniformBinding::new(device, label, MvpUniform::with_color(color));
        let shader = pipeline_helpers::wgsl_module(
            device,
            &format!("{label} Shader"),
            include_str!("../../assets/shaders/solid.wgsl"),
        );
        let pipeline = pipeline_helpers::create_mesh_pipeline(
            device,
            label,
            &shader,
            context.format(),
            PositionVertex::layout(),
            &[&uniform.layout],
            false,
        );
        let vertices = &geometry::triangle::VERTICES;
        Self {
            pipeline,
            vertex_buffer: geometry::vertex_buffer(device, label, vertices),
            vertex_count: vertices.len() as u32,
            uniform,
        }
    }

    /// The 36-vertex cube with per-vertex colors, depth tested.
    pub(crate) fn colored_cube(context: &RenderContext, label: &str) -> Self {
        let device = &context.device;
        let uniform = UniformBinding::new(device, label, MvpUniform::new());
        let shader = pipeline_helpers::wgsl_module(
            device,
            &format!("{label} Shader"),
            include_str!("../../assets/shaders/vertex_color.wgsl"),
        );
        let pipeline = pipeline_helpers::create_mesh_pipeline(
            device,
            label,
            &shader,
            context.format(),
            ColoredVertex::layout(),
            &[&uniform.layout],
            true,
        );
        Self {
            pipeline,
            vertex_buffer: geometry::vertex_buffer(
                device,
                label,
                &geometry::cube::VERTICES,
            ),
            vertex_count: geometry::cube::VERTEX_COUNT,
            uniform,
        }
    }

    /// Upload a new model-view-projection matrix, keeping the color.
    pub(crate) fn set_mvp(&mut self, queue: &wgpu::Queue, mvp: Mat4) {
        let mut value = self.uniform.value;
        value.set_mvp(mvp);
        self.uniform.write(queue, value);
    }

    /// Record the draw into an open render pass.
    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.uniform.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }
}
