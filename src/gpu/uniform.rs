use wgpu::util::DeviceExt;

use super::pipeline_helpers;

/// A uniform buffer together with its bind group layout and bind group.
///
/// Binding 0, visible to both vertex and fragment stages.
pub struct UniformBinding<T> {
    /// CPU-side copy of the last uploaded value.
    pub value: T,
    /// The uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Layout for pipelines that consume this uniform.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group to set at draw time.
    pub bind_group: wgpu::BindGroup,
}

impl<T: bytemuck::Pod> UniformBinding<T> {
    /// Create the buffer initialised with `value`.
    pub fn new(device: &wgpu::Device, label: &str, value: T) -> Self {
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Buffer")),
                contents: bytemuck::cast_slice(&[value]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some(&format!("{label} Bind Group Layout")),
                entries: &[pipeline_helpers::uniform_buffer(0)],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} Bind Group")),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            value,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Upload `value`.
    pub fn write(&mut self, queue: &wgpu::Queue, value: T) {
        self.value = value;
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[value]));
    }
}
