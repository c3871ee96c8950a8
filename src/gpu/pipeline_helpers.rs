//! Shared wgpu boilerplate for the lesson pipelines.

use super::texture::DEPTH_FORMAT;

/// Vertex + fragment visible uniform buffer binding.
pub fn uniform_buffer(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

/// Depth state for `LESS` testing with writes on, or `None` without depth.
pub fn depth_stencil(enabled: bool) -> Option<wgpu::DepthStencilState> {
    enabled.then(|| wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    })
}

/// Load a WGSL source into a shader module.
pub fn wgsl_module(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    })
}

/// Create a triangle-list pipeline with `vs_main` / `fs_main` entry points,
/// one vertex buffer, and a single color target.
///
/// Back faces are not culled, matching the lessons' unwound geometry.
pub fn create_mesh_pipeline(
    device: &wgpu::Device,
    label: &str,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    vertex_layout: wgpu::VertexBufferLayout<'_>,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
    depth: bool,
) -> wgpu::RenderPipeline {
    let pipeline_layout =
        device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{label} Pipeline Layout")),
            bind_group_layouts,
            push_constant_ranges: &[],
        });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{label} Pipeline")),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: depth_stencil(depth),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_state_only_when_enabled() {
        assert!(depth_stencil(false).is_none());
        let state = depth_stencil(true);
        assert!(matches!(
            state,
            Some(wgpu::DepthStencilState {
                depth_compare: wgpu::CompareFunction::Less,
                depth_write_enabled: true,
                ..
            })
        ));
    }

    #[test]
    fn uniform_entry_is_visible_to_both_stages() {
        let entry = uniform_buffer(0);
        assert_eq!(entry.binding, 0);
        assert!(entry.visibility.contains(wgpu::ShaderStages::VERTEX));
        assert!(entry.visibility.contains(wgpu::ShaderStages::FRAGMENT));
    }
}
