use crate::error::ScrollscapeError;
use crate::gpu::pipeline_helpers::{color_target, depth_stencil};
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;

/// Everything that differs between the scene pipelines.
pub(crate) struct ScenePipelineDef<'a> {
    pub label: &'a str,
    pub source: &'a str,
    pub file_path: &'a str,
    pub bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
    pub vertex_layout: wgpu::VertexBufferLayout<'a>,
}

/// Create a depth-tested, opaque triangle-list pipeline with `vs_main` /
/// `fs_main` entry points rendering to the surface format.
pub(crate) fn create_scene_pipeline(
    context: &RenderContext,
    composer: &mut ShaderComposer,
    def: ScenePipelineDef<'_>,
) -> Result<wgpu::RenderPipeline, ScrollscapeError> {
    let shader =
        composer.compose(&context.device, def.label, def.source, def.file_path)?;

    let pipeline_layout = context.device.create_pipeline_layout(
        &wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{} Layout", def.label)),
            bind_group_layouts: def.bind_group_layouts,
            push_constant_ranges: &[],
        },
    );

    Ok(context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(def.label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[def.vertex_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &color_target(context.format(), None),
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // The cone cap and knot are seen from every side as they
                // spin; draw both faces.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(depth_stencil(true)),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        }))
}

/// Uniform buffer initialized from a single Pod value.
pub(crate) fn uniform_buffer_init<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    value: &T,
) -> wgpu::Buffer {
    use wgpu::util::DeviceExt;
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::bytes_of(value),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}
