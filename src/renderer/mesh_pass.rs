//! Toon-shaded draw pass for the section meshes.
//!
//! Each mesh owns its vertex/index buffers and a material uniform (model
//! matrix, color, roughness). The gradient-map texture is shared; its bind
//! groups are rebuilt when the ramp changes.

use crate::error::ScrollscapeError;
use crate::gpu::dynamic_buffer::TypedBuffer;
use crate::gpu::pipeline_helpers::{
    nearest_sampler, non_filtering_sampler, texture_2d, uniform_buffer,
};
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::ToonRamp;
use crate::renderer::pipeline_util::{
    create_scene_pipeline, uniform_buffer_init, ScenePipelineDef,
};
use crate::renderer::uniforms::MaterialUniform;
use crate::scene::{Scene, Vertex};

/// Vertex layout of [`Vertex`]: position at location 0, normal at 1.
fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    }
}

/// GPU resources for one section mesh.
struct MeshDraw {
    vertex_buffer: TypedBuffer<Vertex>,
    index_buffer: TypedBuffer<u32>,
    material_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Pipeline plus per-mesh buffers for the section meshes.
pub(crate) struct MeshPass {
    pipeline: wgpu::RenderPipeline,
    layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    ramp: ToonRamp,
    draws: Vec<MeshDraw>,
}

impl MeshPass {
    /// Upload every section mesh and build the toon pipeline.
    pub fn new(
        context: &RenderContext,
        composer: &mut ShaderComposer,
        frame_layout: &wgpu::BindGroupLayout,
        scene: &Scene,
    ) -> Result<Self, ScrollscapeError> {
        let device = &context.device;
        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Toon Material Layout"),
                entries: &[
                    uniform_buffer(
                        0,
                        wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ),
                    texture_2d(1),
                    non_filtering_sampler(2),
                ],
            });

        let pipeline = create_scene_pipeline(
            context,
            composer,
            ScenePipelineDef {
                label: "Toon Mesh",
                source: include_str!("../../assets/shaders/mesh.wgsl"),
                file_path: "mesh.wgsl",
                bind_group_layouts: &[frame_layout, &layout],
                vertex_layout: vertex_buffer_layout(),
            },
        )?;

        let sampler = nearest_sampler(device, "Toon Ramp Sampler");
        let ramp = ToonRamp::new(device, &context.queue, &scene.toon.ramp);

        let draws = scene
            .meshes
            .iter()
            .map(|mesh| {
                let label = format!("{:?}", mesh.shape);
                let material_buffer = uniform_buffer_init(
                    device,
                    &format!("{label} Material"),
                    &MaterialUniform::new(mesh, &scene.toon),
                );
                let bind_group = create_material_bind_group(
                    device,
                    &layout,
                    &material_buffer,
                    &ramp,
                    &sampler,
                );
                MeshDraw {
                    vertex_buffer: TypedBuffer::new_with_data(
                        device,
                        &format!("{label} Vertices"),
                        &mesh.geometry.vertices,
                        wgpu::BufferUsages::VERTEX,
                    ),
                    index_buffer: TypedBuffer::new_with_data(
                        device,
                        &format!("{label} Indices"),
                        &mesh.geometry.indices,
                        wgpu::BufferUsages::INDEX,
                    ),
                    material_buffer,
                    bind_group,
                }
            })
            .collect();

        Ok(Self {
            pipeline,
            layout,
            sampler,
            ramp,
            draws,
        })
    }

    /// Re-upload the gradient map and rebuild the material bind groups.
    pub fn set_ramp(&mut self, context: &RenderContext, levels: &[f32]) {
        self.ramp = ToonRamp::new(&context.device, &context.queue, levels);
        for draw in &mut self.draws {
            draw.bind_group = create_material_bind_group(
                &context.device,
                &self.layout,
                &draw.material_buffer,
                &self.ramp,
                &self.sampler,
            );
        }
    }

    /// Write this frame's transforms and material values.
    pub fn prepare(&self, queue: &wgpu::Queue, scene: &Scene) {
        for (draw, mesh) in self.draws.iter().zip(&scene.meshes) {
            let uniform = MaterialUniform::new(mesh, &scene.toon);
            queue.write_buffer(
                &draw.material_buffer,
                0,
                bytemuck::bytes_of(&uniform),
            );
        }
    }

    /// Draw every mesh. The frame bind group must be set at group 0.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        for draw in &self.draws {
            if draw.index_buffer.is_empty() {
                continue;
            }
            render_pass.set_bind_group(1, &draw.bind_group, &[]);
            render_pass.set_vertex_buffer(0, draw.vertex_buffer.buffer().slice(..));
            render_pass.set_index_buffer(
                draw.index_buffer.buffer().slice(..),
                wgpu::IndexFormat::Uint32,
            );
            render_pass.draw_indexed(0..draw.index_buffer.count() as u32, 0, 0..1);
        }
    }
}

fn create_material_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    material_buffer: &wgpu::Buffer,
    ramp: &ToonRamp,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Toon Material Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: material_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&ramp.view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
