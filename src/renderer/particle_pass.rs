//! Instanced billboard pass for the particle cloud.

use crate::error::ScrollscapeError;
use crate::gpu::dynamic_buffer::TypedBuffer;
use crate::gpu::pipeline_helpers::uniform_buffer;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::renderer::pipeline_util::{
    create_scene_pipeline, uniform_buffer_init, ScenePipelineDef,
};
use crate::renderer::uniforms::PointsUniform;
use crate::scene::Scene;

/// Per-instance particle center. Must match `particles.wgsl` location 0.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    /// Object-space center of the point.
    pub center: [f32; 3],
}

/// Vertices per particle quad (two triangles, no index buffer).
const QUAD_VERTICES: u32 = 6;

fn instance_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<ParticleInstance>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    }
}

/// Particle instances from scene positions.
#[must_use]
pub(crate) fn particle_instances(scene: &Scene) -> Vec<ParticleInstance> {
    scene
        .particles
        .positions
        .iter()
        .map(|p| ParticleInstance {
            center: p.to_array(),
        })
        .collect()
}

/// Pipeline, instance buffer and material uniform for the particle cloud.
pub(crate) struct ParticlePass {
    pipeline: wgpu::RenderPipeline,
    instances: TypedBuffer<ParticleInstance>,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ParticlePass {
    /// Upload the particle cloud and build the points pipeline.
    pub fn new(
        context: &RenderContext,
        composer: &mut ShaderComposer,
        frame_layout: &wgpu::BindGroupLayout,
        scene: &Scene,
    ) -> Result<Self, ScrollscapeError> {
        let device = &context.device;
        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Points Material Layout"),
                entries: &[uniform_buffer(
                    0,
                    wgpu::ShaderStages::VERTEX_FRAGMENT,
                )],
            });

        let pipeline = create_scene_pipeline(
            context,
            composer,
            ScenePipelineDef {
                label: "Particles",
                source: include_str!("../../assets/shaders/particles.wgsl"),
                file_path: "particles.wgsl",
                bind_group_layouts: &[frame_layout, &layout],
                vertex_layout: instance_buffer_layout(),
            },
        )?;

        let uniform_buffer = uniform_buffer_init(
            device,
            "Points Material",
            &PointsUniform::new(&scene.points, scene.particles.offset_y),
        );
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Points Material Bind Group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let instances = TypedBuffer::new_with_data(
            device,
            "Particle Instances",
            &particle_instances(scene),
            wgpu::BufferUsages::VERTEX,
        );

        Ok(Self {
            pipeline,
            instances,
            uniform_buffer,
            bind_group,
        })
    }

    /// Re-upload particle positions after the cloud was regenerated.
    pub fn upload_instances(&mut self, context: &RenderContext, scene: &Scene) {
        let reallocated = self.instances.write(
            &context.device,
            &context.queue,
            &particle_instances(scene),
        );
        if reallocated {
            log::debug!("particle buffer grew to {} instances", self.instances.count());
        }
    }

    /// Write this frame's color, size and bob offset.
    pub fn prepare(&self, queue: &wgpu::Queue, scene: &Scene) {
        let uniform = PointsUniform::new(&scene.points, scene.particles.offset_y);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniform));
    }

    /// Draw the cloud. The frame bind group must be set at group 0.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.instances.is_empty() {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(1, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.instances.buffer().slice(..));
        render_pass.draw(0..QUAD_VERTICES, 0..self.instances.count() as u32);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::options::Options;

    #[test]
    fn one_instance_per_particle() {
        let scene = Scene::build(&Options::default(), &mut StdRng::seed_from_u64(11));
        let instances = particle_instances(&scene);
        assert_eq!(instances.len(), 200);
        assert_eq!(instances[0].center, scene.particles.positions[0].to_array());
        assert_eq!(size_of::<ParticleInstance>(), 12);
    }
}
