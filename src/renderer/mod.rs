//! GPU side of the scene: uniforms, the toon mesh pass and the particle
//! pass, drawn into one depth-tested render pass.

mod mesh_pass;
mod particle_pass;
pub(crate) mod pipeline_util;
pub mod uniforms;

pub use particle_pass::ParticleInstance;

use crate::camera::{Camera, CameraUniform};
use crate::error::ScrollscapeError;
use crate::gpu::pipeline_helpers::uniform_buffer;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::DepthTexture;
use crate::scene::Scene;
use crate::util::Color;
use mesh_pass::MeshPass;
use particle_pass::ParticlePass;
use pipeline_util::uniform_buffer_init;
use uniforms::LightUniform;

/// Camera and light uniforms shared by every pipeline at group 0.
struct FrameBindings {
    layout: wgpu::BindGroupLayout,
    camera_buffer: wgpu::Buffer,
    light_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl FrameBindings {
    fn new(device: &wgpu::Device, scene: &Scene) -> Self {
        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Frame Layout"),
                entries: &[
                    uniform_buffer(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                    uniform_buffer(1, wgpu::ShaderStages::FRAGMENT),
                ],
            });
        let camera_buffer =
            uniform_buffer_init(device, "Camera Uniform", &CameraUniform::new());
        let light_buffer = uniform_buffer_init(
            device,
            "Light Uniform",
            &LightUniform::from_light(&scene.light),
        );
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: light_buffer.as_entire_binding(),
                },
            ],
        });
        Self {
            layout,
            camera_buffer,
            light_buffer,
            bind_group,
        }
    }
}

/// Background clear color for a frame.
///
/// With a transparent surface the canvas clears to fully transparent so
/// the page background (tweened in CSS) shows through.
#[must_use]
pub fn clear_color(background: Color, transparent: bool) -> wgpu::Color {
    if transparent {
        return wgpu::Color::TRANSPARENT;
    }
    let [r, g, b] = background.to_linear();
    wgpu::Color {
        r: f64::from(r),
        g: f64::from(g),
        b: f64::from(b),
        a: 1.0,
    }
}

/// Draws the section meshes and the particle cloud.
pub struct SceneRenderer {
    frame: FrameBindings,
    camera_uniform: CameraUniform,
    meshes: MeshPass,
    particles: ParticlePass,
    depth: DepthTexture,
    generation: u64,
}

impl SceneRenderer {
    /// Compile the pipelines and upload the scene's geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::Shader`] if a shader fails to compose.
    pub fn new(
        context: &RenderContext,
        scene: &Scene,
    ) -> Result<Self, ScrollscapeError> {
        let mut composer = ShaderComposer::new()?;
        let frame = FrameBindings::new(&context.device, scene);
        let meshes =
            MeshPass::new(context, &mut composer, &frame.layout, scene)?;
        let particles =
            ParticlePass::new(context, &mut composer, &frame.layout, scene)?;
        let (width, height) = context.size();
        let depth = DepthTexture::new(&context.device, width, height);

        log::debug!(
            "scene renderer ready: {} meshes, {} particles",
            scene.meshes.len(),
            scene.particles.len()
        );

        Ok(Self {
            frame,
            camera_uniform: CameraUniform::new(),
            meshes,
            particles,
            depth,
            generation: scene.generation(),
        })
    }

    /// Recreate the depth attachment for a new surface size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth = DepthTexture::new(device, width, height);
    }

    /// Upload this frame's uniforms. Particles and the gradient map are
    /// re-uploaded only when the scene's generation changed.
    pub fn prepare(
        &mut self,
        context: &RenderContext,
        scene: &Scene,
        camera: &Camera,
    ) {
        if scene.generation() != self.generation {
            self.generation = scene.generation();
            self.particles.upload_instances(context, scene);
            self.meshes.set_ramp(context, &scene.toon.ramp);
        }

        let queue = &context.queue;
        self.camera_uniform.update_view_proj(camera);
        queue.write_buffer(
            &self.frame.camera_buffer,
            0,
            bytemuck::bytes_of(&self.camera_uniform),
        );
        queue.write_buffer(
            &self.frame.light_buffer,
            0,
            bytemuck::bytes_of(&LightUniform::from_light(&scene.light)),
        );
        self.meshes.prepare(queue, scene);
        self.particles.prepare(queue, scene);
    }

    /// Encode the scene pass into `view`.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear: wgpu::Color,
    ) {
        let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene render pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(
                wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                },
            ),
            ..Default::default()
        });

        rp.set_bind_group(0, &self.frame.bind_group, &[]);
        self.meshes.draw(&mut rp);
        self.particles.draw(&mut rp);
    }
}
