//! The scroll engine: GPU context, animated stage and renderer behind one
//! handle the native viewer and the web host drive.

mod input;
mod options;
pub mod stage;

pub use stage::{pulse_factor, FrameReport, Stage};

use crate::error::ScrollscapeError;
use crate::gpu::render_context::{physical_size, RenderContext};
use crate::input::clamp_pixel_ratio;
use crate::options::Options;
use crate::renderer::{clear_color, SceneRenderer};
use crate::util::FrameClock;

/// The scroll-driven scene engine.
///
/// Owns the GPU context, the [`Stage`] (scene, input, tweens, camera) and
/// the [`SceneRenderer`].
///
/// # Frame loop
///
/// Forward page events via [`handle_input`](Self::handle_input). Each
/// display frame, call [`update`](Self::update) and apply the returned
/// [`FrameReport`] to the page (background, title styles), then
/// [`render`](Self::render). On a lost or outdated surface, call
/// [`reconfigure`](Self::reconfigure) and try again next frame.
pub struct ScrollEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    stage: Stage,
    renderer: SceneRenderer,
    clock: FrameClock,
    /// Whether the surface is composited over the page.
    transparent: bool,
}

impl ScrollEngine {
    /// Engine for a surface whose CSS size is `css_size` at the given
    /// device pixel ratio.
    ///
    /// With `transparent` set the canvas clears to transparent and the
    /// page background shows through; otherwise the tweened background
    /// color is the clear color.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError`] if GPU initialization or shader
    /// composition fails.
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        css_size: (f32, f32),
        pixel_ratio: f64,
        options: Options,
        transparent: bool,
    ) -> Result<Self, ScrollscapeError> {
        let (width, height) = css_size;
        let ratio = clamp_pixel_ratio(pixel_ratio, options.camera.max_pixel_ratio);
        let context =
            RenderContext::new(target, physical_size(width, height, ratio), transparent)
                .await?;
        let stage = Stage::new(options, width, height);
        let renderer = SceneRenderer::new(&context, stage.scene())?;

        log::info!(
            "scroll engine ready: {width}x{height} css px, pixel ratio {ratio}"
        );

        Ok(Self {
            context,
            stage,
            renderer,
            clock: FrameClock::new(),
            transparent,
        })
    }

    /// Advance the clock and the stage by one frame.
    pub fn update(&mut self) -> FrameReport {
        let frame = self.clock.tick();
        self.stage.tick(frame)
    }

    /// Draw the current scene and present it.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer
            .prepare(&self.context, self.stage.scene(), self.stage.camera());
        let mut encoder = self.context.create_encoder();
        self.renderer.render(
            &mut encoder,
            &view,
            clear_color(self.stage.scene().background, self.transparent),
        );
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }

    /// Reapply the surface configuration after a lost/outdated frame.
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    /// The animated state.
    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        self.stage.options()
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }
}
