//! Standalone window backed by winit.
//!
//! There is no page to scroll natively, so the mouse wheel drives a
//! virtual page of one viewport-high section per mesh. Title reveals are
//! computed for a synthetic layout and logged; the window title shows the
//! current section.
//!
//! ```no_run
//! # use scrollscape::Viewer;
//! Viewer::builder()
//!     .with_title("Scrollscape")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    error::ScrollscapeError,
    options::Options,
    overlay::{section_title_tops, TitleOverlay, TriggerEvent},
    scene::SECTION_COUNT,
    InputEvent, ScrollEngine,
};

/// Pixels scrolled per wheel line.
const LINE_HEIGHT_PX: f32 = 60.0;
/// Where each synthetic title sits inside its section (viewport heights).
const TITLE_ANCHOR: f32 = 0.5;

// ── Virtual page ─────────────────────────────────────────────────────────

/// Scroll position over a page of `sections` viewport-high sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualPage {
    scroll: f32,
    viewport_height: f32,
    sections: usize,
}

impl VirtualPage {
    /// A page scrolled to the top.
    #[must_use]
    pub fn new(viewport_height: f32, sections: usize) -> Self {
        Self {
            scroll: 0.0,
            viewport_height,
            sections,
        }
    }

    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        self.sections.saturating_sub(1) as f32 * self.viewport_height.max(0.0)
    }

    /// Current scroll offset in CSS pixels.
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Scroll by a wheel delta (positive = toward the page bottom) and
    /// return the clamped offset.
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        self.scroll = (self.scroll + delta).clamp(0.0, self.max_scroll());
        self.scroll
    }

    /// Change the viewport height, keeping the offset in range.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
        self.scroll = self.scroll.clamp(0.0, self.max_scroll());
    }
}

/// Events for a window resize. Shrinking the viewport can pull the page
/// scroll back in range, so the clamped offset follows the resize.
fn resize_events(
    page: &mut VirtualPage,
    width: f32,
    height: f32,
    device_pixel_ratio: f64,
) -> [InputEvent; 2] {
    page.set_viewport_height(height);
    [
        InputEvent::Resized {
            width,
            height,
            device_pixel_ratio,
        },
        InputEvent::Scroll {
            offset: page.scroll(),
        },
    ]
}

/// Page pixels for a winit wheel delta. winit reports wheel-down as
/// negative, page scroll grows downward.
fn wheel_delta_px(delta: MouseScrollDelta, scale_factor: f64) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT_PX,
        MouseScrollDelta::PixelDelta(pos) => (-pos.y / scale_factor) as f32,
    }
}

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Scrollscape",
    /// default options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Scrollscape".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the scroll scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::Viewer`] if the event loop cannot be
    /// created or exits with an error.
    pub fn run(self) -> Result<(), ScrollscapeError> {
        let event_loop = EventLoop::new()
            .map_err(|e| ScrollscapeError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            page: VirtualPage::new(1.0, SECTION_COUNT),
            titles: TitleOverlay::new(SECTION_COUNT),
            shown_section: None,
            options: Some(self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ScrollscapeError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<ScrollEngine>,
    page: VirtualPage,
    titles: TitleOverlay,
    /// Section last written to the window title.
    shown_section: Option<usize>,
    options: Option<Options>,
    title: String,
}

/// Logical (CSS-like) size of a window.
fn logical_size(window: &Window) -> (f32, f32) {
    let logical = window.inner_size().to_logical::<f32>(window.scale_factor());
    (logical.width, logical.height)
}

impl ViewerApp {
    /// Advance one frame: tick, lay out titles, update the window title,
    /// render.
    fn redraw(&mut self) {
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };

        let report = engine.update();
        let (_, height) = logical_size(window);
        let tops = section_title_tops(
            self.titles.len(),
            self.page.scroll(),
            height,
            TITLE_ANCHOR,
        );
        for (index, event) in self.titles.update(tops, height).events {
            if matches!(event, TriggerEvent::Enter | TriggerEvent::EnterBack) {
                log::info!("section {index} title revealed ({event:?})");
            }
        }

        if self.shown_section != Some(report.section) {
            self.shown_section = Some(report.section);
            window.set_title(&format!(
                "{} - section {} of {}",
                self.title,
                report.section + 1,
                SECTION_COUNT
            ));
        }

        match engine.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                engine.reconfigure();
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let css_size = logical_size(&window);
        let options = self.options.take().unwrap_or_default();
        let engine = match pollster::block_on(ScrollEngine::new(
            window.clone(),
            css_size,
            window.scale_factor(),
            options,
            false,
        )) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        self.page.set_viewport_height(css_size.1);
        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };

        match event {
            WindowEvent::Resized(_)
            | WindowEvent::ScaleFactorChanged { .. } => {
                let (width, height) = logical_size(window);
                for event in resize_events(
                    &mut self.page,
                    width,
                    height,
                    window.scale_factor(),
                ) {
                    if let Some(change) = engine.handle_input(event) {
                        log::info!("section {} -> {}", change.from, change.to);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(window.scale_factor());
                let _ = engine.handle_input(InputEvent::CursorMoved {
                    x: logical.x,
                    y: logical.y,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let offset = self
                    .page
                    .scroll_by(wheel_delta_px(delta, window.scale_factor()));
                if let Some(change) =
                    engine.handle_input(InputEvent::Scroll { offset })
                {
                    log::info!(
                        "section {} -> {}",
                        change.from,
                        change.to
                    );
                }
            }

            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_scroll_is_clamped_to_last_section() {
        let mut page = VirtualPage::new(800.0, 3);
        assert_eq!(page.max_scroll(), 1600.0);
        assert_eq!(page.scroll_by(-50.0), 0.0);
        assert_eq!(page.scroll_by(1000.0), 1000.0);
        assert_eq!(page.scroll_by(5000.0), 1600.0);
    }

    #[test]
    fn shrinking_viewport_pulls_scroll_back_in_range() {
        let mut page = VirtualPage::new(800.0, 3);
        let _ = page.scroll_by(1600.0);
        page.set_viewport_height(600.0);
        assert_eq!(page.scroll(), 1200.0);
    }

    #[test]
    fn resize_forwards_clamped_scroll() {
        use crate::engine::Stage;
        use crate::options::Options;
        use rand::SeedableRng;

        let mut page = VirtualPage::new(800.0, SECTION_COUNT);
        let mut stage = Stage::with_rng(
            Options::default(),
            1280.0,
            800.0,
            rand::rngs::StdRng::seed_from_u64(5),
        );
        let offset = page.scroll_by(5000.0);
        let _ = stage.handle_input(InputEvent::Scroll { offset });
        assert_eq!(stage.input().state().scroll(), 1600.0);

        for event in resize_events(&mut page, 1280.0, 600.0, 1.0) {
            let _ = stage.handle_input(event);
        }
        let state = stage.input().state();
        assert_eq!(state.scroll(), 1200.0);
        assert_eq!(state.section(), SECTION_COUNT - 1);
        assert!((state.scroll_in_viewports() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn wheel_down_scrolls_toward_page_bottom() {
        let lines = wheel_delta_px(MouseScrollDelta::LineDelta(0.0, -2.0), 1.0);
        assert_eq!(lines, 120.0);
        let pixels = wheel_delta_px(
            MouseScrollDelta::PixelDelta(winit::dpi::PhysicalPosition::new(
                0.0, -90.0,
            )),
            2.0,
        );
        assert_eq!(pixels, 45.0);
    }
}
