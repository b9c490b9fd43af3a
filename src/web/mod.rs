//! Browser entry point.
//!
//! Binds the engine to `canvas.webgl`, forwards `scroll`, `mousemove` and
//! `resize` to it, and drives frames with `requestAnimationFrame`. Each
//! frame writes the tweened page background and every `.title` element's
//! entrance and glow as inline styles.

mod dom;
mod panel;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use crate::engine::ScrollEngine;
use crate::error::ScrollscapeError;
use crate::gpu::render_context::physical_size;
use crate::input::{clamp_pixel_ratio, InputEvent};
use crate::options::Options;
use crate::overlay::TitleOverlay;

/// Engine plus the page nodes it styles each frame.
struct App {
    engine: ScrollEngine,
    document: Document,
    titles: Vec<HtmlElement>,
    overlay: TitleOverlay,
}

impl App {
    fn frame(&mut self, viewport_height: f32) {
        let report = self.engine.update();
        dom::set_background(&self.document, report.background);

        let tops = dom::viewport_tops(&self.titles);
        let frame = self.overlay.update(tops, viewport_height);
        for (el, reveal) in self.titles.iter().zip(&frame.reveals) {
            dom::apply_title(el, reveal, &report.title_style);
        }

        match self.engine.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                self.engine.reconfigure();
            }
            Err(e) => log::error!("render error: {e:?}"),
        }
    }
}

impl From<ScrollscapeError> for JsValue {
    fn from(e: ScrollscapeError) -> Self {
        Self::from_str(&e.to_string())
    }
}

/// Viewport size in CSS pixels.
fn viewport(window: &Window) -> (f32, f32) {
    let read = |v: Result<JsValue, JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// Options from the canvas `data-options` attribute, else defaults.
fn canvas_options(canvas: &HtmlCanvasElement) -> Options {
    let Some(json) = canvas.get_attribute(dom::OPTIONS_ATTRIBUTE) else {
        return Options::default();
    };
    Options::from_json(&json).unwrap_or_else(|e| {
        log::warn!("ignoring {}: {e}", dom::OPTIONS_ATTRIBUTE);
        Options::default()
    })
}

fn size_canvas(canvas: &HtmlCanvasElement, css: (f32, f32), ratio: f64) {
    let (w, h) = physical_size(css.0, css.1, ratio);
    canvas.set_width(w);
    canvas.set_height(h);
}

fn listen(
    target: &web_sys::EventTarget,
    kind: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) {
    if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {e:?}");
    }
}

/// wasm entry: set up logging, then start the scene asynchronously.
///
/// # Errors
///
/// Never fails synchronously; startup errors are logged.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("scrollscape starting");

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run().await {
            log::error!("startup failed: {e:?}");
        }
    });
    Ok(())
}

async fn run() -> Result<(), JsValue> {
    let window = web_sys::window()
        .ok_or_else(|| ScrollscapeError::Dom("no window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| ScrollscapeError::Dom("no document".to_owned()))?;
    let canvas = dom::canvas(&document)?;
    let options = canvas_options(&canvas);
    let show_panel = options.debug.show_panel;

    let css = viewport(&window);
    let ratio = clamp_pixel_ratio(
        window.device_pixel_ratio(),
        options.camera.max_pixel_ratio,
    );
    size_canvas(&canvas, css, ratio);

    let mut engine = ScrollEngine::new(
        wgpu::SurfaceTarget::Canvas(canvas.clone()),
        css,
        ratio,
        options,
        true,
    )
    .await?;
    let _ = engine.handle_input(InputEvent::Scroll {
        offset: window.scroll_y().unwrap_or(0.0) as f32,
    });

    let titles = dom::titles(&document);
    log::info!("found {} titles", titles.len());
    let app = Rc::new(RefCell::new(App {
        engine,
        document: document.clone(),
        overlay: TitleOverlay::new(titles.len()),
        titles,
    }));

    if show_panel {
        panel::mount(&document, &app)?;
    }

    {
        let app = Rc::clone(&app);
        let win = window.clone();
        listen(&window, "scroll", move |_| {
            let offset = win.scroll_y().unwrap_or(0.0) as f32;
            let _ = app.borrow_mut().engine.handle_input(InputEvent::Scroll { offset });
        })?;
    }
    {
        let app = Rc::clone(&app);
        listen(&window, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() {
                let _ = app.borrow_mut().engine.handle_input(InputEvent::CursorMoved {
                    x: mouse.client_x() as f32,
                    y: mouse.client_y() as f32,
                });
            }
        })?;
    }
    {
        let app = Rc::clone(&app);
        let win = window.clone();
        listen(&window, "resize", move |_| {
            let (width, height) = viewport(&win);
            let ratio = win.device_pixel_ratio();
            let mut app = app.borrow_mut();
            let _ = app.engine.handle_input(InputEvent::Resized {
                width,
                height,
                device_pixel_ratio: ratio,
            });
            let clamped = app.engine.stage().input().state().pixel_ratio();
            size_canvas(&canvas, (width, height), clamped);
        })?;
    }

    // Self-rescheduling frame callback.
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = Rc::clone(&tick);
    let win = window.clone();
    *tick.borrow_mut() = Some(Closure::new(move || {
        let (_, height) = viewport(&win);
        app.borrow_mut().frame(height);
        if let Some(callback) = next.borrow().as_ref() {
            request_frame(&win, callback);
        }
    }));
    if let Some(callback) = tick.borrow().as_ref() {
        request_frame(&window, callback);
    }
    Ok(())
}
