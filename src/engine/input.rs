//! Input methods for ScrollEngine

use super::ScrollEngine;
use crate::gpu::render_context::physical_size;
use crate::input::{InputEvent, SectionChange};

impl ScrollEngine {
    /// Process a page event.
    ///
    /// Scrolls may start a section transition (returned as the change);
    /// cursor moves steer the parallax; resizes reconfigure the surface
    /// at the clamped device pixel ratio and recreate the depth buffer.
    /// Resizing never changes the current section.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<SectionChange> {
        let change = self.stage.handle_input(event);
        if let InputEvent::Resized { width, height, .. } = event {
            let ratio = self.stage.input().state().pixel_ratio();
            let (w, h) = physical_size(width, height, ratio);
            self.context.resize(w, h);
            let (w, h) = self.context.size();
            self.renderer.resize(&self.context.device, w, h);
        }
        change
    }
}
