//! Options methods for ScrollEngine

use super::ScrollEngine;
use crate::options::Options;
use crate::util::Color;

impl ScrollEngine {
    /// Replace options. Scene changes re-scatter particles; the renderer
    /// re-uploads them on the next frame.
    pub fn set_options(&mut self, new: Options) {
        self.stage.set_options(new);
    }

    /// Live material color edit from the debug panel.
    pub fn set_material_color(&mut self, color: Color) {
        log::debug!("material color set to {}", color.to_hex());
        self.stage.set_material_color(color);
    }
}
