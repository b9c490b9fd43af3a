use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::SECTION_COUNT;
use crate::util::Color;

/// Material base color and the per-section theme colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Palette", inline)]
#[serde(default)]
pub struct PaletteOptions {
    /// Initial color of the toon and particle materials. Live-editable
    /// from the debug panel.
    #[schemars(
        title = "Material Color",
        with = "String",
        extend("format" = "color")
    )]
    pub material_color: Color,
    /// Theme color of each section, in scroll order.
    #[schemars(skip)]
    pub section_colors: [Color; SECTION_COUNT],
    /// Dark tone the page background is blended toward.
    #[schemars(skip)]
    pub background_base: Color,
}

impl PaletteOptions {
    /// Theme color for a section. Out-of-range indices use the last
    /// section.
    #[must_use]
    pub fn section_color(&self, section: usize) -> Color {
        self.section_colors[section.min(SECTION_COUNT - 1)]
    }
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            material_color: Color::from_rgb8(0xe6, 0xee, 0xe8),
            section_colors: [
                Color::from_rgb8(0x09, 0xf7, 0x29),
                Color::from_rgb8(0x7f, 0xff, 0xd4),
                Color::from_rgb8(0xff, 0xd7, 0x00),
            ],
            background_base: Color::from_rgb8(0x1e, 0x1a, 0x20),
        }
    }
}
