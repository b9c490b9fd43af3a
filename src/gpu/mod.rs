//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, typed buffers, textures,
//! pipeline boilerplate and shader composition.

/// Growable typed GPU buffers.
pub mod dynamic_buffer;
/// Shared wgpu boilerplate for the scene pipelines.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
/// Depth attachment and toon gradient-map textures.
pub mod texture;
