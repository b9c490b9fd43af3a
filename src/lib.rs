// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scroll-driven 3D landing scene rendered with wgpu.
//!
//! A page of full-height sections sits in front of a fixed canvas. As the
//! visitor scrolls, the camera descends past one toon-shaded mesh per
//! section, the active section's colors are tweened into the material,
//! particles and page background, and the section title fades in. The
//! cursor adds a damped parallax offset.
//!
//! # Key entry points
//!
//! - [`engine::ScrollEngine`] - GPU context, animated stage and renderer
//! - [`engine::Stage`] - the GPU-free per-frame state machine
//! - [`options::Options`] - palette, scene, camera, lighting, transition
//!   and debug settings (TOML presets, JSON on the web)
//! - [`overlay::TitleOverlay`] - scroll-triggered title reveals
//!
//! # Architecture
//!
//! Page events arrive as [`input::InputEvent`]s. Crossing into a new
//! section queues a batch of [`animation::AnimationRequest`]s that the
//! [`animation::AnimationScheduler`] turns into tweens on the next frame.
//! Each frame the stage advances idle motion, the color pulse, tweens and
//! the camera rig, and returns a [`engine::FrameReport`] the host applies
//! to the page. The [`renderer::SceneRenderer`] then draws meshes and
//! particles in a single depth-tested pass.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod overlay;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use engine::{FrameReport, ScrollEngine, Stage};
pub use error::ScrollscapeError;
pub use input::{InputEvent, SectionChange};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
