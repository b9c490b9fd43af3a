//! Input handling: event types, tracked state, and the processor that
//! turns raw scroll/pointer/resize events into state updates and section
//! changes.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into state updates.
pub mod processor;
/// Scroll, section, cursor and viewport state.
pub mod state;

pub use event::{InputEvent, SectionChange};
pub use processor::{clamp_pixel_ratio, InputProcessor};
pub use state::{normalize_cursor, section_for_scroll, InputState};
