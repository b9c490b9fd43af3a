/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// updates the [`InputState`](super::InputState) and reports section
/// changes.
///
/// # Example
///
/// ```
/// use scrollscape::input::{InputEvent, InputProcessor};
///
/// let mut input = InputProcessor::new(800.0, 800.0);
/// let change = input.handle_event(InputEvent::Scroll { offset: 800.0 });
/// assert_eq!(change.map(|c| c.to), Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The page scrolled to an absolute vertical offset.
    Scroll {
        /// Scroll offset from the top of the page, in CSS pixels.
        offset: f32,
    },
    /// Cursor moved to an absolute viewport position.
    CursorMoved {
        /// Horizontal position in CSS pixels.
        x: f32,
        /// Vertical position in CSS pixels.
        y: f32,
    },
    /// The viewport changed size.
    Resized {
        /// New viewport width in CSS pixels.
        width: f32,
        /// New viewport height in CSS pixels.
        height: f32,
        /// Physical pixels per CSS pixel reported by the host.
        device_pixel_ratio: f64,
    },
}

/// Emitted when scrolling moves the page into a different section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    /// Section before the scroll event.
    pub from: usize,
    /// Section after the scroll event.
    pub to: usize,
}
