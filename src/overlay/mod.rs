//! Text overlay ("title") effects: scroll-triggered entrance and the
//! pulse-driven color and glow.
//!
//! [`TitleOverlay`] tracks one entry per title element. The host reports
//! each title's current top edge (DOM bounding rect on the web, a
//! synthetic one-title-per-section layout natively) and applies the
//! resulting [`TitleFrame`].

pub mod style;
pub mod trigger;

pub use style::TitleStyle;
pub use trigger::{
    crossings, TitleEntrance, TitleReveal, TitleTrigger, TriggerEvent,
    TriggerZone,
};

/// Per-title output for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleFrame {
    /// Opacity and offset for each title, in element order.
    pub reveals: Vec<TitleReveal>,
    /// Crossing events this frame as `(title index, event)`.
    pub events: Vec<(usize, TriggerEvent)>,
}

/// Entrance state of a set of titles.
#[derive(Debug, Clone)]
pub struct TitleOverlay {
    trigger: TitleTrigger,
    entrance: TitleEntrance,
    zones: Vec<Option<TriggerZone>>,
}

impl TitleOverlay {
    /// Track `count` titles with the default trigger band and entrance.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            trigger: TitleTrigger::default(),
            entrance: TitleEntrance::default(),
            zones: vec![None; count],
        }
    }

    /// Number of tracked titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether no titles are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Compute reveals and crossing events from the titles' top edges
    /// (pixels below the viewport top). Extra tops are ignored and missing
    /// ones leave their title untouched.
    ///
    /// The first update only records zones; a title that starts inside
    /// or past the band does not fire events for the initial layout.
    pub fn update(
        &mut self,
        tops: impl IntoIterator<Item = f32>,
        viewport_height: f32,
    ) -> TitleFrame {
        let mut frame = TitleFrame {
            reveals: Vec::with_capacity(self.zones.len()),
            events: Vec::new(),
        };
        for ((index, zone), top) in
            self.zones.iter_mut().enumerate().zip(tops)
        {
            let progress = self.trigger.progress(top, viewport_height);
            frame.reveals.push(self.entrance.reveal(progress));

            let now = self.trigger.zone(top, viewport_height);
            if let Some(prev) = zone.replace(now) {
                for &event in crossings(prev, now) {
                    log::debug!("title {index}: {event:?}");
                    frame.events.push((index, event));
                }
            }
        }
        frame
    }
}

/// Top edge of each title in a one-title-per-section layout, where title
/// `i` sits `anchor` viewport heights into section `i`.
#[must_use]
pub fn section_title_tops(
    count: usize,
    scroll: f32,
    viewport_height: f32,
    anchor: f32,
) -> Vec<f32> {
    (0..count)
        .map(|i| (i as f32 + anchor) * viewport_height - scroll)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f32 = 800.0;

    #[test]
    fn first_update_only_records() {
        let mut overlay = TitleOverlay::new(3);
        let tops = section_title_tops(3, 0.0, H, 0.5);
        let frame = overlay.update(tops, H);
        assert_eq!(frame.reveals.len(), 3);
        assert!(frame.events.is_empty());
        // First title sits mid-viewport: halfway through the band.
        assert!(frame.reveals[0].opacity > 0.0);
        assert_eq!(frame.reveals[1].opacity, 0.0);
    }

    #[test]
    fn scrolling_down_then_up_fires_all_four_events() {
        let mut overlay = TitleOverlay::new(2);
        let _ = overlay.update(section_title_tops(2, 0.0, H, 0.5), H);

        // Title 1 top: 1200 - 600 = 600 (< 640): enters.
        let frame = overlay.update(section_title_tops(2, 600.0, H, 0.5), H);
        assert!(frame.events.contains(&(1, TriggerEvent::Enter)));

        // Title 1 top: 1200 - 1100 = 100 (< 160): leaves.
        let frame = overlay.update(section_title_tops(2, 1100.0, H, 0.5), H);
        assert!(frame.events.contains(&(1, TriggerEvent::Leave)));

        let frame = overlay.update(section_title_tops(2, 600.0, H, 0.5), H);
        assert!(frame.events.contains(&(1, TriggerEvent::EnterBack)));

        let frame = overlay.update(section_title_tops(2, 0.0, H, 0.5), H);
        assert!(frame.events.contains(&(1, TriggerEvent::LeaveBack)));
    }

    #[test]
    fn steady_scroll_fires_nothing() {
        let mut overlay = TitleOverlay::new(3);
        let _ = overlay.update(section_title_tops(3, 300.0, H, 0.5), H);
        let frame = overlay.update(section_title_tops(3, 300.0, H, 0.5), H);
        assert!(frame.events.is_empty());
    }

    #[test]
    fn missing_tops_shorten_output() {
        let mut overlay = TitleOverlay::new(3);
        let frame = overlay.update([100.0], H);
        assert_eq!(frame.reveals.len(), 1);
        assert_eq!(overlay.len(), 3);
    }
}
