//! Single owner of the animation timeline.
//!
//! Requests are queued by event handlers and consumed at the start of the
//! next frame. Each property has at most one in-flight tween: a new
//! request for the same property cancels the old tween and starts from
//! the property's current value, so overlapping section changes never
//! fight over a value.

use std::time::Duration;

use rustc_hash::FxHashMap;

use super::request::{Animatable, AnimationRequest, TweenEnd, TweenTarget};
use super::tween::Tween;

/// Queue of pending requests plus the in-flight tween per property.
#[derive(Debug, Default)]
pub struct AnimationScheduler {
    queue: Vec<AnimationRequest>,
    active: FxHashMap<TweenTarget, Tween>,
}

impl AnimationScheduler {
    /// Create an idle scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a request for the next [`update`](Self::update).
    pub fn submit(&mut self, request: AnimationRequest) {
        self.queue.push(request);
    }

    /// Queue a batch of requests, preserving order.
    pub fn submit_all(
        &mut self,
        requests: impl IntoIterator<Item = AnimationRequest>,
    ) {
        self.queue.extend(requests);
    }

    /// Requests waiting for the next frame.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Tweens currently in flight.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Whether anything is queued or in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.queue.is_empty() || !self.active.is_empty()
    }

    /// The in-flight tween for `target`, if any.
    #[must_use]
    pub fn tween(&self, target: TweenTarget) -> Option<&Tween> {
        self.active.get(&target)
    }

    /// Drop all queued and in-flight animations, leaving properties at
    /// their current values.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.active.clear();
    }

    /// Start queued requests at clock time `now`, then write every
    /// in-flight tween's value into `props`. Finished tweens write their
    /// end value and are dropped.
    ///
    /// Returns the number of requests started this call.
    pub fn update<P: Animatable>(&mut self, now: Duration, props: &mut P) -> usize {
        let mut started = 0;
        for request in self.queue.drain(..) {
            let Some(current) = props.value(request.target) else {
                log::warn!("no animatable property for {:?}", request.target);
                continue;
            };

            // Relative requests stack on top of a cancelled tween's end
            // value so no accumulated offset is lost.
            let superseded = self.active.remove(&request.target);
            if let Some(old) = &superseded {
                log::debug!(
                    "cancelling in-flight tween on {:?} at {:.0}%",
                    request.target,
                    old.progress(now) * 100.0
                );
            }
            let to = match request.end {
                TweenEnd::To(value) => value,
                TweenEnd::By(delta) => superseded
                    .map_or(current, |old| old.to)
                    .offset_by(delta),
            };

            let _ = self.active.insert(
                request.target,
                Tween {
                    target: request.target,
                    from: current,
                    to,
                    start: now,
                    duration: request.duration,
                    easing: request.easing,
                },
            );
            started += 1;
        }

        self.active.retain(|&target, tween| {
            props.apply(target, tween.value_at(now));
            !tween.is_finished(now)
        });

        started
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::animation::TweenValue;
    use crate::util::EasingFunction;

    /// Minimal property bag: one spin vector and a roughness scalar.
    #[derive(Default)]
    struct Props {
        spin: Vec3,
        roughness: f32,
    }

    impl Animatable for Props {
        fn value(&self, target: TweenTarget) -> Option<TweenValue> {
            match target {
                TweenTarget::MeshSpin(0) => Some(TweenValue::Vector(self.spin)),
                TweenTarget::Roughness => Some(TweenValue::Scalar(self.roughness)),
                _ => None,
            }
        }

        fn apply(&mut self, target: TweenTarget, value: TweenValue) {
            match (target, value) {
                (TweenTarget::MeshSpin(0), TweenValue::Vector(v)) => self.spin = v,
                (TweenTarget::Roughness, TweenValue::Scalar(v)) => self.roughness = v,
                _ => {}
            }
        }
    }

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    fn spin_by(delta: Vec3) -> AnimationRequest {
        AnimationRequest::by(
            TweenTarget::MeshSpin(0),
            TweenValue::Vector(delta),
            secs(1.0),
            EasingFunction::Linear,
        )
    }

    #[test]
    fn requests_wait_for_next_update() {
        let mut scheduler = AnimationScheduler::new();
        let mut props = Props::default();
        scheduler.submit(spin_by(Vec3::X));
        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(scheduler.active_count(), 0);
        assert!(scheduler.is_animating());

        assert_eq!(scheduler.update(secs(0.0), &mut props), 1);
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.active_count(), 1);
    }

    #[test]
    fn tween_runs_to_completion_and_is_dropped() {
        let mut scheduler = AnimationScheduler::new();
        let mut props = Props::default();
        scheduler.submit(spin_by(Vec3::new(6.0, 3.0, 1.5)));

        let _ = scheduler.update(secs(10.0), &mut props);
        let _ = scheduler.update(secs(10.5), &mut props);
        assert!((props.spin - Vec3::new(3.0, 1.5, 0.75)).length() < 1e-5);

        let _ = scheduler.update(secs(11.0), &mut props);
        assert_eq!(props.spin, Vec3::new(6.0, 3.0, 1.5));
        assert_eq!(scheduler.active_count(), 0);
        assert!(!scheduler.is_animating());
    }

    #[test]
    fn new_request_cancels_in_flight_tween() {
        let mut scheduler = AnimationScheduler::new();
        let mut props = Props::default();
        let roughness = |v: f32| {
            AnimationRequest::to(
                TweenTarget::Roughness,
                TweenValue::Scalar(v),
                secs(1.0),
                EasingFunction::Linear,
            )
        };

        scheduler.submit(roughness(1.0));
        let _ = scheduler.update(secs(0.0), &mut props);
        let _ = scheduler.update(secs(0.5), &mut props);
        assert!((props.roughness - 0.5).abs() < 1e-6);

        // Replacement starts from the current value, not the old start.
        scheduler.submit(roughness(0.0));
        let _ = scheduler.update(secs(0.5), &mut props);
        assert_eq!(scheduler.active_count(), 1);
        let tween = scheduler.tween(TweenTarget::Roughness).unwrap();
        assert_eq!(tween.from, TweenValue::Scalar(0.5));
        assert_eq!(tween.to, TweenValue::Scalar(0.0));

        let _ = scheduler.update(secs(2.0), &mut props);
        assert_eq!(props.roughness, 0.0);
    }

    #[test]
    fn relative_requests_keep_cancelled_offset() {
        let mut scheduler = AnimationScheduler::new();
        let mut props = Props::default();
        scheduler.submit(spin_by(Vec3::splat(6.0)));
        let _ = scheduler.update(secs(0.0), &mut props);
        let _ = scheduler.update(secs(0.25), &mut props);

        scheduler.submit(spin_by(Vec3::splat(6.0)));
        let _ = scheduler.update(secs(0.25), &mut props);
        let _ = scheduler.update(secs(5.0), &mut props);
        assert_eq!(props.spin, Vec3::splat(12.0));
    }

    #[test]
    fn unknown_targets_are_skipped() {
        let mut scheduler = AnimationScheduler::new();
        let mut props = Props::default();
        scheduler.submit(AnimationRequest::to(
            TweenTarget::LightIntensity,
            TweenValue::Scalar(1.0),
            secs(1.0),
            EasingFunction::Linear,
        ));
        assert_eq!(scheduler.update(secs(0.0), &mut props), 0);
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn clear_drops_everything() {
        let mut scheduler = AnimationScheduler::new();
        let mut props = Props::default();
        scheduler.submit(spin_by(Vec3::X));
        let _ = scheduler.update(secs(0.0), &mut props);
        scheduler.submit(spin_by(Vec3::X));
        scheduler.clear();
        assert!(!scheduler.is_animating());
    }
}
