//! Tween-based animation of scene and page properties.
//!
//! Event handlers build declarative [`AnimationRequest`]s (see
//! [`transition::section_transition_requests`]) and hand them to the
//! [`AnimationScheduler`], which starts them on the next frame and writes
//! interpolated values into anything implementing [`Animatable`].

pub mod request;
pub mod scheduler;
pub mod transition;
pub mod tween;

pub use request::{Animatable, AnimationRequest, TweenEnd, TweenTarget};
pub use scheduler::AnimationScheduler;
pub use tween::{Tween, TweenValue};
