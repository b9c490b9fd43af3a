//! Camera rig: the group that carries the scroll-driven camera height and
//! the cursor parallax offset.

use glam::{Vec2, Vec3};

use crate::options::CameraOptions;

/// Camera height for a scroll position measured in viewport heights.
#[must_use]
pub fn scroll_camera_y(scroll_in_viewports: f32, objects_distance: f32) -> f32 {
    -scroll_in_viewports * objects_distance
}

/// Parallax offset the rig eases toward for a normalized cursor.
#[must_use]
pub fn parallax_target(cursor: Vec2, strength: f32) -> Vec2 {
    Vec2::new(cursor.x * strength, -cursor.y * strength)
}

/// The camera group: a smoothed parallax offset plus the camera's own
/// scroll-driven height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraRig {
    /// Current parallax offset of the group (x, y).
    pub offset: Vec2,
    /// Camera height inside the group.
    pub camera_y: f32,
}

impl CameraRig {
    /// Ease the parallax offset toward the cursor target.
    ///
    /// The step factor `smoothing * dt` is capped at 1 so long frames
    /// snap to the target instead of overshooting.
    pub fn follow_cursor(&mut self, cursor: Vec2, dt: f32, options: &CameraOptions) {
        let target = parallax_target(cursor, options.parallax_strength);
        let k = (options.parallax_smoothing * dt.max(0.0)).min(1.0);
        self.offset += (target - self.offset) * k;
    }

    /// Set the camera height from the scroll position.
    pub fn follow_scroll(&mut self, scroll_in_viewports: f32, objects_distance: f32) {
        self.camera_y = scroll_camera_y(scroll_in_viewports, objects_distance);
    }

    /// World-space eye for a camera sitting `distance` in front of the
    /// mesh plane.
    #[must_use]
    pub fn eye(&self, distance: f32) -> Vec3 {
        Vec3::new(self.offset.x, self.offset.y + self.camera_y, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_y_follows_scroll() {
        // scroll 1200 px at 800 px viewport height
        assert_eq!(scroll_camera_y(1200.0 / 800.0, 4.0), -6.0);
        assert_eq!(scroll_camera_y(0.0, 4.0), 0.0);
    }

    #[test]
    fn parallax_target_inverts_y() {
        let t = parallax_target(Vec2::new(0.5, 0.5), 0.5);
        assert_eq!(t, Vec2::new(0.25, -0.25));
    }

    #[test]
    fn offset_converges_toward_target() {
        let options = CameraOptions::default();
        let mut rig = CameraRig::default();
        let cursor = Vec2::new(0.4, -0.2);
        rig.follow_cursor(cursor, 0.016, &options);
        let first = rig.offset;
        // One step moves 5 * 0.016 = 8% of the way.
        assert!((first.x - 0.2 * 0.08).abs() < 1e-6);
        for _ in 0..600 {
            rig.follow_cursor(cursor, 0.016, &options);
        }
        assert!((rig.offset - Vec2::new(0.2, 0.1)).length() < 1e-4);
    }

    #[test]
    fn long_frame_snaps_without_overshoot() {
        let options = CameraOptions::default();
        let mut rig = CameraRig::default();
        rig.follow_cursor(Vec2::new(0.5, 0.0), 2.0, &options);
        assert_eq!(rig.offset, Vec2::new(0.25, 0.0));
    }

    #[test]
    fn eye_combines_offset_and_height() {
        let rig = CameraRig {
            offset: Vec2::new(0.1, 0.2),
            camera_y: -4.0,
        };
        assert!((rig.eye(6.0) - Vec3::new(0.1, -3.8, 6.0)).length() < 1e-6);
    }
}
