//! GPU-free animated state: everything the per-frame update touches.
//!
//! [`Stage`] owns the scene, input tracking, animation scheduler and
//! camera rig. Event handlers call [`Stage::handle_input`]; the frame
//! loop calls [`Stage::tick`] once per display frame and hands the
//! resulting [`FrameReport`] to the host (DOM styles on the web, window
//! title natively). The renderer then reads [`Stage::scene`] and
//! [`Stage::camera`].

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation::transition::section_transition_requests;
use crate::animation::AnimationScheduler;
use crate::camera::{Camera, CameraRig};
use crate::input::{InputEvent, InputProcessor, SectionChange};
use crate::options::Options;
use crate::overlay::TitleStyle;
use crate::scene::particles::bob_offset;
use crate::scene::Scene;
use crate::util::{Color, FrameTime};

/// Idle rotation rate of every section mesh (radians per second, XYZ).
const IDLE_ROTATION_RATE: Vec3 = Vec3::new(0.1, 0.12, 0.0);
/// Share of the pulse that blends material colors toward white.
const MATERIAL_PULSE_SHARE: f32 = 0.4;
/// Angular frequency of the pulse (radians per second).
const PULSE_RATE: f32 = 1.5;

/// Periodic brightness factor in `[0, 1]` with period `2π / 1.5` seconds.
#[must_use]
pub fn pulse_factor(t: f32) -> f32 {
    (t * PULSE_RATE).sin() * 0.5 + 0.5
}

/// What one frame produced, for the host to apply outside the GPU scene.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Current section index.
    pub section: usize,
    /// Pulse factor used this frame.
    pub pulse: f32,
    /// Page background color.
    pub background: Color,
    /// Color and glow every title should use.
    pub title_style: TitleStyle,
    /// Tweens started from queued requests this frame.
    pub tweens_started: usize,
    /// Tweens still in flight after this frame.
    pub tweens_active: usize,
}

/// Animated scene state driven by input events and the frame clock.
pub struct Stage {
    options: Options,
    scene: Scene,
    input: InputProcessor,
    scheduler: AnimationScheduler,
    rig: CameraRig,
    camera: Camera,
    rng: StdRng,
}

impl Stage {
    /// Build a stage for a viewport of the given CSS size, seeding
    /// randomness from the OS.
    #[must_use]
    pub fn new(options: Options, width: f32, height: f32) -> Self {
        Self::with_rng(options, width, height, StdRng::from_os_rng())
    }

    /// Build a stage with an explicit RNG (deterministic tests).
    #[must_use]
    pub fn with_rng(
        options: Options,
        width: f32,
        height: f32,
        mut rng: StdRng,
    ) -> Self {
        let scene = Scene::build(&options, &mut rng);
        let input = InputProcessor::new(width, height)
            .with_max_pixel_ratio(options.camera.max_pixel_ratio);
        let camera = Camera::new(&options.camera, aspect_ratio(width, height));
        Self {
            options,
            scene,
            input,
            scheduler: AnimationScheduler::new(),
            rig: CameraRig::default(),
            camera,
            rng,
        }
    }

    /// Apply an input event. A scroll into a new section queues that
    /// section's transition batch and returns the change.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<SectionChange> {
        let change = self.input.handle_event(event);
        if let InputEvent::Resized { width, height, .. } = event {
            self.camera.aspect = aspect_ratio(width, height);
        }
        if let Some(change) = change {
            self.scheduler.submit_all(section_transition_requests(
                change.to,
                &self.options.palette,
                &self.options.transition,
                &mut self.rng,
            ));
        }
        change
    }

    /// Advance the scene to `frame` time.
    pub fn tick(&mut self, frame: FrameTime) -> FrameReport {
        let tweens_started = self.scheduler.update(frame.elapsed, &mut self.scene);
        let t = frame.elapsed_secs();

        for mesh in &mut self.scene.meshes {
            mesh.idle_rotation = IDLE_ROTATION_RATE * t;
        }

        let pulse = pulse_factor(t);
        let section = self.input.state().section();
        let section_color = self.options.palette.section_color(section);
        let blend = pulse * MATERIAL_PULSE_SHARE;
        self.scene.toon.color = section_color.lerp(Color::WHITE, blend);
        self.scene.points.color = section_color.lerp(Color::WHITE, blend);
        self.scene.particles.offset_y =
            bob_offset(t, self.options.scene.particle_bob_amplitude);

        let state = self.input.state();
        self.rig.follow_scroll(
            state.scroll_in_viewports(),
            self.options.scene.objects_distance,
        );
        self.rig
            .follow_cursor(state.cursor(), frame.delta, &self.options.camera);
        self.camera.set_eye(self.rig.eye(self.options.camera.distance));

        FrameReport {
            section,
            pulse,
            background: self.scene.background,
            title_style: TitleStyle::from_pulse(section_color, pulse),
            tweens_started,
            tweens_active: self.scheduler.active_count(),
        }
    }

    /// Set the material color (debug panel). The next frame's pulse
    /// rewrites both displayed colors from the section color.
    pub fn set_material_color(&mut self, color: Color) {
        self.options.palette.material_color = color;
        self.scene.set_material_color(color);
    }

    /// Replace options. Particles are re-scattered when the scene
    /// parameters changed; camera and light parameters apply
    /// immediately. In-flight tweens keep running.
    pub fn set_options(&mut self, options: Options) {
        let rescatter = options.scene != self.options.scene;
        let ramp_changed = options.lighting.toon_ramp != self.options.lighting.toon_ramp;
        self.options = options;

        if rescatter {
            self.scene.regenerate_particles(&self.options, &mut self.rng);
        }
        if ramp_changed {
            self.scene.set_toon_ramp(self.options.lighting.toon_ramp);
        }
        self.scene.light.position = Vec3::from(self.options.lighting.light_position);
        self.scene.set_material_color(self.options.palette.material_color);

        let co = &self.options.camera;
        self.camera.fovy = co.fovy;
        self.camera.znear = co.znear;
        self.camera.zfar = co.zfar;
        self.input.set_max_pixel_ratio(co.max_pixel_ratio);
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The scene as of the last tick.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The camera as of the last tick.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Input tracking state.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// The animation scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    /// The camera rig.
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }
}

fn aspect_ratio(width: f32, height: f32) -> f32 {
    if width > 0.0 && height > 0.0 {
        width / height
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use glam::Vec2;

    use super::*;
    use crate::animation::TweenTarget;

    fn stage() -> Stage {
        Stage::with_rng(Options::default(), 1280.0, 800.0, StdRng::seed_from_u64(5))
    }

    fn scroll(offset: f32) -> InputEvent {
        InputEvent::Scroll { offset }
    }

    #[test]
    fn pulse_is_bounded_and_periodic() {
        let period = TAU / 1.5;
        for i in 0..500 {
            let t = i as f32 * 0.037;
            let p = pulse_factor(t);
            assert!((0.0..=1.0).contains(&p), "pulse {p} at {t}");
            assert!((p - pulse_factor(t + period)).abs() < 1e-4);
        }
        assert!((pulse_factor(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn scroll_to_next_section_queues_one_batch() {
        let mut stage = stage();
        let change = stage.handle_input(scroll(800.0));
        assert_eq!(change, Some(SectionChange { from: 0, to: 1 }));
        assert_eq!(stage.scheduler().pending_count(), 5);

        // Further scroll events inside the section queue nothing.
        for offset in [820.0, 900.0, 1000.0, 1190.0] {
            assert_eq!(stage.handle_input(scroll(offset)), None);
        }
        assert_eq!(stage.scheduler().pending_count(), 5);

        let report = stage.tick(FrameTime::from_secs(0.1, 0.016));
        assert_eq!(report.section, 1);
        assert_eq!(report.tweens_started, 5);
        assert_eq!(report.tweens_active, 5);
        assert!(stage.scheduler().tween(TweenTarget::MeshSpin(1)).is_some());
    }

    #[test]
    fn end_to_end_transition_settles() {
        let mut stage = stage();
        let _ = stage.tick(FrameTime::from_secs(0.0, 0.0));
        let _ = stage.handle_input(scroll(800.0));
        let _ = stage.tick(FrameTime::from_secs(1.0, 0.016));
        let report = stage.tick(FrameTime::from_secs(3.0, 2.0));
        assert_eq!(report.tweens_active, 0);

        let scene = stage.scene();
        assert_eq!(scene.meshes[1].spin, Vec3::new(6.0, 3.0, 1.5));
        assert_eq!(scene.meshes[0].spin, Vec3::ZERO);
        assert_eq!(scene.points.base_color.to_hex(), "#7fffd4");
        assert!((0.3..0.8).contains(&scene.toon.roughness));
        assert!((1.0..1.5).contains(&scene.light.intensity));
        assert_eq!(
            report.background,
            Color::from_rgb8(0x7f, 0xff, 0xd4)
                .lerp(Color::from_rgb8(0x1e, 0x1a, 0x20), 0.5)
        );
    }

    #[test]
    fn title_style_comes_only_from_pulse() {
        let mut stage = stage();
        let _ = stage.handle_input(scroll(800.0));
        let t = 2.0;
        let report = stage.tick(FrameTime::from_secs(t, 0.016));
        let expected =
            TitleStyle::from_pulse(Color::from_rgb8(0x7f, 0xff, 0xd4), pulse_factor(t));
        assert_eq!(report.title_style, expected);
    }

    #[test]
    fn idle_rotation_and_bob_follow_time() {
        let mut stage = stage();
        let _ = stage.tick(FrameTime::from_secs(10.0, 0.016));
        let scene = stage.scene();
        for mesh in &scene.meshes {
            assert!((mesh.rotation() - Vec3::new(1.0, 1.2, 0.0)).length() < 1e-5);
        }
        assert!((scene.particles.offset_y - (5.0f32).sin() * 0.2).abs() < 1e-5);
    }

    #[test]
    fn material_pulses_from_section_color() {
        let mut stage = stage();
        // sin(1.5 * t) = 1 at t = π / 3: full pulse.
        let t = std::f32::consts::FRAC_PI_3;
        let _ = stage.tick(FrameTime::from_secs(t, 0.016));
        let green = Color::from_rgb8(0x09, 0xf7, 0x29);
        let expected = green.lerp(Color::WHITE, 0.4);
        let got = stage.scene().toon.color;
        assert!((got.r - expected.r).abs() < 1e-4);
        assert!((got.b - expected.b).abs() < 1e-4);
    }

    #[test]
    fn camera_follows_scroll() {
        let mut stage = stage();
        let _ = stage.handle_input(scroll(1200.0));
        let _ = stage.tick(FrameTime::from_secs(0.5, 0.016));
        // 1200 / 800 * 4
        assert!((stage.rig().camera_y + 6.0).abs() < 1e-5);
        assert!((stage.camera().eye.y + 6.0).abs() < 1e-5);
        assert_eq!(stage.camera().eye.z, 6.0);
    }

    #[test]
    fn parallax_eases_toward_cursor() {
        let mut stage = stage();
        let _ = stage.handle_input(InputEvent::CursorMoved { x: 1280.0, y: 0.0 });
        for i in 1..=300 {
            let _ = stage.tick(FrameTime::from_secs(i as f32 * 0.016, 0.016));
        }
        assert!((stage.rig().offset - Vec2::new(0.25, 0.25)).length() < 1e-3);
    }

    #[test]
    fn resize_updates_aspect_not_section() {
        let mut stage = stage();
        let _ = stage.handle_input(scroll(800.0));
        let change = stage.handle_input(InputEvent::Resized {
            width: 1000.0,
            height: 500.0,
            device_pixel_ratio: 1.0,
        });
        assert_eq!(change, None);
        assert_eq!(stage.camera().aspect, 2.0);
        assert_eq!(stage.input().state().section(), 1);
    }

    #[test]
    fn particles_pulse_from_section_color() {
        let mut stage = stage();
        let red = Color::new(1.0, 0.0, 0.0);
        stage.set_material_color(red);
        assert_eq!(stage.options().palette.material_color, red);
        let _ = stage.tick(FrameTime::from_secs(0.0, 0.0));
        // pulse 0.5 at t = 0: 20% toward white.
        let expected = stage
            .options()
            .palette
            .section_color(0)
            .lerp(Color::WHITE, 0.2);
        let points = stage.scene().points.color;
        assert_eq!(points.to_hex(), expected.to_hex());
        assert_eq!(points, stage.scene().toon.color);
    }

    #[test]
    fn set_options_rescatters_particles() {
        let mut stage = stage();
        let mut options = stage.options().clone();
        options.scene.particle_count = 20;
        options.camera.fovy = 50.0;
        stage.set_options(options);
        assert_eq!(stage.scene().particles.len(), 20);
        assert_eq!(stage.scene().generation(), 1);
        assert_eq!(stage.camera().fovy, 50.0);
    }
}
