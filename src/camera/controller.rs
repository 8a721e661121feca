use std::f32::consts::{PI, TAU};

use glam::{Quat, Vec2, Vec3};

use super::core::Camera;
use super::spherical::Spherical;
use crate::error::OrreryError;
use crate::input::InputEvent;
use crate::options::ControlOptions;

/// Scale from raw wheel units to accumulated zoom delta.
const ZOOM_DELTA_SCALE: f32 = 0.01;

/// Scale from accumulated zoom delta to the proportional radius factor.
const ZOOM_RADIUS_SCALE: f32 = 0.1;

/// Azimuthal increment per frame at `auto_rotate_speed = 1`: one full
/// revolution per minute at 60 fps.
const AUTO_ROTATE_STEP: f32 = TAU / 60.0 / 60.0;

/// Orbit camera controller for the solar-system viewer.
///
/// Owns the [`Camera`] pose and converts pointer drags, wheel scrolls, and
/// auto-rotation into constrained orbital motion around [`target`]. Input
/// handlers only accumulate deltas; [`update`] integrates them once per
/// rendered frame, clamps against the configured limits, and writes the
/// resulting pose back to the camera.
///
/// All limit and speed fields are public and may be mutated at any time by
/// the owning application.
///
/// [`target`]: Self::target
/// [`update`]: Self::update
#[derive(Debug)]
pub struct OrbitCamera {
    /// Camera pose driven by this controller.
    pub camera: Camera,
    /// Master enable switch; when false all input is ignored.
    pub enabled: bool,
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Minimum distance from target.
    pub min_distance: f32,
    /// Maximum distance from target.
    pub max_distance: f32,
    /// Minimum polar angle in radians (0 = straight above the target).
    pub min_polar_angle: f32,
    /// Maximum polar angle in radians (π = straight below the target).
    pub max_polar_angle: f32,
    /// Minimum azimuthal angle in radians; unbounded by default.
    pub min_azimuth_angle: f32,
    /// Maximum azimuthal angle in radians; unbounded by default.
    pub max_azimuth_angle: f32,
    /// Enable wheel zooming.
    pub enable_zoom: bool,
    /// Zoom sensitivity multiplier.
    pub zoom_speed: f32,
    /// Enable drag rotation.
    pub enable_rotate: bool,
    /// Rotation sensitivity multiplier.
    pub rotate_speed: f32,
    /// Reserved; panning is not yet supported.
    pub enable_pan: bool,
    /// Reserved; panning is not yet supported.
    pub pan_speed: f32,
    /// Apply a constant azimuthal drift each frame.
    pub auto_rotate: bool,
    /// Auto-rotation speed multiplier (1 = one revolution per minute at
    /// 60 fps).
    pub auto_rotate_speed: f32,
    /// Decay pending deltas over several frames instead of consuming them
    /// in one.
    pub enable_damping: bool,
    /// Per-frame delta decay factor, domain `[0, 1)`.
    pub damping_factor: f32,

    // Internal state
    /// Pending (Δradius, Δφ, Δθ) accumulated from input.
    spherical_delta: Spherical,
    /// Last captured pointer coordinate of the active drag.
    rotate_start: Vec2,
    /// Whether a drag is in progress (pointer captured).
    dragging: bool,
    /// Whether a wheel zoom is pending application.
    zoom_changed: bool,
    /// Set by [`Self::dispose`]; input handlers become inert.
    disposed: bool,
    /// Rotation taking the camera's up axis to world +Y, cached at
    /// construction for pole-safe spherical conversion.
    quat: Quat,
    /// Inverse of `quat`.
    quat_inverse: Quat,
    /// Input surface size in pixels; height normalizes drag deltas.
    viewport: Vec2,
}

impl OrbitCamera {
    /// Create a controller bound to `camera` and an input surface of the
    /// given pixel size.
    ///
    /// The camera's `up` vector is read once here to build the pole-safe
    /// basis rotation; later mutations of `up` do not affect pole handling.
    ///
    /// # Errors
    ///
    /// [`OrreryError::DegenerateUpAxis`] when `camera.up` is zero-length or
    /// non-finite; [`OrreryError::EmptyViewport`] when the viewport height
    /// is not a positive finite number.
    pub fn new(mut camera: Camera, viewport: Vec2) -> Result<Self, OrreryError> {
        if !camera.up.is_finite() || camera.up.length_squared() == 0.0 {
            return Err(OrreryError::DegenerateUpAxis);
        }
        if !(viewport.y.is_finite() && viewport.y > 0.0) {
            return Err(OrreryError::EmptyViewport);
        }

        let quat = Quat::from_rotation_arc(camera.up.normalize(), Vec3::Y);
        if viewport.x > 0.0 {
            camera.aspect = viewport.x / viewport.y;
        }

        Ok(Self {
            camera,
            enabled: true,
            target: Vec3::ZERO,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            min_azimuth_angle: f32::NEG_INFINITY,
            max_azimuth_angle: f32::INFINITY,
            enable_zoom: true,
            zoom_speed: 1.0,
            enable_rotate: true,
            rotate_speed: 1.0,
            enable_pan: true,
            pan_speed: 1.0,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            enable_damping: true,
            damping_factor: 0.05,
            spherical_delta: Spherical::ZERO,
            rotate_start: Vec2::ZERO,
            dragging: false,
            zoom_changed: false,
            disposed: false,
            quat,
            quat_inverse: quat.inverse(),
            viewport,
        })
    }

    /// Copy preset values onto the public configuration fields.
    pub fn apply_options(&mut self, options: &ControlOptions) {
        self.min_distance = options.min_distance;
        self.max_distance = options.max_distance;
        self.rotate_speed = options.rotate_speed;
        self.zoom_speed = options.zoom_speed;
        self.pan_speed = options.pan_speed;
        self.auto_rotate = options.auto_rotate;
        self.auto_rotate_speed = options.auto_rotate_speed;
        self.enable_damping = options.enable_damping;
        self.damping_factor = options.damping_factor;
    }

    /// Route a platform-agnostic input event to the matching handler.
    ///
    /// Returns `true` when the camera consumed the event; the caller is
    /// expected to suppress the input surface's default behavior for
    /// consumed events (scroll in particular).
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { x, y } => self.handle_pointer_down(x, y),
            InputEvent::PointerMove { x, y } => self.handle_pointer_move(x, y),
            InputEvent::PointerUp => self.handle_pointer_up(),
            InputEvent::Wheel { delta_y } => self.handle_wheel(delta_y),
            // Touch gestures are interface stubs only.
            InputEvent::TouchStart { .. }
            | InputEvent::TouchMove { .. }
            | InputEvent::TouchEnd => false,
        }
    }

    /// Accumulate a wheel scroll into the pending zoom delta.
    ///
    /// Negative `delta_y` (scroll up) zooms in. The zoom is proportional:
    /// [`update`](Self::update) scales the radius rather than offsetting
    /// it, so zooming covers ground faster at greater distances.
    pub fn handle_wheel(&mut self, delta_y: f32) -> bool {
        if self.disposed || !self.enabled || !self.enable_zoom {
            return false;
        }
        self.spherical_delta.radius += delta_y * ZOOM_DELTA_SCALE * self.zoom_speed;
        self.zoom_changed = true;
        true
    }

    /// Begin a rotation drag at the given pointer coordinate.
    ///
    /// While dragging, move events are processed regardless of where the
    /// pointer travels; the adapter layers listen on the global surface so
    /// a drag survives leaving the canvas bounds.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        if self.disposed || !self.enabled || !self.enable_rotate {
            return false;
        }
        self.rotate_start = Vec2::new(x, y);
        self.dragging = true;
        true
    }

    /// Accumulate rotation from pointer motion while dragging.
    ///
    /// Deltas are frame-to-frame (the captured coordinate advances each
    /// call) and normalized by the viewport height, so rotation speed is
    /// independent of the aspect ratio.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        if self.disposed || !self.dragging {
            return false;
        }
        let rotate_end = Vec2::new(x, y);
        let delta = (rotate_end - self.rotate_start) * self.rotate_speed;

        self.spherical_delta.theta -= TAU * delta.x / self.viewport.y;
        self.spherical_delta.phi -= TAU * delta.y / self.viewport.y;

        self.rotate_start = rotate_end;
        true
    }

    /// End the active drag, if any.
    pub fn handle_pointer_up(&mut self) -> bool {
        let was_dragging = self.dragging;
        self.dragging = false;
        was_dragging && !self.disposed
    }

    /// Integrate pending input into the camera pose.
    ///
    /// Must be called exactly once per rendered frame, after the frame's
    /// input events have been processed. Reads the camera offset into the
    /// pole-safe basis, applies auto-rotation and accumulated deltas,
    /// clamps against the angle and distance limits, writes the new
    /// position back, and aims the camera at the target. Pending deltas
    /// decay by `1 - damping_factor` when damping is enabled and are
    /// consumed whole otherwise.
    pub fn update(&mut self) {
        let offset = self.quat * (self.camera.eye - self.target);
        let mut spherical = Spherical::from_vec3(offset);

        if self.auto_rotate && self.enable_rotate {
            spherical.theta += AUTO_ROTATE_STEP * self.auto_rotate_speed;
        }

        spherical.theta += self.spherical_delta.theta;
        spherical.phi += self.spherical_delta.phi;

        spherical.theta = spherical
            .theta
            .clamp(self.min_azimuth_angle, self.max_azimuth_angle);
        spherical.phi = spherical
            .phi
            .clamp(self.min_polar_angle, self.max_polar_angle);
        spherical.make_safe();

        if self.zoom_changed {
            spherical.radius *= 1.0 + self.spherical_delta.radius * ZOOM_RADIUS_SCALE;
            self.zoom_changed = false;
        }
        spherical.radius = spherical
            .radius
            .clamp(self.min_distance, self.max_distance);

        let offset = self.quat_inverse * spherical.to_vec3();
        self.camera.eye = self.target + offset;
        // Orientation follows from the pose: the camera looks at `target`
        // when its view matrix is built.
        self.camera.target = self.target;

        if self.enable_damping {
            self.spherical_delta.theta *= 1.0 - self.damping_factor;
            self.spherical_delta.phi *= 1.0 - self.damping_factor;
            self.spherical_delta.radius *= 1.0 - self.damping_factor;
        } else {
            self.spherical_delta = Spherical::ZERO;
        }
    }

    /// Update the input surface size.
    ///
    /// Adjusts the camera aspect ratio and the height used to normalize
    /// drag deltas. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Vec2::new(width as f32, height as f32);
        self.camera.aspect = self.viewport.x / self.viewport.y;
    }

    /// Stop processing input permanently.
    ///
    /// Idempotent and safe to call mid-drag: the active drag ends and
    /// every subsequent input event is ignored. [`update`](Self::update)
    /// remains callable; the owning application simply stops invoking it.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.dragging = false;
        self.disposed = true;
        log::debug!("orbit camera disposed; input processing stopped");
    }

    /// Whether [`Self::dispose`] has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn solar_camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 100.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            ..Camera::default()
        }
    }

    /// Controller configured like the solar-system viewer: distance
    /// limits 70..500, damping 0.05.
    fn controls() -> OrbitCamera {
        let mut c = OrbitCamera::new(solar_camera(), VIEWPORT).unwrap();
        c.min_distance = 70.0;
        c.max_distance = 500.0;
        c
    }

    fn radius(c: &OrbitCamera) -> f32 {
        (c.camera.eye - c.target).length()
    }

    /// Polar angle of the camera offset, via atan2 so the tiny pole-safety
    /// margin survives f32 (acos of y/r rounds it away).
    fn polar_of(offset: Vec3) -> f32 {
        offset.x.hypot(offset.z).atan2(offset.y)
    }

    fn polar_angle(c: &OrbitCamera) -> f32 {
        polar_of(c.camera.eye - c.target)
    }

    fn azimuth_angle(c: &OrbitCamera) -> f32 {
        let offset = c.camera.eye - c.target;
        offset.x.atan2(offset.z)
    }

    fn drag(c: &mut OrbitCamera, from: Vec2, to: Vec2) {
        assert!(c.handle_pointer_down(from.x, from.y));
        assert!(c.handle_pointer_move(to.x, to.y));
        assert!(c.handle_pointer_up());
    }

    #[test]
    fn construction_rejects_degenerate_up() {
        let mut camera = solar_camera();
        camera.up = Vec3::ZERO;
        assert!(matches!(
            OrbitCamera::new(camera, VIEWPORT),
            Err(OrreryError::DegenerateUpAxis)
        ));
    }

    #[test]
    fn construction_rejects_empty_viewport() {
        assert!(matches!(
            OrbitCamera::new(solar_camera(), Vec2::new(800.0, 0.0)),
            Err(OrreryError::EmptyViewport)
        ));
    }

    #[test]
    fn drag_accumulates_height_normalized_theta() {
        let mut c = controls();
        assert!(c.handle_pointer_down(400.0, 300.0));
        assert!(c.handle_pointer_move(500.0, 300.0));

        let expected = -TAU * 100.0 / 600.0;
        assert!((c.spherical_delta.theta - expected).abs() < 1e-6);
        assert!(c.spherical_delta.phi.abs() < 1e-6);

        // One update with damping factor 0.05 leaves 95% residual.
        c.damping_factor = 0.05;
        c.update();
        assert!((c.spherical_delta.theta - expected * 0.95).abs() < 1e-6);
    }

    #[test]
    fn drag_deltas_are_frame_to_frame() {
        let mut c = controls();
        assert!(c.handle_pointer_down(0.0, 0.0));
        assert!(c.handle_pointer_move(10.0, 0.0));
        // Repeating the same coordinate contributes nothing further.
        assert!(c.handle_pointer_move(10.0, 0.0));

        let expected = -TAU * 10.0 / 600.0;
        assert!((c.spherical_delta.theta - expected).abs() < 1e-6);
    }

    #[test]
    fn move_without_down_is_ignored() {
        let mut c = controls();
        assert!(!c.handle_pointer_move(500.0, 300.0));
        assert_eq!(c.spherical_delta, Spherical::ZERO);
        assert!(!c.handle_pointer_up());
    }

    #[test]
    fn rotation_respects_enable_flags() {
        let mut c = controls();
        c.enable_rotate = false;
        assert!(!c.handle_pointer_down(0.0, 0.0));

        c.enable_rotate = true;
        c.enabled = false;
        assert!(!c.handle_pointer_down(0.0, 0.0));
        assert!(!c.handle_wheel(-100.0));

        c.enabled = true;
        c.enable_zoom = false;
        assert!(!c.handle_wheel(-100.0));
        assert_eq!(c.spherical_delta, Spherical::ZERO);
    }

    #[test]
    fn scroll_up_zooms_in_within_min_distance() {
        let mut c = controls();
        assert!(c.handle_wheel(-100.0));
        c.update();
        let r = radius(&c);
        assert!(r < 100.0, "zoom in must decrease radius, got {r}");
        assert!(r >= 70.0 - 1e-3);

        // Keep zooming in; the radius saturates at min_distance.
        for _ in 0..60 {
            let _ = c.handle_wheel(-100.0);
            c.update();
            assert!(radius(&c) >= 70.0 - 1e-3);
        }
        assert!((radius(&c) - 70.0).abs() < 0.05);
    }

    #[test]
    fn scroll_down_saturates_at_max_distance() {
        let mut c = controls();
        for _ in 0..60 {
            let _ = c.handle_wheel(500.0);
            c.update();
            assert!(radius(&c) <= 500.0 + 1e-3);
        }
        assert!((radius(&c) - 500.0).abs() < 0.05);

        // Saturated: further zoom-out events leave it at max_distance,
        // and so does a frame with no wheel input at all.
        let _ = c.handle_wheel(500.0);
        c.update();
        assert!((radius(&c) - 500.0).abs() < 0.05);
        c.update();
        assert!((radius(&c) - 500.0).abs() < 0.05);
    }

    #[test]
    fn polar_angle_clamped_to_configured_limits() {
        let mut c = controls();
        c.min_polar_angle = 0.5;
        c.max_polar_angle = 2.0;

        // Hard vertical drags in both directions.
        for dy in [-400.0, 400.0] {
            for _ in 0..20 {
                drag(&mut c, Vec2::new(400.0, 300.0), Vec2::new(400.0, 300.0 + dy));
                c.update();
                let phi = polar_angle(&c);
                assert!(phi >= 0.5 - 1e-3, "phi {phi} under min");
                assert!(phi <= 2.0 + 1e-3, "phi {phi} over max");
            }
        }
    }

    #[test]
    fn polar_angle_never_reaches_the_poles() {
        let mut c = controls();
        // Default limits are [0, π]; make-safe must still keep the camera
        // off the exact poles where look-at degenerates.
        for _ in 0..50 {
            drag(&mut c, Vec2::new(400.0, 300.0), Vec2::new(400.0, 900.0));
            c.update();
            let phi = polar_angle(&c);
            assert!(phi > 0.0 && phi < PI, "phi {phi} hit a pole");
        }
        let offset = c.camera.eye - c.target;
        assert!(
            offset.x != 0.0 || offset.z != 0.0,
            "camera sits exactly on the polar axis"
        );
    }

    #[test]
    fn azimuth_clamped_when_limits_set() {
        let mut c = controls();
        c.min_azimuth_angle = -0.5;
        c.max_azimuth_angle = 0.5;

        for dx in [-300.0, 300.0] {
            for _ in 0..20 {
                drag(&mut c, Vec2::new(400.0, 300.0), Vec2::new(400.0 + dx, 300.0));
                c.update();
                let theta = azimuth_angle(&c);
                assert!(theta >= -0.5 - 1e-3 && theta <= 0.5 + 1e-3);
            }
        }
    }

    #[test]
    fn damping_disabled_consumes_deltas_whole() {
        let mut c = controls();
        c.enable_damping = false;
        drag(&mut c, Vec2::new(400.0, 300.0), Vec2::new(500.0, 350.0));

        c.update();
        let first = c.camera.eye;
        c.update();
        let second = c.camera.eye;

        assert!(
            (second - first).length() < 1e-3,
            "residual motion without damping: {first:?} -> {second:?}"
        );
        assert_eq!(c.spherical_delta, Spherical::ZERO);
    }

    #[test]
    fn damping_decays_toward_a_fixed_point() {
        let mut c = controls();
        c.enable_damping = true;
        c.damping_factor = 0.05;
        drag(&mut c, Vec2::new(400.0, 300.0), Vec2::new(500.0, 350.0));

        c.update();
        let mut previous = c.camera.eye;
        let mut last_step = f32::INFINITY;
        for _ in 0..100 {
            c.update();
            let step = (c.camera.eye - previous).length();
            assert!(
                step <= last_step + 1e-5,
                "motion diverged: step {step} after {last_step}"
            );
            previous = c.camera.eye;
            last_step = step;
        }
        // Residual motion has decayed to visual insignificance.
        assert!(last_step < 1e-3);
    }

    #[test]
    fn auto_rotate_advances_azimuth_per_frame() {
        let mut c = controls();
        c.auto_rotate = true;
        c.auto_rotate_speed = 2.0;

        let before = azimuth_angle(&c);
        c.update();
        let advanced = azimuth_angle(&c) - before;
        assert!((advanced - TAU / 3600.0 * 2.0).abs() < 1e-6);

        // Auto-rotation is gated on rotation being enabled at all.
        c.enable_rotate = false;
        let before = azimuth_angle(&c);
        c.update();
        assert!((azimuth_angle(&c) - before).abs() < 1e-6);
    }

    #[test]
    fn tilted_up_axis_keeps_pole_handling_stable() {
        let mut camera = solar_camera();
        camera.up = Vec3::Z;
        camera.eye = Vec3::new(0.0, 100.0, 0.0);
        let mut c = OrbitCamera::new(camera, VIEWPORT).unwrap();
        c.min_distance = 70.0;
        c.max_distance = 500.0;

        for _ in 0..50 {
            drag(&mut c, Vec2::new(400.0, 300.0), Vec2::new(400.0, 900.0));
            c.update();
            // Pole safety holds in the rotated basis (poles along ±Z here).
            let in_basis = c.quat * (c.camera.eye - c.target);
            let phi = polar_of(in_basis);
            assert!(phi > 0.0 && phi < PI);
            assert!(radius(&c) >= 70.0 - 1e-3 && radius(&c) <= 500.0 + 1e-3);
        }
    }

    #[test]
    fn touch_events_are_stubs() {
        let mut c = controls();
        assert!(!c.handle_event(InputEvent::TouchStart { x: 10.0, y: 10.0 }));
        assert!(!c.handle_event(InputEvent::TouchMove { x: 20.0, y: 10.0 }));
        assert!(!c.handle_event(InputEvent::TouchEnd));
        assert_eq!(c.spherical_delta, Spherical::ZERO);
    }

    #[test]
    fn event_routing_matches_direct_handlers() {
        let mut c = controls();
        assert!(c.handle_event(InputEvent::PointerDown { x: 400.0, y: 300.0 }));
        assert!(c.handle_event(InputEvent::PointerMove { x: 500.0, y: 300.0 }));
        assert!(c.handle_event(InputEvent::PointerUp));
        assert!(c.handle_event(InputEvent::Wheel { delta_y: -100.0 }));

        let expected = -TAU * 100.0 / 600.0;
        assert!((c.spherical_delta.theta - expected).abs() < 1e-6);
        assert!(c.zoom_changed);
    }

    #[test]
    fn dispose_detaches_all_input() {
        let mut c = controls();
        // Dispose mid-drag.
        assert!(c.handle_pointer_down(400.0, 300.0));
        c.dispose();
        assert!(c.is_disposed());
        assert!(!c.dragging);

        let delta_before = c.spherical_delta;
        let eye_before = c.camera.eye;
        assert!(!c.handle_pointer_down(0.0, 0.0));
        assert!(!c.handle_pointer_move(100.0, 100.0));
        assert!(!c.handle_pointer_up());
        assert!(!c.handle_wheel(-500.0));
        assert_eq!(c.spherical_delta, delta_before);
        assert_eq!(c.camera.eye, eye_before);
        assert!(!c.zoom_changed);

        // Idempotent.
        c.dispose();
        assert!(c.is_disposed());
    }

    #[test]
    fn resize_rescales_drag_normalization() {
        let mut c = controls();
        c.resize(800, 400);
        assert!((c.camera.aspect - 2.0).abs() < 1e-6);

        assert!(c.handle_pointer_down(0.0, 0.0));
        assert!(c.handle_pointer_move(100.0, 0.0));
        let expected = -TAU * 100.0 / 400.0;
        assert!((c.spherical_delta.theta - expected).abs() < 1e-6);

        // Degenerate sizes are ignored.
        c.resize(0, 400);
        assert_eq!(c.viewport, Vec2::new(800.0, 400.0));
    }

    #[test]
    fn apply_options_copies_preset_values() {
        let mut c = OrbitCamera::new(solar_camera(), VIEWPORT).unwrap();
        let options = ControlOptions::default();
        c.apply_options(&options);
        assert_eq!(c.min_distance, options.min_distance);
        assert_eq!(c.max_distance, options.max_distance);
        assert_eq!(c.damping_factor, options.damping_factor);
        assert_eq!(c.enable_damping, options.enable_damping);
    }
}
