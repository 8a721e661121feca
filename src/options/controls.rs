use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Orbit control limits, speeds, and motion toggles.
///
/// Defaults match the solar-system viewer preset. Applied onto a
/// controller via
/// [`OrbitCamera::apply_options`](crate::camera::OrbitCamera::apply_options).
pub struct ControlOptions {
    /// Minimum camera distance from the target.
    #[schemars(title = "Min Distance", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub min_distance: f32,
    /// Maximum camera distance from the target.
    #[schemars(title = "Max Distance", range(min = 100.0, max = 2000.0), extend("step" = 10.0))]
    pub max_distance: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Pan sensitivity multiplier (reserved; panning not yet supported).
    #[schemars(skip)]
    pub pan_speed: f32,
    /// Idle azimuthal drift.
    #[schemars(title = "Auto-Rotate")]
    pub auto_rotate: bool,
    /// Auto-rotation speed (1 = one revolution per minute at 60 fps).
    #[schemars(title = "Auto-Rotate Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub auto_rotate_speed: f32,
    /// Inertia-like decay of pending motion.
    #[schemars(title = "Damping")]
    pub enable_damping: bool,
    /// Per-frame delta decay factor, domain `[0, 1)`.
    #[schemars(title = "Damping Factor", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub damping_factor: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            min_distance: 70.0,
            max_distance: 500.0,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            enable_damping: true,
            damping_factor: 0.05,
        }
    }
}
