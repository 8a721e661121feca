//! Camera system for the solar-system viewer.
//!
//! Provides the camera pose/projection type, a spherical-coordinate
//! representation of camera-to-target offsets, and the orbit camera
//! controller that drives the pose from pointer and wheel input.

/// Orbit camera controller: constrained rotation, zoom, damping.
pub mod controller;
/// Core camera pose and projection matrices.
pub mod core;
/// Spherical coordinates for orbit-style constraints.
pub mod spherical;

pub use controller::OrbitCamera;
pub use core::Camera;
pub use spherical::Spherical;
