use std::f32::consts::PI;

use glam::Vec3;

/// Margin keeping the polar angle away from the exact poles, where the
/// look-at orientation is undefined.
pub const POLE_EPSILON: f32 = 1e-6;

/// Spherical coordinates in the physics convention: `phi` is the polar
/// angle measured from the +Y pole, `theta` the azimuthal angle with
/// `theta = atan2(x, z)`.
///
/// Used both as an absolute camera-to-target offset and as a pending
/// delta accumulator (where `radius` holds the pending zoom amount).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f32,
    /// Polar angle in radians, 0 at the +Y pole, π at the −Y pole.
    pub phi: f32,
    /// Azimuthal angle in radians, unconstrained.
    pub theta: f32,
}

impl Spherical {
    /// All components zero.
    pub const ZERO: Self = Self { radius: 0.0, phi: 0.0, theta: 0.0 };

    /// Convert a Cartesian offset into spherical coordinates.
    ///
    /// The zero vector maps to `(0, 0, 0)`; callers relying on a valid
    /// orientation must follow up with [`Spherical::make_safe`] and a
    /// radius clamp.
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::ZERO;
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    /// Convert back to a Cartesian offset.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.radius * self.phi.cos(),
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Clamp `phi` into the open interval `(0, π)` so the offset never
    /// sits exactly on a pole.
    pub fn make_safe(&mut self) {
        self.phi = self.phi.clamp(POLE_EPSILON, PI - POLE_EPSILON);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_cartesian_offsets() {
        let offsets = [
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::new(3.0, -4.0, 12.0),
            Vec3::new(-70.0, 25.0, 1.0),
        ];
        for offset in offsets {
            let back = Spherical::from_vec3(offset).to_vec3();
            assert!(
                (back - offset).length() < 1e-3,
                "round trip drifted: {offset:?} -> {back:?}"
            );
        }
    }

    #[test]
    fn zero_vector_has_no_nans() {
        let s = Spherical::from_vec3(Vec3::ZERO);
        assert_eq!(s, Spherical::ZERO);
        let v = s.to_vec3();
        assert!(v.is_finite());
    }

    #[test]
    fn make_safe_keeps_phi_off_the_poles() {
        let mut top = Spherical { radius: 10.0, phi: 0.0, theta: 0.5 };
        top.make_safe();
        assert!(top.phi > 0.0);

        let mut bottom = Spherical { radius: 10.0, phi: PI, theta: 0.5 };
        bottom.make_safe();
        assert!(bottom.phi < PI);

        let mut inside = Spherical { radius: 10.0, phi: 1.2, theta: 0.5 };
        inside.make_safe();
        assert_eq!(inside.phi, 1.2);
    }

    #[test]
    fn polar_axis_convention_matches_plus_y() {
        // Straight up the +Y axis: phi = 0.
        let up = Spherical::from_vec3(Vec3::new(0.0, 5.0, 0.0));
        assert!(up.phi.abs() < 1e-6);
        // On the equator along +Z: phi = π/2, theta = 0.
        let equator = Spherical::from_vec3(Vec3::new(0.0, 0.0, 5.0));
        assert!((equator.phi - PI / 2.0).abs() < 1e-6);
        assert!(equator.theta.abs() < 1e-6);
    }
}
