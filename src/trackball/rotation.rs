//! Spin/tilt rotation matrices.
//!
//! Spin turns the object about its vertical axis (+Y) and is applied first;
//! tilt then turns it about the horizontal axis (+X): `M = R_tilt * R_spin`.

use glam::{Mat3, Mat4};

/// Compose the 4x4 rotation for the given angles (radians).
#[must_use]
pub fn rotation_matrix(spin: f32, tilt: f32) -> Mat4 {
    Mat4::from_rotation_x(tilt) * Mat4::from_rotation_y(spin)
}

/// Compose the 3x3 rotation for the given angles (radians).
#[must_use]
pub fn rotation_matrix3(spin: f32, tilt: f32) -> Mat3 {
    Mat3::from_rotation_x(tilt) * Mat3::from_rotation_y(spin)
}

/// Recover `(spin, tilt)` from a matrix built by [`rotation_matrix3`].
///
/// Both angles come back wrapped to `(-PI, PI]`.
#[must_use]
pub fn angles_from_matrix(m: Mat3) -> (f32, f32) {
    // Row 0 is (cos s, 0, sin s); column 1 is (0, cos t, sin t).
    let spin = m.z_axis.x.atan2(m.x_axis.x);
    let tilt = m.y_axis.z.atan2(m.y_axis.y);
    (spin, tilt)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn identity_at_zero() {
        assert!(rotation_matrix(0.0, 0.0).abs_diff_eq(Mat4::IDENTITY, EPS));
        assert!(rotation_matrix3(0.0, 0.0).abs_diff_eq(Mat3::IDENTITY, EPS));
    }

    #[test]
    fn spin_is_applied_before_tilt() {
        let half_pi = std::f32::consts::FRAC_PI_2;
        let m = rotation_matrix3(half_pi, half_pi);
        // +Z spins onto +X, and tilting about X leaves it there.
        let v = m * Vec3::Z;
        assert!(v.abs_diff_eq(Vec3::X, EPS), "got {v:?}");
    }

    #[test]
    fn four_by_four_matches_three_by_three() {
        let m4 = rotation_matrix(0.7, -0.3);
        let m3 = rotation_matrix3(0.7, -0.3);
        assert!(Mat3::from_mat4(m4).abs_diff_eq(m3, EPS));
        assert!((m4.w_axis.w - 1.0).abs() < EPS);
    }

    #[test]
    fn decomposition_recovers_angles() {
        for &(spin, tilt) in
            &[(0.0, 0.25), (1.2, -0.4), (-2.5, 1.1), (3.0, -1.5)]
        {
            let (s, t) = angles_from_matrix(rotation_matrix3(spin, tilt));
            assert!((s - spin).abs() < EPS, "spin {s} vs {spin}");
            assert!((t - tilt).abs() < EPS, "tilt {t} vs {tilt}");
        }
    }
}
