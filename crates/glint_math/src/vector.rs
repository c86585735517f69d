//! Vector helpers used by the scattering model.

use crate::Vec3;

/// Threshold below which every component counts as zero.
const NEAR_ZERO_EPSILON: f32 = 1e-8;

/// Returns true if the vector is close to zero in all dimensions.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.abs().max_element() < NEAR_ZERO_EPSILON
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with the given normal.
///
/// `etai_over_etat` is the ratio of refractive indices on the incident
/// side over the transmitted side.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_zero() {
        assert!(near_zero(Vec3::ZERO));
        assert!(near_zero(Vec3::new(1e-9, -1e-9, 0.0)));
        assert!(!near_zero(Vec3::new(1e-9, 1e-3, 0.0)));
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let d = Vec3::new(1.0, -1.0, 0.0);
        let n = Vec3::Y;
        let r = reflect(d, n);

        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(r.dot(n), -d.dot(n));
    }

    #[test]
    fn test_refract_index_matched_is_undeviated() {
        let uv = Vec3::new(0.6, -0.8, 0.0);
        let refracted = refract(uv, Vec3::Y, 1.0);
        assert!((refracted - uv).length() < 1e-5);
    }

    #[test]
    fn test_refract_bends_toward_normal_entering_denser_medium() {
        let uv = Vec3::new(1.0, -1.0, 0.0).normalize();
        let refracted = refract(uv, Vec3::Y, 1.0 / 1.5);

        // sin(theta_t) = sin(theta_i) / 1.5
        let sin_i = uv.x;
        assert!((refracted.x - sin_i / 1.5).abs() < 1e-5);
        assert!(refracted.y < 0.0);
        assert!((refracted.length() - 1.0).abs() < 1e-5);
    }
}
