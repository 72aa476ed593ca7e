//! Angle constants and unit conversions.

use crate::scalar::{lit, Real};
use crate::vector::Vector;

/// π.
#[inline]
pub fn pi<T: Real>() -> T {
    T::PI()
}

/// π / 2.
#[inline]
pub fn half_pi<T: Real>() -> T {
    T::FRAC_PI_2()
}

/// π².
#[inline]
pub fn pi2<T: Real>() -> T {
    T::PI() * T::PI()
}

/// √π.
#[inline]
pub fn pi_sqrt<T: Real>() -> T {
    T::PI().sqrt()
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn degrees<T: Real>(radians: T) -> T {
    radians * (lit::<T>(180.0) / T::PI())
}

/// Converts an angle in degrees to radians.
#[inline]
pub fn radians<T: Real>(degrees: T) -> T {
    degrees * (T::PI() / lit::<T>(180.0))
}

/// Converts every component of `radians` to degrees.
pub fn degrees_vec<T: Real, const S: usize>(radians: Vector<T, S>) -> Vector<T, S> {
    radians.map(degrees)
}

/// Converts every component of `degrees` to radians.
pub fn radians_vec<T: Real, const S: usize>(degrees: Vector<T, S>) -> Vector<T, S> {
    degrees.map(radians)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn test_constants() {
        assert_relative_eq!(pi::<f64>(), std::f64::consts::PI);
        assert_relative_eq!(half_pi::<f32>(), std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(pi2::<f64>(), 9.869604401089358);
        assert_relative_eq!(pi_sqrt::<f64>(), 1.772453850905516);
    }

    #[test]
    fn test_conversions() {
        assert_relative_eq!(degrees(std::f64::consts::PI), 180.0);
        assert_relative_eq!(radians(90.0f32), std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(degrees(radians(37.5f64)), 37.5, epsilon = 1e-12);

        let v = radians_vec(Vec3::new(180.0f64, 90.0, -45.0));
        assert_relative_eq!(
            v,
            Vec3::new(
                std::f64::consts::PI,
                std::f64::consts::FRAC_PI_2,
                -std::f64::consts::FRAC_PI_4
            )
        );
        assert_relative_eq!(degrees_vec(v), Vec3::new(180.0, 90.0, -45.0), epsilon = 1e-12);
    }
}
