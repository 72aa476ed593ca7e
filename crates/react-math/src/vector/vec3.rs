//! 3D vector.

use super::Vector;
use crate::scalar::{Real, Scalar};

/// 3D vector.
pub type Vec3<T> = Vector<T, 3>;

impl<T: Scalar> Vector<T, 3> {
    /// Create a new Vec3 from x, y, and z components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    /// Append a w component.
    #[inline]
    pub fn extend(self, w: T) -> Vector<T, 4> {
        Vector::<T, 4>::new(self.data[0], self.data[1], self.data[2], w)
    }

    /// Cross product.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        let [a0, a1, a2] = self.data;
        let [b0, b1, b2] = other.data;
        Self::new(a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0)
    }

    /// Remove the component along the unit plane normal `normal`.
    #[inline]
    pub fn project_on_plane(&self, normal: &Self) -> Self {
        *self - *normal * self.dot(normal)
    }

    /// Mirror the vector about the plane with unit normal `normal`.
    #[inline]
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * ((T::ONE + T::ONE) * self.dot(normal))
    }
}

impl<T: Real> Vector<T, 3> {
    /// Spherical interpolation between two unit vectors.
    pub fn slerp(&self, other: &Self, t: T) -> Self {
        let dot = self.dot(other);
        let theta = dot.acos() * t;
        let relative = (*other - *self * dot).normalized();
        *self * theta.cos() + relative * theta.sin()
    }
}

macro_rules! impl_vec3_directions {
    ($($t:ty),+) => {
        $(
            impl Vector<$t, 3> {
                pub const FORWARD: Self = Self::new(0 as $t, 0 as $t, -1 as $t);
                pub const BACK: Self = Self::new(0 as $t, 0 as $t, 1 as $t);
                pub const UP: Self = Self::new(0 as $t, 1 as $t, 0 as $t);
                pub const DOWN: Self = Self::new(0 as $t, -1 as $t, 0 as $t);
                pub const LEFT: Self = Self::new(-1 as $t, 0 as $t, 0 as $t);
                pub const RIGHT: Self = Self::new(1 as $t, 0 as $t, 0 as $t);
            }
        )+
    };
}

impl_vec3_directions!(i8, i16, i32, i64, isize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross() {
        let x = Vec3::<i32>::RIGHT;
        let y = Vec3::<i32>::UP;
        assert_eq!(x.cross(&y), Vec3::<i32>::BACK);
        assert_eq!(y.cross(&x), Vec3::<i32>::FORWARD);
        assert_eq!(
            Vec3::new(1, 2, 3).cross(&Vec3::new(4, 5, 6)),
            Vec3::new(-3, 6, -3)
        );
    }

    #[test]
    fn test_plane_ops() {
        let v = Vec3::new(1.0f32, -1.0, 2.0);
        assert_eq!(v.project_on_plane(&Vec3::<f32>::UP), Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(v.reflect(&Vec3::<f32>::UP), Vec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_slerp() {
        let a = Vec3::<f64>::RIGHT;
        let b = Vec3::<f64>::UP;
        let half = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(a.slerp(&b, 0.5), Vec3::new(half, half, 0.0));
        assert_relative_eq!(a.slerp(&b, 1.0), b, epsilon = 1e-12);
    }
}
