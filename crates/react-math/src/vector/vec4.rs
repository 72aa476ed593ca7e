//! 4D vector.

use super::Vector;
use crate::scalar::Scalar;

/// 4D vector.
pub type Vec4<T> = Vector<T, 4>;

impl<T: Scalar> Vector<T, 4> {
    /// Create a new Vec4 from x, y, z and w components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Create a direction (w = 0) from x, y and z components.
    #[inline]
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z, T::ZERO)
    }

    /// The x, y and z components.
    #[inline]
    pub fn xyz(&self) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.data[0], self.data[1], self.data[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;

    #[test]
    fn test_xyz() {
        let v = Vec4::from_xyz(1.0f64, 2.0, 3.0);
        assert_eq!(v.w(), 0.0);
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.xyz().extend(1.0), Vec4::new(1.0, 2.0, 3.0, 1.0));
    }
}
