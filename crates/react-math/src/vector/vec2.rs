//! 2D vector.

use super::Vector;
use crate::scalar::Scalar;

/// 2D vector.
pub type Vec2<T> = Vector<T, 2>;

impl<T: Scalar> Vector<T, 2> {
    /// Create a new Vec2 from x and y components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }

    /// Append a z component.
    #[inline]
    pub fn extend(self, z: T) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.data[0], self.data[1], z)
    }
}

macro_rules! impl_vec2_directions {
    ($($t:ty),+) => {
        $(
            impl Vector<$t, 2> {
                pub const UP: Self = Self::new(0 as $t, 1 as $t);
                pub const DOWN: Self = Self::new(0 as $t, -1 as $t);
                pub const LEFT: Self = Self::new(-1 as $t, 0 as $t);
                pub const RIGHT: Self = Self::new(1 as $t, 0 as $t);
            }
        )+
    };
}

impl_vec2_directions!(i8, i16, i32, i64, isize, f32, f64);
