//! Quaternions.

mod rotation;

use crate::scalar::Real;
use crate::vector::Vector;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A quaternion stored as `(x, y, z, w)`, `w` being the scalar part.
///
/// Rotation operations assume unit length.
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Quat<T> {
    v: Vector<T, 4>,
}

impl<T: Real> Quat<T> {
    /// All components zero.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);

    /// All components one.
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE, T::ONE);

    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Create a new quaternion from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            v: Vector::<T, 4>::new(x, y, z, w),
        }
    }

    /// Create a quaternion from a vector part and a scalar part.
    #[inline]
    pub fn from_xyz_w(xyz: Vector<T, 3>, w: T) -> Self {
        Self { v: xyz.extend(w) }
    }

    /// Create a quaternion from a `(x, y, z, w)` vector.
    #[inline]
    pub fn from_vector(v: Vector<T, 4>) -> Self {
        Self { v }
    }

    /// Create a quaternion from a `[x, y, z, w]` array.
    #[inline]
    pub fn from_array(array: [T; 4]) -> Self {
        Self {
            v: Vector::from_array(array),
        }
    }

    /// Convert to a `[x, y, z, w]` array.
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        self.v.to_array()
    }

    /// Convert to a `(x, y, z, w)` vector.
    #[inline]
    pub fn to_vector(self) -> Vector<T, 4> {
        self.v
    }

    #[inline]
    pub fn x(&self) -> T {
        self.v.x()
    }

    #[inline]
    pub fn y(&self) -> T {
        self.v.y()
    }

    #[inline]
    pub fn z(&self) -> T {
        self.v.z()
    }

    #[inline]
    pub fn w(&self) -> T {
        self.v.w()
    }

    /// The vector part.
    #[inline]
    pub fn xyz(&self) -> Vector<T, 3> {
        self.v.xyz()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.v.dot(&other.v)
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.v.length_squared()
    }

    #[inline]
    pub fn length(&self) -> T {
        self.v.length()
    }

    /// The quaternion scaled to unit length. A zero quaternion yields non-finite components.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self {
            v: self.v.normalized(),
        }
    }

    #[inline]
    pub fn normalize(&mut self) {
        self.v.normalize();
    }

    /// `(-x, -y, -z, w)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// The multiplicative inverse, `conjugate / |q|^2`.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.length_squared()
    }

    /// Rotate a vector, `v + 2 * xyz x (xyz x v + w * v)`.
    pub fn rotate(&self, v: &Vector<T, 3>) -> Vector<T, 3> {
        let u = self.xyz();
        let t = u.cross(&(u.cross(v) + *v * self.w()));
        *v + t * (T::one() + T::one())
    }

    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.v.is_finite()
    }
}

impl<T: Real> Default for Quat<T> {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Real> From<[T; 4]> for Quat<T> {
    #[inline]
    fn from(array: [T; 4]) -> Self {
        Self::from_array(array)
    }
}

impl<T: Real> From<Quat<T>> for [T; 4] {
    #[inline]
    fn from(q: Quat<T>) -> Self {
        q.to_array()
    }
}

impl<T: Real> PartialEq for Quat<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v
    }
}

impl<T: Real> std::fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Quat({}, {}, {}, {})",
            self.x(),
            self.y(),
            self.z(),
            self.w()
        )
    }
}

impl<T: Real> Add for Quat<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self { v: self.v + rhs.v }
    }
}

impl<T: Real> Sub for Quat<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self { v: self.v - rhs.v }
    }
}

/// Hamilton product.
impl<T: Real> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [ax, ay, az, aw] = self.to_array();
        let [bx, by, bz, bw] = rhs.to_array();
        Self::new(
            ax * bw + ay * bz - az * by + aw * bx,
            -ax * bz + ay * bw + az * bx + aw * by,
            ax * by - ay * bx + az * bw + aw * bz,
            -ax * bx - ay * by - az * bz + aw * bw,
        )
    }
}

impl<T: Real> Mul<Vector<T, 3>> for Quat<T> {
    type Output = Vector<T, 3>;

    #[inline]
    fn mul(self, rhs: Vector<T, 3>) -> Self::Output {
        self.rotate(&rhs)
    }
}

macro_rules! impl_quat_scalar_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: Real> $trait<T> for Quat<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                Self { v: self.v $op rhs }
            }
        }

        impl<T: Real> $assign_trait<T> for Quat<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_quat_scalar_op!(Add, add, AddAssign, add_assign, +);
impl_quat_scalar_op!(Sub, sub, SubAssign, sub_assign, -);
impl_quat_scalar_op!(Mul, mul, MulAssign, mul_assign, *);
impl_quat_scalar_op!(Div, div, DivAssign, div_assign, /);

impl<T: Real> AddAssign for Quat<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> SubAssign for Quat<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real> MulAssign for Quat<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Neg for Quat<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self { v: -self.v }
    }
}

macro_rules! impl_scalar_lhs_quat {
    ($($t:ty),+) => {
        $(
            impl Mul<Quat<$t>> for $t {
                type Output = Quat<$t>;

                #[inline]
                fn mul(self, rhs: Quat<$t>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

impl_scalar_lhs_quat!(f32, f64);

#[cfg(any(test, feature = "approx"))]
impl<T> approx::AbsDiffEq for Quat<T>
where
    T: Real + approx::AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.v, &other.v, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T> approx::RelativeEq for Quat<T>
where
    T: Real + approx::RelativeEq,
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        approx::RelativeEq::relative_eq(&self.v, &other.v, epsilon, max_relative)
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T> approx::UlpsEq for Quat<T>
where
    T: Real + approx::UlpsEq,
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.v, &other.v, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn test_constants() {
        assert_eq!(Quat::<f32>::default(), Quat::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Quat::<f64>::ONE.to_array(), [1.0; 4]);
        assert_eq!(Quat::<f64>::ZERO.length(), 0.0);
    }

    #[test]
    fn test_conjugate_and_inverse() {
        let q = Quat::new(1.0f64, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quat::new(-1.0, -2.0, -3.0, 4.0));
        assert_relative_eq!(
            q.inverse(),
            Quat::new(-1.0 / 30.0, -2.0 / 30.0, -0.1, 4.0 / 30.0)
        );
        assert_relative_eq!(q * q.inverse(), Quat::IDENTITY, epsilon = 1e-12);
    }

    #[test]
    fn test_dot_and_normalize() {
        let a = Quat::new(1.0f32, 2.0, 3.0, 4.0);
        let b = Quat::new(9.0f32, 8.0, 7.0, 6.0);
        assert_eq!(a.dot(&b), 70.0);

        let mut n = Quat::new(1.0f32, 2.0, 3.0, 1.0);
        n.normalize();
        assert_relative_eq!(
            n,
            Quat::new(0.2581989, 0.5163978, 0.7745967, 0.2581989),
            epsilon = 1e-6
        );
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_hamilton_product() {
        let a = Quat::new(1.0f32, 2.0, 3.0, 4.0);
        let b = Quat::new(9.0f32, 8.0, 7.0, 6.0);
        assert_eq!(a * b, Quat::new(32.0, 64.0, 36.0, -22.0));
        assert_eq!(b * a, Quat::new(52.0, 24.0, 56.0, -22.0));

        let mut c = Quat::new(4.0f32, 2.0, 9.0, 3.0);
        c *= a;
        assert_eq!(c, Quat::new(7.0, 11.0, 51.0, -23.0));
    }

    #[test]
    fn test_elementwise_ops() {
        let a = Quat::new(1.0f64, 2.0, 3.0, 4.0);
        let b = Quat::new(4.0f64, 3.0, 2.0, 1.0);
        assert_eq!(a + b, Quat::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(a - b, Quat::new(-3.0, -1.0, 1.0, 3.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(a / 2.0, Quat::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(-a, Quat::new(-1.0, -2.0, -3.0, -4.0));

        let mut c = a;
        c += b;
        c -= 1.0;
        assert_eq!(c, Quat::new(4.0, 4.0, 4.0, 4.0));
    }

    #[test]
    fn test_rotate() {
        let q = Quat::new(0.0f32, 0.8509035, 0.0, 0.525322);
        let v = q * Vec3::new(1.0, 0.0, -1.0);
        assert_relative_eq!(v, Vec3::new(-1.34207, 0.0, -0.44592), epsilon = 1e-4);
        assert_relative_eq!(
            Quat::<f64>::IDENTITY.rotate(&Vec3::new(1.0, 2.0, 3.0)),
            Vec3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Quat::new(1.0f32, 2.0, 3.5, 4.0).to_string(), "Quat(1, 2, 3.5, 4)");
    }
}
