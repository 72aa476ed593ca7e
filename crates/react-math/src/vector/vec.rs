//! Generic fixed-size vector.

use crate::checks::{HasComponent, VectorDim};
use crate::error::AlgebraError;
use crate::scalar::{Real, Scalar};
use num_traits::NumCast;
use rand::Rng;

/// A vector of `S` elements of type `T`, stored contiguously.
///
/// `S` must be at least 2. The check happens when a constructor is instantiated, so
/// `Vector::<f32, 1>::splat(0.0)` does not build.
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Vector<T, const S: usize> {
    pub(crate) data: [T; S],
}

impl<T: Scalar, const S: usize> Vector<T, S> {
    /// The number of components.
    pub const DIMENSION: usize = S;

    /// All components set to zero.
    pub const ZERO: Self = Self { data: [T::ZERO; S] };

    /// All components set to one.
    pub const ONE: Self = Self { data: [T::ONE; S] };

    /// Create a vector from an array.
    #[inline]
    pub fn from_array(data: [T; S]) -> Self {
        let () = VectorDim::<S>::VALID;
        Self { data }
    }

    /// Create a vector with every component set to `value`.
    ///
    /// Vectors need at least two components:
    ///
    /// ```compile_fail
    /// use react_math::Vector;
    ///
    /// let v = Vector::<f32, 1>::splat(0.0);
    /// ```
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_array([value; S])
    }

    /// Create a vector from a slice.
    ///
    /// Copies `min(S, slice.len())` elements, the remaining components are zero.
    pub fn from_slice(slice: &[T]) -> Self {
        let mut data = [T::ZERO; S];
        data.iter_mut().zip(slice).for_each(|(d, s)| *d = *s);
        Self::from_array(data)
    }

    /// Create a vector from a slice holding exactly `S` elements.
    pub fn try_from_slice(slice: &[T]) -> Result<Self, AlgebraError> {
        let data: [T; S] = slice.try_into().map_err(|_| AlgebraError::InvalidLength {
            expected: S,
            actual: slice.len(),
        })?;
        Ok(Self::from_array(data))
    }

    /// Copy into a vector of a different size, padding with zeros or truncating.
    pub fn resize<const S2: usize>(&self) -> Vector<T, S2> {
        Vector::from_slice(&self.data)
    }

    /// Convert every component to another element type.
    pub fn cast<U: Scalar>(&self) -> Result<Vector<U, S>, AlgebraError> {
        let mut data = [U::ZERO; S];
        for (d, s) in data.iter_mut().zip(self.data.iter()) {
            *d = <U as NumCast>::from(*s).ok_or(AlgebraError::CastError)?;
        }
        Ok(Vector::from_array(data))
    }

    /// Apply `f` to every component.
    #[inline]
    pub fn map<U: Scalar>(self, f: impl FnMut(T) -> U) -> Vector<U, S> {
        Vector::from_array(self.data.map(f))
    }

    /// Combine the components of two vectors pairwise.
    #[inline]
    pub(crate) fn zip_map(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        let mut data = self.data;
        data.iter_mut()
            .zip(other.data)
            .for_each(|(a, b)| *a = f(*a, b));
        Self { data }
    }

    /// Convert to array.
    #[inline]
    pub fn to_array(self) -> [T; S] {
        self.data
    }

    /// View the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Get a component, or `None` when `index >= S`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Get a mutable component, or `None` when `index >= S`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Get the x component.
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Get the y component.
    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Get the z component. Requires at least 3 components.
    ///
    /// ```
    /// use react_math::Vec3;
    ///
    /// assert_eq!(Vec3::new(1.0f32, 2.0, 3.0).z(), 3.0);
    /// ```
    ///
    /// ```compile_fail
    /// use react_math::Vec2;
    ///
    /// let z = Vec2::new(1.0f32, 2.0).z();
    /// ```
    #[inline]
    pub fn z(&self) -> T {
        let () = HasComponent::<S, 3>::VALID;
        self.data[2]
    }

    /// Get the w component. Requires at least 4 components.
    ///
    /// ```compile_fail
    /// use react_math::Vec3;
    ///
    /// let w = Vec3::new(1.0f32, 2.0, 3.0).w();
    /// ```
    #[inline]
    pub fn w(&self) -> T {
        let () = HasComponent::<S, 4>::VALID;
        self.data[3]
    }

    /// Get the red channel, same as [`Self::x`].
    #[inline]
    pub fn r(&self) -> T {
        self.x()
    }

    /// Get the green channel, same as [`Self::y`].
    #[inline]
    pub fn g(&self) -> T {
        self.y()
    }

    /// Get the blue channel, same as [`Self::z`].
    #[inline]
    pub fn b(&self) -> T {
        self.z()
    }

    /// Get the alpha channel, same as [`Self::w`].
    #[inline]
    pub fn a(&self) -> T {
        self.w()
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.data[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.data[1]
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        let () = HasComponent::<S, 3>::VALID;
        &mut self.data[2]
    }

    #[inline]
    pub fn w_mut(&mut self) -> &mut T {
        let () = HasComponent::<S, 4>::VALID;
        &mut self.data[3]
    }

    #[inline]
    pub fn r_mut(&mut self) -> &mut T {
        self.x_mut()
    }

    #[inline]
    pub fn g_mut(&mut self) -> &mut T {
        self.y_mut()
    }

    #[inline]
    pub fn b_mut(&mut self) -> &mut T {
        self.z_mut()
    }

    #[inline]
    pub fn a_mut(&mut self) -> &mut T {
        self.w_mut()
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::ZERO, |acc, (a, b)| acc + *a * *b)
    }

    /// Squared euclidean length.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &Self) -> Self {
        self.zip_map(*other, |a, b| if b < a { b } else { a })
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        self.zip_map(*other, |a, b| if b > a { b } else { a })
    }

    /// Add one to every component.
    pub fn increment(&mut self) {
        *self = self.map(|v| v + T::ONE);
    }

    /// Subtract one from every component.
    pub fn decrement(&mut self) {
        *self = self.map(|v| v - T::ONE);
    }

    /// A vector whose components are drawn uniformly from `[min, max)`.
    ///
    /// Integer components are truncated towards zero.
    pub fn random<R: Rng>(rng: &mut R, min: T, max: T) -> Self {
        let lo = min.to_f64().unwrap_or(0.0);
        let span = max.to_f64().unwrap_or(0.0) - lo;
        let mut data = [T::ZERO; S];
        for d in data.iter_mut() {
            let value = lo + span * rng.random::<f64>();
            *d = <T as NumCast>::from(value).unwrap_or(min);
        }
        Self::from_array(data)
    }
}

impl<T: Real, const S: usize> Vector<T, S> {
    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// The vector scaled to unit length.
    ///
    /// A zero length vector yields non-finite components; use [`Self::try_normalized`] to
    /// detect that case.
    #[inline]
    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    /// Scale the vector to unit length in place.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// The vector scaled to unit length, or an error for a zero length vector.
    pub fn try_normalized(&self) -> Result<Self, AlgebraError> {
        let length = self.length();
        if length == T::zero() {
            return Err(AlgebraError::ZeroLength);
        }
        Ok(*self / length)
    }

    /// Linear interpolation, `self + t * (other - self)`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }

    /// Project `other` onto the direction of `self`.
    pub fn project(&self, other: &Self) -> Self {
        *self * (self.dot(other) / self.length_squared())
    }

    /// The angle between two vectors, in radians.
    pub fn angle(&self, other: &Self) -> T {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).length()
    }

    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

macro_rules! impl_float_vector_consts {
    ($($t:ident),+) => {
        $(
            impl<const S: usize> Vector<$t, S> {
                /// All components set to positive infinity.
                pub const INF: Self = Self { data: [$t::INFINITY; S] };

                /// All components set to negative infinity.
                pub const NEG_INF: Self = Self { data: [$t::NEG_INFINITY; S] };
            }
        )+
    };
}

impl_float_vector_consts!(f32, f64);

impl<T: Scalar, const S: usize> Default for Vector<T, S> {
    #[inline]
    fn default() -> Self {
        Self::from_array([T::ZERO; S])
    }
}

impl<T: Scalar, const S: usize> From<[T; S]> for Vector<T, S> {
    #[inline]
    fn from(data: [T; S]) -> Self {
        Self::from_array(data)
    }
}

impl<T: Scalar, const S: usize> From<Vector<T, S>> for [T; S] {
    #[inline]
    fn from(v: Vector<T, S>) -> Self {
        v.to_array()
    }
}

impl<T: Scalar, const S: usize> PartialEq for Vector<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.approx_eq(*b))
    }
}

impl<T: Scalar, const S: usize> std::fmt::Display for Vector<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl<'a, T: Scalar, const S: usize> IntoIterator for &'a Vector<T, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T, const S: usize> approx::AbsDiffEq for Vector<T, S>
where
    T: Scalar + approx::AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T, const S: usize> approx::RelativeEq for Vector<T, S>
where
    T: Scalar + approx::RelativeEq,
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T, const S: usize> approx::UlpsEq for Vector<T, S>
where
    T: Scalar + approx::UlpsEq,
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| T::ulps_eq(a, b, epsilon, max_ulps))
    }
}
