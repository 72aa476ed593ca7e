//! Element types accepted by vectors, matrices and quaternions.
//!
//! [`Scalar`] covers every primitive arithmetic type and is enough for the purely arithmetic
//! operations. [`Real`] adds the floating point requirements of determinants, inverses and
//! anything touching trigonometry.

use num_traits::{Float, FloatConst, Num, NumCast, ToPrimitive};
use std::fmt::{Debug, Display};

/// A primitive arithmetic element type.
pub trait Scalar:
    Copy + Debug + Display + PartialOrd + Num + NumCast + ToPrimitive + Send + Sync + 'static
{
    /// Additive identity, usable in constant expressions.
    const ZERO: Self;

    /// Multiplicative identity, usable in constant expressions.
    const ONE: Self;

    /// Element equality used by the `PartialEq` impls of the containers.
    ///
    /// Integers compare exactly. Floating point values are equal when they differ by at most
    /// machine epsilon, unless the `exact-eq` feature is enabled.
    fn approx_eq(self, other: Self) -> bool;

    /// Absolute value (identity for unsigned types).
    fn abs_value(self) -> Self;
}

/// A floating point element type.
pub trait Real: Scalar + Float + FloatConst {}

impl<T> Real for T where T: Scalar + Float + FloatConst {}

macro_rules! impl_scalar_signed {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    self == other
                }

                #[inline]
                fn abs_value(self) -> Self {
                    self.abs()
                }
            }
        )+
    };
}

macro_rules! impl_scalar_unsigned {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    self == other
                }

                #[inline]
                fn abs_value(self) -> Self {
                    self
                }
            }
        )+
    };
}

macro_rules! impl_scalar_float {
    ($($t:ident),+) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    if cfg!(feature = "exact-eq") {
                        self == other
                    } else {
                        // the exact check keeps infinities equal to themselves
                        self == other || (self - other).abs() <= $t::EPSILON
                    }
                }

                #[inline]
                fn abs_value(self) -> Self {
                    self.abs()
                }
            }
        )+
    };
}

impl_scalar_signed!(i8, i16, i32, i64, isize);
impl_scalar_unsigned!(u8, u16, u32, u64, usize);
impl_scalar_float!(f32, f64);

/// Converts a `usize` (a dimension or a literal) into the element type.
#[inline]
pub(crate) fn cast_usize<T: Scalar>(n: usize) -> T {
    <T as NumCast>::from(n).unwrap_or(T::ONE)
}

/// Converts an `f64` literal into a real element type.
#[inline]
pub(crate) fn lit<T: Real>(value: f64) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::nan)
}
