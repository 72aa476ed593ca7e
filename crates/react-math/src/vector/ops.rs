//! Componentwise arithmetic for [`Vector`].

use super::Vector;
use crate::scalar::Scalar;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

macro_rules! impl_vector_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: Scalar, const S: usize> $trait for Vector<T, S> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                self.zip_map(rhs, |a, b| a $op b)
            }
        }

        impl<T: Scalar, const S: usize> $trait<T> for Vector<T, S> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }

        impl<T: Scalar, const S: usize> $assign_trait for Vector<T, S> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl<T: Scalar, const S: usize> $assign_trait<T> for Vector<T, S> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_vector_binop!(Add, add, AddAssign, add_assign, +);
impl_vector_binop!(Sub, sub, SubAssign, sub_assign, -);
impl_vector_binop!(Mul, mul, MulAssign, mul_assign, *);
impl_vector_binop!(Div, div, DivAssign, div_assign, /);

impl<T: Scalar + Neg<Output = T>, const S: usize> Neg for Vector<T, S> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}

impl<T: Scalar, const S: usize> Index<usize> for Vector<T, S> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        check!(index < S, "vector index {} out of range for dimension {}", index, S);
        &self.data[index]
    }
}

impl<T: Scalar, const S: usize> IndexMut<usize> for Vector<T, S> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        check!(index < S, "vector index {} out of range for dimension {}", index, S);
        &mut self.data[index]
    }
}

// scalar on the left hand side
macro_rules! impl_scalar_lhs_vector {
    ($($t:ty),+) => {
        $(
            impl<const S: usize> Mul<Vector<$t, S>> for $t {
                type Output = Vector<$t, S>;

                #[inline]
                fn mul(self, rhs: Vector<$t, S>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

impl_scalar_lhs_vector!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
