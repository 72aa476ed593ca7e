//! Operator overloads for [`Matrix`].

use super::Matrix;
use crate::scalar::Scalar;
use crate::vector::Vector;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

macro_rules! impl_matrix_elementwise {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: Scalar, const R: usize, const C: usize> $trait<T> for Matrix<T, R, C> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $assign_trait<T> for Matrix<T, R, C> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_matrix_elementwise!(Add, add, AddAssign, add_assign, +);
impl_matrix_elementwise!(Sub, sub, SubAssign, sub_assign, -);
impl_matrix_elementwise!(Mul, mul, MulAssign, mul_assign, *);
impl_matrix_elementwise!(Div, div, DivAssign, div_assign, /);

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar + Neg<Output = T>, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}

impl<T: Scalar, const R: usize, const C: usize, const P: usize> Mul<Matrix<T, C, P>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, P>;

    #[inline]
    fn mul(self, rhs: Matrix<T, C, P>) -> Self::Output {
        self.dot(&rhs)
    }
}

impl<T: Scalar, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = self.dot(&rhs);
    }
}

/// Matrix times column vector.
impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        let mut data = [T::ZERO; R];
        for (col, v) in self.data.iter().zip(rhs.data) {
            for (d, m) in data.iter_mut().zip(col.iter()) {
                *d = *d + *m * v;
            }
        }
        Vector::from_array(data)
    }
}

/// Row vector times matrix.
impl<T: Scalar, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R> {
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
        let mut data = [T::ZERO; C];
        for (d, col) in data.iter_mut().zip(rhs.data.iter()) {
            *d = col
                .iter()
                .zip(self.data)
                .fold(T::ZERO, |acc, (m, v)| acc + *m * v);
        }
        Vector::from_array(data)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        check!(
            row < R && col < C,
            "matrix index ({}, {}) out of range for {}x{}",
            row,
            col,
            R,
            C
        );
        &self.data[col][row]
    }
}

impl<T: Scalar, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        self.at_mut(row, col)
    }
}

// scalar on the left hand side: `s - M` and `s / M` apply elementwise as `s - m` and `s / m`
macro_rules! impl_scalar_lhs_matrix {
    ($($t:ty),+) => {
        $(
            impl<const R: usize, const C: usize> Add<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                #[inline]
                fn add(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs + self
                }
            }

            impl<const R: usize, const C: usize> Sub<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                #[inline]
                fn sub(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs.map(|m| self - m)
                }
            }

            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                #[inline]
                fn mul(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs * self
                }
            }

            impl<const R: usize, const C: usize> Div<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                #[inline]
                fn div(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs.map(|m| self / m)
                }
            }
        )+
    };
}

impl_scalar_lhs_matrix!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{Mat2, Mat3, Mat3x2, Mat4x3, Vec2, Vec3, Vec4};

    #[test]
    fn test_matrix_matrix() {
        let a = Mat3::from([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let b = Mat3::from([9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(a * b, Mat3::from([90, 114, 138, 54, 69, 84, 18, 24, 30]));
        assert_eq!(a + b, Mat3::splat(10));
        assert_eq!(a - a, Mat3::ZERO);

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
        c -= a * b;
        c += Mat3::<i32>::IDENTITY;
        assert_eq!(c, Mat3::<i32>::IDENTITY);
    }

    #[test]
    fn test_matrix_scalar() {
        let a = Mat2::from([1.0f32, 2.0, 4.0, 8.0]);
        assert_eq!(a * 2.0, Mat2::from([2.0, 4.0, 8.0, 16.0]));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a + 1.0, 1.0 + a);
        assert_eq!(a / 2.0, Mat2::from([0.5, 1.0, 2.0, 4.0]));
        assert_eq!(a - 1.0, Mat2::from([0.0, 1.0, 3.0, 7.0]));
        assert_eq!(-a, Mat2::from([-1.0, -2.0, -4.0, -8.0]));

        let mut b = a;
        b += 1.0;
        b *= 2.0;
        b -= 2.0;
        b /= 2.0;
        assert_eq!(b, a);
    }

    #[test]
    fn test_scalar_lhs_is_elementwise() {
        let a = Mat2::from([1.0f64, 2.0, 4.0, 8.0]);
        assert_eq!(3.0 / a, Mat2::from([3.0, 1.5, 0.75, 0.375]));
        assert_eq!(2.0 - a, Mat2::from([1.0, 0.0, -2.0, -6.0]));
    }

    #[test]
    fn test_matrix_vector() {
        // 2 rows, 3 columns
        let m = Mat3x2::from([1, 2, 3, 4, 5, 6]);
        assert_eq!(m * Vec3::new(1, 0, -1), Vec2::new(-4, -4));
        assert_eq!(Vec2::new(1, 1) * m, Vec3::new(3, 7, 11));

        let t = Mat4x3::from([1, 0, 0, 0, 1, 0, 0, 0, 1, 5, 6, 7]);
        assert_eq!(t * Vec4::new(1, 1, 1, 1), Vec3::new(6, 7, 8));
    }

    #[test]
    fn test_index_mut() {
        let mut m = Mat3::<u16>::ZERO;
        m[(2, 1)] = 4;
        assert_eq!(m.at(2, 1), 4);
        assert_eq!(m.col(1), Vec3::new(0, 0, 4));
    }
}
