//! Determinant, cofactors and inverse of square matrices.

use super::Matrix;
use crate::checks::Reduced;
use crate::error::AlgebraError;
use crate::scalar::{cast_usize, Real, Scalar};

/// Gaussian elimination with partial pivoting on the leading `n x n` block of `m`.
///
/// `m` is column-major (`m[col][row]`) and is overwritten. Pivots with a magnitude below
/// `epsilon * n` are treated as zero, as is a final determinant below the same tolerance.
fn eliminate<T: Real, const N: usize>(m: &mut [[T; N]; N], n: usize) -> T {
    let tolerance = T::epsilon() * cast_usize::<T>(n);
    let mut det = T::one();

    for i in 0..n {
        let mut pivot = m[i][i];
        let mut pivot_row = i;
        for row in i + 1..n {
            if m[i][row].abs() > pivot.abs() {
                pivot = m[i][row];
                pivot_row = row;
            }
        }

        if pivot == T::zero() {
            return T::zero();
        }

        if pivot_row != i {
            for col in m.iter_mut().take(n) {
                col.swap(i, pivot_row);
            }
            det = -det;
        }

        if pivot.abs() < tolerance {
            log::trace!("pivot {pivot} in column {i} is below tolerance {tolerance}");
            return T::zero();
        }

        det = det * pivot;

        for row in i + 1..n {
            let factor = m[i][row] / pivot;
            for col in i + 1..n {
                m[col][row] = m[col][row] - factor * m[col][i];
            }
        }
    }

    if det.abs() < tolerance {
        log::trace!("determinant {det} clamped to zero, tolerance {tolerance}");
        return T::zero();
    }
    det
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The matrix with row `ignore_row` and column `ignore_col` removed.
    ///
    /// `RR` and `CC` must be `R - 1` and `C - 1`, usually inferred from the binding:
    /// `let minor: Mat2<f32> = m.reduce(0, 1);`
    ///
    /// ```
    /// use react_math::{Mat2, Mat3};
    ///
    /// let m = Mat3::from([1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// let minor: Mat2<i32> = m.reduce(0, 1);
    /// assert_eq!(minor.to_cols_array(), [2, 3, 8, 9]);
    /// ```
    ///
    /// Any other output shape does not build:
    ///
    /// ```compile_fail
    /// use react_math::{Mat3, Matrix};
    ///
    /// let m = Mat3::<f32>::IDENTITY;
    /// let minor: Matrix<f32, 2, 1> = m.reduce(0, 0);
    /// ```
    pub fn reduce<const RR: usize, const CC: usize>(
        &self,
        ignore_row: usize,
        ignore_col: usize,
    ) -> Matrix<T, RR, CC> {
        let () = Reduced::<R, C, RR, CC>::VALID;
        check!(
            ignore_row < R && ignore_col < C,
            "cannot remove ({}, {}) from a {}x{} matrix",
            ignore_row,
            ignore_col,
            R,
            C
        );
        let mut out = Matrix::<T, RR, CC>::zeros();
        let cols = self.data.iter().enumerate().filter(|(j, _)| *j != ignore_col);
        for (dst, (_, src)) in out.data.iter_mut().zip(cols) {
            let rows = src.iter().enumerate().filter(|(i, _)| *i != ignore_row);
            for (d, (_, s)) in dst.iter_mut().zip(rows) {
                *d = *s;
            }
        }
        out
    }
}

impl<T: Real, const N: usize> Matrix<T, N, N> {
    /// The determinant, by Gaussian elimination with partial pivoting.
    ///
    /// Results smaller in magnitude than `epsilon * N` are returned as exactly zero.
    pub fn determinant(&self) -> T {
        let mut scratch = self.data;
        eliminate(&mut scratch, N)
    }

    /// Whether the matrix has a non-zero (clamped) determinant.
    #[inline]
    pub fn invertible(&self) -> bool {
        self.determinant().abs() > T::zero()
    }

    /// Determinant of the minor with row `row` and column `col` removed.
    fn minor(&self, row: usize, col: usize) -> T {
        let mut scratch = [[T::zero(); N]; N];
        let cols = self.data.iter().enumerate().filter(|(j, _)| *j != col);
        for (dst, (_, src)) in scratch.iter_mut().zip(cols) {
            let rows = src.iter().enumerate().filter(|(i, _)| *i != row);
            for (d, (_, s)) in dst.iter_mut().zip(rows) {
                *d = *s;
            }
        }
        eliminate(&mut scratch, N - 1)
    }

    /// The cofactor matrix, `(-1)^(i + j) * det(minor(i, j))` at `(i, j)`.
    ///
    /// The cofactor matrix of a 1x1 matrix is `[1]`.
    pub fn cofactors(&self) -> Self {
        let mut out = Self::zeros();
        for (j, col) in out.data.iter_mut().enumerate() {
            for (i, v) in col.iter_mut().enumerate() {
                let minor = self.minor(i, j);
                *v = if (i + j) % 2 == 0 { minor } else { -minor };
            }
        }
        out
    }

    /// The inverse through the adjugate, or the zero matrix when the matrix is singular.
    ///
    /// Use [`Self::try_inverse`] to tell a singular matrix apart from a computed result.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or(Self::ZERO)
    }

    /// The inverse through the adjugate.
    pub fn try_inverse(&self) -> Result<Self, AlgebraError> {
        let det = self.determinant();
        if det == T::zero() {
            log::debug!("matrix is singular, no inverse");
            return Err(AlgebraError::Singular);
        }
        Ok(self.cofactors().transpose() * (T::one() / det))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mat2, Mat3, Mat4, Matrix};
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_determinant() {
        let m = Mat3::from([6.0f64, 4.0, 2.0, 1.0, -2.0, 8.0, 1.0, 5.0, 7.0]);
        assert_relative_eq!(m.determinant(), -306.0, epsilon = 1e-9);

        let m = Mat4::from([
            1.0f64, 2.0, -1.0, 2.0, 0.0, 5.0, 2.0, 1.0, 4.0, 0.0, 3.0, -2.0, -6.0, 3.0, 5.0, 3.0,
        ]);
        assert_relative_eq!(m.determinant(), 318.0, epsilon = 1e-9);

        assert_relative_eq!(Mat2::from([3.0f32, 1.0, 4.0, 2.0]).determinant(), 2.0);
        assert_eq!(Matrix::<f32, 1, 1>::splat(-4.0).determinant(), -4.0);
        assert_eq!(Mat3::<f64>::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn test_determinant_of_row_swap_is_negated() {
        let mut m = Mat3::from([2.0f64, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 1.0]);
        let det = m.determinant();
        m.swap_row(0, 1);
        assert_relative_eq!(m.determinant(), -det, epsilon = 1e-12);
    }

    #[test]
    fn test_singular() {
        let m = Mat4::from([
            1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0,
            16.0,
        ]);
        assert_eq!(m.determinant(), 0.0);
        assert!(!m.invertible());
        assert_eq!(m.inverse(), Mat4::ZERO);
        assert_eq!(m.try_inverse(), Err(AlgebraError::Singular));

        assert!(!Mat3::<f64>::ZERO.invertible());
    }

    #[test]
    fn test_inverse() {
        let m = Mat3::from([1.0f64, -2.0, 1.0, 2.0, 0.0, -1.0, -1.0, 1.0, 0.0]);
        assert!(m.invertible());
        assert_relative_eq!(
            m.inverse(),
            Mat3::from([1.0, 1.0, 2.0, 1.0, 1.0, 3.0, 2.0, 1.0, 4.0]),
            epsilon = 1e-12
        );

        let m = Mat4::from([
            1.0f64, 2.0, 0.0, -1.0, -1.0, 1.0, 3.0, -2.0, 3.0, 0.0, -1.0, 1.0, -1.0, 2.0, 0.0, 1.0,
        ]);
        let expected = Mat4::from([
            1.0 / 36.0,
            1.0 / 9.0,
            1.0 / 3.0,
            -1.0 / 12.0,
            1.0 / 4.0,
            0.0,
            0.0,
            1.0 / 4.0,
            -7.0 / 18.0,
            4.0 / 9.0,
            1.0 / 3.0,
            1.0 / 6.0,
            -17.0 / 36.0,
            1.0 / 9.0,
            1.0 / 3.0,
            5.0 / 12.0,
        ]);
        assert_relative_eq!(m.inverse(), expected, epsilon = 1e-12);
        assert_relative_eq!(m * m.inverse(), Mat4::<f64>::IDENTITY, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_of_random_matrices() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut m = Mat4::<f64>::zeros();
            for v in m.data.iter_mut().flatten() {
                *v = rng.random_range(-10.0..10.0);
            }
            if m.determinant().abs() < 1e-1 {
                continue;
            }
            assert_relative_eq!(m * m.inverse(), Mat4::<f64>::IDENTITY, epsilon = 1e-6);
            assert_relative_eq!(m.inverse() * m, Mat4::<f64>::IDENTITY, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_cofactors() {
        let m = Mat3::from([1.0f64, 0.0, 5.0, 2.0, 1.0, 6.0, 3.0, 4.0, 0.0]);
        let c = m.cofactors();
        // rows of m: (1 2 3), (0 1 4), (5 6 0)
        assert_relative_eq!(
            c,
            Mat3::from([-24.0, 18.0, 5.0, 20.0, -15.0, -4.0, -5.0, 4.0, 1.0]),
            epsilon = 1e-12
        );
        assert_eq!(
            Matrix::<f32, 1, 1>::splat(5.0).cofactors(),
            Matrix::<f32, 1, 1>::splat(1.0)
        );
    }

    #[test]
    fn test_reduce() {
        let m = Mat3::from([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let r: Mat2<i32> = m.reduce(0, 1);
        assert_eq!(r, Mat2::from([2, 3, 8, 9]));
        let r: Mat2<i32> = m.reduce(2, 2);
        assert_eq!(r, Mat2::from([1, 2, 4, 5]));
    }

    #[test]
    fn test_transpose_of_product() {
        let a = Mat3::from([1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let b = Mat3::from([9.0f32, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
        assert_eq!(a.transpose().transpose(), a);
    }
}
