//! Generic column-major matrix.

use crate::checks::{Block, MatrixDim};
use crate::error::AlgebraError;
use crate::scalar::{Real, Scalar};
use crate::vector::Vector;
use num_traits::NumCast;

/// A matrix with `R` rows and `C` columns of type `T`.
///
/// Storage is column-major: element `(row, col)` lives at linear offset `row + R * col`.
/// `Default` is the identity pattern for every shape, ones on the leading diagonal of
/// length `min(R, C)` and zeros elsewhere.
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) data: [[T; R]; C],
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Number of rows.
    pub const ROWS: usize = R;

    /// Number of columns.
    pub const COLS: usize = C;

    /// Length of the leading diagonal.
    pub const DIAG: usize = if R < C { R } else { C };

    /// All elements set to zero.
    pub const ZERO: Self = Self {
        data: [[T::ZERO; R]; C],
    };

    /// All elements set to one.
    pub const ONE: Self = Self {
        data: [[T::ONE; R]; C],
    };

    /// Create a matrix from its columns.
    ///
    /// ```compile_fail
    /// use react_math::Matrix;
    ///
    /// let empty = Matrix::<f32, 3, 0>::from_cols([]);
    /// ```
    #[inline]
    pub fn from_cols(data: [[T; R]; C]) -> Self {
        let () = MatrixDim::<R, C>::VALID;
        Self { data }
    }

    /// The all-zero matrix.
    #[inline]
    pub fn zeros() -> Self {
        Self::from_cols([[T::ZERO; R]; C])
    }

    /// A matrix with every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_cols([[value; R]; C])
    }

    /// Ones on the leading diagonal, zeros elsewhere.
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..Self::DIAG {
            m.data[i][i] = T::ONE;
        }
        m
    }

    /// Create a matrix from the diagonal entries.
    pub fn from_diagonal(diagonal: Vector<T, R>) -> Self {
        let mut m = Self::zeros();
        for i in 0..Self::DIAG {
            m.data[i][i] = diagonal.data[i];
        }
        m
    }

    /// Create a matrix from column-major elements.
    ///
    /// Copies `min(slice.len(), R * C)` elements, the rest keeps the identity pattern.
    pub fn from_column_major(slice: &[T]) -> Self {
        let mut m = Self::identity();
        m.set_from_column_major(slice);
        m
    }

    /// Create a matrix from exactly `R * C` column-major elements.
    pub fn try_from_column_major(slice: &[T]) -> Result<Self, AlgebraError> {
        if slice.len() != R * C {
            return Err(AlgebraError::InvalidLength {
                expected: R * C,
                actual: slice.len(),
            });
        }
        Ok(Self::from_column_major(slice))
    }

    /// Create a matrix whose columns are the given vectors.
    pub fn from_col_vectors(cols: [Vector<T, R>; C]) -> Self {
        Self::from_cols(cols.map(|c| c.data))
    }

    /// Create a matrix whose rows are the given vectors.
    pub fn from_row_vectors(rows: [Vector<T, C>; R]) -> Self {
        let mut m = Self::zeros();
        for (i, row) in rows.iter().enumerate() {
            m.set_row(row.data, i);
        }
        m
    }

    /// Copy the overlapping top-left block of a matrix of another shape.
    ///
    /// Elements outside the overlap keep the identity pattern.
    pub fn from_matrix<const R2: usize, const C2: usize>(other: &Matrix<T, R2, C2>) -> Self {
        let mut m = Self::identity();
        for (dst, src) in m.data.iter_mut().zip(other.data.iter()) {
            dst.iter_mut().zip(src.iter()).for_each(|(d, s)| *d = *s);
        }
        m
    }

    /// Convert every element to another element type.
    pub fn cast<U: Scalar>(&self) -> Result<Matrix<U, R, C>, AlgebraError> {
        let mut m = Matrix::<U, R, C>::zeros();
        for (dst, src) in m.data.iter_mut().zip(self.data.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d = <U as NumCast>::from(*s).ok_or(AlgebraError::CastError)?;
            }
        }
        Ok(m)
    }

    /// Apply `f` to every element.
    #[inline]
    pub fn map(self, mut f: impl FnMut(T) -> T) -> Self {
        Self::from_cols(self.data.map(|col| col.map(&mut f)))
    }

    #[inline]
    pub(crate) fn zip_map(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        let mut data = self.data;
        for (dst, src) in data.iter_mut().zip(other.data.iter()) {
            dst.iter_mut().zip(src.iter()).for_each(|(a, b)| *a = f(*a, *b));
        }
        Self { data }
    }

    /// Overwrite elements in column-major order, up to `min(slice.len(), R * C)` of them.
    pub fn set_from_column_major(&mut self, slice: &[T]) {
        self.data
            .iter_mut()
            .flat_map(|col| col.iter_mut())
            .zip(slice)
            .for_each(|(d, s)| *d = *s);
    }

    /// The columns as arrays.
    #[inline]
    pub fn to_cols(self) -> [[T; R]; C] {
        self.data
    }

    /// The elements in column-major order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter().flat_map(|col| col.iter())
    }

    /// Element at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        check!(
            row < R && col < C,
            "matrix index ({}, {}) out of range for {}x{}",
            row,
            col,
            R,
            C
        );
        self.data[col][row]
    }

    /// Mutable element at `(row, col)`.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        check!(
            row < R && col < C,
            "matrix index ({}, {}) out of range for {}x{}",
            row,
            col,
            R,
            C
        );
        &mut self.data[col][row]
    }

    /// Element at `(row, col)`, or `None` outside the matrix.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.data.get(col).and_then(|c| c.get(row))
    }

    /// Element at `(row, col)`, or an error naming the offending index.
    pub fn try_at(&self, row: usize, col: usize) -> Result<T, AlgebraError> {
        if row >= R {
            return Err(AlgebraError::IndexOutOfBounds {
                index: row,
                size: R,
            });
        }
        if col >= C {
            return Err(AlgebraError::IndexOutOfBounds {
                index: col,
                size: C,
            });
        }
        Ok(self.data[col][row])
    }

    /// A copy of row `row`.
    pub fn row(&self, row: usize) -> Vector<T, C> {
        check!(row < R, "row {} out of range for {} rows", row, R);
        let mut data = [T::ZERO; C];
        for (d, col) in data.iter_mut().zip(self.data.iter()) {
            *d = col[row];
        }
        Vector::from_array(data)
    }

    /// A copy of column `col`.
    pub fn col(&self, col: usize) -> Vector<T, R> {
        check!(col < C, "column {} out of range for {} columns", col, C);
        Vector::from_array(self.data[col])
    }

    /// Overwrite row `row`.
    pub fn set_row(&mut self, data: impl Into<[T; C]>, row: usize) {
        check!(row < R, "row {} out of range for {} rows", row, R);
        let data: [T; C] = data.into();
        for (col, v) in self.data.iter_mut().zip(data) {
            col[row] = v;
        }
    }

    /// Overwrite column `col`.
    pub fn set_col(&mut self, data: impl Into<[T; R]>, col: usize) {
        check!(col < C, "column {} out of range for {} columns", col, C);
        self.data[col] = data.into();
    }

    /// Exchange two rows.
    pub fn swap_row(&mut self, a: usize, b: usize) {
        check!(a < R && b < R, "rows ({}, {}) out of range for {} rows", a, b, R);
        for col in self.data.iter_mut() {
            col.swap(a, b);
        }
    }

    /// Exchange two columns.
    pub fn swap_col(&mut self, a: usize, b: usize) {
        check!(a < C && b < C, "columns ({}, {}) out of range for {} columns", a, b, C);
        self.data.swap(a, b);
    }

    /// The transposed matrix.
    pub fn transpose(&self) -> Matrix<T, C, R> {
        let mut t = Matrix::<T, C, R>::zeros();
        for (j, col) in self.data.iter().enumerate() {
            for (i, v) in col.iter().enumerate() {
                t.data[i][j] = *v;
            }
        }
        t
    }

    /// Matrix product, same as `self * other`.
    pub fn dot<const P: usize>(&self, other: &Matrix<T, C, P>) -> Matrix<T, R, P> {
        let mut out = Matrix::<T, R, P>::zeros();
        for (j, out_col) in out.data.iter_mut().enumerate() {
            for (i, v) in out_col.iter_mut().enumerate() {
                *v = (0..C).fold(T::ZERO, |acc, k| acc + self.data[k][i] * other.data[j][k]);
            }
        }
        out
    }

    /// The `MM x NN` block whose top-left element is `(row_start, col_start)`.
    ///
    /// The block must fit inside the matrix:
    ///
    /// ```compile_fail
    /// use react_math::{Mat3, Mat4};
    ///
    /// let block: Mat4<f32> = Mat3::<f32>::IDENTITY.sub_matrix(0, 0);
    /// ```
    pub fn sub_matrix<const MM: usize, const NN: usize>(
        &self,
        row_start: usize,
        col_start: usize,
    ) -> Matrix<T, MM, NN> {
        let () = Block::<R, C, MM, NN>::VALID;
        check!(
            row_start + MM <= R && col_start + NN <= C,
            "{}x{} block at ({}, {}) does not fit a {}x{} matrix",
            MM,
            NN,
            row_start,
            col_start,
            R,
            C
        );
        let mut m = Matrix::<T, MM, NN>::zeros();
        for (j, col) in m.data.iter_mut().enumerate() {
            col.copy_from_slice(&self.data[col_start + j][row_start..row_start + MM]);
        }
        m
    }

    /// Outer product `col * row^T`: element `(i, j)` is `col[i] * row[j]`.
    pub fn outer_product(col: Vector<T, R>, row: Vector<T, C>) -> Self {
        Self::from_cols(row.data.map(|r| col.data.map(|c| c * r)))
    }

    /// Add one to every element.
    pub fn increment(&mut self) {
        *self = self.map(|v| v + T::ONE);
    }

    /// Subtract one from every element.
    pub fn decrement(&mut self) {
        *self = self.map(|v| v - T::ONE);
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of the diagonal.
    pub fn trace(&self) -> T {
        (0..N).fold(T::ZERO, |acc, i| acc + self.data[i][i])
    }

    /// The diagonal entries.
    pub fn diagonal(&self) -> Vector<T, N> {
        let mut data = [T::ZERO; N];
        for (i, d) in data.iter_mut().enumerate() {
            *d = self.data[i][i];
        }
        Vector::from_array(data)
    }
}

impl<T: Real, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Whether every element is finite.
    pub fn is_finite(&self) -> bool {
        self.iter().all(|v| v.is_finite())
    }
}

macro_rules! impl_identity_const {
    ($($t:ty),+) => {
        $(
            impl<const R: usize, const C: usize> Matrix<$t, R, C> {
                /// Ones on the leading diagonal, zeros elsewhere.
                pub const IDENTITY: Self = {
                    let mut data = [[0 as $t; R]; C];
                    let mut i = 0;
                    while i < R && i < C {
                        data[i][i] = 1 as $t;
                        i += 1;
                    }
                    Self { data }
                };
            }
        )+
    };
}

impl_identity_const!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar, const R: usize, const C: usize, const R2: usize, const C2: usize>
    PartialEq<Matrix<T, R2, C2>> for Matrix<T, R, C>
{
    fn eq(&self, other: &Matrix<T, R2, C2>) -> bool {
        if R != R2 || C != C2 {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a.approx_eq(*b))
    }
}

impl<T: Scalar, const R: usize, const C: usize> std::fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mat{}x{}:", R, C)?;
        for row in 0..R {
            writeln!(f)?;
            for col in 0..C {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[col][row])?;
            }
        }
        Ok(())
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T, const R: usize, const C: usize> approx::AbsDiffEq for Matrix<T, R, C>
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
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T, const R: usize, const C: usize> approx::RelativeEq for Matrix<T, R, C>
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
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T, const R: usize, const C: usize> approx::UlpsEq for Matrix<T, R, C>
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
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| T::ulps_eq(a, b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mat2, Mat3, Mat3x2, Mat3x4, Mat4, Mat4x3, Vec3, Vec4};

    #[test]
    fn test_layout_is_column_major() {
        let m = Mat3::from([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(m.at(0, 1), 4);
        assert_eq!(m.at(2, 0), 3);
        assert_eq!(m[(1, 2)], 8);
        assert_eq!(m.row(0), Vec3::new(1, 4, 7));
        assert_eq!(m.col(2), Vec3::new(7, 8, 9));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(
            m.try_at(0, 5),
            Err(AlgebraError::IndexOutOfBounds { index: 5, size: 3 })
        );
    }

    #[test]
    fn test_default_and_identity() {
        assert_eq!(Mat3::<f32>::default(), Mat3::<f32>::IDENTITY);
        assert_eq!(Mat4::<i32>::identity(), Mat4::<i32>::IDENTITY);
        assert_eq!(
            Mat4x3::<i32>::default(),
            Mat4x3::from([1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0])
        );
        assert_eq!(Matrix::<u8, 2, 3>::DIAG, 2);
    }

    #[test]
    fn test_from_column_major() -> Result<(), AlgebraError> {
        let partial = Mat3::from_column_major(&[5, 6]);
        assert_eq!(partial, Mat3::from([5, 6, 0, 0, 1, 0, 0, 0, 1]));

        let full = Mat2::try_from_column_major(&[1.0f64, 2.0, 3.0, 4.0])?;
        assert_eq!(full.at(1, 0), 2.0);
        assert_eq!(
            Mat2::<f64>::try_from_column_major(&[1.0]),
            Err(AlgebraError::InvalidLength {
                expected: 4,
                actual: 1
            })
        );
        Ok(())
    }

    #[test]
    fn test_from_vectors() {
        let rows = Mat3x2::from_row_vectors([Vec3::new(1, 2, 3), Vec3::new(4, 5, 6)]);
        let cols = Mat3x2::from_col_vectors([
            crate::Vec2::new(1, 4),
            crate::Vec2::new(2, 5),
            crate::Vec2::new(3, 6),
        ]);
        assert_eq!(rows, cols);
        assert_eq!(rows.row(1), Vec3::new(4, 5, 6));
    }

    #[test]
    fn test_from_matrix() {
        let a = Mat3::<f32>::IDENTITY;
        assert_eq!(Mat4::from_matrix(&a), Mat4::<f32>::IDENTITY);

        let b = Mat4::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
        assert_eq!(Mat2::from_matrix(&b), Mat2::from([1, 2, 5, 6]));
    }

    #[test]
    fn test_from_diagonal() {
        let m = Mat3::from_diagonal(Vec3::new(2, 3, 4));
        assert_eq!(m.diagonal(), Vec3::new(2, 3, 4));
        assert_eq!(m.trace(), 9);
    }

    #[test]
    fn test_cast() -> Result<(), AlgebraError> {
        let m = Mat2::from([1.9f64, -2.0, 3.0, 4.5]);
        assert_eq!(m.cast::<i32>()?, Mat2::from([1, -2, 3, 4]));
        assert_eq!(m.cast::<u32>(), Err(AlgebraError::CastError));
        Ok(())
    }

    #[test]
    fn test_set_row_and_col() {
        let mut m = Mat3::<i32>::ONE;
        m.set_row([9, 8, 7], 1);
        assert_eq!(m, Mat3::from([1, 9, 1, 1, 8, 1, 1, 7, 1]));

        let mut m = Mat3::<i32>::ZERO;
        m.set_row(Vec3::new(1, 2, 3), 2);
        assert_eq!(m, Mat3::from([0, 0, 1, 0, 0, 2, 0, 0, 3]));

        let mut m = Mat3::<i32>::ONE;
        m.set_col([9, 8, 7], 1);
        assert_eq!(m, Mat3::from([1, 1, 1, 9, 8, 7, 1, 1, 1]));
    }

    #[test]
    fn test_swap() {
        let mut m = Mat3::from([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        m.swap_row(0, 2);
        assert_eq!(m, Mat3::from([3, 2, 1, 6, 5, 4, 9, 8, 7]));
        m.swap_col(0, 1);
        assert_eq!(m, Mat3::from([6, 5, 4, 3, 2, 1, 9, 8, 7]));
    }

    #[test]
    fn test_transpose() {
        let m = Mat4x3::from([12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        let t: Mat3x4<i32> = m.transpose();
        assert_eq!(t, Mat3x4::from([12, 9, 6, 3, 11, 8, 5, 2, 10, 7, 4, 1]));
        assert_eq!(Matrix::transpose(&t), m);
    }

    #[test]
    fn test_dot() {
        let a = Mat3x2::from([1, 2, 3, 4, 5, 6]);
        let b = crate::Mat2x3::from([6, 5, 4, 3, 2, 1]);
        assert_eq!(a.dot(&b), Mat2::from([41, 56, 14, 20]));

        let a = Mat3x4::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        let b = Mat4x3::from([12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(
            a.dot(&b),
            Mat4::from([
                157, 190, 223, 256, 112, 136, 160, 184, 67, 82, 97, 112, 22, 28, 34, 40
            ])
        );
    }

    #[test]
    fn test_sub_matrix() {
        let m = Mat4::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
        let s: Matrix<i32, 2, 3> = m.sub_matrix(1, 1);
        assert_eq!(s, Mat3x2::from([6, 7, 10, 11, 14, 15]));
        let whole: Mat4<i32> = m.sub_matrix(0, 0);
        assert_eq!(whole, m);
    }

    #[test]
    #[should_panic]
    fn test_sub_matrix_out_of_range() {
        let m = Mat4::<f32>::IDENTITY;
        let _: Mat3<f32> = m.sub_matrix(2, 0);
    }

    #[test]
    fn test_outer_product() {
        let m = Mat4x3::outer_product(Vec3::new(3, 2, 1), Vec4::new(7, 2, 3, 1));
        assert_eq!(m, Mat4x3::from([21, 14, 7, 6, 4, 2, 9, 6, 3, 3, 2, 1]));
    }

    #[test]
    fn test_increment_decrement() {
        let mut m = Mat2::<i32>::ZERO;
        m.increment();
        assert_eq!(m, Mat2::<i32>::ONE);
        m.decrement();
        m.decrement();
        assert_eq!(m, Mat2::splat(-1));
    }

    #[test]
    fn test_equality_across_shapes() {
        let a = Mat2::<f32>::ZERO;
        let b = Mat3x2::<f32>::ZERO;
        assert!(a != b);
        assert!(a == Mat2::<f32>::ZERO);
    }

    #[test]
    fn test_display() {
        let m = Mat3x2::from([1, 2, 3, 4, 5, 6]);
        assert_eq!(m.to_string(), "Mat2x3:\n1 3 5\n2 4 6");
    }
}
