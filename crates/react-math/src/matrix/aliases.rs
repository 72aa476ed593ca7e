//! Named matrix shapes.
//!
//! `MatCxR` follows the shader convention of naming the column count first, so `Mat4x3<T>`
//! has 4 columns and 3 rows. `Display` labels matrices rows first, so a `Mat4x3` prints as
//! `Mat3x4:`.

use super::Matrix;
use crate::scalar::Scalar;

macro_rules! define_matrix_alias {
    ($(#[$doc:meta])* $name:ident, $rows:literal, $cols:literal, $len:literal) => {
        $(#[$doc])*
        pub type $name<T> = Matrix<T, $rows, $cols>;

        impl<T: Scalar> Matrix<T, $rows, $cols> {
            /// Create a matrix from column-major elements.
            #[inline]
            pub fn from_cols_array(array: &[T; $len]) -> Self {
                Self::from_column_major(array)
            }

            /// The elements in column-major order.
            pub fn to_cols_array(&self) -> [T; $len] {
                let mut out = [T::ZERO; $len];
                out.iter_mut().zip(self.iter()).for_each(|(o, v)| *o = *v);
                out
            }
        }

        impl<T: Scalar> From<[T; $len]> for Matrix<T, $rows, $cols> {
            #[inline]
            fn from(array: [T; $len]) -> Self {
                Self::from_cols_array(&array)
            }
        }

        impl<T: Scalar> From<Matrix<T, $rows, $cols>> for [T; $len] {
            #[inline]
            fn from(m: Matrix<T, $rows, $cols>) -> Self {
                m.to_cols_array()
            }
        }
    };
}

define_matrix_alias!(
    /// 2x2 matrix.
    Mat2, 2, 2, 4
);
define_matrix_alias!(
    /// 3x3 matrix.
    Mat3, 3, 3, 9
);
define_matrix_alias!(
    /// 4x4 matrix.
    Mat4, 4, 4, 16
);
define_matrix_alias!(
    /// 2 columns, 3 rows.
    Mat2x3, 3, 2, 6
);
define_matrix_alias!(
    /// 2 columns, 4 rows.
    Mat2x4, 4, 2, 8
);
define_matrix_alias!(
    /// 3 columns, 2 rows.
    Mat3x2, 2, 3, 6
);
define_matrix_alias!(
    /// 3 columns, 4 rows.
    Mat3x4, 4, 3, 12
);
define_matrix_alias!(
    /// 4 columns, 2 rows.
    Mat4x2, 2, 4, 8
);
define_matrix_alias!(
    /// 4 columns, 3 rows. Displayed as `Mat3x4`.
    Mat4x3, 3, 4, 12
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_shapes() {
        assert_eq!(Mat2x4::<f32>::ROWS, 4);
        assert_eq!(Mat2x4::<f32>::COLS, 2);
        assert_eq!(Mat4x2::<f32>::ROWS, 2);
        assert_eq!(Mat4x2::<f32>::COLS, 4);
    }

    #[test]
    fn test_display_labels_rows_first() {
        let m = Mat4x3::<i32>::zeros();
        assert!(m.to_string().starts_with("Mat3x4:\n"));
        assert_eq!(m.to_string().lines().count(), 4);
    }

    #[test]
    fn test_cols_array() {
        let values = [1, 2, 3, 4, 5, 6, 7, 8];
        let m = Mat2x4::from_cols_array(&values);
        assert_eq!(m.col(1).to_array(), [5, 6, 7, 8]);
        assert_eq!(m.to_cols_array(), values);

        let flat: [i32; 8] = Mat4x2::from(values).into();
        assert_eq!(flat, values);
    }
}
