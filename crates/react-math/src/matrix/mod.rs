mod aliases;
mod linalg;
mod mat;
mod ops;

pub use aliases::{Mat2, Mat2x3, Mat2x4, Mat3, Mat3x2, Mat3x4, Mat4, Mat4x2, Mat4x3};
pub use mat::Matrix;
