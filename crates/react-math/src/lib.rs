#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Vectors, matrices and quaternions whose dimensions are const generic parameters.
//! Matrices are stored column-major, quaternions as `(x, y, z, w)`.
//!
//! ```
//! use react_math::{Mat3, Quat, Vec3};
//!
//! let q = Quat::from_axis_angle(Vec3::new(0.0f64, 1.0, 0.0), std::f64::consts::FRAC_PI_2);
//! let m: Mat3<f64> = q.to_mat3();
//! let v = m * Vec3::new(1.0, 0.0, 0.0);
//! assert!((v.z() + 1.0).abs() < 1e-12);
//! assert!(m.invertible());
//! ```

#[macro_use]
mod checks;

/// Error types for the fallible operations.
pub mod error;

/// Angle constants and conversions.
pub mod math;

mod matrix;
mod quat;
mod scalar;
mod vector;

pub use error::AlgebraError;
pub use matrix::{Mat2, Mat2x3, Mat2x4, Mat3, Mat3x2, Mat3x4, Mat4, Mat4x2, Mat4x3, Matrix};
pub use quat::Quat;
pub use scalar::{Real, Scalar};
pub use vector::{Vec2, Vec3, Vec4, Vector};

// Type aliases for explicit precision
pub type Vec2F32 = Vec2<f32>;
pub type Vec2F64 = Vec2<f64>;
pub type Vec2I32 = Vec2<i32>;
pub type Vec3F32 = Vec3<f32>;
pub type Vec3F64 = Vec3<f64>;
pub type Vec3I32 = Vec3<i32>;
pub type Vec4F32 = Vec4<f32>;
pub type Vec4F64 = Vec4<f64>;
pub type Vec4I32 = Vec4<i32>;

pub type Mat2F32 = Mat2<f32>;
pub type Mat2F64 = Mat2<f64>;
pub type Mat3F32 = Mat3<f32>;
pub type Mat3F64 = Mat3<f64>;
pub type Mat4F32 = Mat4<f32>;
pub type Mat4F64 = Mat4<f64>;

pub type Mat2x3F32 = Mat2x3<f32>;
pub type Mat2x4F32 = Mat2x4<f32>;
pub type Mat3x2F32 = Mat3x2<f32>;
pub type Mat3x4F32 = Mat3x4<f32>;
pub type Mat4x2F32 = Mat4x2<f32>;
pub type Mat4x3F32 = Mat4x3<f32>;

pub type Mat2x3F64 = Mat2x3<f64>;
pub type Mat2x4F64 = Mat2x4<f64>;
pub type Mat3x2F64 = Mat3x2<f64>;
pub type Mat3x4F64 = Mat3x4<f64>;
pub type Mat4x2F64 = Mat4x2<f64>;
pub type Mat4x3F64 = Mat4x3<f64>;

pub type QuatF32 = Quat<f32>;
pub type QuatF64 = Quat<f64>;
