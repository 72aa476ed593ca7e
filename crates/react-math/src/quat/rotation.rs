//! Conversions between quaternions, axis-angle pairs, Euler angles and rotation matrices.

use super::Quat;
use crate::matrix::{Mat3, Mat4, Matrix};
use crate::scalar::{lit, Real};
use crate::vector::Vector;

impl<T: Real> Quat<T> {
    /// Rotation of `angle` radians about `axis`. The axis does not need to be normalized.
    pub fn from_axis_angle(axis: Vector<T, 3>, angle: T) -> Self {
        let half = angle * lit::<T>(0.5);
        Self::from_xyz_w(axis.normalized() * half.sin(), half.cos())
    }

    /// The unit rotation axis and the angle in radians.
    ///
    /// For angles close to zero the axis is not well defined, the vector part is returned
    /// as is in that case.
    pub fn to_axis_angle(&self) -> (Vector<T, 3>, T) {
        let q = if self.w().abs() > T::one() {
            self.normalized()
        } else {
            *self
        };

        // rounding in the normalization can leave |w| a hair above one
        let w = q.w().max(-T::one()).min(T::one());
        let angle = lit::<T>(2.0) * w.acos();
        let s = (T::one() - w * w).sqrt();
        let axis = if s < T::epsilon() {
            log::trace!("rotation angle {angle} is close to zero, keeping the vector part as axis");
            q.xyz()
        } else {
            q.xyz() / s
        };

        let length = axis.length();
        if length > T::zero() {
            (axis / length, angle)
        } else {
            (axis, angle)
        }
    }

    /// Rotation from Euler angles in radians: `x` roll, `y` pitch, `z` yaw, applied in
    /// z-y-x order.
    pub fn from_eulers(eulers: Vector<T, 3>) -> Self {
        let half = eulers * lit::<T>(0.5);
        let (sx, cx) = half.x().sin_cos();
        let (sy, cy) = half.y().sin_cos();
        let (sz, cz) = half.z().sin_cos();

        Self::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    /// Euler angles in radians, the inverse of [`Self::from_eulers`].
    ///
    /// At a pitch of ±90° roll and yaw are not independent and the result is one of the
    /// equivalent decompositions.
    pub fn to_eulers(&self) -> Vector<T, 3> {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());
        let two = lit::<T>(2.0);

        let t0 = x * x - z * z;
        let t1 = w * w - y * y;
        let xx = (t0 + t1) / two;
        let xy = x * y + w * z;
        let xz = w * y - x * z;
        let yz = two * (y * z + w * x);
        let planar = xx * xx + xy * xy;

        let yaw = xy.atan2(xx);
        let pitch = (xz / planar.sqrt()).atan();
        let roll = if planar != T::zero() {
            yz.atan2(t1 - t0)
        } else {
            log::debug!("gimbal lock at pitch {pitch}, roll derived from yaw");
            let sign = if xz < T::zero() { -T::one() } else { T::one() };
            two * x.atan2(w) - sign * yaw
        };

        Vector::<T, 3>::new(roll, pitch, yaw)
    }

    /// Rotation from a 3x3 rotation matrix.
    pub fn from_mat3(m: &Mat3<T>) -> Self {
        let at = |row: usize, col: usize| m.data[col][row];
        let (m00, m11, m22) = (at(0, 0), at(1, 1), at(2, 2));
        let trace = m00 + m11 + m22;
        let two = lit::<T>(2.0);
        let quarter = lit::<T>(0.25);

        if trace > T::zero() {
            log::trace!("rotation matrix trace {trace} is positive");
            let s = two * (trace + T::one()).sqrt();
            Self::new(
                (at(2, 1) - at(1, 2)) / s,
                (at(0, 2) - at(2, 0)) / s,
                (at(1, 0) - at(0, 1)) / s,
                quarter * s,
            )
        } else if m00 > m11 && m00 > m22 {
            log::trace!("rotation matrix diagonal dominated by the x axis");
            let s = two * (T::one() + m00 - m11 - m22).sqrt();
            Self::new(
                quarter * s,
                (at(0, 1) + at(1, 0)) / s,
                (at(0, 2) + at(2, 0)) / s,
                (at(2, 1) - at(1, 2)) / s,
            )
        } else if m11 > m22 {
            log::trace!("rotation matrix diagonal dominated by the y axis");
            let s = two * (T::one() + m11 - m00 - m22).sqrt();
            Self::new(
                (at(0, 1) + at(1, 0)) / s,
                quarter * s,
                (at(1, 2) + at(2, 1)) / s,
                (at(0, 2) - at(2, 0)) / s,
            )
        } else {
            log::trace!("rotation matrix diagonal dominated by the z axis");
            let s = two * (T::one() + m22 - m00 - m11).sqrt();
            Self::new(
                (at(0, 2) + at(2, 0)) / s,
                (at(1, 2) + at(2, 1)) / s,
                quarter * s,
                (at(1, 0) - at(0, 1)) / s,
            )
        }
    }

    /// The rotation matrix `R` with `R * v == self.rotate(v)`.
    pub fn to_mat3(&self) -> Mat3<T> {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());
        let one = T::one();
        let two = lit::<T>(2.0);

        Matrix::from_cols([
            [
                one - two * (y * y + z * z),
                two * (x * y + w * z),
                two * (x * z - w * y),
            ],
            [
                two * (x * y - w * z),
                one - two * (x * x + z * z),
                two * (y * z + w * x),
            ],
            [
                two * (x * z + w * y),
                two * (y * z - w * x),
                one - two * (x * x + y * y),
            ],
        ])
    }

    /// The rotation embedded in a 4x4 identity.
    pub fn to_mat4(&self) -> Mat4<T> {
        Mat4::from_matrix(&self.to_mat3())
    }
}

impl<T: Real> From<Quat<T>> for Mat3<T> {
    #[inline]
    fn from(q: Quat<T>) -> Self {
        q.to_mat3()
    }
}
