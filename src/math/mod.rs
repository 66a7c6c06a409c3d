mod mat2;
mod mat3;
mod mat4;
mod quat;
mod vec2;
mod vec3;

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use crate::engine::Engine;

pub use mat2::Matrix2;
pub use mat3::Matrix3;
pub use mat4::Matrix4;
pub use quat::Quaternion;
pub use vec2::Vector2;
pub use vec3::Vector3;

/// Operations shared by [`Vector2`] and [`Vector3`].
///
/// Lets the physics layer stay generic over dimension. All arithmetic goes
/// through the engine the vector borrows.
pub trait VectorSpace<'a>:
    Copy
    + Debug
    + Display
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Neg<Output = Self>
{
    /// The zero vector bound to `engine`
    fn zero(engine: &'a Engine) -> Self;

    /// Engine dot product
    fn dot(self, other: Self) -> f64;

    /// The engine this vector computes with
    fn engine(&self) -> &'a Engine;

    /// Squared length under the active rule
    #[inline]
    fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Ordinary square root of the engine dot product
    #[inline]
    fn length(self) -> f64 {
        self.length_squared().sqrt()
    }
}

/// Common math constants and utilities
pub mod consts {
    /// Below this, a ray is treated as parallel to a plane or triangle
    pub const PARALLEL_EPSILON: f64 = 1e-6;

    /// Quaternion dot above which slerp falls back to lerp
    pub const SLERP_LERP_THRESHOLD: f64 = 0.9995;
}

/// Utility functions
pub mod utils {
    /// Returns true if two floats are approximately equal
    #[inline]
    pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    /// Linear interpolation between two values
    #[inline]
    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + t * (b - a)
    }

    /// Copies `data` without `row` and `col`. `M` must be `N - 1`.
    pub(crate) fn minor<const N: usize, const M: usize>(
        data: &[[f64; N]; N],
        row: usize,
        col: usize,
    ) -> [[f64; M]; M] {
        let mut out = [[0.0; M]; M];
        for (r, src_row) in (0..N).filter(|&r| r != row).enumerate() {
            for (c, src_col) in (0..N).filter(|&c| c != col).enumerate() {
                out[r][c] = data[src_row][src_col];
            }
        }
        out
    }

    /// `(-1)^(i + j)`
    #[inline]
    pub(crate) fn cofactor_sign(i: usize, j: usize) -> f64 {
        if (i + j) % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }
}
