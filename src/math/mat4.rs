use std::fmt;
use std::ops::{Add, Mul};

use super::mat3::Matrix3;
use super::utils::{self, cofactor_sign, minor};
use super::vec3::Vector3;
use crate::engine::Engine;
use crate::error::{Error, Result};

/// A 4x4 matrix stored row-major, used as an affine transform.
#[derive(Debug, Clone, Copy)]
pub struct Matrix4<'a> {
    /// Rows of the matrix
    pub data: [[f64; 4]; 4],
    engine: &'a Engine,
}

impl<'a> Matrix4<'a> {
    /// Creates a matrix from a row-major grid
    #[inline]
    pub const fn from_rows(engine: &'a Engine, data: [[f64; 4]; 4]) -> Self {
        Self { data, engine }
    }

    /// Identity matrix
    #[inline]
    pub const fn identity(engine: &'a Engine) -> Self {
        Self::from_rows(
            engine,
            [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        )
    }

    /// Zero matrix
    #[inline]
    pub const fn zero(engine: &'a Engine) -> Self {
        Self::from_rows(engine, [[0.0; 4]; 4])
    }

    /// Creates a translation matrix
    #[inline]
    pub fn from_translation(translation: Vector3<'a>) -> Self {
        let mut m = Self::identity(translation.engine());
        m.data[0][3] = translation.x;
        m.data[1][3] = translation.y;
        m.data[2][3] = translation.z;
        m
    }

    /// Rotation of `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// The axis is normalised through the engine; the trigonometry and the
    /// matrix entries use ordinary arithmetic.
    pub fn rotation(axis: Vector3<'a>, angle: f64) -> Self {
        let [x, y, z] = axis.normalize().to_array();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        Self::from_rows(
            axis.engine(),
            [
                [t * x * x + c, t * x * y - s * z, t * x * z + s * y, 0.0],
                [t * x * y + s * z, t * y * y + c, t * y * z - s * x, 0.0],
                [t * x * z - s * y, t * y * z + s * x, t * z * z + c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        )
    }

    /// Returns the transpose of the matrix
    #[inline]
    pub fn transpose(self) -> Self {
        let mut data = [[0.0; 4]; 4];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.data[j][i];
            }
        }
        Self::from_rows(self.engine, data)
    }

    #[inline]
    fn minor_determinant(&self, row: usize, col: usize) -> f64 {
        Matrix3::from_rows(self.engine, minor(&self.data, row, col)).determinant()
    }

    /// Laplace expansion along the first row, signed entry combined with
    /// each 3x3 minor determinant.
    pub fn determinant(self) -> f64 {
        let e = self.engine;
        (0..4).fold(0.0, |acc, col| {
            let entry = cofactor_sign(0, col) * self.data[0][col];
            e.add(acc, e.combine(entry, self.minor_determinant(0, col)))
        })
    }

    /// Adjugate inverse. Fails with [`Error::SingularMatrix`] when the
    /// determinant is exactly zero.
    pub fn inverse(self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(Error::SingularMatrix);
        }

        let e = self.engine;
        let inv_det = e.divide(1.0, det);
        let mut data = [[0.0; 4]; 4];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let cofactor = e.combine(cofactor_sign(j, i), self.minor_determinant(j, i));
                *cell = e.combine(cofactor, inv_det);
            }
        }
        Ok(Self::from_rows(e, data))
    }

    /// Flattens the matrix row by row
    pub fn to_flat_array(self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for (dst, src) in out.iter_mut().zip(self.data.iter().flatten()) {
            *dst = *src;
        }
        out
    }

    /// Returns true if every entry is within `epsilon` of the other matrix
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| utils::approx_eq(*a, *b, epsilon))
    }

    #[inline]
    pub fn engine(&self) -> &'a Engine {
        self.engine
    }
}

impl PartialEq for Matrix4<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl fmt::Display for Matrix4<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matrix4({:?}, {:?}, {:?}, {:?})",
            self.data[0], self.data[1], self.data[2], self.data[3]
        )
    }
}

impl<'a> Add for Matrix4<'a> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let e = self.engine;
        let mut data = [[0.0; 4]; 4];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = e.add(self.data[i][j], other.data[i][j]);
            }
        }
        Self::from_rows(e, data)
    }
}

impl<'a> Mul for Matrix4<'a> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let e = self.engine;
        let m = self.data;
        let n = other.data;
        let mut data = [[0.0; 4]; 4];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (1..4).fold(e.combine(m[i][0], n[0][j]), |acc, k| {
                    e.add(acc, e.combine(m[i][k], n[k][j]))
                });
            }
        }
        Self::from_rows(e, data)
    }
}

impl<'a> Mul<Vector3<'a>> for Matrix4<'a> {
    type Output = Vector3<'a>;

    /// Transforms `v` as a point (w = 1): the translation column is added
    fn mul(self, v: Vector3<'a>) -> Vector3<'a> {
        let e = self.engine;
        let row = |r: [f64; 4]| {
            e.add(
                e.add(
                    e.add(e.combine(r[0], v.x), e.combine(r[1], v.y)),
                    e.combine(r[2], v.z),
                ),
                r[3],
            )
        };
        Vector3::new(e, row(self.data[0]), row(self.data[1]), row(self.data[2]))
    }
}
