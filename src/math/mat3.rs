use std::fmt;
use std::ops::{Add, Mul};

use super::mat2::Matrix2;
use super::utils::{self, cofactor_sign, minor};
use super::vec3::Vector3;
use crate::engine::Engine;
use crate::error::{Error, Result};

/// A 3x3 matrix stored row-major.
///
/// Products and determinants are computed through the engine, so under a
/// non-ordinary rule the identity matrix need not act as an identity.
#[derive(Debug, Clone, Copy)]
pub struct Matrix3<'a> {
    /// Rows of the matrix
    pub data: [[f64; 3]; 3],
    engine: &'a Engine,
}

impl<'a> Matrix3<'a> {
    /// Creates a matrix from a row-major grid
    #[inline]
    pub const fn from_rows(engine: &'a Engine, data: [[f64; 3]; 3]) -> Self {
        Self { data, engine }
    }

    /// Creates a matrix from row vectors
    #[inline]
    pub fn from_row_vectors(r0: Vector3<'a>, r1: Vector3<'a>, r2: Vector3<'a>) -> Self {
        Self::from_rows(r0.engine(), [r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Identity matrix
    #[inline]
    pub const fn identity(engine: &'a Engine) -> Self {
        Self::from_rows(engine, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Zero matrix
    #[inline]
    pub const fn zero(engine: &'a Engine) -> Self {
        Self::from_rows(engine, [[0.0; 3]; 3])
    }

    /// Returns a row of the matrix
    #[inline]
    pub fn row(self, index: usize) -> Vector3<'a> {
        Vector3::from_array(self.engine, self.data[index])
    }

    /// Returns a column of the matrix
    #[inline]
    pub fn col(self, index: usize) -> Vector3<'a> {
        Vector3::new(
            self.engine,
            self.data[0][index],
            self.data[1][index],
            self.data[2][index],
        )
    }

    /// Returns the transpose of the matrix
    #[inline]
    pub fn transpose(self) -> Self {
        let mut data = [[0.0; 3]; 3];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.data[j][i];
            }
        }
        Self::from_rows(self.engine, data)
    }

    /// Determinant of the 2x2 minor that skips `row` and `col`
    #[inline]
    fn minor_determinant(&self, row: usize, col: usize) -> f64 {
        Matrix2::from_rows(self.engine, minor(&self.data, row, col)).determinant()
    }

    /// Cofactor expansion along the first row.
    ///
    /// The sign is applied to the entry before it is combined with the
    /// minor, and terms are accumulated with `add` starting from zero.
    pub fn determinant(self) -> f64 {
        let e = self.engine;
        (0..3).fold(0.0, |acc, col| {
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
        let mut data = [[0.0; 3]; 3];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                // adjugate[i][j] = cofactor[j][i]
                let cofactor = e.combine(cofactor_sign(j, i), self.minor_determinant(j, i));
                *cell = e.combine(cofactor, inv_det);
            }
        }
        Ok(Self::from_rows(e, data))
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

impl PartialEq for Matrix3<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl fmt::Display for Matrix3<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matrix3({:?}, {:?}, {:?})",
            self.data[0], self.data[1], self.data[2]
        )
    }
}

impl<'a> Add for Matrix3<'a> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let e = self.engine;
        let mut data = [[0.0; 3]; 3];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = e.add(self.data[i][j], other.data[i][j]);
            }
        }
        Self::from_rows(e, data)
    }
}

impl<'a> Mul for Matrix3<'a> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let e = self.engine;
        let m = self.data;
        let n = other.data;
        let mut data = [[0.0; 3]; 3];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = e.add(
                    e.add(e.combine(m[i][0], n[0][j]), e.combine(m[i][1], n[1][j])),
                    e.combine(m[i][2], n[2][j]),
                );
            }
        }
        Self::from_rows(e, data)
    }
}

impl<'a> Mul<Vector3<'a>> for Matrix3<'a> {
    type Output = Vector3<'a>;

    /// Each component is the engine dot of a row with `v`
    fn mul(self, v: Vector3<'a>) -> Vector3<'a> {
        Vector3::new(
            self.engine,
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Rule;

    const EPSILON: f64 = 1e-9;

    fn sample(e: &Engine) -> Matrix3<'_> {
        Matrix3::from_rows(e, [[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 1.0]])
    }

    #[test]
    fn test_identity() {
        let e = Engine::with_rule(Rule::ATimesB);
        let v = Vector3::new(&e, 1.0, 2.0, 3.0);
        assert_eq!(Matrix3::identity(&e) * v, v);
        assert_eq!(Matrix3::identity(&e).determinant(), 1.0);
    }

    #[test]
    fn test_transpose() {
        let e = Engine::default();
        let m = Matrix3::from_rows(&e, [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let mt = m.transpose();
        assert_eq!(mt.row(0), Vector3::new(&e, 1.0, 4.0, 7.0));
        assert_eq!(mt.col(2), Vector3::new(&e, 7.0, 8.0, 9.0));
    }

    #[test]
    fn test_determinant() {
        let e = Engine::with_rule(Rule::ATimesB);
        // 2(3 - 2) - 0 + 1(1 - 3) = 0
        assert_eq!(sample(&e).determinant(), 0.0);

        let m = Matrix3::from_rows(&e, [[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);
        assert_eq!(m.determinant(), 24.0);
    }

    #[test]
    fn test_inverse() {
        let e = Engine::with_rule(Rule::ATimesB);
        let m = Matrix3::from_rows(&e, [[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]]);
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq(&Matrix3::identity(&e), EPSILON));
        assert!((inv * m).approx_eq(&Matrix3::identity(&e), EPSILON));
    }

    #[test]
    fn test_singular() {
        let e = Engine::with_rule(Rule::ATimesB);
        assert_eq!(sample(&e).inverse(), Err(Error::SingularMatrix));
    }

    #[test]
    fn test_determinant_follows_rule() {
        // terry_original: every 1*1 on the identity's diagonal becomes 2
        let e = Engine::default();
        assert_eq!(Matrix3::identity(&e).determinant(), 2.0);
    }

    #[test]
    fn test_determinant_signs_entry_before_combine() {
        // a_plus_b, row-0 minors are 1, 1, 0:
        // combine(1, 1) + combine(-2, 1) + combine(3, 0) = 2 - 1 + 3
        let e = Engine::with_rule(Rule::APlusB);
        let m = Matrix3::from_rows(&e, [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
        assert_eq!(m.determinant(), 4.0);
    }

    #[test]
    fn test_multiplication() {
        let e = Engine::with_rule(Rule::ATimesB);
        let m = sample(&e);
        assert_eq!(m * Matrix3::identity(&e), m);

        let v = m * Vector3::new(&e, 1.0, 1.0, 1.0);
        assert_eq!(v, Vector3::new(&e, 3.0, 6.0, 3.0));
    }

    #[test]
    fn test_add() {
        let e = Engine::default();
        let m = sample(&e);
        assert_eq!(m + Matrix3::zero(&e), m);
    }
}
