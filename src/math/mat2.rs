use std::fmt;
use std::ops::{Add, Mul};

use super::utils;
use super::vec2::Vector2;
use crate::engine::Engine;
use crate::error::{Error, Result};

/// A 2x2 matrix stored row-major.
#[derive(Debug, Clone, Copy)]
pub struct Matrix2<'a> {
    /// Rows of the matrix
    pub data: [[f64; 2]; 2],
    engine: &'a Engine,
}

impl<'a> Matrix2<'a> {
    /// Creates a matrix from its four entries, row by row
    #[inline]
    pub const fn new(engine: &'a Engine, a11: f64, a12: f64, a21: f64, a22: f64) -> Self {
        Self::from_rows(engine, [[a11, a12], [a21, a22]])
    }

    /// Creates a matrix from a row-major grid
    #[inline]
    pub const fn from_rows(engine: &'a Engine, data: [[f64; 2]; 2]) -> Self {
        Self { data, engine }
    }

    /// Identity matrix
    #[inline]
    pub const fn identity(engine: &'a Engine) -> Self {
        Self::new(engine, 1.0, 0.0, 0.0, 1.0)
    }

    /// Zero matrix
    #[inline]
    pub const fn zero(engine: &'a Engine) -> Self {
        Self::new(engine, 0.0, 0.0, 0.0, 0.0)
    }

    /// Returns the transpose of the matrix
    #[inline]
    pub fn transpose(self) -> Self {
        let [[a, b], [c, d]] = self.data;
        Self::new(self.engine, a, c, b, d)
    }

    /// `subtract(combine(a, d), combine(b, c))`
    #[inline]
    pub fn determinant(self) -> f64 {
        let e = self.engine;
        let [[a, b], [c, d]] = self.data;
        e.subtract(e.combine(a, d), e.combine(b, c))
    }

    /// Returns the inverse, or [`Error::SingularMatrix`] when the
    /// determinant is exactly zero.
    pub fn inverse(self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(Error::SingularMatrix);
        }

        let e = self.engine;
        let inv_det = e.divide(1.0, det);
        let [[a, b], [c, d]] = self.data;
        Ok(Self::new(
            e,
            e.combine(d, inv_det),
            e.combine(-b, inv_det),
            e.combine(-c, inv_det),
            e.combine(a, inv_det),
        ))
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

impl PartialEq for Matrix2<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl fmt::Display for Matrix2<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [[a, b], [c, d]] = self.data;
        write!(f, "Matrix2({}, {}, {}, {})", a, b, c, d)
    }
}

impl<'a> Add for Matrix2<'a> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let e = self.engine;
        let mut data = [[0.0; 2]; 2];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = e.add(self.data[i][j], other.data[i][j]);
            }
        }
        Self::from_rows(e, data)
    }
}

impl<'a> Mul for Matrix2<'a> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let e = self.engine;
        let m = self.data;
        let n = other.data;
        let mut data = [[0.0; 2]; 2];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = e.add(e.combine(m[i][0], n[0][j]), e.combine(m[i][1], n[1][j]));
            }
        }
        Self::from_rows(e, data)
    }
}

impl<'a> Mul<Vector2<'a>> for Matrix2<'a> {
    type Output = Vector2<'a>;

    fn mul(self, v: Vector2<'a>) -> Vector2<'a> {
        let e = self.engine;
        let m = self.data;
        Vector2::new(
            e,
            e.add(e.combine(m[0][0], v.x), e.combine(m[0][1], v.y)),
            e.add(e.combine(m[1][0], v.x), e.combine(m[1][1], v.y)),
        )
    }
}
