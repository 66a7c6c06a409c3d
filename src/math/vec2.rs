use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::VectorSpace;
use crate::engine::Engine;

/// A 2D vector whose arithmetic runs through an [`Engine`].
///
/// Used for planar bodies: positions, velocities, forces.
#[derive(Debug, Clone, Copy)]
pub struct Vector2<'a> {
    pub x: f64,
    pub y: f64,
    engine: &'a Engine,
}

impl<'a> Vector2<'a> {
    /// Creates a new Vector2 from components
    #[inline]
    pub const fn new(engine: &'a Engine, x: f64, y: f64) -> Self {
        Self { x, y, engine }
    }

    /// Converts the Vector2 to an array
    #[inline]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Engine dot product: `add(combine(x, x'), combine(y, y'))`
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        let e = self.engine;
        e.add(e.combine(self.x, other.x), e.combine(self.y, other.y))
    }

    /// Length under the active rule
    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns a vector scaled to unit length, or zero for a zero vector
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Self::new(self.engine, 0.0, 0.0)
        } else {
            self * self.engine.divide(1.0, len)
        }
    }

    /// The engine this vector computes with
    #[inline]
    pub fn engine(&self) -> &'a Engine {
        self.engine
    }
}

impl PartialEq for Vector2<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl fmt::Display for Vector2<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({}, {})", self.x, self.y)
    }
}

impl<'a> Add for Vector2<'a> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        let e = self.engine;
        Self::new(e, e.add(self.x, other.x), e.add(self.y, other.y))
    }
}

impl<'a> Sub for Vector2<'a> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        let e = self.engine;
        Self::new(e, e.subtract(self.x, other.x), e.subtract(self.y, other.y))
    }
}

impl<'a> Mul<f64> for Vector2<'a> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        let e = self.engine;
        Self::new(e, e.combine(self.x, scalar), e.combine(self.y, scalar))
    }
}

impl<'a> Neg for Vector2<'a> {
    type Output = Self;

    /// Negation as `combine(-1, component)`
    #[inline]
    fn neg(self) -> Self {
        let e = self.engine;
        Self::new(e, e.combine(-1.0, self.x), e.combine(-1.0, self.y))
    }
}

impl<'a> VectorSpace<'a> for Vector2<'a> {
    fn zero(engine: &'a Engine) -> Self {
        Self::new(engine, 0.0, 0.0)
    }

    fn dot(self, other: Self) -> f64 {
        Vector2::dot(self, other)
    }

    fn engine(&self) -> &'a Engine {
        self.engine
    }
}
