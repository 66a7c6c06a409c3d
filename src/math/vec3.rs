use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use super::VectorSpace;
use crate::engine::Engine;

/// A 3D vector whose arithmetic runs through an [`Engine`].
///
/// Used throughout for positions, velocities, forces, torques and the
/// parameters of geometric primitives.
#[derive(Debug, Clone, Copy)]
pub struct Vector3<'a> {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    engine: &'a Engine,
}

impl<'a> Vector3<'a> {
    /// Creates a new Vector3 from components
    #[inline]
    pub const fn new(engine: &'a Engine, x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, engine }
    }

    /// Zero vector (0, 0, 0)
    #[inline]
    pub const fn zeros(engine: &'a Engine) -> Self {
        Self::new(engine, 0.0, 0.0, 0.0)
    }

    /// Creates a Vector3 from an array
    #[inline]
    pub const fn from_array(engine: &'a Engine, arr: [f64; 3]) -> Self {
        Self::new(engine, arr[0], arr[1], arr[2])
    }

    /// Converts the Vector3 to an array
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Engine dot product: `add(add(xx', yy'), zz')`
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        let e = self.engine;
        e.add(
            e.add(e.combine(self.x, other.x), e.combine(self.y, other.y)),
            e.combine(self.z, other.z),
        )
    }

    /// Cross product, each product through `combine`
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let e = self.engine;
        Self::new(
            e,
            e.subtract(e.combine(self.y, other.z), e.combine(self.z, other.y)),
            e.subtract(e.combine(self.z, other.x), e.combine(self.x, other.z)),
            e.subtract(e.combine(self.x, other.y), e.combine(self.y, other.x)),
        )
    }

    /// Squared length under the active rule
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Length (magnitude) under the active rule.
    ///
    /// Non-ordinary rules give non-Euclidean lengths.
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns a vector scaled by `1 / length`.
    /// Returns the zero vector if the length is zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Self::zeros(self.engine)
        } else {
            self * self.engine.divide(1.0, len)
        }
    }

    /// Linear interpolation: `self + (other - self) * t`
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Returns the distance between two points
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// True if every component is exactly zero
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// The engine this vector computes with
    #[inline]
    pub fn engine(&self) -> &'a Engine {
        self.engine
    }
}

impl PartialEq for Vector3<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl fmt::Display for Vector3<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({}, {}, {})", self.x, self.y, self.z)
    }
}

// Operator overloads

impl<'a> Add for Vector3<'a> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        let e = self.engine;
        Self::new(
            e,
            e.add(self.x, other.x),
            e.add(self.y, other.y),
            e.add(self.z, other.z),
        )
    }
}

impl<'a> Sub for Vector3<'a> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        let e = self.engine;
        Self::new(
            e,
            e.subtract(self.x, other.x),
            e.subtract(self.y, other.y),
            e.subtract(self.z, other.z),
        )
    }
}

impl<'a> Mul<f64> for Vector3<'a> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        let e = self.engine;
        Self::new(
            e,
            e.combine(self.x, scalar),
            e.combine(self.y, scalar),
            e.combine(self.z, scalar),
        )
    }
}

impl<'a> Neg for Vector3<'a> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        let e = self.engine;
        Self::new(
            e,
            e.combine(-1.0, self.x),
            e.combine(-1.0, self.y),
            e.combine(-1.0, self.z),
        )
    }
}

impl Index<usize> for Vector3<'_> {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl<'a> VectorSpace<'a> for Vector3<'a> {
    fn zero(engine: &'a Engine) -> Self {
        Self::zeros(engine)
    }

    fn dot(self, other: Self) -> f64 {
        Vector3::dot(self, other)
    }

    fn engine(&self) -> &'a Engine {
        self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Rule;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_operators() {
        let e = Engine::default();
        let a = Vector3::new(&e, 1.0, 2.0, 3.0);
        let b = Vector3::new(&e, 4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(&e, 5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(&e, 3.0, 3.0, 3.0));
        assert_eq!(b * 3.0, Vector3::new(&e, 12.0, 15.0, 18.0));
    }

    #[test]
    fn test_dot_product() {
        let e = Engine::with_rule(Rule::ATimesB);
        let a = Vector3::new(&e, 1.0, 2.0, 3.0);
        let b = Vector3::new(&e, 4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);

        // a_plus_b: (1+4) + (2+5) + (3+6)
        let e = Engine::with_rule(Rule::APlusB);
        let a = Vector3::new(&e, 1.0, 2.0, 3.0);
        let b = Vector3::new(&e, 4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 21.0);
    }

    #[test]
    fn test_cross_product() {
        let e = Engine::with_rule(Rule::ATimesB);
        let x = Vector3::new(&e, 1.0, 0.0, 0.0);
        let y = Vector3::new(&e, 0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(&e, 0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vector3::new(&e, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_cross_product_follows_rule() {
        let e = Engine::default();
        let a = Vector3::new(&e, 1.0, 2.0, 3.0);
        let b = Vector3::new(&e, 4.0, 5.0, 6.0);
        let c = a.cross(b);
        assert_eq!(c.x, e.subtract(e.combine(2.0, 6.0), e.combine(3.0, 5.0)));
        assert_eq!(c.y, e.subtract(e.combine(3.0, 4.0), e.combine(1.0, 6.0)));
        assert_eq!(c.z, e.subtract(e.combine(1.0, 5.0), e.combine(2.0, 4.0)));

        // Under a_plus_b every product is a sum: (0-1, 0-1, 2-0)
        let e = Engine::with_rule(Rule::APlusB);
        let x = Vector3::new(&e, 1.0, 0.0, 0.0);
        let y = Vector3::new(&e, 0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(&e, -1.0, -1.0, 2.0));
    }

    #[test]
    fn test_length() {
        let e = Engine::with_rule(Rule::ATimesB);
        let v = Vector3::new(&e, 3.0, 4.0, 0.0);
        assert!(approx_eq(v.length(), 5.0));
        assert!(approx_eq(v.length_squared(), 25.0));
    }

    #[test]
    fn test_length_is_not_euclidean_under_other_rules() {
        let e = Engine::with_rule(Rule::APlusB);
        let v = Vector3::new(&e, 3.0, 4.0, 0.0);
        // (3+3) + (4+4) + (0+0) = 14
        assert!(approx_eq(v.length_squared(), 14.0));
        assert!(approx_eq(v.length(), 14.0_f64.sqrt()));
    }

    #[test]
    fn test_normalize() {
        let e = Engine::with_rule(Rule::ATimesB);
        let n = Vector3::new(&e, 3.0, 4.0, 0.0).normalize();
        assert!(approx_eq(n.length(), 1.0));
        assert!(approx_eq(n.x, 0.6));
        assert!(approx_eq(n.y, 0.8));

        let zero = Vector3::zeros(&e).normalize();
        assert_eq!(zero, Vector3::zeros(&e));
    }

    #[test]
    fn test_lerp() {
        let e = Engine::with_rule(Rule::ATimesB);
        let a = Vector3::zeros(&e);
        let b = Vector3::new(&e, 10.0, 20.0, 30.0);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vector3::new(&e, 5.0, 10.0, 15.0));
    }

    #[test]
    fn test_indexing() {
        let e = Engine::default();
        let v = Vector3::new(&e, 1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn test_display() {
        let e = Engine::default();
        assert_eq!(
            Vector3::new(&e, 2.0, 3.0, 4.0).to_string(),
            "Vector3(2, 3, 4)"
        );
    }
}
