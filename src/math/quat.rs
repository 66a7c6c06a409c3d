use std::fmt;
use std::ops::Mul;

use super::consts::SLERP_LERP_THRESHOLD;
use super::utils;
use super::vec3::Vector3;
use crate::engine::Engine;

/// A quaternion `w + xi + yj + zk` whose products run through an [`Engine`].
///
/// Not normalised automatically; call [`Quaternion::normalize`] when a unit
/// quaternion is needed.
#[derive(Debug, Clone, Copy)]
pub struct Quaternion<'a> {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    engine: &'a Engine,
}

impl<'a> Quaternion<'a> {
    /// Creates a new quaternion from components
    #[inline]
    pub const fn new(engine: &'a Engine, w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z, engine }
    }

    /// Identity quaternion (no rotation)
    #[inline]
    pub const fn identity(engine: &'a Engine) -> Self {
        Self::new(engine, 1.0, 0.0, 0.0, 0.0)
    }

    /// Creates a quaternion from an axis and angle (radians).
    /// The axis is normalised through the engine.
    pub fn from_axis_angle(axis: Vector3<'a>, angle: f64) -> Self {
        let axis = axis.normalize();
        let half_angle = angle * 0.5;
        let s = half_angle.sin();
        Self::new(axis.engine(), half_angle.cos(), axis.x * s, axis.y * s, axis.z * s)
    }

    /// Pure quaternion `(0, v)`
    #[inline]
    pub fn from_vector(v: Vector3<'a>) -> Self {
        Self::new(v.engine(), 0.0, v.x, v.y, v.z)
    }

    /// Returns the conjugate, each imaginary part as `combine(-1, c)`
    #[inline]
    pub fn conjugate(self) -> Self {
        let e = self.engine;
        Self::new(
            e,
            self.w,
            e.combine(-1.0, self.x),
            e.combine(-1.0, self.y),
            e.combine(-1.0, self.z),
        )
    }

    /// `add(add(ww', xx'), add(yy', zz'))`
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        let e = self.engine;
        e.add(
            e.add(e.combine(self.w, other.w), e.combine(self.x, other.x)),
            e.add(e.combine(self.y, other.y), e.combine(self.z, other.z)),
        )
    }

    /// Square root of the engine self-dot
    #[inline]
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Divides each component by the norm.
    /// Returns the identity for a zero quaternion.
    #[inline]
    pub fn normalize(self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            return Self::identity(self.engine);
        }
        Self::new(self.engine, self.w / n, self.x / n, self.y / n, self.z / n)
    }

    /// Spherical linear interpolation from `self` to `other`.
    ///
    /// Takes the short path, and falls back to a normalised component lerp
    /// when the quaternions are nearly parallel.
    pub fn slerp(self, other: Self, t: f64) -> Self {
        let mut dot = self.dot(other);
        let mut other = other;

        if dot < 0.0 {
            other = Self::new(self.engine, -other.w, -other.x, -other.y, -other.z);
            dot = -dot;
        }

        if dot > SLERP_LERP_THRESHOLD {
            return Self::new(
                self.engine,
                utils::lerp(self.w, other.w, t),
                utils::lerp(self.x, other.x, t),
                utils::lerp(self.y, other.y, t),
                utils::lerp(self.z, other.z, t),
            )
            .normalize();
        }

        let theta_0 = dot.acos();
        let theta = theta_0 * t;
        let sin_theta = theta.sin();
        let sin_theta_0 = theta_0.sin();

        let s0 = theta.cos() - dot * sin_theta / sin_theta_0;
        let s1 = sin_theta / sin_theta_0;

        Self::new(
            self.engine,
            self.w * s0 + other.w * s1,
            self.x * s0 + other.x * s1,
            self.y * s0 + other.y * s1,
            self.z * s0 + other.z * s1,
        )
        .normalize()
    }

    /// Time derivative `0.5 * q * (0, omega)` for an angular velocity.
    ///
    /// The product goes through the engine; the halving is ordinary.
    #[inline]
    pub fn derivative(self, angular_velocity: Vector3<'a>) -> Self {
        let dq = self * Self::from_vector(angular_velocity);
        Self::new(self.engine, 0.5 * dq.w, 0.5 * dq.x, 0.5 * dq.y, 0.5 * dq.z)
    }

    /// First-order Euler step of the orientation, renormalised
    #[inline]
    pub fn integrate(self, angular_velocity: Vector3<'a>, dt: f64) -> Self {
        let dq = self.derivative(angular_velocity);
        Self::new(
            self.engine,
            self.w + dq.w * dt,
            self.x + dq.x * dt,
            self.y + dq.y * dt,
            self.z + dq.z * dt,
        )
        .normalize()
    }

    /// Rotates a vector by this quaternion (`q v q*`)
    pub fn rotate_vector(self, v: Vector3<'a>) -> Vector3<'a> {
        let r = self * Self::from_vector(v) * self.conjugate();
        Vector3::new(self.engine, r.x, r.y, r.z)
    }

    #[inline]
    pub fn engine(&self) -> &'a Engine {
        self.engine
    }
}

impl PartialEq for Quaternion<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.w == other.w && self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl fmt::Display for Quaternion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quaternion({}, {}, {}, {})", self.w, self.x, self.y, self.z)
    }
}

impl<'a> Mul for Quaternion<'a> {
    type Output = Self;

    /// Hamilton product, every product through `combine`
    fn mul(self, other: Self) -> Self {
        let e = self.engine;
        let c = |a: f64, b: f64| e.combine(a, b);
        let (a, b) = (self, other);

        let w = e.subtract(
            e.subtract(e.subtract(c(a.w, b.w), c(a.x, b.x)), c(a.y, b.y)),
            c(a.z, b.z),
        );
        let x = e.subtract(
            e.add(e.add(c(a.w, b.x), c(a.x, b.w)), c(a.y, b.z)),
            c(a.z, b.y),
        );
        let y = e.add(
            e.add(e.subtract(c(a.w, b.y), c(a.x, b.z)), c(a.y, b.w)),
            c(a.z, b.x),
        );
        let z = e.add(
            e.subtract(e.add(c(a.w, b.z), c(a.x, b.y)), c(a.y, b.x)),
            c(a.z, b.w),
        );
        Self::new(e, w, x, y, z)
    }
}
