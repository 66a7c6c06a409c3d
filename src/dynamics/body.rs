use std::fmt;

use super::integrator;
use crate::math::VectorSpace;

/// A point mass in 2D or 3D.
///
/// `V` is [`Vector2`](crate::math::Vector2) or
/// [`Vector3`](crate::math::Vector3); every quantity is computed through the
/// engine the position vector borrows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body<V> {
    /// Position in world space
    pub position: V,
    /// Linear velocity
    pub velocity: V,
    /// Mass. Zero is treated as infinite (inverse mass 0).
    pub mass: f64,
    /// Accumulated force (reset each step)
    pub force: V,
    /// Static bodies never move and ignore impulses
    pub is_static: bool,
}

impl<'a, V: VectorSpace<'a>> Body<V> {
    /// Creates a new dynamic body
    pub fn new(position: V, velocity: V, mass: f64) -> Self {
        Self {
            position,
            velocity,
            mass,
            force: V::zero(position.engine()),
            is_static: false,
        }
    }

    /// Marks the body as static
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// `divide(1, mass)`, or 0 for a static body or a zero mass
    #[inline]
    pub fn inverse_mass(&self) -> f64 {
        if self.is_static || self.mass == 0.0 {
            0.0
        } else {
            self.position.engine().divide(1.0, self.mass)
        }
    }

    /// Adds to the force accumulator
    #[inline]
    pub fn apply_force(&mut self, force: V) {
        self.force = self.force + force;
    }

    /// Changes velocity by `impulse * inverse_mass`. No effect on static
    /// bodies.
    #[inline]
    pub fn apply_impulse(&mut self, impulse: V) {
        if !self.is_static {
            self.velocity = self.velocity + impulse * self.inverse_mass();
        }
    }

    /// Advances the body by `dt` and clears the force accumulator.
    ///
    /// `friction` in (0, 1] scales the velocity by `1 - friction` each step.
    pub fn integrate(&mut self, dt: f64, friction: f64) {
        integrator::integrate_linear(self, dt, friction);
    }

    /// Clears the force accumulator
    #[inline]
    pub fn clear_force(&mut self) {
        self.force = V::zero(self.position.engine());
    }

    /// Linear momentum `v * m`
    #[inline]
    pub fn momentum(&self) -> V {
        self.velocity * self.mass
    }

    /// `combine(combine(0.5, m), v . v)`
    pub fn kinetic_energy(&self) -> f64 {
        let e = self.position.engine();
        e.combine(e.combine(0.5, self.mass), self.velocity.dot(self.velocity))
    }

    /// Gravitational potential energy with height measured along `gravity`.
    ///
    /// Returns 0 for zero gravity.
    pub fn potential_energy(&self, gravity: V) -> f64 {
        let g_mag = gravity.length();
        if g_mag == 0.0 {
            return 0.0;
        }
        let e = self.position.engine();
        let h = self.position.dot(gravity) / g_mag;
        e.combine(self.mass, e.combine(g_mag, h))
    }
}

impl<V: fmt::Display> fmt::Display for Body<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Body(pos={}, vel={}, mass={})",
            self.position, self.velocity, self.mass
        )
    }
}

/// A body the [`World`](crate::World) can simulate.
///
/// Exposes the linear point-mass state the world applies gravity to, and
/// the body's own integration step.
pub trait PhysicsBody<'a> {
    type Vector: VectorSpace<'a>;

    /// Linear state
    fn linear(&self) -> &Body<Self::Vector>;

    /// Mutable linear state
    fn linear_mut(&mut self) -> &mut Body<Self::Vector>;

    /// One integration step with the world friction
    fn integrate_step(&mut self, dt: f64, friction: f64);
}

impl<'a, V: VectorSpace<'a>> PhysicsBody<'a> for Body<V> {
    type Vector = V;

    #[inline]
    fn linear(&self) -> &Body<V> {
        self
    }

    #[inline]
    fn linear_mut(&mut self) -> &mut Body<V> {
        self
    }

    #[inline]
    fn integrate_step(&mut self, dt: f64, friction: f64) {
        self.integrate(dt, friction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Engine, Rule};
    use crate::math::{Vector2, Vector3};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_body_creation() {
        let e = Engine::default();
        let body = Body::new(Vector2::new(&e, 1.0, 2.0), Vector2::zero(&e), 2.0);
        assert_eq!(body.position, Vector2::new(&e, 1.0, 2.0));
        assert_eq!(body.force, Vector2::zero(&e));
        assert!(!body.is_static);
        assert!(approx_eq(body.inverse_mass(), 0.5));
    }

    #[test]
    fn test_zero_mass_inverse() {
        let e = Engine::default();
        let body = Body::new(Vector2::zero(&e), Vector2::zero(&e), 0.0);
        assert_eq!(body.inverse_mass(), 0.0);
    }

    #[test]
    fn test_static_inverse_mass() {
        let e = Engine::default();
        let body = Body::new(Vector2::zero(&e), Vector2::zero(&e), 5.0).with_static(true);
        assert_eq!(body.inverse_mass(), 0.0);
    }

    #[test]
    fn test_integrate() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut body = Body::new(Vector2::zero(&e), Vector2::zero(&e), 2.0);
        body.apply_force(Vector2::new(&e, 2.0, 0.0));
        body.integrate(1.0, 0.0);

        assert!(approx_eq(body.velocity.x, 1.0));
        assert!(approx_eq(body.position.x, 1.0));
        assert_eq!(body.force, Vector2::zero(&e));
    }

    #[test]
    fn test_integrate_with_friction() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut body = Body::new(Vector2::zero(&e), Vector2::new(&e, 10.0, 0.0), 1.0);
        body.integrate(1.0, 0.5);
        assert!(approx_eq(body.velocity.x, 5.0));
        assert!(approx_eq(body.position.x, 5.0));
    }

    #[test]
    fn test_static_body_does_not_move() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut body = Body::new(Vector2::zero(&e), Vector2::new(&e, 1.0, 0.0), 1.0).with_static(true);
        body.apply_force(Vector2::new(&e, 5.0, 0.0));
        body.apply_impulse(Vector2::new(&e, 5.0, 0.0));
        body.integrate(1.0, 0.0);

        assert_eq!(body.position, Vector2::zero(&e));
        assert_eq!(body.velocity, Vector2::new(&e, 1.0, 0.0));
        assert_eq!(body.force, Vector2::zero(&e));
    }

    #[test]
    fn test_apply_impulse() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut body = Body::new(Vector3::zeros(&e), Vector3::zeros(&e), 2.0);
        body.apply_impulse(Vector3::new(&e, 4.0, 0.0, 0.0));
        assert_eq!(body.velocity, Vector3::new(&e, 2.0, 0.0, 0.0));
    }

    #[test]
    fn test_energy_and_momentum() {
        let e = Engine::with_rule(Rule::ATimesB);
        let body = Body::new(Vector3::new(&e, 0.0, 10.0, 0.0), Vector3::new(&e, 3.0, 4.0, 0.0), 2.0);

        assert_eq!(body.momentum(), Vector3::new(&e, 6.0, 8.0, 0.0));
        assert!(approx_eq(body.kinetic_energy(), 25.0));

        // Height is measured along gravity, so a body above the origin has negative PE
        let g = Vector3::new(&e, 0.0, -9.8, 0.0);
        assert!(approx_eq(body.potential_energy(g), 2.0 * 9.8 * -10.0));
        assert_eq!(body.potential_energy(Vector3::zeros(&e)), 0.0);
    }

    #[test]
    fn test_display() {
        let e = Engine::default();
        let body = Body::new(Vector2::new(&e, 1.0, 2.0), Vector2::zero(&e), 3.0);
        assert_eq!(body.to_string(), "Body(pos=Vector2(1, 2), vel=Vector2(0, 0), mass=3)");
    }
}
