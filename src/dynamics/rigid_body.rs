use std::fmt;

use log::debug;

use super::body::{Body, PhysicsBody};
use super::integrator;
use crate::geometry::Shape;
use crate::math::{Quaternion, Vector3};

/// Options for [`RigidBody::integrate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrateOptions {
    /// Linear friction (0 disables)
    pub friction: f64,
    /// Angular friction (0 disables)
    pub angular_friction: f64,
    /// Put the body to sleep once both speeds drop below their thresholds
    pub auto_sleep: bool,
    /// Linear speed below which the body may sleep
    pub linear_threshold: f64,
    /// Angular speed below which the body may sleep
    pub angular_threshold: f64,
}

impl Default for IntegrateOptions {
    fn default() -> Self {
        Self {
            friction: 0.0,
            angular_friction: 0.0,
            auto_sleep: true,
            linear_threshold: 1e-5,
            angular_threshold: 1e-5,
        }
    }
}

impl IntegrateOptions {
    /// Sets linear friction
    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    /// Sets angular friction
    pub fn with_angular_friction(mut self, angular_friction: f64) -> Self {
        self.angular_friction = angular_friction;
        self
    }

    /// Enables or disables auto sleep
    pub fn with_auto_sleep(mut self, auto_sleep: bool) -> Self {
        self.auto_sleep = auto_sleep;
        self
    }
}

/// A snapshot of a rigid body's state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBodyState<'a> {
    pub position: Vector3<'a>,
    pub velocity: Vector3<'a>,
    pub orientation: Quaternion<'a>,
    pub angular_velocity: Vector3<'a>,
    pub mass: f64,
    pub inertia: f64,
    pub sleeping: bool,
    pub shape: Option<Shape<'a>>,
}

/// A 3D body with orientation and angular motion.
///
/// Linear motion is a [`Body`] and is integrated by it; the rigid body adds
/// orientation, angular velocity, torque, a scalar moment of inertia and a
/// sleeping flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody<'a> {
    /// Linear state
    pub body: Body<Vector3<'a>>,
    /// Orientation as a quaternion
    pub orientation: Quaternion<'a>,
    /// Angular velocity (radians per second)
    pub angular_velocity: Vector3<'a>,
    /// Accumulated torque (reset each step)
    pub torque: Vector3<'a>,
    /// Scalar moment of inertia
    pub inertia: f64,
    /// The collision shape attached to this body
    pub shape: Option<Shape<'a>>,
    sleeping: bool,
}

impl<'a> RigidBody<'a> {
    /// Creates a new rigid body with identity orientation and unit inertia
    pub fn new(position: Vector3<'a>, velocity: Vector3<'a>, mass: f64) -> Self {
        let engine = position.engine();
        Self {
            body: Body::new(position, velocity, mass),
            orientation: Quaternion::identity(engine),
            angular_velocity: Vector3::zeros(engine),
            torque: Vector3::zeros(engine),
            inertia: 1.0,
            shape: None,
            sleeping: false,
        }
    }

    /// Sets the orientation
    pub fn with_orientation(mut self, orientation: Quaternion<'a>) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the angular velocity
    pub fn with_angular_velocity(mut self, angular_velocity: Vector3<'a>) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Sets the moment of inertia
    pub fn with_inertia(mut self, inertia: f64) -> Self {
        self.inertia = inertia;
        self
    }

    /// Sets the collision shape
    pub fn with_shape(mut self, shape: Shape<'a>) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Marks the body as static
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.body.is_static = is_static;
        self
    }

    #[inline]
    pub fn position(&self) -> Vector3<'a> {
        self.body.position
    }

    #[inline]
    pub fn velocity(&self) -> Vector3<'a> {
        self.body.velocity
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.body.mass
    }

    /// Returns true if this is a static body
    #[inline]
    pub fn is_static(&self) -> bool {
        self.body.is_static
    }

    /// Adds a force. When `point` is given, also adds the torque
    /// `(point - position) x force`.
    pub fn apply_force(&mut self, force: Vector3<'a>, point: Option<Vector3<'a>>) {
        self.body.apply_force(force);
        if let Some(point) = point {
            let torque = (point - self.body.position).cross(force);
            self.apply_torque(torque);
        }
    }

    /// Adds to the torque accumulator
    #[inline]
    pub fn apply_torque(&mut self, torque: Vector3<'a>) {
        self.torque = self.torque + torque;
    }

    /// Applies a linear impulse
    #[inline]
    pub fn apply_impulse(&mut self, impulse: Vector3<'a>) {
        self.body.apply_impulse(impulse);
    }

    /// Clears the torque accumulator
    #[inline]
    pub fn clear_torque(&mut self) {
        self.torque = Vector3::zeros(self.orientation.engine());
    }

    /// `0.5 * q * (0, omega)`
    #[inline]
    pub fn orientation_derivative(&self) -> Quaternion<'a> {
        self.orientation.derivative(self.angular_velocity)
    }

    /// Advances linear and angular state by `dt`.
    ///
    /// Static and sleeping bodies are skipped.
    pub fn integrate(&mut self, dt: f64, options: IntegrateOptions) {
        if self.body.is_static || self.sleeping {
            return;
        }

        self.body.integrate(dt, options.friction);
        integrator::integrate_angular(self, dt, options.angular_friction);

        if options.auto_sleep {
            let v = self.body.velocity;
            let w = self.angular_velocity;
            if v.dot(v) < options.linear_threshold.powi(2)
                && w.dot(w) < options.angular_threshold.powi(2)
            {
                debug!("Rigid body at {} fell asleep", self.body.position);
                self.sleeping = true;
            }
        }
    }

    /// Wakes the body up
    #[inline]
    pub fn wake(&mut self) {
        self.sleeping = false;
    }

    /// Sets the sleeping flag
    #[inline]
    pub fn set_sleeping(&mut self, sleeping: bool) {
        self.sleeping = sleeping;
    }

    /// Returns true if the body is sleeping
    #[inline]
    pub fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    /// Zeroes velocities and accumulators and wakes the body.
    /// Position, orientation and mass are kept.
    pub fn reset(&mut self) {
        let zero = Vector3::zeros(self.orientation.engine());
        self.body.velocity = zero;
        self.body.force = zero;
        self.angular_velocity = zero;
        self.torque = zero;
        self.sleeping = false;
    }

    /// Captures the current state
    pub fn state(&self) -> RigidBodyState<'a> {
        RigidBodyState {
            position: self.body.position,
            velocity: self.body.velocity,
            orientation: self.orientation,
            angular_velocity: self.angular_velocity,
            mass: self.body.mass,
            inertia: self.inertia,
            sleeping: self.sleeping,
            shape: self.shape,
        }
    }

    /// Restores a state captured by [`RigidBody::state`]. Accumulated force
    /// and torque are left as they are.
    pub fn set_state(&mut self, state: RigidBodyState<'a>) {
        self.body.position = state.position;
        self.body.velocity = state.velocity;
        self.orientation = state.orientation;
        self.angular_velocity = state.angular_velocity;
        self.body.mass = state.mass;
        self.inertia = state.inertia;
        self.sleeping = state.sleeping;
        self.shape = state.shape;
    }
}

impl<'a> PhysicsBody<'a> for RigidBody<'a> {
    type Vector = Vector3<'a>;

    #[inline]
    fn linear(&self) -> &Body<Vector3<'a>> {
        &self.body
    }

    #[inline]
    fn linear_mut(&mut self) -> &mut Body<Vector3<'a>> {
        &mut self.body
    }

    fn integrate_step(&mut self, dt: f64, friction: f64) {
        self.integrate(dt, IntegrateOptions::default().with_friction(friction));
    }
}

impl fmt::Display for RigidBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RigidBody(pos={}, vel={}, mass={}, orient={}, ang_vel={}, inertia={})",
            self.body.position,
            self.body.velocity,
            self.body.mass,
            self.orientation,
            self.angular_velocity,
            self.inertia
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Engine, Rule};
    use crate::geometry::Point;

    fn body(e: &Engine) -> RigidBody<'_> {
        RigidBody::new(Vector3::zeros(e), Vector3::zeros(e), 1.0)
    }

    #[test]
    fn test_body_creation() {
        let e = Engine::with_rule(Rule::ATimesB);
        let rb = RigidBody::new(Vector3::new(&e, 1.0, 2.0, 3.0), Vector3::zeros(&e), 2.0)
            .with_inertia(3.0)
            .with_shape(Shape::sphere(Point::zeros(&e), 1.0));

        assert_eq!(rb.position(), Vector3::new(&e, 1.0, 2.0, 3.0));
        assert_eq!(rb.mass(), 2.0);
        assert_eq!(rb.inertia, 3.0);
        assert_eq!(rb.orientation, Quaternion::identity(&e));
        assert!(rb.shape.is_some());
        assert!(!rb.is_sleeping());
        assert!(!rb.is_static());
    }

    #[test]
    fn test_apply_force_at_point() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut rb = body(&e);
        let force = Vector3::new(&e, 0.0, 1.0, 0.0);

        rb.apply_force(force, Some(Vector3::new(&e, 1.0, 0.0, 0.0)));
        assert_eq!(rb.body.force, force);
        assert_eq!(rb.torque, Vector3::new(&e, 0.0, 0.0, 1.0));

        rb.apply_force(force, None);
        assert_eq!(rb.body.force, Vector3::new(&e, 0.0, 2.0, 0.0));
        assert_eq!(rb.torque, Vector3::new(&e, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_integrate_spins() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut rb = body(&e);
        rb.apply_torque(Vector3::new(&e, 0.0, 0.0, 1.0));
        rb.integrate(1.0, IntegrateOptions::default());

        assert_eq!(rb.angular_velocity, Vector3::new(&e, 0.0, 0.0, 1.0));
        assert!(rb.orientation.z > 0.0);
        assert_eq!(rb.torque, Vector3::zeros(&e));
        assert!(!rb.is_sleeping());
    }

    #[test]
    fn test_auto_sleep() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut rb = body(&e);
        rb.integrate(1.0, IntegrateOptions::default());
        assert!(rb.is_sleeping());

        // Sleeping bodies ignore forces until woken
        rb.apply_force(Vector3::new(&e, 1.0, 0.0, 0.0), None);
        rb.integrate(1.0, IntegrateOptions::default());
        assert_eq!(rb.velocity(), Vector3::zeros(&e));

        rb.wake();
        rb.integrate(1.0, IntegrateOptions::default());
        assert_eq!(rb.velocity(), Vector3::new(&e, 1.0, 0.0, 0.0));
    }

    #[test]
    fn test_no_auto_sleep() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut rb = body(&e);
        rb.integrate(1.0, IntegrateOptions::default().with_auto_sleep(false));
        assert!(!rb.is_sleeping());
    }

    #[test]
    fn test_static_skips_integration() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut rb = body(&e)
            .with_static(true)
            .with_angular_velocity(Vector3::new(&e, 0.0, 0.0, 1.0));
        rb.integrate(1.0, IntegrateOptions::default());
        assert_eq!(rb.orientation, Quaternion::identity(&e));
    }

    #[test]
    fn test_reset() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut rb = RigidBody::new(Vector3::new(&e, 5.0, 0.0, 0.0), Vector3::new(&e, 1.0, 1.0, 1.0), 1.0)
            .with_angular_velocity(Vector3::new(&e, 1.0, 0.0, 0.0));
        rb.apply_torque(Vector3::new(&e, 1.0, 0.0, 0.0));
        rb.set_sleeping(true);

        rb.reset();
        assert_eq!(rb.velocity(), Vector3::zeros(&e));
        assert_eq!(rb.angular_velocity, Vector3::zeros(&e));
        assert_eq!(rb.torque, Vector3::zeros(&e));
        assert!(!rb.is_sleeping());
        assert_eq!(rb.position(), Vector3::new(&e, 5.0, 0.0, 0.0));
    }

    #[test]
    fn test_state_round_trip() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut rb = body(&e).with_angular_velocity(Vector3::new(&e, 0.0, 1.0, 0.0));
        rb.apply_impulse(Vector3::new(&e, 2.0, 0.0, 0.0));
        let saved = rb.state();

        rb.integrate(0.5, IntegrateOptions::default());
        assert_ne!(rb.state(), saved);

        rb.set_state(saved);
        assert_eq!(rb.state(), saved);
        assert_eq!(rb.velocity(), Vector3::new(&e, 2.0, 0.0, 0.0));
    }
}
