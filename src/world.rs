use log::{debug, trace};

use crate::dynamics::{elastic_collision, PhysicsBody};
use crate::engine::Engine;
use crate::math::VectorSpace;

/// Configuration for the physics world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig<V> {
    /// Uniform gravitational acceleration, if any
    pub gravity: Option<V>,
    /// Friction passed to every body's integration step
    pub friction: f64,
    /// `G` in the pairwise gravitation law
    pub gravitational_constant: f64,
}

impl<V> Default for WorldConfig<V> {
    fn default() -> Self {
        Self {
            gravity: None,
            friction: 0.0,
            gravitational_constant: 1.0,
        }
    }
}

impl<V> WorldConfig<V> {
    /// Sets uniform gravity
    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = Some(gravity);
        self
    }

    /// Sets world friction
    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    /// Sets the gravitational constant
    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }
}

/// A handle to a body in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u32);

impl BodyHandle {
    /// Invalid/null body handle
    pub const INVALID: Self = Self(u32::MAX);

    /// Creates a new body handle
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the index of this handle
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns true if this handle is valid
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for BodyHandle {
    fn default() -> Self {
        Self::INVALID
    }
}

/// A collection of bodies advanced together.
///
/// Bodies are kept in insertion order; forces and integration are applied
/// in that order every step.
#[derive(Debug)]
pub struct World<'a, B: PhysicsBody<'a>> {
    engine: &'a Engine,
    config: WorldConfig<B::Vector>,
    bodies: Vec<B>,
    time: f64,
}

impl<'a, B: PhysicsBody<'a>> World<'a, B> {
    /// Creates a new physics world with the given configuration
    pub fn new(engine: &'a Engine, config: WorldConfig<B::Vector>) -> Self {
        debug!(
            "Creating world: rule={}, gravity={}, friction={}, G={}",
            engine.rule(),
            config.gravity.is_some(),
            config.friction,
            config.gravitational_constant
        );
        Self {
            engine,
            config,
            bodies: Vec::new(),
            time: 0.0,
        }
    }

    /// Adds a body and returns its handle
    pub fn add_body(&mut self, body: B) -> BodyHandle {
        let handle = BodyHandle::new(self.bodies.len() as u32);
        self.bodies.push(body);
        handle
    }

    /// Gets a reference to a body
    pub fn body(&self, handle: BodyHandle) -> Option<&B> {
        self.bodies.get(handle.index())
    }

    /// Gets a mutable reference to a body
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut B> {
        self.bodies.get_mut(handle.index())
    }

    /// All bodies in insertion order
    pub fn bodies(&self) -> &[B] {
        &self.bodies
    }

    /// Returns the number of bodies
    pub fn num_bodies(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the configuration
    pub fn config(&self) -> &WorldConfig<B::Vector> {
        &self.config
    }

    /// Sets (or clears) uniform gravity
    pub fn set_gravity(&mut self, gravity: Option<B::Vector>) {
        self.config.gravity = gravity;
    }

    /// Gets the gravity
    pub fn gravity(&self) -> Option<B::Vector> {
        self.config.gravity
    }

    /// Sets world friction
    pub fn set_friction(&mut self, friction: f64) {
        self.config.friction = friction;
    }

    /// Simulated time so far
    pub fn time(&self) -> f64 {
        self.time
    }

    /// The engine the world computes with
    pub fn engine(&self) -> &'a Engine {
        self.engine
    }

    /// Adds `gravity * mass` to every non-static body's force
    pub fn apply_gravity(&mut self) {
        let Some(gravity) = self.config.gravity else {
            return;
        };
        for body in &mut self.bodies {
            let linear = body.linear_mut();
            if !linear.is_static {
                let weight = gravity * linear.mass;
                linear.apply_force(weight);
            }
        }
    }

    /// Pairwise Newtonian attraction between every unordered pair.
    ///
    /// `F = divide(combine(G, combine(ma, mb)), r^2)` along the unit vector
    /// from the first body to the second; the second body receives the
    /// opposite force. Pairs of static bodies and coincident pairs are
    /// skipped, and static bodies never accumulate the force.
    pub fn apply_newtonian_gravity(&mut self) {
        let e = self.engine;
        let g = self.config.gravitational_constant;
        let n = self.bodies.len();

        for i in 0..n {
            for j in (i + 1)..n {
                let a = self.bodies[i].linear();
                let b = self.bodies[j].linear();
                let (a_static, b_static) = (a.is_static, b.is_static);
                if a_static && b_static {
                    continue;
                }

                let r_vec = b.position - a.position;
                let r2 = r_vec.dot(r_vec);
                if r2 == 0.0 {
                    continue;
                }

                let force_mag = e.divide(e.combine(g, e.combine(a.mass, b.mass)), r2);
                let direction = r_vec * (1.0 / r2.sqrt());
                let force = direction * force_mag;

                if !a_static {
                    self.bodies[i].linear_mut().apply_force(force);
                }
                if !b_static {
                    self.bodies[j].linear_mut().apply_force(force * -1.0);
                }
            }
        }
    }

    /// Steps the simulation by `dt`: uniform gravity, pairwise gravity,
    /// then each body's integration with the world friction.
    pub fn step(&mut self, dt: f64) {
        trace!("Stepping {} bodies by dt={}", self.bodies.len(), dt);

        self.apply_gravity();
        self.apply_newtonian_gravity();

        let friction = self.config.friction;
        for body in &mut self.bodies {
            body.integrate_step(dt, friction);
        }

        self.time += dt;
    }

    /// Two distinct bodies, mutably
    fn pair_mut(&mut self, a: BodyHandle, b: BodyHandle) -> Option<(&mut B, &mut B)> {
        let (i, j) = (a.index(), b.index());
        let len = self.bodies.len();
        if i == j || i >= len || j >= len {
            return None;
        }

        if i < j {
            let (lo, hi) = self.bodies.split_at_mut(j);
            Some((&mut lo[i], &mut hi[0]))
        } else {
            let (lo, hi) = self.bodies.split_at_mut(i);
            Some((&mut hi[0], &mut lo[j]))
        }
    }

    /// Applies [`elastic_collision`] to two stored bodies.
    ///
    /// Does nothing when the handles are equal or unknown.
    pub fn elastic_collision(&mut self, a: BodyHandle, b: BodyHandle, normal: B::Vector) {
        if let Some((body_a, body_b)) = self.pair_mut(a, b) {
            elastic_collision(body_a.linear_mut(), body_b.linear_mut(), normal);
        }
    }
}
