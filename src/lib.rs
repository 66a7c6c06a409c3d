//! # terryphy
//!
//! Vector, matrix, quaternion, geometry and physics primitives whose scalar
//! multiplication is a swappable rule.
//!
//! ## Features
//!
//! - **Operation Engine**: four multiplication rules, selected by name
//! - **Linear Algebra**: 2D/3D vectors, 2x2/3x3/4x4 matrices and quaternions,
//!   all computing through the engine
//! - **Geometry**: lines, segments, rays, planes, spheres, boxes and triangles
//!   with containment and ray intersection
//! - **Dynamics**: point masses and rigid bodies, elastic collisions, a world
//!   with uniform and pairwise gravity
//! - **Evaluation**: runtime-typed operands for scripting layers
//!
//! ## Quick Start
//!
//! ```rust
//! use terryphy::prelude::*;
//!
//! let engine = Engine::new("a_times_b").unwrap();
//!
//! let mut world = World::new(
//!     &engine,
//!     WorldConfig::default().with_gravity(Vector2::new(&engine, 0.0, -9.81)),
//! );
//! let ball = world.add_body(Body::new(
//!     Vector2::new(&engine, 0.0, 10.0),
//!     Vector2::zero(&engine),
//!     1.0,
//! ));
//!
//! let dt = 1.0 / 60.0;
//! for _ in 0..60 {
//!     world.step(dt);
//! }
//! let pos = world.body(ball).unwrap().position;
//! assert!(pos.y < 10.0);
//! ```

pub mod dynamics;
pub mod engine;
pub mod error;
pub mod eval;
pub mod geometry;
pub mod math;
mod world;

pub use engine::{rule_names, Engine, Rule};
pub use error::{Error, Result};
pub use world::{BodyHandle, World, WorldConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dynamics::{Body, IntegrateOptions, PhysicsBody, RigidBody, RigidBodyState};
    pub use crate::engine::{rule_names, Engine, Rule};
    pub use crate::error::{Error, Result};
    pub use crate::eval::{BinaryOp, Evaluator, Value};
    pub use crate::geometry::{
        BoxShape, Line, Plane, Point, Ray, Segment, Shape, ShapeType, Sphere, Triangle,
    };
    pub use crate::math::{
        Matrix2, Matrix3, Matrix4, Quaternion, Vector2, Vector3, VectorSpace,
    };
    pub use crate::world::{BodyHandle, World, WorldConfig};
}
