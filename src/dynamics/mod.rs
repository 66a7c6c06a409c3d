mod body;
mod integrator;
mod response;
mod rigid_body;

pub use body::{Body, PhysicsBody};
pub use integrator::{integrate_angular, integrate_linear};
pub use response::{elastic_collision, RESTITUTION};
pub use rigid_body::{IntegrateOptions, RigidBody, RigidBodyState};
