use super::body::Body;
use super::rigid_body::RigidBody;
use crate::math::VectorSpace;

/// Explicit Euler step of a point mass.
///
/// `a = F * inverse_mass`, `v += a * dt`, optional friction scales `v` by
/// `1 - friction`, then `x += v * dt`. The force accumulator is cleared.
/// Static bodies only have their force cleared.
pub fn integrate_linear<'a, V: VectorSpace<'a>>(body: &mut Body<V>, dt: f64, friction: f64) {
    if body.is_static {
        body.clear_force();
        return;
    }

    let acceleration = body.force * body.inverse_mass();
    body.velocity = body.velocity + acceleration * dt;

    if friction > 0.0 {
        body.velocity = body.velocity * (1.0 - friction);
    }

    body.position = body.position + body.velocity * dt;
    body.clear_force();
}

/// Angular counterpart of [`integrate_linear`] for a rigid body.
///
/// `alpha = torque * divide(1, inertia)`, `omega += alpha * dt`, optional
/// angular friction, then a first-order orientation update. The torque
/// accumulator is cleared.
pub fn integrate_angular(body: &mut RigidBody<'_>, dt: f64, angular_friction: f64) {
    let e = body.orientation.engine();

    let angular_acceleration = body.torque * e.divide(1.0, body.inertia);
    body.angular_velocity = body.angular_velocity + angular_acceleration * dt;

    if angular_friction > 0.0 {
        body.angular_velocity = body.angular_velocity * (1.0 - angular_friction);
    }

    body.orientation = body.orientation.integrate(body.angular_velocity, dt);
    body.clear_torque();
}
