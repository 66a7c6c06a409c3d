use super::body::Body;
use crate::math::VectorSpace;

/// Coefficient of restitution used by [`elastic_collision`] (perfectly elastic)
pub const RESTITUTION: f64 = 1.0;

/// Resolves a collision between two bodies along `normal` (pointing from `a`
/// to `b`) with an impulse.
///
/// Bodies already separating along the normal are left alone, as are pairs
/// where neither body can take an impulse (both static or massless). Otherwise
/// `j = divide(combine(-(1 + e), vn), add(1/ma, 1/mb))` where `vn` is the
/// relative normal velocity; `a` receives `-(n * j)` and `b` receives
/// `n * j`. Static bodies contribute a zero inverse mass.
pub fn elastic_collision<'a, V: VectorSpace<'a>>(a: &mut Body<V>, b: &mut Body<V>, normal: V) {
    let e = normal.engine();

    let relative_velocity = b.velocity - a.velocity;
    let vel_along_normal = relative_velocity.dot(normal);
    if vel_along_normal > 0.0 {
        return;
    }

    let inv_mass_sum = e.add(a.inverse_mass(), b.inverse_mass());
    if inv_mass_sum == 0.0 {
        return;
    }

    let j = e.divide(e.combine(-(1.0 + RESTITUTION), vel_along_normal), inv_mass_sum);

    let impulse = normal * j;
    a.apply_impulse(-impulse);
    b.apply_impulse(impulse);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Engine, Rule};
    use crate::math::{Vector2, Vector3};

    #[test]
    fn test_equal_masses_swap_velocities() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut a = Body::new(Vector2::new(&e, -1.0, 0.0), Vector2::new(&e, 1.0, 0.0), 1.0);
        let mut b = Body::new(Vector2::new(&e, 1.0, 0.0), Vector2::new(&e, -1.0, 0.0), 1.0);

        elastic_collision(&mut a, &mut b, Vector2::new(&e, 1.0, 0.0));

        assert_eq!(a.velocity, Vector2::new(&e, -1.0, 0.0));
        assert_eq!(b.velocity, Vector2::new(&e, 1.0, 0.0));
    }

    #[test]
    fn test_separating_bodies_untouched() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut a = Body::new(Vector2::new(&e, -1.0, 0.0), Vector2::new(&e, -1.0, 0.0), 1.0);
        let mut b = Body::new(Vector2::new(&e, 1.0, 0.0), Vector2::new(&e, 1.0, 0.0), 1.0);

        elastic_collision(&mut a, &mut b, Vector2::new(&e, 1.0, 0.0));

        assert_eq!(a.velocity, Vector2::new(&e, -1.0, 0.0));
        assert_eq!(b.velocity, Vector2::new(&e, 1.0, 0.0));
    }

    #[test]
    fn test_bounce_off_static() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut ball = Body::new(Vector3::zeros(&e), Vector3::new(&e, 0.0, -2.0, 0.0), 1.0);
        let mut ground = Body::new(Vector3::new(&e, 0.0, -1.0, 0.0), Vector3::zeros(&e), 0.0).with_static(true);

        elastic_collision(&mut ball, &mut ground, Vector3::new(&e, 0.0, -1.0, 0.0));

        assert_eq!(ball.velocity, Vector3::new(&e, 0.0, 2.0, 0.0));
        assert_eq!(ground.velocity, Vector3::zeros(&e));
    }

    #[test]
    fn test_bounce_off_heavy_static() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut ball = Body::new(Vector3::zeros(&e), Vector3::new(&e, 0.0, -2.0, 0.0), 1.0);
        let mut ground =
            Body::new(Vector3::new(&e, 0.0, -1.0, 0.0), Vector3::zeros(&e), 5.0).with_static(true);

        elastic_collision(&mut ball, &mut ground, Vector3::new(&e, 0.0, -1.0, 0.0));

        assert_eq!(ball.velocity, Vector3::new(&e, 0.0, 2.0, 0.0));
        assert_eq!(ground.velocity, Vector3::zeros(&e));
    }

    #[test]
    fn test_massless_pair_skipped() {
        let e = Engine::with_rule(Rule::ATimesB);
        let mut a = Body::new(Vector2::new(&e, -1.0, 0.0), Vector2::new(&e, 1.0, 0.0), 0.0);
        let mut b = Body::new(Vector2::new(&e, 1.0, 0.0), Vector2::new(&e, -1.0, 0.0), 0.0);

        elastic_collision(&mut a, &mut b, Vector2::new(&e, 1.0, 0.0));

        assert_eq!(a.velocity, Vector2::new(&e, 1.0, 0.0));
        assert_eq!(b.velocity, Vector2::new(&e, -1.0, 0.0));
    }
}
