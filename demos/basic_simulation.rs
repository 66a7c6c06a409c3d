//! Basic physics simulation example
//!
//! Drops a ball onto a static floor under every multiplication rule, then
//! runs a small two-body system in 2D.
//!
//! Run with `RUST_LOG=debug` to see rule changes and bodies falling asleep.

use terryphy::geometry::Plane;
use terryphy::prelude::*;

fn drop_ball(engine: &Engine) {
    let mut world = World::new(
        engine,
        WorldConfig::default().with_gravity(Vector3::new(engine, 0.0, -9.81, 0.0)),
    );

    let floor_plane = Plane::new(Vector3::zeros(engine), Vector3::new(engine, 0.0, 1.0, 0.0));
    let floor = world.add_body(
        RigidBody::new(Vector3::zeros(engine), Vector3::zeros(engine), 0.0).with_static(true),
    );

    let radius = 0.5;
    let ball = world.add_body(
        RigidBody::new(Vector3::new(engine, 0.0, 5.0, 0.0), Vector3::zeros(engine), 1.0)
            .with_shape(Shape::sphere(Vector3::zeros(engine), radius)),
    );

    let dt = 1.0 / 60.0;
    let total_time = 3.0;
    let steps = (total_time / dt) as usize;
    let down = Vector3::new(engine, 0.0, -1.0, 0.0);

    for i in 0..steps {
        world.step(dt);

        let Some(body) = world.body(ball) else {
            break;
        };
        if floor_plane.distance_to_point(body.position()) < radius {
            world.elastic_collision(ball, floor, down);
        }

        // Print position every 30 frames (0.5 seconds)
        if i % 30 == 0 {
            if let Some(body) = world.body(ball) {
                println!(
                    "  t={:.2}s: position={}, velocity={}",
                    world.time(),
                    body.position(),
                    body.velocity()
                );
            }
        }
    }
}

fn two_bodies(engine: &Engine) {
    let mut world = World::new(engine, WorldConfig::default().with_gravitational_constant(1.0));

    let a = world.add_body(Body::new(
        Vector2::new(engine, -1.0, 0.0),
        Vector2::new(engine, 0.0, 0.5),
        1.0,
    ));
    let b = world.add_body(Body::new(
        Vector2::new(engine, 1.0, 0.0),
        Vector2::new(engine, 0.0, -0.5),
        1.0,
    ));

    let dt = 0.01;
    for _ in 0..200 {
        world.step(dt);
    }

    if let (Some(a), Some(b)) = (world.body(a), world.body(b)) {
        println!("  after {:.1}s: a={}, b={}", world.time(), a.position, b.position);
        println!("  total momentum: {}", a.momentum() + b.momentum());
    }
}

fn main() {
    env_logger::init();

    println!("terryphy - Basic Simulation Example");
    println!("===================================\n");

    let mut engine = Engine::default();
    for name in rule_names() {
        if let Err(err) = engine.set_rule(name) {
            eprintln!("{}", err);
            continue;
        }

        println!(
            "Rule {}: 2 * 3 = {}, 1 * 1 = {}",
            name,
            engine.combine(2.0, 3.0),
            engine.combine(1.0, 1.0)
        );
        println!("Ball dropped from Y=5.0 (radius=0.5):");
        drop_ball(&engine);
        println!("Two bodies under mutual gravity:");
        two_bodies(&engine);
        println!();
    }
}
