mod primitives;
mod shape;
mod util;

pub use primitives::{Line, Plane, Point, Ray, Segment};
pub use shape::{BoxShape, Shape, ShapeType, Sphere, Triangle};
pub use util::{angle, cube_corners, distance, quad_corners};
