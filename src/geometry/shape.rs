use super::primitives::{Point, Ray};
use crate::math::consts::PARALLEL_EPSILON;

/// The type of collision shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    Sphere,
    Box,
    Triangle,
}

/// A collision shape that can be attached to rigid bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// A sphere defined by its center and radius
    Sphere(Sphere<'a>),
    /// An axis-aligned box defined by its corners
    Box(BoxShape<'a>),
    /// A triangle defined by its vertices
    Triangle(Triangle<'a>),
}

impl<'a> Shape<'a> {
    /// Creates a sphere shape
    #[inline]
    pub fn sphere(center: Point<'a>, radius: f64) -> Self {
        Self::Sphere(Sphere::new(center, radius))
    }

    /// Creates a box shape from its min and max corners
    #[inline]
    pub fn cuboid(min: Point<'a>, max: Point<'a>) -> Self {
        Self::Box(BoxShape::new(min, max))
    }

    /// Creates a triangle shape
    #[inline]
    pub fn triangle(v0: Point<'a>, v1: Point<'a>, v2: Point<'a>) -> Self {
        Self::Triangle(Triangle::new(v0, v1, v2))
    }

    /// Returns the shape type
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Sphere(_) => ShapeType::Sphere,
            Shape::Box(_) => ShapeType::Box,
            Shape::Triangle(_) => ShapeType::Triangle,
        }
    }

    /// Returns true if the shape contains the point
    #[inline]
    pub fn contains_point(&self, p: Point<'a>) -> bool {
        match self {
            Shape::Sphere(s) => s.contains_point(p),
            Shape::Box(b) => b.contains_point(p),
            Shape::Triangle(t) => t.contains_point(p),
        }
    }
}

/// A sphere shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere<'a> {
    pub center: Point<'a>,
    pub radius: f64,
}

impl<'a> Sphere<'a> {
    /// Creates a new sphere
    #[inline]
    pub const fn new(center: Point<'a>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// `combine(radius, radius)`
    #[inline]
    fn radius_squared(&self) -> f64 {
        self.center.engine().combine(self.radius, self.radius)
    }

    /// True if `|p - center|^2 <= combine(r, r)`, boundary included
    #[inline]
    pub fn contains_point(&self, p: Point<'a>) -> bool {
        let d = p - self.center;
        d.dot(d) <= self.radius_squared()
    }

    /// Both roots of the ray/sphere quadratic, `(-b - sqrt) / 2a` first.
    ///
    /// Returns None for a zero-length direction or a negative discriminant.
    /// Roots behind the origin are not filtered out.
    pub fn intersect_ray(&self, ray: &Ray<'a>) -> Option<(f64, f64)> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        if ray.direction.is_zero() || a == 0.0 {
            return None;
        }
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius_squared();

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        let t1 = (-b - sqrt_disc) / (2.0 * a);
        let t2 = (-b + sqrt_disc) / (2.0 * a);
        Some((t1, t2))
    }
}

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape<'a> {
    /// Minimum corner (smallest x, y, z values)
    pub min: Point<'a>,
    /// Maximum corner (largest x, y, z values)
    pub max: Point<'a>,
}

/// `n / d`, with a zero divisor mapped to signed infinity
#[inline]
fn safe_div(n: f64, d: f64) -> f64 {
    if d != 0.0 {
        n / d
    } else if n < 0.0 {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

/// Entry and exit parameters of the slab `[min, max]` along one axis
#[inline]
fn slab(min: f64, max: f64, origin: f64, direction: f64) -> (f64, f64) {
    let t0 = safe_div(min - origin, direction);
    let t1 = safe_div(max - origin, direction);
    if t0 > t1 {
        (t1, t0)
    } else {
        (t0, t1)
    }
}

impl<'a> BoxShape<'a> {
    /// Creates a new box from its corners
    #[inline]
    pub const fn new(min: Point<'a>, max: Point<'a>) -> Self {
        Self { min, max }
    }

    /// Returns true if the point is inside the box, bounds included
    #[inline]
    pub fn contains_point(&self, p: Point<'a>) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Slab test against a ray, axes in x, y, z order.
    ///
    /// Returns `(t_min, t_max)` for the overlap window, or None as soon as
    /// one axis leaves it empty. A zero-length direction never hits.
    pub fn intersect_ray(&self, ray: &Ray<'a>) -> Option<(f64, f64)> {
        let (o, d) = (ray.origin, ray.direction);
        if d.is_zero() {
            return None;
        }

        let (mut t_min, mut t_max) = slab(self.min.x, self.max.x, o.x, d.x);

        for (min, max, origin, dir) in [
            (self.min.y, self.max.y, o.y, d.y),
            (self.min.z, self.max.z, o.z, d.z),
        ] {
            let (a_min, a_max) = slab(min, max, origin, dir);
            if t_min > a_max || a_min > t_max {
                return None;
            }
            if a_min > t_min {
                t_min = a_min;
            }
            if a_max < t_max {
                t_max = a_max;
            }
        }

        Some((t_min, t_max))
    }
}

/// A triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<'a> {
    pub v0: Point<'a>,
    pub v1: Point<'a>,
    pub v2: Point<'a>,
}

impl<'a> Triangle<'a> {
    /// Creates a new triangle
    #[inline]
    pub const fn new(v0: Point<'a>, v1: Point<'a>, v2: Point<'a>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Half the magnitude of the edge cross product
    #[inline]
    pub fn area(&self) -> f64 {
        let cross = (self.v1 - self.v0).cross(self.v2 - self.v0);
        0.5 * cross.dot(cross).sqrt()
    }

    /// Barycentric point-in-triangle test.
    ///
    /// Returns false for degenerate triangles.
    pub fn contains_point(&self, p: Point<'a>) -> bool {
        let e0 = self.v1 - self.v0;
        let e1 = self.v2 - self.v0;
        let e2 = p - self.v0;

        let d00 = e0.dot(e0);
        let d01 = e0.dot(e1);
        let d11 = e1.dot(e1);
        let d20 = e2.dot(e0);
        let d21 = e2.dot(e1);

        let denom = d00 * d11 - d01 * d01;
        if denom == 0.0 {
            return false;
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        let u = 1.0 - v - w;
        u >= 0.0 && v >= 0.0 && w >= 0.0
    }

    /// Moller-Trumbore ray intersection. Returns the ray parameter when the
    /// hit lies strictly in front of the origin.
    pub fn intersect_ray(&self, ray: &Ray<'a>) -> Option<f64> {
        if ray.direction.is_zero() {
            return None;
        }
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction.cross(edge2);
        let a = edge1.dot(h);
        if a.abs() < PARALLEL_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin - self.v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        (t > PARALLEL_EPSILON).then_some(t)
    }
}
