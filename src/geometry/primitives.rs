use crate::math::consts::PARALLEL_EPSILON;
use crate::math::Vector3;

/// A location in 3D space. Points and vectors share one representation.
pub type Point<'a> = Vector3<'a>;

/// An infinite line through `point` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<'a> {
    pub point: Point<'a>,
    /// Expected, not required, to be normalised
    pub direction: Vector3<'a>,
}

impl<'a> Line<'a> {
    /// Creates a new line
    #[inline]
    pub const fn new(point: Point<'a>, direction: Vector3<'a>) -> Self {
        Self { point, direction }
    }

    /// `point + direction * t`
    #[inline]
    pub fn point_at(&self, t: f64) -> Point<'a> {
        self.point + self.direction * t
    }
}

/// A finite segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a> {
    pub start: Point<'a>,
    pub end: Point<'a>,
}

impl<'a> Segment<'a> {
    /// Creates a new segment
    #[inline]
    pub const fn new(start: Point<'a>, end: Point<'a>) -> Self {
        Self { start, end }
    }

    /// Per axis `divide(add(start, end), 2)`
    pub fn midpoint(&self) -> Point<'a> {
        let e = self.start.engine();
        let mid = |a: f64, b: f64| e.divide(e.add(a, b), 2.0);
        Point::new(
            e,
            mid(self.start.x, self.end.x),
            mid(self.start.y, self.end.y),
            mid(self.start.z, self.end.z),
        )
    }

    /// Square root of the engine self-dot of `end - start`
    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }
}

/// A half-line starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<'a> {
    pub origin: Point<'a>,
    pub direction: Vector3<'a>,
}

impl<'a> Ray<'a> {
    /// Creates a new ray
    #[inline]
    pub const fn new(origin: Point<'a>, direction: Vector3<'a>) -> Self {
        Self { origin, direction }
    }

    /// `origin + direction * t`
    #[inline]
    pub fn point_at(&self, t: f64) -> Point<'a> {
        self.origin + self.direction * t
    }
}

/// An infinite plane through `point` with the given `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<'a> {
    pub point: Point<'a>,
    pub normal: Vector3<'a>,
}

impl<'a> Plane<'a> {
    /// Creates a new plane
    #[inline]
    pub const fn new(point: Point<'a>, normal: Vector3<'a>) -> Self {
        Self { point, normal }
    }

    /// Signed distance `(p - point) . normal`
    #[inline]
    pub fn distance_to_point(&self, p: Point<'a>) -> f64 {
        (p - self.point).dot(self.normal)
    }

    /// Orthogonal projection of `p` onto the plane
    #[inline]
    pub fn project_point(&self, p: Point<'a>) -> Point<'a> {
        p - self.normal * self.distance_to_point(p)
    }

    /// Ray parameter of the hit, if any.
    ///
    /// Returns None for zero-length directions, rays parallel to the plane
    /// and hits behind the ray origin.
    pub fn intersect_ray(&self, ray: &Ray<'a>) -> Option<f64> {
        if ray.direction.is_zero() {
            return None;
        }
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (self.point - ray.origin).dot(self.normal) / denom;
        (t >= 0.0).then_some(t)
    }
}
