use super::primitives::Point;
use crate::math::Vector3;

/// The 8 corners of an axis-aligned cube with edge length `size`.
///
/// Bottom face (z - half) counter-clockwise first, then the top face.
pub fn cube_corners<'a>(center: Point<'a>, size: f64) -> [Point<'a>; 8] {
    let e = center.engine();
    let half = e.divide(size, 2.0);
    let [x, y, z] = center.to_array();
    [
        Point::new(e, x - half, y - half, z - half),
        Point::new(e, x + half, y - half, z - half),
        Point::new(e, x + half, y + half, z - half),
        Point::new(e, x - half, y + half, z - half),
        Point::new(e, x - half, y - half, z + half),
        Point::new(e, x + half, y - half, z + half),
        Point::new(e, x + half, y + half, z + half),
        Point::new(e, x - half, y + half, z + half),
    ]
}

/// The 4 corners of a square of side `size` in the plane `z = center.z`
pub fn quad_corners<'a>(center: Point<'a>, size: f64) -> [Point<'a>; 4] {
    let e = center.engine();
    let half = e.divide(size, 2.0);
    let [x, y, z] = center.to_array();
    [
        Point::new(e, x - half, y - half, z),
        Point::new(e, x + half, y - half, z),
        Point::new(e, x + half, y + half, z),
        Point::new(e, x - half, y + half, z),
    ]
}

/// Distance between two points under the active rule
#[inline]
pub fn distance(a: Point<'_>, b: Point<'_>) -> f64 {
    a.distance(b)
}

/// Angle between two vectors in radians.
///
/// Returns 0 when either magnitude is zero. The cosine is not clamped, so
/// rules that break Cauchy-Schwarz can yield NaN.
pub fn angle(a: Vector3<'_>, b: Vector3<'_>) -> f64 {
    let mag_a = a.length();
    let mag_b = b.length();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (mag_a * mag_b)).acos()
}
