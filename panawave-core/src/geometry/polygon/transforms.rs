use crate::geometry::point::Point;

use super::Polygon;

/// p' = pivot + (p - pivot)·e^{iθ}, i.e. complex-number rotation of `p`
/// about `pivot` by `theta` radians, counter-clockwise.
fn rotated(p: Point, pivot: Point, theta: f64) -> Point {
    let (sin, cos) = theta.sin_cos();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point {
        x: pivot.x + dx * cos - dy * sin,
        y: pivot.y + dx * sin + dy * cos,
    }
}

impl Polygon {
    /// Rotate all points about the centroid. Expects degrees. The centroid
    /// itself is the pivot and does not move.
    pub fn rotate(&mut self, angle_degrees: f64) {
        let theta = angle_degrees.to_radians();
        let pivot = self.centroid;
        for p in &mut self.points {
            *p = rotated(*p, pivot, theta);
        }
    }

    /// Rotate all points about the global origin. Expects degrees. The
    /// polygon is re-oriented as well unless a corresponding inverse
    /// `rotate()` is performed; the centroid rotates with the points.
    pub fn rotate_about_origin(&mut self, angle_degrees: f64) {
        let theta = angle_degrees.to_radians();
        let origin = Point::new(0., 0.);
        for p in &mut self.points {
            *p = rotated(*p, origin, theta);
        }
        self.centroid = rotated(self.centroid, origin, theta);
    }

    /// Translate every point, and the centroid, by (dx, dy).
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let offset = Point::new(dx, dy);
        for p in &mut self.points {
            *p = *p + offset;
        }
        self.centroid = self.centroid + offset;
    }
}
