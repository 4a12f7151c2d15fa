mod transforms;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::geometry::point::Point;

/// An ordered, closed point set with a centroid. Transforms move the
/// coordinates but never add or remove vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub centroid: Point,
}

impl Polygon {
    /// Build a polygon with its centroid at the arithmetic mean of the
    /// points. The mean is only a true centroid for convex/regular shapes,
    /// which is all the sticker editor ever feeds it.
    pub fn new(points: Vec<Point>) -> Self {
        assert!(points.len() >= 3, "Polygon must have at least 3 points");
        let n = points.len() as f64;
        let mut sum = Point::new(0., 0.);
        for p in &points {
            sum = sum + *p;
        }
        Polygon {
            centroid: sum * (1. / n),
            points,
        }
    }

    /// Build a polygon with an explicitly supplied centroid.
    pub fn with_centroid(points: Vec<Point>, centroid: Point) -> Self {
        assert!(points.len() >= 3, "Polygon must have at least 3 points");
        Polygon { points, centroid }
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }
}

impl Display for Polygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pts: Vec<String> = self.points.iter().map(|p| p.to_string()).collect();
        write!(f, "Polygon[{}]", pts.join(", "))
    }
}

#[cfg(test)]
mod tests;
