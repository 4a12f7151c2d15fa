use super::super::*;

fn square() -> Polygon {
    Polygon::new(vec![
        Point::new(0., 0.),
        Point::new(0., 20.),
        Point::new(20., 20.),
        Point::new(20., 0.),
    ])
}

#[test]
fn test_rotate_quarter_turn() {
    let mut s = square();
    s.rotate(90.);
    // Centroid is the pivot; (0, 0) maps to (20, 0) under a CCW quarter
    // turn about (10, 10).
    assert_relative_eq!(s.centroid, Point::new(10., 10.), epsilon = 1e-12);
    assert_relative_eq!(s.points[0], Point::new(20., 0.), epsilon = 1e-12);
    assert_relative_eq!(s.points[1], Point::new(0., 0.), epsilon = 1e-12);
}

#[test]
fn test_rotate_round_trip() {
    let orig = square();
    let mut s = orig.clone();
    s.rotate(37.5);
    s.rotate(-37.5);
    for (a, b) in s.points.iter().zip(&orig.points) {
        assert_relative_eq!(*a, *b, epsilon = 1e-10);
    }
    assert_relative_eq!(s.centroid, orig.centroid, epsilon = 1e-10);
}

#[test]
fn test_rotate_preserves_point_count() {
    let mut s = square();
    for _ in 0..17 {
        s.rotate(33.3);
        s.rotate_about_origin(-12.1);
    }
    assert_eq!(s.num_points(), 4);
}

#[test]
fn test_rotate_about_origin_moves_centroid() {
    let mut s = square();
    s.rotate_about_origin(90.);
    // (10, 10) maps to (-10, 10) under a CCW quarter turn about the origin.
    assert_relative_eq!(s.centroid, Point::new(-10., 10.), epsilon = 1e-12);
    assert_relative_eq!(s.points[2], Point::new(-20., 20.), epsilon = 1e-12);
}

#[test]
fn test_translate() {
    let mut s = square();
    s.translate(-10., 5.);
    assert_relative_eq!(s.centroid, Point::new(0., 15.), epsilon = 1e-12);
    assert_relative_eq!(s.points[0], Point::new(-10., 5.), epsilon = 1e-12);
}

#[test]
fn test_origin_rotation_round_trip() {
    let orig = square();
    let mut s = orig.clone();
    s.rotate_about_origin(123.4);
    s.rotate_about_origin(-123.4);
    for (a, b) in s.points.iter().zip(&orig.points) {
        assert_relative_eq!(*a, *b, epsilon = 1e-10);
    }
}
