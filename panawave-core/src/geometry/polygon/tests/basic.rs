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
fn test_centroid_mean() {
    let s = square();
    assert_relative_eq!(s.centroid, Point::new(10., 10.), epsilon = 1e-12);
}

#[test]
fn test_explicit_centroid() {
    let p = Polygon::with_centroid(
        vec![
            Point::new(0., 0.),
            Point::new(1., 0.),
            Point::new(0.5, 1.),
        ],
        Point::new(0.5, 0.),
    );
    assert_relative_eq!(p.centroid, Point::new(0.5, 0.), epsilon = 1e-12);
}

#[test]
fn test_num_points() {
    assert_eq!(square().num_points(), 4);
}

#[test]
#[should_panic(expected = "at least 3 points")]
fn test_too_few_points() {
    Polygon::new(vec![Point::new(0., 0.), Point::new(1., 1.)]);
}
