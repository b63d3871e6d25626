use approx::assert_relative_eq;
use dyndist::math::{Point3, Vector3};
use dyndist::query::{DistPointPlane, DistanceQuery, MinimizationStatus};
use dyndist::shape::Plane;

#[test]
fn static_point_plane() {
    let plane = Plane::from_point_and_normal(&Point3::new(0.0, 0.0, 2.0), Vector3::z_axis());
    let above = Point3::new(1.0, -3.0, 7.0);
    let below = Point3::new(1.0, -3.0, -1.0);

    let query = DistPointPlane::new(&above, &plane);
    assert_relative_eq!(query.distance(), 5.0);
    assert_relative_eq!(query.separation().point1, Point3::new(1.0, -3.0, 2.0));

    let query = DistPointPlane::new(&below, &plane);
    assert_relative_eq!(query.distance(), 3.0);
    assert_relative_eq!(plane.signed_distance(&below), -3.0);
}

#[test]
fn point_crossing_a_plane() {
    let plane = Plane::new(Vector3::z_axis(), 0.0);
    let point = Point3::new(0.0, 0.0, 5.0);
    let vel0 = -Vector3::z();
    let vel1 = Vector3::zeros();
    let query = DistPointPlane::new(&point, &plane);

    let min_sq = query.min_distance_squared(0.0, 8.0, &vel0, &vel1).unwrap();
    assert_eq!(min_sq.status, MinimizationStatus::Converged);
    assert_relative_eq!(min_sq.contact_time, 5.0, epsilon = 1.0e-9);
    assert!(min_sq.value <= 1.0e-12);

    // The distance itself isn't differentiable at the crossing.
    let min = query.min_distance(0.0, 8.0, &vel0, &vel1).unwrap();
    assert_eq!(min.status, MinimizationStatus::Contact);
    assert_relative_eq!(min.contact_time, 5.0, epsilon = 1.0e-9);
    assert!(min.value <= 1.0e-9);
}

#[test]
fn moving_plane() {
    // Both move toward each other: relative speed 2, initial distance 6.
    let plane = Plane::new(Vector3::y_axis(), -1.0);
    let point = Point3::new(2.0, 5.0, -1.0);
    let query = DistPointPlane::new(&point, &plane);
    let vel0 = Vector3::new(0.0, -1.0, 0.0);
    let vel1 = Vector3::new(3.0, 1.0, 0.0);

    assert_relative_eq!(query.distance(), 6.0);
    assert_relative_eq!(query.distance_at(1.0, &vel0, &vel1), 4.0);
    assert_relative_eq!(query.derivative_at(1.0, &vel0, &vel1), -2.0, epsilon = 1.0e-9);

    let min = query.min_distance_squared(0.0, 10.0, &vel0, &vel1).unwrap();
    assert_relative_eq!(min.contact_time, 3.0, epsilon = 1.0e-9);
    assert_relative_eq!(min.separation.point0, Point3::new(2.0, 2.0, -1.0), epsilon = 1.0e-9);
    assert_relative_eq!(min.separation.point1, Point3::new(2.0, 2.0, -1.0), epsilon = 1.0e-9);
}
