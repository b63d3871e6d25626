use approx::assert_relative_eq;
use dyndist::math::{Point3, Vector3};
use dyndist::query::{DistPointCircle3, DistanceError, DistanceQuery, MinimizationStatus};
use dyndist::shape::Circle3;

fn unit_circle() -> Circle3<f64> {
    Circle3::new(Point3::origin(), Vector3::z_axis(), 1.0)
}

#[test]
fn finite_difference_derivatives() {
    // The point moves radially away from the circle: the distance is `2 + t`.
    let circle = unit_circle();
    let point = Point3::new(3.0, 0.0, 0.0);
    let query = DistPointCircle3::new(&point, &circle);
    let vel0 = Vector3::x();
    let vel1 = Vector3::zeros();

    for t in [0.0, 0.5, 2.0] {
        assert_relative_eq!(query.distance_at(t, &vel0, &vel1), 2.0 + t, epsilon = 1.0e-12);
        assert_relative_eq!(query.derivative_at(t, &vel0, &vel1), 1.0, epsilon = 1.0e-9);
        assert_relative_eq!(
            query.derivative_squared_at(t, &vel0, &vel1),
            2.0 * (2.0 + t),
            epsilon = 1.0e-8
        );
    }
}

#[test]
fn interior_minimum_of_a_passing_point() {
    // The point moves along the line x = 3 in the circle's plane. The distance is
    // sqrt(9 + (t - 5)²) - 1, minimal at t = 5.
    let circle = unit_circle();
    let point = Point3::new(3.0, -5.0, 0.0);
    let query = DistPointCircle3::new(&point, &circle);
    let vel0 = Vector3::y();
    let vel1 = Vector3::zeros();

    let min = query.min_distance(0.0, 8.0, &vel0, &vel1).unwrap();
    assert!(matches!(
        min.status,
        MinimizationStatus::Converged | MinimizationStatus::OutOfIterations
    ));
    assert_relative_eq!(min.contact_time, 5.0, epsilon = 1.0e-6);
    assert_relative_eq!(min.value, 2.0, epsilon = 1.0e-9);
    assert_relative_eq!(min.separation.point1, Point3::new(1.0, 0.0, 0.0), epsilon = 1.0e-6);
    assert_relative_eq!(min.separation.point0, Point3::new(3.0, 0.0, 0.0), epsilon = 1.0e-6);

    let min_sq = query.min_distance_squared(0.0, 8.0, &vel0, &vel1).unwrap();
    assert_relative_eq!(min_sq.contact_time, 5.0, epsilon = 1.0e-6);
    assert_relative_eq!(min_sq.value, 4.0, epsilon = 1.0e-9);
}

#[test]
fn point_crossing_the_circle_ring() {
    // The point crosses the circle at t = 3 - sqrt(0.75) and t = 3 + sqrt(0.75). In between, the
    // distance has a local maximum at t = 3, where the point is closest to the circle's center.
    let circle = unit_circle();
    let point = Point3::new(-3.0, 0.5, 0.0);
    let query = DistPointCircle3::new(&point, &circle);
    let vel0 = Vector3::x();
    let vel1 = Vector3::zeros();
    let first_crossing = 3.0 - 0.75f64.sqrt();

    let min = query.min_distance(0.0, 6.0, &vel0, &vel1).unwrap();
    assert_eq!(min.status, MinimizationStatus::Contact);
    assert_relative_eq!(min.contact_time, first_crossing, epsilon = 1.0e-9);
    assert!(min.value <= 1.0e-9);
    assert_relative_eq!(
        min.separation.point1,
        Point3::new(-(0.75f64.sqrt()), 0.5, 0.0),
        epsilon = 1.0e-6
    );

    // Starting inside of the ring, moving away from the first crossing.
    let min = query.min_distance(2.5, 6.0, &vel0, &vel1).unwrap();
    assert_eq!(min.status, MinimizationStatus::Contact);
    assert_relative_eq!(min.contact_time, 3.0 + 0.75f64.sqrt(), epsilon = 1.0e-9);
    assert!(min.value <= 1.0e-9);

    let min_sq = query.min_distance_squared(0.0, 6.0, &vel0, &vel1).unwrap();
    assert!(min_sq.value <= 1.0e-9);
    assert!((min_sq.contact_time - 3.0).abs() >= 0.8);
}

#[test]
fn point_passing_over_the_circle_disk() {
    // At a height 0.1 above the disk, the distance has two local minima of value 0.1, at t = 2
    // and t = 4, and a local maximum at t = 3.
    let circle = unit_circle();
    let point = Point3::new(-3.0, 0.0, 0.1);
    let query = DistPointCircle3::new(&point, &circle);

    let min = query
        .min_distance(0.0, 6.0, &Vector3::x(), &Vector3::zeros())
        .unwrap();
    assert_relative_eq!(min.value, 0.1, epsilon = 1.0e-9);
    assert_relative_eq!((min.contact_time - 3.0).abs(), 1.0, epsilon = 1.0e-6);
}

#[test]
fn both_primitives_moving() {
    // Only the relative velocity matters: same configuration as above, seen from a moving frame.
    let circle = Circle3::new(Point3::new(-2.0, 1.0, 0.0), Vector3::z_axis(), 1.0);
    let point = Point3::new(1.0, -4.0, 0.0);
    let query = DistPointCircle3::new(&point, &circle);
    let vel0 = Vector3::new(0.5, 1.5, 0.0);
    let vel1 = Vector3::new(0.5, 0.5, 0.0);

    let min = query.min_distance(0.0, 8.0, &vel0, &vel1).unwrap();
    assert_relative_eq!(min.contact_time, 5.0, epsilon = 1.0e-6);
    assert_relative_eq!(min.value, 2.0, epsilon = 1.0e-9);
}

#[test]
fn monotonic_motion_picks_an_endpoint() {
    let circle = unit_circle();
    let point = Point3::new(3.0, 0.0, 1.0);
    let query = DistPointCircle3::new(&point, &circle);
    let zero = Vector3::zeros();

    // Moving away: the minimum is at tmin.
    let away = Vector3::new(1.0, 0.0, 0.5);
    let min = query.min_distance(1.0, 4.0, &away, &zero).unwrap();
    assert_eq!(min.status, MinimizationStatus::Monotonic);
    assert_eq!(min.contact_time, 1.0);
    assert_eq!(min.value, query.distance_at(1.0, &away, &zero));

    // Moving closer: the minimum is at tmax.
    let closer = -away;
    let min = query.min_distance(0.0, 1.0, &closer, &zero).unwrap();
    assert_eq!(min.status, MinimizationStatus::Monotonic);
    assert_eq!(min.contact_time, 1.0);
    assert_eq!(
        min.value,
        query
            .distance_at(0.0, &closer, &zero)
            .min(query.distance_at(1.0, &closer, &zero))
    );
}

#[test]
fn single_time_interval() {
    let circle = unit_circle();
    let point = Point3::new(0.3, -2.0, 1.5);
    let query = DistPointCircle3::new(&point, &circle);
    let vel0 = Vector3::new(0.1, 0.2, -0.3);
    let vel1 = Vector3::new(-1.0, 0.0, 0.25);

    for t in [-1.0, 0.0, 0.75, 3.0] {
        let min = query.min_distance(t, t, &vel0, &vel1).unwrap();
        assert_eq!(min.status, MinimizationStatus::SingleTime);
        assert_eq!(min.contact_time, t);
        assert_eq!(min.value, query.distance_at(t, &vel0, &vel1));

        let min_sq = query.min_distance_squared(t, t, &vel0, &vel1).unwrap();
        assert_eq!(min_sq.value, query.distance_squared_at(t, &vel0, &vel1));
    }
}

#[test]
fn reversed_interval_is_an_error() {
    let circle = unit_circle();
    let point = Point3::new(3.0, 0.0, 0.0);
    let query = DistPointCircle3::new(&point, &circle);
    let vel = Vector3::x();

    assert_eq!(
        query.min_distance(2.0, 1.0, &vel, &vel),
        Err(DistanceError::InvalidInterval {
            tmin: 2.0,
            tmax: 1.0
        })
    );
    assert!(query.min_distance_squared(2.0, 1.0, &vel, &vel).is_err());
    assert!(query.min_distance(f64::NAN, 1.0, &vel, &vel).is_err());
}

#[test]
fn custom_difference_step() {
    let circle = unit_circle();
    let point = Point3::new(3.0, -5.0, 0.0);
    let mut query = DistPointCircle3::new(&point, &circle);
    query.options_mut().set_difference_step(1.0e-4).unwrap();
    query.options_mut().max_iterations = 30;
    assert_eq!(query.options().difference_step(), 1.0e-4);

    let min = query
        .min_distance(0.0, 8.0, &Vector3::y(), &Vector3::zeros())
        .unwrap();
    assert_relative_eq!(min.contact_time, 5.0, epsilon = 1.0e-6);
}
