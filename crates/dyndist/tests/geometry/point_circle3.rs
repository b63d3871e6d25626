use approx::assert_relative_eq;
use dyndist::math::{Point3, Unit, Vector3};
use dyndist::na;
use dyndist::query::{DistPointCircle3, DistanceQuery};
use dyndist::shape::Circle3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_circle(rng: &mut StdRng) -> Circle3<f32> {
    let center = Point3::new(
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
    );
    let normal = Unit::new_normalize(Vector3::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(0.1..1.0),
    ));
    Circle3::new(center, normal, rng.gen_range(0.1..5.0))
}

fn random_point(rng: &mut StdRng) -> Point3<f32> {
    Point3::new(
        rng.gen_range(-20.0..20.0),
        rng.gen_range(-20.0..20.0),
        rng.gen_range(-20.0..20.0),
    )
}

#[test]
fn squared_distance_is_consistent() {
    let mut rng = StdRng::seed_from_u64(0);

    for _ in 0..1000 {
        let circle = random_circle(&mut rng);
        let point = random_point(&mut rng);
        let query = DistPointCircle3::new(&point, &circle);
        let dist = query.distance();

        assert_relative_eq!(
            query.distance_squared(),
            dist * dist,
            max_relative = 1.0e-5,
            epsilon = 1.0e-6
        );
    }
}

#[test]
fn static_query_equals_dynamic_query_at_rest() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..100 {
        let circle = random_circle(&mut rng);
        let point = random_point(&mut rng);
        let query = DistPointCircle3::new(&point, &circle);
        let zero = Vector3::zeros();

        assert_eq!(query.distance_at(0.0, &zero, &zero), query.distance());
        assert_eq!(
            query.distance_squared_at(0.0, &zero, &zero),
            query.distance_squared()
        );
    }
}

#[test]
fn closest_point_lies_on_the_circle() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..200 {
        let circle = random_circle(&mut rng);
        let point = random_point(&mut rng);
        let sep = DistPointCircle3::new(&point, &circle).separation();

        assert!(!sep.has_multiple_closest_points1);
        let offset = sep.point1 - circle.center;
        assert_relative_eq!(offset.norm(), circle.radius, max_relative = 1.0e-4);
        assert_relative_eq!(circle.normal.dot(&offset), 0.0, epsilon = 1.0e-4);
    }
}

#[test]
fn no_sampled_circle_point_is_closer() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..50 {
        let circle = random_circle(&mut rng);
        let circle = Circle3::new(
            circle.center.cast::<f64>(),
            Unit::new_normalize(circle.normal.into_inner().cast::<f64>()),
            circle.radius as f64,
        );
        let point = random_point(&mut rng).cast::<f64>();
        let dist = DistPointCircle3::new(&point, &circle).distance();
        let reference = Vector3::new(1.0, 0.3, -0.2);

        for i in 0..360 {
            let angle = (i as f64).to_radians();
            let sample = circle.point_at_angle(&reference, angle).unwrap();
            assert!(na::distance(&point, &sample) >= dist - 1.0e-9);
        }
    }
}

#[test]
fn point_on_the_circle_axis() {
    let radius = 2.0f64;

    for height in [-3.0, 0.0, 0.5, 5.0] {
        let circle = Circle3::new(Point3::new(1.0, -1.0, 2.0), Vector3::y_axis(), radius);
        let point = circle.center + Vector3::y() * height;
        let query = DistPointCircle3::new(&point, &circle);
        let sep = query.separation();

        assert!(sep.has_multiple_closest_points1);
        assert!(!sep.has_multiple_closest_points0);
        assert_eq!(sep.point0, point);
        assert_relative_eq!(
            query.distance(),
            (height * height + radius * radius).sqrt()
        );
    }
}

#[test]
fn documented_scenario() {
    let circle = Circle3::new(Point3::new(0.0, 0.0, 5.0), Vector3::z_axis(), 2.0);

    let origin = Point3::origin();
    let on_axis = DistPointCircle3::new(&origin, &circle);
    assert!(on_axis.separation().has_multiple_closest_points1);
    assert_relative_eq!(on_axis.distance(), (25.0f64 + 4.0).sqrt());

    let in_plane = Point3::new(3.0, 0.0, 5.0);
    let query = DistPointCircle3::new(&in_plane, &circle);
    let sep = query.separation();
    assert_relative_eq!(query.distance(), 1.0);
    assert!(!sep.has_multiple_closest_points1);
    assert_relative_eq!(sep.point1, Point3::new(2.0, 0.0, 5.0));
}
