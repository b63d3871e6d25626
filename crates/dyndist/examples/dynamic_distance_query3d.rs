#[macro_use]
extern crate approx; // for relative_eq!

use dyndist::math::{Point3, Vector3};
use dyndist::query::{DistPointCircle3, DistanceOptions, DistanceQuery};
use dyndist::shape::Circle3;

fn main() {
    let circle = Circle3::new(Point3::new(0.0, 0.0, 0.0), Vector3::z_axis(), 1.0);
    let point = Point3::new(-5.0, 3.0, 0.0);
    let vel_point = Vector3::new(1.0, 0.0, 0.0);
    let vel_circle = Vector3::zeros();

    let options = DistanceOptions::default()
        .with_max_iterations(16)
        .with_difference_step(1.0e-4)
        .unwrap();
    let query = DistPointCircle3::with_options(&point, &circle, options);

    // The point is closest to the circle when it crosses the y axis, at t = 5.
    let min = query
        .min_distance(0.0, 10.0, &vel_point, &vel_circle)
        .unwrap();

    println!(
        "Minimum distance {} reached at t = {} ({:?}).",
        min.value, min.contact_time, min.status
    );
    assert!(relative_eq!(min.contact_time, 5.0, epsilon = 1.0e-6));
    assert!(relative_eq!(min.value, 2.0, epsilon = 1.0e-9));
    assert!(relative_eq!(
        min.separation.point1,
        Point3::new(0.0, 1.0, 0.0),
        epsilon = 1.0e-6
    ));

    // Reversed intervals are rejected.
    assert!(query
        .min_distance(10.0, 0.0, &vel_point, &vel_circle)
        .is_err());
}
