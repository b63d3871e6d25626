#[macro_use]
extern crate approx; // for relative_eq!

use dyndist::math::{Point2, Vector2};
use dyndist::query::{DistPointSegment, DistPointSphere, DistanceQuery};
use dyndist::shape::{Segment, Sphere};

fn main() {
    let segment = Segment::new(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0));
    let disk = Sphere::new(Point2::new(0.0, 4.0), 1.0);
    let point = Point2::new(-5.0, 2.0);
    let vel = Vector2::new(1.0, 0.0);

    let to_segment = DistPointSegment::new(&point, &segment);
    let to_disk = DistPointSphere::new(&point, &disk);

    assert!(relative_eq!(to_segment.distance(), 20.0f64.sqrt()));
    assert!(relative_eq!(to_disk.distance(), 29.0f64.sqrt() - 1.0));

    let min_segment = to_segment
        .min_distance(0.0, 10.0, &vel, &Vector2::zeros())
        .unwrap();
    let min_disk = to_disk
        .min_distance(0.0, 10.0, &vel, &Vector2::zeros())
        .unwrap();

    assert!(relative_eq!(min_segment.value, 2.0, epsilon = 1.0e-9));
    assert!(relative_eq!(min_disk.value, 1.0, epsilon = 1.0e-9));
    assert!(relative_eq!(min_disk.contact_time, 5.0, epsilon = 1.0e-6));
}
