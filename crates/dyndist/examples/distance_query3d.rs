#[macro_use]
extern crate approx; // for relative_eq!

use dyndist::math::{Point3, Vector3};
use dyndist::query::{DistPointCircle3, DistanceQuery};
use dyndist::shape::Circle3;

fn main() {
    let circle = Circle3::new(Point3::new(0.0, 0.0, 5.0), Vector3::z_axis(), 2.0);
    let point_in_plane = Point3::new(3.0, 0.0, 5.0);
    let point_on_axis = Point3::origin();

    let in_plane = DistPointCircle3::new(&point_in_plane, &circle).separation();
    let on_axis = DistPointCircle3::new(&point_on_axis, &circle).separation();

    assert!(relative_eq!(in_plane.distance(), 1.0));
    assert!(relative_eq!(in_plane.point1, Point3::new(2.0, 0.0, 5.0)));

    // Every point of the circle is equally close to a point on its axis.
    assert!(on_axis.has_multiple_closest_points1);
    assert!(relative_eq!(on_axis.distance(), 29.0f64.sqrt()));
}
