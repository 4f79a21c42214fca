use std::f64::consts::PI;

use vec_engine::{angle_between, lerp, Rounded, Vec3};

fn main() {
    // Sweep a unit vector around the circle and report its heading.
    let east = Vec3::new_2d(1.0, 0.0);
    for i in 0..8 {
        let angle = i as f64 * PI / 4.0;
        let v = Vec3::from_angle(angle);
        println!(
            "{}  heading = {:6.3} rad  angle to east = {:.3} rad",
            Rounded::new(&v, 2),
            v.heading(),
            angle_between(v, east)
        );
    }

    // Interpolate between two bearings.
    let a = Vec3::from_angle(0.0);
    let b = Vec3::from_angle(PI / 2.0);
    for i in 0..=4 {
        let amt = i as f64 / 4.0;
        println!("lerp {:.2} = {}", amt, Rounded::new(&lerp(a, b, amt), 3));
    }
}
