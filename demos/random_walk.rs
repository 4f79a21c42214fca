use vec_engine::random::random_2d;
use vec_engine::{Rounded, Vec3};

fn main() {
    // Accumulate random unit steps, keeping speed under a cap.
    let mut pos = Vec3::zero();
    let mut vel = Vec3::zero();

    for step in 0..20 {
        vel.add(random_2d());
        vel.limit(2.0);
        pos.add(vel);
        println!(
            "step {:2}: pos = {}  |v| = {:.3}",
            step,
            Rounded::new(&pos, 2),
            vel.mag()
        );
    }

    println!("net distance from origin: {:.3}", pos.mag());
}
