//! End-to-end checks of the library's documented numeric properties.

use std::f64::consts::{FRAC_PI_2, PI};

use rand::rngs::StdRng;
use rand::SeedableRng;

use vec_engine::coerce;
use vec_engine::random::{random_3d_legacy_with, random_3d_with};
use vec_engine::{angle_between, lerp, Vec3};

const EPS: f64 = 1e-12;

fn assert_close(a: Vec3, b: Vec3) {
    assert!(
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS && (a.z - b.z).abs() < EPS,
        "{:?} != {:?}",
        a,
        b
    );
}

#[test]
fn copies_are_independent() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    let c = v;
    v.add(Vec3::new(10.0, 10.0, 10.0));
    assert_eq!(c, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(v, Vec3::new(11.0, 12.0, 13.0));
}

#[test]
fn add_then_sub_is_identity() {
    let v = Vec3::new(0.1, -2.5, 7.0);
    let w = Vec3::new(3.25, 4.5, -1.0);
    assert_close((v + w) - w, v);
}

#[test]
fn mag_sq_is_mag_squared() {
    for v in [
        Vec3::new(3.0, 4.0, 0.0),
        Vec3::new(-1.5, 2.25, 0.125),
        Vec3::new(0.0, 0.0, 9.0),
    ] {
        assert!((v.mag_sq() - v.mag() * v.mag()).abs() < EPS);
    }
}

#[test]
fn normalize_yields_unit_length() {
    let mut v = Vec3::new(-2.0, 5.0, 0.5);
    v.normalize();
    assert!((v.mag() - 1.0).abs() < EPS);
}

#[test]
fn dot_is_symmetric() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let w = Vec3::new(-4.0, 0.5, 2.0);
    assert_eq!(v.dot(&w), w.dot(&v));
}

#[test]
fn cross_is_anti_commutative() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let w = Vec3::new(-4.0, 0.5, 2.0);
    assert_close(v.cross(&w), -w.cross(&v));
}

#[test]
fn lerp_endpoints_are_exact() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let w = Vec3::new(-4.0, 0.5, 2.0);
    assert_eq!(lerp(v, w, 0.0), v);
    assert_eq!(lerp(v, w, 1.0), w);
}

#[test]
fn headings_of_axis_vectors() {
    assert_eq!(Vec3::new(1.0, 0.0, 0.0).heading(), 0.0);
    assert!((Vec3::new(0.0, 1.0, 0.0).heading() - FRAC_PI_2).abs() < EPS);
}

#[test]
fn angle_between_equal_and_opposite() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    // corrected clamp: equal → 0, opposite → π
    assert!(angle_between(v, v).abs() < 1e-7);
    assert!((angle_between(v, -v) - PI).abs() < 1e-7);
}

#[test]
fn from_angle_axis_cases() {
    assert_eq!(Vec3::from_angle(0.0), Vec3::new(1.0, 0.0, 0.0));
    let v = Vec3::from_angle(FRAC_PI_2);
    assert!(v.x.abs() < EPS);
    assert!((v.y - 1.0).abs() < EPS);
}

#[test]
fn concrete_scenario() {
    assert_eq!(Vec3::new(3.0, 4.0, 0.0).mag(), 5.0);

    let mut n = Vec3::new(3.0, 4.0, 0.0);
    n.normalize();
    assert_close(n, Vec3::new(0.6, 0.8, 0.0));

    assert_eq!(Vec3::new_2d(1.0, 0.0).dot(&Vec3::new_2d(0.0, 1.0)), 0.0);
    assert_eq!(
        Vec3::new_2d(1.0, 2.0) + Vec3::new_2d(3.0, 4.0),
        Vec3::new_2d(4.0, 6.0)
    );
}

#[test]
fn string_scalar_behaves_like_the_double() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(coerce::scaled(v, "2.5"), v * 2.5);
    assert_eq!(coerce::scaled(v, "not a number"), v * 0.0);
    assert_eq!(
        coerce::lerp_coerced(v, Vec3::zero(), "0.5"),
        lerp(v, Vec3::zero(), 0.5)
    );
}

#[test]
fn seeded_samplers_unit_vs_legacy_length() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut legacy_off_unit = false;
    for _ in 0..50 {
        let v = random_3d_with(&mut rng);
        assert!((v.mag() - 1.0).abs() < EPS);
        let l = random_3d_legacy_with(&mut rng);
        if (l.mag() - 1.0).abs() > 1e-3 {
            legacy_off_unit = true;
        }
    }
    assert!(legacy_off_unit, "legacy sampler should not stay unit length");
}
