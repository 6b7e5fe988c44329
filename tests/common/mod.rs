//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;
use std::f64::consts::TAU;

/// True anomaly of sample `j` out of `segments`.
pub fn sample_anomaly(j: usize, segments: u32) -> f64 {
    j as f64 / segments as f64 * TAU
}

/// Conic radius `a(1-e²)/(1+e·cos θ)`.
pub fn conic_radius(a: f64, e: f64, theta: f64) -> f64 {
    a * (1.0 - e * e) / (1.0 + e * theta.cos())
}

/// Assert two points agree to within `tolerance`.
pub fn assert_point_near(got: DVec3, want: DVec3, tolerance: f64) {
    assert!(
        got.distance(want) <= tolerance,
        "expected {:?}, got {:?} (distance {})",
        want,
        got,
        got.distance(want)
    );
}
