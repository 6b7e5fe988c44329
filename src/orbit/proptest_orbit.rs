//! Property-based tests for orbit curve generation using proptest.
//!
//! These tests verify that sampled curves keep their geometric properties
//! across the whole range of closed-orbit elements.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::dash::{dash_segments, line_distances};
use super::{OrbitalElements, generate_orbit};

fn elliptical_elements() -> impl Strategy<Value = OrbitalElements> {
    (
        0.1f64..100.0,
        0.0f64..0.95,
        -360.0f64..360.0,
        -360.0f64..360.0,
        -360.0f64..360.0,
    )
        .prop_map(|(a, e, i, node, peri)| OrbitalElements::new(a, e, i, node, peri))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The rotation is rigid: each point's distance from the focus equals the
    /// in-plane conic radius at its true anomaly.
    #[test]
    fn prop_rotation_preserves_radius(
        elements in elliptical_elements(),
        segments in 1u32..256,
    ) {
        let points = generate_orbit(&elements, segments);
        prop_assert_eq!(points.len(), segments as usize + 1);

        for (j, point) in points.iter().enumerate() {
            let theta = j as f64 / segments as f64 * TAU;
            let expected = elements.radius_at(theta);
            let error = (point.length() - expected).abs() / expected;
            prop_assert!(
                error < 1e-9,
                "radius mismatch at j={}: got {}, expected {}",
                j, point.length(), expected
            );
        }
    }

    /// Circular orbits sit at distance `a` regardless of orientation.
    #[test]
    fn prop_circular_orbit_has_constant_radius(
        a in 0.1f64..100.0,
        i in -360.0f64..360.0,
        node in -360.0f64..360.0,
        peri in -360.0f64..360.0,
    ) {
        let elements = OrbitalElements::new(a, 0.0, i, node, peri);
        for point in generate_orbit(&elements, 64) {
            prop_assert!((point.length() - a).abs() < 1e-9 * a);
        }
    }

    /// Orbits with zero inclination and node stay in the reference plane.
    #[test]
    fn prop_uninclined_orbit_is_planar(
        a in 0.1f64..100.0,
        e in 0.0f64..0.95,
        peri in -360.0f64..360.0,
    ) {
        let elements = OrbitalElements::new(a, e, 0.0, 0.0, peri);
        for point in generate_orbit(&elements, 64) {
            prop_assert!(point.z.abs() < 1e-12 * a.max(1.0));
        }
    }

    /// First and last samples coincide for any resolution.
    #[test]
    fn prop_curve_is_closed(
        elements in elliptical_elements(),
        segments in 1u32..512,
    ) {
        let points = generate_orbit(&elements, segments);
        let (first, last) = (points[0], points[points.len() - 1]);
        prop_assert!(
            first.distance(last) < 1e-9 * elements.semi_major_axis,
            "curve not closed: {:?} vs {:?}", first, last
        );
    }

    /// Doubling the resolution keeps every original sample on the curve.
    #[test]
    fn prop_refinement_keeps_samples(
        elements in elliptical_elements(),
        segments in 1u32..128,
    ) {
        let coarse = generate_orbit(&elements, segments);
        let fine = generate_orbit(&elements, segments * 2);
        prop_assert!(fine.len() > coarse.len());

        for (j, point) in coarse.iter().enumerate() {
            let error = point.distance(fine[j * 2]);
            prop_assert!(error < 1e-9 * elements.semi_major_axis);
        }
    }

    /// Dash pieces never exceed the dash length and cover no more ink than the line.
    #[test]
    fn prop_dashes_are_bounded(
        elements in elliptical_elements(),
        dash in 0.01f64..1.0,
        gap in 0.01f64..1.0,
    ) {
        let points = generate_orbit(&elements, 128);
        let total = *line_distances(&points).last().unwrap();
        let pieces = dash_segments(&points, dash, gap);

        let mut ink = 0.0;
        for [start, end] in &pieces {
            let length = start.distance(*end);
            prop_assert!(length <= dash + 1e-9);
            ink += length;
        }
        prop_assert!(ink <= total + 1e-6);
    }
}
