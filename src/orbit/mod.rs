//! Orbit curve generation from classical orbital elements.
//!
//! Each curve is sampled once at startup as a closed polyline over a full
//! revolution of true anomaly. Nothing here depends on time: the curves are
//! idealized two-body ellipses drawn for illustration.

pub mod dash;

#[cfg(test)]
mod proptest_orbit;

use bevy::math::DVec3;

use crate::types::to_radians;

pub use dash::{dash_segments, line_distances};

/// Classical orbital elements describing an orbit's size, shape and orientation.
///
/// Distances are in scene units (AU), angles in degrees. Values are taken as-is:
/// an eccentricity of 1 or more produces singular or divergent radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis `a`
    pub semi_major_axis: f64,
    /// Eccentricity `e` (0 ≤ e < 1 for a closed ellipse)
    pub eccentricity: f64,
    /// Inclination `i` in degrees
    pub inclination_deg: f64,
    /// Longitude of the ascending node `Ω` in degrees
    pub ascending_node_deg: f64,
    /// Argument of periapsis `ω` in degrees
    pub periapsis_arg_deg: f64,
}

impl OrbitalElements {
    pub const fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination_deg: f64,
        ascending_node_deg: f64,
        periapsis_arg_deg: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination_deg,
            ascending_node_deg,
            periapsis_arg_deg,
        }
    }

    /// Semi-latus rectum `p = a(1 - e²)`.
    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    /// Focal distance at true anomaly `theta` (radians), in the orbital plane.
    pub fn radius_at(&self, theta: f64) -> f64 {
        self.semi_latus_rectum() / (1.0 + self.eccentricity * theta.cos())
    }

    /// The perifocal-to-reference rotation for these elements.
    pub fn rotation(&self) -> PerifocalRotation {
        PerifocalRotation::new(
            self.inclination_deg,
            self.ascending_node_deg,
            self.periapsis_arg_deg,
        )
    }
}

/// 3-1-3 Euler rotation from the orbital plane into the reference frame.
///
/// Rotates by ω about the orbital-plane normal, tilts by i, then rotates by Ω
/// about the reference normal. Only the first two columns are stored because
/// in-plane points have no z component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerifocalRotation {
    /// Image of the periapsis direction
    pub p: DVec3,
    /// Image of the in-plane direction 90° ahead of periapsis
    pub q: DVec3,
}

impl PerifocalRotation {
    /// Build the rotation from angles in degrees.
    pub fn new(inclination_deg: f64, ascending_node_deg: f64, periapsis_arg_deg: f64) -> Self {
        let (sin_i, cos_i) = to_radians(inclination_deg).sin_cos();
        let (sin_node, cos_node) = to_radians(ascending_node_deg).sin_cos();
        let (sin_peri, cos_peri) = to_radians(periapsis_arg_deg).sin_cos();

        let p = DVec3::new(
            cos_peri * cos_node - sin_peri * sin_node * cos_i,
            cos_peri * sin_node + sin_peri * cos_node * cos_i,
            sin_peri * sin_i,
        );
        let q = DVec3::new(
            -(sin_peri * cos_node + cos_peri * sin_node * cos_i),
            cos_peri * cos_node * cos_i - sin_peri * sin_node,
            cos_peri * sin_i,
        );

        Self { p, q }
    }

    /// Map an orbital-plane point `(x_orb, y_orb, 0)` into the reference frame.
    #[inline]
    pub fn apply(&self, x_orb: f64, y_orb: f64) -> DVec3 {
        self.p * x_orb + self.q * y_orb
    }
}

/// Sample an orbit as `segments + 1` points over one full revolution.
///
/// Point `j` sits at true anomaly `θ = (j / segments)·2π`, so the first and
/// last points coincide. No input is validated; `segments == 0` yields one
/// point with NaN coordinates.
pub fn generate_orbit(elements: &OrbitalElements, segments: u32) -> Vec<DVec3> {
    let rotation = elements.rotation();

    (0..=segments)
        .map(|j| {
            let theta = (j as f64 / segments as f64) * std::f64::consts::TAU;
            let r = elements.radius_at(theta);
            let (sin_t, cos_t) = theta.sin_cos();
            rotation.apply(r * cos_t, r * sin_t)
        })
        .collect()
}

/// A sampled orbit together with how it should be stroked.
#[derive(Clone, Debug)]
pub struct OrbitCurve {
    pub points: Vec<DVec3>,
    pub dashed: bool,
}

impl OrbitCurve {
    pub fn generate(elements: &OrbitalElements, segments: u32, dashed: bool) -> Self {
        Self {
            points: generate_orbit(elements, segments),
            dashed,
        }
    }

    /// Whether the polyline returns to its starting point.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.distance(*last) <= tolerance,
            _ => false,
        }
    }
}
