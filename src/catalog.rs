//! Fixed catalog of bodies whose orbits are drawn.
//!
//! Planets use J2000 mean elements and are stroked dashed; the minor bodies
//! are a handful of outer-system objects drawn as solid green curves.

use std::collections::HashSet;
use std::fmt;

use crate::orbit::OrbitalElements;

/// Stable identifier tying an orbit to its checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrbitKey(pub &'static str);

impl OrbitKey {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for OrbitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Grouping used by the toggle panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Planet,
    MinorBody,
}

impl BodyKind {
    pub fn heading(&self) -> &'static str {
        match self {
            BodyKind::Planet => "Planets",
            BodyKind::MinorBody => "Minor bodies",
        }
    }
}

/// How an orbit curve is stroked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrbitStyle {
    /// Packed `0xRRGGBB` color
    pub color: u32,
    pub dashed: bool,
}

/// One drawable orbit: its key, display label, elements and style.
#[derive(Clone, Copy, Debug)]
pub struct CatalogEntry {
    pub key: OrbitKey,
    pub label: &'static str,
    pub kind: BodyKind,
    pub elements: OrbitalElements,
    pub style: OrbitStyle,
}

/// Errors raised while validating the catalog.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("duplicate orbit key {0}")]
    DuplicateKey(OrbitKey),
}

/// Color of the Sun sphere.
pub const SUN_COLOR: u32 = 0xffff00;

/// Color shared by every minor body orbit.
pub const MINOR_BODY_COLOR: u32 = 0x00ff00;

const fn planet(
    key: &'static str,
    label: &'static str,
    elements: OrbitalElements,
    color: u32,
) -> CatalogEntry {
    CatalogEntry {
        key: OrbitKey(key),
        label,
        kind: BodyKind::Planet,
        elements,
        style: OrbitStyle {
            color,
            dashed: true,
        },
    }
}

const fn minor_body(key: &'static str, label: &'static str, elements: OrbitalElements) -> CatalogEntry {
    CatalogEntry {
        key: OrbitKey(key),
        label,
        kind: BodyKind::MinorBody,
        elements,
        style: OrbitStyle {
            color: MINOR_BODY_COLOR,
            dashed: false,
        },
    }
}

/// All orbits in display order.
pub const SOLAR_SYSTEM: &[CatalogEntry] = &[
    planet(
        "mercury",
        "Mercury",
        OrbitalElements::new(0.38709893, 0.20563069, 7.00487, 48.33167, 77.45645),
        0xb1b1b1,
    ),
    planet(
        "venus",
        "Venus",
        OrbitalElements::new(0.72333199, 0.00677323, 3.39471, 76.68069, 131.53298),
        0xeedc82,
    ),
    planet(
        "earth",
        "Earth",
        OrbitalElements::new(1.0, 0.0167, 0.0, 348.73936, 102.94719),
        0x0000ff,
    ),
    planet(
        "mars",
        "Mars",
        OrbitalElements::new(1.523679, 0.0934, 1.850, 49.558, 336.04084),
        0xc1440e,
    ),
    planet(
        "jupiter",
        "Jupiter",
        OrbitalElements::new(5.20336301, 0.04839266, 1.30530, 100.55615, 14.75385),
        0xd1c185,
    ),
    planet(
        "saturn",
        "Saturn",
        OrbitalElements::new(9.53707032, 0.05415060, 2.48446, 113.71504, 92.43194),
        0xfdd9b5,
    ),
    planet(
        "uranus",
        "Uranus",
        OrbitalElements::new(19.19126393, 0.04716771, 0.76986, 74.22988, 170.96424),
        0x7fffd4,
    ),
    planet(
        "neptune",
        "Neptune",
        OrbitalElements::new(30.06896348, 0.00858587, 1.76917, 131.72169, 44.97135),
        0x4169e1,
    ),
    minor_body(
        "mp-697402",
        "(697402)",
        OrbitalElements::new(3.2293354, 0.0895422, 8.94157, 190.52881, 78.85784),
    ),
    minor_body(
        "2017-fg226",
        "2017 FG226",
        OrbitalElements::new(45.8646576, 0.1835635, 11.40397, 208.46209, 291.97561),
    ),
    minor_body(
        "2017-ac64",
        "2017 AC64",
        OrbitalElements::new(75.6113218, 0.4646029, 28.06481, 312.84076, 150.19920),
    ),
    minor_body(
        "2017-dw159",
        "2017 DW159",
        OrbitalElements::new(28.9428103, 0.2502867, 29.56769, 165.66725, 177.04690),
    ),
    minor_body(
        "2017-bm230",
        "2017 BM230",
        OrbitalElements::new(5.2307477, 0.0676544, 34.29463, 159.35124, 166.66665),
    ),
    minor_body(
        "2017-ad62",
        "2017 AD62",
        OrbitalElements::new(41.5441927, 0.0817914, 23.64737, 307.69251, 309.11937),
    ),
    minor_body(
        "2017-dk163",
        "2017 DK163",
        OrbitalElements::new(68.2115976, 0.4643996, 11.60015, 285.33907, 307.30210),
    ),
    minor_body(
        "2017-ee52",
        "2017 EE52",
        OrbitalElements::new(45.7166719, 0.1041076, 6.18180, 109.26569, 120.03861),
    ),
    minor_body(
        "2017-ev51",
        "2017 EV51",
        OrbitalElements::new(44.3949376, 0.1813485, 20.54720, 175.60350, 111.92644),
    ),
];

/// Check that every key appears once.
pub fn validate(entries: &[CatalogEntry]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.key) {
            return Err(CatalogError::DuplicateKey(entry.key));
        }
    }
    Ok(())
}
