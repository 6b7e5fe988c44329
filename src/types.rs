//! Shared constants and small value types.

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Scene units are astronomical units; the Sun's radius expressed in AU.
pub const SUN_RADIUS_AU: f64 = 0.004649184;

/// Convert degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

/// Split a packed `0xRRGGBB` color into normalized sRGB channels.
pub fn hex_to_srgb(hex: u32) -> [f32; 3] {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    [r, g, b]
}
