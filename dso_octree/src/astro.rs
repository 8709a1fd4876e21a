//! Magnitude/distance conversions.
//!
//! Distances are in light years. Apparent and absolute magnitudes coincide at
//! 10 parsecs.

/// Light years per parsec.
pub const LY_PER_PARSEC: f64 = 3.26167;

/// Distance (light years) below which an object's apparent magnitude is taken
/// to be its absolute magnitude during visibility culling.
pub const NEAR_FIELD_DISTANCE: f64 = 32.6167;

/// Apparent magnitude of an object of absolute magnitude `abs_mag` seen from
/// `lyrs` light years away.
#[inline]
pub fn abs_to_app_mag(abs_mag: f64, lyrs: f64) -> f64 {
    abs_mag - 5.0 + 5.0 * (lyrs / LY_PER_PARSEC).log10()
}

/// Absolute magnitude of an object that has apparent magnitude `app_mag`
/// when seen from `lyrs` light years away.
#[inline]
pub fn app_to_abs_mag(app_mag: f64, lyrs: f64) -> f64 {
    app_mag + 5.0 - 5.0 * (lyrs / LY_PER_PARSEC).log10()
}

#[cfg(test)]
#[path = "astro_tests.rs"]
mod tests;
