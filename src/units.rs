/// Gravitational constant, in m³·kg⁻¹·s⁻².
pub const G: f64 = 6.67408e-11;

/// Length of a month, in seconds (an average month of 30.4166 days).
pub const SECONDS_PER_MONTH: f64 = 2.628e6;

/// Mass of the sun, in kilograms.
pub const SUN_MASS: f64 = 1.989e30;

/// Mass of the earth, in kilograms.
pub const EARTH_MASS: f64 = 5.972e24;

/// Mass of jupiter, in kilograms.
pub const JUPITER_MASS: f64 = 1.8982e27;

/// Astronomical unit, in meters.
pub const AU: f64 = 1.496e11;

/// Converts a duration in months to seconds.
///
/// ```
/// # use orbits::units::*;
/// assert_eq!(months_to_seconds(2.0), 2.0 * SECONDS_PER_MONTH);
/// ```
#[inline]
pub fn months_to_seconds(months: f64) -> f64 {
    months * SECONDS_PER_MONTH
}

/// Converts a duration in months to a whole number of seconds, discarding the fractional part.
#[inline]
pub fn months_to_whole_seconds(months: f64) -> f64 {
    months_to_seconds(months).trunc()
}
