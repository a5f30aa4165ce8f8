use crate::{trail::DEFAULT_TRAIL_LENGTH, units::G};

/// Configuration of an [`Engine`](crate::engine::Engine) and of the [`Trails`](crate::trail::Trails)
/// recorded alongside it.
///
/// ```
/// # use orbits::prelude::*;
/// // Normalised units, where G = 1.
/// let config = Config::new().with_gravitational_constant(1.0).with_trail_length(64);
///
/// assert_eq!(config.gravitational_constant, 1.0);
/// assert_eq!(config.trail_length, 64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Gravitational constant used for every interaction. Defaults to [`G`] in SI units.
    pub gravitational_constant: f64,
    /// Number of past positions kept per body by [`Trails`](crate::trail::Trails).
    pub trail_length: usize,
}

impl Config {
    /// Creates the default configuration.
    #[inline]
    pub const fn new() -> Self {
        Self {
            gravitational_constant: G,
            trail_length: DEFAULT_TRAIL_LENGTH,
        }
    }

    /// Returns this configuration with the given gravitational constant.
    #[inline]
    pub const fn with_gravitational_constant(self, gravitational_constant: f64) -> Self {
        Self {
            gravitational_constant,
            ..self
        }
    }

    /// Returns this configuration with the given trail length.
    #[inline]
    pub const fn with_trail_length(self, trail_length: usize) -> Self {
        Self {
            trail_length,
            ..self
        }
    }
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
