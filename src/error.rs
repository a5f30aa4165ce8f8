use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported when building a [`Registry`](crate::registry::Registry) or stepping it with
/// an [`Engine`](crate::engine::Engine).
///
/// None of these leave a registry half-updated: a failed step reports its error before any body is
/// touched.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    /// A body was given a mass that is zero, negative or not finite.
    #[error("invalid mass {mass}: bodies must have a finite, strictly positive mass")]
    InvalidMass {
        /// The rejected mass, in kilograms.
        mass: f64,
    },

    /// Two distinct bodies occupy the same position, or are so close that their acceleration is
    /// not finite, so the force between them is undefined.
    #[error("bodies {first} and {second} are too close for their attraction to be computed")]
    DegenerateSeparation {
        /// Index of the first body of the pair.
        first: usize,
        /// Index of the second body of the pair, always greater than `first`.
        second: usize,
    },

    /// A time step that is zero, negative or not finite.
    #[error("invalid time step {dt}: must be finite and strictly positive")]
    InvalidStep {
        /// The rejected step, in seconds.
        dt: f64,
    },

    /// A run duration that is negative or not finite.
    #[error("invalid duration {duration}: must be finite and non-negative")]
    InvalidDuration {
        /// The rejected duration, in seconds.
        duration: f64,
    },

    /// An index past the end of the registry.
    #[error("no body at index {index} (registry holds {count})")]
    UnknownBody {
        /// The requested index.
        index: usize,
        /// Number of bodies in the registry.
        count: usize,
    },
}
