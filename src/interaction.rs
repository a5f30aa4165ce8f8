use glam::DVec2;

use crate::{
    body::{Mass, Position},
    units::G,
};

/// Pair of objects between which an interaction is computed.
///
/// The first element is conventionally the affected particle and the second one the affecting
/// particle.
#[derive(Clone, Copy, Debug)]
pub struct Between<P1, P2>(pub P1, pub P2);

/// Trait to compute an interaction between particles.
///
/// # Example
///
/// ```
/// # use orbits::prelude::*;
/// use glam::DVec2;
///
/// let sun = (DVec2::ZERO, 4.0);
/// let planet = (DVec2::new(2.0, 0.0), 1.0);
///
/// let mut acceleration = Acceleration::new(1.0);
///
/// assert_eq!(acceleration.compute(Between(&planet, &sun)), Some(DVec2::new(-1.0, 0.0)));
/// assert_eq!(acceleration.compute(Between(&planet, &planet)), None);
/// ```
pub trait Interaction<Storage> {
    /// The computed interaction.
    type Output;

    /// Returns the interaction between the particles in the storage.
    fn compute(&mut self, storage: Storage) -> Self::Output;
}

/// Trait to compute the interactions two distinct particles exert on each other from a single
/// evaluation. Such implementations are used by
/// [`BruteForcePairs`](crate::compute_method::sequential::BruteForcePairs).
pub trait InteractionPair<P> {
    /// The computed interactions, for the first then the second particle of the pair.
    type Output;

    /// Returns the computed interactions between two distinct particles.
    fn compute_pair(&mut self, pair: Between<P, P>) -> Self::Output;
}

/// [`Interaction`] representing the gravitational acceleration between two point-masses using
/// Newton's law of universal gravitation.
///
/// The acceleration is undefined for particles sharing their position, or too close for it to be
/// represented, in which case `None` is computed instead of a non-finite vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Acceleration {
    /// Gravitational constant.
    pub g: f64,
}

impl Acceleration {
    /// Creates a new [`Acceleration`] with the given gravitational constant.
    #[inline]
    pub const fn new(g: f64) -> Self {
        Self { g }
    }

    /// Returns `r / |r|³` for the separation `r`, or `None` if `|r|³` is zero.
    #[inline]
    fn inverse_square(r: DVec2) -> Option<DVec2> {
        let distance = r.length();
        let r3 = distance * distance * distance;

        (r3 != 0.0).then(|| r / r3)
    }
}

impl Default for Acceleration {
    #[inline]
    fn default() -> Self {
        Self::new(G)
    }
}

impl<P1, P2> Interaction<Between<&P1, &P2>> for Acceleration
where
    P1: Position<Vector = DVec2> + ?Sized,
    P2: Position<Vector = DVec2> + Mass<Scalar = f64> + ?Sized,
{
    type Output = Option<DVec2>;

    #[inline]
    fn compute(&mut self, Between(affected, affecting): Between<&P1, &P2>) -> Self::Output {
        let f = Self::inverse_square(affecting.position() - affected.position())?;

        Some(f * (self.g * affecting.mass())).filter(|a| a.is_finite())
    }
}

impl<P> InteractionPair<&P> for Acceleration
where
    P: Position<Vector = DVec2> + Mass<Scalar = f64> + ?Sized,
{
    type Output = Option<(DVec2, DVec2)>;

    #[inline]
    fn compute_pair(&mut self, Between(p1, p2): Between<&P, &P>) -> Self::Output {
        let f = Self::inverse_square(p2.position() - p1.position())?;

        let (a1, a2) = (f * (self.g * p2.mass()), -f * (self.g * p1.mass()));

        (a1.is_finite() && a2.is_finite()).then_some((a1, a2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pair_is_equal_and_opposite() {
        let p1 = (DVec2::new(1.0, -2.0), 3.0);
        let p2 = (DVec2::new(-4.0, 5.0), 7.0);

        let mut acceleration = Acceleration::new(2.0);
        let (a1, a2) = acceleration.compute_pair(Between(&p1, &p2)).unwrap();

        assert_eq!(acceleration.compute(Between(&p1, &p2)), Some(a1));
        assert_relative_eq!((a1 * p1.1).x, -(a2 * p2.1).x, max_relative = 1e-15);
        assert_relative_eq!((a1 * p1.1).y, -(a2 * p2.1).y, max_relative = 1e-15);
    }

    #[test]
    fn inverse_square_law() {
        let sun = (DVec2::ZERO, 1.0);
        let mut acceleration = Acceleration::new(1.0);

        let near = acceleration.compute(Between(&DVec2::new(0.0, 1.0), &sun));
        let far = acceleration.compute(Between(&DVec2::new(0.0, 2.0), &sun));

        assert_eq!(near, Some(DVec2::new(0.0, -1.0)));
        assert_eq!(far, Some(DVec2::new(0.0, -0.25)));
    }

    #[test]
    fn coincident_particles_are_undefined() {
        let p = (DVec2::new(3.0, 3.0), 1.0);

        assert_eq!(Acceleration::default().compute_pair(Between(&p, &p)), None);
    }

    #[test]
    fn overflowing_acceleration_is_undefined() {
        let p1 = (DVec2::ZERO, 1e300);
        let p2 = (DVec2::new(1e-10, 0.0), 1e300);
        let mut acceleration = Acceleration::default();

        assert_eq!(acceleration.compute(Between(&p1, &p2)), None);
        assert_eq!(acceleration.compute_pair(Between(&p1, &p2)), None);
    }
}
