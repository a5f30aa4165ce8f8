use glam::DVec2;
use log::warn;

use crate::error::{Error, Result};

/// Trait for types that can be located in space.
pub trait Position {
    /// The type used to represent the position.
    type Vector;

    /// Returns the position of a particle.
    fn position(&self) -> Self::Vector;
}

/// Trait for an object that defines a mass.
///
/// The gravitational constant is not part of the particle: the
/// [`Acceleration`](crate::interaction::Acceleration) interaction multiplies the mass by it.
pub trait Mass {
    /// The scalar type used to represent the mass of the particle.
    type Scalar;

    /// Returns the mass of the particle.
    fn mass(&self) -> Self::Scalar;
}

impl Position for DVec2 {
    type Vector = DVec2;

    #[inline]
    fn position(&self) -> Self::Vector {
        *self
    }
}

impl<V, S> Position for (V, S)
where
    V: Clone,
{
    type Vector = V;

    #[inline]
    fn position(&self) -> Self::Vector {
        self.0.clone()
    }
}

impl<V, S> Mass for (V, S)
where
    S: Clone,
{
    type Scalar = S;

    #[inline]
    fn mass(&self) -> Self::Scalar {
        self.1.clone()
    }
}

/// A point mass moving in the plane.
///
/// Positions are in meters, velocities in meters per second and masses in kilograms. The mass is
/// only reachable through [`Mass::mass`] and [`Body::set_mass`] so that it always stays strictly
/// positive.
///
/// A body can be anchored with [`Body::anchored`]: it still attracts every other body but its own
/// velocity and position are never updated, which is how a sun fixed at the origin is modelled.
///
/// ```
/// # use orbits::prelude::*;
/// # use glam::DVec2;
/// let sun = Body::new(DVec2::ZERO, DVec2::ZERO, orbits::units::SUN_MASS)?
///     .with_name("Sun")
///     .anchored();
///
/// assert!(sun.is_fixed());
/// assert_eq!(sun.name(), Some("Sun"));
/// assert!(Body::new(DVec2::ZERO, DVec2::ZERO, 0.0).is_err());
/// # Ok::<(), orbits::error::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Position of the body.
    pub position: DVec2,
    /// Velocity of the body.
    pub velocity: DVec2,
    mass: f64,
    fixed: bool,
    name: Option<String>,
}

impl Body {
    /// Creates a new free body, failing with [`Error::InvalidMass`] if `mass` is not finite and
    /// strictly positive.
    #[inline]
    pub fn new(position: DVec2, velocity: DVec2, mass: f64) -> Result<Self> {
        Ok(Self {
            position,
            velocity,
            mass: validate_mass(mass)?,
            fixed: false,
            name: None,
        })
    }

    /// Returns this body with the given name.
    #[inline]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Returns this body anchored in place.
    #[inline]
    pub fn anchored(self) -> Self {
        Self {
            fixed: true,
            ..self
        }
    }

    /// Returns the name of this body, if it has one.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` if this body is anchored in place.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Anchors or releases this body.
    #[inline]
    pub fn set_fixed(&mut self, fixed: bool) {
        self.fixed = fixed;
    }

    /// Sets the mass of this body. The previous mass is kept if the new one is rejected.
    #[inline]
    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        self.mass = validate_mass(mass)?;
        Ok(())
    }

    /// Returns the linear momentum of this body.
    #[inline]
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Returns the kinetic energy of this body.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Returns the [standard gravitational parameter] of this body, annotated `µ` (mu).
    ///
    /// `µ = gravitational constant * mass`.
    ///
    /// [standard gravitational parameter]: https://en.wikipedia.org/wiki/Standard_gravitational_parameter
    #[inline]
    pub fn mu(&self, gravitational_constant: f64) -> f64 {
        gravitational_constant * self.mass
    }
}

impl Position for Body {
    type Vector = DVec2;

    #[inline]
    fn position(&self) -> Self::Vector {
        self.position
    }
}

impl Mass for Body {
    type Scalar = f64;

    #[inline]
    fn mass(&self) -> Self::Scalar {
        self.mass
    }
}

fn validate_mass(mass: f64) -> Result<f64> {
    if mass > 0.0 && mass.is_finite() {
        Ok(mass)
    } else {
        warn!("rejected body mass {mass}");
        Err(Error::InvalidMass { mass })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_mass() {
        for mass in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Body::new(DVec2::ZERO, DVec2::ZERO, mass);
            assert!(matches!(result, Err(Error::InvalidMass { .. })), "{mass}");
        }
    }

    #[test]
    fn failed_mass_assignment_keeps_previous_mass() {
        let mut body = Body::new(DVec2::ZERO, DVec2::ZERO, 3.0).unwrap();

        assert_eq!(body.set_mass(-3.0), Err(Error::InvalidMass { mass: -3.0 }));
        assert_eq!(body.mass(), 3.0);

        body.set_mass(8.0).unwrap();
        assert_eq!(body.mass(), 8.0);
    }

    #[test]
    fn derived_quantities() {
        let body = Body::new(DVec2::ONE, DVec2::new(3.0, -4.0), 2.0).unwrap();

        assert_eq!(body.momentum(), DVec2::new(6.0, -8.0));
        assert_eq!(body.kinetic_energy(), 25.0);
        assert_eq!(body.mu(0.5), 1.0);
    }

    #[test]
    fn tuples_are_particles() {
        let particle = (DVec2::new(-1.0, 1.0), 5.0);

        assert_eq!(particle.position(), DVec2::new(-1.0, 1.0));
        assert_eq!(particle.mass(), 5.0);
    }
}
