use glam::DVec2;

use crate::{
    body::{Body, Mass},
    error::{Error, Result},
};

/// Ordered collection of [`Body`]s, identified by their index.
///
/// Indices are stable: bodies can be added while setting up a run but never removed, and an
/// [`Engine`](crate::engine::Engine) step never reorders them.
///
/// ```
/// # use orbits::prelude::*;
/// # use glam::DVec2;
/// let mut registry = Registry::new();
/// let earth = registry.push(Body::new(DVec2::new(0.0, 1.496e11), DVec2::new(3e4, 0.0), 5.972e24)?);
///
/// assert_eq!(registry.count(), 1);
/// assert_eq!(registry.velocity(earth)?, DVec2::new(3e4, 0.0));
///
/// registry.set_velocity(earth, DVec2::ZERO)?;
/// assert!(registry.set_mass(earth, -1.0).is_err());
/// # Ok::<(), orbits::error::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registry {
    bodies: Vec<Body>,
}

impl Registry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Creates an empty registry with space for `capacity` bodies.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
        }
    }

    /// Adds a body and returns its index.
    #[inline]
    pub fn push(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Returns the number of bodies.
    #[inline]
    pub fn count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the number of bodies.
    #[inline]
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Returns `true` if the registry holds no body.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Returns the body at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Returns the bodies in index order.
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[inline]
    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Iterates over the bodies in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    /// Iterates over the positions of the bodies in index order.
    #[inline]
    pub fn positions(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.bodies.iter().map(|body| body.position)
    }

    /// Returns the position of the body at `index`.
    #[inline]
    pub fn position(&self, index: usize) -> Result<DVec2> {
        Ok(self.body(index)?.position)
    }

    /// Returns the velocity of the body at `index`.
    #[inline]
    pub fn velocity(&self, index: usize) -> Result<DVec2> {
        Ok(self.body(index)?.velocity)
    }

    /// Returns the mass of the body at `index`.
    #[inline]
    pub fn mass(&self, index: usize) -> Result<f64> {
        Ok(self.body(index)?.mass())
    }

    /// Sets the position of the body at `index`.
    #[inline]
    pub fn set_position(&mut self, index: usize, position: DVec2) -> Result<()> {
        self.body_mut(index)?.position = position;
        Ok(())
    }

    /// Sets the velocity of the body at `index`.
    #[inline]
    pub fn set_velocity(&mut self, index: usize, velocity: DVec2) -> Result<()> {
        self.body_mut(index)?.velocity = velocity;
        Ok(())
    }

    /// Sets the mass of the body at `index`, failing with [`Error::InvalidMass`] if it is not
    /// finite and strictly positive.
    #[inline]
    pub fn set_mass(&mut self, index: usize, mass: f64) -> Result<()> {
        self.body_mut(index)?.set_mass(mass)
    }

    /// Anchors or releases the body at `index`.
    #[inline]
    pub fn set_fixed(&mut self, index: usize, fixed: bool) -> Result<()> {
        self.body_mut(index)?.set_fixed(fixed);
        Ok(())
    }

    /// Returns the total linear momentum of the bodies.
    pub fn total_momentum(&self) -> DVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Returns the total kinetic energy of the bodies.
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Returns the gravitational potential energy of the bodies.
    ///
    /// Coincident bodies make this value negative infinity.
    pub fn potential_energy(&self, gravitational_constant: f64) -> f64 {
        let mut energy = 0.0;

        for (i, b1) in self.bodies.iter().enumerate() {
            for b2 in &self.bodies[i + 1..] {
                let distance = b1.position.distance(b2.position);
                energy -= gravitational_constant * b1.mass() * b2.mass() / distance;
            }
        }

        energy
    }

    /// Returns the sum of the kinetic and potential energies of the bodies.
    pub fn total_energy(&self, gravitational_constant: f64) -> f64 {
        self.kinetic_energy() + self.potential_energy(gravitational_constant)
    }

    /// Returns the centre of mass of the bodies, or `None` if the registry is empty.
    pub fn center_of_mass(&self) -> Option<DVec2> {
        let total_mass: f64 = self.bodies.iter().map(Body::mass).sum();
        let weighted: DVec2 = self
            .bodies
            .iter()
            .map(|body| body.position * body.mass())
            .sum();

        (!self.is_empty()).then(|| weighted / total_mass)
    }

    #[inline]
    fn body(&self, index: usize) -> Result<&Body> {
        let count = self.count();
        self.bodies
            .get(index)
            .ok_or(Error::UnknownBody { index, count })
    }

    #[inline]
    fn body_mut(&mut self, index: usize) -> Result<&mut Body> {
        let count = self.count();
        self.bodies
            .get_mut(index)
            .ok_or(Error::UnknownBody { index, count })
    }
}

impl From<Vec<Body>> for Registry {
    #[inline]
    fn from(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }
}

impl FromIterator<Body> for Registry {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn body(x: f64, y: f64, mass: f64) -> Body {
        Body::new(DVec2::new(x, y), DVec2::ZERO, mass).unwrap()
    }

    #[test]
    fn indices_follow_insertion_order() {
        let mut registry = Registry::with_capacity(2);

        assert_eq!(registry.push(body(1.0, 0.0, 1.0)), 0);
        assert_eq!(registry.push(body(2.0, 0.0, 2.0)), 1);
        assert_eq!(registry.count(), 2);
        assert_eq!(registry.mass(1), Ok(2.0));
        assert_eq!(
            registry.positions().collect::<Vec<_>>(),
            vec![DVec2::new(1.0, 0.0), DVec2::new(2.0, 0.0)]
        );
    }

    #[test]
    fn out_of_range_index() {
        let mut registry = Registry::from(vec![body(0.0, 0.0, 1.0)]);
        let unknown = Error::UnknownBody { index: 3, count: 1 };

        assert_eq!(registry.position(3), Err(unknown));
        assert_eq!(registry.set_velocity(3, DVec2::ONE), Err(unknown));
        assert_eq!(registry.set_fixed(3, true), Err(unknown));
        assert!(registry.get(3).is_none());
    }

    #[test]
    fn writes() {
        let mut registry: Registry = [body(0.0, 0.0, 1.0)].into_iter().collect();

        registry.set_position(0, DVec2::new(5.0, 6.0)).unwrap();
        registry.set_velocity(0, DVec2::new(-1.0, 0.5)).unwrap();
        registry.set_fixed(0, true).unwrap();

        assert_eq!(registry.position(0), Ok(DVec2::new(5.0, 6.0)));
        assert_eq!(registry.velocity(0), Ok(DVec2::new(-1.0, 0.5)));
        assert!(registry.bodies()[0].is_fixed());

        assert_eq!(
            registry.set_mass(0, 0.0),
            Err(Error::InvalidMass { mass: 0.0 })
        );
        assert_eq!(registry.mass(0), Ok(1.0));
    }

    #[test]
    fn diagnostics() {
        let mut registry = Registry::from(vec![body(-1.0, 0.0, 1.0), body(3.0, 0.0, 3.0)]);
        registry.set_velocity(0, DVec2::new(0.0, 2.0)).unwrap();

        assert_eq!(registry.center_of_mass(), Some(DVec2::new(2.0, 0.0)));
        assert_eq!(registry.total_momentum(), DVec2::new(0.0, 2.0));
        assert_eq!(registry.kinetic_energy(), 2.0);
        assert_relative_eq!(registry.potential_energy(2.0), -1.5);
        assert_relative_eq!(registry.total_energy(2.0), 0.5);

        assert_eq!(Registry::new().center_of_mass(), None);
    }
}
