use log::{debug, trace, warn};

use crate::{
    body::Body,
    compute_method::{sequential::BruteForcePairs, ComputeMethod},
    config::Config,
    error::{Error, Result},
    interaction::Acceleration,
    registry::Registry,
};

/// Fixed-step integrator advancing a [`Registry`] under mutual Newtonian gravitation.
///
/// Each [`step`](Engine::step) uses the [semi-implicit Euler] method: the accelerations of all
/// bodies are computed from the current positions with the [`ComputeMethod`] `C`, then every free
/// body updates its velocity and, from that new velocity, its position. Anchored bodies attract
/// the others but are never moved.
///
/// The engine holds no simulation state: the same registry and step always produce the same
/// result.
///
/// [semi-implicit Euler]: https://en.wikipedia.org/wiki/Semi-implicit_Euler_method
///
/// # Example
///
/// ```
/// # use orbits::prelude::*;
/// use glam::DVec2;
///
/// let mut registry = Registry::from(vec![
///     Body::new(DVec2::ZERO, DVec2::ZERO, 1e6)?.anchored(),
///     Body::new(DVec2::new(100.0, 0.0), DVec2::new(0.0, 100.0), 1.0)?,
/// ]);
///
/// let mut engine = Engine::new(Config::new().with_gravitational_constant(1.0));
///
/// for _ in 0..100 {
///     engine.step(&mut registry, 1.0 / 50.0)?;
/// }
///
/// assert_eq!(registry.position(0)?, DVec2::ZERO);
/// # Ok::<(), orbits::error::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Engine<C = BruteForcePairs> {
    config: Config,
    compute_method: C,
}

impl Engine {
    /// Creates a new [`Engine`] visiting each pair of bodies once with [`BruteForcePairs`].
    #[inline]
    pub const fn new(config: Config) -> Self {
        Self::with_compute_method(config, BruteForcePairs)
    }
}

impl Default for Engine {
    #[inline]
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<C> Engine<C> {
    /// Creates a new [`Engine`] using the given [`ComputeMethod`].
    #[inline]
    pub const fn with_compute_method(config: Config, compute_method: C) -> Self {
        Self {
            config,
            compute_method,
        }
    }

    /// Returns the configuration of this engine.
    #[inline]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the interaction computed between bodies.
    #[inline]
    pub const fn interaction(&self) -> Acceleration {
        Acceleration::new(self.config.gravitational_constant)
    }
}

impl<C> Engine<C>
where
    C: ComputeMethod<Body>,
{
    /// Advances every free body of the registry by `dt` seconds.
    ///
    /// Fails with [`Error::InvalidStep`] if `dt` is not finite and strictly positive, and with
    /// [`Error::DegenerateSeparation`] if two bodies share a position or are close enough for their
    /// acceleration to overflow. In both cases the registry
    /// is left untouched.
    pub fn step(&mut self, registry: &mut Registry, dt: f64) -> Result<()> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(Error::InvalidStep { dt });
        }

        trace!("stepping {} bodies by {dt} s", registry.count());

        let interaction = self.interaction();
        let accelerations = self
            .compute_method
            .compute(registry.bodies(), interaction)
            .map_err(|error| {
                warn!("step aborted: {error}");
                error
            })?;

        for (body, acceleration) in registry.bodies_mut().iter_mut().zip(accelerations) {
            if body.is_fixed() {
                continue;
            }

            body.velocity += acceleration * dt;
            body.position += body.velocity * dt;
        }

        Ok(())
    }

    /// Steps the registry by `dt` seconds until `duration` seconds have been covered, calling
    /// `observer` with the number of completed steps and the registry after each step.
    ///
    /// The number of steps is `ceil(duration / dt)`, so the last step may overshoot `duration`.
    /// [`Error::InvalidDuration`] is reported if that count does not fit in a `usize`.
    /// Returns the number of completed steps, or the first error, after which no further step is
    /// attempted.
    ///
    /// ```
    /// # use orbits::prelude::*;
    /// # use glam::DVec2;
    /// let mut registry = Registry::from(vec![Body::new(DVec2::ZERO, DVec2::X, 1.0)?]);
    /// let mut trails = Trails::for_registry(&registry, 8);
    ///
    /// let steps = Engine::new(Config::new()).run(&mut registry, 1.0, 2.5, |_, registry| {
    ///     trails.record(registry);
    /// })?;
    ///
    /// assert_eq!(steps, 3);
    /// assert_eq!(registry.position(0)?, DVec2::new(3.0, 0.0));
    /// assert_eq!(trails.get(0).map(Trail::len), Some(3));
    /// # Ok::<(), orbits::error::Error>(())
    /// ```
    pub fn run<F>(
        &mut self,
        registry: &mut Registry,
        dt: f64,
        duration: f64,
        mut observer: F,
    ) -> Result<usize>
    where
        F: FnMut(usize, &Registry),
    {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(Error::InvalidStep { dt });
        }

        if !(duration >= 0.0 && duration.is_finite()) {
            return Err(Error::InvalidDuration { duration });
        }

        let steps = (duration / dt).ceil();
        if steps >= usize::MAX as f64 {
            return Err(Error::InvalidDuration { duration });
        }
        let steps = steps as usize;
        debug!(
            "running {} bodies for {steps} steps of {dt} s",
            registry.count()
        );

        for step in 1..=steps {
            self.step(registry, dt)?;
            observer(step, registry);
        }

        debug!("run finished after {steps} steps");

        Ok(steps)
    }
}
