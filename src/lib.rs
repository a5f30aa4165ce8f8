#![warn(missing_docs)]
//! # Orbits
//!
//! Orbits is a crate advancing a set of massive point bodies in the plane under their mutual
//! Newtonian gravitation, one fixed time step at a time.
//!
//! ## Goals
//!
//! The main goal of this crate is to provide a small, deterministic integrator whose output can be
//! read by any kind of front-end (a plot, an animation, a log) between steps. It does not draw,
//! prompt or persist anything: the [`Registry`](registry::Registry) owns the state of every body
//! and the [`Engine`](engine::Engine) mutates it in place.
//!
//! The accelerations are computed with an exact pairwise summation, costing `O(n²)` per step,
//! which suits the small systems (a sun and a handful of planets) this crate is meant for.
//! Velocities and positions are then advanced with the
//! [semi-implicit Euler](https://en.wikipedia.org/wiki/Semi-implicit_Euler_method) method. This
//! scheme is first-order accurate and lets the energy of an orbit drift over long runs; use small
//! steps accordingly.
//!
//! Orbits can compute accelerations on multiple CPU threads thanks to
//! [rayon](https://github.com/rayon-rs/rayon). Enable the `parallel` feature to access
//! [`compute_method::parallel`].
//!
//! ## Using Orbits
//!
//! All quantities are in SI units (meters, kilograms, seconds). The [`units`] module holds the
//! constants and conversions a driver needs.
//!
//! #### Setting up the bodies
//!
//! ```
//! use orbits::prelude::*;
//! use glam::DVec2;
//!
//! let mut registry = Registry::new();
//!
//! // A sun held at the origin: it attracts the planets but never moves.
//! registry.push(Body::new(DVec2::ZERO, DVec2::ZERO, units::SUN_MASS)?.anchored());
//! let earth = registry.push(
//!     Body::new(DVec2::new(0.0, units::AU), DVec2::new(30_000.0, 0.0), units::EARTH_MASS)?
//!         .with_name("Earth"),
//! );
//! # Ok::<(), orbits::error::Error>(())
//! ```
//!
//! #### Stepping and reading the trajectory
//!
//! ```
//! # use orbits::prelude::*;
//! # use glam::DVec2;
//! # let mut registry = Registry::new();
//! # registry.push(Body::new(DVec2::ZERO, DVec2::ZERO, units::SUN_MASS)?.anchored());
//! # let earth = registry.push(Body::new(DVec2::new(0.0, units::AU), DVec2::new(30_000.0, 0.0), units::EARTH_MASS)?);
//! let mut engine = Engine::new(Config::new());
//! let mut trails = Trails::for_config(&registry, engine.config());
//! let dt = units::months_to_seconds(0.25);
//!
//! for _ in 0..48 {
//!     engine.step(&mut registry, dt)?;
//!     trails.record(&registry);
//! }
//!
//! let distance = registry.position(earth)?.length();
//! assert!((distance / units::AU - 1.0).abs() < 0.1);
//! # Ok::<(), orbits::error::Error>(())
//! ```
//!
//! A step either succeeds or leaves the registry untouched: two bodies sharing a position make it
//! fail with [`Error::DegenerateSeparation`](error::Error::DegenerateSeparation).

/// Point masses and the traits giving access to their position and mass.
pub mod body;

/// Algorithms computing the gravitational acceleration of every body.
pub mod compute_method;

/// Configuration of the engine.
pub mod config;

/// Fixed-step integration of a registry.
pub mod engine;

/// Errors reported by this crate.
pub mod error;

/// Interactions computed between pairs of particles.
pub mod interaction;

/// Storage of the bodies of a simulation.
pub mod registry;

/// Bounded history of the positions of the bodies, for display.
pub mod trail;

/// Physical constants in SI units and the conversions drivers need to feed an
/// [`Engine`](engine::Engine). The engine never converts units itself.
pub mod units;

/// Commonly used types, re-exported.
pub mod prelude {
    pub use crate::{
        body::{Body, Mass, Position},
        compute_method::{sequential, ComputeMethod},
        config::Config,
        engine::Engine,
        error::Error,
        interaction::{Acceleration, Between, Interaction, InteractionPair},
        registry::Registry,
        trail::{Trail, Trails},
        units,
    };

    #[cfg(feature = "parallel")]
    pub use crate::compute_method::parallel;
}
