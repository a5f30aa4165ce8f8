use std::collections::VecDeque;

use glam::DVec2;

use crate::{config::Config, registry::Registry};

/// Default number of past positions kept by a [`Trail`].
pub const DEFAULT_TRAIL_LENGTH: usize = 500;

/// Fixed-capacity history of the positions of one body, oldest first.
///
/// Once full, recording a new position discards the oldest one.
///
/// ```
/// # use orbits::prelude::*;
/// # use glam::DVec2;
/// let mut trail = Trail::new(2);
/// trail.push(DVec2::new(1.0, 0.0));
/// trail.push(DVec2::new(2.0, 0.0));
/// trail.push(DVec2::new(3.0, 0.0));
///
/// assert_eq!(trail.iter().collect::<Vec<_>>(), vec![DVec2::new(2.0, 0.0), DVec2::new(3.0, 0.0)]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    positions: VecDeque<DVec2>,
    capacity: usize,
}

impl Trail {
    /// Creates an empty trail keeping at most `capacity` positions.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            positions: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a position, discarding the oldest one if the trail is full.
    #[inline]
    pub fn push(&mut self, position: DVec2) {
        if self.capacity == 0 {
            return;
        }

        if self.positions.len() == self.capacity {
            self.positions.pop_front();
        }

        self.positions.push_back(position);
    }

    /// Returns the number of recorded positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no position is recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the maximum number of recorded positions.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the most recently recorded position.
    #[inline]
    pub fn latest(&self) -> Option<DVec2> {
        self.positions.back().copied()
    }

    /// Iterates over the recorded positions, oldest first.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = DVec2> + ExactSizeIterator + '_ {
        self.positions.iter().copied()
    }

    /// Forgets every recorded position.
    #[inline]
    pub fn clear(&mut self) {
        self.positions.clear();
    }
}

impl Default for Trail {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_LENGTH)
    }
}

/// One [`Trail`] per body of a [`Registry`], indexed like the registry.
///
/// Trails belong to whoever displays the simulation: they only read the registry between steps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trails {
    trails: Vec<Trail>,
}

impl Trails {
    /// Creates an empty trail of the given capacity for every body of the registry.
    #[inline]
    pub fn for_registry(registry: &Registry, capacity: usize) -> Self {
        Self {
            trails: (0..registry.count()).map(|_| Trail::new(capacity)).collect(),
        }
    }

    /// Creates an empty trail of the configured length for every body of the registry.
    #[inline]
    pub fn for_config(registry: &Registry, config: &Config) -> Self {
        Self::for_registry(registry, config.trail_length)
    }

    /// Records the current position of every body.
    ///
    /// Bodies added to the registry after these trails were created are not recorded.
    #[inline]
    pub fn record(&mut self, registry: &Registry) {
        for (trail, position) in self.trails.iter_mut().zip(registry.positions()) {
            trail.push(position);
        }
    }

    /// Returns the trail of the body at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Trail> {
        self.trails.get(index)
    }

    /// Returns the number of trails.
    #[inline]
    pub fn len(&self) -> usize {
        self.trails.len()
    }

    /// Returns `true` if there is no trail.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    /// Iterates over the trails in body order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Trail> {
        self.trails.iter()
    }
}
