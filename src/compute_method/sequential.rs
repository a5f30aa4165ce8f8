use glam::DVec2;

use crate::{
    body::{Mass, Position},
    error::{Error, Result},
    interaction::{Acceleration, Between, Interaction, InteractionPair},
};

/// Brute-force [`ComputeMethod`](super::ComputeMethod) using one CPU thread, computing the
/// acceleration of each particle independently from all the others.
///
/// Each pair is evaluated twice. Prefer [`BruteForcePairs`] unless the per-particle summation
/// order matters.
#[derive(Clone, Copy, Default, Debug)]
pub struct BruteForce;

impl<P> super::ComputeMethod<P> for BruteForce
where
    P: Position<Vector = DVec2> + Mass<Scalar = f64>,
{
    #[inline]
    fn compute(&mut self, particles: &[P], mut interaction: Acceleration) -> Result<Vec<DVec2>> {
        particles
            .iter()
            .enumerate()
            .map(|(i, p1)| accumulate(&mut interaction, i, p1, particles))
            .collect()
    }
}

/// Sums the accelerations every other particle of the slice exerts on the particle at `index`.
#[inline]
pub(crate) fn accumulate<P>(
    interaction: &mut Acceleration,
    index: usize,
    affected: &P,
    particles: &[P],
) -> Result<DVec2>
where
    P: Position<Vector = DVec2> + Mass<Scalar = f64>,
{
    particles
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != index)
        .try_fold(DVec2::ZERO, |acceleration, (j, affecting)| {
            let computed = interaction
                .compute(Between(affected, affecting))
                .ok_or(Error::DegenerateSeparation {
                    first: index.min(j),
                    second: index.max(j),
                })?;

            Ok(acceleration + computed)
        })
}

/// Brute-force [`ComputeMethod`](super::ComputeMethod) using one CPU thread, visiting each
/// unordered pair of particles exactly once.
///
/// Both accelerations of a pair are derived from a single evaluation (Newton's third law), which
/// halves the work of [`BruteForce`].
#[derive(Clone, Copy, Default, Debug)]
pub struct BruteForcePairs;

impl<P> super::ComputeMethod<P> for BruteForcePairs
where
    P: Position<Vector = DVec2> + Mass<Scalar = f64>,
{
    #[inline]
    fn compute(&mut self, particles: &[P], mut interaction: Acceleration) -> Result<Vec<DVec2>> {
        let len = particles.len();
        let mut accelerations = vec![DVec2::ZERO; len];

        for i in 0..len {
            let mut acceleration = DVec2::ZERO;

            for j in (i + 1)..len {
                let (computed_i, computed_j) = interaction
                    .compute_pair(Between(&particles[i], &particles[j]))
                    .ok_or(Error::DegenerateSeparation {
                        first: i,
                        second: j,
                    })?;

                acceleration += computed_i;
                accelerations[j] += computed_j;
            }

            accelerations[i] += acceleration;
        }

        Ok(accelerations)
    }
}
