use glam::DVec2;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::{
    body::{Mass, Position},
    error::Result,
    interaction::Acceleration,
};

/// Brute-force [`ComputeMethod`](super::ComputeMethod) using the CPU with
/// [rayon](https://github.com/rayon-rs/rayon).
///
/// Every particle folds its own acceleration from all the others, so no two threads ever write to
/// the same accumulator. The result is independent of the number of threads.
#[derive(Clone, Copy, Default, Debug)]
pub struct BruteForce;

impl<P> super::ComputeMethod<P> for BruteForce
where
    P: Position<Vector = DVec2> + Mass<Scalar = f64> + Sync,
{
    #[inline]
    fn compute(&mut self, particles: &[P], interaction: Acceleration) -> Result<Vec<DVec2>> {
        let accelerations: Vec<_> = particles
            .par_iter()
            .enumerate()
            .map(|(i, p1)| {
                let mut interaction = interaction;
                super::sequential::accumulate(&mut interaction, i, p1, particles)
            })
            .collect();

        // Collected in order so the reported pair does not depend on thread scheduling.
        accelerations.into_iter().collect()
    }
}
