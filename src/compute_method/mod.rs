#[cfg(feature = "parallel")]
/// Compute methods that use multiple CPU threads.
pub mod parallel;

/// Compute methods that use one CPU thread.
pub mod sequential;

use glam::DVec2;

use crate::{error::Result, interaction::Acceleration};

/// Trait for algorithms computing the gravitational acceleration of every particle of a slice due
/// to all the others.
///
/// Every algorithm performs the exact pairwise summation, they only differ in how the pairs are
/// visited. An implementation must report [`Error::DegenerateSeparation`] for the lowest
/// `(first, second)` pair of coincident particles and compute nothing else in that case.
///
/// [`Error::DegenerateSeparation`]: crate::error::Error::DegenerateSeparation
///
/// # Example
///
/// ```
/// # use orbits::prelude::*;
/// use glam::DVec2;
///
/// let particles = [(DVec2::Y, 1.0), (DVec2::ZERO, 1.0)];
/// let accelerations = sequential::BruteForcePairs.compute(&particles, Acceleration::new(1.0))?;
///
/// assert_eq!(accelerations, vec![DVec2::NEG_Y, DVec2::Y]);
/// # Ok::<(), orbits::error::Error>(())
/// ```
pub trait ComputeMethod<P> {
    /// Returns the acceleration of each particle, in the order of the slice.
    fn compute(&mut self, particles: &[P], interaction: Acceleration) -> Result<Vec<DVec2>>;
}

impl<P, C> ComputeMethod<P> for &mut C
where
    C: ComputeMethod<P>,
{
    #[inline]
    fn compute(&mut self, particles: &[P], interaction: Acceleration) -> Result<Vec<DVec2>> {
        (**self).compute(particles, interaction)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{body::Position, error::Error};

    pub fn acceleration_computation<C>(mut cm: C)
    where
        C: ComputeMethod<(DVec2, f64)>,
    {
        let particles = vec![
            (DVec2::new(0.0, 0.0), 2.0),
            (DVec2::new(1.0, 1.0), 3.0),
            (DVec2::new(-5.0, 2.5), 0.5),
            (DVec2::new(4.0, -8.0), 10.0),
        ];
        let g = 0.75;

        let computed = cm.compute(&particles, Acceleration::new(g)).unwrap();
        assert_eq!(computed.len(), particles.len());

        for (i, (p1, computed)) in particles.iter().zip(computed).enumerate() {
            let mut acceleration = DVec2::ZERO;

            for (j, p2) in particles.iter().enumerate() {
                if i != j {
                    let dir = p2.position() - p1.position();
                    let mag_2 = dir.length_squared();
                    acceleration += dir * g * p2.1 / (mag_2 * mag_2.sqrt());
                }
            }

            assert!(
                acceleration.abs_diff_eq(computed, 1e-12),
                "{acceleration} != {computed}"
            );
        }
    }

    pub fn degenerate_separation<C>(mut cm: C)
    where
        C: ComputeMethod<(DVec2, f64)>,
    {
        let particles = vec![
            (DVec2::new(1.0, 0.0), 1.0),
            (DVec2::new(2.0, 2.0), 1.0),
            (DVec2::new(0.0, 3.0), 1.0),
            (DVec2::new(2.0, 2.0), 1.0),
            (DVec2::new(0.0, 3.0), 1.0),
        ];

        assert_eq!(
            cm.compute(&particles, Acceleration::default()),
            Err(Error::DegenerateSeparation {
                first: 1,
                second: 3
            })
        );
    }

    pub fn empty_and_single<C>(mut cm: C)
    where
        C: ComputeMethod<(DVec2, f64)>,
    {
        let interaction = Acceleration::default();

        assert_eq!(cm.compute(&[], interaction), Ok(Vec::new()));
        assert_eq!(
            cm.compute(&[(DVec2::new(4.0, 2.0), 1.0)], interaction),
            Ok(vec![DVec2::ZERO])
        );
    }

    /// Generates the shared tests for a compute method.
    macro_rules! tests_compute_method {
        ($name: ident, $cm: expr) => {
            paste::paste! {
                #[test]
                fn [<$name _accelerations>]() {
                    $crate::compute_method::tests::acceleration_computation($cm);
                }

                #[test]
                fn [<$name _degenerate_separation>]() {
                    $crate::compute_method::tests::degenerate_separation($cm);
                }

                #[test]
                fn [<$name _empty_and_single>]() {
                    $crate::compute_method::tests::empty_and_single($cm);
                }
            }
        };
    }

    pub(crate) use tests_compute_method;
}
