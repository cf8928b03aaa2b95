//! Position sampling strategies for callers that work with a domain extent.
//!
//! This module defines the [`PositionSampling`] trait, the random helpers shared by
//! the sampler, and the [`PoissonDiskSampling`] strategy built on
//! [`crate::poisson::driver::run_sampling`].
use mint::Vector2;
use rand::RngCore;

pub mod poisson_disk;

pub use poisson_disk::PoissonDiskSampling;

/// Trait for position sampling.
///
/// Positions are relative to the domain center, i.e. within
/// `[-extent / 2, extent / 2]` on both axes.
pub trait PositionSampling: Send + Sync {
    fn generate(&self, domain_extent: Vector2<f32>, rng: &mut dyn RngCore) -> Vec<Vector2<f32>>;
}

/// Generate a random float in the closed range [0, 1]; `u32::MAX` rounds to exactly 1.0.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Generate a uniform index in `0..len`. `len` must be non-zero.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, len: usize) -> usize {
    debug_assert!(len > 0);
    let scaled = (u64::from(rng.next_u32()) * len as u64) >> 32;
    (scaled as usize).min(len - 1)
}


#[cfg(test)]
mod tests {
    use super::test_rng::FixedRng;
    use super::*;

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_values_in_range() {
        for value in [0, 1, 100, 1000, u32::MAX / 2, u32::MAX - 1, u32::MAX] {
            let mut rng = FixedRng { value };
            let result = rand01(&mut rng);
            assert!(
                (0.0..=1.0).contains(&result),
                "rand01({}) = {} is out of range [0,1]",
                value,
                result
            );
        }
    }

    #[test]
    fn rand01_saturates_to_one() {
        let mut rng = FixedRng { value: u32::MAX };
        assert_eq!(rand01(&mut rng), 1.0);
    }

    #[test]
    fn rand01_midpoint_is_half() {
        let mut rng = FixedRng {
            value: u32::MAX / 2,
        };
        assert!((rand01(&mut rng) - 0.5).abs() < 0.001);
    }

    #[test]
    fn rand_index_stays_below_len() {
        for value in [0, 1, u32::MAX / 3, u32::MAX / 2, u32::MAX] {
            let mut rng = FixedRng { value };
            for len in [1, 2, 7, 1000] {
                assert!(rand_index(&mut rng, len) < len);
            }
        }
    }

    #[test]
    fn rand_index_spans_extremes() {
        let mut low = FixedRng { value: 0 };
        let mut high = FixedRng { value: u32::MAX };
        assert_eq!(rand_index(&mut low, 10), 0);
        assert_eq!(rand_index(&mut high, 10), 9);
    }
}
