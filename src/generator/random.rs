//! Seedable random generators for subset sum instances.
//!
//! Values are drawn without replacement from `[0, 2^bitlength - 1]` and
//! stored in descending order. All generators take an explicit RNG so that
//! tests and experiments are reproducible from a seed.

use rand::seq::index;
use rand::Rng;

use crate::error::{Result, SubsetSumError};
use crate::models::Instance;

/// Largest supported bit length. Keeps every generated sum inside `u64`.
pub const MAX_BIT_LENGTH: u32 = 32;

/// Generates `size` distinct values in `[0, 2^bitlength - 1]` with a target
/// drawn uniformly from `[0, size * (2^bitlength - 1)]`.
///
/// # Errors
///
/// - [`SubsetSumError::BitLengthOutOfRange`] if `bitlength` is 0 or above [`MAX_BIT_LENGTH`]
/// - [`SubsetSumError::SizeExceedsBitLength`] if fewer than `size` distinct values exist
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use u_subset_sum::generator::random_instance;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let inst = random_instance(10, 8, &mut rng).unwrap();
/// assert_eq!(inst.size(), 10);
/// assert!(inst.values().iter().all(|&v| v < 256));
///
/// assert!(random_instance(20, 4, &mut rng).is_err());
/// ```
pub fn random_instance<R: Rng + ?Sized>(size: usize, bitlength: u32, rng: &mut R) -> Result<Instance> {
    let values = distinct_values(size, bitlength, rng)?;
    let max_value = max_value(bitlength);
    let target = rng.random_range(0..=size as u64 * max_value);
    Instance::new(values, target)
}

/// Generates an instance whose target is the sum of a random sample of the
/// values, so at least one exact subset exists.
///
/// The sample size is uniform in `[0, size]`; a size of zero yields target 0.
pub fn random_yes_instance<R: Rng + ?Sized>(
    size: usize,
    bitlength: u32,
    rng: &mut R,
) -> Result<Instance> {
    let values = distinct_values(size, bitlength, rng)?;
    let amount = rng.random_range(0..=size);
    let target = index::sample(rng, size, amount)
        .into_iter()
        .map(|i| values[i])
        .sum();
    Instance::new(values, target)
}

/// Generates an instance with target `sum(values) + 1`, which no subset can reach.
pub fn random_no_instance<R: Rng + ?Sized>(
    size: usize,
    bitlength: u32,
    rng: &mut R,
) -> Result<Instance> {
    let values = distinct_values(size, bitlength, rng)?;
    let target = values.iter().sum::<u64>() + 1;
    Instance::new(values, target)
}

fn max_value(bitlength: u32) -> u64 {
    (1u64 << bitlength) - 1
}

/// Draws `size` distinct values below `2^bitlength`, sorted descending.
fn distinct_values<R: Rng + ?Sized>(size: usize, bitlength: u32, rng: &mut R) -> Result<Vec<u64>> {
    if bitlength == 0 || bitlength > MAX_BIT_LENGTH {
        return Err(SubsetSumError::BitLengthOutOfRange {
            bitlength,
            max: MAX_BIT_LENGTH,
        });
    }
    let available = max_value(bitlength) + 1;
    if size as u64 > available {
        return Err(SubsetSumError::SizeExceedsBitLength { size, bitlength });
    }

    let mut values: Vec<u64> = index::sample(rng, available as usize, size)
        .into_iter()
        .map(|i| i as u64)
        .collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    use crate::exact::reachable;

    #[test]
    fn test_random_instance_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let inst = random_instance(30, 10, &mut rng).unwrap();
        assert_eq!(inst.size(), 30);
        assert!(inst.values().iter().all(|&v| v <= 1023));
        assert!(inst.target() <= 30 * 1023);
        let unique: HashSet<u64> = inst.values().iter().copied().collect();
        assert_eq!(unique.len(), 30);
    }

    #[test]
    fn test_random_instance_sorted_descending() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let inst = random_instance(15, 8, &mut rng).unwrap();
        assert!(inst.values().windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_random_instance_full_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let inst = random_instance(16, 4, &mut rng).unwrap();
        let expected: Vec<u64> = (0..16).rev().collect();
        assert_eq!(inst.values(), expected.as_slice());
    }

    #[test]
    fn test_random_instance_size_too_large() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let err = random_instance(17, 4, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            SubsetSumError::SizeExceedsBitLength {
                size: 17,
                bitlength: 4
            }
        ));
    }

    #[test]
    fn test_random_instance_bad_bitlength() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(matches!(
            random_instance(1, 0, &mut rng),
            Err(SubsetSumError::BitLengthOutOfRange { .. })
        ));
        assert!(matches!(
            random_instance(1, 33, &mut rng),
            Err(SubsetSumError::BitLengthOutOfRange { .. })
        ));
    }

    #[test]
    fn test_yes_instances_are_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..20 {
            let inst = random_yes_instance(25, 10, &mut rng).unwrap();
            assert!(inst.target() <= inst.total());
            assert!(reachable(&inst));
        }
    }

    #[test]
    fn test_no_instance_target() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let inst = random_no_instance(20, 10, &mut rng).unwrap();
        assert_eq!(inst.target(), inst.total() + 1);
        assert!(!reachable(&inst));
    }

    #[test]
    fn test_seeded_generation_reproducible() {
        let a = random_yes_instance(20, 12, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let b = random_yes_instance(20, 12, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }
}
