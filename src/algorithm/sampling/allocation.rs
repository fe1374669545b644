//! Largest-remainder proportional allocation.
//!
//! Distributes an exact number of sample slots across strata in proportion
//! to stratum population, with integer results that always sum to the
//! requested total. Kept separate from the sampling loop because the
//! tie-break and redistribution rules are the subtlest logic in the engine.
//!
//! Contract:
//! - each stratum's quota is `slots * weight / total_weight`; every stratum
//!   receives the floor of its quota, and the leftover units go one each to
//!   the strata with the largest fractional remainders;
//! - remainder ties break toward the larger weight, then the earlier index
//!   (callers pass strata in ascending stratum-key order);
//! - an allocation above a stratum's member count is capped at that count
//!   and the deficit is re-allocated among the uncapped strata by a fresh
//!   largest-remainder pass, iterating until stable.
//!
//! Remainders are compared as integer numerators over the shared
//! denominator, so the outcome never depends on float rounding.

use crate::error::{Result, SamplerError};

/// One stratum as seen by the allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationTarget {
    /// Proportionality weight (stratum population)
    pub weight: u64,
    /// Members available to draw from (allocation cap)
    pub capacity: usize,
}

/// Allocate `slots` across `targets`, closing exactly to `slots`.
///
/// # Errors
///
/// Returns an allocation error when the combined capacity of all targets
/// cannot absorb `slots`.
pub fn allocate_largest_remainder(
    targets: &[AllocationTarget],
    slots: usize,
) -> Result<Vec<usize>> {
    let total_capacity: usize = targets.iter().map(|t| t.capacity).sum();
    if slots > total_capacity {
        return Err(SamplerError::AllocationError(format!(
            "{slots} slots requested but only {total_capacity} members available across {} strata",
            targets.len()
        )));
    }

    let mut allocation = vec![0usize; targets.len()];
    let mut active: Vec<usize> = (0..targets.len())
        .filter(|&i| targets[i].capacity > 0)
        .collect();
    let mut remaining = slots;

    while remaining > 0 && !active.is_empty() {
        let total_weight: u128 = active.iter().map(|&i| u128::from(targets[i].weight)).sum();

        if total_weight == 0 {
            // No population signal left; fill by capacity, largest first.
            active.sort_by(|&a, &b| {
                targets[b]
                    .capacity
                    .cmp(&targets[a].capacity)
                    .then_with(|| a.cmp(&b))
            });
            for &i in &active {
                let take = remaining.min(targets[i].capacity);
                allocation[i] = take;
                remaining -= take;
                if remaining == 0 {
                    break;
                }
            }
            break;
        }

        // Integer quotas: floor plus remainder numerator over the shared
        // denominator.
        let mut floors: Vec<(usize, usize)> = Vec::with_capacity(active.len());
        let mut remainders: Vec<(usize, u128)> = Vec::with_capacity(active.len());
        let mut leftover = remaining;
        for &i in &active {
            let numerator = u128::from(targets[i].weight) * remaining as u128;
            // The quotient never exceeds `remaining`, so the cast is lossless.
            let base = (numerator / total_weight) as usize;
            floors.push((i, base));
            remainders.push((i, numerator % total_weight));
            leftover = leftover.saturating_sub(base);
        }

        // One extra unit each to the largest remainders; ties favor the
        // larger weight, then the earlier stratum key.
        remainders.sort_by(|&(ia, ra), &(ib, rb)| {
            rb.cmp(&ra)
                .then_with(|| targets[ib].weight.cmp(&targets[ia].weight))
                .then_with(|| ia.cmp(&ib))
        });
        let mut extras = vec![0usize; targets.len()];
        for &(i, _) in remainders.iter().take(leftover) {
            extras[i] = 1;
        }

        // Cap pass: finalize over-capacity strata at their member count and
        // re-run the remainder pass over whatever is left.
        let mut capped = Vec::new();
        for &(i, base) in &floors {
            if base + extras[i] > targets[i].capacity {
                allocation[i] = targets[i].capacity;
                remaining -= targets[i].capacity;
                capped.push(i);
            }
        }

        if capped.is_empty() {
            for &(i, base) in &floors {
                allocation[i] = base + extras[i];
            }
            remaining = 0;
        } else {
            active.retain(|i| !capped.contains(i));
        }
    }

    debug_assert_eq!(allocation.iter().sum::<usize>(), slots);
    Ok(allocation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(weight: u64, capacity: usize) -> AllocationTarget {
        AllocationTarget { weight, capacity }
    }

    #[test]
    fn exact_proportions_need_no_remainder_units() {
        let targets = [target(50, 10), target(30, 10), target(20, 10)];
        let allocation = allocate_largest_remainder(&targets, 10).unwrap();
        assert_eq!(allocation, vec![5, 3, 2]);
    }

    #[test]
    fn leftover_units_go_to_largest_remainders() {
        // Quotas 1.2 / 0.6 / 0.6 / 0.6: floors take one slot, the two
        // leftover units go to the 0.6 remainders ahead of the 0.2.
        let targets = [target(2, 10), target(1, 10), target(1, 10), target(1, 10)];
        let allocation = allocate_largest_remainder(&targets, 3).unwrap();
        assert_eq!(allocation, vec![1, 1, 1, 0]);
        assert_eq!(allocation.iter().sum::<usize>(), 3);
    }

    #[test]
    fn capped_stratum_redistributes_its_deficit() {
        // The dominant stratum would take 5 of 7 slots but only has two
        // members; the other strata absorb the difference.
        let targets = [target(100, 2), target(1, 10), target(1, 10)];
        let allocation = allocate_largest_remainder(&targets, 7).unwrap();
        assert_eq!(allocation[0], 2);
        assert_eq!(allocation.iter().sum::<usize>(), 7);
        assert_eq!(allocation, vec![2, 3, 2]);
    }

    #[test]
    fn cascading_caps_terminate() {
        let targets = [target(90, 1), target(9, 1), target(1, 5)];
        let allocation = allocate_largest_remainder(&targets, 6).unwrap();
        assert_eq!(allocation, vec![1, 1, 4]);
    }

    #[test]
    fn insufficient_capacity_is_an_error() {
        let targets = [target(10, 2), target(10, 2)];
        assert!(matches!(
            allocate_largest_remainder(&targets, 5),
            Err(SamplerError::AllocationError(_))
        ));
    }

    #[test]
    fn zero_slots_allocates_nothing() {
        let targets = [target(10, 2), target(10, 2)];
        let allocation = allocate_largest_remainder(&targets, 0).unwrap();
        assert_eq!(allocation, vec![0, 0]);
    }

    #[test]
    fn zero_weights_fill_by_capacity() {
        let targets = [target(0, 2), target(0, 5)];
        let allocation = allocate_largest_remainder(&targets, 4).unwrap();
        assert_eq!(allocation, vec![0, 4]);
        assert_eq!(allocation.iter().sum::<usize>(), 4);
    }

    #[test]
    fn allocation_closes_exactly_across_many_strata() {
        let targets: Vec<AllocationTarget> = (1..=13).map(|w| target(w * 97, 4)).collect();
        for slots in [0, 1, 7, 19, 40] {
            let allocation = allocate_largest_remainder(&targets, slots).unwrap();
            assert_eq!(allocation.iter().sum::<usize>(), slots, "slots = {slots}");
            for (a, t) in allocation.iter().zip(&targets) {
                assert!(*a <= t.capacity);
            }
        }
    }
}
