//! Factor-weighted distribution of leftover stack space.
//!
//! This is the heart of the engine: the rule by which expand and spacer
//! nodes split whatever room remains after fixed-size siblings are
//! measured. Shares are floor-weighted; the rounding leftover is handed
//! out one cell at a time in document order, so repeated layouts of the
//! same inputs always partition identically.

/// Split `remaining` cells across `factors` proportionally.
///
/// Each entry receives `floor(remaining * factor / total)` cells. The
/// cells lost to flooring are then granted one at a time, in list order,
/// to entries with a non-zero factor. A zero factor always yields a zero
/// share: the node weighs nothing but keeps its slot in the list.
///
/// When every factor is zero the pool is left untouched and all shares
/// are zero.
pub(crate) fn distribute(remaining: u32, factors: &[u32]) -> Vec<u32> {
    let total: u64 = factors.iter().map(|f| u64::from(*f)).sum();
    if remaining == 0 || total == 0 {
        return vec![0; factors.len()];
    }

    let mut shares: Vec<u32> = factors
        .iter()
        .map(|f| ((u64::from(remaining) * u64::from(*f)) / total) as u32)
        .collect();

    let mut leftover = remaining - shares.iter().sum::<u32>();
    for (share, factor) in shares.iter_mut().zip(factors) {
        if leftover == 0 {
            break;
        }
        if *factor > 0 {
            *share += 1;
            leftover -= 1;
        }
    }

    shares
}
