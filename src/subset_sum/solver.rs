#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Include/exclude backtracking for the subset-sum problem.
//!
//! The numbers are unsigned, which keeps the overshoot pruning sound: once
//! the running sum exceeds the target no deeper inclusion can repair it.
//! The search works over a copy sorted in descending order so overshoots
//! happen as early as possible.

/// Searches for a subset of `numbers` that sums to `target`.
///
/// Returns the first satisfying subset found (in the descending-sorted
/// include-first search order), or `None` when no subset sums to the target.
/// The empty subset satisfies a target of zero.
#[must_use]
pub fn subset_sum(numbers: &[u64], target: u64) -> Option<Vec<u64>> {
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut chosen = Vec::new();
    if search(&sorted, target, 0, 0, &mut chosen) {
        Some(chosen)
    } else {
        None
    }
}

fn search(numbers: &[u64], target: u64, index: usize, sum: u64, chosen: &mut Vec<u64>) -> bool {
    if sum == target {
        return true;
    }
    if index >= numbers.len() || sum > target {
        return false;
    }

    // Include numbers[index].
    chosen.push(numbers[index]);
    if search(numbers, target, index + 1, sum + numbers[index], chosen) {
        return true;
    }
    chosen.pop();

    // Exclude it.
    search(numbers, target, index + 1, sum, chosen)
}
