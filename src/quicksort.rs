use thiserror::Error;

use crate::pivot::{LastElement, PivotStrategy};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("Input array cannot be null")]
    InvalidArgument,
}

/// Unstable in-place quicksort with an injected pivot-selection policy.
///
/// The strategy only affects how the input gets partitioned, never the final
/// order. Stateless and reusable across calls.
pub struct QuickSorter<P = LastElement> {
    pivot_strategy: P,
}

impl QuickSorter<LastElement> {
    pub fn new() -> Self {
        Self::with_strategy(LastElement)
    }
}

impl Default for QuickSorter<LastElement> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PivotStrategy> QuickSorter<P> {
    pub fn with_strategy(pivot_strategy: P) -> Self {
        Self { pivot_strategy }
    }

    /// Sorts `v` ascending in place and hands the same slice back.
    ///
    /// `None` stands in for a null array and is the only error case. Slices
    /// of length 0 or 1 are returned untouched.
    pub fn sort<'a>(&self, v: Option<&'a mut [i32]>) -> Result<&'a mut [i32], SortError> {
        let v = v.ok_or(SortError::InvalidArgument)?;

        if v.len() > 1 {
            self.quicksort(v);
        }

        Ok(v)
    }

    // Drives the sort with an explicit stack of pending inclusive ranges.
    // Recursing instead would nest O(n) calls deep on adversarial input,
    // e.g. ascending input with the FirstElement strategy.
    fn quicksort(&self, v: &mut [i32]) {
        let mut pending = vec![(0, v.len() - 1)];

        while let Some((low, high)) = pending.pop() {
            if low >= high {
                continue;
            }

            let partition_index = self.partition(v, low, high);

            if partition_index > low {
                pending.push((low, partition_index - 1));
            }
            if partition_index < high {
                pending.push((partition_index + 1, high));
            }
        }
    }

    // Lomuto partition over the inclusive range [low, high]. Returns the
    // final position of the pivot; everything left of it is <= pivot,
    // everything right of it is greater. Elements equal to the pivot land in
    // the lower side.
    fn partition(&self, v: &mut [i32], low: usize, high: usize) -> usize {
        let pivot_index = self.pivot_strategy.choose_pivot(v, low, high);
        debug_assert!(
            pivot_index >= low && pivot_index <= high,
            "strategy returned pivot index {pivot_index} outside of [{low}, {high}]"
        );

        // The scan below measures everything against v[high], so the chosen
        // pivot is parked there first. A no-op for LastElement.
        v.swap(pivot_index, high);
        let pivot = v[high];

        // base is the next free slot of the <= pivot region.
        let mut base = low;
        for step in low..high {
            if v[step] <= pivot {
                if base != step {
                    v.swap(base, step);
                }
                base += 1;
            }
        }

        v.swap(base, high);
        base
    }
}
