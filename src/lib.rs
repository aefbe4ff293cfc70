//! In-place quicksort over `i32` slices with a pluggable pivot-selection
//! policy. The partition routine is the Lomuto scheme; which element it
//! pivots on is decided by an injected [`pivot::PivotStrategy`].

pub mod patterns;
pub mod pivot;
pub mod quicksort;


pub use pivot::{FirstElement, LastElement, PivotStrategy, RandomElement};
pub use quicksort::{QuickSorter, SortError};
