use rand::Rng;

/// Decides which element a partition step pivots on.
///
/// `choose_pivot` returns the *index* of the chosen pivot element within
/// `[low, high]`, not its value, and never moves it. The partition routine
/// takes care of placing the pivot where the scan expects it.
pub trait PivotStrategy {
    fn choose_pivot(&self, v: &[i32], low: usize, high: usize) -> usize;
}

/// Always pivots on the first element of the sub-range. Degrades to O(n^2)
/// on already sorted input.
#[derive(Copy, Clone, Debug, Default)]
pub struct FirstElement;

impl PivotStrategy for FirstElement {
    fn choose_pivot(&self, _v: &[i32], low: usize, _high: usize) -> usize {
        low
    }
}

/// Always pivots on the last element of the sub-range, the classic Lomuto
/// choice and the default strategy.
#[derive(Copy, Clone, Debug, Default)]
pub struct LastElement;

impl PivotStrategy for LastElement {
    fn choose_pivot(&self, _v: &[i32], _low: usize, high: usize) -> usize {
        high
    }
}

/// Pivots on a uniformly random element of the sub-range, which makes the
/// quadratic patterns that trip up the fixed strategies vanishingly unlikely.
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomElement;

impl PivotStrategy for RandomElement {
    fn choose_pivot(&self, _v: &[i32], low: usize, high: usize) -> usize {
        rand::thread_rng().gen_range(low..=high)
    }
}
