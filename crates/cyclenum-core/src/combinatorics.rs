//! Lexicographic permutation stepping and fixed-size subset generation.
//!
//! These are the building blocks of the combinatorial cycle enumerator:
//! [`SubsetMasks`] walks every `r`-element subset of `0..n` through a boolean
//! inclusion mask, and [`next_permutation`] walks every ordering of a subset.

/// Rearranges `items` into the next lexicographically greater permutation.
///
/// Returns `false` (and leaves `items` sorted ascending) when `items` was
/// already the last permutation. Starting from ascending order and calling
/// this until it returns `false` visits every distinct permutation once.
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    step_permutation(items, |a, b| a < b)
}

/// Rearranges `items` into the next lexicographically smaller permutation.
///
/// Returns `false` (and leaves `items` sorted descending) when `items` was
/// already the first permutation.
pub fn prev_permutation<T: Ord>(items: &mut [T]) -> bool {
    step_permutation(items, |a, b| a > b)
}

/// Shared body of [`next_permutation`] and [`prev_permutation`]; `before`
/// is the ordering being stepped through.
fn step_permutation<T, F>(items: &mut [T], before: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    let len = items.len();
    if len < 2 {
        return false;
    }

    // Longest suffix that is already last in `before` order.
    let mut pivot = len - 1;
    while pivot > 0 && !before(&items[pivot - 1], &items[pivot]) {
        pivot -= 1;
    }
    if pivot == 0 {
        items.reverse();
        return false;
    }

    // Rightmost suffix element that should come after the pivot.
    let mut successor = len - 1;
    while !before(&items[pivot - 1], &items[successor]) {
        successor -= 1;
    }
    items.swap(pivot - 1, successor);
    items[pivot..].reverse();
    true
}

/// Iterator over every `size`-element subset of `0..universe`.
///
/// Backed by a boolean inclusion mask that starts with `size` leading `true`
/// entries and is stepped with [`prev_permutation`], so subsets come out in
/// lexicographic order of their (ascending) members:
///
/// ```
/// use cyclenum_core::combinatorics::SubsetMasks;
///
/// let subsets: Vec<Vec<usize>> = SubsetMasks::new(4, 3).collect();
/// assert_eq!(subsets, vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct SubsetMasks {
    mask: Vec<bool>,
    exhausted: bool,
}

impl SubsetMasks {
    /// Creates the iterator. Yields nothing when `size > universe`.
    pub fn new(universe: usize, size: usize) -> Self {
        let mut mask = vec![false; universe];
        for slot in mask.iter_mut().take(size) {
            *slot = true;
        }
        Self {
            mask,
            exhausted: size > universe,
        }
    }
}

impl Iterator for SubsetMasks {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let subset = self
            .mask
            .iter()
            .enumerate()
            .filter_map(|(i, &included)| included.then_some(i))
            .collect();
        self.exhausted = !prev_permutation(&mut self.mask);
        Some(subset)
    }
}

/// Binomial coefficient `C(n, k)`, or `None` on overflow.
pub fn binomial(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is always divisible by (i + 1) at this point.
        acc = acc.checked_mul(u128::from(n - i))? / u128::from(i + 1);
    }
    Some(acc)
}

/// Falling factorial `n * (n-1) * ... * (n-k+1)`, or `None` on overflow.
pub fn falling_factorial(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    (0..k).try_fold(1u128, |acc, i| acc.checked_mul(u128::from(n - i)))
}
