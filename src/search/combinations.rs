//! Multisets of size k drawn with repetition from a sorted pool
//!
//! Uses the non-decreasing index construction: position `i` may reuse the
//! index chosen at `i - 1` or move forward, never back. Each multiset is
//! produced exactly once, and when the pool is sorted ascending every
//! combination comes out sorted ascending too.

/// Number of multisets of size `k` from `n` items: C(n + k - 1, k)
///
/// Returns None if the count does not fit in a u128.
pub fn combination_count(n: usize, k: usize) -> Option<u128> {
    if k == 0 {
        return Some(1);
    }
    if n == 0 {
        return Some(0);
    }

    let mut count: u128 = 1;
    for i in 1..=k as u128 {
        // count == C(n - 1 + i, i) after this step, so the division is exact
        count = count.checked_mul(n as u128 - 1 + i)? / i;
    }
    Some(count)
}

/// All index multisets of size `k` over `0..n`, in generation order
pub fn combinations_with_repetition(n: usize, k: usize) -> Vec<Vec<usize>> {
    let capacity = combination_count(n, k)
        .and_then(|c| usize::try_from(c).ok())
        .unwrap_or(0);
    let mut result = Vec::with_capacity(capacity);
    let mut current = Vec::with_capacity(k);

    extend(n, k, 0, &mut current, &mut result);
    result
}

fn extend(n: usize, k: usize, from: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    if current.len() == k {
        out.push(current.clone());
        return;
    }

    for index in from..n {
        current.push(index);
        extend(n, k, index, current, out);
        current.pop();
    }
}

/// Map index combinations onto the items they refer to
pub fn combinations_of<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    combinations_with_repetition(items.len(), k)
        .into_iter()
        .map(|indices| indices.into_iter().map(|i| items[i].clone()).collect())
        .collect()
}
