use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Sorts `arr` in ascending order with top-down merge sort.
///
/// Stable: equal elements keep their input order. Each merge allocates its own
/// temporary buffer covering the merged range.
///
/// # Examples
///
/// ```
/// use algo_kernels::sort::merge_sort;
///
/// let mut arr = vec![3, 1, 4, 1, 5];
/// merge_sort(&mut arr);
/// assert_eq!(arr, vec![1, 1, 3, 4, 5]);
/// ```
pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    merge_sort_by(arr, |a, b| a.cmp(b));
}

/// Sorts `arr` with merge sort using `compare` to order elements.
///
/// # Examples
///
/// ```
/// use algo_kernels::sort::merge_sort_by;
///
/// let mut people = vec![("bob", 30), ("amy", 25), ("cat", 30), ("dan", 25)];
/// merge_sort_by(&mut people, |a, b| a.1.cmp(&b.1));
/// // Ties keep their original order.
/// assert_eq!(people, vec![("amy", 25), ("dan", 25), ("bob", 30), ("cat", 30)]);
/// ```
pub fn merge_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if arr.len() < 2 {
        return;
    }
    log::debug!("merge sort over {} elements", arr.len());
    let high = arr.len() - 1;
    sort_range(arr, 0, high, &mut compare);
}

/// Sorts only the inclusive range `[low, high]` of `arr`.
///
/// A range with `low > high` is empty and always succeeds.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] when `low <= high` and `high >= arr.len()`.
///
/// # Examples
///
/// ```
/// use algo_kernels::sort::merge_sort_range;
///
/// let mut arr = [7, 3, 2, 1, 0];
/// merge_sort_range(&mut arr, 1, 3).unwrap();
/// assert_eq!(arr, [7, 1, 2, 3, 0]);
/// ```
pub fn merge_sort_range<T: Ord + Clone>(arr: &mut [T], low: usize, high: usize) -> Result<()> {
    if low > high {
        return Ok(());
    }
    if high >= arr.len() {
        return Err(Error::InvalidRange {
            low,
            high,
            len: arr.len(),
        });
    }
    sort_range(arr, low, high, &mut |a: &T, b: &T| a.cmp(b));
    Ok(())
}

fn sort_range<T, F>(arr: &mut [T], low: usize, high: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if low >= high {
        return;
    }
    let mid = low + (high - low) / 2;
    sort_range(arr, low, mid, compare);
    sort_range(arr, mid + 1, high, compare);
    merge_by(arr, low, mid, high, compare);
}

/// Merges the sorted runs `arr[low..=mid]` and `arr[mid + 1..=high]` into a
/// single sorted run occupying `arr[low..=high]`.
///
/// # Panics
///
/// Panics unless `low <= mid <= high < arr.len()`.
///
/// # Examples
///
/// ```
/// use algo_kernels::sort::merge;
///
/// let mut arr = [1, 4, 9, 2, 3, 10];
/// merge(&mut arr, 0, 2, 5);
/// assert_eq!(arr, [1, 2, 3, 4, 9, 10]);
/// ```
pub fn merge<T: Ord + Clone>(arr: &mut [T], low: usize, mid: usize, high: usize) {
    assert!(
        low <= mid && mid <= high && high < arr.len(),
        "merge bounds must satisfy low <= mid <= high < len"
    );
    merge_by(arr, low, mid, high, &mut |a: &T, b: &T| a.cmp(b));
}

fn merge_by<T, F>(arr: &mut [T], low: usize, mid: usize, high: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    log::trace!("merge [{}, {}] with [{}, {}]", low, mid, mid + 1, high);
    let mut temp = Vec::with_capacity(high - low + 1);
    let mut left = low;
    let mut right = mid + 1;

    while left <= mid && right <= high {
        // Only a strictly smaller right head goes first, so ties favor the left run.
        if compare(&arr[right], &arr[left]) == Ordering::Less {
            temp.push(arr[right].clone());
            right += 1;
        } else {
            temp.push(arr[left].clone());
            left += 1;
        }
    }
    temp.extend_from_slice(&arr[left..=mid]);
    temp.extend_from_slice(&arr[right..=high]);

    arr[low..=high].clone_from_slice(&temp);
}

#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 4096;

/// Merge sort that sorts the two halves of large inputs on the rayon thread
/// pool.
///
/// Inputs at or below an internal threshold are sorted sequentially. The
/// output is identical to [`merge_sort`], stability included.
///
/// ```
/// use algo_kernels::sort::par_merge_sort;
///
/// let mut arr: Vec<i64> = (0..20_000).rev().collect();
/// par_merge_sort(&mut arr);
/// assert_eq!(arr, (0..20_000).collect::<Vec<_>>());
/// ```
#[cfg(feature = "parallel")]
pub fn par_merge_sort<T: Ord + Clone + Send>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }
    log::debug!(
        "parallel merge sort over {} elements on {} threads",
        arr.len(),
        rayon::current_num_threads()
    );
    par_sort(arr);
}

#[cfg(feature = "parallel")]
fn par_sort<T: Ord + Clone + Send>(arr: &mut [T]) {
    if arr.len() <= PARALLEL_THRESHOLD {
        merge_sort(arr);
        return;
    }
    let high = arr.len() - 1;
    let mid = high / 2;
    {
        let (left, right) = arr.split_at_mut(mid + 1);
        rayon::join(|| par_sort(left), || par_sort(right));
    }
    merge(arr, 0, mid, high);
}
