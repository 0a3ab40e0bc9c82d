use crate::error::{Error, Result};

/// Sorts `arr` in ascending order, in place, using quicksort with the first
/// element of each range as the pivot.
///
/// Not stable. Already sorted (or reverse sorted) input hits the O(n²) worst
/// case, and recursion depth grows linearly with it; see
/// [`quicksort_iterative`] for a variant with a bounded call stack.
///
/// # Examples
///
/// ```
/// use algo_kernels::sort::quicksort;
///
/// let mut arr = vec![5, 2, 9, 1, 5, 6];
/// quicksort(&mut arr);
/// assert_eq!(arr, vec![1, 2, 5, 5, 6, 9]);
/// ```
pub fn quicksort<T: Ord>(arr: &mut [T]) {
    if arr.is_empty() {
        return;
    }
    log::debug!("quicksort over {} elements", arr.len());
    let high = arr.len() - 1;
    sort_range(arr, 0, high);
}

/// Sorts the vector and hands it back.
///
/// ```
/// use algo_kernels::sort::quicksorted;
///
/// assert_eq!(quicksorted(vec![3, -1, 2]), vec![-1, 2, 3]);
/// assert!(quicksorted(Vec::<i32>::new()).is_empty());
/// ```
pub fn quicksorted<T: Ord>(mut arr: Vec<T>) -> Vec<T> {
    quicksort(&mut arr);
    arr
}

/// Sorts only the inclusive range `[low, high]` of `arr`, leaving the rest
/// untouched.
///
/// A range with `low > high` is empty and always succeeds. Otherwise `high`
/// must index into `arr`.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] when `low <= high` and `high >= arr.len()`.
pub fn quicksort_range<T: Ord>(arr: &mut [T], low: usize, high: usize) -> Result<()> {
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
    sort_range(arr, low, high);
    Ok(())
}

fn sort_range<T: Ord>(arr: &mut [T], low: usize, high: usize) {
    if low < high {
        let p_index = partition(arr, low, high);
        if p_index > low {
            sort_range(arr, low, p_index - 1);
        }
        sort_range(arr, p_index + 1, high);
    }
}

/// Partitions `arr[low..=high]` around the pivot `arr[low]` and returns the
/// pivot's final position.
///
/// Afterwards every element left of the returned index is `<=` the pivot and
/// every element right of it is `>` the pivot.
///
/// # Panics
///
/// Panics if `high >= arr.len()` or `low > high`.
///
/// # Examples
///
/// ```
/// use algo_kernels::sort::partition;
///
/// let mut arr = [4, 7, 1, 9, 3];
/// let p = partition(&mut arr, 0, 4);
/// assert_eq!(arr[p], 4);
/// assert!(arr[..p].iter().all(|&x| x <= 4));
/// assert!(arr[p + 1..].iter().all(|&x| x > 4));
/// ```
pub fn partition<T: Ord>(arr: &mut [T], low: usize, high: usize) -> usize {
    assert!(low <= high, "partition range is empty");
    let mut i = low;
    let mut j = high;

    // arr[low] holds the pivot until the final swap: i moves past it on the
    // first step and j never goes below it, so swaps only touch (low, high].
    while i < j {
        while i < high && arr[i] <= arr[low] {
            i += 1;
        }
        while arr[j] > arr[low] {
            j -= 1;
        }
        if i < j {
            arr.swap(i, j);
        }
    }

    arr.swap(low, j);
    log::trace!("partition [{}, {}] settled pivot at {}", low, high, j);
    j
}

/// Same ordering as [`quicksort`], driven by an explicit stack of pending
/// ranges instead of recursion.
///
/// The smaller side of each partition is processed first, so the stack holds
/// at most O(log n) ranges even on adversarial input.
///
/// ```
/// use algo_kernels::sort::quicksort_iterative;
///
/// let mut arr: Vec<i32> = (0..2_000).collect();
/// quicksort_iterative(&mut arr);
/// assert!(arr.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub fn quicksort_iterative<T: Ord>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }
    log::debug!("iterative quicksort over {} elements", arr.len());

    let mut pending = vec![(0, arr.len() - 1)];
    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }
        let p_index = partition(arr, low, high);
        // (low, low - 1) is empty; saturating keeps it from wrapping at 0.
        let left = (low, p_index.saturating_sub(1));
        let right = (p_index + 1, high);
        if p_index - low > high - p_index {
            pending.push(left);
            pending.push(right);
        } else {
            pending.push(right);
            pending.push(left);
        }
    }
}
