//! 0/1 knapsack over integer weights, solved bottom-up.
//!
//! Weights and capacity are `usize`, so the non-negativity precondition of the
//! problem is carried by the types. Values are `u64`.

use crate::error::{Error, Result};

/// Capacity of the demo instance printed by the `knapsack` binary.
pub const DEMO_CAPACITY: usize = 5;
/// Item weights of the demo instance.
pub const DEMO_WEIGHTS: [usize; 4] = [2, 1, 3, 2];
/// Item values of the demo instance.
pub const DEMO_VALUES: [u64; 4] = [12, 10, 20, 15];

/// The filled DP table of a knapsack instance.
///
/// Cell `(i, w)` holds the best value reachable with the first `i` items under
/// capacity `w`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackTable {
    capacity: usize,
    weights: Vec<usize>,
    cells: Vec<Vec<u64>>,
}

impl KnapsackTable {
    /// Number of items the table was built over.
    pub fn items(&self) -> usize {
        self.weights.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The optimal value for the whole instance, `dp[n][W]`.
    pub fn max_value(&self) -> u64 {
        self.cells[self.items()][self.capacity]
    }

    /// Value stored at `(i, w)`, or `None` outside the `(n + 1) x (W + 1)` grid.
    pub fn value_at(&self, i: usize, w: usize) -> Option<u64> {
        self.cells.get(i)?.get(w).copied()
    }

    /// Walks the table back from `(n, W)` and returns the indices (ascending)
    /// of one subset of items achieving [`max_value`](Self::max_value).
    pub fn selected_items(&self) -> Vec<usize> {
        let mut picked = Vec::new();
        let mut w = self.capacity;
        for i in (1..=self.items()).rev() {
            if self.cells[i][w] != self.cells[i - 1][w] {
                picked.push(i - 1);
                w -= self.weights[i - 1];
            }
        }
        picked.reverse();
        picked
    }
}

fn validate(n: usize, weights: &[usize], values: &[u64]) -> Result<()> {
    if weights.len() != values.len() {
        return Err(Error::LengthMismatch {
            weights: weights.len(),
            values: values.len(),
        });
    }
    if n > weights.len() {
        return Err(Error::ItemCountOutOfRange {
            count: n,
            available: weights.len(),
        });
    }
    Ok(())
}

/// Maximum total value of a subset of the first `n` items whose weights sum
/// to at most `capacity`, each item used at most once.
///
/// Items of weight 0 are the exception: the table never fills column 0, so
/// such an item only counts when it is considered at a nonzero capacity. If
/// later items fill the remaining capacity exactly, it is dropped, and with
/// `capacity == 0` it never counts. The answer then depends on item order.
///
/// # Errors
///
/// * [`Error::LengthMismatch`] if `weights` and `values` differ in length.
/// * [`Error::ItemCountOutOfRange`] if `n` exceeds that length.
/// * [`Error::ValueOverflow`] if a candidate total does not fit in `u64`.
///
/// # Examples
///
/// ```
/// use algo_kernels::dynamic::knapsack;
///
/// let weights = [2, 1, 3, 2];
/// let values = [12, 10, 20, 15];
/// assert_eq!(knapsack(4, 5, &weights, &values).unwrap(), 37);
/// ```
pub fn knapsack(n: usize, capacity: usize, weights: &[usize], values: &[u64]) -> Result<u64> {
    knapsack_table(n, capacity, weights, values).map(|table| table.max_value())
}

/// Builds and returns the full `(n + 1) x (capacity + 1)` DP table.
///
/// Row 0 and column 0 stay zero, which gives items of weight 0 the
/// order-dependent behavior described on [`knapsack`].
///
/// # Errors
///
/// Same conditions as [`knapsack`].
///
/// # Examples
///
/// ```
/// use algo_kernels::dynamic::knapsack_table;
///
/// let table = knapsack_table(4, 5, &[2, 1, 3, 2], &[12, 10, 20, 15]).unwrap();
/// assert_eq!(table.max_value(), 37);
/// assert_eq!(table.selected_items(), vec![0, 1, 3]);
/// ```
pub fn knapsack_table(
    n: usize,
    capacity: usize,
    weights: &[usize],
    values: &[u64],
) -> Result<KnapsackTable> {
    validate(n, weights, values)?;
    log::debug!("knapsack table for {} items, capacity {}", n, capacity);

    let mut dp = vec![vec![0_u64; capacity + 1]; n + 1];
    for i in 1..=n {
        let weight = weights[i - 1];
        let value = values[i - 1];
        for w in 1..=capacity {
            dp[i][w] = if weight <= w {
                // Take item i - 1 or skip it
                let take = value
                    .checked_add(dp[i - 1][w - weight])
                    .ok_or(Error::ValueOverflow)?;
                dp[i - 1][w].max(take)
            } else {
                dp[i - 1][w]
            };
        }
    }

    Ok(KnapsackTable {
        capacity,
        weights: weights[..n].to_vec(),
        cells: dp,
    })
}

/// Same answer as [`knapsack`] using a single row of `capacity + 1` cells.
///
/// Capacities are visited in descending order so every item is counted at
/// most once.
///
/// # Errors
///
/// Same conditions as [`knapsack`].
///
/// # Examples
///
/// ```
/// use algo_kernels::dynamic::knapsack_rolling;
///
/// assert_eq!(knapsack_rolling(3, 50, &[10, 20, 30], &[60, 100, 120]).unwrap(), 220);
/// ```
pub fn knapsack_rolling(
    n: usize,
    capacity: usize,
    weights: &[usize],
    values: &[u64],
) -> Result<u64> {
    validate(n, weights, values)?;
    log::debug!("rolling knapsack for {} items, capacity {}", n, capacity);

    let mut row = vec![0_u64; capacity + 1];
    for (&weight, &value) in weights[..n].iter().zip(&values[..n]) {
        // Column 0 stays zero, matching the full table.
        for w in (weight.max(1)..=capacity).rev() {
            let take = value.checked_add(row[w - weight]).ok_or(Error::ValueOverflow)?;
            row[w] = row[w].max(take);
        }
    }
    Ok(row[capacity])
}
