//! Error types shared by the kernels and the console drivers.

/// Errors returned when a kernel is called with inputs it cannot honor.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Knapsack weight and value sequences must pair up by index.
    #[error("weights and values differ in length ({weights} weights, {values} values)")]
    LengthMismatch { weights: usize, values: usize },

    /// More items were requested than the weight/value sequences hold.
    #[error("item count {count} exceeds the {available} items provided")]
    ItemCountOutOfRange { count: usize, available: usize },

    /// A knapsack total grew past `u64::MAX`.
    #[error("knapsack value exceeds u64::MAX")]
    ValueOverflow,

    /// An explicit sort range reaches past the end of the slice.
    #[error("range [{low}, {high}] is out of bounds for a slice of length {len}")]
    InvalidRange { low: usize, high: usize, len: usize },

    /// Console input could not be read as the expected integers.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
