pub mod dynamic;
pub mod sort;

// Re-export the sort and dynamic programming kernels
pub use dynamic::*;
pub use sort::*;
