pub mod merge_sort;
pub mod quicksort;

pub use merge_sort::{merge, merge_sort, merge_sort_by, merge_sort_range};
#[cfg(feature = "parallel")]
pub use merge_sort::par_merge_sort;
pub use quicksort::{partition, quicksort, quicksort_iterative, quicksort_range, quicksorted};
