pub mod knapsack;

// Re-export dynamic programming algorithms with descriptive names
pub use knapsack::{
    knapsack, knapsack_rolling, knapsack_table, KnapsackTable, DEMO_CAPACITY, DEMO_VALUES,
    DEMO_WEIGHTS,
};
