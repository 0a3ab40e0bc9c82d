pub mod cli;
pub mod cs;
pub mod error;

pub use cs::{dynamic, sort};
pub use error::{Error, Result};
