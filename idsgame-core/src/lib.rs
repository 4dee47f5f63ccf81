pub mod config;
pub mod error;
pub mod logging;
pub mod plotting;
pub mod result;
pub mod runner;
#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{ExperimentError, Result};
