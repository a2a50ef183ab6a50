pub mod algorithm;
pub mod config;
pub mod model;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;
pub mod util;
