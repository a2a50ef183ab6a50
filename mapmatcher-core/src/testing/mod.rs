//! an in-memory collaborator backend for tests. compiled for this crate's tests
//! and, through the `test-utils` feature, for downstream crates.
mod mock_backend;

pub use mock_backend::{HandleKind, MockBackend, MockFailures, MOCK_DEFAULT_RADIUS};
