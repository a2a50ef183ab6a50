mod backend_error;
mod map_matching_backend;

pub use backend_error::BackendError;
pub use map_matching_backend::MapMatchingBackend;
