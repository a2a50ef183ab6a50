use std::path::PathBuf;

/// failure reported by a collaborator backend while loading or constructing
/// a network, graph, UBODT or model.
#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    #[error("failure reading {path:?}: {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("{0}")]
    InternalError(String),
}
