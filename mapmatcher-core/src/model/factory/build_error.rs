use crate::config::ModelTag;
use std::path::PathBuf;

/// failure assembling a [`crate::algorithm::map_matching::MatchService`].
/// any handle acquired before the failing step has been released by the time
/// this error is returned.
#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("failure loading network from {path:?}: {message}")]
    NetworkLoadError { path: PathBuf, message: String },
    #[error("failure building network graph: {0}")]
    GraphBuildError(String),
    #[error("failure loading UBODT from {path:?}: {message}")]
    UbodtLoadError { path: PathBuf, message: String },
    #[error("failure building {model} model: {message}")]
    ModelBuildError { model: ModelTag, message: String },
}
