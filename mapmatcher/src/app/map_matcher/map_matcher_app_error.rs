use mapmatcher_core::algorithm::map_matching::MatchError;
use mapmatcher_core::config::ConfigError;
use mapmatcher_core::model::factory::BuildError;

#[derive(thiserror::Error, Debug)]
pub enum MapMatcherAppError {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    BuildError(#[from] BuildError),
    #[error(transparent)]
    MatchError(#[from] MatchError),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("failure writing response: {0}")]
    SerializationError(#[from] serde_json::Error),
}
