mod map_matching_error;
mod map_matching_model;
mod map_matching_params;
mod map_matching_result;
mod map_matching_service;

pub use map_matching_error::MatchError;
pub use map_matching_model::MapMatchingModel;
pub use map_matching_params::{FastMapMatchParams, MatchParams, StmatchParams};
pub use map_matching_result::{MatchResult, PointMatch};
pub use map_matching_service::{MatchService, ModelHandle};
