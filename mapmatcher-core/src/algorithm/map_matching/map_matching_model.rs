use super::{MatchError, MatchParams, MatchResult};

/// a map matching model built by a collaborator backend against a network
/// and graph (and, for fast map matching, a UBODT).
///
/// implementations must not mutate shared state from `match_wkt`. a model that
/// is not reentrant must serialize calls internally.
pub trait MapMatchingModel: Send + Sync {
    /// short name of the algorithm, used in logging
    fn name(&self) -> &str;

    /// matches a WKT `LINESTRING` trace using `params`. unset parameter fields
    /// take the model's own defaults.
    fn match_wkt(&self, wkt: &str, params: &MatchParams) -> Result<MatchResult, MatchError>;
}
