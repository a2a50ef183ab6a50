use mapmatcher_core::algorithm::map_matching::{MatchResult, PointMatch};
use mapmatcher_core::config::ModelTag;
use mapmatcher_core::model::network::EdgeId;
use serde::Serialize;

/// JSON-serializable response from map matching.
#[derive(Debug, Clone, Serialize)]
pub struct MapMatchingResponse {
    /// The request this response answers, echoed back unchanged.
    pub request: serde_json::Value,

    /// The model that produced the match.
    pub model: ModelTag,

    /// Match results for each input point in the trace.
    pub point_matches: Vec<PointMatchResponse>,

    /// The inferred complete path through the network.
    pub matched_path: Vec<EdgeId>,

    /// For each input point, the position of its edge in `matched_path`.
    pub indices: Vec<usize>,

    /// Geometry of the matched path as WKT.
    pub matched_geometry: String,
}

/// Match result for a single GPS point in the response.
#[derive(Debug, Clone, Serialize)]
pub struct PointMatchResponse {
    pub edge_id: EdgeId,
    pub distance: f64,
    pub offset: f64,
}

impl MapMatchingResponse {
    pub fn new(request: serde_json::Value, model: ModelTag, result: MatchResult) -> Self {
        let matched_geometry = result.matched_geometry_wkt();
        let point_matches = result
            .point_matches
            .iter()
            .map(PointMatchResponse::from)
            .collect();
        Self {
            request,
            model,
            point_matches,
            matched_path: result.matched_path,
            indices: result.indices,
            matched_geometry,
        }
    }
}

impl From<&PointMatch> for PointMatchResponse {
    fn from(value: &PointMatch) -> Self {
        Self {
            edge_id: value.edge_id,
            distance: value.distance,
            offset: value.offset,
        }
    }
}
