use crate::model::network::EdgeId;
use serde::{Deserialize, Serialize};
use wkt::ToWkt;

/// Result of matching a GPS trace to the road network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Match results for each input point in the trace
    pub point_matches: Vec<PointMatch>,

    /// The inferred complete path through the network. Includes the edges
    /// between matched points that the model filled in.
    pub matched_path: Vec<EdgeId>,

    /// For each input point, the index into `matched_path` of its matched edge
    pub indices: Vec<usize>,

    /// Geometry of the matched path
    pub matched_geometry: geo::LineString<f64>,
}

impl MatchResult {
    /// Creates a new result with the given point matches and path.
    pub fn new(
        point_matches: Vec<PointMatch>,
        matched_path: Vec<EdgeId>,
        indices: Vec<usize>,
        matched_geometry: geo::LineString<f64>,
    ) -> Self {
        Self {
            point_matches,
            matched_path,
            indices,
            matched_geometry,
        }
    }

    /// the matched geometry as a WKT `LINESTRING`
    pub fn matched_geometry_wkt(&self) -> String {
        self.matched_geometry.wkt_string()
    }
}

/// Match result for a single GPS point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMatch {
    /// ID of the matched edge
    pub edge_id: EdgeId,

    /// Distance from the GPS point to the matched edge, in network units
    pub distance: f64,

    /// Distance along the matched edge from its start to the projected point
    pub offset: f64,
}

impl PointMatch {
    /// Creates a new point match.
    pub fn new(edge_id: EdgeId, distance: f64, offset: f64) -> Self {
        Self {
            edge_id,
            distance,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;
    use wkt::TryFromWkt;

    #[test]
    fn test_result_creation() {
        let point_matches = vec![
            PointMatch::new(EdgeId(1), 0.5, 2.0),
            PointMatch::new(EdgeId(3), 0.2, 1.0),
        ];
        let geometry = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)];
        let result = MatchResult::new(
            point_matches,
            vec![EdgeId(1), EdgeId(2), EdgeId(3)],
            vec![0, 2],
            geometry,
        );

        assert_eq!(result.point_matches.len(), 2);
        assert_eq!(result.matched_path.len(), 3);
        let wkt = result.matched_geometry_wkt();
        assert!(wkt.starts_with("LINESTRING"));
        let parsed = geo::LineString::<f64>::try_from_wkt_str(&wkt).unwrap();
        assert_eq!(parsed, result.matched_geometry);
    }
}
