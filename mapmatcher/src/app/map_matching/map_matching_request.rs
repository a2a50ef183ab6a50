use serde::Deserialize;

/// JSON-deserializable request for map matching.
#[derive(Debug, Clone, Deserialize)]
pub struct MapMatchingRequest {
    /// The GPS trace as a WKT `LINESTRING`.
    pub wkt: String,
}

impl MapMatchingRequest {
    /// Validates the request and returns an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.wkt.trim().is_empty() {
            return Err("wkt cannot be empty".to_string());
        }
        Ok(())
    }
}
