use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// location and column naming of the road network, as read from `input.network`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    /// network file. rewritten to an absolute path when it was only found
    /// relative to the configuration file.
    pub file: PathBuf,
    /// column holding the edge id
    pub id: String,
    /// column holding the edge source node
    pub source: String,
    /// column holding the edge target node
    pub target: String,
}

impl NetworkConfig {
    pub const DEFAULT_ID_COLUMN: &'static str = "id";
    pub const DEFAULT_SOURCE_COLUMN: &'static str = "source";
    pub const DEFAULT_TARGET_COLUMN: &'static str = "target";
}
