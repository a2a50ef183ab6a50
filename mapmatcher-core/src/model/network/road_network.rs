use std::path::Path;

/// a road network loaded by a collaborator backend. opaque to this crate,
/// shared between the graph and model built from it, and released when the
/// last owner drops it.
pub trait Network: Send + Sync {
    /// file the network was loaded from
    fn file(&self) -> &Path;

    /// number of edges in the network
    fn edge_count(&self) -> usize;
}
