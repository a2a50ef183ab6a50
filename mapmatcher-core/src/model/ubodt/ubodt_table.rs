use std::path::Path;

/// a UBODT read from disk by a collaborator backend. the on-disk format
/// (csv or binary) belongs to the backend.
pub trait Ubodt: Send + Sync {
    fn file(&self) -> &Path;

    /// number of origin-destination rows held in the table
    fn row_count(&self) -> usize;
}
