/// routing graph derived from a [`super::Network`] by a collaborator backend.
pub trait NetworkGraph: Send + Sync {
    fn vertex_count(&self) -> usize;
}
