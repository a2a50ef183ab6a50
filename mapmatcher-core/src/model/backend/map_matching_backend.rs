use super::BackendError;
use crate::algorithm::map_matching::MapMatchingModel;
use crate::config::NetworkConfig;
use crate::model::network::{Network, NetworkGraph};
use crate::model::ubodt::Ubodt;
use std::path::Path;
use std::sync::Arc;

/// the external map matching engine. each method wraps one constructor of the
/// engine; [`crate::model::factory::ModelFactory`] calls them in dependency order.
///
/// handles are reference counted. a backend must not keep its own copies of the
/// handles it returns, so that dropping the last `Arc` releases the resource.
pub trait MapMatchingBackend: Send + Sync {
    /// loads the road network from `config.file` using the configured id,
    /// source and target columns.
    fn load_network(&self, config: &NetworkConfig) -> Result<Arc<dyn Network>, BackendError>;

    /// builds the routing graph of a loaded network.
    fn build_graph(&self, network: Arc<dyn Network>)
        -> Result<Arc<dyn NetworkGraph>, BackendError>;

    /// reads a precomputed UBODT from `file`.
    fn read_ubodt(&self, file: &Path) -> Result<Arc<dyn Ubodt>, BackendError>;

    /// builds an STMATCH model.
    fn stmatch(
        &self,
        network: Arc<dyn Network>,
        graph: Arc<dyn NetworkGraph>,
    ) -> Result<Arc<dyn MapMatchingModel>, BackendError>;

    /// builds a fast map matching model.
    fn fast_map_match(
        &self,
        network: Arc<dyn Network>,
        graph: Arc<dyn NetworkGraph>,
        ubodt: Arc<dyn Ubodt>,
    ) -> Result<Arc<dyn MapMatchingModel>, BackendError>;
}
