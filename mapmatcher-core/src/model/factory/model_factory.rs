use super::BuildError;
use crate::algorithm::map_matching::{MatchService, ModelHandle};
use crate::config::{MapMatcherConfig, ModelConfig, ModelTag};
use crate::model::backend::{BackendError, MapMatchingBackend};
use crate::util::duration_extension::DurationExtension;
use chrono::Local;
use std::sync::Arc;

/// assembles a [`MatchService`] from a validated configuration by calling the
/// collaborator backend in dependency order: network, graph, UBODT (fmm only),
/// model.
///
/// if any step fails, the handles acquired by earlier steps are dropped before
/// the error is returned.
pub struct ModelFactory {
    backend: Arc<dyn MapMatchingBackend>,
}

impl ModelFactory {
    pub fn new(backend: Arc<dyn MapMatchingBackend>) -> ModelFactory {
        ModelFactory { backend }
    }

    pub fn build(&self, config: &MapMatcherConfig) -> Result<MatchService, BuildError> {
        let network_config = config.network();
        let network = with_timing("loading network", || {
            self.backend
                .load_network(network_config)
                .map_err(|e| BuildError::NetworkLoadError {
                    path: network_config.file.clone(),
                    message: e.to_string(),
                })
        })?;
        log::info!(
            "loaded network {:?} with {} edges",
            network.file(),
            network.edge_count()
        );

        let graph = with_timing("building network graph", || {
            self.backend
                .build_graph(network.clone())
                .map_err(|e| BuildError::GraphBuildError(e.to_string()))
        })?;
        log::info!("built network graph with {} vertices", graph.vertex_count());

        let model = match config.model() {
            ModelConfig::Stmatch { .. } => {
                let model = self
                    .backend
                    .stmatch(network.clone(), graph.clone())
                    .map_err(model_build_error(ModelTag::Stmatch))?;
                ModelHandle::Stmatch(model)
            }
            ModelConfig::FastMapMatch { ubodt_file, .. } => {
                let ubodt = with_timing("reading UBODT", || {
                    self.backend
                        .read_ubodt(ubodt_file)
                        .map_err(|e| BuildError::UbodtLoadError {
                            path: ubodt_file.clone(),
                            message: e.to_string(),
                        })
                })?;
                log::info!(
                    "read UBODT {:?} with {} rows",
                    ubodt.file(),
                    ubodt.row_count()
                );
                let model = self
                    .backend
                    .fast_map_match(network.clone(), graph.clone(), ubodt.clone())
                    .map_err(model_build_error(ModelTag::Fmm))?;
                ModelHandle::FastMapMatch { model, ubodt }
            }
        };
        log::info!("built {} model '{}'", model.model_tag(), model.model().name());

        Ok(MatchService::new(network, graph, model, config.params()))
    }
}

fn model_build_error(model: ModelTag) -> impl Fn(BackendError) -> BuildError {
    move |e| BuildError::ModelBuildError {
        model,
        message: e.to_string(),
    }
}

/// runs a build step, logging its duration
fn with_timing<T>(
    name: &str,
    thunk: impl FnOnce() -> Result<T, BuildError>,
) -> Result<T, BuildError> {
    let start = Local::now();
    let result = thunk();
    let duration = (Local::now() - start).to_std().unwrap_or_default();
    log::info!("finished {name} with duration {}", duration.hhmmss());
    result
}
