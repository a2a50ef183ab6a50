use super::{MapMatchingModel, MatchError, MatchParams, MatchResult};
use crate::config::ModelTag;
use crate::model::network::{Network, NetworkGraph};
use crate::model::ubodt::Ubodt;
use std::sync::Arc;
use wkt::TryFromWkt;

/// the model bound to a [`MatchService`], fixed at construction.
#[derive(Clone)]
pub enum ModelHandle {
    Stmatch(Arc<dyn MapMatchingModel>),
    FastMapMatch {
        model: Arc<dyn MapMatchingModel>,
        ubodt: Arc<dyn Ubodt>,
    },
}

impl ModelHandle {
    pub fn model(&self) -> &Arc<dyn MapMatchingModel> {
        match self {
            ModelHandle::Stmatch(model) => model,
            ModelHandle::FastMapMatch { model, .. } => model,
        }
    }

    pub fn model_tag(&self) -> ModelTag {
        match self {
            ModelHandle::Stmatch(_) => ModelTag::Stmatch,
            ModelHandle::FastMapMatch { .. } => ModelTag::Fmm,
        }
    }
}

/// runs map matching requests against a network, graph and model built once
/// by [`crate::model::factory::ModelFactory`]. nothing is written after
/// construction; all handles are released together when the service drops.
///
/// concurrent calls to [`MatchService::match_geometry`] are only as safe as the
/// underlying model. no timeout is applied, so callers serving untrusted traces
/// should bound each call themselves.
pub struct MatchService {
    // drop order: model, graph, network
    model: ModelHandle,
    graph: Arc<dyn NetworkGraph>,
    network: Arc<dyn Network>,
    params: MatchParams,
}

impl MatchService {
    /// assembles a service. `params` must be the record for the model kind of `model`.
    pub(crate) fn new(
        network: Arc<dyn Network>,
        graph: Arc<dyn NetworkGraph>,
        model: ModelHandle,
        params: MatchParams,
    ) -> MatchService {
        MatchService {
            model,
            graph,
            network,
            params,
        }
    }

    /// matches a WKT `LINESTRING` trace to the network using the bound parameters.
    /// the trace is checked for WKT syntax and forwarded to the model unchanged.
    pub fn match_geometry(&self, wkt: &str) -> Result<MatchResult, MatchError> {
        let trace = geo::LineString::<f64>::try_from_wkt_str(wkt).map_err(|e| {
            MatchError::InvalidGeometry {
                wkt: wkt.to_string(),
                message: e.to_string(),
            }
        })?;
        if trace.0.is_empty() {
            return Err(MatchError::InvalidGeometry {
                wkt: wkt.to_string(),
                message: String::from("trace contains no points"),
            });
        }
        log::debug!(
            "matching trace with {} points using {}",
            trace.0.len(),
            self.model_name()
        );
        self.model.model().match_wkt(wkt, &self.params)
    }

    pub fn model_tag(&self) -> ModelTag {
        self.model.model_tag()
    }

    pub fn model_name(&self) -> &str {
        self.model.model().name()
    }

    pub fn params(&self) -> &MatchParams {
        &self.params
    }

    pub fn network(&self) -> &Arc<dyn Network> {
        &self.network
    }

    pub fn graph(&self) -> &Arc<dyn NetworkGraph> {
        &self.graph
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }
}
