use super::MapMatcherAppError;
use crate::app::map_matching::{MapMatchingRequest, MapMatchingResponse};
use chrono::Local;
use mapmatcher_core::algorithm::map_matching::{MatchResult, MatchService};
use mapmatcher_core::config::MapMatcherConfig;
use mapmatcher_core::model::backend::MapMatchingBackend;
use mapmatcher_core::model::factory::ModelFactory;
use mapmatcher_core::util::duration_extension::DurationExtension;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

/// a running map matcher: a validated configuration and the [`MatchService`]
/// built from it. requests are answered with the model and parameters chosen by
/// the configuration file.
pub struct MapMatcherApp {
    config: MapMatcherConfig,
    service: MatchService,
}

impl MapMatcherApp {
    /// validates the configuration file at `config_path`, then builds the
    /// service through `backend`. nothing is loaded if validation fails.
    pub fn try_new(
        config_path: &Path,
        backend: Arc<dyn MapMatchingBackend>,
    ) -> Result<MapMatcherApp, MapMatcherAppError> {
        let config = MapMatcherConfig::from_file_with_diagnostics(config_path, |d| {
            log::debug!("{d}");
        })?;
        MapMatcherApp::new(config, backend)
    }

    pub fn new(
        config: MapMatcherConfig,
        backend: Arc<dyn MapMatchingBackend>,
    ) -> Result<MapMatcherApp, MapMatcherAppError> {
        let service = ModelFactory::new(backend).build(&config)?;
        Ok(MapMatcherApp { config, service })
    }

    /// runs each query in order and returns one JSON response per query. a query
    /// that fails produces `{"request": .., "error": ..}` in its slot.
    pub fn map_match(&self, queries: &[Value]) -> Result<Vec<Value>, MapMatcherAppError> {
        let start = Local::now();
        let responses = queries
            .iter()
            .map(|query| match self.run_single_query(query) {
                Ok(response) => Ok(response),
                Err(MapMatcherAppError::SerializationError(e)) => {
                    Err(MapMatcherAppError::SerializationError(e))
                }
                Err(e) => Ok(package_error(query, &e)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let duration = (Local::now() - start).to_std().unwrap_or_default();
        log::info!(
            "matched {} traces with duration {}",
            queries.len(),
            duration.hhmmss()
        );
        Ok(responses)
    }

    /// matches a single WKT trace
    pub fn map_match_wkt(&self, wkt: &str) -> Result<MatchResult, MapMatcherAppError> {
        let result = self.service.match_geometry(wkt)?;
        Ok(result)
    }

    pub fn config(&self) -> &MapMatcherConfig {
        &self.config
    }

    pub fn service(&self) -> &MatchService {
        &self.service
    }

    fn run_single_query(&self, query: &Value) -> Result<Value, MapMatcherAppError> {
        let request: MapMatchingRequest = serde_json::from_value(query.clone())
            .map_err(|e| MapMatcherAppError::InvalidRequest(e.to_string()))?;
        request
            .validate()
            .map_err(MapMatcherAppError::InvalidRequest)?;
        let result = self.map_match_wkt(&request.wkt)?;
        let response = MapMatchingResponse::new(query.clone(), self.service.model_tag(), result);
        let json = serde_json::to_value(response)?;
        Ok(json)
    }
}

fn package_error(request: &Value, error: &MapMatcherAppError) -> Value {
    serde_json::json!({
        "request": request,
        "error": error.to_string()
    })
}
