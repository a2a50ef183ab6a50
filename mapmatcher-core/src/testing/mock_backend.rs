use crate::algorithm::map_matching::{
    FastMapMatchParams, MapMatchingModel, MatchError, MatchParams, MatchResult, PointMatch,
    StmatchParams,
};
use crate::config::NetworkConfig;
use crate::model::backend::{BackendError, MapMatchingBackend};
use crate::model::network::{EdgeId, Network, NetworkGraph};
use crate::model::ubodt::Ubodt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use wkt::TryFromWkt;

/// search radius the mock models use when the configuration leaves `r` unset
pub const MOCK_DEFAULT_RADIUS: f64 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleKind {
    Network,
    Graph,
    Ubodt,
    Model,
}

impl HandleKind {
    fn index(&self) -> usize {
        match self {
            HandleKind::Network => 0,
            HandleKind::Graph => 1,
            HandleKind::Ubodt => 2,
            HandleKind::Model => 3,
        }
    }
}

/// steps of the build that the mock should fail
#[derive(Clone, Copy, Debug, Default)]
pub struct MockFailures {
    pub network: bool,
    pub graph: bool,
    pub ubodt: bool,
    pub model: bool,
}

#[derive(Default)]
struct MockState {
    calls: Mutex<Vec<String>>,
    created: [AtomicUsize; 4],
    live: [AtomicUsize; 4],
    match_calls: AtomicUsize,
    last_params: Mutex<Option<MatchParams>>,
}

impl MockState {
    fn record(&self, call: &str) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call.to_string());
        }
    }
}

/// counts one live handle of a kind for as long as it exists
struct LiveToken {
    state: Arc<MockState>,
    kind: HandleKind,
}

impl LiveToken {
    fn new(state: &Arc<MockState>, kind: HandleKind) -> LiveToken {
        state.created[kind.index()].fetch_add(1, Ordering::SeqCst);
        state.live[kind.index()].fetch_add(1, Ordering::SeqCst);
        LiveToken {
            state: state.clone(),
            kind,
        }
    }
}

impl Drop for LiveToken {
    fn drop(&mut self) {
        self.state.live[self.kind.index()].fetch_sub(1, Ordering::SeqCst);
    }
}

/// a collaborator backend that records every constructor call and counts live
/// handles through drop hooks. network and UBODT files must exist on disk.
///
/// its models match each trace point to edge `floor(x)` at distance `|y|`,
/// failing when a point is farther than the search radius.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<MockState>,
    failures: MockFailures,
}

impl MockBackend {
    pub fn failing(failures: MockFailures) -> MockBackend {
        MockBackend {
            state: Arc::new(MockState::default()),
            failures,
        }
    }

    /// constructor calls in the order they were made
    pub fn calls(&self) -> Vec<String> {
        self.state
            .calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn created(&self, kind: HandleKind) -> usize {
        self.state.created[kind.index()].load(Ordering::SeqCst)
    }

    pub fn live(&self, kind: HandleKind) -> usize {
        self.state.live[kind.index()].load(Ordering::SeqCst)
    }

    pub fn live_total(&self) -> usize {
        self.state
            .live
            .iter()
            .map(|n| n.load(Ordering::SeqCst))
            .sum()
    }

    /// number of `match_wkt` calls that reached a model
    pub fn match_calls(&self) -> usize {
        self.state.match_calls.load(Ordering::SeqCst)
    }

    /// parameters passed with the most recent `match_wkt` call
    pub fn last_params(&self) -> Option<MatchParams> {
        self.state
            .last_params
            .lock()
            .ok()
            .and_then(|p| p.clone())
    }

    pub fn stmatch_defaults() -> StmatchParams {
        StmatchParams {
            k: Some(8),
            radius: Some(MOCK_DEFAULT_RADIUS),
            gps_error: Some(50.0),
            factor: Some(1.5),
            vmax: Some(30.0),
        }
    }

    pub fn fmm_defaults() -> FastMapMatchParams {
        FastMapMatchParams {
            k: Some(8),
            radius: Some(MOCK_DEFAULT_RADIUS),
            gps_error: Some(50.0),
        }
    }
}

struct MockNetwork {
    file: PathBuf,
    _token: LiveToken,
}

impl Network for MockNetwork {
    fn file(&self) -> &Path {
        &self.file
    }

    fn edge_count(&self) -> usize {
        0
    }
}

struct MockGraph {
    _network: Arc<dyn Network>,
    _token: LiveToken,
}

impl NetworkGraph for MockGraph {
    fn vertex_count(&self) -> usize {
        0
    }
}

struct MockUbodt {
    file: PathBuf,
    _token: LiveToken,
}

impl Ubodt for MockUbodt {
    fn file(&self) -> &Path {
        &self.file
    }

    fn row_count(&self) -> usize {
        0
    }
}

struct MockModel {
    name: &'static str,
    state: Arc<MockState>,
    _network: Arc<dyn Network>,
    _graph: Arc<dyn NetworkGraph>,
    ubodt: Option<Arc<dyn Ubodt>>,
    _token: LiveToken,
}

impl MapMatchingBackend for MockBackend {
    fn load_network(&self, config: &NetworkConfig) -> Result<Arc<dyn Network>, BackendError> {
        self.state.record("network");
        if self.failures.network || !config.file.is_file() {
            return Err(BackendError::ReadError {
                path: config.file.clone(),
                message: String::from("cannot open network file"),
            });
        }
        Ok(Arc::new(MockNetwork {
            file: config.file.clone(),
            _token: LiveToken::new(&self.state, HandleKind::Network),
        }))
    }

    fn build_graph(
        &self,
        network: Arc<dyn Network>,
    ) -> Result<Arc<dyn NetworkGraph>, BackendError> {
        self.state.record("graph");
        if self.failures.graph {
            return Err(BackendError::InternalError(String::from(
                "network has no edges",
            )));
        }
        Ok(Arc::new(MockGraph {
            _network: network,
            _token: LiveToken::new(&self.state, HandleKind::Graph),
        }))
    }

    fn read_ubodt(&self, file: &Path) -> Result<Arc<dyn Ubodt>, BackendError> {
        self.state.record("ubodt");
        if self.failures.ubodt || !file.is_file() {
            return Err(BackendError::ReadError {
                path: file.to_path_buf(),
                message: String::from("cannot open UBODT file"),
            });
        }
        Ok(Arc::new(MockUbodt {
            file: file.to_path_buf(),
            _token: LiveToken::new(&self.state, HandleKind::Ubodt),
        }))
    }

    fn stmatch(
        &self,
        network: Arc<dyn Network>,
        graph: Arc<dyn NetworkGraph>,
    ) -> Result<Arc<dyn MapMatchingModel>, BackendError> {
        self.state.record("stmatch");
        if self.failures.model {
            return Err(BackendError::InternalError(String::from(
                "cannot build stmatch model",
            )));
        }
        Ok(Arc::new(MockModel {
            name: "mock_stmatch",
            state: self.state.clone(),
            _network: network,
            _graph: graph,
            ubodt: None,
            _token: LiveToken::new(&self.state, HandleKind::Model),
        }))
    }

    fn fast_map_match(
        &self,
        network: Arc<dyn Network>,
        graph: Arc<dyn NetworkGraph>,
        ubodt: Arc<dyn Ubodt>,
    ) -> Result<Arc<dyn MapMatchingModel>, BackendError> {
        self.state.record("fmm");
        if self.failures.model {
            return Err(BackendError::InternalError(String::from(
                "cannot build fmm model",
            )));
        }
        Ok(Arc::new(MockModel {
            name: "mock_fmm",
            state: self.state.clone(),
            _network: network,
            _graph: graph,
            ubodt: Some(ubodt),
            _token: LiveToken::new(&self.state, HandleKind::Model),
        }))
    }
}

impl MapMatchingModel for MockModel {
    fn name(&self) -> &str {
        self.name
    }

    fn match_wkt(&self, wkt: &str, params: &MatchParams) -> Result<MatchResult, MatchError> {
        self.state.match_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.state.last_params.lock() {
            *last = Some(params.clone());
        }

        let radius = match (params, self.ubodt.is_some()) {
            (MatchParams::Stmatch(p), false) => p.overlay(&MockBackend::stmatch_defaults()).radius,
            (MatchParams::FastMapMatch(p), true) => p.overlay(&MockBackend::fmm_defaults()).radius,
            _ => {
                return Err(MatchError::ModelFailure(format!(
                    "{} received {} parameters",
                    self.name,
                    params.model_tag()
                )))
            }
        }
        .unwrap_or(MOCK_DEFAULT_RADIUS);

        let trace = geo::LineString::<f64>::try_from_wkt_str(wkt).map_err(|e| {
            MatchError::InvalidGeometry {
                wkt: wkt.to_string(),
                message: e.to_string(),
            }
        })?;

        let mut point_matches = Vec::with_capacity(trace.0.len());
        let mut matched_path: Vec<EdgeId> = vec![];
        let mut indices = Vec::with_capacity(trace.0.len());
        for (idx, coord) in trace.0.iter().enumerate() {
            let distance = coord.y.abs();
            if distance > radius {
                return Err(MatchError::ModelFailure(format!(
                    "no edge within radius {radius} of point {idx}"
                )));
            }
            let edge_id = EdgeId(coord.x.floor() as i64);
            if matched_path.last() != Some(&edge_id) {
                matched_path.push(edge_id);
            }
            indices.push(matched_path.len() - 1);
            point_matches.push(PointMatch::new(edge_id, distance, coord.x - coord.x.floor()));
        }

        Ok(MatchResult::new(point_matches, matched_path, indices, trace))
    }
}
