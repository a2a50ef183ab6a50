//! Map matching through the app with the mock collaborator backend.
//!
//! The mock matches each trace point to edge `floor(x)` at distance `|y|`, so a
//! trace running east along y=0 visits edges 0, 1, 2, ... in order.

use crate::app::map_matcher::{MapMatcherApp, MapMatcherAppError};
use indoc::indoc;
use mapmatcher_core::config::{ConfigError, ModelTag};
use mapmatcher_core::model::factory::BuildError;
use mapmatcher_core::testing::{HandleKind, MockBackend};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

fn test_config(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("app")
        .join("map_matcher")
        .join("test")
        .join(name)
}

fn load_app(name: &str) -> (MockBackend, MapMatcherApp) {
    let backend = MockBackend::default();
    let app = MapMatcherApp::try_new(&test_config(name), Arc::new(backend.clone()))
        .expect("failed to load map matching config");
    (backend, app)
}

fn edge_ids(response: &serde_json::Value, key: &str) -> Vec<i64> {
    response[key]
        .as_array()
        .expect("array of edges")
        .iter()
        .map(|v| v.as_i64().expect("edge id is i64"))
        .collect()
}

#[test]
fn test_stmatch_app() {
    let (backend, app) = load_app("stmatch_config.json");
    assert_eq!(app.config().model_tag(), ModelTag::Stmatch);
    assert_eq!(backend.calls(), vec!["network", "graph", "stmatch"]);

    let queries = vec![json!({
        "wkt": "LINESTRING(0.5 0.1, 1.25 0.2, 1.75 0.1, 2.5 0.3)",
        "trip_id": "a"
    })];
    let result = app.map_match(&queries).unwrap();
    assert_eq!(result.len(), 1);
    let response = &result[0];
    assert_eq!(response["model"], json!("stmatch"));
    assert_eq!(response["request"]["trip_id"], json!("a"));
    assert_eq!(edge_ids(response, "matched_path"), vec![0, 1, 2]);
    assert_eq!(response["indices"], json!([0, 1, 1, 2]));
    let point_edges: Vec<i64> = response["point_matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["edge_id"].as_i64().unwrap())
        .collect();
    assert_eq!(point_edges, vec![0, 1, 1, 2]);
}

#[test]
fn test_fmm_toml_app() {
    let (backend, app) = load_app("fmm_config.toml");
    assert_eq!(app.service().model_tag(), ModelTag::Fmm);
    assert_eq!(backend.calls(), vec!["network", "graph", "ubodt", "fmm"]);
    assert_eq!(backend.live(HandleKind::Ubodt), 1);

    let result = app.map_match_wkt("LINESTRING(3.5 0.0, 3.9 0.1)").unwrap();
    assert_eq!(result.matched_path.len(), 1);
}

#[test]
fn test_fmm_json5_app_uses_backend_defaults() {
    let (backend, app) = load_app("fmm_config.json5");
    // y = 40 is inside the mock's default radius
    let result = app.map_match_wkt("LINESTRING(0.5 40.0, 1.5 0.0)").unwrap();
    assert_eq!(result.point_matches.len(), 2);
    assert_eq!(backend.match_calls(), 1);
}

#[test]
fn test_responses_keep_query_order() {
    let (_backend, app) = load_app("stmatch_config.json");
    let queries: Vec<serde_json::Value> = (0..4)
        .map(|i| json!({ "wkt": format!("LINESTRING({i}.5 0, {i}.6 0)"), "index": i }))
        .collect();
    let result = app.map_match(&queries).unwrap();
    assert_eq!(result.len(), 4);
    for (i, response) in result.iter().enumerate() {
        assert_eq!(response["request"]["index"], json!(i));
        assert_eq!(edge_ids(response, "matched_path"), vec![i as i64]);
    }
}

#[test]
fn test_failed_queries_are_packaged() {
    let (_backend, app) = load_app("stmatch_config.json");
    let queries = vec![
        json!({"wkt": "LINESTRING(0.5 0, 1.5 0)"}),
        json!({"wkt": "POINT(1 2)"}),
        json!({"trace": []}),
        json!({"wkt": "LINESTRING(0.5 100, 1.5 0)"}),
        json!({"wkt": "LINESTRING(1.5 0, 2.5 0)"}),
    ];
    let result = app.map_match(&queries).unwrap();
    assert_eq!(result.len(), 5);
    assert!(result[0].get("error").is_none());
    for failed in &result[1..4] {
        assert!(failed["error"].is_string(), "expected error in {failed}");
        assert!(failed.get("matched_path").is_none());
    }
    assert_eq!(result[1]["request"], queries[1]);
    assert!(result[2]["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid request"));
    assert_eq!(edge_ids(&result[4], "matched_path"), vec![1, 2]);
}

#[test]
fn test_empty_batch() {
    let (backend, app) = load_app("stmatch_config.json");
    assert!(app.map_match(&[]).unwrap().is_empty());
    assert_eq!(backend.match_calls(), 0);
}

#[test]
fn test_unknown_model_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let conf_file = dir.path().join("config.json");
    let contents = indoc! {r#"
        {
            "model": "hmm",
            "input": {"network": {"file": "network_edges.csv"}}
        }
    "#};
    std::fs::write(&conf_file, contents).unwrap();

    let backend = MockBackend::default();
    match MapMatcherApp::try_new(&conf_file, Arc::new(backend.clone())) {
        Err(MapMatcherAppError::ConfigError(ConfigError::UnknownModel(tag))) => {
            assert_eq!(tag, "hmm")
        }
        Err(other) => panic!("expected UnknownModel, found {other}"),
        Ok(_) => panic!("expected UnknownModel"),
    }
    assert!(backend.calls().is_empty());
}

#[test]
fn test_missing_ubodt_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("edges.csv"), "id,source,target\n").unwrap();
    let conf_file = dir.path().join("config.toml");
    let contents = indoc! {r#"
        model = "fmm"

        [input.network]
        file = "edges.csv"

        [input.ubodt]
        file = "missing_ubodt.csv"
    "#};
    std::fs::write(&conf_file, contents).unwrap();

    let backend = MockBackend::default();
    let result = MapMatcherApp::try_new(&conf_file, Arc::new(backend.clone()));
    assert!(matches!(
        result,
        Err(MapMatcherAppError::BuildError(
            BuildError::UbodtLoadError { .. }
        ))
    ));
    assert_eq!(backend.calls(), vec!["network", "graph", "ubodt"]);
    assert_eq!(backend.live_total(), 0);
}

#[test]
fn test_app_drop_releases_handles() {
    let (backend, app) = load_app("fmm_config.toml");
    assert_eq!(backend.live_total(), 4);
    drop(app);
    assert_eq!(backend.live_total(), 0);
}
