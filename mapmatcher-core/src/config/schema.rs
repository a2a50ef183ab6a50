//! typed mirror of the configuration file, used to publish its JSON Schema.
//! validation itself runs over the untyped tree in [`super::MapMatcherConfig::from_raw`].
use super::ModelTag;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
pub struct MapMatcherConfigFile {
    /// map matching algorithm to run
    pub model: ModelTag,
    pub input: InputSection,
    /// tuning parameters. anything left out uses the model's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ParametersSection>,
}

#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
pub struct InputSection {
    pub network: NetworkSection,
    /// required when `model` is `fmm`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ubodt: Option<UbodtSection>,
}

#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
pub struct NetworkSection {
    /// road network file. relative names are also looked up next to the configuration file
    pub file: String,
    /// edge id column, default `id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// edge source node column, default `source`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// edge target node column, default `target`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
pub struct UbodtSection {
    /// precomputed upper-bounded origin-destination table
    pub file: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
pub struct ParametersSection {
    /// number of candidates per trace point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<u32>,
    /// search radius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
    /// GPS error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<f64>,
    /// shortest path bound factor (stmatch only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f: Option<f64>,
    /// maximum speed (stmatch only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vmax: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_top_level_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(MapMatcherConfigFile)).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("model"));
        assert!(properties.contains_key("input"));
        assert!(properties.contains_key("parameters"));
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"model"));
        assert!(required.contains(&"input"));
        assert!(!required.contains(&"parameters"));
    }

    #[test]
    fn test_example_config_matches_schema_types() {
        let example = serde_json::json!({
            "model": "fmm",
            "input": {
                "network": {"file": "edges.shp", "id": "fid"},
                "ubodt": {"file": "ubodt.txt"}
            },
            "parameters": {"k": 8, "r": 0.003, "e": 0.0005}
        });
        let parsed: MapMatcherConfigFile = serde_json::from_value(example).unwrap();
        assert_eq!(parsed.model, ModelTag::Fmm);
        assert!(parsed.input.ubodt.is_some());
    }
}
