use super::{
    config_json_extension::dotted, ops, ConfigDiagnostic, ConfigError, ConfigJsonExtensions,
    ModelTag, NetworkConfig,
};
use crate::algorithm::map_matching::{FastMapMatchParams, MatchParams, StmatchParams};
use config::FileFormat;
use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const MODEL: [&str; 1] = ["model"];
const NETWORK_FILE: [&str; 3] = ["input", "network", "file"];
const NETWORK_ID: [&str; 3] = ["input", "network", "id"];
const NETWORK_SOURCE: [&str; 3] = ["input", "network", "source"];
const NETWORK_TARGET: [&str; 3] = ["input", "network", "target"];
const UBODT_FILE: [&str; 3] = ["input", "ubodt", "file"];
const PARAMETERS: &str = "parameters";

/// `parameters` keys read for each model kind.
const STMATCH_PARAMETER_KEYS: [&str; 5] = ["k", "r", "e", "f", "vmax"];
const FMM_PARAMETER_KEYS: [&str; 3] = ["k", "r", "e"];

/// a validated map matcher configuration. built only through the `from_*`
/// constructors, which guarantee that a UBODT file is named exactly when the
/// fmm model is selected and that the parameter record matches the model.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapMatcherConfig {
    network: NetworkConfig,
    #[serde(flatten)]
    model: ModelConfig,
}

/// the model-specific part of a [`MapMatcherConfig`].
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "model")]
pub enum ModelConfig {
    #[serde(rename = "stmatch")]
    Stmatch { params: StmatchParams },
    #[serde(rename = "fmm")]
    FastMapMatch {
        ubodt_file: PathBuf,
        params: FastMapMatchParams,
    },
}

impl MapMatcherConfig {
    /// reads and validates the configuration file at `path`.
    pub fn from_file(path: &Path) -> Result<MapMatcherConfig, ConfigError> {
        Self::from_file_with_diagnostics(path, |_| {})
    }

    /// reads and validates the configuration file at `path`, reporting
    /// path rewrites, effective network columns and ignored parameters
    /// to `on_diagnostic`.
    pub fn from_file_with_diagnostics<F>(
        path: &Path,
        on_diagnostic: F,
    ) -> Result<MapMatcherConfig, ConfigError>
    where
        F: FnMut(&ConfigDiagnostic),
    {
        let raw = ops::read_raw_config(path)?;
        Self::from_raw(&raw, path, on_diagnostic)
    }

    /// validates configuration text as if it had been read from `config_file`.
    /// relative file names are resolved against the directory of `config_file`.
    pub fn from_str(
        contents: &str,
        config_file: &Path,
        format: FileFormat,
    ) -> Result<MapMatcherConfig, ConfigError> {
        let raw = ops::parse_raw_config(contents, format, config_file)?;
        Self::from_raw(&raw, config_file, |_| {})
    }

    /// validates an untyped configuration tree. `raw` is only read.
    ///
    /// fields are checked in this order, and no file other than the
    /// configuration itself is touched until the last step:
    ///   1. `model` and `input.network.file` are present
    ///   2. `model` names a known model
    ///   3. model-specific fields (`input.ubodt.file` for fmm) and `parameters`
    ///   4. network column names, falling back to `id`, `source`, `target`
    ///   5. file names are resolved against the configuration directory
    pub fn from_raw<F>(
        raw: &Value,
        config_file: &Path,
        mut on_diagnostic: F,
    ) -> Result<MapMatcherConfig, ConfigError>
    where
        F: FnMut(&ConfigDiagnostic),
    {
        let model_value = raw
            .get_config_value(&MODEL)?
            .ok_or_else(|| ConfigError::MissingField(dotted(&MODEL)))?;
        let network_file = raw.get_config_path(&NETWORK_FILE)?;

        let model_tag = match model_value {
            Value::String(s) => ModelTag::from_str(s)?,
            other => return Err(ConfigError::UnknownModel(other.to_string())),
        };

        let model = match model_tag {
            ModelTag::Stmatch => ModelConfig::Stmatch {
                params: read_stmatch_params(raw)?,
            },
            ModelTag::Fmm => {
                let ubodt_file = raw.get_config_path(&UBODT_FILE)?;
                ModelConfig::FastMapMatch {
                    ubodt_file: PathBuf::from(ubodt_file),
                    params: read_fmm_params(raw)?,
                }
            }
        };
        report_ignored_parameters(raw, model_tag, &mut on_diagnostic);

        let id = raw
            .get_config_string_optional(&NETWORK_ID)?
            .unwrap_or_else(|| String::from(NetworkConfig::DEFAULT_ID_COLUMN));
        let source = raw
            .get_config_string_optional(&NETWORK_SOURCE)?
            .unwrap_or_else(|| String::from(NetworkConfig::DEFAULT_SOURCE_COLUMN));
        let target = raw
            .get_config_string_optional(&NETWORK_TARGET)?
            .unwrap_or_else(|| String::from(NetworkConfig::DEFAULT_TARGET_COLUMN));
        let columns = ConfigDiagnostic::NetworkColumns {
            id: id.clone(),
            source: source.clone(),
            target: target.clone(),
        };
        log::debug!("{columns}");
        on_diagnostic(&columns);

        let config_dir = ops::config_directory(config_file)?;
        let file = resolve_file(
            &NETWORK_FILE,
            PathBuf::from(network_file),
            &config_dir,
            &mut on_diagnostic,
        );
        let model = match model {
            ModelConfig::FastMapMatch { ubodt_file, params } => ModelConfig::FastMapMatch {
                ubodt_file: resolve_file(&UBODT_FILE, ubodt_file, &config_dir, &mut on_diagnostic),
                params,
            },
            stmatch => stmatch,
        };

        Ok(MapMatcherConfig {
            network: NetworkConfig {
                file,
                id,
                source,
                target,
            },
            model,
        })
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    pub fn model_tag(&self) -> ModelTag {
        match self.model {
            ModelConfig::Stmatch { .. } => ModelTag::Stmatch,
            ModelConfig::FastMapMatch { .. } => ModelTag::Fmm,
        }
    }

    /// the UBODT file, present exactly when the fmm model is selected
    pub fn ubodt_file(&self) -> Option<&Path> {
        match &self.model {
            ModelConfig::Stmatch { .. } => None,
            ModelConfig::FastMapMatch { ubodt_file, .. } => Some(ubodt_file.as_path()),
        }
    }

    pub fn params(&self) -> MatchParams {
        match &self.model {
            ModelConfig::Stmatch { params } => MatchParams::Stmatch(params.clone()),
            ModelConfig::FastMapMatch { params, .. } => MatchParams::FastMapMatch(params.clone()),
        }
    }
}

impl TryFrom<&Path> for MapMatcherConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        MapMatcherConfig::from_file(path)
    }
}

fn read_stmatch_params(raw: &Value) -> Result<StmatchParams, ConfigError> {
    Ok(StmatchParams {
        k: raw.get_config_usize_optional(&[PARAMETERS, "k"])?,
        radius: raw.get_config_f64_optional(&[PARAMETERS, "r"])?,
        gps_error: raw.get_config_f64_optional(&[PARAMETERS, "e"])?,
        factor: raw.get_config_f64_optional(&[PARAMETERS, "f"])?,
        vmax: raw.get_config_f64_optional(&[PARAMETERS, "vmax"])?,
    })
}

fn read_fmm_params(raw: &Value) -> Result<FastMapMatchParams, ConfigError> {
    Ok(FastMapMatchParams {
        k: raw.get_config_usize_optional(&[PARAMETERS, "k"])?,
        radius: raw.get_config_f64_optional(&[PARAMETERS, "r"])?,
        gps_error: raw.get_config_f64_optional(&[PARAMETERS, "e"])?,
    })
}

fn report_ignored_parameters<F>(raw: &Value, model: ModelTag, on_diagnostic: &mut F)
where
    F: FnMut(&ConfigDiagnostic),
{
    let accepted: &[&str] = match model {
        ModelTag::Stmatch => &STMATCH_PARAMETER_KEYS,
        ModelTag::Fmm => &FMM_PARAMETER_KEYS,
    };
    let Some(parameters) = raw.get(PARAMETERS).and_then(Value::as_object) else {
        return;
    };
    for key in parameters
        .keys()
        .filter(|k| !accepted.contains(&k.as_str()))
        .sorted()
    {
        let diagnostic = ConfigDiagnostic::IgnoredParameter {
            key: format!("{PARAMETERS}.{key}"),
            model,
        };
        log::warn!("{diagnostic}");
        on_diagnostic(&diagnostic);
    }
}

fn resolve_file<F>(
    path: &[&str],
    file: PathBuf,
    config_dir: &Path,
    on_diagnostic: &mut F,
) -> PathBuf
where
    F: FnMut(&ConfigDiagnostic),
{
    match ops::resolve_relative_file(&file, config_dir) {
        None => file,
        Some(resolved) => {
            let diagnostic = ConfigDiagnostic::FileResolved {
                field: dotted(path),
                original: file,
                resolved: resolved.clone(),
            };
            log::info!("{diagnostic}");
            on_diagnostic(&diagnostic);
            resolved
        }
    }
}
