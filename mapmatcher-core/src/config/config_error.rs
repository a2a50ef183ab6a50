use super::ModelTag;
use itertools::Itertools;
use std::path::PathBuf;

/// failures while reading and validating a map matcher configuration file.
/// all variants are raised before any network, graph or model resource is touched.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("configuration file {0:?} is missing")]
    FileNotFound(PathBuf),
    #[error("configuration is missing required field '{0}'")]
    MissingField(String),
    #[error(
        "model not found for '{tag}', must be one of: [{all}]",
        tag = .0,
        all = ModelTag::ALL.iter().join(", ")
    )]
    UnknownModel(String),
    #[error("configuration field '{field}' is invalid: {message}")]
    InvalidField { field: String, message: String },
    #[error("failure parsing configuration file {path:?}: {message}")]
    ParseError { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_display() {
        let error = ConfigError::UnknownModel(String::from("3"));
        assert_eq!(
            error.to_string(),
            "model not found for '3', must be one of: [stmatch, fmm]"
        );
    }
}
