use super::ModelTag;
use std::path::PathBuf;

/// structured events reported while a configuration is validated. delivered to
/// the optional callback passed to [`super::MapMatcherConfig::from_file_with_diagnostics`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigDiagnostic {
    /// a file named in the configuration was only found relative to the
    /// configuration file's directory and was rewritten.
    FileResolved {
        field: String,
        original: PathBuf,
        resolved: PathBuf,
    },
    /// the network columns in effect after defaults were applied.
    NetworkColumns {
        id: String,
        source: String,
        target: String,
    },
    /// a `parameters` key that the selected model does not read.
    IgnoredParameter { key: String, model: ModelTag },
}

impl std::fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigDiagnostic::FileResolved {
                field,
                original,
                resolved,
            } => write!(f, "updated {field}: {original:?} -> {resolved:?}"),
            ConfigDiagnostic::NetworkColumns { id, source, target } => {
                write!(f, "network columns id={id}, source={source}, target={target}")
            }
            ConfigDiagnostic::IgnoredParameter { key, model } => {
                write!(f, "parameter '{key}' is not used by model '{model}' and is ignored")
            }
        }
    }
}
