use crate::config::ConfigError;
use config::{Config, FileFormat};
use std::path::{Path, PathBuf};

/// picks the parser for a configuration file from its extension. files with an
/// unrecognized (or no) extension are read as JSON.
pub fn file_format_for(path: &Path) -> FileFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => FileFormat::Toml,
        Some("json5") => FileFormat::Json5,
        _ => FileFormat::Json,
    }
}

/// reads a configuration file into an untyped tree. the file must exist.
pub fn read_raw_config(path: &Path) -> Result<serde_json::Value, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let source = config::File::from(path)
        .format(file_format_for(path))
        .required(true);
    Config::builder()
        .add_source(source)
        .build()
        .and_then(|c| c.try_deserialize::<serde_json::Value>())
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// parses configuration text into an untyped tree. `path` is only used for
/// error reporting.
pub fn parse_raw_config(
    contents: &str,
    format: FileFormat,
    path: &Path,
) -> Result<serde_json::Value, ConfigError> {
    Config::builder()
        .add_source(config::File::from_str(contents, format))
        .build()
        .and_then(|c| c.try_deserialize::<serde_json::Value>())
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// directory containing the configuration file, as an absolute path.
pub fn config_directory(config_file: &Path) -> Result<PathBuf, ConfigError> {
    let absolute = std::path::absolute(config_file).map_err(|e| ConfigError::InvalidField {
        field: String::from("<config file>"),
        message: format!("cannot make {config_file:?} absolute: {e}"),
    })?;
    Ok(absolute
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/")))
}

/// resolves a file named in the configuration. a file that exists as given is
/// kept as given. otherwise it is looked up relative to `config_dir`, and the
/// joined path is returned if a file exists there. returns `None` when neither
/// location holds a file, in which case the caller keeps the original name.
pub fn resolve_relative_file(file: &Path, config_dir: &Path) -> Option<PathBuf> {
    if file.is_file() {
        return None;
    }
    let candidate = config_dir.join(file);
    if candidate.is_file() {
        Some(candidate)
    } else {
        None
    }
}
