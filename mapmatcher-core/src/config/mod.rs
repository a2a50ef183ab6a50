mod config_diagnostic;
mod config_error;
mod config_json_extension;
mod map_matcher_config;
mod model_tag;
mod network_config;
pub mod ops;
pub mod schema;

pub use config_diagnostic::ConfigDiagnostic;
pub use config_error::ConfigError;
pub use config_json_extension::ConfigJsonExtensions;
pub use map_matcher_config::{MapMatcherConfig, ModelConfig};
pub use model_tag::ModelTag;
pub use network_config::NetworkConfig;
