//! configuration value naming which map matching algorithm to run.
use super::ConfigError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, JsonSchema)]
pub enum ModelTag {
    /// STMATCH, matching without a precomputed shortest path table
    #[serde(rename = "stmatch")]
    Stmatch,
    /// fast map matching backed by an upper-bounded origin-destination table
    #[serde(rename = "fmm")]
    Fmm,
}

impl ModelTag {
    pub const ALL: [ModelTag; 2] = [ModelTag::Stmatch, ModelTag::Fmm];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTag::Stmatch => "stmatch",
            ModelTag::Fmm => "fmm",
        }
    }
}

impl Display for ModelTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModelTag {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownModel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(ModelTag::from_str("stmatch").unwrap(), ModelTag::Stmatch);
        assert_eq!(ModelTag::from_str("fmm").unwrap(), ModelTag::Fmm);
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        match ModelTag::from_str("FMM") {
            Err(ConfigError::UnknownModel(tag)) => assert_eq!(tag, "FMM"),
            other => panic!("expected UnknownModel, found {other:?}"),
        }
    }

    #[test]
    fn test_unknown_model_message_lists_models() {
        let error = ModelTag::from_str("hmm").unwrap_err();
        assert_eq!(
            error.to_string(),
            "model not found for 'hmm', must be one of: [stmatch, fmm]"
        );
    }

    #[test]
    fn test_serde_names_match_display() {
        for tag in ModelTag::ALL {
            let json = serde_json::to_value(tag).unwrap();
            assert_eq!(json.as_str().unwrap(), tag.to_string());
        }
    }
}
