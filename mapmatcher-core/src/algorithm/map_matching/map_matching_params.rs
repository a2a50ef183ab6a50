use crate::config::ModelTag;
use serde::{Deserialize, Serialize};

/// tuning parameters for STMATCH. a field left as `None` was not set in the
/// configuration and the model applies its own default for it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StmatchParams {
    /// number of candidate edges considered per trace point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<usize>,
    /// candidate search radius, in network units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// GPS error, in network units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gps_error: Option<f64>,
    /// factor bounding the shortest path search between candidates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
    /// maximum vehicle speed, in network units per second
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vmax: Option<f64>,
}

impl StmatchParams {
    /// fills every unset field from `base`, typically the defaults a model
    /// implementation constructs for itself.
    pub fn overlay(&self, base: &StmatchParams) -> StmatchParams {
        StmatchParams {
            k: self.k.or(base.k),
            radius: self.radius.or(base.radius),
            gps_error: self.gps_error.or(base.gps_error),
            factor: self.factor.or(base.factor),
            vmax: self.vmax.or(base.vmax),
        }
    }
}

/// tuning parameters for fast map matching. `None` defers to the model default.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FastMapMatchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gps_error: Option<f64>,
}

impl FastMapMatchParams {
    pub fn overlay(&self, base: &FastMapMatchParams) -> FastMapMatchParams {
        FastMapMatchParams {
            k: self.k.or(base.k),
            radius: self.radius.or(base.radius),
            gps_error: self.gps_error.or(base.gps_error),
        }
    }
}

/// parameters bound to a [`super::MatchService`], one variant per model kind.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "model")]
pub enum MatchParams {
    #[serde(rename = "stmatch")]
    Stmatch(StmatchParams),
    #[serde(rename = "fmm")]
    FastMapMatch(FastMapMatchParams),
}

impl MatchParams {
    pub fn model_tag(&self) -> ModelTag {
        match self {
            MatchParams::Stmatch(_) => ModelTag::Stmatch,
            MatchParams::FastMapMatch(_) => ModelTag::Fmm,
        }
    }
}
