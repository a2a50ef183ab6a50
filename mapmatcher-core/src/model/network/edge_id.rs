use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// id of a road network edge, as read from the network's id column.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    From,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct EdgeId(pub i64);
