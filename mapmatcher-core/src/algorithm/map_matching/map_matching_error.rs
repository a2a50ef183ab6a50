/// failure of a single map matching call. never affects the state of the
/// [`super::MatchService`] that produced it.
#[derive(thiserror::Error, Debug)]
pub enum MatchError {
    #[error("invalid trace geometry '{wkt}': {message}")]
    InvalidGeometry { wkt: String, message: String },
    #[error("map matching failed: {0}")]
    ModelFailure(String),
}
