mod map_matcher_app;
mod map_matcher_app_error;

pub use map_matcher_app::MapMatcherApp;
pub use map_matcher_app_error::MapMatcherAppError;
