mod build_error;
mod model_factory;

pub use build_error::BuildError;
pub use model_factory::ModelFactory;
