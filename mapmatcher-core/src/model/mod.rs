pub mod backend;
pub mod factory;
pub mod network;
pub mod ubodt;
