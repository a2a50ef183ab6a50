pub mod duration_extension;
