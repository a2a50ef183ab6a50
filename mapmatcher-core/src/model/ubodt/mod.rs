//! upper-bounded origin-destination table (UBODT), the precomputed shortest
//! path lookup that fast map matching queries in place of a live search.
mod ubodt_table;

pub use ubodt_table::Ubodt;
