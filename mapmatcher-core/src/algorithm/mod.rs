pub mod map_matching;
