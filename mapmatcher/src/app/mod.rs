pub mod map_matcher;
pub mod map_matching;
