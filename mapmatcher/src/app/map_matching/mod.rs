mod map_matching_request;
mod map_matching_response;

#[cfg(test)]
mod map_matching_tests;

pub use map_matching_request::MapMatchingRequest;
pub use map_matching_response::{MapMatchingResponse, PointMatchResponse};
