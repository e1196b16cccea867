pub mod episode;
pub mod fitness;
