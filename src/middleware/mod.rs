mod cache_control;

pub use cache_control::*;
