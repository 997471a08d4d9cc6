pub mod bucket;
pub mod constants;
