pub mod reader;
pub mod records;

pub use reader::{load_stats, parse_stats, read_json, stats_from_value};
