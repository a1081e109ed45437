mod loader;
mod schema;

pub use loader::{parse_str, read_from_file, validate, LoadError};
pub use schema::{MonitorConfig, DEFAULT_INTERVAL_SECONDS, DEFAULT_THRESHOLD_PERCENT};
