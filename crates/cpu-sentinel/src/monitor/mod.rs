mod error;
mod runner;
mod sample;
mod state;

pub use error::MonitorError;
pub use runner::{Monitor, Outcome};
pub use sample::{Sample, TIMESTAMP_FORMAT};
pub use state::RunState;
