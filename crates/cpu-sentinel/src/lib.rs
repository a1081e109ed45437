pub mod cli;
pub mod collector;
pub mod config;
pub mod logging;
pub mod monitor;
pub mod output;
pub mod run;
pub mod shutdown;
