//! Application Layer
//!
//! User-facing CLI, configuration management and input files.

pub mod cli;
pub mod config;
pub mod input;

pub use cli::Cli;
pub use config::Config;
