//! Line-oriented command runner over an in-memory product registry.
//!
//! Each input line is one command; each command produces one JSON document
//! on the output. Domain failures are reported inline and do not stop the run.

pub mod command;
pub mod config;
pub mod dto;
pub mod errors;
pub mod runner;

pub use command::{Command, parse_line};
pub use config::{CliConfig, IdMode};
pub use dto::CommandOutput;
pub use runner::{RunSummary, ScriptRunner};
