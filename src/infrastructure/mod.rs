//! Infrastructure layer - External processes, files and network

pub mod config;
pub mod fetch;
pub mod logging;
pub mod prompt;
pub mod runner;
pub mod tools;

pub use config::{Config, Overrides};
pub use fetch::{Fetcher, HttpFetcher};
pub use prompt::{FixedMessage, MessageSource, StdinPrompt};
pub use runner::{Cmd, CommandRunner, Execution, Stdout, SystemRunner};
pub use tools::ToolLocator;
