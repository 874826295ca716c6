//! Application layer - Use cases and orchestration

pub mod build;
pub mod check;
pub mod deploy;
pub mod init_config;
pub mod init_repo;
pub mod init_theme;
pub mod pipeline;
pub mod preflight;
pub mod publish;
pub mod sync;
pub mod workspace;

pub use check::{CheckReport, format_report};
pub use pipeline::PublishService;
pub use workspace::Workspace;
