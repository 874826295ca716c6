//! Error types for blogsync

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for blogsync
#[derive(Debug, Error)]
pub enum BlogsyncError {
    #[error("{0} is not installed or not in PATH")]
    MissingTool(String),

    #[error("{kind} path does not exist: {}", .path.display())]
    MissingPath { kind: &'static str, path: PathBuf },

    #[error("Post-processing script not found: {}", .0.display())]
    MissingScript(PathBuf),

    #[error("Command failed: {command}{}", failure_detail(.code, .stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration error: '{0}' is not set")]
    MissingSetting(&'static str),

    #[error("Failed to parse {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

fn failure_detail(code: &Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!(" (exit code {})", code),
        None => " (terminated by signal)".to_string(),
    };
    if stderr.is_empty() {
        status
    } else {
        format!("{}\n{}", status, stderr)
    }
}

impl BlogsyncError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BlogsyncError::MissingTool(_) => 2,
            BlogsyncError::MissingPath { .. } | BlogsyncError::MissingScript(_) => 3,
            BlogsyncError::CommandFailed { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BlogsyncError::MissingTool(tool) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Install '{}' with your package manager\n\
                    • Make sure the directory containing it is listed in PATH\n\
                    • Run 'blogsync check' to verify all required tools",
                    self, tool
                )
            }
            BlogsyncError::MissingPath { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check 'source' and 'destination' in blogsync.toml\n\
                    • Override them with --source / --destination\n\
                    • Run 'blogsync config' to see the resolved paths",
                    self
                )
            }
            BlogsyncError::MissingScript(path) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Run blogsync from the directory that contains {}\n\
                    • Point 'script' in blogsync.toml at the link rewriter",
                    self,
                    path.file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| path.display().to_string())
                )
            }
            BlogsyncError::MissingSetting(_) => {
                format!(
                    "{}\n\n\
                    Run 'blogsync init' to create a starter blogsync.toml",
                    self
                )
            }
            BlogsyncError::ConfigParse { .. } => {
                format!(
                    "{}\n\n\
                    Valid themes: terminal, risotto\n\
                    Example: theme = \"terminal\"",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BlogsyncError
pub type Result<T> = std::result::Result<T, BlogsyncError>;
