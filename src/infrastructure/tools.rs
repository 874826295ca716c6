//! Executable lookup on the search path

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Resolves executable names the way a shell would.
#[derive(Debug, Clone, Default)]
pub struct ToolLocator {
    search_path: Option<OsString>,
}

impl ToolLocator {
    /// Use the process `PATH`
    pub fn from_env() -> Self {
        ToolLocator { search_path: None }
    }

    /// Use an explicit search path (same syntax as `PATH`)
    pub fn with_search_path<S: Into<OsString>>(search_path: S) -> Self {
        ToolLocator {
            search_path: Some(search_path.into()),
        }
    }

    /// Full path of `name`, if it resolves to an executable
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        match &self.search_path {
            None => which::which(name).ok(),
            Some(paths) => {
                let cwd = env::current_dir().ok()?;
                which::which_in(name, Some(paths), cwd).ok()
            }
        }
    }
}
