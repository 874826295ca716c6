//! Required tool check

use crate::error::{BlogsyncError, Result};
use crate::infrastructure::ToolLocator;
use std::path::PathBuf;
use tracing::debug;

/// Resolve every tool in order, stopping at the first one that is missing.
pub fn check(tools: &[String], locator: &ToolLocator) -> Result<Vec<(String, PathBuf)>> {
    let mut found = Vec::with_capacity(tools.len());

    for tool in tools {
        match locator.locate(tool) {
            Some(path) => {
                debug!("{} -> {}", tool, path.display());
                found.push((tool.clone(), path));
            }
            None => return Err(BlogsyncError::MissingTool(tool.clone())),
        }
    }

    Ok(found)
}
