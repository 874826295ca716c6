//! Create a starter configuration file

use crate::error::{BlogsyncError, Result};
use crate::infrastructure::config::CONFIG_FILE;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `blogsync.toml` into `dir`, creating the directory if needed.
pub fn init(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        return Err(BlogsyncError::Config(format!(
            "Config already exists: {}",
            path.display()
        )));
    }

    fs::write(&path, Config::template())?;
    Ok(path)
}
