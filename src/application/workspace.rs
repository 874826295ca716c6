//! Resolved settings for one run

use crate::error::Result;
use crate::infrastructure::{Cmd, Config, Overrides};
use std::path::{Path, PathBuf};

/// Configuration plus the directory blogsync was started from.
///
/// Relative paths in the config resolve against `invoke_dir`; no step
/// changes the process working directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub config: Config,
    pub invoke_dir: PathBuf,
}

impl Workspace {
    pub fn new(config: Config, invoke_dir: PathBuf) -> Self {
        Workspace { config, invoke_dir }
    }

    /// Discover the config file, apply CLI overrides and validate
    pub fn load(
        explicit: Option<&Path>,
        overrides: Overrides,
        invoke_dir: PathBuf,
    ) -> Result<Self> {
        let mut config = Config::discover(explicit, &invoke_dir)?;
        config.apply(overrides);
        config.validate()?;
        Ok(Workspace::new(config, invoke_dir))
    }

    pub fn source_dir(&self) -> PathBuf {
        self.invoke_dir.join(&self.config.source)
    }

    pub fn site_dir(&self) -> PathBuf {
        self.invoke_dir.join(&self.config.destination)
    }

    pub fn script_path(&self) -> PathBuf {
        self.invoke_dir.join(&self.config.script)
    }

    /// `git` running inside the site repository
    pub fn git(&self) -> Cmd {
        Cmd::new("git").cwd(self.site_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_relative_paths_resolve_against_invoke_dir() {
        let config = Config {
            source: PathBuf::from("notes"),
            destination: PathBuf::from("/srv/blog"),
            ..Config::default()
        };
        let ws = Workspace::new(config, PathBuf::from("/home/me/tools"));

        assert_eq!(ws.source_dir(), PathBuf::from("/home/me/tools/notes"));
        assert_eq!(ws.site_dir(), PathBuf::from("/srv/blog"));
        assert_eq!(ws.script_path(), PathBuf::from("/home/me/tools/replace.py"));
        assert_eq!(ws.git().get_cwd(), Some(Path::new("/srv/blog")));
    }

    #[test]
    fn test_load_applies_overrides_before_validation() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("blogsync.toml"),
            "destination = \"blog\"\nrepo_url = \"https://example.com/b.git\"\n",
        )
        .unwrap();

        let overrides = Overrides {
            source: Some(PathBuf::from("notes")),
            ..Overrides::default()
        };
        let ws = Workspace::load(None, overrides, temp.path().to_path_buf()).unwrap();
        assert_eq!(ws.config.source, PathBuf::from("notes"));
        assert_eq!(ws.site_dir(), temp.path().join("blog"));
    }

    #[test]
    fn test_load_rejects_incomplete_config() {
        let temp = TempDir::new().unwrap();
        let err = Workspace::load(None, Overrides::default(), temp.path().to_path_buf())
            .unwrap_err();
        assert!(err.to_string().contains("'source' is not set"));
    }
}
