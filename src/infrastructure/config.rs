//! Configuration management

use crate::domain::Theme;
use crate::error::{BlogsyncError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name looked up in the invoking directory
pub const CONFIG_FILE: &str = "blogsync.toml";

/// Raw file with the site's hugo configuration, fetched next to the theme
pub const DEFAULT_THEME_CONFIG_URL: &str =
    "https://raw.githubusercontent.com/Anokxz/Linux-tools/main/hugo.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notes vault (contains `posts_dir`)
    pub source: PathBuf,
    /// Hugo site root and git working tree
    pub destination: PathBuf,
    pub repo_url: String,
    pub theme: Theme,
    pub theme_config_url: String,
    /// Link rewriter, resolved against the invoking directory
    pub script: PathBuf,
    pub interpreter: String,
    pub main_branch: String,
    pub hosting_branch: String,
    /// Hugo build output, split into `hosting_branch`
    pub output_dir: PathBuf,
    pub posts_dir: PathBuf,
    pub content_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: PathBuf::new(),
            destination: PathBuf::new(),
            repo_url: String::new(),
            theme: Theme::default(),
            theme_config_url: DEFAULT_THEME_CONFIG_URL.to_string(),
            script: PathBuf::from("replace.py"),
            interpreter: "python3".to_string(),
            main_branch: "main".to_string(),
            hosting_branch: "blog".to_string(),
            output_dir: PathBuf::from("public"),
            posts_dir: PathBuf::from("posts"),
            content_dir: PathBuf::from("content/posts"),
        }
    }
}

/// Values given on the command line, applied on top of the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub repo_url: Option<String>,
    pub theme: Option<Theme>,
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlogsyncError::Config(format!("Config file not found: {}", path.display()))
            } else {
                BlogsyncError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| BlogsyncError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Without one, `blogsync.toml` in `dir` is
    /// used when present and defaults otherwise.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(&dir.join(path)),
            None => {
                let path = dir.join(CONFIG_FILE);
                if path.is_file() {
                    Self::load(&path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(source) = overrides.source {
            self.source = source;
        }
        if let Some(destination) = overrides.destination {
            self.destination = destination;
        }
        if let Some(repo_url) = overrides.repo_url {
            self.repo_url = repo_url;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
    }

    /// Check required values and branch names
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() {
            return Err(BlogsyncError::MissingSetting("source"));
        }
        if self.destination.as_os_str().is_empty() {
            return Err(BlogsyncError::MissingSetting("destination"));
        }
        if self.repo_url.trim().is_empty() {
            return Err(BlogsyncError::MissingSetting("repo_url"));
        }
        if self.main_branch.trim().is_empty() || self.hosting_branch.trim().is_empty() {
            return Err(BlogsyncError::Config(
                "Branch names must not be empty".to_string(),
            ));
        }
        if self.main_branch == self.hosting_branch {
            return Err(BlogsyncError::Config(format!(
                "main_branch and hosting_branch must differ (both are '{}')",
                self.main_branch
            )));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(BlogsyncError::Config(
                "'output_dir' must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Required executables, in the order they are checked
    pub fn required_tools(&self) -> Vec<String> {
        vec![
            "git".to_string(),
            "rsync".to_string(),
            self.interpreter.clone(),
            "hugo".to_string(),
        ]
    }

    /// Starter file written by `blogsync init`
    pub fn template() -> String {
        format!(
            "# blogsync configuration\n\
            \n\
            # Notes vault; posts are read from <source>/posts\n\
            source = \"/path/to/Notes\"\n\
            # Hugo site and git working tree\n\
            destination = \"/path/to/Blog\"\n\
            repo_url = \"https://github.com/user/user.github.io.git\"\n\
            \n\
            # terminal | risotto\n\
            theme = \"terminal\"\n\
            theme_config_url = \"{}\"\n\
            \n\
            script = \"replace.py\"\n\
            interpreter = \"python3\"\n\
            main_branch = \"main\"\n\
            hosting_branch = \"blog\"\n\
            output_dir = \"public\"\n\
            posts_dir = \"posts\"\n\
            content_dir = \"content/posts\"\n",
            DEFAULT_THEME_CONFIG_URL
        )
    }
}
