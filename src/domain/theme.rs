//! Hugo theme definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Themes that can be installed as a git submodule of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// panr/hugo-theme-terminal
    #[default]
    Terminal,
    /// joeroe/risotto
    Risotto,
}

impl Theme {
    /// Directory name under `themes/`
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Terminal => "terminal",
            Theme::Risotto => "risotto",
        }
    }

    /// Upstream repository the submodule is cloned from
    pub fn repository_url(&self) -> &'static str {
        match self {
            Theme::Terminal => "https://github.com/panr/hugo-theme-terminal.git",
            Theme::Risotto => "https://github.com/joeroe/risotto",
        }
    }

    /// Submodule path relative to the site root
    pub fn checkout_path(&self) -> PathBuf {
        PathBuf::from("themes").join(self.name())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
