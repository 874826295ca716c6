//! CLI command definitions

use crate::domain::Theme;
use crate::infrastructure::Overrides;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogsync")]
#[command(about = "Sync notes into a Hugo blog and publish it with git", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./blogsync.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, global = true, value_name = "DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Notes vault containing the posts directory
    #[arg(long, global = true, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Hugo site directory
    #[arg(long, global = true, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Remote repository URL
    #[arg(long, global = true, value_name = "URL")]
    pub repo_url: Option<String>,

    /// Site theme
    #[arg(long, global = true, value_enum)]
    pub theme: Option<Theme>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync, build, commit and deploy (default)
    Publish {
        /// Commit message (prompted for when omitted)
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Verify required tools and configured paths
    Check,

    /// Write a starter blogsync.toml
    Init {
        /// Directory to write it to (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print the resolved configuration
    Config,
}

impl Cli {
    /// Config values given as flags
    pub fn overrides(&self) -> Overrides {
        Overrides {
            source: self.source.clone(),
            destination: self.destination.clone(),
            repo_url: self.repo_url.clone(),
            theme: self.theme,
        }
    }
}
