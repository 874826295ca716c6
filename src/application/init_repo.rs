//! Site scaffold and git repository setup

use crate::application::Workspace;
use crate::error::Result;
use crate::infrastructure::{Cmd, CommandRunner};
use tracing::{info, warn};

/// What repository initialization had to do
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepoSetup {
    pub scaffolded: bool,
    pub initialized: bool,
    pub remote_added: bool,
}

/// Make sure the site exists and is a git repository with an `origin` remote.
///
/// Safe to re-run: each part only happens when it is missing.
pub fn execute<R: CommandRunner>(ws: &Workspace, runner: &mut R) -> Result<RepoSetup> {
    let site = ws.site_dir();
    let config = &ws.config;
    let mut setup = RepoSetup::default();

    if !site.exists() {
        info!("Creating Hugo site at {}", site.display());
        runner.run(
            &Cmd::new("hugo")
                .args(["new", "site"])
                .path_arg(&site)
                .cwd(&ws.invoke_dir),
        )?;
        setup.scaffolded = true;
    }

    if !site.join(".git").exists() {
        info!("Initializing Git repository...");
        runner.run(&ws.git().arg("init"))?;
        runner.run(&ws.git().args(["remote", "add", "origin", config.repo_url.as_str()]))?;
        setup.initialized = true;
        setup.remote_added = true;

        let pull = ws.git().args(["pull", "origin", config.main_branch.as_str()]);
        if let Err(e) = runner.run(&pull) {
            warn!("Could not pull from remote: {}", e);
        }
    } else {
        info!("Git repository already initialized.");
        let remotes = runner.capture(&ws.git().arg("remote"))?;
        if !remotes.lines().any(|line| line.trim() == "origin") {
            info!("Adding remote origin...");
            runner.run(&ws.git().args(["remote", "add", "origin", config.repo_url.as_str()]))?;
            setup.remote_added = true;
        }
    }

    Ok(setup)
}
