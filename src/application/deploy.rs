//! Publish the build output to the hosting branch

use crate::application::Workspace;
use crate::error::Result;
use crate::infrastructure::CommandRunner;
use tracing::{info, warn};

/// Split the output directory into a throwaway branch and force-push it.
///
/// The local hosting branch never survives this call: a stale one is
/// removed first, and the fresh one is removed after the push or after a
/// failed split/push.
pub fn execute<R: CommandRunner>(ws: &Workspace, runner: &mut R) -> Result<()> {
    let branch = ws.config.hosting_branch.as_str();
    info!("Deploying {} to origin/{}...", ws.config.output_dir.display(), branch);

    remove_local_branch(ws, runner)?;

    if let Err(e) = split_and_push(ws, runner) {
        if let Err(cleanup) = remove_local_branch(ws, runner) {
            warn!("Could not remove local branch {}: {}", branch, cleanup);
        }
        return Err(e);
    }

    runner.run(&ws.git().args(["branch", "-D", branch]))
}

fn split_and_push<R: CommandRunner>(ws: &Workspace, runner: &mut R) -> Result<()> {
    let branch = ws.config.hosting_branch.as_str();
    runner.run(
        &ws.git()
            .args(["subtree", "split", "--prefix"])
            .path_arg(&ws.config.output_dir)
            .args(["-b", branch]),
    )?;
    runner.run(&ws.git().args([
        "push".to_string(),
        "origin".to_string(),
        format!("{}:{}", branch, branch),
        "--force".to_string(),
    ]))
}

/// Delete the local hosting branch if it exists. Returns whether it did.
fn remove_local_branch<R: CommandRunner>(ws: &Workspace, runner: &mut R) -> Result<bool> {
    let branch = ws.config.hosting_branch.as_str();
    let listed = runner.capture(&ws.git().args(["branch", "--list", branch]))?;
    if listed.is_empty() {
        return Ok(false);
    }
    runner.run(&ws.git().args(["branch", "-D", branch]))?;
    Ok(true)
}
