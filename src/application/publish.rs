//! Commit and push the site sources

use crate::application::Workspace;
use crate::error::Result;
use crate::infrastructure::{CommandRunner, MessageSource};
use chrono::{Local, NaiveDateTime};
use tracing::info;

/// Commit pending changes, then push the main branch.
///
/// The push happens even when there was nothing to commit. Returns whether
/// a commit was made.
pub fn commit_and_push<R, M>(ws: &Workspace, runner: &mut R, messages: &mut M) -> Result<bool>
where
    R: CommandRunner,
    M: MessageSource + ?Sized,
{
    let status = runner.capture(&ws.git().args(["status", "--porcelain"]))?;
    let dirty = !status.is_empty();

    if dirty {
        info!("Staging changes for Git...");
        runner.run(&ws.git().args(["add", "."]))?;

        let mut message = messages.commit_message()?;
        if message.trim().is_empty() {
            message = default_message(Local::now().naive_local());
            info!("Empty commit message, using '{}'", message);
        }

        info!("Committing changes...");
        runner.run(&ws.git().args(["commit", "-m"]).arg(message))?;
    } else {
        info!("Working tree clean, nothing to commit.");
    }

    let branch = ws.config.main_branch.as_str();
    info!("Pushing {} to origin...", branch);
    runner.run(&ws.git().args(["push", "origin", branch]))?;

    Ok(dirty)
}

fn default_message(at: NaiveDateTime) -> String {
    format!("Update blog {}", at.format("%Y-%m-%d %H:%M"))
}
