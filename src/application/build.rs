//! Link rewriting and the hugo build

use crate::application::Workspace;
use crate::error::{BlogsyncError, Result};
use crate::infrastructure::{Cmd, CommandRunner};
use tracing::info;

/// Run the link-rewriting script from the invoking directory
pub fn process_markdown<R: CommandRunner>(ws: &Workspace, runner: &mut R) -> Result<()> {
    let script = ws.script_path();
    if !script.is_file() {
        return Err(BlogsyncError::MissingScript(script));
    }

    info!("Processing image links in Markdown files...");
    runner.run(
        &Cmd::new(ws.config.interpreter.as_str())
            .path_arg(&ws.config.script)
            .cwd(&ws.invoke_dir),
    )
}

/// Build the site into its output directory
pub fn build_site<R: CommandRunner>(ws: &Workspace, runner: &mut R) -> Result<()> {
    info!("Building the Hugo site...");
    runner.run(&Cmd::new("hugo").cwd(ws.site_dir()))
}
