//! Mirror posts from the notes vault into the site

use crate::application::Workspace;
use crate::error::{BlogsyncError, Result};
use crate::infrastructure::{Cmd, CommandRunner};
use std::fs;
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

/// Mirror `<source>/<posts_dir>/` into `<destination>/<content_dir>/`.
///
/// Files missing from the source are deleted from the destination. Returns
/// the number of markdown files in the destination afterwards.
pub fn execute<R: CommandRunner>(ws: &Workspace, runner: &mut R) -> Result<usize> {
    let source = ws.source_dir();
    let site = ws.site_dir();

    if !source.is_dir() {
        return Err(BlogsyncError::MissingPath {
            kind: "Source",
            path: source,
        });
    }
    if !site.is_dir() {
        return Err(BlogsyncError::MissingPath {
            kind: "Destination",
            path: site,
        });
    }

    let from = source.join(&ws.config.posts_dir);
    let to = site.join(&ws.config.content_dir);
    fs::create_dir_all(&to)?;

    info!("Syncing posts from {}...", source.display());
    runner.run(
        &Cmd::new("rsync")
            .args(["-av", "--delete"])
            .arg(dir_contents(&from))
            .arg(dir_contents(&to)),
    )?;

    let count = count_markdown(&to);
    info!("{} posts in {}", count, to.display());
    Ok(count)
}

/// rsync copies a directory's contents, not the directory, with a trailing slash
fn dir_contents(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    if rendered.ends_with('/') {
        rendered.to_string()
    } else {
        format!("{}/", rendered)
    }
}

fn count_markdown(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "md"))
        .count()
}
