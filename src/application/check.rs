//! Environment report for `blogsync check`

use crate::application::{preflight, Workspace};
use crate::error::Result;
use crate::infrastructure::ToolLocator;
use std::path::PathBuf;

/// Resolved tools and path status. A missing site is fine, publish scaffolds it.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub tools: Vec<(String, PathBuf)>,
    pub source: PathBuf,
    pub source_exists: bool,
    pub site: PathBuf,
    pub site_exists: bool,
    pub script: PathBuf,
    pub script_exists: bool,
}

/// Verify tools (fatal when one is missing) and report on paths
pub fn run(ws: &Workspace, locator: &ToolLocator) -> Result<CheckReport> {
    let tools = preflight::check(&ws.config.required_tools(), locator)?;
    let source = ws.source_dir();
    let site = ws.site_dir();
    let script = ws.script_path();

    Ok(CheckReport {
        tools,
        source_exists: source.is_dir(),
        source,
        site_exists: site.is_dir(),
        site,
        script_exists: script.is_file(),
        script,
    })
}

/// Human-readable report
pub fn format_report(report: &CheckReport) -> String {
    let mut output = String::new();
    for (tool, path) in &report.tools {
        output.push_str(&format!("{:<8} {}\n", tool, path.display()));
    }
    output.push('\n');
    for (label, path, exists) in [
        ("source", &report.source, report.source_exists),
        ("site", &report.site, report.site_exists),
        ("script", &report.script, report.script_exists),
    ] {
        let status = if exists { "ok" } else { "missing" };
        output.push_str(&format!("{:<8} {} ({})\n", label, path.display(), status));
    }
    output
}
