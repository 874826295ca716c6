//! Publishing pipeline stages

use std::fmt;

/// One stage of a publish run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Preflight,
    InitRepository,
    InitTheme,
    SyncPosts,
    ProcessMarkdown,
    BuildSite,
    CommitAndPush,
    DeployHosting,
}

impl Step {
    /// All stages in the order a full run executes them
    pub const ALL: [Step; 8] = [
        Step::Preflight,
        Step::InitRepository,
        Step::InitTheme,
        Step::SyncPosts,
        Step::ProcessMarkdown,
        Step::BuildSite,
        Step::CommitAndPush,
        Step::DeployHosting,
    ];

    /// Short label used in log lines
    pub fn label(&self) -> &'static str {
        match self {
            Step::Preflight => "preflight",
            Step::InitRepository => "init-repo",
            Step::InitTheme => "init-theme",
            Step::SyncPosts => "sync",
            Step::ProcessMarkdown => "process",
            Step::BuildSite => "build",
            Step::CommitAndPush => "commit",
            Step::DeployHosting => "deploy",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
