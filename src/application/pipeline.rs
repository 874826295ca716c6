//! Full publish run

use crate::application::{
    build, deploy, init_repo, init_theme, preflight, publish, sync, Workspace,
};
use crate::domain::Step;
use crate::error::Result;
use crate::infrastructure::{CommandRunner, Fetcher, MessageSource, ToolLocator};
use tracing::{info, info_span};

/// Runs every step in order and stops at the first failure
pub struct PublishService<R, M, F> {
    workspace: Workspace,
    locator: ToolLocator,
    runner: R,
    messages: M,
    fetcher: F,
}

impl<R, M, F> PublishService<R, M, F>
where
    R: CommandRunner,
    M: MessageSource,
    F: Fetcher,
{
    pub fn new(
        workspace: Workspace,
        locator: ToolLocator,
        runner: R,
        messages: M,
        fetcher: F,
    ) -> Self {
        PublishService {
            workspace,
            locator,
            runner,
            messages,
            fetcher,
        }
    }

    pub fn execute(&mut self) -> Result<()> {
        for step in Step::ALL {
            let _span = info_span!("step", name = %step).entered();
            info!("Step: {}", step);
            self.run_step(step)?;
        }

        info!("All done! Site synced, processed, built, committed and deployed.");
        Ok(())
    }

    fn run_step(&mut self, step: Step) -> Result<()> {
        let ws = &self.workspace;
        let runner = &mut self.runner;

        match step {
            Step::Preflight => {
                preflight::check(&ws.config.required_tools(), &self.locator)?;
            }
            Step::InitRepository => {
                init_repo::execute(ws, runner)?;
            }
            Step::InitTheme => {
                init_theme::execute(ws, runner, &mut self.fetcher)?;
            }
            Step::SyncPosts => {
                sync::execute(ws, runner)?;
            }
            Step::ProcessMarkdown => build::process_markdown(ws, runner)?,
            Step::BuildSite => build::build_site(ws, runner)?,
            Step::CommitAndPush => {
                publish::commit_and_push(ws, runner, &mut self.messages)?;
            }
            Step::DeployHosting => deploy::execute(ws, runner)?,
        }
        Ok(())
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn messages(&self) -> &M {
        &self.messages
    }
}
