use blogsync::application::{check, init_config, PublishService, Workspace};
use blogsync::cli::{Cli, Commands};
use blogsync::error::{BlogsyncError, Result};
use blogsync::infrastructure::{
    logging, Config, FixedMessage, HttpFetcher, MessageSource, Overrides, StdinPrompt,
    SystemRunner, ToolLocator,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::{env, panic, process};
use tracing::error;

fn main() {
    let cli = Cli::parse();

    let invoke_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot read working directory: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init(&invoke_dir.join(&cli.log_dir)) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }

    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        error!("An unexpected error occurred: {}", info);
        default_hook(info);
    }));

    match run(cli, invoke_dir) {
        Ok(()) => process::exit(0),
        Err(e) => {
            error!("{}", e.display_with_suggestions());
            process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli, invoke_dir: PathBuf) -> Result<()> {
    let overrides = cli.overrides();

    match cli.command {
        Some(Commands::Init { path }) => {
            let written = init_config::init(&invoke_dir.join(path))?;
            println!("Wrote {}", written.display());
            println!("Edit source, destination and repo_url before publishing.");
            Ok(())
        }
        Some(Commands::Config) => {
            let mut config = Config::discover(cli.config.as_deref(), &invoke_dir)?;
            config.apply(overrides);
            if let Err(e) = config.validate() {
                println!("# {}", e);
            }
            let rendered = toml::to_string_pretty(&config)?;
            print!("{}", rendered);
            Ok(())
        }
        Some(Commands::Check) => {
            let ws = Workspace::load(cli.config.as_deref(), overrides, invoke_dir)?;
            let report = check::run(&ws, &ToolLocator::from_env())?;
            print!("{}", check::format_report(&report));
            if !report.source_exists {
                return Err(BlogsyncError::MissingPath {
                    kind: "Source",
                    path: report.source,
                });
            }
            if !report.script_exists {
                return Err(BlogsyncError::MissingScript(report.script));
            }
            Ok(())
        }
        Some(Commands::Publish { message }) => {
            publish(cli.config.as_deref(), overrides, invoke_dir, message)
        }
        None => publish(cli.config.as_deref(), overrides, invoke_dir, None),
    }
}

fn publish(
    config: Option<&Path>,
    overrides: Overrides,
    invoke_dir: PathBuf,
    message: Option<String>,
) -> Result<()> {
    let ws = Workspace::load(config, overrides, invoke_dir)?;

    let messages: Box<dyn MessageSource> = match message {
        Some(m) => Box::new(FixedMessage(m)),
        None => Box::new(StdinPrompt),
    };

    let mut service = PublishService::new(
        ws,
        ToolLocator::from_env(),
        SystemRunner::new(),
        messages,
        HttpFetcher::new()?,
    );
    service.execute()
}
