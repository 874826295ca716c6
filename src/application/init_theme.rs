//! Theme submodule and site config

use crate::application::Workspace;
use crate::error::Result;
use crate::infrastructure::{CommandRunner, Fetcher};
use tracing::info;

/// Name of the hugo config file inside the site
pub const SITE_CONFIG: &str = "hugo.toml";

/// Add the configured theme as a submodule when it is not checked out yet.
///
/// The site config is downloaded right after the theme is added (replacing
/// the scaffold default) and whenever it is missing. Returns whether the
/// theme was added.
pub fn execute<R, F>(ws: &Workspace, runner: &mut R, fetcher: &mut F) -> Result<bool>
where
    R: CommandRunner,
    F: Fetcher,
{
    let site = ws.site_dir();
    let theme = ws.config.theme;
    let checkout = theme.checkout_path();
    let mut added = false;

    if !site.join(&checkout).exists() {
        info!("Adding theme '{}' as a submodule...", theme);
        runner.run(
            &ws.git()
                .args(["submodule", "add", "-f", theme.repository_url()])
                .path_arg(&checkout),
        )?;
        added = true;
    }

    let site_config = site.join(SITE_CONFIG);
    if added || !site_config.exists() {
        fetcher.download(&ws.config.theme_config_url, &site_config)?;
    }

    Ok(added)
}
