//! cli::commands::open
//!
//! Open the repository or file URL in a browser, or print it.
//!
//! # Design
//!
//! - Without a path the repository home page is opened.
//! - With a path the file page is opened on the current branch, or the
//!   configured default branch when HEAD cannot be used.
//! - `--print` (or `print_only = true`) writes the URL to stdout instead.
//! - If the browser cannot be launched, the URL is printed as a fallback.
//!
//! # Example
//!
//! ```bash
//! # Open the repository
//! oig open
//!
//! # Open a file
//! oig open notes/today.md
//! ```

use std::path::Path;

use anyhow::{anyhow, Context as _, Result};

use crate::core::config::Config;
use crate::engine::open::{self as workflow, OpenError, OpenPlan, Target};
use crate::engine::Context;
use crate::git::Resolver;
use crate::ui::browser::{BrowserError, PrintOpener, SystemBrowser, UrlOpener};
use crate::ui::output::{self, Verbosity};

/// Run the open command.
///
/// # Arguments
///
/// * `ctx` - Engine context
/// * `path` - Optional file to open (defaults to the repository page)
/// * `print` - If true, print the URL instead of opening it
pub fn open(ctx: &Context, path: Option<&Path>, print: bool) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let root = ctx
        .root()
        .context("Failed to determine the working-copy root")?;
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);

    let target = match path {
        Some(path) => Target::File(
            workflow::relative_file_path(&root, path).map_err(|e| anyhow!(e.notice()))?,
        ),
        None => Target::Repository,
    };

    let opener = select_opener(&config, print);
    let resolver = Resolver::at(&root);

    match workflow::open(&resolver, &target, config.default_branch(), opener.as_ref()) {
        Ok(plan) => {
            report_warnings(&plan, verbosity);
            Ok(())
        }
        Err(OpenError::Browser(BrowserError::Launch { url, source })) => {
            // Fall back to printing
            output::warn(format!("Could not open browser: {}", source), verbosity);
            println!("{}", url);
            Ok(())
        }
        Err(err) => Err(anyhow!(err.notice())),
    }
}

/// Run the url command: resolve and print without opening.
pub fn url(ctx: &Context, path: Option<&Path>) -> Result<()> {
    open(ctx, path, true)
}

fn select_opener(config: &Config, print: bool) -> Box<dyn UrlOpener> {
    if print || config.print_only() {
        Box::new(PrintOpener)
    } else if let Some(app) = config.browser() {
        Box::new(SystemBrowser::with_app(app))
    } else {
        Box::new(SystemBrowser::new())
    }
}

fn report_warnings(plan: &OpenPlan, verbosity: Verbosity) {
    let Some(branch) = &plan.branch else {
        return;
    };
    for warning in &plan.warnings {
        output::warn(
            format!(
                "{} Using branch '{}'.",
                workflow::fallback_notice(warning),
                branch.name()
            ),
            verbosity,
        );
    }
}

