//! The watch-mode build: resolve stylesheets, announce, run the tool.

use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    diagnostics::Diagnostics,
    error::Result,
    palette::{ColorChoice, fmt_banner, fmt_path},
    paths::{self, StylesheetPaths, display_path},
    runner::Invocation,
};

/// Line printed to stdout before the tool starts.
pub const BANNER: &str = "Building Tailwind CSS...";

/// Options collected from the command line.
#[derive(Debug)]
pub struct Options {
    /// Output color handling.
    pub color: ColorChoice,
    /// Print verbose notes before launching.
    pub verbose: bool,
    /// Base directory override; the executable's directory when absent.
    pub root: Option<String>,
}

/// Everything resolved before the tool is launched.
#[derive(Debug)]
struct Plan {
    /// Directory the stylesheets are resolved under.
    base: PathBuf,
    /// Configuration read from the base directory.
    config: Config,
    /// Stylesheets handed to the tool.
    stylesheets: StylesheetPaths,
    /// Command line for the tool.
    invocation: Invocation,
}

impl Plan {
    /// Resolve stylesheets, config, and command line under `base`.
    fn resolve(base: &Path) -> Result<Self> {
        let config = Config::load(base)?;
        let stylesheets = StylesheetPaths::under(base);
        let invocation = Invocation::watch(config.program(), config.args(), &stylesheets);
        Ok(Self {
            base: base.to_path_buf(),
            config,
            stylesheets,
            invocation,
        })
    }

    /// Print what is about to run when verbose output is enabled.
    fn describe(&self, diagnostics: Diagnostics, use_color: bool) {
        diagnostics.note("root:", fmt_path(&display_path(&self.base), use_color));
        if let Some(source) = self.config.source() {
            diagnostics.note("config:", fmt_path(&display_path(source), use_color));
        }
        diagnostics.note(
            "input:",
            fmt_path(&display_path(&self.stylesheets.input), use_color),
        );
        diagnostics.note(
            "output:",
            fmt_path(&display_path(&self.stylesheets.output), use_color),
        );
        diagnostics.note("command:", self.invocation.display());
    }
}

/// Run the CSS tool in watch mode until it exits.
pub async fn run(options: Options) -> Result<()> {
    let use_color = options.color.enabled();
    let diagnostics = Diagnostics::new(options.verbose, use_color);

    let base = paths::base_dir(options.root.as_deref())?;
    let plan = Plan::resolve(&base)?;
    plan.describe(diagnostics, use_color);

    println!("{}", fmt_banner(BANNER, use_color));
    plan.invocation.run().await
}
