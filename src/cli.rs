//! CLI parsing and dispatch.

use clap::{Parser, ValueEnum};

use crate::{error::Result, palette::ColorChoice, watch};

/// Parsed command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "build-css",
    version,
    about = "Build Tailwind CSS in watch mode from static/css/input.css to static/css/output.css"
)]
struct Cli {
    /// Control colored output.
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorMode,
    /// Enable verbose output.
    #[arg(long)]
    verbose: bool,
    /// Resolve stylesheets under this directory instead of the executable's.
    #[arg(long, value_name = "DIR")]
    root: Option<String>,
}

/// Supported color output modes.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorMode {
    /// Only colorize when stdout is a TTY.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}

impl ColorMode {
    /// Convert a CLI color mode into a color choice.
    fn into_choice(self) -> ColorChoice {
        match self {
            Self::Auto => ColorChoice::Auto,
            Self::Always => ColorChoice::Always,
            Self::Never => ColorChoice::Never,
        }
    }
}

/// Parse arguments and run the watch build.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    watch::run(watch::Options {
        color: cli.color.into_choice(),
        verbose: cli.verbose,
        root: cli.root,
    })
    .await
}
