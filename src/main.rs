//! CLI entry point for build-css.

use std::process::ExitCode;

use build_css::{ERROR_LABEL, run};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{ERROR_LABEL} {error}");
            error.exit_code()
        }
    }
}
