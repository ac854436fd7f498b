//! Child process construction and execution for the CSS tool.

use std::{ffi::OsString, iter, process::Stdio};

use tokio::process::Command;

use crate::{
    error::{Error, Result},
    paths::StylesheetPaths,
};

/// Flag naming the stylesheet the tool reads.
const INPUT_FLAG: &str = "-i";
/// Flag naming the stylesheet the tool writes.
const OUTPUT_FLAG: &str = "-o";
/// Flag keeping the tool running and rebuilding on change.
const WATCH_FLAG: &str = "--watch";

/// A fully resolved command line for the CSS tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to spawn.
    program: String,
    /// Arguments passed to the program, in order.
    args: Vec<OsString>,
}

impl Invocation {
    /// Build a watch-mode invocation reading `paths.input` and writing `paths.output`.
    ///
    /// `leading` holds arguments that precede the stylesheet flags, such as the
    /// package name when the program is a launcher like `npx`.
    pub fn watch(program: &str, leading: &[String], paths: &StylesheetPaths) -> Self {
        let mut args: Vec<OsString> = leading.iter().map(OsString::from).collect();
        args.extend([
            OsString::from(INPUT_FLAG),
            paths.input.clone().into_os_string(),
            OsString::from(OUTPUT_FLAG),
            paths.output.clone().into_os_string(),
            OsString::from(WATCH_FLAG),
        ]);
        Self {
            program: program.to_string(),
            args,
        }
    }

    /// Return the program that will be spawned.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Return the arguments passed to the program.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Render the command line with shell quoting for display.
    pub fn display(&self) -> String {
        let words = iter::once(self.program.clone())
            .chain(self.args.iter().map(|arg| arg.to_string_lossy().into_owned()));
        shell_words::join(words)
    }

    /// Build the child command with all standard streams inherited.
    fn command(&self) -> Command {
        let mut command = Command::new(self.program());
        command
            .args(self.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }

    /// Spawn the tool and wait for it to exit.
    ///
    /// In watch mode this only returns once the child has been terminated.
    pub async fn run(&self) -> Result<()> {
        let status = self
            .command()
            .status()
            .await
            .map_err(|error| Error::Launch {
                program: self.program.clone(),
                source: error,
            })?;

        if !status.success() {
            return Err(Error::Exit {
                command: self.display(),
                status,
            });
        }

        Ok(())
    }
}
