//! Developer workflow tasks for the build-css workspace.

use std::{
    env,
    process::{Command, ExitCode, Stdio},
};

fn main() -> ExitCode {
    match parse_command() {
        Some(Task::Tidy) => run_steps(&[fmt, clippy]),
        Some(Task::Test) => run_steps(&[test]),
        None => {
            eprintln!("Usage: cargo xtask <tidy|test>");
            ExitCode::from(2)
        }
    }
}

enum Task {
    Tidy,
    Test,
}

fn parse_command() -> Option<Task> {
    let mut args = env::args().skip(1);
    let task = match args.next().as_deref() {
        Some("tidy") => Task::Tidy,
        Some("test") => Task::Test,
        _ => return None,
    };
    args.next().is_none().then_some(task)
}

fn run_steps(steps: &[fn() -> bool]) -> ExitCode {
    if steps.iter().all(|step| step()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn fmt() -> bool {
    run_command("cargo", &["+nightly", "fmt", "--all"])
}

fn clippy() -> bool {
    run_command(
        "cargo",
        &[
            "clippy",
            "-q",
            "--fix",
            "--all",
            "--all-targets",
            "--allow-dirty",
        ],
    )
}

fn test() -> bool {
    run_command("cargo", &["test", "--workspace", "--all-targets"])
}

fn run_command(program: &str, args: &[&str]) -> bool {
    match Command::new(program)
        .args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
    {
        Ok(status) if status.success() => true,
        Ok(status) => {
            eprintln!("Command `{program}` failed with status {status}");
            false
        }
        Err(err) => {
            eprintln!("Failed to run `{program}`: {err}");
            false
        }
    }
}
