//! Test utilities for setting up a project layout on disk.
//!
//! `TestProject` creates an isolated base directory holding the stylesheet
//! tree and, optionally, a `build-css.toml`.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;
use toml::Value;

use crate::{config::CONFIG_FILE_NAME, paths::StylesheetPaths};

/// Minimal Tailwind entry stylesheet.
pub const INPUT_CSS: &str = "@import \"tailwindcss\";\n";

/// Isolated project directory with a `static/css/input.css`.
pub struct TestProject {
    /// Temp directory that owns the project.
    _root: TempDir,
    /// Base directory of the project.
    dir: PathBuf,
}

impl TestProject {
    /// Create a project with an input stylesheet and no config file.
    pub fn new() -> Self {
        let root = TempDir::new().expect("create temp dir");
        let dir = root.path().join("site");
        let paths = StylesheetPaths::under(&dir);
        let css_dir = paths.input.parent().expect("css dir");
        fs::create_dir_all(css_dir).expect("create css dir");
        fs::write(&paths.input, INPUT_CSS).expect("write input stylesheet");
        Self { _root: root, dir }
    }

    /// Write a `build-css.toml` with the given contents.
    pub fn with_config(self, contents: &str) -> Self {
        fs::write(self.dir.join(CONFIG_FILE_NAME), contents).expect("write config");
        self
    }

    /// Write a config whose tool command is `sh -c <script>`.
    pub fn with_shell_tool(self, script: &str) -> Self {
        let command = shell_words::join(["sh", "-c", script]);
        let contents = format!("command = {}\n", toml_string(&command));
        self.with_config(&contents)
    }

    /// Return the base directory.
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Return the base directory as a `--root` value.
    pub fn root_arg(&self) -> String {
        self.dir.to_string_lossy().into_owned()
    }

    /// Return the stylesheet paths under the base directory.
    pub fn stylesheets(&self) -> StylesheetPaths {
        StylesheetPaths::under(&self.dir)
    }
}

/// Quote a value as a TOML basic string.
fn toml_string(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}
