//! Base directory discovery and stylesheet path construction.

use std::{
    env,
    path::{MAIN_SEPARATOR, Path, PathBuf},
};

use path_clean::PathClean;

use crate::error::{Error, Result};

/// Stylesheet directory relative to the base directory.
const CSS_DIR: [&str; 2] = ["static", "css"];
/// File name of the stylesheet the tool reads.
const INPUT_FILE: &str = "input.css";
/// File name of the stylesheet the tool writes.
const OUTPUT_FILE: &str = "output.css";

/// Input and output stylesheet locations handed to the CSS tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetPaths {
    /// Stylesheet read by the tool.
    pub input: PathBuf,
    /// Stylesheet written by the tool.
    pub output: PathBuf,
}

impl StylesheetPaths {
    /// Compute the stylesheet paths under a base directory.
    ///
    /// The paths are neither validated nor checked for existence.
    pub fn under(base: &Path) -> Self {
        let css_dir = CSS_DIR.iter().fold(base.to_path_buf(), |dir, part| dir.join(part));
        Self {
            input: css_dir.join(INPUT_FILE),
            output: css_dir.join(OUTPUT_FILE),
        }
    }
}

/// Return the directory containing the running executable.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|error| Error::ExecutableDir { source: error })?;
    let dir = exe
        .parent()
        .ok_or_else(|| Error::InvalidPath { path: exe.clone() })?;
    Ok(normalize_path(dir))
}

/// Resolve the base directory from an optional override.
pub fn base_dir(root: Option<&str>) -> Result<PathBuf> {
    match root {
        Some(raw) => {
            let cwd = env::current_dir().map_err(|error| Error::CurrentDir { source: error })?;
            expand_path(raw, &cwd)
        }
        None => executable_dir(),
    }
}

/// Expand a user-provided path and resolve it relative to a base directory.
pub fn expand_path(raw: &str, base_dir: &Path) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).map_err(|error| Error::PathExpansion {
        path: raw.to_string(),
        source: error,
    })?;
    let expanded_path = PathBuf::from(expanded.as_ref());
    let resolved = if expanded_path.is_relative() {
        base_dir.join(expanded_path)
    } else {
        expanded_path
    };
    Ok(normalize_path(&resolved))
}

/// Normalize a path by canonicalizing when possible and cleaning otherwise.
pub fn normalize_path(path: &Path) -> PathBuf {
    match dunce::canonicalize(path) {
        Ok(canonical) => canonical,
        Err(_) => path.clean(),
    }
}

/// Render a path for display, using a tilde prefix for the home directory.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}
