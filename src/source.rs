//! Reading `.kate` documents from disk.

use crate::diagnostic::Diagnostic;
use std::path::{Path, PathBuf};

pub const KATE_EXTENSION: &str = "kate";

#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    WrongExtension { path: PathBuf },
    Unreadable { path: PathBuf, message: String },
}

impl InputError {
    pub fn path(&self) -> &Path {
        match self {
            Self::WrongExtension { path } | Self::Unreadable { path, .. } => path,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.to_string()).with_code("E0001");
        match self {
            Self::WrongExtension { .. } => {
                diagnostic.with_help(format!("rename the file to end in `.{}`", KATE_EXTENSION))
            }
            Self::Unreadable { .. } => diagnostic,
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::WrongExtension { path } => write!(
                f,
                "File {} must have the .{} extension",
                path.display(),
                KATE_EXTENSION
            ),
            InputError::Unreadable { path, message } => {
                write!(f, "Failed to read {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for InputError {}

pub fn has_kate_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == KATE_EXTENSION)
}

pub fn check_extension(path: &Path) -> Result<(), InputError> {
    if has_kate_extension(path) {
        Ok(())
    } else {
        Err(InputError::WrongExtension {
            path: path.to_path_buf(),
        })
    }
}

/// Reads a whole document after checking its extension.
pub fn read_source(path: &Path) -> Result<String, InputError> {
    check_extension(path)?;
    std::fs::read_to_string(path).map_err(|e| InputError::Unreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Splits a document into lines, each keeping its trailing newline.
pub fn split_lines(source: &str) -> Vec<&str> {
    source.split_inclusive('\n').collect()
}

pub fn read_lines(path: &Path) -> Result<Vec<String>, InputError> {
    let source = read_source(path)?;
    Ok(split_lines(&source).into_iter().map(str::to_string).collect())
}
