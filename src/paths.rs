use crate::errors::{FileOperation, IoError};
use miette::Diagnostic;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PathError {
    #[error("I/O error within path domain")]
    #[diagnostic(code(projc::paths::io))]
    Io(#[from] IoError),

    #[error("unable to derive a project name from '{path}'")]
    #[diagnostic(
        code(projc::paths::no_project_name),
        help("Pass the project name as an argument: projc <name>")
    )]
    NoProjectName { path: PathBuf },
}

/// Resolves `path` to an absolute path.
///
/// Existing paths go through the host's canonicalization. A path that does
/// not exist yet (the explicit-argument case, where the target directory is
/// materialized during scaffolding) is absolutized lexically against the
/// current directory instead.
pub fn resolve_absolute(path: &Path) -> Result<PathBuf, PathError> {
    match std::fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            let current = std::env::current_dir().map_err(|error| {
                IoError::new(FileOperation::Resolve, path.to_path_buf(), error)
            })?;

            Ok(normalize_path(&current.join(path)))
        }
        Err(error) => Err(IoError::new(FileOperation::Resolve, path.to_path_buf(), error).into()),
    }
}

/// Lexically normalizes a path: drops `.` components and pops on `..`.
fn normalize_path(source: &Path) -> PathBuf {
    let mut new_path = PathBuf::new();

    for component in source.components() {
        match component {
            // Skip the current-dir marker "."
            Component::CurDir => {}

            // For "..", pop the last component if possible
            Component::ParentDir => {
                new_path.pop();
            }

            // For normal components, push them
            other => new_path.push(other.as_os_str()),
        }
    }

    new_path
}

/// Derives the project name from the trailing component of `path`, scanning
/// the string from the end for the last platform separator.
///
/// Fails if no separator occurs, or if the trailing component is empty (the
/// filesystem root), since that would produce nameless artifacts.
pub fn project_name_from(path: &Path) -> Result<String, PathError> {
    let text = path.to_string_lossy();

    let name = text
        .rfind(MAIN_SEPARATOR)
        .map(|index| &text[index + MAIN_SEPARATOR.len_utf8()..])
        .filter(|component| !component.is_empty())
        .ok_or_else(|| PathError::NoProjectName {
            path: path.to_path_buf(),
        })?;

    Ok(name.to_string())
}

/// Maps ASCII lowercase letters to uppercase, leaving every other character
/// untouched. Used only for header-guard tokens.
pub fn to_upper_ascii(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}
