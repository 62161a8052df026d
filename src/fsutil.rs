use std::path::Path;
use std::{fs, io};

/// Longest path the scaffolder will attempt to create; anything beyond this
/// is skipped and reported rather than handed to the OS.
#[cfg(windows)]
pub const PATH_LIMIT: usize = 260;
#[cfg(not(windows))]
pub const PATH_LIMIT: usize = 4096;

/// True if a filesystem entry (file or directory) exists at `path`.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Creates the directory at `path`, along with any missing parents.
/// A pre-existing directory is not an error.
pub fn make_directory(path: &Path) -> io::Result<()> {
    match fs::create_dir_all(path) {
        Err(error) if error.kind() != io::ErrorKind::AlreadyExists => Err(error),
        _ => Ok(()),
    }
}
