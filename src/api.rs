use crate::{paths, scaffold};
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ProjcError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Paths(#[from] paths::PathError),
}

/// Scaffolds a project under the directory named by `arg`, or under the
/// current directory when no argument is given.
///
/// With an argument, its literal text is the project name and its resolved
/// absolute path is the target directory. Without one, the project name is
/// derived from the current directory's trailing path component.
///
/// # Errors
///
/// Returns a [`ProjcError`] if:
///
/// - The target directory cannot be resolved to an absolute path.
/// - No project name can be derived from the current directory.
///
/// Individual directory or file creation failures are reported per step and
/// never surface here; the full scaffold sequence always runs.
pub fn run(arg: Option<&str>) -> Result<(), ProjcError> {
    let (target, project) = match arg {
        Some(name) => {
            let target = paths::resolve_absolute(Path::new(name))?;

            (target, name.to_string())
        }
        None => {
            let target = paths::resolve_absolute(Path::new("."))?;
            let project = paths::project_name_from(&target)?;

            (target, project)
        }
    };

    log::debug!(
        "scaffolding project '{}' under {}",
        project,
        target.display()
    );

    scaffold::create_tree(&target);
    scaffold::create_files(&target, &project);
    scaffold::create_makes(&target, &project);

    Ok(())
}
