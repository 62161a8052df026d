use crate::{
    errors::{FileOperation, IoError},
    fsutil::{self, PATH_LIMIT},
    templates,
};
use colored::Colorize;
use miette::Diagnostic;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a single scaffolding step was skipped. Step failures are reported and
/// never abort the remaining steps.
#[derive(Debug, Error, Diagnostic)]
pub enum StepError {
    #[error("already exists")]
    #[diagnostic(code(projc::scaffold::already_exists))]
    AlreadyExists,

    #[error("path exceeds the platform limit of {limit} bytes")]
    #[diagnostic(code(projc::scaffold::path_too_long))]
    PathTooLong { limit: usize },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

const TREE_DIRS: [&str; 4] = ["lib", "src", "test", "include"];
const MAKEFILES: [&str; 2] = ["Makefile", "Makefile.win"];

/// Creates the `lib`, `src`, `test` and `include` directories under `target`,
/// in that order, one status line per attempt.
pub fn create_tree(target: &Path) {
    for dir in TREE_DIRS {
        let path = target.join(dir);

        match create_dir(&path) {
            Ok(()) => println!("{} {}", "create".green(), path.display()),
            Err(error) => report_skip(&path, &error),
        }
    }
}

/// Creates the template source files: the header in `lib`, then the library,
/// app and test sources, in that fixed order.
pub fn create_files(target: &Path, project: &str) {
    let files = [
        ("lib", format!("{project}.h")),
        ("lib", format!("{project}.c")),
        ("src", format!("{project}_app.c")),
        ("test", format!("{project}_test.c")),
    ];

    for (dir, file_name) in files {
        println!("Creating file {} in {} directory...", file_name, dir);

        let path = target.join(dir).join(&file_name);
        let contents = render_for(project, &file_name);

        match touch(&path, contents) {
            Ok(()) => println!("{} {}", "create".green(), path.display()),
            Err(error) => report_skip(&path, &error),
        }
    }
}

/// Creates `Makefile` and `Makefile.win` at the target root. Both carry the
/// same content.
pub fn create_makes(target: &Path, project: &str) {
    for make in MAKEFILES {
        println!("Creating {}...", make);

        let path = target.join(make);

        match touch(&path, templates::makefile(project)) {
            Ok(()) => println!("{} {}", "create".green(), path.display()),
            Err(error) => report_skip(&path, &error),
        }
    }
}

/// Selects the template by file extension; anything that is neither a header
/// nor a C source gets the fallback body.
fn render_for(project: &str, file_name: &str) -> String {
    match Path::new(file_name).extension().and_then(|ext| ext.to_str()) {
        Some("h") => templates::header(project),
        Some("c") => templates::c_source(project),
        _ => templates::fallback(project),
    }
}

fn report_skip(path: &Path, error: &StepError) {
    log::debug!("skipping {}: {}", path.display(), error);

    println!("{} {} ({})", "skip".yellow(), path.display(), error);
}

/// Creates a single directory, refusing to touch anything already present.
fn create_dir(path: &Path) -> Result<(), StepError> {
    check_length(path)?;

    if fsutil::exists(path) {
        return Err(StepError::AlreadyExists);
    }

    fsutil::make_directory(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.to_path_buf(), error))?;

    Ok(())
}

/// Writes `contents` to a fresh file at `path`. Existing files are never
/// overwritten.
fn touch(path: &Path, contents: String) -> Result<(), StepError> {
    check_length(path)?;

    if fsutil::exists(path) {
        return Err(StepError::AlreadyExists);
    }

    fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.to_path_buf(), error))?;

    Ok(())
}

fn check_length(path: &Path) -> Result<(), StepError> {
    if path.as_os_str().len() > PATH_LIMIT {
        return Err(StepError::PathTooLong { limit: PATH_LIMIT });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaffold_into(target: &Path, project: &str) {
        create_tree(target);
        create_files(target, project);
        create_makes(target, project);
    }

    #[test]
    fn scaffold_produces_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path();

        scaffold_into(target, "foo");

        for sub in ["lib", "src", "test", "include"] {
            assert!(target.join(sub).is_dir());
        }
        for file in [
            "lib/foo.h",
            "lib/foo.c",
            "src/foo_app.c",
            "test/foo_test.c",
            "Makefile",
            "Makefile.win",
        ] {
            assert!(target.join(file).is_file(), "missing {}", file);
        }
    }

    #[test]
    fn generated_contents_match_templates() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path();

        scaffold_into(target, "foo");

        assert_eq!(
            fs::read_to_string(target.join("lib/foo.h")).unwrap(),
            "#ifndef FOO_H\n#define FOO_H\n/* Code goes here */\n\n#endif"
        );
        assert_eq!(
            fs::read_to_string(target.join("lib/foo.c")).unwrap(),
            "#include \"foo.h\"\n\n/* Code goes here */\n\n"
        );
        assert_eq!(
            fs::read_to_string(target.join("Makefile")).unwrap(),
            fs::read_to_string(target.join("Makefile.win")).unwrap()
        );
    }

    #[test]
    fn existing_files_are_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path();

        fs::create_dir(target.join("lib")).unwrap();
        fs::write(target.join("lib/foo.h"), "hands off").unwrap();
        fs::write(target.join("Makefile"), "hands off").unwrap();

        scaffold_into(target, "foo");

        assert_eq!(
            fs::read_to_string(target.join("lib/foo.h")).unwrap(),
            "hands off"
        );
        assert_eq!(
            fs::read_to_string(target.join("Makefile")).unwrap(),
            "hands off"
        );
        // the rest of the scaffold still went through
        assert!(target.join("src/foo_app.c").is_file());
        assert!(target.join("Makefile.win").is_file());
    }

    #[test]
    fn second_run_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path();

        scaffold_into(target, "foo");
        let before = fs::read_to_string(target.join("test/foo_test.c")).unwrap();

        scaffold_into(target, "foo");

        assert_eq!(
            fs::read_to_string(target.join("test/foo_test.c")).unwrap(),
            before
        );
    }

    #[test]
    fn overlong_paths_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let long = "x".repeat(PATH_LIMIT);

        assert!(matches!(
            create_dir(&dir.path().join(long)),
            Err(StepError::PathTooLong { .. })
        ));
    }

    #[test]
    fn project_name_passes_through_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path();

        scaffold_into(target, "my-lib9");

        assert!(target.join("lib/my-lib9.h").is_file());
        assert_eq!(
            fs::read_to_string(target.join("lib/my-lib9.h")).unwrap(),
            "#ifndef MY-LIB9_H\n#define MY-LIB9_H\n/* Code goes here */\n\n#endif"
        );
        assert_eq!(
            fs::read_to_string(target.join("src/my-lib9_app.c")).unwrap(),
            "#include \"my-lib9.h\"\n\n/* Code goes here */\n\n"
        );
    }
}
